/*!
Fuzzy name matching.

Caller-supplied names may carry shell-glob wildcards, and may or may not
include the decoration (spaces, punctuation) that derivation strips from
identifiers. Each candidate is therefore tried in three textual forms - key,
stored label, stripped label - against two compiled patterns - the raw name
and the name with the same strip rule applied. The first of the six attempts
to hit wins.
*/

use globset::{Glob, GlobMatcher};

use super::ident;
use crate::types::Identifier;

/// One compiled pattern form: an anchored glob, or the literal text when the
/// glob does not compile (`globset` rejects e.g. unclosed character classes
/// that shell-style matchers elsewhere tolerate).
enum PatternForm {
  Glob(GlobMatcher),
  Literal(String),
}

impl PatternForm {
  fn compile(text: &str) -> Self {
    match Glob::new(text) {
      Ok(glob) => Self::Glob(glob.compile_matcher()),
      Err(err) => {
        log::debug!("name {text:?} is not a valid glob ({err}); matching literally");
        Self::Literal(text.to_owned())
      }
    }
  }

  fn is_match(&self, candidate: &str) -> bool {
    match self {
      Self::Glob(matcher) => matcher.is_match(candidate),
      Self::Literal(text) => text == candidate,
    }
  }
}

/// A caller name compiled for one lookup.
pub(crate) struct NamePattern {
  raw: PatternForm,
  stripped: PatternForm,
  window_like: bool,
}

impl NamePattern {
  /// Compile `name` under the strip rule of the domain it queries: window
  /// lookups strip whitespace only, object lookups also strip punctuation.
  pub(crate) fn compile(name: &str, window_like: bool) -> Self {
    let stripped = ident::normalize_label(name, window_like);
    Self {
      raw: PatternForm::compile(name),
      stripped: PatternForm::compile(&stripped),
      window_like,
    }
  }

  /// Test one registry candidate by key and stored label.
  pub(crate) fn matches(&self, key: &Identifier, label: &str) -> bool {
    let stripped_label = ident::normalize_label(label, self.window_like);
    let candidates = [key.as_str(), label, stripped_label.as_str()];
    let matched = candidates
      .into_iter()
      .any(|candidate| self.raw.is_match(candidate) || self.stripped.is_match(candidate));
    matched
  }
}
