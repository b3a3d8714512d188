/*!
Identifier derivation.

Turns an opaque element into the abbreviated-role + normalized-label pair
that registries key on. Attribute reads the host refuses are soft failures:
each one just advances the fallback chain.
*/

use crate::a11y;
use crate::platform::ElementHandle;

/// Derivation output for one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Derived {
  /// Short code prefixing the identifier (e.g. `btn`).
  pub(crate) abbrev: &'static str,
  /// Raw platform role, stored so type filters can compare against it.
  pub(crate) raw_role: String,
  /// Normalized label; empty when no label source resolves.
  pub(crate) label: String,
}

/// Read role and label from `handle` and normalize per the role's strip rule.
///
/// A role that cannot be read at all derives as the unknown code with the
/// label alone carrying the identity.
pub(crate) fn derive<H: ElementHandle>(handle: &H) -> Derived {
  let raw_role = handle.role().unwrap_or_default();
  let label = read_label(handle, &raw_role).unwrap_or_default();
  let label = normalize_label(&label, a11y::is_window_role(&raw_role));
  Derived {
    abbrev: a11y::abbreviated_role(&raw_role),
    raw_role,
    label,
  }
}

/// Label source fallback chain: help text first for checkboxes (some hosts
/// set neither title nor value on those), then title, value, and role
/// description.
fn read_label<H: ElementHandle>(handle: &H, raw_role: &str) -> Option<String> {
  if a11y::is_checkbox_role(raw_role) {
    if let Some(help) = handle.help_text() {
      return Some(help);
    }
  }
  handle
    .title()
    .or_else(|| handle.value_text())
    .or_else(|| handle.role_description())
}

/// Strip the derivation character set from a raw label.
///
/// Window labels lose only whitespace (newlines included); all other labels
/// additionally lose `:`, `.` and `_`. Idempotent: stripping a stripped
/// label changes nothing.
pub(crate) fn normalize_label(raw: &str, window_like: bool) -> String {
  raw
    .chars()
    .filter(|&c| {
      if c.is_whitespace() {
        return false;
      }
      window_like || !matches!(c, ':' | '.' | '_')
    })
    .collect()
}
