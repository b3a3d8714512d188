/*!
Retrying resolution.

Window and object resolution run the same bounded state machine: match
against the current registry snapshot, and while attempts remain, sleep one
interval, force-rebuild the relevant registry only, and try again. The match
steps are pure functions over a registry snapshot, which keeps the retry
policy a visible, testable control structure.
*/

use std::thread;

use super::matcher::NamePattern;
use super::registry::Registry;
use super::Axmap;
use crate::platform::{ElementHandle, Platform};
use crate::types::{AxmapError, AxmapResult, Identifier, WindowMatch};

/// One pass over a window registry.
fn match_window_once<H: ElementHandle>(
  registry: &Registry<H>,
  pattern: &NamePattern,
) -> Option<WindowMatch<H>> {
  registry.iter().find_map(|(key, entry)| {
    pattern.matches(key, &entry.label).then(|| WindowMatch {
      handle: entry.handle.clone(),
      ident: key.clone(),
    })
  })
}

/// One pass over an object registry. The type filter is a hard precondition:
/// a role mismatch skips the candidate before any name matching happens.
fn match_object_once<H: ElementHandle>(
  registry: &Registry<H>,
  pattern: &NamePattern,
  of_type: Option<&str>,
) -> Option<H> {
  registry.iter().find_map(|(key, entry)| {
    if of_type.is_some_and(|t| t != entry.role) {
      return None;
    }
    pattern.matches(key, &entry.label).then(|| entry.handle.clone())
  })
}

impl<P: Platform> Axmap<P> {
  /// Resolve a window name pattern to a live handle and the identifier it
  /// is registered under.
  ///
  /// Misses force a full window re-enumeration between attempts, up to the
  /// configured budget. An empty name resolves to nothing without touching
  /// the tree.
  pub fn resolve_window(&mut self, name: &str) -> Option<WindowMatch<P::Element>> {
    if name.is_empty() {
      return None;
    }
    let pattern = NamePattern::compile(name, true);
    let budget = self.config.window_retries.max(1);
    for attempt in 1..=budget {
      let found = match_window_once(self.windows(attempt > 1), &pattern);
      if found.is_some() {
        return found;
      }
      if attempt < budget {
        log::trace!("window {name:?} not found (attempt {attempt}/{budget}); retrying");
        thread::sleep(self.config.retry_interval());
      }
    }
    log::debug!("window {name:?} not found after {budget} attempts");
    None
  }

  /// Resolve an object inside the window matching `window`.
  ///
  /// The window phase runs first and its exhaustion is a hard failure;
  /// object exhaustion is `Ok(None)` and the caller decides whether that is
  /// fatal. `of_type` restricts candidates to one raw role (e.g.
  /// `AXCheckBox`). With `wait_for_object` unset the object phase gets a
  /// single attempt and never sleeps.
  pub fn resolve_object(
    &mut self,
    window: &str,
    object: &str,
    of_type: Option<&str>,
    wait_for_object: bool,
  ) -> AxmapResult<Option<P::Element>> {
    let Some(win) = self.resolve_window(window) else {
      return Err(AxmapError::WindowNotFound {
        pattern: window.to_owned(),
      });
    };

    let pattern = NamePattern::compile(object, false);
    let budget = if wait_for_object {
      self.config.object_retries.max(1)
    } else {
      1
    };
    for attempt in 1..=budget {
      let registry = self.object_map(Some(&win.handle), &win.ident, attempt > 1);
      if let Some(handle) = match_object_once(registry, &pattern, of_type) {
        return Ok(Some(handle));
      }
      if attempt < budget {
        log::trace!(
          "object {object:?} not found in {} (attempt {attempt}/{budget}); retrying",
          win.ident
        );
        thread::sleep(self.config.retry_interval());
      }
    }
    log::debug!("object {object:?} not found in {}", win.ident);
    Ok(None)
  }

  /// Identifiers of every known window, from the cache when warm.
  pub fn window_names(&mut self) -> Vec<Identifier> {
    self.windows(false).idents().cloned().collect()
  }

  /// Identifiers of every object inside the window matching `window`.
  ///
  /// # Errors
  ///
  /// [`AxmapError::WindowNotFound`] when the window phase exhausts its
  /// budget.
  pub fn object_names(&mut self, window: &str) -> AxmapResult<Vec<Identifier>> {
    let Some(win) = self.resolve_window(window) else {
      return Err(AxmapError::WindowNotFound {
        pattern: window.to_owned(),
      });
    };
    Ok(
      self
        .object_map(Some(&win.handle), &win.ident, false)
        .idents()
        .cloned()
        .collect(),
    )
  }
}
