/*!
Window and object-map caches.

Both caches trade efficiency for correctness against a tree that can change
shape arbitrarily between calls: a forced refresh re-enumerates in full and
replaces the previous registry wholesale. Partial or incremental update is
deliberately unsupported.
*/

use super::registry::Registry;
use super::Axmap;
use crate::platform::{AppHandle, ElementHandle, Platform};
use crate::types::Identifier;

impl<P: Platform> Axmap<P> {
  /// The window registry, rebuilding when `force` is set or nothing is
  /// cached yet. An unforced call on a warm cache touches nothing.
  pub(crate) fn windows(&mut self, force: bool) -> &Registry<P::Element> {
    if force || self.windows.is_none() {
      let rebuilt = self.enumerate_windows();
      log::debug!("window cache rebuilt: {} windows", rebuilt.len());
      self.windows = Some(rebuilt);
    }
    self.windows.get_or_insert_with(Registry::new)
  }

  /// Drop the window registry; the next lookup re-enumerates.
  pub fn invalidate_windows(&mut self) {
    self.windows = None;
  }

  fn enumerate_windows(&mut self) -> Registry<P::Element> {
    self.apps = self.platform.running_applications();
    let mut registry = Registry::new();
    for app in &self.apps {
      let Some(root) = self.platform.app_element(app.pid()) else {
        continue;
      };
      for window in root.windows().into_iter().flatten() {
        registry.insert(window);
      }
    }
    registry
  }

  /// The object map for one window, rebuilding when `force` is set or no
  /// map exists for `name` yet.
  ///
  /// A missing handle or an empty window name yields an empty registry, not
  /// an error: the caller simply finds nothing downstream.
  pub(crate) fn object_map(
    &mut self,
    window: Option<&P::Element>,
    name: &Identifier,
    force: bool,
  ) -> &Registry<P::Element> {
    let Some(handle) = window else {
      return &self.empty_objects;
    };
    if name.as_str().is_empty() {
      return &self.empty_objects;
    }

    if force || !self.object_maps.contains_key(name) {
      let mut registry = Registry::new();
      for element in handle.descendants() {
        registry.insert(element);
      }
      log::debug!("object map {name} rebuilt: {} entries", registry.len());
      self.object_maps.insert(name.clone(), registry);
    }
    self.object_maps.get(name).unwrap_or(&self.empty_objects)
  }

  /// Drop the object map for one window; other windows' maps are untouched.
  pub fn invalidate_object_map(&mut self, window: &Identifier) {
    self.object_maps.remove(window);
  }
}
