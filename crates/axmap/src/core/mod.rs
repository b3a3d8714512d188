/*!
Core resolver facade - owns the caches and the retry configuration.

# Module structure

- `mod.rs` - `Axmap` struct, builder, construction
- `ident.rs` - identifier derivation
- `registry.rs` - identifier-keyed registries with collision resolution
- `matcher.rs` - glob name matching
- `caches.rs` - window cache, object-map cache, running-apps snapshot
- `resolve.rs` - bounded retrying resolution

# Example

```ignore
use axmap::Axmap;

let mut axmap = Axmap::new()?;
if let Some(win) = axmap.resolve_window("TextEdit*") {
    let ok = axmap.resolve_object("TextEdit*", "OK", Some("AXButton"), true)?;
}
```
*/

mod caches;
mod ident;
mod matcher;
mod registry;
mod resolve;

pub use registry::{Registry, RegistryEntry};

use std::collections::HashMap;

use crate::platform::Platform;
use crate::types::{Identifier, ResolverConfig};

/// Name-resolution engine over one platform's accessibility tree.
///
/// Owns all resolution state: the window registry, the per-window object
/// maps and the running-applications snapshot. Every operation takes
/// `&mut self` and there is no internal locking - one logical thread of
/// control per resolution request; concurrent callers must be serialized by
/// the host.
pub struct Axmap<P: Platform> {
  platform: P,
  config: ResolverConfig,
  apps: Vec<P::App>,
  windows: Option<Registry<P::Element>>,
  object_maps: HashMap<Identifier, Registry<P::Element>>,
  /// Handed out by reference for degenerate object-map lookups.
  empty_objects: Registry<P::Element>,
}

impl<P: Platform> std::fmt::Debug for Axmap<P> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Axmap").finish_non_exhaustive()
  }
}

impl<P: Platform> Axmap<P> {
  /// Create a resolver over `platform` with the default retry budgets.
  pub fn with_platform(platform: P) -> Self {
    Self::builder().build(platform)
  }

  /// Create a builder to adjust retry budgets and pacing.
  pub fn builder() -> AxmapBuilder {
    AxmapBuilder::default()
  }

  /// The active retry configuration.
  pub const fn config(&self) -> &ResolverConfig {
    &self.config
  }
}

#[cfg(target_os = "macos")]
impl Axmap<crate::platform::macos::MacPlatform> {
  /// Create a resolver over the macOS accessibility API.
  ///
  /// Fails with [`crate::AxmapError::PermissionDenied`] when the process is
  /// not trusted for accessibility use.
  pub fn new() -> crate::types::AxmapResult<Self> {
    Ok(Self::with_platform(crate::platform::macos::MacPlatform::new()?))
  }
}

/// Builder for configuring an [`Axmap`] instance.
#[derive(Debug, Default, Clone, Copy)]
#[must_use = "builder does nothing until .build() is called"]
pub struct AxmapBuilder {
  config: ResolverConfig,
}

impl AxmapBuilder {
  /// Match attempts for window resolution. Default: 5.
  pub const fn window_retries(mut self, attempts: u32) -> Self {
    self.config.window_retries = attempts;
    self
  }

  /// Match attempts for object resolution when waiting. Default: 5.
  pub const fn object_retries(mut self, attempts: u32) -> Self {
    self.config.object_retries = attempts;
    self
  }

  /// Pause between attempts in milliseconds. Default: 1000.
  pub const fn retry_interval_ms(mut self, ms: u64) -> Self {
    self.config.retry_interval_ms = ms;
    self
  }

  /// Start from an existing configuration (e.g. one the host deserialized).
  pub const fn config(mut self, config: ResolverConfig) -> Self {
    self.config = config;
    self
  }

  /// Build the resolver over `platform`.
  pub fn build<P: Platform>(self, platform: P) -> Axmap<P> {
    Axmap {
      platform,
      config: self.config,
      apps: Vec::new(),
      windows: None,
      object_maps: HashMap::new(),
      empty_objects: Registry::default(),
    }
  }
}
