/*!
axmap - fuzzy name resolution and caching over a live accessibility tree.

Given a human-typed, possibly-glob window or widget name, resolve it to a
live element handle while the tree changes underneath: enumerations are
cached and tolerated stale, misses force a full rebuild and retry within a
bounded budget, and derived identifiers stay unique even when elements share
a label.

```ignore
use axmap::Axmap;

let mut axmap = Axmap::new()?; // macOS; checks accessibility trust

// Windows first: the resolved identifier keys the per-window object maps.
let win = axmap.resolve_window("TextEdit*");

// Then objects inside, with glob names and an optional raw-role filter.
let ok = axmap.resolve_object("TextEdit*", "OK", Some("AXButton"), true)?;

// Tree changed shape? Drop the caches; the next lookup re-enumerates.
axmap.invalidate_windows();
```

Resolution is single-threaded by contract: every operation takes `&mut self`,
and the only pauses are the blocking sleeps between retry attempts.
*/

mod core;
mod platform;

pub mod a11y;

mod types;
pub use types::*;

pub use crate::core::{Axmap, AxmapBuilder, Registry, RegistryEntry};
pub use crate::platform::{AppHandle, ElementHandle, Platform};

#[cfg(target_os = "macos")]
pub use crate::platform::macos::{AppRef, AxElement, MacPlatform};
