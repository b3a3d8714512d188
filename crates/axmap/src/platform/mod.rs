/*!
Platform capability layer.

Core code only uses the traits defined here - never platform-specific types
directly. The macOS adapter lives in `macos/`; tests script the capability
through `fake`.
*/

mod traits;

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(test)]
pub(crate) mod fake;

pub use traits::{AppHandle, ElementHandle, Platform};
