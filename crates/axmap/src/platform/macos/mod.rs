/*!
macOS platform adapter.

All AX API access lives here; the rest of the crate sees only the traits in
`platform/traits.rs`.
*/

#![allow(unsafe_code)]

mod element;

pub use element::AxElement;

use objc2_app_kit::NSWorkspace;
use objc2_application_services::{AXIsProcessTrusted, AXUIElement};

use super::{AppHandle, Platform};
use crate::types::{AxmapError, AxmapResult};

/// Reference to a running application.
#[derive(Debug, Clone, Copy)]
pub struct AppRef {
  pid: i32,
}

impl AppHandle for AppRef {
  fn pid(&self) -> i32 {
    self.pid
  }
}

/// The macOS accessibility platform.
///
/// Construction verifies the process is trusted for accessibility API use;
/// nothing else about the adapter is fallible up front.
#[derive(Debug, Clone, Copy)]
pub struct MacPlatform {
  _priv: (),
}

impl MacPlatform {
  /// Create the adapter, checking accessibility trust.
  pub fn new() -> AxmapResult<Self> {
    if !has_permissions() {
      log::warn!("process is not trusted for accessibility API use");
      return Err(AxmapError::PermissionDenied);
    }
    Ok(Self { _priv: () })
  }
}

/// Check if accessibility permissions are granted.
fn has_permissions() -> bool {
  unsafe { AXIsProcessTrusted() }
}

impl Platform for MacPlatform {
  type App = AppRef;
  type Element = AxElement;

  fn running_applications(&self) -> Vec<AppRef> {
    let workspace = unsafe { NSWorkspace::sharedWorkspace() };
    let apps = unsafe { workspace.runningApplications() };
    apps
      .iter()
      .map(|app| AppRef {
        pid: unsafe { app.processIdentifier() },
      })
      .collect()
  }

  fn app_element(&self, pid: i32) -> Option<AxElement> {
    let element = unsafe { AXUIElement::new_application(pid) };
    Some(AxElement::new(element))
  }
}
