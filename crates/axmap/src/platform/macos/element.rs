/*!
Opaque `AXUIElement` wrapper with safe accessor methods.

All element-level unsafe code is encapsulated here. Attribute reads that the
host refuses (`AXError` other than success) surface as `None`, which is what
the derivation fallback chain expects.
*/

#![allow(unsafe_code)]

use std::ptr::NonNull;

use objc2_application_services::{AXError, AXUIElement};
use objc2_core_foundation::{CFArray, CFNumber, CFRetained, CFString, CFType};

use crate::platform::ElementHandle;

/// Opaque handle to a UI element. Clone is cheap (reference counted).
#[derive(Clone)]
pub struct AxElement {
  inner: CFRetained<AXUIElement>,
}

impl std::fmt::Debug for AxElement {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AxElement").finish_non_exhaustive()
  }
}

impl AxElement {
  pub(in crate::platform) const fn new(element: CFRetained<AXUIElement>) -> Self {
    Self { inner: element }
  }

  /// Fetch a raw `CFType` attribute value.
  fn get_raw_attr(&self, attr: &CFString) -> Option<CFRetained<CFType>> {
    unsafe {
      let mut value: *const CFType = std::ptr::null();
      let result = self
        .inner
        .copy_attribute_value(attr, NonNull::new(&raw mut value)?);
      if result != AXError::Success || value.is_null() {
        return None;
      }
      Some(CFRetained::from_raw(NonNull::new_unchecked(
        value.cast_mut(),
      )))
    }
  }

  /// Get a string attribute by name. Empty strings read as absent.
  fn get_string(&self, attr: &str) -> Option<String> {
    let value = self.get_raw_attr(&CFString::from_str(attr))?;
    let s = value.downcast_ref::<CFString>()?.to_string();
    if s.is_empty() {
      None
    } else {
      Some(s)
    }
  }

  /// Get an array-of-elements attribute (`AXChildren`, `AXWindows`).
  /// Null slots in the host array are preserved as `None`.
  fn get_elements(&self, attr: &CFString) -> Vec<Option<AxElement>> {
    let Some(value) = self.get_raw_attr(attr) else {
      return Vec::new();
    };
    let Some(array) = value.downcast::<CFArray>().ok() else {
      return Vec::new();
    };
    // SAFETY: AXChildren/AXWindows always return arrays of AXUIElements
    let typed: CFRetained<CFArray<AXUIElement>> = unsafe { CFRetained::cast_unchecked(array) };

    let len = typed.len();
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
      out.push(typed.get(i).map(AxElement::new));
    }
    out
  }

  fn children(&self) -> Vec<AxElement> {
    self
      .get_elements(&CFString::from_static_str("AXChildren"))
      .into_iter()
      .flatten()
      .collect()
  }
}

impl ElementHandle for AxElement {
  fn role(&self) -> Option<String> {
    self.get_string("AXRole")
  }

  fn title(&self) -> Option<String> {
    self.get_string("AXTitle")
  }

  fn value_text(&self) -> Option<String> {
    let value = self.get_raw_attr(&CFString::from_static_str("AXValue"))?;
    if let Some(s) = value.downcast_ref::<CFString>() {
      let s = s.to_string();
      return if s.is_empty() { None } else { Some(s) };
    }
    // Toggle-like elements carry numeric values; render them as text so
    // the label fallback chain can still use them.
    value
      .downcast_ref::<CFNumber>()
      .and_then(CFNumber::as_i64)
      .map(|n| n.to_string())
  }

  fn help_text(&self) -> Option<String> {
    self.get_string("AXHelp")
  }

  fn role_description(&self) -> Option<String> {
    self.get_string("AXRoleDescription")
  }

  fn windows(&self) -> Vec<Option<Self>> {
    self.get_elements(&CFString::from_static_str("AXWindows"))
  }

  fn descendants(&self) -> Vec<Self> {
    // Breadth-first and iterative: deep trees would overflow a recursive
    // walk, and top-down order keeps disambiguation suffixes stable.
    let mut out = Vec::new();
    let mut queue: std::collections::VecDeque<AxElement> = self.children().into();
    while let Some(element) = queue.pop_front() {
      queue.extend(element.children());
      out.push(element);
    }
    out
  }
}

unsafe impl Send for AxElement {}
unsafe impl Sync for AxElement {}
