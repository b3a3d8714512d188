/*!
Platform abstraction traits.

These traits define the contract between core code and platform
implementations. Every attribute accessor returns `Option`: hosts routinely
refuse individual attributes ("attribute unsupported") and hand back handles
that stopped answering, and both read as absence here, never as errors.
*/

/// Platform-global operations: the process list and per-process
/// accessibility roots.
pub trait Platform {
  /// Running-application reference type.
  type App: AppHandle;
  /// Element handle type for this platform.
  type Element: ElementHandle;

  /// Snapshot the currently running applications.
  fn running_applications(&self) -> Vec<Self::App>;

  /// Root accessibility element for a process, if one can be created.
  fn app_element(&self, pid: i32) -> Option<Self::Element>;
}

/// Reference to a running application.
pub trait AppHandle: Clone {
  /// Process id of the application.
  fn pid(&self) -> i32;
}

/// Opaque handle to a UI element. Clone is cheap (reference-counted on real
/// platforms); the core reads through handles but never owns the elements
/// behind them.
pub trait ElementHandle: Clone {
  /// Raw platform role string (e.g. `AXWindow`).
  fn role(&self) -> Option<String>;

  /// Title attribute.
  fn title(&self) -> Option<String>;

  /// Value attribute, rendered as text.
  fn value_text(&self) -> Option<String>;

  /// Help text. Some hosts set only this on checkboxes.
  fn help_text(&self) -> Option<String>;

  /// Human-readable role description, the label source of last resort.
  fn role_description(&self) -> Option<String>;

  /// Top-level windows of an application element. Empty slots happen when
  /// the host hands back a stale entry; callers skip them.
  fn windows(&self) -> Vec<Option<Self>>;

  /// Every descendant of this element, recursively.
  fn descendants(&self) -> Vec<Self>;
}
