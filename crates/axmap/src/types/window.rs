/*! Result of a successful window resolution. */

use super::Identifier;

/// A resolved window: the live handle plus the identifier it was registered
/// under. The identifier is the key into the per-window object maps, so
/// callers that go on to resolve objects must keep it.
#[derive(Debug, Clone)]
pub struct WindowMatch<H> {
  /// Element handle for the window, borrowed from the external tree.
  pub handle: H,
  /// Registry identifier the window resolved to (e.g. `wndMyApp`).
  pub ident: Identifier,
}
