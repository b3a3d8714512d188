/*!
The canonical identifier text type.

Every derived name - `wndMyApp`, `btnOK`, `chkAccept1` - is an [`Identifier`]:
one well-defined text form produced by one normalization function, regardless
of what encoding or decoration the host element carried.
*/

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// A derived, registry-unique element identifier.
#[derive(
  Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into, Serialize, Deserialize,
)]
pub struct Identifier(String);

impl Identifier {
  /// View as a plain string slice.
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for Identifier {
  fn from(s: &str) -> Self {
    Self(s.to_owned())
  }
}
