/*!
Role classification.

Raw platform role strings are mapped to the short codes that prefix derived
identifiers, plus the two predicates derivation branches on.
*/

mod role;

pub use role::{abbreviated_role, UNKNOWN_ROLE};
pub(crate) use role::{is_checkbox_role, is_window_role};
