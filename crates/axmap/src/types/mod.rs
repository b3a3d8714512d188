/*! Core public types for axmap. */

mod config;
mod error;
mod ident;
mod window;

pub use config::ResolverConfig;
pub use error::{AxmapError, AxmapResult};
pub use ident::Identifier;
pub use window::WindowMatch;
