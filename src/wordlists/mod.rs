//! Dictionaries for word suggestion
//!
//! Provides an embedded dictionary compiled into the binary and loaders for
//! user-supplied word lists.

mod embedded;
pub mod loader;

pub use embedded::{EMBEDDED, EMBEDDED_COUNT};
