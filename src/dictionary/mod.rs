//! Dictionary storage and indexing
//!
//! The store owns the word text; the index maps letter positions to word ids.
//! Both are built once and never change afterwards.

mod diagnostic;
mod index;
mod store;

pub use diagnostic::Diagnostic;
pub use index::PositionIndex;
pub use store::{DictionaryStore, WordId};
