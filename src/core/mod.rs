//! Core domain types for word matching
//!
//! This module contains the fundamental value types with zero external dependencies:
//! validated dictionary words and parsed query patterns.

mod pattern;
mod word;

pub use pattern::{Pattern, PatternError, WILDCARD};
pub use word::{MAX_LEN, Word, WordError, normalize};
