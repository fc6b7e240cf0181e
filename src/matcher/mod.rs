//! Pattern matching over an indexed dictionary
//!
//! Queries are answered by intersecting the sorted id lists of each fixed
//! letter. Wildcard-only patterns fall back to a length scan.

mod engine;
mod intersect;
mod rule;

pub use engine::Suggester;
pub use rule::LengthRule;
