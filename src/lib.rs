//! Word Suggester
//!
//! Wildcard word lookup for crossword and Scrabble helpers. Patterns mix fixed
//! letters with `*` wildcards; matches come back in dictionary order.
//!
//! # Quick Start
//!
//! ```rust
//! use word_suggester::matcher::{LengthRule, Suggester};
//!
//! let (suggester, diagnostics) = Suggester::new(["cat", "cut", "cats", "dog"]);
//! assert!(diagnostics.is_empty());
//!
//! // Exactly three letters, C first and T last
//! assert_eq!(suggester.suggest("c*t", LengthRule::Exact), vec!["CAT", "CUT"]);
//!
//! // At least three letters
//! assert_eq!(
//!     suggester.suggest("c*t", LengthRule::AtLeast),
//!     vec!["CAT", "CUT", "CATS"]
//! );
//! ```

// Core domain types
pub mod core;

// Word storage and position index
pub mod dictionary;

// Pattern matching engine
pub mod matcher;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
