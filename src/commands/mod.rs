//! Command implementations

pub mod batch;
pub mod interactive;
pub mod query;
pub mod stats;

pub use batch::{BatchEntry, BatchResult, run_batch};
pub use interactive::run_interactive;
pub use query::{LengthResult, QueryResult, run_length, run_query};
pub use stats::{DictionaryStats, collect_stats};
