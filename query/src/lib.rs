//! Triplet Query
//!
//! Evaluate conjunctions of triple patterns and post-process the solutions.
//!
//! Responsibilities:
//! - Build queries from patterns or from a pre-computed solution sequence
//! - Join patterns left to right, propagating bound variables
//! - Apply projection, distinct/reduced, offset and limit in that order

mod error;
mod executor;
mod modifiers;
mod options;
mod query;
mod result;

pub use error::{QueryError, QueryResult};
pub use executor::QueryExecutor;
pub use options::{Dedup, QueryOptions};
pub use query::{Query, QueryBuilder};
pub use result::Solutions;

pub use triplet_pattern::{Pattern, PatternBuilder, Solution};
