//! Triplet Pattern
//!
//! Build triple patterns and match them against a graph.
//!
//! Responsibilities:
//! - Validate the shape of a pattern at construction time
//! - Represent variable-to-term solutions
//! - Find every statement that satisfies one pattern
//! - Substitute already-bound variables before matching

mod error;
mod matcher;
mod pattern;
mod solution;

pub use error::{PatternError, PatternResult};
pub use matcher::Matcher;
pub use pattern::{Pattern, PatternBuilder};
pub use solution::Solution;
