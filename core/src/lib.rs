//! Triplet Core Types
//!
//! This crate provides the foundational types used throughout triplet:
//! - Terms (IRIs, blank nodes, literals, variables)
//! - Literals with XSD-aware value equality
//! - Ground statements (subject, predicate, object)
//! - Common error types

mod error;
mod literal;
mod statement;
mod term;

pub mod xsd;

pub use error::*;
pub use literal::*;
pub use statement::*;
pub use term::*;
