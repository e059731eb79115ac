//! Triplet Graph
//!
//! This crate defines what the query engine needs from a graph and ships a
//! small in-memory store:
//! - `Graph`: read-only, deterministic enumeration of statements
//! - `MemoryGraph`: insertion-ordered set of statements

mod graph;
mod memory;

pub use graph::*;
pub use memory::*;
