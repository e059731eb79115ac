//! In-memory graph storage.

use crate::Graph;
use std::collections::HashSet;
use triplet_core::Statement;

/// An in-memory set of statements.
///
/// Statements are enumerated in insertion order. Inserting a statement that
/// is already present leaves the graph unchanged.
#[derive(Debug, Clone, Default)]
pub struct MemoryGraph {
    /// Statements in insertion order
    statements: Vec<Statement>,
    /// Membership index
    members: HashSet<Statement>,
}

impl MemoryGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Statement Operations ====================

    /// Insert a statement. Returns false if it was already present.
    pub fn insert(&mut self, statement: Statement) -> bool {
        if self.members.contains(&statement) {
            return false;
        }
        self.members.insert(statement.clone());
        self.statements.push(statement);
        true
    }

    /// Check whether the exact statement is present.
    pub fn contains(&self, statement: &Statement) -> bool {
        self.members.contains(statement)
    }

    /// Iterate statements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }

    /// Get the number of statements.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Check if the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Graph for MemoryGraph {
    fn statements(&self) -> impl Iterator<Item = &Statement> + '_ {
        self.statements.iter()
    }

    fn len(&self) -> usize {
        self.statements.len()
    }
}

impl Extend<Statement> for MemoryGraph {
    fn extend<I: IntoIterator<Item = Statement>>(&mut self, iter: I) {
        for statement in iter {
            self.insert(statement);
        }
    }
}

impl FromIterator<Statement> for MemoryGraph {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<'a> IntoIterator for &'a MemoryGraph {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}
