//! The statement enumeration contract.

use triplet_core::Statement;

/// A read-only collection of statements.
///
/// Enumeration order is defined by the implementation but must be the same
/// every time the same instance is enumerated. Query results inherit this
/// order, so a graph with stable enumeration produces stable results.
pub trait Graph {
    /// Enumerate every statement in the graph.
    fn statements(&self) -> impl Iterator<Item = &Statement> + '_;

    /// Number of statements in the graph.
    fn len(&self) -> usize {
        self.statements().count()
    }

    /// Returns true if the graph holds no statements.
    fn is_empty(&self) -> bool {
        self.statements().next().is_none()
    }
}

impl<G: Graph + ?Sized> Graph for &G {
    fn statements(&self) -> impl Iterator<Item = &Statement> + '_ {
        (**self).statements()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

impl Graph for [Statement] {
    fn statements(&self) -> impl Iterator<Item = &Statement> + '_ {
        self.iter()
    }

    fn len(&self) -> usize {
        <[Statement]>::len(self)
    }
}

impl Graph for Vec<Statement> {
    fn statements(&self) -> impl Iterator<Item = &Statement> + '_ {
        self.iter()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}
