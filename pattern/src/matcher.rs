//! Pattern matching against the graph.

use crate::{Pattern, Solution};
use triplet_graph::Graph;

/// Finds every statement of a graph that satisfies a single pattern.
///
/// Matching is read-only and follows the graph's enumeration order. A
/// pattern with no matches yields an empty result, never an error.
pub struct Matcher<'g, G: Graph + ?Sized> {
    graph: &'g G,
}

impl<'g, G: Graph + ?Sized> Matcher<'g, G> {
    /// Create a new matcher.
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Find all matches of the pattern.
    pub fn find_all(&self, pattern: &Pattern) -> Vec<Solution> {
        self.graph
            .statements()
            .filter_map(|statement| pattern.match_statement(statement))
            .collect()
    }

    /// Find all matches starting with initial bindings.
    ///
    /// Variables bound in `initial` are substituted into the pattern first,
    /// so they act as constants. Each match is merged into a copy of
    /// `initial`; the substituted variables are no longer pattern variables,
    /// so the merge never overwrites an existing binding.
    pub fn find_all_with_initial(&self, pattern: &Pattern, initial: &Solution) -> Vec<Solution> {
        if initial.is_empty() {
            return self.find_all(pattern);
        }

        let resolved = pattern.bind(initial);
        self.graph
            .statements()
            .filter_map(|statement| resolved.match_statement(statement))
            .map(|found| {
                debug_assert!(initial.is_compatible(&found));
                let mut extended = initial.clone();
                extended.merge(&found);
                extended
            })
            .collect()
    }

    /// Check if any statement matches.
    pub fn exists(&self, pattern: &Pattern) -> bool {
        self.graph
            .statements()
            .any(|statement| pattern.match_statement(statement).is_some())
    }
}
