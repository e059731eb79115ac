//! Query execution.

use triplet_graph::Graph;
use triplet_pattern::{Matcher, Pattern, Solution};

use crate::modifiers;
use crate::query::{Query, Source};
use crate::result::Solutions;
use crate::QueryResult;

/// Query executor.
///
/// Evaluates a query's patterns as a left-to-right nested-loop join over one
/// graph, then applies the query's solution modifiers.
pub struct QueryExecutor<'g, G: Graph + ?Sized> {
    matcher: Matcher<'g, G>,
}

impl<'g, G: Graph + ?Sized> QueryExecutor<'g, G> {
    /// Create a new executor.
    pub fn new(graph: &'g G) -> Self {
        Self {
            matcher: Matcher::new(graph),
        }
    }

    /// Execute a query: match its patterns (or take its pre-supplied
    /// solutions), then apply its modifiers.
    pub fn execute(&self, query: &Query) -> QueryResult<Solutions> {
        let span = tracing::debug_span!("execute", patterns = query.patterns().len());
        let _enter = span.enter();

        let solutions = match query.source() {
            Source::Patterns(patterns) => {
                Solutions::new(query.variables(), self.evaluate(patterns))
            }
            Source::Solutions(solutions) => {
                tracing::debug!(rows = solutions.len(), "using pre-supplied solutions");
                solutions.clone()
            }
        };

        Ok(modifiers::apply(solutions, query.options()))
    }

    /// Join the patterns in order.
    ///
    /// The working set starts as one empty solution. For each pattern, every
    /// partial solution has its bound variables substituted into the pattern
    /// and is extended once per match; a partial solution without matches is
    /// dropped. Output order follows the order partial solutions were
    /// produced and the graph's enumeration order; nothing is sorted.
    pub fn evaluate(&self, patterns: &[Pattern]) -> Vec<Solution> {
        let mut working = vec![Solution::new()];

        for (step, pattern) in patterns.iter().enumerate() {
            let mut next = Vec::new();

            for partial in &working {
                next.extend(self.matcher.find_all_with_initial(pattern, partial));
            }

            tracing::trace!(
                step,
                pattern = %pattern,
                input = working.len(),
                output = next.len(),
                "join step"
            );

            if next.is_empty() {
                tracing::debug!(step, pattern = %pattern, "no matches, pruning remaining patterns");
                return next;
            }

            working = next;
        }

        working
    }
}
