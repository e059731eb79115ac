//! Scenario runner.

use std::collections::HashSet;

use triplet_graph::MemoryGraph;
use triplet_query::QueryResult;

use crate::error::{ScenarioError, ScenarioResult};
use crate::scenario::{Scenario, Step};

/// Runs a scenario's steps against its graph.
pub struct Runner {
    name: String,
    graph: MemoryGraph,
    steps: Vec<Step>,
}

impl Runner {
    /// Create a new runner, rejecting scenarios with repeated step names.
    pub fn new(scenario: Scenario) -> ScenarioResult<Self> {
        let (name, graph, steps) = scenario.into_parts();

        let mut seen = HashSet::new();
        for step in &steps {
            if !seen.insert(step.name.as_str()) {
                return Err(ScenarioError::duplicate_step(&name, &step.name));
            }
        }

        Ok(Self { name, graph, steps })
    }

    /// Run the scenario.
    pub fn run(self) -> ScenarioResult<()> {
        let span = tracing::info_span!("scenario", name = %self.name);
        let _enter = span.enter();

        for step in self.steps {
            tracing::debug!(step = %step.name, "running step");

            // A query that failed to build is handed to the assertion as the
            // step's result
            let result: QueryResult<_> = step.query.and_then(|query| query.execute(&self.graph));

            step.assertion.verify(&step.name, &result)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ScenarioError;
    use crate::fixtures::{ex, var};
    use crate::scenario::Scenario;
    use triplet_query::Query;

    #[test]
    fn test_duplicate_step_names_rejected() {
        let scenario = Scenario::new("dup")
            .step("q", Query::new(), |a| a.rows(1))
            .step("q", Query::new(), |a| a.rows(1));

        let err = scenario.run().unwrap_err();
        assert!(matches!(err, ScenarioError::DuplicateStep { .. }));
    }

    #[test]
    fn test_failed_assertion_names_step() {
        let scenario = Scenario::new("empty_graph").step(
            "expects_rows",
            Query::builder().triple(var("s"), ex("p"), var("o")),
            |a| a.not_empty(),
        );

        match scenario.run().unwrap_err() {
            ScenarioError::AssertionFailed { step, .. } => assert_eq!(step, "expects_rows"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
