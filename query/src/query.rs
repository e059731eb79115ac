//! Queries and their construction.

use triplet_core::{variable_name, Term};
use triplet_graph::Graph;
use triplet_pattern::{Pattern, PatternError};

use crate::executor::QueryExecutor;
use crate::options::{Dedup, QueryOptions};
use crate::result::Solutions;
use crate::QueryResult;

/// Where a query's unmodified solutions come from.
#[derive(Debug, Clone)]
pub(crate) enum Source {
    /// Match these patterns against the graph, in order.
    Patterns(Vec<Pattern>),
    /// Skip matching and use this sequence.
    Solutions(Solutions),
}

/// A conjunction of triple patterns plus solution modifiers.
///
/// Pattern order fixes join order: variables bound by earlier patterns act
/// as constants for later ones. Modifier settings may be changed between
/// executions; results already returned are unaffected.
#[derive(Debug, Clone)]
pub struct Query {
    source: Source,
    options: QueryOptions,
}

impl Default for Query {
    fn default() -> Self {
        Self::new()
    }
}

impl Query {
    /// Create a query with no patterns. It yields a single empty solution.
    pub fn new() -> Self {
        Self::from_patterns(Vec::new())
    }

    /// Start building a query pattern by pattern.
    pub fn builder() -> QueryBuilder {
        QueryBuilder::new()
    }

    /// Create a query from already-validated patterns.
    pub fn from_patterns(patterns: impl IntoIterator<Item = Pattern>) -> Self {
        Self {
            source: Source::Patterns(patterns.into_iter().collect()),
            options: QueryOptions::default(),
        }
    }

    /// Create a query over a pre-computed solution sequence. Executing it
    /// never reads the graph; only the modifiers apply.
    pub fn from_solutions(solutions: impl Into<Solutions>) -> Self {
        Self {
            source: Source::Solutions(solutions.into()),
            options: QueryOptions::default(),
        }
    }

    pub(crate) fn source(&self) -> &Source {
        &self.source
    }

    /// The query's patterns. Empty for a query over pre-supplied solutions.
    pub fn patterns(&self) -> &[Pattern] {
        match &self.source {
            Source::Patterns(patterns) => patterns,
            Source::Solutions(_) => &[],
        }
    }

    /// The pre-supplied solutions, if the query was built from them.
    pub fn solutions(&self) -> Option<&Solutions> {
        match &self.source {
            Source::Patterns(_) => None,
            Source::Solutions(solutions) => Some(solutions),
        }
    }

    /// Declared variables in first-occurrence order.
    pub fn variables(&self) -> Vec<String> {
        match &self.source {
            Source::Patterns(patterns) => {
                let mut names: Vec<String> = Vec::new();
                for name in patterns.iter().flat_map(Pattern::variables) {
                    if !names.iter().any(|n| n == name) {
                        names.push(name.to_string());
                    }
                }
                names
            }
            Source::Solutions(solutions) => solutions.variables().to_vec(),
        }
    }

    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    /// Replace every modifier setting at once.
    pub fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }

    pub fn set_options(&mut self, options: QueryOptions) -> &mut Self {
        self.options = options;
        self
    }

    // ==================== Modifiers ====================

    /// Keep only the named variables in each solution.
    pub fn project<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.options.projection = Some(
            names
                .into_iter()
                .map(|name| variable_name(name.as_ref()).to_string())
                .collect(),
        );
        self
    }

    /// Remove every duplicate solution.
    pub fn distinct(&mut self) -> &mut Self {
        self.options.dedup = Dedup::Distinct;
        self
    }

    /// Allow, but do not require, duplicate removal.
    pub fn reduced(&mut self) -> &mut Self {
        self.options.dedup = Dedup::Reduced;
        self
    }

    /// Skip the first `n` solutions.
    pub fn offset(&mut self, n: usize) -> &mut Self {
        self.options.offset = n;
        self
    }

    /// Return at most `n` solutions.
    pub fn limit(&mut self, n: usize) -> &mut Self {
        self.options.limit = Some(n);
        self
    }

    // ==================== Execution ====================

    /// Evaluate the query against a graph.
    pub fn execute<G: Graph + ?Sized>(&self, graph: &G) -> QueryResult<Solutions> {
        QueryExecutor::new(graph).execute(self)
    }

    /// Number of solutions after modifiers.
    pub fn count<G: Graph + ?Sized>(&self, graph: &G) -> QueryResult<usize> {
        Ok(self.execute(graph)?.len())
    }

    /// Returns true if the query has at least one solution.
    pub fn matches<G: Graph + ?Sized>(&self, graph: &G) -> QueryResult<bool> {
        Ok(!self.execute(graph)?.is_empty())
    }
}

/// Append-style query construction.
///
/// Malformed patterns passed through [`QueryBuilder::triple`] or
/// [`QueryBuilder::terms`] are reported by [`QueryBuilder::build`]; the
/// first error wins.
#[derive(Debug, Default)]
pub struct QueryBuilder {
    patterns: Vec<Pattern>,
    options: QueryOptions,
    error: Option<PatternError>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pattern.
    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    /// Append a pattern from its three positions.
    pub fn triple(
        self,
        subject: impl Into<Term>,
        predicate: impl Into<Term>,
        object: impl Into<Term>,
    ) -> Self {
        let result = Pattern::new(subject, predicate, object);
        self.push_result(result)
    }

    /// Append a pattern from a list of terms, which must have exactly three.
    pub fn terms(self, terms: Vec<Term>) -> Self {
        let result = Pattern::try_from(terms);
        self.push_result(result)
    }

    pub fn options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }

    fn push_result(mut self, result: Result<Pattern, PatternError>) -> Self {
        match result {
            Ok(pattern) => self.patterns.push(pattern),
            Err(e) => {
                if self.error.is_none() {
                    self.error = Some(e);
                }
            }
        }
        self
    }

    /// Freeze the builder into a query.
    pub fn build(self) -> QueryResult<Query> {
        if let Some(e) = self.error {
            return Err(e.into());
        }
        Ok(Query::from_patterns(self.patterns).with_options(self.options))
    }
}
