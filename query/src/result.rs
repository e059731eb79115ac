//! Query result types.

use serde::Serialize;
use std::collections::BTreeMap;
use triplet_core::{variable_name, Term};
use triplet_pattern::Solution;

use crate::modifiers;
use crate::{QueryError, QueryResult};

/// An ordered sequence of solutions.
///
/// Alongside the rows, the sequence remembers which variables it declares:
/// the variables of the patterns that produced it, narrowed by projection.
/// Rows may contain duplicates until a duplicate-eliminating modifier runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Solutions {
    /// Declared variable names.
    variables: Vec<String>,
    /// Rows of results.
    #[serde(rename = "solutions")]
    rows: Vec<Solution>,
}

impl Solutions {
    /// Create a sequence with explicit variable names.
    pub fn new(variables: Vec<String>, rows: Vec<Solution>) -> Self {
        Self { variables, rows }
    }

    /// Create a sequence whose variables are every name bound in any row,
    /// in first-seen order.
    pub fn from_rows(rows: Vec<Solution>) -> Self {
        let mut variables: Vec<String> = Vec::new();
        for row in &rows {
            for name in row.names() {
                if !variables.iter().any(|v| v == name) {
                    variables.push(name.to_string());
                }
            }
        }
        Self { variables, rows }
    }

    /// Build a sequence from plain maps, rejecting variable-valued entries.
    pub fn from_maps<I>(maps: I) -> QueryResult<Self>
    where
        I: IntoIterator<Item = BTreeMap<String, Term>>,
    {
        let rows = maps
            .into_iter()
            .map(Solution::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_rows(rows))
    }

    /// Declared variable names.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Add a row to the results.
    pub fn push(&mut self, row: Solution) {
        for name in row.names() {
            if !self.variables.iter().any(|v| v == name) {
                self.variables.push(name.to_string());
            }
        }
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if results are empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by index.
    pub fn get(&self, index: usize) -> Option<&Solution> {
        self.rows.get(index)
    }

    pub fn first(&self) -> Option<&Solution> {
        self.rows.first()
    }

    pub fn as_slice(&self) -> &[Solution] {
        &self.rows
    }

    /// Iterate over rows.
    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.rows.iter()
    }

    /// The term bound to `name` in each row, `None` where a row leaves it
    /// unbound.
    ///
    /// Fails with [`QueryError::UnboundVariable`] if `name` is not a declared
    /// variable of this sequence.
    pub fn column(&self, name: &str) -> QueryResult<Vec<Option<&Term>>> {
        if !self.variables.iter().any(|v| v == name) {
            return Err(QueryError::unbound_variable(name));
        }
        Ok(self.rows.iter().map(|row| row.get(name)).collect())
    }

    /// Restrict every row to `names`.
    ///
    /// Declared variables are narrowed to the requested names that were
    /// declared; requesting an unknown name is not an error. A leading `?`
    /// on a name is ignored.
    pub fn project<S: AsRef<str>>(self, names: &[S]) -> Self {
        let mut variables: Vec<String> = Vec::new();
        for name in names {
            let name = variable_name(name.as_ref());
            let declared = self.variables.iter().any(|v| v == name);
            if declared && !variables.iter().any(|v| v == name) {
                variables.push(name.to_string());
            }
        }
        Self {
            variables,
            rows: modifiers::project(self.rows, names),
        }
    }

    /// Remove every duplicate row, keeping first occurrences.
    pub fn distinct(self) -> Self {
        Self {
            variables: self.variables,
            rows: modifiers::distinct(self.rows),
        }
    }

    /// Remove duplicates where cheap; see [`crate::Dedup::Reduced`].
    pub fn reduced(self) -> Self {
        Self {
            variables: self.variables,
            rows: modifiers::reduced(self.rows),
        }
    }

    /// Skip the first `n` rows.
    pub fn offset(self, n: usize) -> Self {
        Self {
            variables: self.variables,
            rows: modifiers::offset(self.rows, n),
        }
    }

    /// Keep at most `n` rows.
    pub fn limit(self, n: usize) -> Self {
        Self {
            variables: self.variables,
            rows: modifiers::limit(self.rows, n),
        }
    }

    /// Convert every row to a plain map.
    pub fn to_maps(&self) -> Vec<BTreeMap<String, Term>> {
        self.rows.iter().map(Solution::to_map).collect()
    }

    /// Render as `{"variables": [...], "solutions": [{name: term, ...}, ...]}`.
    pub fn to_json(&self) -> QueryResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn into_rows(self) -> Vec<Solution> {
        self.rows
    }
}

impl From<Vec<Solution>> for Solutions {
    fn from(rows: Vec<Solution>) -> Self {
        Self::from_rows(rows)
    }
}

impl FromIterator<Solution> for Solutions {
    fn from_iter<I: IntoIterator<Item = Solution>>(iter: I) -> Self {
        Self::from_rows(iter.into_iter().collect())
    }
}

impl Extend<Solution> for Solutions {
    fn extend<I: IntoIterator<Item = Solution>>(&mut self, iter: I) {
        for row in iter {
            self.push(row);
        }
    }
}

impl IntoIterator for Solutions {
    type Item = Solution;
    type IntoIter = std::vec::IntoIter<Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a Solutions {
    type Item = &'a Solution;
    type IntoIter = std::slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
