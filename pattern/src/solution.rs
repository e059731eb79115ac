//! Variable bindings produced by matching.

use crate::{PatternError, PatternResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use triplet_core::{variable_name, Term};

/// One set of variable bindings.
///
/// Keys are unique and kept in name order, so two solutions are equal exactly
/// when they hold the same (name, term) pairs regardless of the order the
/// bindings were made in. Every bound term is ground.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Solution {
    #[serde(deserialize_with = "deserialize_ground")]
    map: BTreeMap<String, Term>,
}

fn deserialize_ground<'de, D>(deserializer: D) -> Result<BTreeMap<String, Term>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let map = BTreeMap::<String, Term>::deserialize(deserializer)?;
    if let Some((name, term)) = map.iter().find(|(_, term)| term.is_variable()) {
        return Err(serde::de::Error::custom(PatternError::not_ground(name, term)));
    }
    Ok(map)
}

impl Solution {
    /// Create an empty solution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solution with a single binding.
    pub fn with(name: impl Into<String>, term: impl Into<Term>) -> PatternResult<Self> {
        let mut solution = Self::new();
        solution.insert(name, term)?;
        Ok(solution)
    }

    /// Bind a variable, replacing any previous binding.
    ///
    /// Returns the previous term, if any. Variables are rejected.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        term: impl Into<Term>,
    ) -> PatternResult<Option<Term>> {
        let name = name.into();
        let term = term.into();
        if term.is_variable() {
            return Err(PatternError::not_ground(name, &term));
        }
        Ok(self.map.insert(name, term))
    }

    /// Bind a term the caller already knows to be ground.
    pub(crate) fn bind(&mut self, name: &str, term: Term) {
        debug_assert!(term.is_ground());
        self.map.insert(name.to_string(), term);
    }

    /// Get a binding by name.
    pub fn get(&self, name: &str) -> Option<&Term> {
        self.map.get(name)
    }

    /// Get a binding, failing if the variable is not bound here.
    pub fn try_get(&self, name: &str) -> PatternResult<&Term> {
        self.map
            .get(name)
            .ok_or_else(|| PatternError::unbound_variable(name))
    }

    /// Check if a variable is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Get all variable names, in name order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(|s| s.as_str())
    }

    /// Merge another solution's bindings into this one.
    ///
    /// Bindings from `other` win on collision; see [`Solution::is_compatible`].
    pub fn merge(&mut self, other: &Solution) {
        for (name, term) in &other.map {
            self.map.insert(name.clone(), term.clone());
        }
    }

    /// True if every variable bound in both solutions has the same term.
    pub fn is_compatible(&self, other: &Solution) -> bool {
        other
            .map
            .iter()
            .all(|(name, term)| self.map.get(name).map_or(true, |t| t == term))
    }

    /// Keep only the named variables. Names may carry a `?` sigil; names
    /// that are not bound are ignored.
    pub fn project<S: AsRef<str>>(&self, names: &[S]) -> Solution {
        let map = self
            .map
            .iter()
            .filter(|(name, _)| {
                names
                    .iter()
                    .any(|n| variable_name(n.as_ref()) == name.as_str())
            })
            .map(|(name, term)| (name.clone(), term.clone()))
            .collect();
        Solution { map }
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copy the bindings into a plain map.
    pub fn to_map(&self) -> BTreeMap<String, Term> {
        self.map.clone()
    }

    pub fn into_map(self) -> BTreeMap<String, Term> {
        self.map
    }
}

impl TryFrom<BTreeMap<String, Term>> for Solution {
    type Error = PatternError;

    fn try_from(map: BTreeMap<String, Term>) -> PatternResult<Self> {
        if let Some((name, term)) = map.iter().find(|(_, term)| term.is_variable()) {
            return Err(PatternError::not_ground(name.clone(), term));
        }
        Ok(Self { map })
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, term)) in self.map.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, term)?;
        }
        write!(f, "}}")
    }
}
