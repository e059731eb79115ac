//! Solution modifier configuration.

use serde::{Deserialize, Deserializer, Serialize};
use triplet_core::variable_name;

use crate::QueryResult;

/// Duplicate elimination mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dedup {
    /// Keep every solution.
    #[default]
    None,
    /// Remove every duplicate, keeping first occurrences.
    Distinct,
    /// Remove duplicates where it is cheap to do so. Retained solutions keep
    /// their relative order and no solution is ever added.
    Reduced,
}

/// Modifiers applied to a query's solutions, always in the order
/// projection, duplicate elimination, offset, limit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryOptions {
    /// Variables to keep, stored without `?` sigils. `None` keeps every
    /// variable.
    #[serde(deserialize_with = "deserialize_projection")]
    pub projection: Option<Vec<String>>,
    /// Duplicate elimination mode.
    pub dedup: Dedup,
    /// Number of leading solutions to skip.
    pub offset: usize,
    /// Maximum number of solutions to return. `None` is unbounded.
    pub limit: Option<usize>,
}

fn deserialize_projection<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let names = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(names.map(|names| {
        names
            .iter()
            .map(|name| variable_name(name).to_string())
            .collect()
    }))
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only these variables. A leading `?` on a name is dropped.
    pub fn with_projection<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.projection = Some(
            names
                .into_iter()
                .map(|name| variable_name(name.as_ref()).to_string())
                .collect(),
        );
        self
    }

    pub fn with_dedup(mut self, dedup: Dedup) -> Self {
        self.dedup = dedup;
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Parse options from JSON, e.g.
    /// `{"projection": ["s"], "dedup": "distinct", "offset": 10, "limit": 5}`.
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> QueryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns true if applying these options leaves any sequence unchanged.
    pub fn is_identity(&self) -> bool {
        self.projection.is_none()
            && self.dedup == Dedup::None
            && self.offset == 0
            && self.limit.is_none()
    }
}
