//! Ground statements.
//!
//! A statement is one (subject, predicate, object) triple of graph data.

use crate::{Term, TermError, TermResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A ground triple.
///
/// The subject is an IRI or blank node, the predicate an IRI and the object
/// any ground term. Statements are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawStatement")]
pub struct Statement {
    subject: Term,
    predicate: Term,
    object: Term,
}

#[derive(Deserialize)]
struct RawStatement {
    subject: Term,
    predicate: Term,
    object: Term,
}

impl TryFrom<RawStatement> for Statement {
    type Error = TermError;

    fn try_from(raw: RawStatement) -> TermResult<Self> {
        Statement::new(raw.subject, raw.predicate, raw.object)
    }
}

impl Statement {
    /// Create a statement, checking that each position holds an allowed term.
    pub fn new(
        subject: impl Into<Term>,
        predicate: impl Into<Term>,
        object: impl Into<Term>,
    ) -> TermResult<Self> {
        let subject = subject.into();
        let predicate = predicate.into();
        let object = object.into();

        if subject.is_variable() {
            return Err(TermError::not_ground("subject", &subject));
        }
        if !subject.is_resource() {
            return Err(TermError::invalid_position("subject", &subject));
        }
        if predicate.is_variable() {
            return Err(TermError::not_ground("predicate", &predicate));
        }
        if !predicate.is_iri() {
            return Err(TermError::invalid_position("predicate", &predicate));
        }
        if object.is_variable() {
            return Err(TermError::not_ground("object", &object));
        }

        Ok(Self {
            subject,
            predicate,
            object,
        })
    }

    pub fn subject(&self) -> &Term {
        &self.subject
    }

    pub fn predicate(&self) -> &Term {
        &self.predicate
    }

    pub fn object(&self) -> &Term {
        &self.object
    }

    /// The three components in subject, predicate, object order.
    pub fn terms(&self) -> [&Term; 3] {
        [&self.subject, &self.predicate, &self.object]
    }

    /// Consume the statement, returning its components.
    pub fn into_parts(self) -> (Term, Term, Term) {
        (self.subject, self.predicate, self.object)
    }

    /// Key the components by the given names, e.g. `("s", "p", "o")`.
    ///
    /// Repeated names keep the last component written.
    pub fn to_solution_map(&self, subject: &str, predicate: &str, object: &str) -> BTreeMap<String, Term> {
        let mut map = BTreeMap::new();
        map.insert(subject.to_string(), self.subject.clone());
        map.insert(predicate.to_string(), self.predicate.clone());
        map.insert(object.to_string(), self.object.clone());
        map
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
