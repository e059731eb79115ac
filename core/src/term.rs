//! Terms.
//!
//! A term is the atomic value found in a triple position. Graph data only
//! ever contains ground terms (IRIs, blank nodes, literals); variables appear
//! only in patterns.

use crate::literal::escape;
use crate::Literal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value in a subject, predicate or object position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// A resource identified by an IRI.
    Iri(String),
    /// A blank node, identified by a graph-local label.
    BlankNode(String),
    /// A literal value.
    Literal(Literal),
    /// A query variable. Never part of graph data.
    Variable(String),
}

impl Term {
    /// Create an IRI term.
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    /// Create a blank node term.
    pub fn blank(id: impl Into<String>) -> Self {
        Term::BlankNode(id.into())
    }

    /// Create a literal term from anything convertible to a literal.
    pub fn literal(value: impl Into<Literal>) -> Self {
        Term::Literal(value.into())
    }

    /// Create a variable term. A leading `?` or `$` is stripped.
    pub fn var(name: impl AsRef<str>) -> Self {
        Term::Variable(variable_name(name.as_ref()).to_string())
    }

    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    /// Returns true for every term that is not a variable.
    pub fn is_ground(&self) -> bool {
        !self.is_variable()
    }

    /// Returns true if this term may appear as a statement subject.
    pub fn is_resource(&self) -> bool {
        matches!(self, Term::Iri(_) | Term::BlankNode(_))
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Get the variable name if this is a variable.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Term::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the kind name of this term.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Term::Iri(_) => "IRI",
            Term::BlankNode(_) => "BlankNode",
            Term::Literal(_) => "Literal",
            Term::Variable(_) => "Variable",
        }
    }
}

/// A variable name without its `?` or `$` sigil.
pub fn variable_name(name: &str) -> &str {
    name.strip_prefix('?')
        .or_else(|| name.strip_prefix('$'))
        .unwrap_or(name)
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{}>", escape(iri)),
            Term::BlankNode(id) => write!(f, "_:{}", id),
            Term::Literal(lit) => write!(f, "{}", lit),
            Term::Variable(name) => write!(f, "?{}", name),
        }
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Term::Literal(lit)
    }
}

impl From<i64> for Term {
    fn from(i: i64) -> Self {
        Term::Literal(i.into())
    }
}

impl From<i32> for Term {
    fn from(i: i32) -> Self {
        Term::Literal(i.into())
    }
}

impl From<f64> for Term {
    fn from(f: f64) -> Self {
        Term::Literal(f.into())
    }
}

impl From<bool> for Term {
    fn from(b: bool) -> Self {
        Term::Literal(b.into())
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Term::Literal(s.into())
    }
}

impl From<String> for Term {
    fn from(s: String) -> Self {
        Term::Literal(s.into())
    }
}

impl From<&Term> for Term {
    fn from(term: &Term) -> Self {
        term.clone()
    }
}
