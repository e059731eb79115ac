//! Triple patterns.

use crate::{PatternError, PatternResult, Solution};
use std::fmt;
use triplet_core::{Statement, Term};

/// A statement-shaped template whose positions may be variables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    subject: Term,
    predicate: Term,
    object: Term,
}

impl Pattern {
    /// Create a pattern, checking each position.
    ///
    /// The subject must be an IRI, blank node or variable, the predicate an
    /// IRI or variable. The object may be any term.
    pub fn new(
        subject: impl Into<Term>,
        predicate: impl Into<Term>,
        object: impl Into<Term>,
    ) -> PatternResult<Self> {
        let subject = subject.into();
        let predicate = predicate.into();
        let object = object.into();

        if !(subject.is_resource() || subject.is_variable()) {
            return Err(PatternError::invalid_pattern(format!(
                "subject must be an IRI, blank node or variable, got {} {}",
                subject.kind_name(),
                subject
            )));
        }
        if !(predicate.is_iri() || predicate.is_variable()) {
            return Err(PatternError::invalid_pattern(format!(
                "predicate must be an IRI or variable, got {} {}",
                predicate.kind_name(),
                predicate
            )));
        }

        Ok(Self {
            subject,
            predicate,
            object,
        })
    }

    /// Start building a pattern one position at a time.
    pub fn builder() -> PatternBuilder {
        PatternBuilder::new()
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

    /// The three positions in subject, predicate, object order.
    pub fn terms(&self) -> [&Term; 3] {
        [&self.subject, &self.predicate, &self.object]
    }

    /// Variable names in first-occurrence order, without repeats.
    pub fn variables(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in self.terms().into_iter().filter_map(Term::as_variable) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Returns true if no position is a variable.
    pub fn is_ground(&self) -> bool {
        self.terms().into_iter().all(Term::is_ground)
    }

    /// Replace every variable that `solution` binds with its term.
    ///
    /// The result is not re-validated: a variable bound to a literal may
    /// land in the predicate position, where it simply never matches.
    pub fn bind(&self, solution: &Solution) -> Pattern {
        let resolve = |term: &Term| match term {
            Term::Variable(name) => solution.get(name).cloned().unwrap_or_else(|| term.clone()),
            _ => term.clone(),
        };
        Pattern {
            subject: resolve(&self.subject),
            predicate: resolve(&self.predicate),
            object: resolve(&self.object),
        }
    }

    /// Unify the pattern with one statement.
    ///
    /// Constant positions must equal the statement component. Variable
    /// positions bind to it, and a variable repeated across positions only
    /// matches when those components are equal.
    pub fn match_statement(&self, statement: &Statement) -> Option<Solution> {
        let mut solution = Solution::new();
        for (pattern_term, term) in self.terms().into_iter().zip(statement.terms()) {
            match pattern_term {
                Term::Variable(name) => match solution.get(name) {
                    Some(bound) if bound != term => return None,
                    Some(_) => {}
                    None => solution.bind(name, term.clone()),
                },
                constant => {
                    if constant != term {
                        return None;
                    }
                }
            }
        }
        Some(solution)
    }
}

impl TryFrom<(Term, Term, Term)> for Pattern {
    type Error = PatternError;

    fn try_from((subject, predicate, object): (Term, Term, Term)) -> PatternResult<Self> {
        Pattern::new(subject, predicate, object)
    }
}

impl TryFrom<Vec<Term>> for Pattern {
    type Error = PatternError;

    fn try_from(terms: Vec<Term>) -> PatternResult<Self> {
        let len = terms.len();
        let mut iter = terms.into_iter();
        match (iter.next(), iter.next(), iter.next(), iter.next()) {
            (Some(s), Some(p), Some(o), None) => Pattern::new(s, p, o),
            _ => Err(PatternError::invalid_pattern(format!(
                "expected subject, predicate and object, got {} term(s)",
                len
            ))),
        }
    }
}

impl From<Statement> for Pattern {
    fn from(statement: Statement) -> Self {
        let (subject, predicate, object) = statement.into_parts();
        Pattern {
            subject,
            predicate,
            object,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}

/// Incremental pattern construction.
///
/// Every position must be supplied before [`PatternBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct PatternBuilder {
    subject: Option<Term>,
    predicate: Option<Term>,
    object: Option<Term>,
}

impl PatternBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subject(mut self, term: impl Into<Term>) -> Self {
        self.subject = Some(term.into());
        self
    }

    pub fn predicate(mut self, term: impl Into<Term>) -> Self {
        self.predicate = Some(term.into());
        self
    }

    pub fn object(mut self, term: impl Into<Term>) -> Self {
        self.object = Some(term.into());
        self
    }

    pub fn build(self) -> PatternResult<Pattern> {
        let missing = |position: &str| {
            PatternError::invalid_pattern(format!("missing {} position", position))
        };
        let subject = self.subject.ok_or_else(|| missing("subject"))?;
        let predicate = self.predicate.ok_or_else(|| missing("predicate"))?;
        let object = self.object.ok_or_else(|| missing("object"))?;
        Pattern::new(subject, predicate, object)
    }
}
