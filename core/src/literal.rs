//! Literal values.
//!
//! A literal is a lexical form plus either a language tag or a datatype IRI.
//! Literals whose datatype is numeric compare by value, so `"1"^^xsd:integer`
//! and `"1.0"^^xsd:double` are the same literal for matching purposes.
//! Integral values compare as exact integers, never through float rounding.

use crate::xsd;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

/// How the lexical form of a literal is qualified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiteralKind {
    /// Plain literal with no language or datatype.
    Simple,
    /// Language-tagged string. Tags are stored lowercased.
    Language(String),
    /// Literal with an explicit datatype IRI.
    Typed(String),
}

/// An RDF literal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RawLiteral")]
pub struct Literal {
    lexical: String,
    kind: LiteralKind,
}

#[derive(Deserialize)]
struct RawLiteral {
    lexical: String,
    kind: LiteralKind,
}

impl From<RawLiteral> for Literal {
    fn from(raw: RawLiteral) -> Self {
        match raw.kind {
            LiteralKind::Language(tag) => Literal::lang(raw.lexical, tag),
            kind => Self {
                lexical: raw.lexical,
                kind,
            },
        }
    }
}

/// 2^127, the first magnitude outside `i128`. Exactly representable as f64.
const I128_BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// Canonical numeric value used for equality and hashing.
///
/// Integral values are held as exact integers, so `"1"^^xsd:integer`,
/// `"1.0"^^xsd:decimal` and `"1e0"^^xsd:double` share one form while two
/// distinct integers never collapse through float rounding.
#[derive(Debug, Clone, Copy)]
enum Numeric {
    Integer(i128),
    Double(f64),
}

impl Numeric {
    fn from_f64(value: f64) -> Self {
        if value.fract() == 0.0 && (-I128_BOUND..I128_BOUND).contains(&value) {
            Numeric::Integer(value as i128)
        } else {
            Numeric::Double(value)
        }
    }
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Numeric::Integer(a), Numeric::Integer(b)) => a == b,
            (Numeric::Double(a), Numeric::Double(b)) => canonical_bits(*a) == canonical_bits(*b),
            _ => false,
        }
    }
}

impl Hash for Numeric {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Numeric::Integer(i) => {
                0u8.hash(state);
                i.hash(state);
            }
            Numeric::Double(d) => {
                1u8.hash(state);
                canonical_bits(*d).hash(state);
            }
        }
    }
}

/// Parse a decimal lexical form with no fractional part (`"12"`, `"-12.000"`)
/// as an exact integer.
fn integral_decimal(lexical: &str) -> Option<i128> {
    let (whole, fraction) = lexical.split_once('.').unwrap_or((lexical, ""));
    if !fraction.bytes().all(|b| b == b'0') {
        return None;
    }
    match whole {
        "" | "+" | "-" => None,
        _ => whole.parse().ok(),
    }
}

impl Literal {
    /// Create a simple literal.
    pub fn simple(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            kind: LiteralKind::Simple,
        }
    }

    /// Create a language-tagged literal.
    pub fn lang(lexical: impl Into<String>, tag: impl AsRef<str>) -> Self {
        Self {
            lexical: lexical.into(),
            kind: LiteralKind::Language(tag.as_ref().to_ascii_lowercase()),
        }
    }

    /// Create a typed literal.
    pub fn typed(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            kind: LiteralKind::Typed(datatype.into()),
        }
    }

    /// The lexical form as written.
    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    pub fn kind(&self) -> &LiteralKind {
        &self.kind
    }

    /// The language tag, if this is a language-tagged string.
    pub fn language(&self) -> Option<&str> {
        match &self.kind {
            LiteralKind::Language(tag) => Some(tag),
            _ => None,
        }
    }

    /// The effective datatype IRI. Simple literals are `xsd:string`,
    /// language-tagged literals are `rdf:langString`.
    pub fn datatype(&self) -> &str {
        match &self.kind {
            LiteralKind::Simple => xsd::STRING,
            LiteralKind::Language(_) => RDF_LANG_STRING,
            LiteralKind::Typed(dt) => dt,
        }
    }

    /// Returns true if the datatype is an XSD numeric type.
    pub fn is_numeric(&self) -> bool {
        matches!(&self.kind, LiteralKind::Typed(dt) if xsd::is_numeric(dt))
    }

    fn numeric(&self) -> Option<Numeric> {
        let LiteralKind::Typed(dt) = &self.kind else {
            return None;
        };
        let lexical = self.lexical.trim();
        if xsd::is_integer(dt) {
            return lexical.parse::<i128>().ok().map(Numeric::Integer);
        }
        if dt == xsd::DECIMAL {
            if let Some(i) = integral_decimal(lexical) {
                return Some(Numeric::Integer(i));
            }
        }
        if xsd::is_numeric(dt) {
            return lexical.parse::<f64>().ok().map(Numeric::from_f64);
        }
        None
    }

    /// Boolean value of an `xsd:boolean` literal.
    pub fn as_bool(&self) -> Option<bool> {
        match &self.kind {
            LiteralKind::Typed(dt) if dt == xsd::BOOLEAN => match self.lexical.trim() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Bit pattern used for float equality and hashing. Folds `-0.0` into
/// `0.0` and every NaN into one value so that equality stays reflexive.
fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a == b,
            _ => self.lexical == other.lexical && self.kind == other.kind,
        }
    }
}

impl Eq for Literal {}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.numeric() {
            Some(value) => {
                0u8.hash(state);
                value.hash(state);
            }
            None => {
                1u8.hash(state);
                self.lexical.hash(state);
                self.kind.hash(state);
            }
        }
    }
}

/// Escape a lexical form for N-Triples output.
pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", escape(&self.lexical))?;
        match &self.kind {
            LiteralKind::Simple => Ok(()),
            LiteralKind::Language(tag) => write!(f, "@{}", tag),
            LiteralKind::Typed(dt) => write!(f, "^^<{}>", dt),
        }
    }
}

fn double_lexical(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "INF" } else { "-INF" }.to_string();
    }
    let s = value.to_string();
    if s.contains('.') {
        s
    } else {
        format!("{}.0", s)
    }
}

// Convenient From implementations
impl From<i64> for Literal {
    fn from(i: i64) -> Self {
        Literal::typed(i.to_string(), xsd::INTEGER)
    }
}

impl From<i32> for Literal {
    fn from(i: i32) -> Self {
        Literal::from(i as i64)
    }
}

impl From<f64> for Literal {
    fn from(f: f64) -> Self {
        Literal::typed(double_lexical(f), xsd::DOUBLE)
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::typed(b.to_string(), xsd::BOOLEAN)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::simple(s)
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::simple(s)
    }
}
