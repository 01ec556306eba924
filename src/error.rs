use std::fmt;

use thiserror::Error;

use crate::shape::NamedPointError;

/// The main error type for the painton crate.
///
/// This enum encompasses the error conditions surfaced at the crate
/// boundary. It uses the `thiserror` crate to provide automatic
/// implementation of `std::error::Error` and `Display`, keeping error
/// handling consistent and ergonomic.
#[derive(Error, Debug)]
pub enum PaintonError {
    /// The scene source failed to parse.
    ///
    /// Carries the full structured diagnostic, including source position
    /// and a caret indicator; see [`ParseError`].
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// I/O error from standard library operations.
    ///
    /// This variant automatically converts `std::io::Error` instances, so
    /// the `?` operator works directly on file reads and writes.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Classification of scene-source parse failures.
///
/// Each variant corresponds to one way a source can be rejected; the
/// free-form payloads carry the specifics (the offending token, the value
/// that fell out of range, ...). A kind is wrapped into a [`ParseError`]
/// which then accumulates the chain of grammar productions it crossed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// The file does not start with `size`, or a declaration keyword is
    /// unknown.
    #[error("expected {expected} keyword, got {found}")]
    ExpectedKeyword { expected: &'static str, found: String },

    /// A token of the wrong class where the grammar admits no alternative,
    /// e.g. an operator or a `.x`/`.y` projector.
    #[error("expected {expected}, got {found}")]
    ExpectedToken { expected: &'static str, found: String },

    /// A `{`, `}`, `(` or `)` absent where required.
    #[error("missing {0}")]
    MissingDelimiter(char),

    /// A name that is empty, starts with a non-letter or contains a
    /// forbidden character.
    #[error("{0}")]
    InvalidName(String),

    /// Re-declaration of a name within its namespace.
    #[error("already used {namespace} name {name}")]
    NameAlreadyUsed { namespace: &'static str, name: String },

    /// Reference to a shape or color that has not been declared yet;
    /// forward references are invalid.
    #[error("unknown {namespace} {name}")]
    UnknownName { namespace: &'static str, name: String },

    /// Malformed digits or decimal point in a numeric literal.
    #[error("{0}")]
    InvalidNumber(String),

    /// A value outside its permitted range: a color component beyond
    /// `[0, 1]`, a negative radius or canvas size, and the like.
    #[error("{0}")]
    OutOfRange(String),

    /// An ellipse whose semi-minor radius exceeds its semi-major radius.
    #[error("semi-minor radius has to be smaller than semi-major radius")]
    GeometryConstraint,

    /// A named-point tag the referenced shape variant does not define.
    #[error(transparent)]
    InvalidNamedPoint(#[from] NamedPointError),
}

/// A structured parse failure.
///
/// Combines the error [kind](ParseErrorKind), the chain of grammar
/// productions crossed while the error propagated (innermost first), and
/// the source position where detection occurred. `Display` renders the
/// whole diagnostic:
///
/// ```text
/// 3:8: error: unknown color pink -> invalid color -> invalid fill declaration
/// fill C pink
///        ^
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    kind: ParseErrorKind,
    trail: Vec<&'static str>,
    location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq)]
struct Location {
    line: usize,
    column: usize,
    text: String,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind) -> Self {
        Self { kind, trail: Vec::new(), location: None }
    }

    /// Append a production name to the chain; renders as
    /// `" -> invalid <production>"`.
    pub(crate) fn chain(mut self, production: &'static str) -> Self {
        self.trail.push(production);
        self
    }

    /// Attach the source position (1-based) and the offending line.
    ///
    /// Only the first position sticks, so the outermost catch cannot
    /// clobber one recorded deeper in.
    pub(crate) fn at(mut self, line: usize, column: usize, text: String) -> Self {
        if self.location.is_none() {
            self.location = Some(Location { line, column, text });
        }
        self
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// 1-based `(line, column)` of the offending token, when located.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.location.as_ref().map(|loc| (loc.line, loc.column))
    }
}

impl From<ParseErrorKind> for ParseError {
    fn from(kind: ParseErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(loc) = &self.location {
            write!(f, "{}:{}: ", loc.line, loc.column)?;
        }

        write!(f, "error: {}", self.kind)?;
        for production in &self.trail {
            write!(f, " -> invalid {production}")?;
        }

        if let Some(loc) = &self.location {
            write!(f, "\n{}\n{:>width$}", loc.text, '^', width = loc.column)?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseError {}
