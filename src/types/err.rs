//! Error types used in the library.
//!
//! - Some of these are external --- e.g. a malformed literal in a knowledge base aborts reading the knowledge base.
//! - Some of these are internally expected --- e.g. unification errors are used to control the flow of resolution, and are never returned from a refutation.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.
//
// Note, a chain which ends in a loop, or which can make no further progress, is not an error.
// Both are reports, see crate::reports.

/// A wrapper around the errors of the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    ClauseDB(ClauseDBError),
    Parse(ParseError),
}

/// Errors when adding clauses to a knowledge base.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// Some attempt was made to store an empty clause.
    EmptyClause,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Text which is not a predicate identifier with an optional parenthesized, comma-separated, list of argument identifiers.
    MalformedLiteral(String),

    /// A clause line without any literals, at the given line.
    EmptyClause(usize),

    /// A goal was required, but none was given.
    MissingGoal,

    /// Some unspecific problem when reading the given line.
    Line(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Noted failures during unification.
///
/// These are expected, and are consumed when scanning for a pair of literals to resolve on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UnificationError {
    /// Two distinct constants.
    Clash,

    /// Literals with distinct predicates.
    Predicate,

    /// Literals with a distinct number of arguments.
    Arity,
}
