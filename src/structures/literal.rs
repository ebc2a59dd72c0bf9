//! Literals are predicates applied to a sequence of terms, paired with a negation.
//!
//! The text form of a literal is `[¬]predicate[(argument, …)]`, and literals are parsed from and displayed as text.
//!
//! ```rust
//! # use refutation_chain::structures::literal::Literal;
//! # use refutation_chain::structures::term::Term;
//! let literal: Literal = "¬Odia(x, Cesar)".parse().unwrap();
//!
//! assert!(literal.is_negated());
//! assert_eq!(literal.predicate(), "Odia");
//! assert_eq!(literal.arguments(), &[Term::from("x"), Term::from("Cesar")]);
//!
//! assert_eq!(literal.to_string(), "¬Odia(x,Cesar)");
//! assert_eq!(literal.negate().to_string(), "Odia(x,Cesar)");
//! ```
//!
//! On input either `¬` or `~` may be used to mark negation, while `¬` is always used for display.
//! Parentheses are omitted from the display of a literal without arguments, and so `P()` is displayed as `P`.
//!
//! Equality of literals is structural, and is never settled by comparing text.

use crate::{misc::log::targets, structures::term::Term, types::err};

/// The marker of negation used when displaying a literal.
pub const NEGATION: char = '¬';

/// Markers of negation accepted when parsing a literal.
pub const NEGATION_MARKERS: [char; 2] = [NEGATION, '~'];

/// A predicate applied to some sequence of terms, possibly negated.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    /// Whether the literal is negated.
    negated: bool,

    /// The predicate of the literal.
    predicate: String,

    /// The arguments of the literal, in order.
    arguments: Vec<Term>,
}

impl Literal {
    /// A fresh literal.
    ///
    /// The predicate is expected to be a non-empty identifier, and arguments are best built with [Term::from] so that each name is classified as a variable or a constant.
    /// Parsing a literal from text checks both.
    pub fn new(negated: bool, predicate: impl Into<String>, arguments: Vec<Term>) -> Self {
        let predicate = predicate.into();
        debug_assert!(!predicate.is_empty(), "A literal requires a predicate");
        Literal {
            negated,
            predicate,
            arguments,
        }
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    pub fn arguments(&self) -> &[Term] {
        &self.arguments
    }

    /// The number of arguments of the literal.
    pub fn arity(&self) -> usize {
        self.arguments.len()
    }

    /// The literal with the opposite negation.
    pub fn negate(&self) -> Self {
        Literal {
            negated: !self.negated,
            predicate: self.predicate.clone(),
            arguments: self.arguments.clone(),
        }
    }

    /// The literal with the same predicate and arguments, but with the given arguments in place of the current arguments.
    pub fn with_arguments(&self, arguments: Vec<Term>) -> Self {
        Literal {
            negated: self.negated,
            predicate: self.predicate.clone(),
            arguments,
        }
    }

    /// Whether the literals may be resolved on, if their arguments unify.
    ///
    /// That is, whether the literals share a predicate and exactly one of the two is negated.
    pub fn opposes(&self, other: &Literal) -> bool {
        self.predicate == other.predicate && self.negated != other.negated
    }

    /// Whether the literal is the negation of the other literal.
    pub fn is_negation_of(&self, other: &Literal) -> bool {
        self.opposes(other) && self.arguments == other.arguments
    }
}

fn is_identifier_initial(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Splits an identifier from the start of `text`, returning the identifier and the remaining text.
fn split_identifier(text: &str) -> Option<(&str, &str)> {
    let mut chars = text.char_indices();
    match chars.next() {
        Some((_, initial)) if is_identifier_initial(initial) => {}
        _ => return None,
    }
    let end = chars
        .find(|(_, c)| !is_identifier_char(*c))
        .map_or(text.len(), |(index, _)| index);
    Some(text.split_at(end))
}

fn parse_arguments(inner: &str) -> Option<Vec<Term>> {
    if inner.trim().is_empty() {
        return Some(Vec::default());
    }

    let mut arguments = Vec::default();
    for argument in inner.split(',').map(str::trim) {
        if argument.is_empty() || !argument.chars().all(is_identifier_char) {
            return None;
        }
        arguments.push(Term::from(argument));
    }
    Some(arguments)
}

impl std::str::FromStr for Literal {
    type Err = err::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || {
            log::debug!(target: targets::PARSER, "Malformed literal: {s}");
            err::ParseError::MalformedLiteral(s.to_string())
        };

        let text = s.trim();
        let (negated, text) = match text.strip_prefix(&NEGATION_MARKERS[..]) {
            Some(rest) => (true, rest.trim_start()),
            None => (false, text),
        };

        let (predicate, rest) = split_identifier(text).ok_or_else(malformed)?;

        let rest = rest.trim_start();
        let arguments = if rest.is_empty() {
            Vec::default()
        } else {
            let inner = rest
                .strip_prefix('(')
                .and_then(|rest| rest.strip_suffix(')'))
                .ok_or_else(malformed)?;
            parse_arguments(inner).ok_or_else(malformed)?
        };

        Ok(Literal::new(negated, predicate, arguments))
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negated {
            write!(f, "{NEGATION}")?;
        }
        write!(f, "{}", self.predicate)?;

        if let Some((first, rest)) = self.arguments.split_first() {
            write!(f, "({first}")?;
            for argument in rest {
                write!(f, ",{argument}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}
