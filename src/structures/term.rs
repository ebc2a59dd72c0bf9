//! Terms, aka. the arguments of a literal.
//!
//! A term is a name, and is either a variable or a constant.
//! Variables are names beginning with a lowercase character, and all other names are constants.
//!
//! ```rust
//! # use refutation_chain::structures::term::Term;
//! assert!(Term::from("x").is_variable());
//! assert!(Term::from("Marco").is_constant());
//! assert!(Term::from("_a").is_constant());
//! ```
//!
//! Terms have no internal structure, and so there are no function terms.

/// A variable or a constant.
///
/// A term is best built with [Term::from], which classifies a name by its initial.
/// The variants are public for matching, and building a variant directly skips that classification.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    /// A name with a lowercase initial.
    Variable(String),

    /// Any other name.
    Constant(String),
}

impl Term {
    /// The name of the term.
    pub fn name(&self) -> &str {
        match self {
            Self::Variable(name) | Self::Constant(name) => name,
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Self::Variable(_))
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }
}

impl From<&str> for Term {
    fn from(name: &str) -> Self {
        match name.chars().next() {
            Some(initial) if initial.is_lowercase() => Self::Variable(name.to_string()),
            _ => Self::Constant(name.to_string()),
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
