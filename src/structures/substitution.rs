//! Substitutions, aka. a mapping from variables to terms.
//!
//! A substitution is built incrementally during [unification](crate::procedures::unification).
//!
//! Bindings are kept in the order they were made, and so the display of a substitution is deterministic.
//! Further, a variable may be bound to another variable, in which case the value of the variable is found by following bindings until either a constant or an unbound variable is found.
//!
//! ```rust
//! # use refutation_chain::structures::substitution::Substitution;
//! # use refutation_chain::structures::term::Term;
//! let mut substitution = Substitution::default();
//! substitution.bind("x", Term::from("y"));
//! substitution.bind("y", Term::from("Marco"));
//!
//! assert_eq!(substitution.walk(&Term::from("x")), &Term::from("Marco"));
//! assert_eq!(substitution.to_string(), "{x ↦ y, y ↦ Marco}");
//! ```
//!
//! A binding which would lead back to its own variable is skipped, so following bindings always terminates.
//!
//! ```rust
//! # use refutation_chain::structures::substitution::Substitution;
//! # use refutation_chain::structures::term::Term;
//! let mut substitution = Substitution::default();
//! substitution.bind("x", Term::from("y"));
//! substitution.bind("y", Term::from("x"));
//!
//! assert_eq!(substitution.len(), 1);
//! assert_eq!(substitution.walk(&Term::from("y")), &Term::from("y"));
//! ```

use crate::{
    misc::log::targets,
    structures::{clause::Clause, clause::ClauseT, literal::Literal, term::Term},
};

/// A sequence of bindings from (names of) variables to terms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Substitution {
    bindings: Vec<(String, Term)>,
}

impl Substitution {
    /// Binds a variable to a term.
    ///
    /// The variable is assumed to be unbound, as only the first binding of a variable is followed.
    ///
    /// Binding a variable to itself, or to a term whose value is the variable, is skipped.
    pub fn bind(&mut self, variable: &str, term: Term) {
        if let Term::Variable(value) = self.walk(&term) {
            if value == variable {
                log::trace!(target: targets::UNIFICATION, "Skipped binding {variable} ↦ {term}");
                return;
            }
        }
        self.bindings.push((variable.to_string(), term));
    }

    /// The term a variable is directly bound to, if any.
    pub fn lookup(&self, variable: &str) -> Option<&Term> {
        self.bindings
            .iter()
            .find(|(bound, _)| bound == variable)
            .map(|(_, term)| term)
    }

    /// The value of a term, following bindings until a constant or an unbound variable is found.
    pub fn walk<'t>(&'t self, term: &'t Term) -> &'t Term {
        let mut value = term;
        while let Term::Variable(name) = value {
            match self.lookup(name) {
                Some(bound) => value = bound,
                None => break,
            }
        }
        value
    }

    /// The literal with each argument replaced by its value.
    pub fn apply_to_literal(&self, literal: &Literal) -> Literal {
        let arguments = literal
            .arguments()
            .iter()
            .map(|argument| self.walk(argument).clone())
            .collect();
        literal.with_arguments(arguments)
    }

    /// The clause with the substitution applied to each literal, without repetition.
    pub fn apply_to_clause(&self, clause: &Clause) -> Clause {
        let mut substituted: Clause = clause
            .iter()
            .map(|literal| self.apply_to_literal(literal))
            .collect();
        substituted.deduplicate();
        substituted
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// An iterator over the bindings, in the order they were made.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.bindings
            .iter()
            .map(|(variable, term)| (variable.as_str(), term))
    }
}

impl std::fmt::Display for Substitution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, (variable, term)) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{variable} ↦ {term}")?;
        }
        write!(f, "}}")
    }
}
