//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//! Still, a clause is a set of literals and the order of literals in a clause is only significant for presentation.
//! And, for the order in which pairs of literals are considered during [resolution](crate::procedures::resolution).
//!
//! ```rust
//! # use refutation_chain::structures::clause::{Clause, ClauseT};
//! let mut clause: Clause = vec!["Odia(x,Cesar)".parse().unwrap(),
//!                               "¬Romano(x)".parse().unwrap(),
//!                               "Odia(x, Cesar)".parse().unwrap()];
//! clause.deduplicate();
//!
//! assert_eq!(clause.size(), 2);
//! assert_eq!(clause.as_string(), "Odia(x,Cesar) ∨ ¬Romano(x)");
//! assert_eq!(clause.canonical_key(), vec!["Odia(x,Cesar)", "¬Romano(x)"]);
//! assert!(!clause.is_tautology());
//! ```
//!
//! - The empty clause is always false (never true), and is displayed as ⊥.
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).

use crate::structures::literal::Literal;

/// The display of the empty clause.
pub const BOTTOM: &str = "⊥";

/// The separator of literals when displaying a clause.
pub const DISJUNCTION: &str = " ∨ ";

/// The implementation of a clause as a vector of literals.
pub type Clause = Vec<Literal>;

/// The canonical key of a clause, used to identify clauses which have been visited during a chain.
pub type ClauseKey = Vec<String>;

/// The clause trait.
pub trait ClauseT {
    /// The literals of the clause, separated by a disjunction, or ⊥ if the clause is empty.
    fn as_string(&self) -> String;

    /// The (sorted) textual representation of the literals in the clause, without repetition.
    ///
    /// Two clauses with the same literals have the same key, regardless of the order of those literals.
    fn canonical_key(&self) -> ClauseKey;

    /// Removes any repetition of a literal from the clause, retaining the first instance.
    fn deduplicate(&mut self);

    /// Orders the literals of the clause by their textual representation.
    fn sort_canonical(&mut self);

    /// Whether the clause contains some literal and the negation of that literal.
    fn is_tautology(&self) -> bool;

    /// An iterator over all literals in the clause.
    fn literals(&self) -> impl Iterator<Item = &Literal>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;
}

impl ClauseT for Clause {
    fn as_string(&self) -> String {
        if self.is_empty() {
            return BOTTOM.to_string();
        }

        self.literals()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(DISJUNCTION)
    }

    fn canonical_key(&self) -> ClauseKey {
        let mut key = self
            .literals()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>();
        key.sort_unstable();
        key.dedup();
        key
    }

    fn deduplicate(&mut self) {
        let mut unique: Clause = Vec::with_capacity(self.len());
        for literal in self.drain(..) {
            if !unique.iter().any(|l| *l == literal) {
                unique.push(literal);
            }
        }
        *self = unique;
    }

    fn sort_canonical(&mut self) {
        self.sort_by_cached_key(|literal| literal.to_string());
    }

    fn is_tautology(&self) -> bool {
        self.literals().enumerate().any(|(index, literal)| {
            self.literals()
                .skip(index + 1)
                .any(|other| literal.is_negation_of(other))
        })
    }

    fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl From<Literal> for Clause {
    fn from(literal: Literal) -> Self {
        vec![literal]
    }
}
