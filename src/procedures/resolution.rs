/*!
A single step of (binary) resolution between two clauses.

# Overview

Given clauses *C* and *D*, the literals of *C* are examined in order and for each literal of *C* the literals of *D* are examined in order.
The first pair of literals (*l*, *l'*) such that:
- *l* and *l'* share a predicate,
- exactly one of *l* and *l'* is negated, and
- the arguments of *l* and *l'* [unify](crate::procedures::unification) on some substitution σ,

is resolved on, and the resolvent is the clause made of every literal of *C*σ and *D*σ other than *l*σ and *l'*σ, without repetition.

If the resolvent is a tautology the pair is passed over, and examination continues from the following pair.

```rust
# use refutation_chain::builder::parse_clause;
# use refutation_chain::procedures::resolution::resolve;
# use refutation_chain::structures::clause::ClauseT;
let current = parse_clause("¬Odia(Marco,Cesar)").unwrap();
let candidate = parse_clause("¬Romano(x) ∨ Leal(x,Cesar) ∨ Odia(x,Cesar)").unwrap();

let resolution = resolve(&current, &candidate).unwrap();

assert_eq!(resolution.resolvent.as_string(), "Leal(Marco,Cesar) ∨ ¬Romano(Marco)");
assert_eq!(resolution.substitution.to_string(), "{x ↦ Marco}");
assert_eq!(resolution.cancelled_string(), "¬Odia(Marco,Cesar) ↔ Odia(x,Cesar)");
```

# Limitations

Only the first pair which resolves to a clause other than a tautology is used, and so resolution on some other pair is never considered.
Further, variables are shared between the two clauses.
That is, the clauses are not renamed apart before unification, and so `x` in *C* is the same variable as `x` in *D*.
*/

use crate::{
    misc::log::targets,
    procedures::unification::unify_literals,
    structures::{
        clause::{Clause, ClauseT},
        literal::Literal,
        substitution::Substitution,
    },
};

/// The details of resolving two clauses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// The clause obtained by resolution.
    pub resolvent: Clause,

    /// The substitution which unified the literals resolved on.
    pub substitution: Substitution,

    /// The literals resolved on, from the first and second clause respectively, prior to substitution.
    pub cancelled: (Literal, Literal),
}

impl Resolution {
    /// The literals resolved on, as a string.
    pub fn cancelled_string(&self) -> String {
        format!("{} ↔ {}", self.cancelled.0, self.cancelled.1)
    }
}

/// Resolves `current` with `candidate`, with the literals of the resolvent ordered canonically.
pub fn resolve(current: &Clause, candidate: &Clause) -> Option<Resolution> {
    first_resolution(current, candidate, true)
}

/// Resolves `current` with `candidate`, with the literals of the resolvent in the order derived.
///
/// That is, the remaining literals of `current` followed by the remaining literals of `candidate`.
pub fn resolve_in_derived_order(current: &Clause, candidate: &Clause) -> Option<Resolution> {
    first_resolution(current, candidate, false)
}

fn first_resolution(current: &Clause, candidate: &Clause, sort: bool) -> Option<Resolution> {
    for current_literal in current {
        for candidate_literal in candidate {
            if !current_literal.opposes(candidate_literal) {
                continue;
            }

            let Ok(substitution) = unify_literals(current_literal, candidate_literal) else {
                continue;
            };

            let cancelled_current = substitution.apply_to_literal(current_literal);
            let cancelled_candidate = substitution.apply_to_literal(candidate_literal);

            let mut resolvent: Clause = substitution
                .apply_to_clause(current)
                .into_iter()
                .chain(substitution.apply_to_clause(candidate))
                .filter(|literal| *literal != cancelled_current && *literal != cancelled_candidate)
                .collect();
            resolvent.deduplicate();

            if resolvent.is_tautology() {
                log::debug!(target: targets::RESOLUTION, "Tautology passed over: {}", resolvent.as_string());
                continue;
            }

            if sort {
                resolvent.sort_canonical();
            }

            log::debug!(target: targets::RESOLUTION,
                "Resolved {current_literal} with {candidate_literal} on {substitution} to {}", resolvent.as_string());

            return Some(Resolution {
                resolvent,
                substitution,
                cancelled: (current_literal.clone(), candidate_literal.clone()),
            });
        }
    }

    None
}
