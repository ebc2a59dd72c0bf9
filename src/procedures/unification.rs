/*!
Unification of (flat) terms and literals.

Two terms unify if there is some [substitution](crate::structures::substitution) which makes the terms identical.
As terms have no structure, the cases are few:
- Two terms with the same value (on the current substitution) unify without any further binding.
- A variable without a value unifies with any other term, by binding the variable to the term.
- Two distinct constants do not unify.

Before comparison each term is replaced by its value on the current substitution.
So, a bound variable is never bound a second time, and a conflicting binding is a failure to unify the values of the variable.

```rust
# use refutation_chain::procedures::unification::unify_literals;
# use refutation_chain::structures::literal::Literal;
let odia_x: Literal = "Odia(x,Cesar)".parse().unwrap();
let odia_marco: Literal = "Odia(Marco,Cesar)".parse().unwrap();

let substitution = unify_literals(&odia_marco, &odia_x).unwrap();
assert_eq!(substitution.to_string(), "{x ↦ Marco}");
assert_eq!(substitution.apply_to_literal(&odia_x), odia_marco);
```

# Occurs check

No occurs check is made.
As terms have no structure, the only term in which a variable occurs is the variable itself, and a variable is equal to itself on any substitution.
So, a variable is never bound to itself, and a chain of bindings never returns to a variable.
*/

use crate::{
    misc::log::targets,
    structures::{literal::Literal, substitution::Substitution, term::Term},
    types::err,
};

/// Extends `substitution` to unify the terms `a` and `b`, if possible.
///
/// On an error the substitution is unchanged.
pub fn unify_terms(
    a: &Term,
    b: &Term,
    substitution: &mut Substitution,
) -> Result<(), err::UnificationError> {
    let a = substitution.walk(a).clone();
    let b = substitution.walk(b).clone();

    if a == b {
        return Ok(());
    }

    match (a, b) {
        (Term::Variable(variable), b) => {
            log::trace!(target: targets::UNIFICATION, "{variable} ↦ {b}");
            substitution.bind(&variable, b);
            Ok(())
        }

        (a, Term::Variable(variable)) => {
            log::trace!(target: targets::UNIFICATION, "{variable} ↦ {a}");
            substitution.bind(&variable, a);
            Ok(())
        }

        (a, b) => {
            log::trace!(target: targets::UNIFICATION, "Clash: {a} and {b}");
            Err(err::UnificationError::Clash)
        }
    }
}

/// A substitution which unifies the arguments of the given literals, if one exists.
///
/// The literals must share a predicate and arity, though the negation of either literal is ignored.
/// Arguments are unified position by position, with the first failure ending the attempt.
pub fn unify_literals(a: &Literal, b: &Literal) -> Result<Substitution, err::UnificationError> {
    if a.predicate() != b.predicate() {
        return Err(err::UnificationError::Predicate);
    }

    if a.arity() != b.arity() {
        return Err(err::UnificationError::Arity);
    }

    let mut substitution = Substitution::default();
    for (a_argument, b_argument) in a.arguments().iter().zip(b.arguments()) {
        unify_terms(a_argument, b_argument, &mut substitution)?;
    }
    Ok(substitution)
}

#[cfg(test)]
mod unification_tests {
    use super::*;

    #[test]
    fn identical_constants() {
        let mut substitution = Substitution::default();
        let marco = Term::from("Marco");

        assert!(unify_terms(&marco, &marco, &mut substitution).is_ok());
        assert!(substitution.is_empty());
    }

    #[test]
    fn distinct_constants() {
        let mut substitution = Substitution::default();

        assert_eq!(
            unify_terms(&Term::from("Marco"), &Term::from("Cesar"), &mut substitution),
            Err(err::UnificationError::Clash)
        );
        assert!(substitution.is_empty());
    }

    #[test]
    fn symmetry() {
        let x = Term::from("x");
        let y = Term::from("y");
        let marco = Term::from("Marco");

        let mut forward = Substitution::default();
        let mut backward = Substitution::default();
        assert!(unify_terms(&x, &marco, &mut forward).is_ok());
        assert!(unify_terms(&marco, &x, &mut backward).is_ok());
        assert_eq!(forward, backward);

        let mut forward = Substitution::default();
        let mut backward = Substitution::default();
        assert!(unify_terms(&x, &y, &mut forward).is_ok());
        assert!(unify_terms(&y, &x, &mut backward).is_ok());
        assert_eq!(forward.lookup("x"), Some(&y));
        assert_eq!(backward.lookup("y"), Some(&x));
    }

    #[test]
    fn bound_variable_is_dereferenced() {
        let mut substitution = Substitution::default();
        let x = Term::from("x");

        assert!(unify_terms(&x, &Term::from("Marco"), &mut substitution).is_ok());
        assert!(unify_terms(&x, &Term::from("Marco"), &mut substitution).is_ok());
        assert_eq!(substitution.len(), 1);

        assert_eq!(
            unify_terms(&x, &Term::from("Cesar"), &mut substitution),
            Err(err::UnificationError::Clash)
        );
        assert_eq!(substitution.len(), 1);
    }

    #[test]
    fn chained_bindings() {
        let mut substitution = Substitution::default();
        let x = Term::from("x");
        let y = Term::from("y");

        assert!(unify_terms(&x, &y, &mut substitution).is_ok());
        assert!(unify_terms(&y, &Term::from("Marco"), &mut substitution).is_ok());
        assert_eq!(substitution.walk(&x), &Term::from("Marco"));

        assert_eq!(
            unify_terms(&x, &Term::from("Cesar"), &mut substitution),
            Err(err::UnificationError::Clash)
        );
    }

    #[test]
    fn occurs_check_is_not_required() {
        let mut substitution = Substitution::default();
        let x = Term::from("x");
        let y = Term::from("y");

        assert!(unify_terms(&x, &x, &mut substitution).is_ok());
        assert!(substitution.is_empty());

        assert!(unify_terms(&x, &y, &mut substitution).is_ok());
        assert!(unify_terms(&y, &x, &mut substitution).is_ok());
        assert_eq!(substitution.len(), 1);
        assert_eq!(substitution.walk(&y), &y);
        assert_eq!(substitution.walk(&x), &y);
    }

    #[test]
    fn literals() {
        let fact = "Leal(Marco,Cesar)".parse::<Literal>().unwrap();
        let rule = "¬Leal(x,y)".parse::<Literal>().unwrap();

        let substitution = unify_literals(&fact, &rule).unwrap();
        assert_eq!(substitution.to_string(), "{x ↦ Marco, y ↦ Cesar}");
    }

    #[test]
    fn repeated_variable() {
        let repeated = "P(x,x)".parse::<Literal>().unwrap();

        let same = "P(Marco,Marco)".parse::<Literal>().unwrap();
        assert_eq!(unify_literals(&repeated, &same).map(|s| s.len()), Ok(1));

        let different = "P(A,B)".parse::<Literal>().unwrap();
        assert_eq!(unify_literals(&repeated, &different), Err(err::UnificationError::Clash));

        let mixed = "P(y,Marco)".parse::<Literal>().unwrap();
        let substitution = unify_literals(&repeated, &mixed).unwrap();
        assert_eq!(
            substitution.apply_to_literal(&"P(x,y)".parse::<Literal>().unwrap()),
            "P(Marco,Marco)".parse::<Literal>().unwrap()
        );
    }

    #[test]
    fn mismatched_literals() {
        assert_eq!(
            unify_literals(&"P(a)".parse::<Literal>().unwrap(), &"Q(a)".parse::<Literal>().unwrap()),
            Err(err::UnificationError::Predicate)
        );
        assert_eq!(
            unify_literals(&"P(a)".parse::<Literal>().unwrap(), &"P(a,b)".parse::<Literal>().unwrap()),
            Err(err::UnificationError::Arity)
        );
    }
}
