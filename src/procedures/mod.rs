/*!
Procedures, from unification to a complete refutation.

- [unification] of terms and literals.
- [resolution] of a pair of clauses, the single step of a chain.
- [refutation], the chain from the negation of a goal.
*/

pub mod refutation;
pub mod resolution;
pub mod unification;
