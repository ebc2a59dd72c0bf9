//! Key structures, such as terms, literals, and clauses.
//!
//! # Other structures without an implementation.
//!
//! ## Knowledge bases
//!
//! A knowledge base is a sequence of [clauses](clause), interpreted as the conjunction of those clauses.
//! The order of the sequence is significant, as a chain always considers the clauses of a knowledge base in order.
//!
//! The knowledge base of a [context](crate::context) is a plain vector of clauses, and is not modified during a refutation.
//!
//! ## Goals
//!
//! A goal is a single [literal](literal).
//! To prove a goal the negation of the goal is taken as the first clause of a chain.

pub mod clause;
pub mod literal;
pub mod substitution;
pub mod term;
