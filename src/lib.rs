//! A library for proving first-order goals by resolution refutation.
//!
//! refutation_chain negates a goal literal and, starting from the clause containing only that negation, repeatedly resolves the 'current' clause against the clauses of a knowledge base.
//! At each step the first applicable resolvent is taken and becomes the new current clause, until either the empty clause is derived, no resolvent can be found, or some clause recurs.
//!
//! The procedure is a single deterministic chain rather than a search.
//! No alternatives are explored once a resolvent is found, and so a goal may fail to be proved even though some proof exists.
//! In this respect the library is intended to illustrate resolution and unification, rather than to be a complete prover.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! A context is built from a [configuration](crate::config) and holds a knowledge base.
//! Clauses may be added through a [text representation](crate::context::Context::read_knowledge_base) of a knowledge base or [programatically](crate::context::Context::add_clause).
//!
//! Useful starting points, then, may be:
//! - The [structures] to familiarise yourself with terms, literals, clauses, and substitutions.
//! - The [unification](crate::procedures::unification) and [resolution](crate::procedures::resolution) procedures, which make up a single step of the chain.
//! - The [refutation procedure](crate::procedures::refutation) to inspect the dynamics of a chain.
//! - [Dispatches](crate::dispatch) to observe a chain as it happens.
//!
//! # Examples
//!
//! + Prove a goal from a small knowledge base.
//!
//! ```rust
//! # use refutation_chain::config::Config;
//! # use refutation_chain::context::Context;
//! # use refutation_chain::reports::Report;
//! # use refutation_chain::structures::literal::Literal;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let knowledge_base = "
//! Hombre(Marco)
//! ¬Hombre(x) ∨ Mortal(x)
//! ";
//!
//! assert!(the_context.read_knowledge_base(knowledge_base.as_bytes()).is_ok());
//!
//! let goal: Literal = "Mortal(Marco)".parse().unwrap();
//! assert_eq!(the_context.refute(&goal), Report::Proved);
//! ```
//!
//! + Observe each step of a chain.
//!
//! ```rust
//! # use refutation_chain::config::Config;
//! # use refutation_chain::context::Context;
//! # use refutation_chain::dispatch::Dispatch;
//! # use refutation_chain::reports::{Reason, Report};
//! # use std::{cell::RefCell, rc::Rc};
//! let mut the_context = Context::from_config(Config::default());
//! assert!(the_context.add_clause_str("P(a)").is_ok());
//!
//! let steps = Rc::new(RefCell::new(0));
//! let step_count = steps.clone();
//! the_context.set_callback_dispatch(Box::new(move |dispatch: Dispatch| {
//!     if let Dispatch::Step(_) = dispatch {
//!         *step_count.borrow_mut() += 1;
//!     }
//! }));
//!
//! let goal = "Q(a)".parse().unwrap();
//! assert_eq!(the_context.refute(&goal), Report::Disproved(Reason::Stuck));
//! assert_eq!(*steps.borrow(), 1);
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to unification can be filtered with `RUST_LOG=unification …` or,
//! - Logs of each step of a chain, without details of the resolutions attempted, can be found with `RUST_LOG=refutation=info …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod dispatch;
pub mod reports;

pub mod misc;
