/*!
The context --- to which a knowledge base is added and within which refutations take place, etc.

# Example
```rust
# use refutation_chain::context::Context;
# use refutation_chain::config::Config;
# use refutation_chain::reports::{Reason, Report};
# use refutation_chain::structures::literal::Literal;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_clause_str("Pompeyano(Marco)").is_ok());
assert!(the_context.add_clause_str("¬Pompeyano(x) ∨ Romano(x)").is_ok());

let romano: Literal = "Romano(Marco)".parse().unwrap();
assert_eq!(the_context.refute(&romano), Report::Proved);
assert_eq!(the_context.counters.steps, 2);

let hombre: Literal = "Hombre(Marco)".parse().unwrap();
assert_eq!(the_context.refute(&hombre), Report::Disproved(Reason::Stuck));
```

A context may be used for any number of refutations, and the knowledge base is unchanged by a refutation.
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;

use crate::{
    builder::parse_clause,
    config::Config,
    misc::log::targets,
    structures::clause::{Clause, ClauseT},
    types::err::{self, ErrorKind},
};

/// A context, holding a knowledge base and the configuration of refutations.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// The knowledge base, in the order clauses were added.
    pub knowledge_base: Vec<Clause>,

    /// Counts regarding the most recent refutation.
    pub counters: Counters,

    /// A callback to receive dispatches from a refutation.
    pub(crate) callback_dispatch: Option<Box<callbacks::CallbackOnDispatch>>,
}

impl Context {
    /// A context with an empty knowledge base.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            knowledge_base: Vec::default(),
            counters: Counters::default(),
            callback_dispatch: None,
        }
    }

    /// Adds a clause to the end of the knowledge base.
    ///
    /// Any repetition of a literal in the clause is removed.
    /// Though, a clause which contains some literal and its negation is added.
    pub fn add_clause(&mut self, clause: impl Into<Clause>) -> Result<(), ErrorKind> {
        let mut clause = clause.into();
        if clause.is_empty() {
            return Err(ErrorKind::from(err::ClauseDBError::EmptyClause));
        }
        clause.deduplicate();

        log::trace!(target: targets::KNOWLEDGE_BASE, "Added clause {}: {}", self.knowledge_base.len() + 1, clause.as_string());
        self.knowledge_base.push(clause);
        Ok(())
    }

    /// Parses a clause, with literals separated by `∨` or `|`, and adds the clause to the end of the knowledge base.
    pub fn add_clause_str(&mut self, text: &str) -> Result<(), ErrorKind> {
        let clause = parse_clause(text)?;
        self.add_clause(clause)
    }

    /// The number of clauses in the knowledge base.
    pub fn clause_count(&self) -> usize {
        self.knowledge_base.len()
    }
}
