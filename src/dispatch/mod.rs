/*!
Dispatches for external observers.

Dispatches allow for optional observation of a chain, e.g. to display a trace of the chain.

Each dispatch is a small message of some pre-determined type, and is sent through a [callback](crate::context::callbacks).
Dispatches are purely observational, and nothing sent through a dispatch influences the chain.

During a refutation dispatches are sent in the following order:
1. [Start](Dispatch::Start), with the goal and the first clause of the chain.
2. A [Step](Dispatch::Step) for each step of the chain.
3. [Revisit](Dispatch::Revisit), if the chain ended on a clause which had already been visited.
4. [Finish](Dispatch::Finish), with the report of the refutation.

As a dispatch is only made if a callback is present, the runtime overhead of unused dispatches is low (a check on an optional).

# Example

Collecting the resolvent of each step.

```rust
# use refutation_chain::config::Config;
# use refutation_chain::context::Context;
# use refutation_chain::dispatch::Dispatch;
# use refutation_chain::structures::clause::ClauseT;
# use std::{cell::RefCell, rc::Rc};
let mut the_context = Context::from_config(Config::default());
assert!(the_context.add_clause_str("¬Hombre(x) ∨ Mortal(x)").is_ok());
assert!(the_context.add_clause_str("Hombre(Marco)").is_ok());

let resolvents = Rc::new(RefCell::new(Vec::default()));
let resolvents_clone = resolvents.clone();
the_context.set_callback_dispatch(Box::new(move |dispatch: Dispatch| {
    if let Dispatch::Step(step) = dispatch {
        if let Some((_, resolution)) = step.resolution {
            resolvents_clone.borrow_mut().push(resolution.resolvent.as_string());
        }
    }
}));

let goal = "Mortal(Marco)".parse().unwrap();
assert!(the_context.refute(&goal).is_proved());
assert_eq!(*resolvents.borrow(), vec!["¬Hombre(Marco)", "⊥"]);
```
*/

use crate::{
    procedures::resolution::Resolution,
    reports::Report,
    structures::{clause::Clause, literal::Literal},
};

/// A step of a chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// The index of the step, counting from one.
    pub index: usize,

    /// The current clause of the chain at the step.
    pub clause: Clause,

    /// Indices of clauses in the knowledge base which failed to resolve with the current clause, in order.
    pub unresolved: Vec<usize>,

    /// The index of the clause in the knowledge base resolved with, together with the details of the resolution, if some clause resolved.
    pub resolution: Option<(usize, Resolution)>,
}

/// Dispatches from a refutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// A chain begins with the given clause, the negation of the given goal.
    Start { goal: Literal, clause: Clause },

    /// A step was taken.
    Step(Step),

    /// The given clause was already visited earlier in the chain.
    Revisit(Clause),

    /// No further dispatches will be sent regarding the current refutation.
    Finish(Report),
}
