/*!
A procedure to prove a goal by refutation, as a single chain of resolution steps.

# Overview

The chain begins with the clause containing only the negation of the goal.
If the goal is negated, the negation is removed rather than doubled.

At each step:
- If the current clause has been visited earlier in the chain the chain ends, as it would only repeat itself.
  Clauses are compared by their [canonical key](crate::structures::clause::ClauseT::canonical_key), and so the order of literals in a clause is ignored.
- Otherwise, the current clause is [resolved](crate::procedures::resolution) with each clause of the knowledge base, in order, until some resolution succeeds.
  + If the resolvent is empty the chain ends, as the empty clause has been derived.
  + If the resolvent is not empty the resolvent becomes the current clause, and the chain continues.
  + If no clause resolves with the current clause the chain ends.

In pseudocode:

```text
current = { ¬goal }
visited = ∅

loop:
    if current ∈ visited: return Disproved(Loop)
    visited = visited ∪ { current }

    for clause in knowledge base:
        if current resolves with clause to resolvent:
            if resolvent = ⊥: return Proved
            current = resolvent
            continue loop

    return Disproved(Stuck)
```

# Limitations

A chain is a single path.
Only the first resolution found is taken at each step, and no alternative is ever considered.
So, a goal may fail to be proved even though the goal follows from the knowledge base.

Further, a chain may be unbounded if each clause of the chain is distinct, e.g. if the literals of each resolvent grow.
To bound a chain, a [step limit](crate::config::Config::step_limit) may be set.
*/

use std::collections::HashSet;

use crate::{
    config::Config,
    context::{Context, Counters},
    dispatch::{Dispatch, Step},
    misc::log::targets,
    procedures::resolution::{resolve, resolve_in_derived_order, Resolution},
    reports::{Reason, Report},
    structures::{
        clause::{Clause, ClauseKey, ClauseT},
        literal::Literal,
    },
    types::err::ErrorKind,
};

/// Attempts to refute the negation of `goal` from `knowledge_base`, sending dispatches to `dispatcher`, if present.
///
/// ```rust
/// # use refutation_chain::builder::parse_clause;
/// # use refutation_chain::config::Config;
/// # use refutation_chain::procedures::refutation::resolve_refutation;
/// # use refutation_chain::reports::{Reason, Report};
/// let knowledge_base = vec![parse_clause("Hombre(Marco)").unwrap()];
///
/// let goal = "Romano(Marco)".parse().unwrap();
/// let report = resolve_refutation(&knowledge_base, &goal, &Config::default(), None);
///
/// assert_eq!(report, Report::Disproved(Reason::Stuck));
/// ```
pub fn resolve_refutation(
    knowledge_base: &[Clause],
    goal: &Literal,
    config: &Config,
    dispatcher: Option<&mut dyn FnMut(Dispatch)>,
) -> Report {
    let mut counters = Counters::default();
    chain(knowledge_base, goal, config, &mut counters, dispatcher)
}

impl Context {
    /// Attempts to refute the negation of `goal` from the knowledge base of the context.
    ///
    /// Counters of the context are reset before the refutation, and dispatches are sent to the dispatch callback, if present.
    pub fn refute(&mut self, goal: &Literal) -> Report {
        let dispatcher: Option<&mut dyn FnMut(Dispatch)> = match &mut self.callback_dispatch {
            Some(callback) => Some(callback.as_mut()),
            None => None,
        };

        chain(
            &self.knowledge_base,
            goal,
            &self.config,
            &mut self.counters,
            dispatcher,
        )
    }

    /// Parses a goal and attempts to refute the negation of the goal, as with [refute](Context::refute).
    pub fn refute_str(&mut self, goal: &str) -> Result<Report, ErrorKind> {
        let goal: Literal = goal.parse()?;
        Ok(self.refute(&goal))
    }
}

fn chain(
    knowledge_base: &[Clause],
    goal: &Literal,
    config: &Config,
    counters: &mut Counters,
    mut dispatcher: Option<&mut dyn FnMut(Dispatch)>,
) -> Report {
    *counters = Counters::default();

    let resolution_method: fn(&Clause, &Clause) -> Option<Resolution> =
        match config.canonical_order.value {
            true => resolve,
            false => resolve_in_derived_order,
        };

    let mut current: Clause = vec![goal.negate()];
    let mut visited: HashSet<ClauseKey> = HashSet::default();

    log::info!(target: targets::REFUTATION, "Goal {goal}, from {}", current.as_string());

    if let Some(dispatcher) = dispatcher.as_deref_mut() {
        dispatcher(Dispatch::Start {
            goal: goal.clone(),
            clause: current.clone(),
        });
    }

    let report = 'chain: loop {
        if !visited.insert(current.canonical_key()) {
            log::info!(target: targets::REFUTATION, "Revisited {}", current.as_string());

            if let Some(dispatcher) = dispatcher.as_deref_mut() {
                dispatcher(Dispatch::Revisit(current.clone()));
            }
            break 'chain Report::Disproved(Reason::Loop);
        }

        let limit = config.step_limit.value;
        if limit != 0 && counters.steps >= limit {
            log::info!(target: targets::REFUTATION, "Step limit of {limit} reached");
            break 'chain Report::Unknown;
        }

        counters.steps += 1;
        log::info!(target: targets::REFUTATION, "Step {}: {}", counters.steps, current.as_string());

        let mut unresolved = Vec::default();
        let mut resolved: Option<(usize, Resolution)> = None;

        for (index, clause) in knowledge_base.iter().enumerate() {
            counters.attempts += 1;
            match resolution_method(&current, clause) {
                Some(resolution) => {
                    resolved = Some((index, resolution));
                    break;
                }
                None => unresolved.push(index),
            }
        }

        if let Some(dispatcher) = dispatcher.as_deref_mut() {
            dispatcher(Dispatch::Step(Step {
                index: counters.steps,
                clause: current.clone(),
                unresolved,
                resolution: resolved.clone(),
            }));
        }

        match resolved {
            None => {
                log::info!(target: targets::REFUTATION, "No resolution from {}", current.as_string());
                break 'chain Report::Disproved(Reason::Stuck);
            }

            Some((index, resolution)) => {
                log::debug!(target: targets::REFUTATION,
                    "Resolved with clause {} to {}", index + 1, resolution.resolvent.as_string());

                if resolution.resolvent.is_empty() {
                    break 'chain Report::Proved;
                }
                current = resolution.resolvent;
            }
        }
    };

    log::info!(target: targets::REFUTATION, "{report} after {} steps", counters.steps);

    if let Some(dispatcher) = dispatcher.as_deref_mut() {
        dispatcher(Dispatch::Finish(report));
    }

    report
}

#[cfg(test)]
mod refutation_tests {
    use super::*;
    use crate::builder::parse_clause;

    #[test]
    fn negated_goal_is_stripped() {
        let kb = vec![parse_clause("¬Romano(Marco)").unwrap()];
        let mut clauses = Vec::default();
        let mut collect = |dispatch: Dispatch| {
            if let Dispatch::Start { clause, .. } = dispatch {
                clauses.push(clause.as_string());
            }
        };

        let report = resolve_refutation(&kb, &"¬Romano(Marco)".parse::<Literal>().unwrap(), &Config::default(), Some(&mut collect));

        assert_eq!(report, Report::Proved);
        assert_eq!(clauses, vec!["Romano(Marco)"]);
    }

    #[test]
    fn stuck_on_empty_knowledge_base() {
        let mut counters = Counters::default();
        let report = chain(&[], &"P".parse::<Literal>().unwrap(), &Config::default(), &mut counters, None);

        assert_eq!(report, Report::Disproved(Reason::Stuck));
        assert_eq!(counters.steps, 1);
        assert_eq!(counters.attempts, 0);
    }

    #[test]
    fn loop_detected() {
        let kb = vec![parse_clause("P(x) ∨ ¬Q(x)").unwrap(), parse_clause("Q(x) ∨ ¬P(x)").unwrap()];
        let mut counters = Counters::default();

        let report = chain(&kb, &"P(A)".parse::<Literal>().unwrap(), &Config::default(), &mut counters, None);

        assert_eq!(report, Report::Disproved(Reason::Loop));
        assert_eq!(counters.steps, 2);
    }

    #[test]
    fn step_limit() {
        let kb = vec![parse_clause("P(x) ∨ ¬Q(x)").unwrap(), parse_clause("Q(x) ∨ ¬P(x)").unwrap()];
        let mut config = Config::default();
        assert!(config.step_limit.set(1));

        let mut counters = Counters::default();
        let report = chain(&kb, &"P(A)".parse::<Literal>().unwrap(), &config, &mut counters, None);

        assert_eq!(report, Report::Unknown);
        assert_eq!(counters.steps, 1);
    }

    #[test]
    fn first_clause_is_taken() {
        // Resolving with the first clause leads nowhere, though the second clause would refute the goal.
        let kb = vec![parse_clause("P(A) ∨ Q(A)").unwrap(), parse_clause("P(A)").unwrap()];
        let mut counters = Counters::default();

        let report = chain(&kb, &"P(A)".parse::<Literal>().unwrap(), &Config::default(), &mut counters, None);

        assert_eq!(report, Report::Disproved(Reason::Stuck));
        assert_eq!(counters.steps, 2);
    }
}
