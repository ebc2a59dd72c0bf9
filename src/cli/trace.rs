use crossterm::style::Stylize;

use refutation_chain::{
    dispatch::{Dispatch, Step},
    reports::{Reason, Report},
    structures::clause::{Clause, ClauseT},
};

/// Writes the knowledge base, numbered from one.
pub fn print_knowledge_base(knowledge_base: &[Clause]) {
    println!("Knowledge base:");
    for (index, clause) in knowledge_base.iter().enumerate() {
        println!(" {}. {}", index + 1, clause.as_string());
    }
}

/// A callback which writes each dispatch of a chain as it happens.
///
/// Clauses of the knowledge base are written as strings, and so are taken once when the printer is made.
pub fn printer(knowledge_base: &[Clause]) -> Box<dyn FnMut(Dispatch)> {
    let clauses: Vec<String> = knowledge_base.iter().map(|clause| clause.as_string()).collect();

    Box::new(move |dispatch: Dispatch| match dispatch {
        Dispatch::Start { goal, clause } => {
            println!();
            println!("Goal:         {goal}");
            println!("Negated goal: {}", clause.as_string());
            println!("{}", "-".repeat(64));
        }

        Dispatch::Step(step) => print_step(&step, &clauses),

        Dispatch::Revisit(clause) => {
            println!();
            println!("{} {}", "Revisited:".yellow(), clause.as_string());
            println!("The chain can make no further progress.");
        }

        Dispatch::Finish(_) => println!("{}", "-".repeat(64)),
    })
}

fn print_step(step: &Step, clauses: &[String]) {
    let kb = |index: usize| match clauses.get(index) {
        Some(clause) => clause.as_str(),
        None => "?",
    };

    println!();
    println!("{}", format!("Step {}", step.index).bold());
    println!(" Current clause: {}", step.clause.as_string());

    for index in &step.unresolved {
        println!("  - No resolution with KB[{}]: {}", index + 1, kb(*index));
    }

    match &step.resolution {
        Some((index, resolution)) => {
            println!("  → Resolved with KB[{}]: {}", index + 1, kb(*index));
            println!("    Cancelled:    {}", resolution.cancelled_string());
            if !resolution.substitution.is_empty() {
                println!("    Substitution: {}", resolution.substitution);
            }
            match resolution.resolvent.is_empty() {
                true => println!("    Resolvent:    ⊥ (the empty clause)"),
                false => println!("    Resolvent:    {}", resolution.resolvent.as_string()),
            }
        }

        None => println!("  No clause of the knowledge base resolves with the current clause."),
    }
}

/// Writes the result of a chain for `goal`.
pub fn print_verdict(goal: &str, report: Report) {
    let verdict = match report {
        Report::Proved => format!("{goal} is proved").green().bold(),
        Report::Disproved(Reason::Loop) => format!("{goal} is not proved (loop)").red().bold(),
        Report::Disproved(Reason::Stuck) => format!("{goal} is not proved (stuck)").red().bold(),
        Report::Unknown => format!("{goal} is unknown (step limit)").yellow().bold(),
    };
    println!("{verdict}");
}

/// The exit code of the cli, given the report of the final chain.
pub fn exit_code(report: Report) -> i32 {
    match report {
        Report::Proved => 10,
        Report::Disproved(_) => 20,
        Report::Unknown => 30,
    }
}
