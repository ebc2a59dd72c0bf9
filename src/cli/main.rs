#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::{fs::File, io::BufWriter};

use refutation_chain::{
    builder::example::write_example,
    context::Context,
    reports::Report,
    structures::literal::Literal,
    types::err::{self, ErrorKind},
};

mod parse_args;
mod read;
mod trace;

use read::ReadError;

fn main() {
    #[cfg(feature = "logger")]
    env_logger::init();

    let matches = parse_args::cli().get_matches();

    let config = parse_args::config_from_args(&matches);
    let options = parse_args::options_from_args(&matches);

    if let Some(path) = &options.write_example {
        let written = File::create(path).and_then(|file| write_example(BufWriter::new(file)));
        match written {
            Ok(()) => println!("Example written to {path:?}"),
            Err(e) => {
                println!("Failed to write example to {path:?}: {e}");
                std::process::exit(1);
            }
        }

        if options.paths.is_empty() {
            std::process::exit(0);
        }
    }

    if options.paths.is_empty() {
        println!("Some path to a knowledge base is required.");
        std::process::exit(1);
    }

    let mut the_context = Context::from_config(config);
    let mut goals: Vec<Literal> = Vec::default();

    for path in &options.paths {
        if !options.quiet {
            println!("Reading knowledge base from {path:?}");
        }

        match read::read_knowledge_base(path, &mut the_context) {
            Ok(info) => {
                if !options.quiet {
                    println!("Added {} clauses and {} goals", info.added_clauses, info.goals.len());
                }
                goals.extend(info.goals);
            }

            Err(e @ ReadError::ParseError(_)) => {
                println!("{e}");
                std::process::exit(2);
            }

            Err(e) => {
                println!("{e}");
                std::process::exit(1);
            }
        }
    }

    if let Some(goal) = &options.goal {
        match goal.parse::<Literal>() {
            Ok(goal) => goals = vec![goal],
            Err(e) => {
                println!("Parse error: '{:?}'.", ErrorKind::from(e));
                std::process::exit(2);
            }
        }
    }

    if goals.is_empty() {
        println!("Parse error: '{:?}'.", ErrorKind::from(err::ParseError::MissingGoal));
        std::process::exit(2);
    }

    if !options.quiet {
        println!();
        trace::print_knowledge_base(&the_context.knowledge_base);
        the_context.set_callback_dispatch(trace::printer(&the_context.knowledge_base));
    }

    let mut report = Report::Unknown;
    for goal in &goals {
        report = the_context.refute(goal);
        trace::print_verdict(&goal.to_string(), report);
    }

    std::process::exit(trace::exit_code(report))
}
