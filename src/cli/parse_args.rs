use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use refutation_chain::config::Config;

/// Options of the cli which have no counterpart in a [Config].
#[derive(Default)]
pub struct CliOptions {
    /// Knowledge bases to read, in order, as a single knowledge base.
    pub paths: Vec<PathBuf>,

    /// A goal given on the command line, in place of any goals read.
    pub goal: Option<String>,

    /// Omit the trace of each chain.
    pub quiet: bool,

    /// A path to write the example knowledge base to.
    pub write_example: Option<PathBuf>,
}

pub fn cli() -> Command {
    Command::new("refutation_cli")
        .about("Determines whether a goal follows from a knowledge base, by a chain of resolution steps from the negation of the goal")
        .version("0.0.1")

        .arg(Arg::new("paths")
            .required(false)
            .trailing_var_arg(true)
            .num_args(0..)
            .value_parser(value_parser!(PathBuf))
            .help("The knowledge bases to read (as a single knowledge base)."))

        .arg(Arg::new("goal")
            .short('g')
            .long("goal")
            .value_name("LITERAL")
            .value_parser(value_parser!(String))
            .required(false)
            .num_args(1)
            .help("The goal to prove.")
            .long_help("The goal to prove.

Any goals read from a knowledge base are ignored.
If no goal is given, each goal read from a knowledge base is attempted in order."))

        .arg(Arg::new("step_limit")
            .long("step-limit")
            .value_name("STEPS")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help("The maximum number of steps in a chain, with 0 for no limit.")
            .long_help("The maximum number of steps in a chain, with 0 for no limit.
Default: 0

A chain may continue without end if each clause of the chain is new.
If the limit is reached the result of the chain is unknown."))

        .arg(Arg::new("unsorted")
            .long("unsorted")
            .action(ArgAction::SetTrue)
            .help("Keep the literals of each resolvent in the order derived.")
            .long_help("Keep the literals of each resolvent in the order derived.

By default the literals of a resolvent are sorted.
As literals are examined in order, this may change the path of a chain."))

        .arg(Arg::new("quiet")
            .short('q')
            .long("quiet")
            .action(ArgAction::SetTrue)
            .help("Only display the result of each chain."))

        .arg(Arg::new("write_example")
            .long("write-example")
            .value_name("PATH")
            .value_parser(value_parser!(PathBuf))
            .required(false)
            .num_args(1)
            .help("Write an example knowledge base to the given path."))
}

/// Builds a [Config] from matched arguments.
///
/// If some value is outside the bounds of the corresponding option a message is sent and the process is terminated.
pub fn config_from_args(args: &ArgMatches) -> Config {
    let mut the_config = Config::default();

    if let Some(limit) = args.get_one::<usize>("step_limit") {
        let (min, max) = the_config.step_limit.min_max();

        if !the_config.step_limit.set(*limit) {
            println!("{} requires a value between {min} and {max}", the_config.step_limit.name);
            std::process::exit(1);
        }
    }

    if args.get_flag("unsorted") {
        let (min, max) = the_config.canonical_order.min_max();

        if !the_config.canonical_order.set(false) {
            println!("{} requires a value between {min} and {max}", the_config.canonical_order.name);
            std::process::exit(1);
        }
    }

    the_config
}

pub fn options_from_args(args: &ArgMatches) -> CliOptions {
    CliOptions {
        paths: args
            .get_many::<PathBuf>("paths")
            .map(|paths| paths.cloned().collect())
            .unwrap_or_default(),
        goal: args.get_one::<String>("goal").cloned(),
        quiet: args.get_flag("quiet"),
        write_example: args.get_one::<PathBuf>("write_example").cloned(),
    }
}
