use std::{fs::File, io::BufReader, path::Path};

use refutation_chain::{
    config::Config,
    context::Context,
    reports::{Reason, Report},
};

/// The report of the first goal of the knowledge base at `path`.
fn silent_problem_report(path: &Path, config: &Config) -> Report {
    let file = match File::open(path) {
        Err(_) => panic!("Could not load {path:?}"),
        Ok(f) => f,
    };

    let mut the_context = Context::from_config(config.clone());
    let info = match the_context.read_knowledge_base(BufReader::new(&file)) {
        Ok(info) => info,
        Err(e) => panic!("{path:?}: {e:?}"),
    };

    match info.goals.first() {
        Some(goal) => the_context.refute(goal),
        None => panic!("{path:?}: no goal"),
    }
}

#[test]
fn problem_library() {
    let mut proved = 0;
    let mut stuck = 0;
    let mut looped = 0;

    let pattern = concat!(env!("CARGO_MANIFEST_DIR"), "/problems/*.kb");
    let entries = match glob::glob(pattern) {
        Ok(entries) => entries,
        Err(e) => panic!("{e}"),
    };

    for path in entries.flatten() {
        let name = match path.file_name().and_then(|name| name.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };

        let report = silent_problem_report(&path, &Config::default());

        if name.contains("proved") {
            assert_eq!(report, Report::Proved, "{name}");
            proved += 1;
        } else if name.contains("stuck") {
            assert_eq!(report, Report::Disproved(Reason::Stuck), "{name}");
            stuck += 1;
        } else if name.contains("loop") {
            assert_eq!(report, Report::Disproved(Reason::Loop), "{name}");
            looped += 1;
        }
    }

    assert_eq!(proved, 3);
    assert_eq!(stuck, 3);
    assert_eq!(looped, 2);
}

#[test]
fn problem_library_unsorted() {
    let mut config = Config::default();
    assert!(config.canonical_order.set(false));

    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("problems").join("marco_proved.kb");
    assert_eq!(silent_problem_report(&path, &config), Report::Proved);
}
