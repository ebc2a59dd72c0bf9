use rand::{rngs::StdRng, Rng, SeedableRng};

use refutation_chain::{
    config::Config,
    dispatch::Dispatch,
    procedures::{
        refutation::resolve_refutation,
        resolution::resolve,
        unification::{unify_literals, unify_terms},
    },
    reports::Report,
    structures::{
        clause::{Clause, ClauseT},
        literal::Literal,
        substitution::Substitution,
        term::Term,
    },
};

const SEED: u64 = 0x5EED;

const PREDICATES: [&str; 3] = ["P", "Q", "Odia"];
const NAMES: [&str; 6] = ["x", "y", "z", "A", "Marco", "Cesar"];

fn random_term(rng: &mut StdRng) -> Term {
    Term::from(NAMES[rng.random_range(0..NAMES.len())])
}

fn random_literal(rng: &mut StdRng, argument_count: usize) -> Literal {
    let predicate = PREDICATES[rng.random_range(0..PREDICATES.len())];
    let arguments = (0..argument_count).map(|_| random_term(rng)).collect();
    Literal::new(rng.random_bool(0.5), predicate, arguments)
}

fn arity(predicate: &str) -> usize {
    match predicate {
        "Odia" => 2,
        _ => 1,
    }
}

/// A clause of at most `size` literals, with the arity of each literal fixed by its predicate.
fn random_clause(rng: &mut StdRng, size: usize) -> Clause {
    let mut clause: Clause = (0..rng.random_range(1..=size))
        .map(|_| {
            let predicate = PREDICATES[rng.random_range(0..PREDICATES.len())];
            let arguments = (0..arity(predicate)).map(|_| random_term(rng)).collect();
            Literal::new(rng.random_bool(0.5), predicate, arguments)
        })
        .collect();
    clause.deduplicate();
    clause
}

#[test]
fn literal_round_trip() {
    let mut rng = StdRng::seed_from_u64(SEED);

    for _ in 0..512 {
        let argument_count = rng.random_range(0..4);
        let literal = random_literal(&mut rng, argument_count);
        let text = literal.to_string();

        assert_eq!(text.parse::<Literal>(), Ok(literal.clone()));

        // Whitespace around arguments, and the alternative negation marker.
        let mut spaced = text.replace(',', " , ").replace('(', "( ").replace(')', " )");
        if literal.is_negated() {
            spaced = spaced.replacen('¬', "~", 1);
        }
        assert_eq!(spaced.parse::<Literal>().map(|l| l.to_string()), Ok(text));
    }
}

#[test]
fn unification_symmetry() {
    let mut rng = StdRng::seed_from_u64(SEED);

    for _ in 0..512 {
        let a = random_term(&mut rng);
        let b = random_term(&mut rng);

        let ab = unify_terms(&a, &b, &mut Substitution::default()).is_ok();
        let ba = unify_terms(&b, &a, &mut Substitution::default()).is_ok();
        assert_eq!(ab, ba, "{a} {b}");

        let argument_count = rng.random_range(0..4);
        let l = random_literal(&mut rng, argument_count);
        let m = l.with_arguments((0..argument_count).map(|_| random_term(&mut rng)).collect());

        match (unify_literals(&l, &m), unify_literals(&m, &l)) {
            (Ok(lm), Ok(ml)) => {
                assert_eq!(lm.apply_to_literal(&l).arguments(), lm.apply_to_literal(&m).arguments());
                assert_eq!(ml.apply_to_literal(&l).arguments(), ml.apply_to_literal(&m).arguments());
            }
            (Err(_), Err(_)) => {}
            _ => panic!("Asymmetric unification of {l} and {m}"),
        }
    }
}

#[test]
fn resolvents_are_not_tautologies() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut resolutions = 0;

    for _ in 0..1024 {
        let current = random_clause(&mut rng, 3);
        let candidate = random_clause(&mut rng, 3);

        if let Some(resolution) = resolve(&current, &candidate) {
            resolutions += 1;
            assert!(!resolution.resolvent.is_tautology(), "{}", resolution.resolvent.as_string());
            assert_eq!(resolution.resolvent.canonical_key().len(), resolution.resolvent.size());
        }
    }

    assert!(resolutions > 0);
}

#[test]
fn chains_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut config = Config::default();
    assert!(config.step_limit.set(64));

    for _ in 0..64 {
        let knowledge_base: Vec<Clause> = (0..rng.random_range(1..8))
            .map(|_| random_clause(&mut rng, 3))
            .collect();
        let goal = random_clause(&mut rng, 1).remove(0);

        let trace = |knowledge_base: &[Clause]| {
            let mut dispatches = Vec::default();
            let mut collect = |dispatch: Dispatch| dispatches.push(dispatch);
            let report = resolve_refutation(knowledge_base, &goal, &config, Some(&mut collect));
            (report, dispatches)
        };

        let (report_a, dispatches_a) = trace(&knowledge_base);
        let (report_b, dispatches_b) = trace(&knowledge_base);

        assert_eq!(report_a, report_b);
        assert_eq!(dispatches_a, dispatches_b);
        assert_eq!(dispatches_a.last(), Some(&Dispatch::Finish(report_a)));

        if report_a == Report::Proved {
            let last_step = dispatches_a.iter().rev().find_map(|dispatch| match dispatch {
                Dispatch::Step(step) => step.resolution.as_ref(),
                _ => None,
            });
            assert!(last_step.is_some_and(|(_, resolution)| resolution.resolvent.is_empty()));
        }
    }
}
