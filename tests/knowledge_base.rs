use refutation_chain::{
    builder::{example::write_example, parse_clause},
    config::Config,
    context::Context,
    structures::clause::{Clause, ClauseT},
    types::err::{self, ErrorKind},
};

#[test]
fn clauses_in_order() {
    let mut the_context = Context::from_config(Config::default());
    let knowledge_base = "
Hombre(Marco)
~Pompeyano(x) | Romano(x)
¬Romano(x) ∨ Leal(x,Cesar) ∨ Odia(x,Cesar)
";

    let info = the_context.read_knowledge_base(knowledge_base.as_bytes());
    assert_eq!(info.map(|info| info.added_clauses), Ok(3));

    let clauses = the_context
        .knowledge_base
        .iter()
        .map(|clause| clause.as_string())
        .collect::<Vec<_>>();

    assert_eq!(
        clauses,
        vec![
            "Hombre(Marco)",
            "¬Pompeyano(x) ∨ Romano(x)",
            "¬Romano(x) ∨ Leal(x,Cesar) ∨ Odia(x,Cesar)"
        ]
    );
}

#[test]
fn several_reads() {
    let mut the_context = Context::from_config(Config::default());

    assert!(the_context.read_knowledge_base("P(a)\n? Q(a)".as_bytes()).is_ok());
    assert!(the_context.read_knowledge_base("Q(a) | ¬P(a)".as_bytes()).is_ok());
    assert_eq!(the_context.clause_count(), 2);
}

#[test]
fn repeated_literals() {
    let mut the_context = Context::from_config(Config::default());
    assert!(the_context.add_clause_str("Odia(x, Cesar) ∨ Odia(x,Cesar)").is_ok());

    assert_eq!(the_context.knowledge_base[0].size(), 1);
}

#[test]
fn tautologies_are_kept() {
    let mut the_context = Context::from_config(Config::default());
    assert!(the_context.add_clause_str("P(a) ∨ ¬P(a)").is_ok());

    assert_eq!(the_context.clause_count(), 1);
    assert!(the_context.knowledge_base[0].is_tautology());
}

#[test]
fn empty_clause() {
    let mut the_context = Context::from_config(Config::default());

    assert_eq!(
        the_context.add_clause_str(""),
        Err(ErrorKind::from(err::ClauseDBError::EmptyClause))
    );
    assert_eq!(
        the_context.add_clause(Clause::default()),
        Err(ErrorKind::from(err::ClauseDBError::EmptyClause))
    );
}

#[test]
fn malformed() {
    for text in ["Odia(x,", "(x)", "P(x))", "P(x y)", "¬", "P(a) ∨ 1Q"] {
        assert!(
            matches!(parse_clause(text), Err(ErrorKind::Parse(err::ParseError::MalformedLiteral(_)))),
            "{text}"
        );
    }
}

#[test]
fn example_reads() {
    let mut buffer = Vec::default();
    assert!(write_example(&mut buffer).is_ok());

    let mut the_context = Context::from_config(Config::default());
    let info = the_context.read_knowledge_base(buffer.as_slice()).unwrap();

    assert_eq!(info.added_clauses, 7);
    assert_eq!(info.goals.len(), 1);
    assert_eq!(info.goals[0].to_string(), "Odia(Marco,Cesar)");
}
