/*!
Tools for building a context.

# Basic methods

The library has two basic methods for building a knowledge base:
- [add_clause](crate::context::Context::add_clause), to add a clause.
- [read_knowledge_base](crate::context::Context::read_knowledge_base), to add each clause from a textual representation of a knowledge base.

Clauses are added to the end of the knowledge base, and so the order in which clauses are added is the order in which clauses are examined during a refutation.

# Format

A knowledge base is read line by line:
- Blank lines, and lines beginning with `%`, are skipped.
- A line beginning with `?` contains a goal, as a single literal.
- Any other line is a clause, with literals separated by `∨` or `|`.

A literal is written as a predicate with an optional parenthesized and comma-separated list of arguments, preceded by `¬` or `~` if negated.
Arguments beginning with a lowercase letter are variables, and all other arguments are constants.

```text
% All Pompeyanos are Romanos.
¬Pompeyano(x) ∨ Romano(x)
Pompeyano(Marco)
? Romano(Marco)
```

# Examples

A clause built from literals.

```rust
# use refutation_chain::context::Context;
# use refutation_chain::config::Config;
# use refutation_chain::reports::Report;
# use refutation_chain::structures::{clause::Clause, literal::Literal};
let mut the_context = Context::from_config(Config::default());

let romano: Literal = "Romano(Marco)".parse().unwrap();
let clause: Clause = vec!["¬Pompeyano(x)".parse().unwrap(), romano.clone()];

assert!(the_context.add_clause(clause).is_ok());
assert!(the_context.add_clause(Literal::new(false, "Pompeyano", vec!["Marco".into()])).is_ok());
assert_eq!(the_context.refute(&romano), Report::Proved);
```

A clause built from a string.

```rust
# use refutation_chain::builder::parse_clause;
# use refutation_chain::structures::clause::ClauseT;
let clause = parse_clause("~Hombre(x) | Mortal(x) | Mortal(x)").unwrap();

assert_eq!(clause.as_string(), "¬Hombre(x) ∨ Mortal(x)");
```
*/

mod knowledge_base;
pub use knowledge_base::ParserInfo;

pub mod example;

use crate::{
    misc::log::targets,
    structures::{
        clause::{Clause, ClauseT},
        literal::Literal,
    },
    types::err::{self, ErrorKind},
};

/// Separators of literals in the textual representation of a clause.
pub const DISJUNCTION_MARKERS: [char; 2] = ['∨', '|'];

/// The comment marker of a knowledge base.
pub const COMMENT: char = '%';

/// The goal marker of a knowledge base.
pub const GOAL: char = '?';

/// Parses a clause, with literals separated by `∨` or `|`.
///
/// Any repetition of a literal is removed, and blank text is parsed to the empty clause.
pub fn parse_clause(text: &str) -> Result<Clause, ErrorKind> {
    if text.trim().is_empty() {
        return Ok(Clause::default());
    }

    let mut clause = Clause::default();
    for piece in text.split(&DISJUNCTION_MARKERS[..]) {
        let literal: Literal = match piece.trim() {
            "" => {
                log::debug!(target: targets::PARSER, "Missing literal in: {text}");
                return Err(ErrorKind::from(err::ParseError::MalformedLiteral(text.trim().to_string())));
            }
            literal_text => literal_text.parse()?,
        };
        clause.push(literal);
    }
    clause.deduplicate();

    Ok(clause)
}
