use std::io::BufRead;

use crate::{
    builder::{parse_clause, COMMENT, DISJUNCTION_MARKERS, GOAL},
    context::Context,
    misc::log::targets,
    structures::{clause::Clause, literal::Literal},
    types::err::{self, ErrorKind},
};

/// Information regarding a read of a knowledge base.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The number of clauses added to the knowledge base.
    pub added_clauses: usize,

    /// Goals, in the order read.
    pub goals: Vec<Literal>,
}

impl Context {
    /// Reads a knowledge base into the context, returning the goals read together with a count of clauses added.
    ///
    /// If any line fails to parse no clause is added to the knowledge base.
    ///
    /// ```rust,ignore
    /// context.read_knowledge_base(BufReader::new(&file))?;
    /// ```
    ///
    /// ```rust
    /// # use refutation_chain::context::Context;
    /// # use refutation_chain::config::Config;
    /// # use refutation_chain::reports::Report;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let knowledge_base = "
    /// % Marco
    /// Hombre(Marco)
    /// ~Hombre(x) | Mortal(x)
    ///
    /// ? Mortal(Marco)
    /// ";
    ///
    /// let info = the_context.read_knowledge_base(knowledge_base.as_bytes()).unwrap();
    /// assert_eq!(info.added_clauses, 2);
    /// assert_eq!(the_context.refute(&info.goals[0]), Report::Proved);
    /// ```
    pub fn read_knowledge_base(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, ErrorKind> {
        let mut buffer = String::with_capacity(1024);
        let mut clauses: Vec<Clause> = Vec::default();
        let mut goals = Vec::default();

        let mut line_counter = 0;

        loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter + 1))),
            }

            let line = buffer.trim();
            match line.chars().next() {
                None | Some(COMMENT) => {}

                Some(GOAL) => {
                    let goal: Literal = line[GOAL.len_utf8()..].parse()?;
                    log::trace!(target: targets::KNOWLEDGE_BASE, "Goal on line {line_counter}: {goal}");
                    goals.push(goal);
                }

                Some(_) => {
                    if line.chars().all(|c| c.is_whitespace() || DISJUNCTION_MARKERS.contains(&c)) {
                        log::debug!(target: targets::KNOWLEDGE_BASE, "Empty clause on line {line_counter}");
                        return Err(ErrorKind::from(err::ParseError::EmptyClause(line_counter)));
                    }
                    clauses.push(parse_clause(line)?);
                }
            }
        }

        let added_clauses = clauses.len();
        for clause in clauses {
            self.add_clause(clause)?;
        }

        log::info!(target: targets::KNOWLEDGE_BASE, "Read {added_clauses} clauses and {} goals", goals.len());

        Ok(ParserInfo {
            added_clauses,
            goals,
        })
    }
}
