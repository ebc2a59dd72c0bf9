//! An example knowledge base, together with a goal which follows from the knowledge base.
//!
//! ```rust
//! # use refutation_chain::builder::example::{write_example, EXAMPLE};
//! # use refutation_chain::context::Context;
//! # use refutation_chain::config::Config;
//! # use refutation_chain::reports::Report;
//! let mut buffer = Vec::default();
//! assert!(write_example(&mut buffer).is_ok());
//! assert_eq!(buffer, EXAMPLE.as_bytes());
//!
//! let mut the_context = Context::from_config(Config::default());
//! let info = the_context.read_knowledge_base(buffer.as_slice()).unwrap();
//!
//! assert_eq!(info.added_clauses, 7);
//! assert_eq!(the_context.refute(&info.goals[0]), Report::Proved);
//! ```

use std::io::Write;

/// Marco, Cesar, and whether Marco hates Cesar.
pub const EXAMPLE: &str = "\
% Marco era un hombre.
Hombre(Marco)
% Marco era pompeyano.
Pompeyano(Marco)
% Todos los pompeyanos eran romanos.
¬Pompeyano(x) ∨ Romano(x)
% Cesar era un gobernante.
Gobernante(Cesar)
% Todos los romanos eran leales a Cesar o lo odiaban.
¬Romano(x) ∨ Leal(x,Cesar) ∨ Odia(x,Cesar)
% Las personas solo intentan asesinar a los gobernantes a los que no son leales.
¬Hombre(x) ∨ ¬Gobernante(y) ∨ ¬IntentaAsesinar(x,y) ∨ ¬Leal(x,y)
% Marco intento asesinar a Cesar.
IntentaAsesinar(Marco,Cesar)

? Odia(Marco,Cesar)
";

/// Writes the [example](EXAMPLE) knowledge base to `writer`.
pub fn write_example(mut writer: impl Write) -> std::io::Result<()> {
    writer.write_all(EXAMPLE.as_bytes())?;
    writer.flush()
}
