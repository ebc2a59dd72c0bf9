/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [parsing](crate::structures::literal) literals and clauses.
    pub const PARSER: &str = "parser";

    /// Logs related to [unification](crate::procedures::unification)
    pub const UNIFICATION: &str = "unification";

    /// Logs related to [resolution](crate::procedures::resolution)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to [refutation](crate::procedures::refutation)
    pub const REFUTATION: &str = "refutation";

    /// Logs related to the knowledge base of a [context](crate::context)
    pub const KNOWLEDGE_BASE: &str = "knowledge_base";
}
