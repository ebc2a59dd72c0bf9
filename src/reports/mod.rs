/*!
Reports for the context.
*/

/// The reason a chain failed to derive the empty clause.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Reason {
    /// The current clause of the chain had been visited earlier in the chain.
    Loop,

    /// No clause of the knowledge base resolved with the current clause of the chain.
    Stuck,
}

/// High-level reports regarding a refutation.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The empty clause was derived from the negation of the goal, and so the goal follows from the knowledge base.
    Proved,

    /// The chain ended without deriving the empty clause.
    ///
    /// Note, this does not mean the negation of the goal is consistent with the knowledge base.
    Disproved(Reason),

    /// The step limit was reached before the chain ended.
    Unknown,
}

impl Report {
    /// Whether the goal was proved.
    pub fn is_proved(&self) -> bool {
        matches!(self, Self::Proved)
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loop => write!(f, "Loop"),
            Self::Stuck => write!(f, "Stuck"),
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Proved => write!(f, "Proved"),
            Self::Disproved(reason) => write!(f, "Disproved ({reason})"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
