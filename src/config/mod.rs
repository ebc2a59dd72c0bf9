/*!
Configuration of a context.

All configuration for a context is contained within a [Config], and each configurable value is a [ConfigOption].
The configuration of a context is used for each refutation made with the context.
*/

mod config_option;
pub use config_option::ConfigOption;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The maximum number of steps in a chain, with zero for no limit.
    ///
    /// A chain which reaches the limit without a proof, loop, or a failure to resolve reports [Unknown](crate::reports::Report::Unknown).
    pub step_limit: ConfigOption<usize>,

    /// Order the literals of each resolvent by their textual representation.
    ///
    /// Otherwise, the literals of a resolvent remain in the order derived.
    /// As literals are examined in order during resolution, this may change the path of a chain.
    pub canonical_order: ConfigOption<bool>,
}

impl Default for Config {
    /// The default config places no limit on the length of a chain, and orders resolvents canonically.
    fn default() -> Self {
        Config {
            step_limit: ConfigOption {
                name: "step_limit",
                min: 0,
                max: usize::MAX,
                value: 0,
            },

            canonical_order: ConfigOption {
                name: "canonical_order",
                min: false,
                max: true,
                value: true,
            },
        }
    }
}
