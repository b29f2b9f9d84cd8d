//! Option definitions
//!
//! The ordered registry of every supported command-line option. The order of
//! [`option_definitions`] is the order options are listed in the usage text.

use crate::config::types::{
    OptionKey, OptionValue, ValueType, DEFAULT_GIT_ORIGIN, DEFAULT_LIMIT, DEFAULT_MASTER_BRANCH,
    DEFAULT_POST_CHECKOUT, DEFAULT_REPOSITORY, DEFAULT_TODO_BRANCH,
};

/// Short spelling of the help flag
pub const HELP_SHORT: char = 'h';

/// Long spelling of the help flag
pub const HELP_LONG: &str = "help";

/// Help text of the help flag
pub const HELP_TEXT: &str = "Display help";

/// Static description of one command-line option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDefinition {
    /// Configuration field this option writes
    pub key: OptionKey,

    /// Short flag character (`-t`)
    pub short: char,

    /// Long flag name without dashes (`limit` for `--limit`)
    pub long: &'static str,

    /// Placeholder shown for the value in usage text
    pub value_name: &'static str,

    /// Coercion applied to the raw token
    pub value_type: ValueType,

    /// Value used when the flag is absent
    pub default: OptionValue,

    /// Description shown in usage text
    pub help: String,
}

impl OptionDefinition {
    /// Stable name of the field this option sets
    pub fn name(&self) -> &'static str {
        self.key.name()
    }

    pub fn short_flag(&self) -> String {
        format!("-{}", self.short)
    }

    pub fn long_flag(&self) -> String {
        format!("--{}", self.long)
    }

    /// Whether `token` is one of this option's spellings
    pub fn matches_flag(&self, token: &str) -> bool {
        token == self.short_flag() || token == self.long_flag()
    }

    fn string(
        key: OptionKey,
        short: char,
        long: &'static str,
        value_name: &'static str,
        default: &str,
        help: String,
    ) -> Self {
        OptionDefinition {
            key,
            short,
            long,
            value_name,
            value_type: ValueType::String,
            default: OptionValue::String(default.to_string()),
            help,
        }
    }
}

/// Build the ordered option registry
///
/// `hub_version` is the default for `--hub-version` and is quoted in its help.
pub fn option_definitions(hub_version: &str) -> Vec<OptionDefinition> {
    vec![
        OptionDefinition::string(
            OptionKey::HubVersion,
            'u',
            "hub-version",
            "version",
            hub_version,
            format!(
                "Set manually minimum required version of 'hub' utility for github (default: {})",
                hub_version
            ),
        ),
        OptionDefinition::string(
            OptionKey::RubocopTodoBranch,
            'b',
            "branch",
            "branch",
            DEFAULT_TODO_BRANCH,
            format!(
                "internal branch with '.rubocop_todo.yml' (default: '{}')",
                DEFAULT_TODO_BRANCH
            ),
        ),
        OptionDefinition::string(
            OptionKey::MasterBranch,
            'm',
            "master",
            "branch",
            DEFAULT_MASTER_BRANCH,
            format!(
                "branch which will be the base for all PR's (default: '{}')",
                DEFAULT_MASTER_BRANCH
            ),
        ),
        OptionDefinition::string(
            OptionKey::PostCheckout,
            'r',
            "post-checkout",
            "command",
            DEFAULT_POST_CHECKOUT,
            format!(
                "Running after each git checkout (default: \"{}\")",
                DEFAULT_POST_CHECKOUT
            ),
        ),
        OptionDefinition {
            key: OptionKey::Limit,
            short: 't',
            long: "limit",
            value_name: "limit",
            value_type: ValueType::Integer,
            default: OptionValue::Integer(DEFAULT_LIMIT),
            help: format!("Limit the PR's for one run (default: {})", DEFAULT_LIMIT),
        },
        OptionDefinition::string(
            OptionKey::Repository,
            'g',
            "repository",
            "name",
            DEFAULT_REPOSITORY,
            format!("Set repository host (default: {})", DEFAULT_REPOSITORY),
        ),
        OptionDefinition::string(
            OptionKey::GitOrigin,
            'o',
            "origin",
            "origin",
            DEFAULT_GIT_ORIGIN,
            format!(
                "origin option for 'git push' (default: '{}')",
                DEFAULT_GIT_ORIGIN
            ),
        ),
    ]
}

/// Whether any token asks for help
pub fn help_requested<S: AsRef<str>>(tokens: &[S]) -> bool {
    let long = format!("--{}", HELP_LONG);
    let short = format!("-{}", HELP_SHORT);
    tokens
        .iter()
        .any(|t| t.as_ref() == long || t.as_ref() == short)
}
