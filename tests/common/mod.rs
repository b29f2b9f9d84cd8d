//! Common test utilities

use rubopop::error::OptionsResult;
use rubopop::{Configuration, ConfigurationResolver, Resolution};

/// Hub version injected into every test resolver
pub const TEST_HUB_VERSION: &str = "2.2.9";

/// Resolve `args` with a fresh resolver
pub fn resolve(args: &[&str]) -> OptionsResult<Resolution> {
    ConfigurationResolver::new(TEST_HUB_VERSION).resolve(args.iter().copied())
}

/// Resolve `args`, expecting a finished configuration
pub fn resolved(args: &[&str]) -> Configuration {
    match resolve(args).unwrap() {
        Resolution::Resolved(config) => config,
        Resolution::HelpRequested(_) => panic!("help requested for {:?}", args),
    }
}

/// The configuration an empty command line resolves to
pub fn defaults() -> Configuration {
    Configuration::new(TEST_HUB_VERSION)
}
