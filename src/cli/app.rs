//! Main CLI application

use crate::config::{
    help_requested, option_definitions, Configuration, OptionDefinition, OptionValue, ValueType,
    HELP_LONG, HELP_SHORT, HELP_TEXT,
};
use crate::error::{OptionsError, OptionsResult, RubopopError};
use crate::HUB_VERSION;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::io::{self, Write};

/// Program name shown in the usage banner
pub const PROGRAM_NAME: &str = "rubopop";

/// Outcome of resolving a command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// All flags parsed; the configuration is final
    Resolved(Configuration),
    /// A help flag was present; carries the rendered usage text
    HelpRequested(String),
}

/// Turns command-line tokens into a [`Configuration`]
pub struct ConfigurationResolver {
    /// Name used in the usage banner and as clap's binary name
    program: String,
    /// Default for `--hub-version`
    hub_version: String,
    /// Registered options, in usage order
    definitions: Vec<OptionDefinition>,
    /// The clap command built from `definitions`
    command: Command,
}

impl ConfigurationResolver {
    /// Create a resolver whose `--hub-version` default is `hub_version`
    pub fn new(hub_version: impl Into<String>) -> Self {
        let hub_version = hub_version.into();
        let definitions = option_definitions(&hub_version);
        let command = build_command(PROGRAM_NAME, &definitions);

        ConfigurationResolver {
            program: PROGRAM_NAME.to_string(),
            hub_version,
            definitions,
            command,
        }
    }

    /// Use a different program name in the usage banner
    pub fn with_program_name(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self.command = build_command(&self.program, &self.definitions);
        self
    }

    pub fn definitions(&self) -> &[OptionDefinition] {
        &self.definitions
    }

    /// Render the usage text: banner, then every option in registration order
    pub fn usage(&self) -> String {
        self.command.clone().render_help().to_string()
    }

    /// Resolve command-line tokens (program name excluded)
    pub fn resolve<I>(&self, args: I) -> OptionsResult<Resolution>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let raw: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let lossy: Vec<String> = raw
            .iter()
            .map(|t| t.to_string_lossy().into_owned())
            .collect();

        // Help wins over everything else on the line, including bad values
        if help_requested(&lossy) {
            return Ok(Resolution::HelpRequested(self.usage()));
        }

        let tokens = self.decode_tokens(raw, &lossy)?;
        self.reject_bare_separator(&tokens)?;

        let argv = std::iter::once(self.program.clone()).chain(tokens);
        let matches = match self.command.clone().try_get_matches_from(argv) {
            Ok(matches) => matches,
            Err(err) if err.kind() == ErrorKind::DisplayHelp => {
                return Ok(Resolution::HelpRequested(self.usage()));
            }
            Err(err) => return Err(self.translate_error(&err)),
        };

        let mut config = Configuration::new(self.hub_version.clone());
        for definition in &self.definitions {
            if let Some(value) = matched_value(&matches, definition) {
                config.apply(definition.key, value)?;
            }
        }

        Ok(Resolution::Resolved(config))
    }

    fn flag_definition(&self, token: &str) -> Option<&OptionDefinition> {
        self.definitions.iter().find(|d| d.matches_flag(token))
    }

    /// Convert raw tokens to UTF-8; a bad value is reported against its flag
    fn decode_tokens(&self, raw: Vec<OsString>, lossy: &[String]) -> OptionsResult<Vec<String>> {
        raw.into_iter()
            .enumerate()
            .map(|(i, token)| {
                token.into_string().map_err(|_| {
                    let value = lossy[i].clone();
                    match i.checked_sub(1).map(|p| lossy[p].as_str()) {
                        Some(flag) if self.flag_definition(flag).is_some() => {
                            OptionsError::TypeCoercion {
                                flag: flag.to_string(),
                                value,
                                expected: ValueType::String,
                            }
                        }
                        _ => OptionsError::UnknownFlag(value),
                    }
                })
            })
            .collect()
    }

    /// A bare `--` in flag position is not a registered flag
    fn reject_bare_separator(&self, tokens: &[String]) -> OptionsResult<()> {
        let mut i = 0;
        while i < tokens.len() {
            let token = tokens[i].as_str();
            if token == "--" {
                return Err(OptionsError::UnknownFlag(token.to_string()));
            }
            // A separated flag consumes the next token as its value
            i += if self.flag_definition(token).is_some() { 2 } else { 1 };
        }
        Ok(())
    }

    /// Map a clap failure onto the option error taxonomy
    fn translate_error(&self, err: &clap::Error) -> OptionsError {
        let arg = context_string(err, ContextKind::InvalidArg);
        let flag = flag_spelling(&arg);

        match err.kind() {
            ErrorKind::UnknownArgument => OptionsError::UnknownFlag(arg),
            ErrorKind::InvalidValue => OptionsError::MissingValue(flag),
            ErrorKind::ValueValidation => {
                let expected = self
                    .definitions
                    .iter()
                    .find(|d| d.matches_flag(&flag))
                    .map(|d| d.value_type)
                    .unwrap_or(ValueType::Integer);
                OptionsError::TypeCoercion {
                    value: context_string(err, ContextKind::InvalidValue),
                    flag,
                    expected,
                }
            }
            kind => OptionsError::Usage(kind.to_string()),
        }
    }
}

impl Default for ConfigurationResolver {
    fn default() -> Self {
        Self::new(HUB_VERSION)
    }
}

/// Build the clap command from the option registry
fn build_command(program: &str, definitions: &[OptionDefinition]) -> Command {
    let mut cmd = Command::new(program.to_string())
        .override_usage(format!("{} [options]", program))
        .disable_help_flag(true)
        .args_override_self(true);

    for definition in definitions {
        cmd = cmd.arg(definition_to_arg(definition));
    }

    cmd.arg(
        Arg::new(HELP_LONG)
            .short(HELP_SHORT)
            .long(HELP_LONG)
            .help(HELP_TEXT)
            .action(ArgAction::Help),
    )
}

/// Convert one option definition into a clap argument
fn definition_to_arg(definition: &OptionDefinition) -> Arg {
    // The token after a flag is always its value, even when it starts with '-'
    let arg = Arg::new(definition.name())
        .short(definition.short)
        .long(definition.long)
        .value_name(definition.value_name)
        .help(definition.help.clone())
        .action(ArgAction::Set)
        .num_args(1)
        .allow_hyphen_values(true);

    match definition.value_type {
        ValueType::Integer => arg.value_parser(value_parser!(i64)),
        ValueType::String => arg.value_parser(value_parser!(String)),
    }
}

/// Read the value clap stored for a definition, if the flag was given
fn matched_value(matches: &ArgMatches, definition: &OptionDefinition) -> Option<OptionValue> {
    match definition.value_type {
        ValueType::Integer => matches
            .get_one::<i64>(definition.name())
            .copied()
            .map(OptionValue::Integer),
        ValueType::String => matches
            .get_one::<String>(definition.name())
            .cloned()
            .map(OptionValue::String),
    }
}

fn context_string(err: &clap::Error, kind: ContextKind) -> String {
    match err.get(kind) {
        Some(ContextValue::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Strip the value placeholder clap appends to an argument (`--limit <limit>`)
fn flag_spelling(arg: &str) -> String {
    arg.split_whitespace().next().unwrap_or(arg).to_string()
}

/// Write the resolved configuration as YAML
pub fn emit_configuration<W: Write>(config: &Configuration, out: &mut W) -> Result<(), RubopopError> {
    let yaml = serde_yaml::to_string(config)?;
    out.write_all(yaml.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Write the usage text
pub fn emit_usage<W: Write>(usage: &str, out: &mut W) -> Result<(), RubopopError> {
    writeln!(out, "{}", usage.trim_end())?;
    out.flush()?;
    Ok(())
}

/// Run the CLI application with the process arguments
pub fn run() -> Result<(), RubopopError> {
    let resolver = ConfigurationResolver::default();
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match resolver.resolve(std::env::args_os().skip(1))? {
        Resolution::HelpRequested(usage) => emit_usage(&usage, &mut handle),
        Resolution::Resolved(config) => emit_configuration(&config, &mut handle),
    }
}
