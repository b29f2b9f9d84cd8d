//! Core configuration types
//!
//! This module defines the resolved configuration record and the small value
//! model that option definitions use to describe and coerce their values.

use crate::error::{OptionsError, OptionsResult};
use serde::Serialize;
use std::fmt;

/// Default internal branch holding `.rubocop_todo.yml`
pub const DEFAULT_TODO_BRANCH: &str = "rubocop_todo_branch";

/// Default base branch for generated pull requests
pub const DEFAULT_MASTER_BRANCH: &str = "master";

/// Default post-checkout command (none)
pub const DEFAULT_POST_CHECKOUT: &str = "";

/// Default number of pull requests created per run
pub const DEFAULT_LIMIT: i64 = 10;

/// Default repository host
pub const DEFAULT_REPOSITORY: &str = "github";

/// Default git remote used when pushing
pub const DEFAULT_GIT_ORIGIN: &str = "origin";

/// Fully resolved configuration handed to the pull-request workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    /// Minimum required version of the `hub` utility
    pub hub_version: String,

    /// Internal branch holding `.rubocop_todo.yml`
    pub rubocop_todo_branch: String,

    /// Base branch for all generated pull requests
    pub master_branch: String,

    /// Shell command run after each `git checkout`
    pub post_checkout: String,

    /// Maximum number of pull requests created in one run
    pub limit: i64,

    /// Repository hosting platform
    pub repository: String,

    /// Remote passed to `git push`
    pub git_origin: String,
}

/// Identifies one configurable field of [`Configuration`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    HubVersion,
    RubocopTodoBranch,
    MasterBranch,
    PostCheckout,
    Limit,
    Repository,
    GitOrigin,
}

/// How a raw command-line token is coerced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Integer,
    String,
}

/// A typed option value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Integer(i64),
    String(String),
}

impl Configuration {
    /// Create a configuration holding every default value
    pub fn new(hub_version: impl Into<String>) -> Self {
        Configuration {
            hub_version: hub_version.into(),
            rubocop_todo_branch: DEFAULT_TODO_BRANCH.to_string(),
            master_branch: DEFAULT_MASTER_BRANCH.to_string(),
            post_checkout: DEFAULT_POST_CHECKOUT.to_string(),
            limit: DEFAULT_LIMIT,
            repository: DEFAULT_REPOSITORY.to_string(),
            git_origin: DEFAULT_GIT_ORIGIN.to_string(),
        }
    }

    /// Overwrite the field selected by `key`
    pub fn apply(&mut self, key: OptionKey, value: OptionValue) -> OptionsResult<()> {
        match (key, value) {
            (OptionKey::Limit, OptionValue::Integer(v)) => self.limit = v,
            (key, OptionValue::String(v)) => *self.string_field_mut(key)? = v,
            (key, OptionValue::Integer(_)) => {
                return Err(OptionsError::TypeMismatch {
                    option: key.name(),
                    expected: ValueType::String,
                })
            }
        }
        Ok(())
    }

    /// Read the field selected by `key`
    pub fn get(&self, key: OptionKey) -> OptionValue {
        match key {
            OptionKey::HubVersion => OptionValue::String(self.hub_version.clone()),
            OptionKey::RubocopTodoBranch => OptionValue::String(self.rubocop_todo_branch.clone()),
            OptionKey::MasterBranch => OptionValue::String(self.master_branch.clone()),
            OptionKey::PostCheckout => OptionValue::String(self.post_checkout.clone()),
            OptionKey::Limit => OptionValue::Integer(self.limit),
            OptionKey::Repository => OptionValue::String(self.repository.clone()),
            OptionKey::GitOrigin => OptionValue::String(self.git_origin.clone()),
        }
    }

    fn string_field_mut(&mut self, key: OptionKey) -> OptionsResult<&mut String> {
        match key {
            OptionKey::HubVersion => Ok(&mut self.hub_version),
            OptionKey::RubocopTodoBranch => Ok(&mut self.rubocop_todo_branch),
            OptionKey::MasterBranch => Ok(&mut self.master_branch),
            OptionKey::PostCheckout => Ok(&mut self.post_checkout),
            OptionKey::Repository => Ok(&mut self.repository),
            OptionKey::GitOrigin => Ok(&mut self.git_origin),
            OptionKey::Limit => Err(OptionsError::TypeMismatch {
                option: key.name(),
                expected: ValueType::Integer,
            }),
        }
    }
}

impl OptionKey {
    /// Stable name of the configuration field, also used as the clap argument id
    pub fn name(&self) -> &'static str {
        match self {
            OptionKey::HubVersion => "hub_version",
            OptionKey::RubocopTodoBranch => "rubocop_todo_branch",
            OptionKey::MasterBranch => "master_branch",
            OptionKey::PostCheckout => "post_checkout",
            OptionKey::Limit => "limit",
            OptionKey::Repository => "repository",
            OptionKey::GitOrigin => "git_origin",
        }
    }
}

impl OptionValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            OptionValue::Integer(_) => ValueType::Integer,
            OptionValue::String(_) => ValueType::String,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Integer => write!(f, "integer"),
            ValueType::String => write!(f, "string"),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Integer(v) => write!(f, "{}", v),
            OptionValue::String(v) => write!(f, "{}", v),
        }
    }
}
