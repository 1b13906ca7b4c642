//! Configuration system for FlavorForge.
//!
//! Select which catalogue constraints to build, and with which options,
//! from TOML or YAML files instead of code.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use flavorforge_config::ConstraintsConfig;
//!
//! let config = ConstraintsConfig::from_toml_str(r#"
//!     constraints = [
//!         "B^0_s->mu^+mu^-::BR_limit@CDF-2011",
//!         { name = "B^0->K^*0gamma::BR@BaBar-2009", options = { form-factors = "BZ2004" } },
//!     ]
//!
//!     [options]
//!     model = "WilsonScan"
//! "#).unwrap();
//!
//! assert_eq!(config.constraints.len(), 2);
//! assert!(config.skip_unknown);
//!
//! let (name, options) = config.selections().nth(1).unwrap();
//! assert_eq!(name, "B^0->K^*0gamma::BR@BaBar-2009");
//! assert_eq!(options.get("model"), Some("WilsonScan"));
//! assert_eq!(options.get("form-factors"), Some("BZ2004"));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use flavorforge_config::ConstraintsConfig;
//!
//! let config = ConstraintsConfig::load("constraints.toml").unwrap_or_default();
//! // Proceeds with an empty selection if the file doesn't exist
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use flavorforge_core::Options;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Which constraints to build.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ConstraintsConfig {
    /// Catalogue entries to build, in order.
    #[serde(default)]
    pub constraints: Vec<ConstraintSelection>,

    /// Options applied to every selection, below per-selection options.
    #[serde(default)]
    pub options: Options,

    /// Skip unknown names instead of failing. Defaults to `true`.
    #[serde(default = "default_skip_unknown")]
    pub skip_unknown: bool,
}

fn default_skip_unknown() -> bool {
    true
}

impl Default for ConstraintsConfig {
    fn default() -> Self {
        Self {
            constraints: Vec::new(),
            options: Options::new(),
            skip_unknown: default_skip_unknown(),
        }
    }
}

impl ConstraintsConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Adds a constraint by name.
    pub fn with_constraint(mut self, name: impl Into<String>) -> Self {
        self.constraints.push(ConstraintSelection::Name(name.into()));
        self
    }

    /// Adds a constraint with its own options.
    pub fn with_constraint_options(mut self, name: impl Into<String>, options: Options) -> Self {
        self.constraints.push(ConstraintSelection::Detailed {
            name: name.into(),
            options,
        });
        self
    }

    /// Sets an option for every selection.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.set(key, value);
        self
    }

    /// Sets whether unknown names are skipped.
    pub fn with_skip_unknown(mut self, skip: bool) -> Self {
        self.skip_unknown = skip;
        self
    }

    /// Checks that every name is non-empty and selected only once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = BTreeSet::new();
        for selection in &self.constraints {
            let name = selection.name();
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid("empty constraint name".to_string()));
            }
            if !seen.insert(name) {
                return Err(ConfigError::Invalid(format!(
                    "constraint '{}' selected more than once",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Options for `selection`: config-wide options overlaid by its own.
    pub fn options_for(&self, selection: &ConstraintSelection) -> Options {
        match selection.options() {
            Some(own) => self.options.overlay(own),
            None => self.options.clone(),
        }
    }

    /// `(name, options)` for every selection, in order.
    pub fn selections(&self) -> impl Iterator<Item = (&str, Options)> + '_ {
        self.constraints
            .iter()
            .map(move |s| (s.name(), self.options_for(s)))
    }
}

/// One selected constraint: a bare name or a name with options.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ConstraintSelection {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        options: Options,
    },
}

impl ConstraintSelection {
    /// Catalogue name.
    pub fn name(&self) -> &str {
        match self {
            ConstraintSelection::Name(name) => name,
            ConstraintSelection::Detailed { name, .. } => name,
        }
    }

    /// Options given for this selection only.
    pub fn options(&self) -> Option<&Options> {
        match self {
            ConstraintSelection::Name(_) => None,
            ConstraintSelection::Detailed { options, .. } => Some(options),
        }
    }
}

impl From<&str> for ConstraintSelection {
    fn from(name: &str) -> Self {
        ConstraintSelection::Name(name.to_string())
    }
}

#[cfg(test)]
mod tests;
