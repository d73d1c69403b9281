//! Configuration for the type-name rule
//!
//! Architecture: Anti-Corruption Layer - Resolved external configuration is
//! translated into an immutable domain record at the boundary
//! - Defaults live here, not in the external configuration system
//! - Thresholds and toggles never change during a validation run
//! - Length classification is a pure function of the record

use crate::domain::violations::{Severity, WardenError, WardenResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Naming-convention configuration for type-like identifiers
///
/// Length thresholds are character counts. An "error" tier set to 0 disables
/// that tier; warning tiers are always active. `allowed_symbols` is unioned
/// with alphanumerics at validation time, so it only needs to carry the
/// extras (for example `_`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NameConfig {
    /// Names shorter than this are warnings
    pub min_length_warning: usize,
    /// Names at or below this length are errors (0 disables)
    pub min_length_error: usize,
    /// Names longer than this are warnings
    pub max_length_warning: usize,
    /// Names at or above this length are errors (0 disables)
    pub max_length_error: usize,
    /// Extra characters allowed beyond alphanumerics
    pub allowed_symbols: HashSet<char>,
    /// Exact names exempted from every check
    pub excluded: HashSet<String>,
    /// Whether names must start with an uppercase character
    pub validates_start_with_lowercase: bool,
}

impl Default for NameConfig {
    fn default() -> Self {
        Self {
            min_length_warning: 3,
            min_length_error: 0,
            max_length_warning: 40,
            max_length_error: 1000,
            allowed_symbols: HashSet::new(),
            excluded: HashSet::new(),
            validates_start_with_lowercase: true,
        }
    }
}

impl NameConfig {
    /// Load configuration from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> WardenResult<Self> {
        let contents = fs::read_to_string(&path).map_err(|e| {
            WardenError::config(format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::load_from_str(&contents)
    }

    /// Load configuration from string content
    pub fn load_from_str(content: &str) -> WardenResult<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| WardenError::config(format!("Failed to parse config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> WardenResult<()> {
        if self.min_length_warning > self.max_length_warning {
            return Err(WardenError::config(format!(
                "min_length_warning ({}) exceeds max_length_warning ({})",
                self.min_length_warning, self.max_length_warning
            )));
        }

        Ok(())
    }

    /// Classify a name length against the configured thresholds
    ///
    /// Error tiers are inclusive and checked before their warning tier; a
    /// length inside an error band never reports a warning. The min side is
    /// checked before the max side, so exactly one branch can fire.
    pub fn severity_for_length(&self, length: usize) -> Option<Severity> {
        if self.min_length_error > 0 && length <= self.min_length_error {
            Some(Severity::Error)
        } else if length < self.min_length_warning {
            Some(Severity::Warning)
        } else if self.max_length_error > 0 && length >= self.max_length_error {
            Some(Severity::Error)
        } else if length > self.max_length_warning {
            Some(Severity::Warning)
        } else {
            None
        }
    }

    /// Whether a character is acceptable in a type name
    pub fn allows_character(&self, c: char) -> bool {
        c.is_alphanumeric() || self.allowed_symbols.contains(&c)
    }

    /// Convert to JSON for serialization
    pub fn to_json(&self) -> WardenResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| WardenError::config(format!("Failed to serialize config: {e}")))
    }
}

/// Configuration builder for programmatic construction
pub struct ConfigBuilder {
    config: NameConfig,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: NameConfig::default(),
        }
    }

    /// Set the warning and error tiers of the minimum-length threshold
    pub fn min_length(mut self, warning: usize, error: usize) -> Self {
        self.config.min_length_warning = warning;
        self.config.min_length_error = error;
        self
    }

    /// Set the warning and error tiers of the maximum-length threshold
    pub fn max_length(mut self, warning: usize, error: usize) -> Self {
        self.config.max_length_warning = warning;
        self.config.max_length_error = error;
        self
    }

    /// Allow an extra symbol beyond alphanumerics
    pub fn allow_symbol(mut self, symbol: char) -> Self {
        self.config.allowed_symbols.insert(symbol);
        self
    }

    /// Exempt an exact name from every check
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.config.excluded.insert(name.into());
        self
    }

    /// Toggle enforcement of the uppercase-start requirement
    pub fn validates_start_with_lowercase(mut self, enabled: bool) -> Self {
        self.config.validates_start_with_lowercase = enabled;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> WardenResult<NameConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
