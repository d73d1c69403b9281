//! Core domain models for naming violations
//!
//! Architecture: Rich Domain Models - Violations carry everything the
//! reporting layer needs, nothing it has to look up
//! - A violation pins a severity and a byte offset to a human-readable reason
//! - At most one violation exists per validated name; the checks that
//!   produce them are mutually exclusive
//! - Violations are immutable once created and never persist across files

use serde::{Deserialize, Serialize};

/// Severity levels for naming violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Warnings that should be addressed but don't block builds
    Warning,
    /// Errors that block commits and fail CI/CD builds
    Error,
}

impl Severity {
    /// Whether this severity level should cause validation to fail
    pub fn is_blocking(self) -> bool {
        matches!(self, Self::Error)
    }

    /// Convert to string for display
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A naming violation detected during validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Identifier of the rule that detected this violation
    pub rule_id: String,
    /// Severity level of this violation
    pub severity: Severity,
    /// Byte offset into the source where the offending name starts
    pub byte_offset: usize,
    /// Human-readable description of the violation
    pub message: String,
}

impl Violation {
    /// Create a new violation
    pub fn new(
        rule_id: impl Into<String>,
        severity: Severity,
        byte_offset: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            severity,
            byte_offset,
            message: message.into(),
        }
    }

    /// Whether this violation is blocking (prevents commits/builds)
    pub fn is_blocking(&self) -> bool {
        self.severity.is_blocking()
    }

    /// Format violation for display
    pub fn format_display(&self) -> String {
        format!(
            "offset {} [{}] {}",
            self.byte_offset,
            self.severity.as_str(),
            self.message
        )
    }
}

/// Error types that can occur outside the validation path itself
///
/// Validation never fails; these cover the configuration tooling around it.
#[derive(Debug, thiserror::Error)]
pub enum WardenError {
    /// Configuration file could not be loaded or parsed
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File could not be read or accessed
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl WardenError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Result type for Warden operations
pub type WardenResult<T> = Result<T, WardenError>;
