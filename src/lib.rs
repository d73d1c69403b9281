//! Type Warden - Naming convention enforcement for Swift type declarations
//!
//! Architecture: Clean Architecture - Library interface serves as the
//! application layer
//! - Callers hand over an already-parsed source file (declaration tree, raw
//!   text, token stream, dialect version) and a resolved configuration
//! - The crate answers with a structured violation list and does nothing
//!   else: no reporting, no correction, no I/O on the validation path
//! - Independent files may be validated concurrently by independent callers;
//!   every validation call is a pure function of its inputs

pub mod analyzer;
pub mod config;
pub mod domain;

// Re-export main types for convenient access
pub use domain::declarations::{
    Accessibility, Declaration, DeclarationKind, SourceFile, SwiftVersion, SyntaxToken, TokenKind,
};
pub use domain::violations::{Severity, Violation, WardenError, WardenResult};

pub use config::{ConfigBuilder, NameConfig};

pub use analyzer::{TypeNameRule, RULE_ID};

/// Validate a parsed source file with the default configuration
pub fn validate_source(file: &SourceFile) -> Vec<Violation> {
    TypeNameRule::new().validate(file)
}

/// Validate a parsed source file with the given resolved configuration
pub fn validate_source_with_config(file: &SourceFile, config: NameConfig) -> Vec<Violation> {
    TypeNameRule::with_config(config).validate(file)
}
