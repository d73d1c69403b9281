//! Type-name rule orchestration
//!
//! Architecture: Domain Services - The rule coordinates discovery,
//! normalization, and validation for one source file at a time
//! - The declaration-tree walk and the alias scanner feed one shared
//!   normalize-then-validate pipeline
//! - Checks are ordered and short-circuiting; a name yields at most one
//!   violation
//! - Malformed input anywhere degrades to "no violation for that site",
//!   never to a failed call

pub mod alias_scan;
pub mod normalize;

use crate::config::NameConfig;
use crate::domain::declarations::{Accessibility, Declaration, SourceFile, SwiftVersion};
use crate::domain::violations::{Severity, Violation};
use std::collections::HashSet;

/// Rule identity attached to every violation this crate produces
pub const RULE_ID: &str = "type_name";

/// Dialect at which aliases join the declaration tree and the text scanner
/// becomes redundant
const ALIASES_IN_TREE_SINCE: SwiftVersion = SwiftVersion::FOUR_DOT_ONE;

/// Validates type-like identifier spelling against a naming convention
#[derive(Debug, Clone, Default)]
pub struct TypeNameRule {
    config: NameConfig,
}

impl TypeNameRule {
    /// Create the rule with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the rule with the given resolved configuration
    pub fn with_config(config: NameConfig) -> Self {
        Self { config }
    }

    /// Access the configuration this rule validates against
    pub fn config(&self) -> &NameConfig {
        &self.config
    }

    /// Validate every type-like name in a parsed source file
    ///
    /// Returns violations in discovery order: declaration-tree traversal
    /// first, then alias-scanner matches. The result is a pure function of
    /// the input; identical files yield identical lists.
    pub fn validate(&self, file: &SourceFile) -> Vec<Violation> {
        let mut violations: Vec<Violation> = file
            .declarations
            .iter()
            .flat_map(|declaration| self.walk(declaration))
            .collect();

        if file.swift_version < ALIASES_IN_TREE_SINCE {
            let no_inherited = HashSet::new();

            violations.extend(
                alias_scan::scan(&file.contents, &file.tokens)
                    .into_iter()
                    .filter_map(|alias| {
                        self.check_candidate(
                            alias.name,
                            alias.offset,
                            Accessibility::Other,
                            &no_inherited,
                        )
                    }),
            );
        }

        violations
    }

    /// Recursive descent over one declaration and its children
    ///
    /// Every node is visited regardless of kind; only type-like nodes that
    /// carry both a name and an offset reach the pipeline.
    fn walk(&self, declaration: &Declaration) -> Vec<Violation> {
        let mut violations = Vec::new();

        if declaration.kind.is_type_like() {
            match (declaration.name.as_deref(), declaration.name_offset) {
                (Some(name), Some(offset)) => violations.extend(self.check_candidate(
                    name,
                    offset,
                    declaration.accessibility,
                    &declaration.inherited_types,
                )),
                _ => tracing::trace!(
                    kind = ?declaration.kind,
                    "skipping declaration without name or offset"
                ),
            }
        }

        for child in &declaration.children {
            violations.extend(self.walk(child));
        }

        violations
    }

    /// Shared pipeline entry: normalize the raw name, then validate it
    fn check_candidate(
        &self,
        raw_name: &str,
        offset: usize,
        accessibility: Accessibility,
        inherited_types: &HashSet<String>,
    ) -> Option<Violation> {
        let name = normalize::normalized_name(raw_name, accessibility, inherited_types);

        if name.is_empty() {
            tracing::debug!(raw_name, offset, "skipping name that normalized to empty");
            return None;
        }

        self.validate_name(name, offset)
    }

    /// Ordered convention checks; the first that matches wins
    fn validate_name(&self, name: &str, offset: usize) -> Option<Violation> {
        if self.config.excluded.contains(name) {
            return None;
        }

        if name.chars().any(|c| !self.config.allows_character(c)) {
            return Some(Violation::new(
                RULE_ID,
                Severity::Error,
                offset,
                format!("Type name '{name}' contains non-alphanumeric characters"),
            ));
        }

        if self.config.validates_start_with_lowercase
            && !name.chars().next().is_some_and(char::is_uppercase)
        {
            return Some(Violation::new(
                RULE_ID,
                Severity::Error,
                offset,
                format!("Type name '{name}' must start with an uppercase character"),
            ));
        }

        let length = name.chars().count();
        self.config.severity_for_length(length).map(|severity| {
            Violation::new(
                RULE_ID,
                severity,
                offset,
                format!(
                    "Type name '{}' should be between {} and {} characters long",
                    name, self.config.min_length_warning, self.config.max_length_warning
                ),
            )
        })
    }
}
