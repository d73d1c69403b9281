//! Parsed-source input model consumed by the validator
//!
//! Architecture: Anti-Corruption Layer - The external parser's output is
//! translated into these plain-data records at the crate boundary
//! - Declaration trees, token streams, and the dialect version are read-only
//!   inputs; nothing here mutates after construction
//! - Kind and accessibility are closed tag sets so routing decisions are
//!   ordinary pattern matches rather than string comparisons

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Kinds of declarations the external parser can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Class,
    Struct,
    Enum,
    Protocol,
    /// Anything else the parser surfaces (functions, variables, extensions)
    Other,
}

impl DeclarationKind {
    /// Whether declarations of this kind carry a type name worth validating
    pub fn is_type_like(self) -> bool {
        matches!(self, Self::Class | Self::Struct | Self::Enum | Self::Protocol)
    }
}

impl Default for DeclarationKind {
    fn default() -> Self {
        Self::Other
    }
}

/// Accessibility of a declaration, folded to what normalization needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Accessibility {
    Private,
    FilePrivate,
    #[default]
    Other,
}

impl Accessibility {
    /// Whether the declaration is visible only within its private scope
    pub fn is_private_scoped(self) -> bool {
        matches!(self, Self::Private | Self::FilePrivate)
    }
}

/// A parsed occurrence of a named construct in source
///
/// Produced by the external parser; `name` and `name_offset` are optional
/// because not every construct the parser reports carries both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Declaration {
    /// Kind tag from the closed set above
    pub kind: DeclarationKind,
    /// Declared name, when the parser recovered one
    pub name: Option<String>,
    /// Byte offset of the name into the source, when known
    pub name_offset: Option<usize>,
    /// Names of inherited types and adopted protocols
    pub inherited_types: HashSet<String>,
    /// Accessibility tag
    pub accessibility: Accessibility,
    /// Nested declarations in document order
    pub children: Vec<Declaration>,
}

impl Declaration {
    /// Create a declaration of the given kind with no name or children
    pub fn new(kind: DeclarationKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Set the declared name and its byte offset
    pub fn with_name(mut self, name: impl Into<String>, offset: usize) -> Self {
        self.name = Some(name.into());
        self.name_offset = Some(offset);
        self
    }

    /// Set the accessibility tag
    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    /// Add an inherited type or adopted protocol name
    pub fn with_inherited_type(mut self, name: impl Into<String>) -> Self {
        self.inherited_types.insert(name.into());
        self
    }

    /// Add a nested declaration
    pub fn with_child(mut self, child: Declaration) -> Self {
        self.children.push(child);
        self
    }
}

/// Token classification tags used by the alias scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Keyword,
    Identifier,
    Other,
}

/// A classified token with its byte range in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxToken {
    pub kind: TokenKind,
    /// Byte offset of the token's first byte
    pub offset: usize,
    /// Token length in bytes
    pub length: usize,
}

impl SyntaxToken {
    pub fn new(kind: TokenKind, offset: usize, length: usize) -> Self {
        Self {
            kind,
            offset,
            length,
        }
    }

    /// End of the token's byte range, exclusive
    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

/// A Swift language version, comparable against feature thresholds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Hash,
)]
pub struct SwiftVersion {
    pub major: u32,
    pub minor: u32,
}

impl SwiftVersion {
    /// The dialect at which type aliases and associated types appear as
    /// first-class declaration-tree nodes
    pub const FOUR_DOT_ONE: SwiftVersion = SwiftVersion { major: 4, minor: 1 };

    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

/// Everything one validation call consumes for a single file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    /// Raw source text
    pub contents: String,
    /// Root declarations of the parsed tree, in document order
    pub declarations: Vec<Declaration>,
    /// Classified token stream over `contents`
    pub tokens: Vec<SyntaxToken>,
    /// Dialect version the file was parsed under
    pub swift_version: SwiftVersion,
}

impl SourceFile {
    pub fn new(
        contents: impl Into<String>,
        declarations: Vec<Declaration>,
        tokens: Vec<SyntaxToken>,
        swift_version: SwiftVersion,
    ) -> Self {
        Self {
            contents: contents.into(),
            declarations,
            tokens,
            swift_version,
        }
    }
}
