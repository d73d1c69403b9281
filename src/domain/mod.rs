//! Domain types: parsed-source inputs and violation outputs

pub mod declarations;
pub mod violations;

pub use declarations::{
    Accessibility, Declaration, DeclarationKind, SourceFile, SwiftVersion, SyntaxToken, TokenKind,
};
pub use violations::{Severity, Violation, WardenError, WardenResult};
