//! Text-pattern recovery of alias declarations
//!
//! Architecture: Specialized Analysis Services - A dedicated matcher for
//! constructs the structured tree doesn't expose
//! - Under dialects older than 4.1, `typealias` and `associatedtype` never
//!   appear as declaration-tree nodes; their names are recovered here from
//!   the raw text and the token classification stream
//! - Kept fully decoupled from the tree walk so it can be dropped once the
//!   old dialects stop mattering

use crate::domain::declarations::{SyntaxToken, TokenKind};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Keyword followed by an identifier-like token run
    static ref ALIAS_PATTERN: Regex =
        Regex::new(r"\b(typealias|associatedtype)\s+\w+").expect("alias pattern is valid");
}

/// An alias name recovered from raw text, located at the identifier token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasCandidate<'a> {
    pub name: &'a str,
    pub offset: usize,
}

/// Scan raw text for alias declarations the tree doesn't carry
///
/// A textual match only becomes a candidate when the tokens inside its byte
/// range classify as exactly [keyword, identifier]; anything else (comments,
/// string literals, partial tokenization) is discarded without complaint.
pub fn scan<'a>(contents: &'a str, tokens: &[SyntaxToken]) -> Vec<AliasCandidate<'a>> {
    ALIAS_PATTERN
        .find_iter(contents)
        .filter_map(|found| candidate_for_range(contents, tokens, found.start(), found.end()))
        .collect()
}

fn candidate_for_range<'a>(
    contents: &'a str,
    tokens: &[SyntaxToken],
    start: usize,
    end: usize,
) -> Option<AliasCandidate<'a>> {
    let in_range: Vec<&SyntaxToken> = tokens
        .iter()
        .filter(|token| token.offset >= start && token.end() <= end)
        .collect();

    let [keyword, identifier] = in_range.as_slice() else {
        tracing::debug!(
            start,
            end,
            token_count = in_range.len(),
            "discarding alias match with unexpected token count"
        );
        return None;
    };

    if keyword.kind != TokenKind::Keyword || identifier.kind != TokenKind::Identifier {
        tracing::debug!(start, end, "discarding alias match with unexpected token tags");
        return None;
    }

    let name = contents.get(identifier.offset..identifier.end())?;

    Some(AliasCandidate {
        name,
        offset: identifier.offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens_for(pairs: &[(TokenKind, usize, usize)]) -> Vec<SyntaxToken> {
        pairs
            .iter()
            .map(|&(kind, offset, length)| SyntaxToken::new(kind, offset, length))
            .collect()
    }

    #[test]
    fn test_typealias_is_recovered() {
        let contents = "typealias Money = Double";
        let tokens = tokens_for(&[
            (TokenKind::Keyword, 0, 9),
            (TokenKind::Identifier, 10, 5),
            (TokenKind::Identifier, 18, 6),
        ]);

        let candidates = scan(contents, &tokens);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "Money");
        assert_eq!(candidates[0].offset, 10);
    }

    #[test]
    fn test_associatedtype_is_recovered() {
        let contents = "protocol Repository {\n    associatedtype Element\n}";
        let tokens = tokens_for(&[
            (TokenKind::Keyword, 0, 8),
            (TokenKind::Identifier, 9, 10),
            (TokenKind::Keyword, 26, 14),
            (TokenKind::Identifier, 41, 7),
        ]);

        let candidates = scan(contents, &tokens);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "Element");
        assert_eq!(candidates[0].offset, 41);
    }

    #[test]
    fn test_match_without_tokens_is_discarded() {
        // Looks like a declaration but tokenizes as nothing - e.g. the text
        // sits inside a string literal the tokenizer swallowed whole.
        let contents = "typealias Money = Double";

        assert!(scan(contents, &[]).is_empty());
    }

    #[test]
    fn test_match_with_extra_tokens_is_discarded() {
        let contents = "typealias Money = Double";
        let tokens = tokens_for(&[
            (TokenKind::Keyword, 0, 9),
            (TokenKind::Identifier, 10, 2),
            (TokenKind::Identifier, 13, 2),
        ]);

        assert!(scan(contents, &tokens).is_empty());
    }

    #[test]
    fn test_match_with_wrong_tags_is_discarded() {
        // A comment mentioning the keyword: both tokens classify as Other.
        let contents = "typealias Money = Double";
        let tokens = tokens_for(&[
            (TokenKind::Other, 0, 9),
            (TokenKind::Other, 10, 5),
        ]);

        assert!(scan(contents, &tokens).is_empty());
    }

    #[test]
    fn test_token_range_outside_text_is_discarded() {
        let contents = "typealias Money";
        let tokens = tokens_for(&[
            (TokenKind::Keyword, 0, 9),
            (TokenKind::Identifier, 10, 500),
        ]);

        assert!(scan(contents, &tokens).is_empty());
    }

    #[test]
    fn test_multiple_matches_in_document_order() {
        let contents = "typealias A2 = Int\ntypealias B2 = Int";
        let tokens = tokens_for(&[
            (TokenKind::Keyword, 0, 9),
            (TokenKind::Identifier, 10, 2),
            (TokenKind::Identifier, 15, 3),
            (TokenKind::Keyword, 19, 9),
            (TokenKind::Identifier, 29, 2),
            (TokenKind::Identifier, 34, 3),
        ]);

        let candidates = scan(contents, &tokens);

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].name, "A2");
        assert_eq!(candidates[1].name, "B2");
    }
}
