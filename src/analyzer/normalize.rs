//! Name normalization applied before convention checks
//!
//! Two transforms exempt generated-name patterns from spurious violations.
//! Both are gated on declaration metadata, both are plain slicing, and the
//! underscore strip always runs before the preview-suffix strip.

use crate::domain::declarations::Accessibility;
use std::collections::HashSet;

/// Protocol whose conformers get preview-suffix stripping
pub const PREVIEW_PROVIDER_MARKER: &str = "PreviewProvider";

/// Generated suffix carried by preview conformers
pub const PREVIEW_SUFFIX: &str = "_Previews";

/// Normalize a raw declared name for validation
///
/// 1. Private-scoped declarations may prefix their name with `_`; the
///    underscore is dropped so the checks see the real name.
/// 2. Conformers of [`PREVIEW_PROVIDER_MARKER`] named `Foo_Previews` are
///    validated as `Foo` — truncated at the suffix's first occurrence.
pub fn normalized_name<'a>(
    raw: &'a str,
    accessibility: Accessibility,
    inherited_types: &HashSet<String>,
) -> &'a str {
    let mut name = raw;

    if accessibility.is_private_scoped() {
        if let Some(stripped) = name.strip_prefix('_') {
            name = stripped;
        }
    }

    if name.ends_with(PREVIEW_SUFFIX) && inherited_types.contains(PREVIEW_PROVIDER_MARKER) {
        if let Some(index) = name.find(PREVIEW_SUFFIX) {
            name = &name[..index];
        }
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preview_set() -> HashSet<String> {
        [PREVIEW_PROVIDER_MARKER.to_string()].into_iter().collect()
    }

    #[test]
    fn test_private_underscore_is_stripped() {
        let inherited = HashSet::new();

        assert_eq!(
            normalized_name("_Foo", Accessibility::Private, &inherited),
            "Foo"
        );
        assert_eq!(
            normalized_name("_Foo", Accessibility::FilePrivate, &inherited),
            "Foo"
        );
    }

    #[test]
    fn test_underscore_kept_for_non_private() {
        let inherited = HashSet::new();

        assert_eq!(
            normalized_name("_Foo", Accessibility::Other, &inherited),
            "_Foo"
        );
    }

    #[test]
    fn test_only_one_leading_underscore_is_stripped() {
        let inherited = HashSet::new();

        assert_eq!(
            normalized_name("__Foo", Accessibility::Private, &inherited),
            "_Foo"
        );
    }

    #[test]
    fn test_preview_suffix_is_stripped_for_conformers() {
        assert_eq!(
            normalized_name("Foo_Previews", Accessibility::Other, &preview_set()),
            "Foo"
        );
    }

    #[test]
    fn test_preview_suffix_kept_without_conformance() {
        let inherited = HashSet::new();

        assert_eq!(
            normalized_name("Foo_Previews", Accessibility::Other, &inherited),
            "Foo_Previews"
        );
    }

    #[test]
    fn test_preview_suffix_truncates_at_first_occurrence() {
        assert_eq!(
            normalized_name(
                "Foo_Previews_Previews",
                Accessibility::Other,
                &preview_set()
            ),
            "Foo"
        );
    }

    #[test]
    fn test_underscore_strip_runs_before_suffix_strip() {
        assert_eq!(
            normalized_name("_Foo_Previews", Accessibility::Private, &preview_set()),
            "Foo"
        );
    }

    #[test]
    fn test_suffix_only_matches_at_end() {
        assert_eq!(
            normalized_name("Foo_PreviewsKit", Accessibility::Other, &preview_set()),
            "Foo_PreviewsKit"
        );
    }
}
