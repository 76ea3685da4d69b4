//! Property tests for the filename policies

use proptest::prelude::*;
use tracklint_core::rules::{FilenameCheck, SourceFilenameCheck};
use tracklint_core::LintPolicy;

fn filename_check() -> FilenameCheck {
    FilenameCheck::new(&LintPolicy::default()).unwrap()
}

fn source_check() -> SourceFilenameCheck {
    SourceFilenameCheck::new(&LintPolicy::default()).unwrap()
}

fn only_allowed_chars(path: &str) -> bool {
    let mut chars = path.chars();
    let allowed = |c: char| c.is_ascii_alphanumeric() || "/_.@".contains(c);
    match chars.next() {
        Some(first) => allowed(first) && chars.all(|c| allowed(c) || c == '-'),
        None => false,
    }
}

proptest! {
    // Accepted paths use only the allowed classes, or are the literal exception
    #[test]
    fn accepted_paths_use_allowed_characters(path in "[a-zA-Z0-9/_.@ \\-\\[\\]#~]{1,24}") {
        if filename_check().accepts(&path) {
            prop_assert!(
                only_allowed_chars(&path) || path == "web/e.cash/pages/blog/[slug].js",
                "accepted {:?}", path
            );
        }
    }

    #[test]
    fn portable_paths_are_accepted(path in "[a-zA-Z0-9_.@][a-zA-Z0-9/_.@-]{0,24}") {
        prop_assert!(filename_check().accepts(&path));
    }

    // Lowercase source names always pass the strict pattern
    #[test]
    fn lowercase_source_names_pass(stem in "[a-z0-9_/-]{1,16}", ext in "(cpp|h|py|sh|rs)") {
        let path = format!("{}.{}", stem, ext);
        let check = source_check();
        prop_assert!(check.is_source(&path));
        prop_assert!(check.accepts(&path));
    }

    // An uppercase letter outside any exception prefix is always rejected
    #[test]
    fn uppercase_source_names_fail(
        dir in "(ci|doc|test/lint)",
        upper in "[A-Z]",
        rest in "[a-z0-9_]{0,8}",
        ext in "(cpp|h|py|sh|rs)",
    ) {
        let path = format!("{}/{}{}.{}", dir, upper, rest, ext);
        prop_assert!(!source_check().accepts(&path));
    }

    // Anything under a vendored prefix passes regardless of case
    #[test]
    fn vendored_source_names_pass(name in "[A-Za-z0-9_]{1,12}", ext in "(cpp|h)") {
        let path = format!("src/univalue/{}.{}", name, ext);
        prop_assert!(source_check().accepts(&path));
    }
}
