//! Identifier case conversion.
//!
//! Archetype names arrive as `snake_case`, `kebab-case`, or already in
//! `PascalCase`. Component declarations need a PascalCase identifier and
//! output paths need a lower-case, hyphenated segment.

use std::sync::LazyLock;

use convert_case::{Case, Casing};
use regex::Regex;

static CAMEL_HUMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("valid regex"));

static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_]+").expect("valid regex"));

/// Convert a name to a PascalCase component identifier.
///
/// Splits on `-`, `_`, and whitespace, upper-cases the first letter of every
/// segment and joins them. Empty segments are dropped and the remainder of each
/// segment is left untouched, so `"AuthLogin"` maps to itself.
///
/// ```
/// use pagekit_core::to_component_name;
///
/// assert_eq!(to_component_name("auth_login"), "AuthLogin");
/// assert_eq!(to_component_name("error-404"), "Error404");
/// ```
pub fn to_component_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for segment in name.split(|c: char| c == '-' || c == '_' || c.is_whitespace()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Convert a name to a PascalCase identifier that is valid in JavaScript,
/// TypeScript, and Angular class declarations.
///
/// Characters other than letters, digits, `_`, and `$` are removed, and a
/// `Page` prefix is added when the result would not start with a letter.
///
/// ```
/// use pagekit_core::to_identifier;
///
/// assert_eq!(to_identifier("auth_login"), "AuthLogin");
/// assert_eq!(to_identifier("404 page"), "Page404Page");
/// ```
pub fn to_identifier(name: &str) -> String {
    let ident: String = to_component_name(name)
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '$')
        .collect();
    if ident.starts_with(char::is_alphabetic) {
        ident
    } else {
        format!("Page{ident}")
    }
}

/// Convert a name to a kebab-case path segment.
///
/// A hyphen is inserted at every lower-to-upper camel hump, runs of whitespace
/// and underscores collapse to a single hyphen, and the result is lower-cased.
///
/// ```
/// use pagekit_core::to_path_segment;
///
/// assert_eq!(to_path_segment("auth_login"), "auth-login");
/// assert_eq!(to_path_segment("CrudTable"), "crud-table");
/// ```
pub fn to_path_segment(name: &str) -> String {
    let humped = CAMEL_HUMP.replace_all(name, "$1-$2");
    SEPARATOR_RUN.replace_all(&humped, "-").to_lowercase()
}

/// Human-readable title for an archetype name, e.g. `"Auth Login"`.
pub fn to_display_title(name: &str) -> String {
    name.to_case(Case::Title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_component_name_from_snake() {
        assert_eq!(to_component_name("crud_table"), "CrudTable");
        assert_eq!(to_component_name("landing"), "Landing");
        assert_eq!(to_component_name("blog list"), "BlogList");
    }

    #[test]
    fn test_component_name_drops_empty_segments() {
        assert_eq!(to_component_name("__auth--login  "), "AuthLogin");
        assert_eq!(to_component_name(""), "");
    }

    #[test]
    fn test_component_name_keeps_pascal_case() {
        assert_eq!(to_component_name("AuthLogin"), "AuthLogin");
        assert_eq!(to_component_name("HTMLPage"), "HTMLPage");
    }

    #[test]
    fn test_identifier() {
        assert_eq!(to_identifier("error_404"), "Error404");
        assert_eq!(to_identifier("404 page"), "Page404Page");
        assert_eq!(to_identifier("my.page!"), "Mypage");
        assert_eq!(to_identifier("_"), "Page");
        assert_eq!(to_identifier(""), "Page");
    }

    #[test]
    fn test_path_segment() {
        assert_eq!(to_path_segment("auth_login"), "auth-login");
        assert_eq!(to_path_segment("error_404"), "error-404");
        assert_eq!(to_path_segment("OnboardingWizard"), "onboarding-wizard");
        assert_eq!(to_path_segment("blog  __list"), "blog-list");
    }

    #[test]
    fn test_display_title() {
        assert_eq!(to_display_title("auth_signup"), "Auth Signup");
    }

    proptest! {
        #[test]
        fn identifier_starts_with_letter(name in "\\PC{0,24}") {
            let ident = to_identifier(&name);
            prop_assert!(ident.starts_with(char::is_alphabetic));
            prop_assert!(ident.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '$'));
        }

        #[test]
        fn path_segment_is_stable(name in "[A-Za-z0-9_ -]{0,24}") {
            let once = to_path_segment(&name);
            prop_assert_eq!(to_path_segment(&once), once);
        }

        #[test]
        fn component_name_is_idempotent(name in "[A-Za-z0-9_ -]{0,24}") {
            let once = to_component_name(&name);
            prop_assert_eq!(to_component_name(&once), once);
        }
    }
}
