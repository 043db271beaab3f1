//! Placeholder extraction

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// `{{`, optional whitespace, a word, optional whitespace, `}}`
static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("placeholder pattern is valid")
});

/// Return the distinct placeholder names found in `template`
///
/// Whitespace between the braces and the name is ignored, so `{{a}}` and
/// `{{ a }}` both yield `a`. A template without placeholders yields an
/// empty set.
pub fn extract_variables(template: &str) -> BTreeSet<String> {
    PLACEHOLDER_RE
        .captures_iter(template)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
