//! Placeholder extraction tests

use super::helpers::LETTER;
use super::*;
use std::collections::BTreeSet;

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_extract_distinct_names() {
    let template = "{{ a }} and {{b}} and again {{ a }}";
    assert_eq!(extract_variables(template), set(&["a", "b"]));
}

#[test]
fn test_extract_no_placeholders() {
    assert!(extract_variables("plain text, no braces").is_empty());
    assert!(extract_variables("").is_empty());
}

#[test]
fn test_extract_tolerates_whitespace() {
    let template = "{{   spaced   }} {{\ttabbed\t}} {{\nwrapped\n}}";
    assert_eq!(extract_variables(template), set(&["spaced", "tabbed", "wrapped"]));
}

#[test]
fn test_extract_identifier_characters() {
    let template = "{{ case_number }} {{ year2026 }} {{ _hidden }}";
    assert_eq!(
        extract_variables(template),
        set(&["case_number", "year2026", "_hidden"])
    );
}

#[test]
fn test_extract_ignores_non_identifiers() {
    let template = "{{ two words }} {{ dotted.key }} {{ }} {{-}} {single}";
    assert!(extract_variables(template).is_empty());
}

#[test]
fn test_extract_inner_placeholder_of_unclosed_one() {
    // The outer `{{ x` never closes, the inner one is still found
    let template = "{{ x {{ y }}";
    assert_eq!(extract_variables(template), set(&["y"]));
}

#[test]
fn test_extract_triple_braces() {
    assert_eq!(extract_variables("{{{ a }}}"), set(&["a"]));
}

#[test]
fn test_extract_letter_template() {
    assert_eq!(
        extract_variables(LETTER),
        set(&["date", "name", "order_id"])
    );
}
