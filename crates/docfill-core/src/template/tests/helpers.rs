//! Shared test helpers for template tests

use crate::template::VariableMap;

/// A letter-style template mixing canonical and compact placeholders
pub(super) const LETTER: &str = "Dear {{ name }},\n\
Your order {{order_id}} ships on {{ date }}.\n\
Regards, {{ name }}\n";

pub(super) fn letter_values() -> VariableMap {
    [
        ("name", "Asha"),
        ("order_id", "A-17"),
        ("date", "October 14, 2026"),
    ]
    .into_iter()
    .collect()
}
