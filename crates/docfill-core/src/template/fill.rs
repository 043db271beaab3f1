//! Literal placeholder substitution

use std::collections::BTreeMap;

use super::extract::extract_variables;

/// Placeholder name to rendered value
///
/// Keys are unique; substitution walks them in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableMap {
    values: BTreeMap<String, String>,
}

impl VariableMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to the string form of `value`, replacing any previous entry
    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        self.values.insert(name.into(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for VariableMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = VariableMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Canonical placeholder text for `name`: `{{ name }}`
pub fn placeholder(name: &str) -> String {
    format!("{{{{ {} }}}}", name)
}

/// Replace every `{{ name }}` in `template` with its value from `variables`
///
/// This is plain text replacement of the canonical form only. `{{name}}` is
/// not touched even when `name` has a value, and placeholders without a value
/// stay in the output as they are.
pub fn fill_template(template: &str, variables: &VariableMap) -> String {
    let mut filled = template.to_string();
    for (name, value) in variables.iter() {
        filled = filled.replace(&placeholder(name), value);
    }
    filled
}

/// Placeholder names still present in `filled`
pub fn unresolved(filled: &str) -> Vec<String> {
    extract_variables(filled).into_iter().collect()
}
