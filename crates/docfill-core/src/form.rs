//! Generic form collection and the "fill all fields" check

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{DocfillError, Result};
use crate::template::VariableMap;

/// Placeholder that defaults to today's date
pub const DATE_VARIABLE: &str = "date";

/// Outcome of the presence check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Placeholders without a non-empty value, sorted
    pub missing: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }

    /// `Ok(())` when valid, otherwise [`DocfillError::MissingFields`]
    pub fn into_result(self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(DocfillError::MissingFields {
                fields: self.missing,
            })
        }
    }
}

/// Check that every placeholder in `variables` has a non-empty value
///
/// Only the empty string counts as missing; whitespace is a value.
pub fn validate(variables: &BTreeSet<String>, values: &VariableMap) -> ValidationReport {
    let missing = variables
        .iter()
        .filter(|name| values.get(name).is_none_or(str::is_empty))
        .cloned()
        .collect();
    ValidationReport { missing }
}

/// Build the value map for a template's placeholders
///
/// Only names in `variables` are kept. When the template uses `date` and no
/// non-empty value was given, it becomes `today`; a `YYYY-MM-DD` value is
/// reformatted. Both use `date_format`.
pub fn collect_values(
    variables: &BTreeSet<String>,
    provided: &VariableMap,
    today: NaiveDate,
    date_format: &str,
) -> VariableMap {
    let mut values = VariableMap::new();
    for name in variables {
        let given = provided.get(name).filter(|v| !v.is_empty());
        if name == DATE_VARIABLE {
            let date = given
                .map(|v| format_date_value(v, date_format))
                .unwrap_or_else(|| today.format(date_format).to_string());
            values.insert(name.as_str(), date);
        } else if let Some(value) = given {
            values.insert(name.as_str(), value);
        }
    }
    values
}

fn format_date_value(value: &str, date_format: &str) -> String {
    match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        Ok(date) => date.format(date_format).to_string(),
        Err(_) => value.to_string(),
    }
}

/// Parse a `NAME=VALUE` assignment
pub fn parse_assignment(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| DocfillError::InvalidAssignment(raw.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(DocfillError::InvalidAssignment(raw.to_string()));
    }
    Ok((name.to_string(), value.to_string()))
}

/// Load a flat TOML table of variable values
///
/// Scalar values are stringified; nested tables and arrays are rejected.
pub fn load_values_file(path: &Path) -> Result<VariableMap> {
    let content = std::fs::read_to_string(path)?;
    parse_values(&content).map_err(|reason| DocfillError::InputParseError {
        path: path.to_path_buf(),
        reason,
    })
}

fn parse_values(content: &str) -> std::result::Result<VariableMap, String> {
    let table: toml::Table = toml::from_str(content).map_err(|e| e.to_string())?;
    let mut values = VariableMap::new();
    for (name, value) in table {
        let text = match value {
            toml::Value::String(s) => s,
            toml::Value::Integer(i) => i.to_string(),
            toml::Value::Float(f) => f.to_string(),
            toml::Value::Boolean(b) => b.to_string(),
            toml::Value::Datetime(dt) => dt.to_string(),
            toml::Value::Array(_) | toml::Value::Table(_) => {
                return Err(format!("'{}' must be a scalar value", name));
            }
        };
        values.insert(name, text);
    }
    Ok(values)
}
