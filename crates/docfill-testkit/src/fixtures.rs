//! Fixture content shared by tests
//!
//! The templates are the ones shipped at the repository root, so tests
//! exercise exactly what a user gets by default.

/// Bundled generic template (`template.txt`)
pub const GENERIC_TEMPLATE: &str = include_str!("../../../template.txt");

/// Bundled judgment template (`mact_template.txt`)
pub const JUDGMENT_TEMPLATE: &str = include_str!("../../../mact_template.txt");

/// A fatal-accident case file matching the worked example:
/// age 30, 10,000 a month, two dependents.
pub const FATAL_CASE_TOML: &str = r#"
court_location = "Pune"
case_number = "123"
case_year = "2024"
claimant_name = "Sunita Patil"
respondent_name = "National Insurance Co."
victim_name = "Ramesh Patil"
accident_type = "fatal"
accident_date = "2024-03-05"
age = 30
monthly_income = 10000
dependents = 2
occupation = "private-service"
"#;

/// An injury case with a 50% permanent disability
pub const INJURY_CASE_TOML: &str = r#"
case_number = "77"
case_year = "2025"
victim_name = "Kiran Rao"
accident_type = "injury"
accident_date = "2025-01-20"
age = 40
monthly_income = 1000
dependents = 0
occupation = "self-employed"
medical_expenses = 2000
months_loss = 3
disability_percent = 50
"#;
