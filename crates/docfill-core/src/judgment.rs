//! Judgment documents for motor accident claims
//!
//! A [`CaseFile`] gathers the raw form input (from TOML, flags, or both).
//! [`CaseFile::resolve`] applies the form defaults and boundary checks and
//! yields the case details plus a complete [`ClaimInput`]; [`Judgment`]
//! runs the calculation and supplies every placeholder of the judgment
//! template.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::compensation::{
    calculate, AccidentType, ClaimInput, CompensationResult, InjuryDetails,
};
use crate::error::{DocfillError, Result};
use crate::format::{format_amount, AmountInWords};
use crate::template::{fill_template, VariableMap};

/// Victim age accepted by the claim form
pub const AGE_RANGE: std::ops::RangeInclusive<u32> = 1..=100;

/// Largest disability percentage
pub const MAX_DISABILITY_PERCENT: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum OccupationType {
    #[default]
    GovernmentService,
    PrivateService,
    SelfEmployed,
}

impl OccupationType {
    pub const ALL: [OccupationType; 3] = [
        OccupationType::GovernmentService,
        OccupationType::PrivateService,
        OccupationType::SelfEmployed,
    ];

    fn slug(self) -> &'static str {
        match self {
            OccupationType::GovernmentService => "government-service",
            OccupationType::PrivateService => "private-service",
            OccupationType::SelfEmployed => "self-employed",
        }
    }
}

impl fmt::Display for OccupationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OccupationType::GovernmentService => write!(f, "Government Service"),
            OccupationType::PrivateService => write!(f, "Private Service"),
            OccupationType::SelfEmployed => write!(f, "Self-Employed"),
        }
    }
}

impl TryFrom<String> for OccupationType {
    type Error = DocfillError;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl FromStr for OccupationType {
    type Err = DocfillError;

    /// Accepts the slug (`private-service`) or the display name (`Private Service`)
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(' ', "-");
        OccupationType::ALL
            .into_iter()
            .find(|o| o.slug() == wanted)
            .ok_or_else(|| DocfillError::InvalidChoice {
                field: "occupation".to_string(),
                value: s.to_string(),
                expected: "government-service, private-service, self-employed".to_string(),
            })
    }
}

/// Case particulars printed in the judgment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseDetails {
    pub court_location: String,
    pub case_number: String,
    pub case_year: String,
    pub claimant_name: String,
    pub respondent_name: String,
    pub victim_name: String,
    pub accident_date: NaiveDate,
    pub occupation: OccupationType,
}

/// Raw claim form input; every field is optional until [`CaseFile::resolve`]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseFile {
    pub court_location: Option<String>,
    pub case_number: Option<String>,
    pub case_year: Option<String>,
    pub claimant_name: Option<String>,
    pub respondent_name: Option<String>,
    pub victim_name: Option<String>,
    pub accident_type: Option<AccidentType>,
    pub accident_date: Option<NaiveDate>,
    pub age: Option<u32>,
    pub monthly_income: Option<f64>,
    pub dependents: Option<u32>,
    pub occupation: Option<OccupationType>,
    pub medical_expenses: Option<f64>,
    pub months_loss: Option<u32>,
    pub disability_percent: Option<u8>,
}

impl CaseFile {
    /// Read a case file from TOML
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| DocfillError::InputParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Fields set in `overrides` replace those in `self`
    pub fn merge(self, overrides: CaseFile) -> Self {
        Self {
            court_location: overrides.court_location.or(self.court_location),
            case_number: overrides.case_number.or(self.case_number),
            case_year: overrides.case_year.or(self.case_year),
            claimant_name: overrides.claimant_name.or(self.claimant_name),
            respondent_name: overrides.respondent_name.or(self.respondent_name),
            victim_name: overrides.victim_name.or(self.victim_name),
            accident_type: overrides.accident_type.or(self.accident_type),
            accident_date: overrides.accident_date.or(self.accident_date),
            age: overrides.age.or(self.age),
            monthly_income: overrides.monthly_income.or(self.monthly_income),
            dependents: overrides.dependents.or(self.dependents),
            occupation: overrides.occupation.or(self.occupation),
            medical_expenses: overrides.medical_expenses.or(self.medical_expenses),
            months_loss: overrides.months_loss.or(self.months_loss),
            disability_percent: overrides.disability_percent.or(self.disability_percent),
        }
    }

    /// Apply form defaults and boundary checks
    ///
    /// Defaults: age 1, no income, no dependents, fatal accident on `today`,
    /// government service, no injury amounts. Text fields may stay empty.
    pub fn resolve(self, today: NaiveDate) -> Result<(CaseDetails, ClaimInput)> {
        let age = self.age.unwrap_or(*AGE_RANGE.start());
        if !AGE_RANGE.contains(&age) {
            return Err(DocfillError::InvalidValue {
                field: "age".to_string(),
                reason: format!(
                    "must be between {} and {} (got {})",
                    AGE_RANGE.start(),
                    AGE_RANGE.end(),
                    age
                ),
            });
        }

        let monthly_income = non_negative("monthly_income", self.monthly_income.unwrap_or(0.0))?;
        let dependents = self.dependents.unwrap_or(0);

        let claim = match self.accident_type.unwrap_or(AccidentType::Fatal) {
            AccidentType::Fatal => {
                if self.medical_expenses.is_some()
                    || self.months_loss.is_some()
                    || self.disability_percent.is_some()
                {
                    log::debug!("ignoring injury fields for a fatal claim");
                }
                ClaimInput::fatal(age, monthly_income, dependents)
            }
            AccidentType::Injury => {
                let medical_expenses =
                    non_negative("medical_expenses", self.medical_expenses.unwrap_or(0.0))?;
                if let Some(percent) = self.disability_percent {
                    if percent > MAX_DISABILITY_PERCENT {
                        return Err(DocfillError::InvalidValue {
                            field: "disability_percent".to_string(),
                            reason: format!(
                                "must be between 0 and {} (got {})",
                                MAX_DISABILITY_PERCENT, percent
                            ),
                        });
                    }
                }
                ClaimInput::injury(
                    age,
                    monthly_income,
                    dependents,
                    InjuryDetails {
                        medical_expenses,
                        months_of_income_loss: self.months_loss.unwrap_or(0),
                        disability_percent: self.disability_percent,
                    },
                )
            }
        };

        let case = CaseDetails {
            court_location: self.court_location.unwrap_or_default(),
            case_number: self.case_number.unwrap_or_default(),
            case_year: self.case_year.unwrap_or_default(),
            claimant_name: self.claimant_name.unwrap_or_default(),
            respondent_name: self.respondent_name.unwrap_or_default(),
            victim_name: self.victim_name.unwrap_or_default(),
            accident_date: self.accident_date.unwrap_or(today),
            occupation: self.occupation.unwrap_or_default(),
        };

        Ok((case, claim))
    }
}

fn non_negative(field: &str, value: f64) -> Result<f64> {
    if value < 0.0 || value.is_nan() {
        return Err(DocfillError::NegativeAmount {
            field: field.to_string(),
            value,
        });
    }
    Ok(value)
}

/// A computed claim ready to be rendered
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Judgment {
    pub case: CaseDetails,
    pub claim: ClaimInput,
    pub result: CompensationResult,
}

impl Judgment {
    /// Run the calculation for `claim`
    pub fn new(case: CaseDetails, claim: ClaimInput) -> Self {
        let result = calculate(&claim);
        Self {
            case,
            claim,
            result,
        }
    }

    /// `judgment_mact_<case_number>_<case_year>.txt`
    pub fn file_name(&self) -> String {
        format!(
            "judgment_mact_{}_{}.txt",
            self.case.case_number, self.case.case_year
        )
    }

    /// Values for every judgment template placeholder
    pub fn variables(
        &self,
        today: NaiveDate,
        date_format: &str,
        words: &dyn AmountInWords,
    ) -> VariableMap {
        let case = &self.case;
        let mut vars = VariableMap::new();
        vars.insert("court_location", &case.court_location);
        vars.insert("case_number", &case.case_number);
        vars.insert("case_year", &case.case_year);
        vars.insert("claimant_name", &case.claimant_name);
        vars.insert("respondent_name", &case.respondent_name);
        vars.insert("victim_name", &case.victim_name);
        vars.insert("date", today.format(date_format));
        vars.insert("accident_type", self.claim.accident_type());
        vars.insert("age", self.claim.age);
        vars.insert("accident_date", case.accident_date.format(date_format));
        vars.insert("monthly_income", format_amount(self.claim.monthly_income));
        vars.insert("occupation_type", case.occupation);
        vars.insert("dependent_count", self.claim.dependents);
        vars.insert("compensation_details", self.result.details());
        vars.insert("total_compensation", format_amount(self.result.total));
        vars.insert(
            "compensation_in_words",
            words.to_words(self.result.total.trunc() as u64),
        );
        vars
    }

    /// Fill `template` with [`Judgment::variables`]
    pub fn render(
        &self,
        template: &str,
        today: NaiveDate,
        date_format: &str,
        words: &dyn AmountInWords,
    ) -> String {
        fill_template(template, &self.variables(today, date_format, words))
    }
}
