//! Claim input and result types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DocfillError;

/// Parsed case-insensitively, from flags and case files alike
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum AccidentType {
    Fatal,
    Injury,
}

impl fmt::Display for AccidentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccidentType::Fatal => write!(f, "Fatal"),
            AccidentType::Injury => write!(f, "Injury"),
        }
    }
}

impl TryFrom<String> for AccidentType {
    type Error = DocfillError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl FromStr for AccidentType {
    type Err = DocfillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fatal" => Ok(AccidentType::Fatal),
            "injury" => Ok(AccidentType::Injury),
            _ => Err(DocfillError::InvalidChoice {
                field: "accident_type".to_string(),
                value: s.to_string(),
                expected: "fatal, injury".to_string(),
            }),
        }
    }
}

/// Inputs that only apply to injury claims
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InjuryDetails {
    pub medical_expenses: f64,
    pub months_of_income_loss: u32,
    /// Permanent disability in percent (0-100), if any
    pub disability_percent: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AccidentDetails {
    Fatal,
    Injury(InjuryDetails),
}

/// Complete input for one calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimInput {
    pub age: u32,
    pub monthly_income: f64,
    pub dependents: u32,
    pub accident: AccidentDetails,
}

impl ClaimInput {
    pub fn fatal(age: u32, monthly_income: f64, dependents: u32) -> Self {
        Self {
            age,
            monthly_income,
            dependents,
            accident: AccidentDetails::Fatal,
        }
    }

    pub fn injury(age: u32, monthly_income: f64, dependents: u32, details: InjuryDetails) -> Self {
        Self {
            age,
            monthly_income,
            dependents,
            accident: AccidentDetails::Injury(details),
        }
    }

    pub fn accident_type(&self) -> AccidentType {
        match self.accident {
            AccidentDetails::Fatal => AccidentType::Fatal,
            AccidentDetails::Injury(_) => AccidentType::Injury,
        }
    }

    pub fn annual_income(&self) -> f64 {
        self.monthly_income * 12.0
    }
}

/// Award total with its itemised breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompensationResult {
    pub accident_type: AccidentType,
    pub multiplier: u32,
    pub annual_income: f64,
    pub total: f64,
    /// Breakdown lines in document order
    pub line_items: Vec<String>,
}

impl CompensationResult {
    /// Breakdown lines joined with newlines
    pub fn details(&self) -> String {
        self.line_items.join("\n")
    }
}
