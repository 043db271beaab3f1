//! Award calculation

use super::model::{AccidentDetails, ClaimInput, CompensationResult, InjuryDetails};
use super::multiplier::{dependency_ratio, multiplier_for_age};
use crate::format::format_amount;

/// Consortium awarded per dependent in fatal claims
pub const CONSORTIUM_PER_DEPENDENT: f64 = 40_000.0;

/// Fixed funeral expenses in fatal claims
pub const FUNERAL_EXPENSES: f64 = 15_000.0;

/// Fixed loss of estate in fatal claims
pub const LOSS_OF_ESTATE: f64 = 15_000.0;

/// Compute the award for `input`
pub fn calculate(input: &ClaimInput) -> CompensationResult {
    let multiplier = multiplier_for_age(input.age);
    let annual_income = input.annual_income();

    let (total, line_items) = match &input.accident {
        AccidentDetails::Fatal => fatal(input.dependents, annual_income, multiplier),
        AccidentDetails::Injury(details) => {
            injury(details, input.monthly_income, annual_income, multiplier)
        }
    };

    log::debug!(
        "{} claim: age {} -> multiplier {}, total {:.2}",
        input.accident_type(),
        input.age,
        multiplier,
        total
    );

    CompensationResult {
        accident_type: input.accident_type(),
        multiplier,
        annual_income,
        total,
        line_items,
    }
}

fn fatal(dependents: u32, annual_income: f64, multiplier: u32) -> (f64, Vec<String>) {
    let ratio = dependency_ratio(dependents);
    let loss_of_dependency = annual_income * ratio * f64::from(multiplier);
    let consortium = CONSORTIUM_PER_DEPENDENT * f64::from(dependents);

    let total = loss_of_dependency + consortium + FUNERAL_EXPENSES + LOSS_OF_ESTATE;
    let lines = vec![
        format!("1. Loss of Dependency: Rs. {}", format_amount(loss_of_dependency)),
        format!("   - Annual Income: Rs. {}", format_amount(annual_income)),
        format!("   - Dependency Ratio: {}", ratio),
        format!("   - Multiplier: {}", multiplier),
        format!("2. Consortium: Rs. {}", format_amount(consortium)),
        format!("3. Funeral Expenses: Rs. {}", format_amount(FUNERAL_EXPENSES)),
        format!("4. Loss of Estate: Rs. {}", format_amount(LOSS_OF_ESTATE)),
    ];
    (total, lines)
}

fn injury(
    details: &InjuryDetails,
    monthly_income: f64,
    annual_income: f64,
    multiplier: u32,
) -> (f64, Vec<String>) {
    let loss_of_income = monthly_income * f64::from(details.months_of_income_loss);

    let mut total = details.medical_expenses + loss_of_income;
    let mut lines = vec![
        format!(
            "1. Medical Expenses: Rs. {}",
            format_amount(details.medical_expenses)
        ),
        format!("2. Loss of Income: Rs. {}", format_amount(loss_of_income)),
    ];

    if let Some(percent) = details.disability_percent {
        let permanent_disability =
            annual_income * f64::from(multiplier) * (f64::from(percent) / 100.0);
        total += permanent_disability;
        lines.push(format!(
            "3. Permanent Disability Compensation: Rs. {}",
            format_amount(permanent_disability)
        ));
        lines.push(format!("   - Annual Income: Rs. {}", format_amount(annual_income)));
        lines.push(format!("   - Multiplier: {}", multiplier));
        lines.push(format!("   - Disability: {}%", percent));
    }

    (total, lines)
}
