//! Compensation module - motor accident claim awards
//!
//! Computes the award for a claim with the multiplier method:
//!
//! - **Fatal**: loss of dependency (annual income × dependency ratio ×
//!   multiplier), consortium per dependent, funeral expenses, loss of estate
//! - **Injury**: medical expenses, loss of income over the months lost, and
//!   an optional permanent disability amount
//!
//! [`calculate`] is pure. Inputs are not validated here; build a complete
//! [`ClaimInput`] at the boundary first.

mod engine;
mod model;
mod multiplier;

pub use engine::{calculate, CONSORTIUM_PER_DEPENDENT, FUNERAL_EXPENSES, LOSS_OF_ESTATE};
pub use model::{AccidentDetails, AccidentType, ClaimInput, CompensationResult, InjuryDetails};
pub use multiplier::{dependency_ratio, multiplier_for_age};
