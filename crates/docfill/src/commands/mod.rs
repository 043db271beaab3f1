//! CLI command implementations

pub mod claim;
pub mod fill;
pub mod vars;
