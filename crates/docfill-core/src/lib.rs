// Core modules
pub mod compensation;
pub mod config;
pub mod error;
pub mod form;
pub mod format;
pub mod judgment;
pub mod template;

// Re-export commonly used types
pub use error::{DocfillError, Result};
