//! Output formatting collaborators
//!
//! Number formatting used when rendering documents. Kept apart from the
//! compensation rules so the locale can change without touching them.

pub mod currency;
pub mod words;

pub use currency::format_amount;
pub use words::{AmountInWords, IndianEnglish};
