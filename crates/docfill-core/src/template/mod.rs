//! Template module - literal placeholder substitution
//!
//! Templates are plain text or Markdown files containing `{{ name }}`
//! placeholders. This module reads them from disk, lists the placeholders
//! they contain and substitutes values into them.
//!
//! ## Syntax
//!
//! - Placeholders: `{{ name }}`, where `name` is made of letters, digits and `_`
//! - Extraction tolerates any whitespace inside the braces (`{{name}}`, `{{  name }}`)
//! - Substitution only replaces the canonical single-space form `{{ name }}`
//!
//! ## Unresolved placeholders
//!
//! A placeholder without a value is left in the output unchanged. Use
//! [`unresolved`] after filling to find out which ones survived.

pub mod extract;
pub mod fill;
pub mod store;

pub use extract::extract_variables;
pub use fill::{fill_template, placeholder, unresolved, VariableMap};
pub use store::{load_template, TemplateStore};

#[cfg(test)]
mod tests;
