//! docfill.toml configuration

pub mod consts;
mod model;

pub use model::{Config, FormatConfig, OutputConfig, TemplatesConfig};
