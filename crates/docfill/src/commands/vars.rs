//! Vars command - list the placeholders of a template

use crate::context::Context;
use crate::output::{print_json, print_text};
use anyhow::Result;
use colored::Colorize;
use docfill_core::template::extract_variables;
use std::path::PathBuf;

/// List placeholders of `template` (or the configured generic template)
pub fn run(ctx: &Context, template: Option<PathBuf>, json: bool) -> Result<()> {
    let path = template.unwrap_or_else(|| ctx.config.templates.generic.clone());
    let text = ctx.store.require(&path)?;
    let variables = extract_variables(&text);

    if json {
        let value = serde_json::json!({
            "template": ctx.store.resolve(&path),
            "variables": variables,
        });
        print_json(&serde_json::to_string_pretty(&value)?)?;
        return Ok(());
    }

    if variables.is_empty() {
        print_text(&format!("{} No placeholders in {}", "!".yellow(), path.display()))?;
    } else {
        for name in &variables {
            print_text(name)?;
        }
    }

    Ok(())
}
