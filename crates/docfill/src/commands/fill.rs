//! Fill command - substitute values into the generic template

use crate::cli::FillArgs;
use crate::context::Context;
use crate::output::{print_preview, print_text, warn, write_document};
use anyhow::Result;
use colored::Colorize;
use docfill_core::config::consts;
use docfill_core::form::{self, DATE_VARIABLE};
use docfill_core::template::{VariableMap, extract_variables, fill_template, unresolved};
use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};

/// Fill the generic template and write `generated_content.md`
pub fn run(ctx: &Context, args: FillArgs) -> Result<()> {
    let path = args
        .template
        .clone()
        .unwrap_or_else(|| ctx.config.templates.generic.clone());
    let template = ctx.store.require(&path)?;
    let variables = extract_variables(&template);
    log::debug!("{} has {} placeholder(s)", path.display(), variables.len());

    let mut provided = match &args.vars {
        Some(vars_path) => form::load_values_file(&ctx.store.resolve(vars_path))?,
        None => VariableMap::new(),
    };
    for raw in &args.set {
        let (name, value) = form::parse_assignment(raw)?;
        if !variables.contains(&name) {
            log::warn!("'{}' is not a placeholder of {}", name, path.display());
        }
        provided.insert(name, value);
    }

    if args.interactive {
        let stdin = io::stdin();
        let stdout = io::stdout();
        prompt_missing(&variables, &mut provided, stdin.lock(), stdout.lock())?;
    }

    let values = form::collect_values(
        &variables,
        &provided,
        ctx.today,
        &ctx.config.format.generic_date,
    );
    let report = form::validate(&variables, &values);
    if !report.is_valid() {
        warn("Please fill all the fields!");
        report.into_result()?;
    }

    let document = fill_template(&template, &values);
    for name in unresolved(&document) {
        warn(&format!("placeholder '{}' left unresolved", name));
    }

    if !args.output.quiet {
        print_preview("Preview:", &document)?;
    }

    if !args.output.no_write {
        let out_path = ctx.output_path(args.output.output, consts::output::GENERIC_FILE);
        write_document(&out_path, &document)?;
        print_text(&format!("{} Wrote {}", "✓".green().bold(), out_path.display()))?;
    }

    Ok(())
}

/// Ask for every placeholder without a value
///
/// Stops quietly at end of input. An empty answer leaves the value unset
/// (`date` then falls back to today).
fn prompt_missing<R: BufRead, W: Write>(
    variables: &BTreeSet<String>,
    provided: &mut VariableMap,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    for name in variables {
        if provided.get(name).is_some_and(|v| !v.is_empty()) {
            continue;
        }

        if name == DATE_VARIABLE {
            write!(output, "Enter {} (YYYY-MM-DD, blank for today): ", name)?;
        } else {
            write!(output, "Enter {}: ", name)?;
        }
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let answer = line.trim_end_matches(['\r', '\n']);
        if !answer.is_empty() {
            provided.insert(name.as_str(), answer);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_prompt_asks_only_for_missing() {
        let mut provided: VariableMap = [("body", "Hello")].into_iter().collect();
        let mut shown = Vec::new();

        prompt_missing(
            &names(&["body", "subject"]),
            &mut provided,
            "Rent notice\n".as_bytes(),
            &mut shown,
        )
        .unwrap();

        assert_eq!(String::from_utf8(shown).unwrap(), "Enter subject: ");
        assert_eq!(provided.get("subject"), Some("Rent notice"));
        assert_eq!(provided.get("body"), Some("Hello"));
    }

    #[test]
    fn test_prompt_blank_date_stays_unset() {
        let mut provided = VariableMap::new();
        let mut shown = Vec::new();

        prompt_missing(&names(&["date"]), &mut provided, "\n".as_bytes(), &mut shown).unwrap();

        assert!(String::from_utf8(shown).unwrap().contains("blank for today"));
        assert!(!provided.contains("date"));
    }

    #[test]
    fn test_prompt_stops_at_end_of_input() {
        let mut provided = VariableMap::new();
        let mut shown = Vec::new();

        prompt_missing(
            &names(&["a", "b", "c"]),
            &mut provided,
            "first\r\n".as_bytes(),
            &mut shown,
        )
        .unwrap();

        assert_eq!(provided.get("a"), Some("first"));
        assert!(!provided.contains("b"));
        assert_eq!(String::from_utf8(shown).unwrap(), "Enter a: Enter b: ");
    }
}
