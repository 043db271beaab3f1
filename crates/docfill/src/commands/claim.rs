//! Claim command - compute compensation and render the judgment

use crate::cli::ClaimArgs;
use crate::context::Context;
use crate::output::{print_json, print_preview, print_text, warn, write_document};
use anyhow::Result;
use colored::Colorize;
use docfill_core::format::{IndianEnglish, format_amount};
use docfill_core::judgment::{CaseFile, Judgment};
use docfill_core::template::unresolved;

/// Collect the claim, compute the award and write the judgment
pub fn run(ctx: &Context, args: ClaimArgs) -> Result<()> {
    let base = match &args.case {
        Some(case_path) => CaseFile::load(&ctx.store.resolve(case_path))?,
        None => CaseFile::default(),
    };
    let (case, claim) = base.merge(args.form.into()).resolve(ctx.today)?;
    let judgment = Judgment::new(case, claim);
    log::debug!(
        "{} claim total {:.2}",
        judgment.result.accident_type,
        judgment.result.total
    );

    let path = args
        .template
        .unwrap_or_else(|| ctx.config.templates.claim.clone());
    let template = ctx.store.require(&path)?;

    let document = judgment.render(
        &template,
        ctx.today,
        &ctx.config.format.judgment_date,
        &IndianEnglish,
    );
    for name in unresolved(&document) {
        warn(&format!("placeholder '{}' left unresolved", name));
    }

    let file_name = judgment.file_name();
    let out_path = ctx.output_path(args.output.output, &file_name);
    let written = if args.output.no_write {
        None
    } else {
        write_document(&out_path, &document)?;
        Some(out_path)
    };

    if args.json {
        let summary = serde_json::json!({
            "file_name": file_name,
            "path": written,
            "case": judgment.case,
            "claim": judgment.claim,
            "result": judgment.result,
        });
        print_json(&serde_json::to_string_pretty(&summary)?)?;
        return Ok(());
    }

    if !args.output.quiet {
        print_preview("Generated Judgment", &document)?;
    }
    print_text(&format!(
        "{} Total compensation: Rs. {}",
        "✓".green().bold(),
        format_amount(judgment.result.total)
    ))?;
    if let Some(path) = written {
        print_text(&format!("{} Wrote {}", "✓".green().bold(), path.display()))?;
    }

    Ok(())
}
