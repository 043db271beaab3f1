//! CLI command structure using clap

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, value_parser};
use docfill_core::compensation::AccidentType;
use docfill_core::judgment::{CaseFile, OccupationType};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docfill")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to ./docfill.toml when present)
    #[arg(long, global = true, env = "DOCFILL_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the placeholders of a template
    Vars {
        /// Template file (defaults to the generic template)
        #[arg(short, long)]
        template: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    /// Fill the generic template
    Fill(FillArgs),

    /// Compute a motor accident claim and render the judgment
    Claim(ClaimArgs),
}

#[derive(Args)]
pub struct OutputArgs {
    /// Output file (defaults to the generated name in the output directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only print the preview, do not write a file
    #[arg(long)]
    pub no_write: bool,

    /// Do not print the preview
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct FillArgs {
    /// Template file (defaults to ./template.txt)
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Set a placeholder value
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,

    /// TOML file with placeholder values
    #[arg(long)]
    pub vars: Option<PathBuf>,

    /// Prompt for placeholders that have no value
    #[arg(short, long)]
    pub interactive: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct ClaimArgs {
    /// Judgment template (defaults to ./mact_template.txt)
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// TOML case file; flags override its values
    #[arg(long)]
    pub case: Option<PathBuf>,

    #[command(flatten)]
    pub form: ClaimFormArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Print a JSON summary instead of the preview
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ClaimFormArgs {
    #[arg(long)]
    pub court_location: Option<String>,

    #[arg(long)]
    pub case_number: Option<String>,

    #[arg(long)]
    pub case_year: Option<String>,

    #[arg(long)]
    pub claimant_name: Option<String>,

    #[arg(long)]
    pub respondent_name: Option<String>,

    #[arg(long)]
    pub victim_name: Option<String>,

    /// fatal or injury
    #[arg(long)]
    pub accident_type: Option<AccidentType>,

    /// Date of the accident (YYYY-MM-DD)
    #[arg(long)]
    pub accident_date: Option<NaiveDate>,

    /// Age of the victim
    #[arg(long, value_parser = value_parser!(u32).range(1..=100))]
    pub age: Option<u32>,

    /// Monthly income (Rs.)
    #[arg(long)]
    pub monthly_income: Option<f64>,

    /// Number of dependents
    #[arg(long)]
    pub dependents: Option<u32>,

    /// government-service, private-service or self-employed
    #[arg(long)]
    pub occupation: Option<OccupationType>,

    /// Medical expenses (Rs.), injury claims only
    #[arg(long)]
    pub medical_expenses: Option<f64>,

    /// Months of income loss, injury claims only
    #[arg(long)]
    pub months_loss: Option<u32>,

    /// Permanent disability percentage, injury claims only
    #[arg(long, value_parser = value_parser!(u8).range(0..=100))]
    pub disability_percent: Option<u8>,
}

impl From<ClaimFormArgs> for CaseFile {
    fn from(args: ClaimFormArgs) -> Self {
        CaseFile {
            court_location: args.court_location,
            case_number: args.case_number,
            case_year: args.case_year,
            claimant_name: args.claimant_name,
            respondent_name: args.respondent_name,
            victim_name: args.victim_name,
            accident_type: args.accident_type,
            accident_date: args.accident_date,
            age: args.age,
            monthly_income: args.monthly_income,
            dependents: args.dependents,
            occupation: args.occupation,
            medical_expenses: args.medical_expenses,
            months_loss: args.months_loss,
            disability_percent: args.disability_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_claim_flags() {
        let cli = Cli::try_parse_from([
            "docfill",
            "claim",
            "--accident-type",
            "injury",
            "--age",
            "40",
            "--monthly-income",
            "1000",
            "--disability-percent",
            "50",
            "--occupation",
            "self-employed",
            "--accident-date",
            "2025-01-20",
        ])
        .unwrap();

        let Commands::Claim(args) = cli.command else {
            panic!("Expected claim command");
        };
        let case: CaseFile = args.form.into();
        assert_eq!(case.accident_type, Some(AccidentType::Injury));
        assert_eq!(case.age, Some(40));
        assert_eq!(case.monthly_income, Some(1000.0));
        assert_eq!(case.disability_percent, Some(50));
        assert_eq!(case.occupation, Some(OccupationType::SelfEmployed));
        assert_eq!(case.accident_date, NaiveDate::from_ymd_opt(2025, 1, 20));
        assert_eq!(case.case_number, None);
    }

    #[test]
    fn test_parse_rejects_out_of_range_age() {
        assert!(Cli::try_parse_from(["docfill", "claim", "--age", "0"]).is_err());
        assert!(Cli::try_parse_from(["docfill", "claim", "--age", "101"]).is_err());
        assert!(
            Cli::try_parse_from(["docfill", "claim", "--disability-percent", "120"]).is_err()
        );
    }

    #[test]
    fn test_parse_fill_assignments() {
        let cli = Cli::try_parse_from([
            "docfill", "fill", "--set", "name=Asha", "--set", "city=Pune", "--no-write",
        ])
        .unwrap();

        let Commands::Fill(args) = cli.command else {
            panic!("Expected fill command");
        };
        assert_eq!(args.set, vec!["name=Asha", "city=Pune"]);
        assert!(args.output.no_write);
        assert!(!args.interactive);
    }
}
