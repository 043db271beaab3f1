mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use context::Context;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = Context::new(cli.config.as_deref()).and_then(|ctx| match cli.command {
        Commands::Vars { template, json } => commands::vars::run(&ctx, template, json),
        Commands::Fill(args) => commands::fill::run(&ctx, args),
        Commands::Claim(args) => commands::claim::run(&ctx, args),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
