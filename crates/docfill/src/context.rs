//! Global context for CLI commands

use anyhow::Result;
use chrono::{Local, NaiveDate};
use docfill_core::config::Config;
use docfill_core::template::TemplateStore;
use std::env;
use std::path::{Path, PathBuf};

/// Global context containing config, template store and today's date
pub struct Context {
    pub config: Config,
    pub store: TemplateStore,
    pub today: NaiveDate,
}

impl Context {
    /// Create a new context from the working directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory cannot be determined
    /// - An explicit config file is missing
    /// - The config file cannot be parsed
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let current_dir = env::current_dir()?;
        let config = Config::load(config_path, &current_dir)?;

        Ok(Self {
            config,
            store: TemplateStore::new(current_dir),
            today: Local::now().date_naive(),
        })
    }

    /// Where a generated document goes
    ///
    /// An explicit `--output` wins; otherwise `file_name` inside the
    /// configured output directory.
    pub fn output_path(&self, explicit: Option<PathBuf>, file_name: &str) -> PathBuf {
        match explicit {
            Some(path) => self.store.resolve(path),
            None => self.store.resolve(self.config.output.dir.join(file_name)),
        }
    }
}
