use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::path::{Path, PathBuf};

use super::consts;
use crate::error::{DocfillError, Result};

/// docfill.toml schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub templates: TemplatesConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub format: FormatConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplatesConfig {
    #[serde(default = "default_generic_template")]
    pub generic: PathBuf,
    #[serde(default = "default_claim_template")]
    pub claim: PathBuf,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            generic: default_generic_template(),
            claim: default_claim_template(),
        }
    }
}

fn default_generic_template() -> PathBuf {
    PathBuf::from(consts::templates::GENERIC)
}

fn default_claim_template() -> PathBuf {
    PathBuf::from(consts::templates::CLAIM)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(consts::output::DIR)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatConfig {
    #[serde(default = "default_generic_date")]
    pub generic_date: String,
    #[serde(default = "default_judgment_date")]
    pub judgment_date: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            generic_date: default_generic_date(),
            judgment_date: default_judgment_date(),
        }
    }
}

fn default_generic_date() -> String {
    consts::dates::GENERIC.to_string()
}

fn default_judgment_date() -> String {
    consts::dates::JUDGMENT.to_string()
}

impl Config {
    /// Read and validate a config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DocfillError::ConfigNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                DocfillError::ConfigParseError(e.to_string())
            }
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| DocfillError::ConfigParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective config
    ///
    /// An explicit path (relative to `dir`) must exist. Otherwise
    /// `docfill.toml` in `dir` is used when present, and the defaults when not.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => {
                let path = dir.join(path);
                log::debug!("using config {}", path.display());
                Self::from_file(path)
            }
            None => {
                let path = dir.join(consts::CONFIG_FILE);
                if path.is_file() {
                    log::debug!("using config {}", path.display());
                    Self::from_file(path)
                } else {
                    log::debug!("no {} in {}, using defaults", consts::CONFIG_FILE, dir.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// Reject date formats chrono cannot render
    pub fn validate(&self) -> Result<()> {
        check_date_format("format.generic_date", &self.format.generic_date)?;
        check_date_format("format.judgment_date", &self.format.judgment_date)?;
        Ok(())
    }
}

fn check_date_format(field: &str, format: &str) -> Result<()> {
    let parses = !StrftimeItems::new(format).any(|item| matches!(item, Item::Error));
    // Time and zone specifiers parse but cannot render from a date alone
    let renders = parses && write!(String::new(), "{}", NaiveDate::MIN.format(format)).is_ok();
    if !renders {
        return Err(DocfillError::ConfigParseError(format!(
            "{}: invalid date format '{}'",
            field, format
        )));
    }
    Ok(())
}
