use anyhow::Result;
use colored::Colorize;
use docfill_core::DocfillError;
use std::io::{self, Write};
use std::path::Path;

pub fn print_json(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}

pub fn print_text(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}

/// Print a rendered document under a Markdown heading
pub fn print_preview(title: &str, document: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "### {title}\n")?;
    writeln!(out, "{document}")
}

/// Print a yellow warning line to stderr
pub fn warn(message: &str) {
    eprintln!("{} {}", "!".yellow(), message);
}

/// Write `document` to `path`, creating missing parent directories
pub fn write_document(path: &Path, document: &str) -> Result<()> {
    let write = || -> io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, document)
    };
    write().map_err(|source| DocfillError::OutputWriteError {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("wrote {} ({} bytes)", path.display(), document.len());
    Ok(())
}
