//! Template file loading

use std::path::{Path, PathBuf};

use crate::error::{DocfillError, Result};

/// Read the full text of the template at `path`
///
/// Returns `None` when the file cannot be read, whatever the reason
/// (missing, unreadable, not UTF-8).
pub fn load_template(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(text) => {
            log::debug!("loaded template {} ({} bytes)", path.display(), text.len());
            Some(text)
        }
        Err(e) => {
            log::debug!("template {} not readable: {}", path.display(), e);
            None
        }
    }
}

/// Loads templates relative to a root directory
#[derive(Debug, Clone)]
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Absolute paths are kept, relative ones are joined onto the root
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Template text, or [`DocfillError::TemplateNotFound`]
    pub fn require(&self, path: impl AsRef<Path>) -> Result<String> {
        let resolved = self.resolve(path);
        load_template(&resolved).ok_or(DocfillError::TemplateNotFound { path: resolved })
    }
}
