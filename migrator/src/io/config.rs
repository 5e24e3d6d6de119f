//! Inputs of a fix run.
//!
//! There is no config file; the CLI fills these in and anything left unset
//! falls back to scanning `lib/` for `.dart` files.

use std::path::PathBuf;

use anyhow::{Result, bail};

/// Directory scanned when no root is given.
pub const DEFAULT_ROOT: &str = "lib";
/// Extension of files eligible for rewriting when none is given.
pub const DEFAULT_EXTENSION: &str = "dart";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixConfig {
    /// Root of the directory tree to walk.
    pub root: PathBuf,

    /// File extension without the leading dot (e.g. `dart`).
    pub extension: String,

    /// Evaluate and report without writing any file.
    pub dry_run: bool,
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            extension: DEFAULT_EXTENSION.to_string(),
            dry_run: false,
        }
    }
}

impl FixConfig {
    pub fn new(root: impl Into<PathBuf>, extension: &str, dry_run: bool) -> Self {
        Self {
            root: root.into(),
            extension: extension.trim_start_matches('.').to_string(),
            dry_run,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.extension.trim().is_empty() {
            bail!("extension must be non-empty");
        }
        if self.extension.contains(['/', '\\']) {
            bail!("extension must not contain a path separator: {}", self.extension);
        }
        Ok(())
    }

    /// File-name suffix that makes a file eligible (e.g. `.dart`).
    pub fn suffix(&self) -> String {
        format!(".{}", self.extension)
    }

    /// Whether a file name carries the configured extension.
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.suffix())
    }
}
