//! A source file's text buffer: read once, rewritten in memory, written at most once.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::rule::{RewriteRule, apply_rules};

#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    original: String,
    text: String,
}

impl SourceFile {
    /// Read the whole file as UTF-8.
    pub fn load(path: &Path) -> Result<Self> {
        let original =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            text: original.clone(),
            original,
        })
    }

    /// Run `rules` over the buffer and return the names of rules that changed it.
    pub fn apply(&mut self, rules: &[Box<dyn RewriteRule>]) -> Vec<&'static str> {
        let outcome = apply_rules(rules, &self.text);
        self.text = outcome.text;
        outcome.applied
    }

    /// Whether the buffer differs from what was read.
    pub fn is_modified(&self) -> bool {
        self.text != self.original
    }

    /// Overwrite the file if the buffer changed. Returns whether a write happened.
    pub fn persist(&self) -> Result<bool> {
        if !self.is_modified() {
            return Ok(false);
        }
        fs::write(&self.path, &self.text)
            .with_context(|| format!("write {}", self.path.display()))?;
        Ok(true)
    }
}
