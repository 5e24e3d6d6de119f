//! Test-only helpers for building throwaway source trees.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

/// Widget using both deprecated patterns.
pub const FIXABLE_WIDGET: &str = "\
import 'package:flutter/material.dart';

class Swatch extends StatelessWidget {
  const Swatch({Key? key, required this.color}) : super(key: key);

  final Color color;

  @override
  Widget build(BuildContext context) {
    return Container(color: color.withOpacity(0.5));
  }
}
";

/// `FIXABLE_WIDGET` after both rules ran.
pub const FIXED_WIDGET: &str = "\
import 'package:flutter/material.dart';

class Swatch extends StatelessWidget {
  const Swatch({super.key, required this.color});

  final Color color;

  @override
  Widget build(BuildContext context) {
    return Container(color: color.withValues(alpha: 0.5));
  }
}
";

/// Widget already on the current API.
pub const CLEAN_WIDGET: &str = "\
import 'package:flutter/material.dart';

class Label extends StatelessWidget {
  const Label({super.key, required this.text});

  final String text;

  @override
  Widget build(BuildContext context) {
    return Text(text, style: TextStyle(color: Colors.black.withValues(alpha: 0.8)));
  }
}
";

/// Temporary directory holding source files addressed by relative path.
pub struct SourceTree {
    dir: TempDir,
}

impl SourceTree {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp dir")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `rel`, creating parent directories.
    pub fn write(&self, rel: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    pub fn read(&self, rel: &str) -> Result<String> {
        let path = self.dir.path().join(rel);
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))
    }
}
