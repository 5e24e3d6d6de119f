//! The fix command: walk the tree, rewrite eligible files, collect a report.
//!
//! Files are handled one at a time: read, rewritten in memory, and written
//! back only when the text changed. The first I/O error aborts the run; files
//! already written stay written.

use std::path::Path;

use anyhow::Result;
use tracing::{debug, info, instrument};

use crate::core::rule::{RewriteRule, default_rules};
use crate::io::config::FixConfig;
use crate::io::source_file::SourceFile;
use crate::io::walker::source_files;
use crate::report::RunReport;

/// Run the default rule chain over every eligible file under `config.root`.
#[instrument(skip_all, fields(root = %config.root.display(), extension = %config.extension, dry_run = config.dry_run))]
pub fn run_fix(config: &FixConfig) -> Result<RunReport> {
    config.validate()?;
    let rules = default_rules();
    let mut report = RunReport::new(config.dry_run);

    for path in source_files(config) {
        let path = path?;
        report.scanned += 1;
        if fix_file(&path, &rules, config.dry_run)? {
            report.record(path);
        }
    }

    info!(
        scanned = report.scanned,
        modified = report.modified.len(),
        "fix run complete"
    );
    Ok(report)
}

/// Rewrite one file. Returns whether any rule reported a change.
pub fn fix_file(path: &Path, rules: &[Box<dyn RewriteRule>], dry_run: bool) -> Result<bool> {
    let mut file = SourceFile::load(path)?;
    let applied = file.apply(rules);
    if applied.is_empty() {
        debug!(path = %path.display(), "unchanged");
        return Ok(false);
    }
    let written = !dry_run && file.persist()?;
    debug!(path = %path.display(), rules = ?applied, written, "rewrote file");
    Ok(true)
}
