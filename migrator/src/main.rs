//! Rewrites deprecated Flutter API usages under a source tree.
//!
//! With no arguments, scans `lib/` for `.dart` files.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use migrator::exit_codes;
use migrator::fix::run_fix;
use migrator::io::config::{DEFAULT_EXTENSION, DEFAULT_ROOT, FixConfig};
use migrator::logging;

#[derive(Parser)]
#[command(
    name = "migrator",
    version,
    about = "Rewrite deprecated withOpacity and Key? key usages in place"
)]
struct Cli {
    /// Root directory to scan recursively.
    #[arg(default_value = DEFAULT_ROOT)]
    root: PathBuf,

    /// Extension of files to rewrite (without the dot).
    #[arg(long = "ext", default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Report files that would change without writing them.
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn into_config(self) -> FixConfig {
        FixConfig::new(self.root, &self.extension, self.dry_run)
    }
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let config = Cli::parse().into_config();
    let report = run_fix(&config)?;
    report.print();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_scan_lib_for_dart() {
        let cli = Cli::parse_from(["migrator"]);
        assert_eq!(cli.into_config(), FixConfig::default());
    }

    #[test]
    fn parse_root_extension_and_dry_run() {
        let cli = Cli::parse_from(["migrator", "app/lib", "--ext", ".dart", "--dry-run"]);
        let config = cli.into_config();
        assert_eq!(config.root, PathBuf::from("app/lib"));
        assert_eq!(config.extension, "dart");
        assert!(config.dry_run);
    }
}
