//! Console report of one fix run.

use std::path::PathBuf;

/// Final line printed after every successful run.
pub const DONE_LINE: &str = "Done!";

/// Files modified during one invocation, in visit order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub modified: Vec<PathBuf>,
    /// Eligible files read during the walk.
    pub scanned: usize,
    pub dry_run: bool,
}

impl RunReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    pub fn record(&mut self, path: PathBuf) {
        self.modified.push(path);
    }

    /// Product output: one notice per modified file, then the completion marker.
    pub fn lines(&self) -> Vec<String> {
        let label = if self.dry_run { "Would fix" } else { "Fixed" };
        self.modified
            .iter()
            .map(|path| format!("{}: {}", label, path.display()))
            .chain(std::iter::once(DONE_LINE.to_string()))
            .collect()
    }

    pub fn print(&self) {
        for line in self.lines() {
            println!("{}", line);
        }
    }
}
