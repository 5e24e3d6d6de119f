//! Recursive discovery of eligible source files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{trace, warn};
use walkdir::{DirEntry, WalkDir};

use crate::io::config::FixConfig;

/// Lazily yield every eligible file under `config.root`, sorted by file name
/// within each directory.
///
/// A missing root yields nothing. Directory symlinks are not descended into;
/// any other symlink is yielded like a file, so a dangling one fails when it
/// is read. Walk errors are yielded in place so the caller can abort on the
/// first one.
pub fn source_files(config: &FixConfig) -> impl Iterator<Item = Result<PathBuf>> {
    let root = config.root.clone();
    let walker = if root.is_dir() {
        Some(WalkDir::new(&root).sort_by_file_name())
    } else {
        warn!(root = %root.display(), "root directory not found, nothing to scan");
        None
    };
    let filter = config.clone();

    walker
        .into_iter()
        .flatten()
        .filter_map(move |entry| match entry {
            Ok(entry) => is_source_file(&entry, &filter).then(|| Ok(entry.into_path())),
            Err(err) => Some(Err(err).with_context(|| format!("walk {}", root.display()))),
        })
}

fn is_source_file(entry: &DirEntry, config: &FixConfig) -> bool {
    let name = entry.file_name().to_string_lossy();
    if !config.matches(&name) {
        return false;
    }
    let is_file =
        entry.file_type().is_file() || (entry.path_is_symlink() && !entry.path().is_dir());
    if !is_file {
        trace!(path = %entry.path().display(), "skipping non-file entry");
    }
    is_file
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::SourceTree;

    fn collect(config: &FixConfig) -> Vec<PathBuf> {
        source_files(config).collect::<Result<Vec<_>>>().expect("entries")
    }

    #[test]
    fn yields_matching_files_recursively_in_name_order() {
        let tree = SourceTree::new().expect("tree");
        tree.write("b.dart", "").expect("write");
        tree.write("a.dart", "").expect("write");
        tree.write("c.txt", "").expect("write");
        tree.write("widgets/deep/z.dart", "").expect("write");
        tree.write("widgets/y.dart.bak", "").expect("write");

        let files = collect(&FixConfig::new(tree.path(), "dart", false));
        let expected = vec![
            tree.path().join("a.dart"),
            tree.path().join("b.dart"),
            tree.path().join("widgets/deep/z.dart"),
        ];
        assert_eq!(files, expected);
    }

    #[test]
    fn skips_directories_named_like_sources() {
        let tree = SourceTree::new().expect("tree");
        tree.write("pkg.dart/inner.txt", "").expect("write");

        let files = collect(&FixConfig::new(tree.path(), "dart", false));
        assert!(files.is_empty());
    }

    #[test]
    fn honors_custom_extension() {
        let tree = SourceTree::new().expect("tree");
        tree.write("a.dart", "").expect("write");
        tree.write("c.txt", "").expect("write");

        let files = collect(&FixConfig::new(tree.path(), "txt", false));
        assert_eq!(files, vec![tree.path().join("c.txt")]);
    }

    #[test]
    fn missing_root_yields_nothing() {
        let tree = SourceTree::new().expect("tree");
        let files = collect(&FixConfig::new(tree.path().join("lib"), "dart", false));
        assert!(files.is_empty());
    }

    #[test]
    fn file_root_yields_nothing() {
        let tree = SourceTree::new().expect("tree");
        let file = tree.write("lib", "").expect("write");
        let files = collect(&FixConfig::new(file, "dart", false));
        assert!(files.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn follows_file_symlinks_but_not_directory_symlinks() {
        let tree = SourceTree::new().expect("tree");
        let target = tree.write("real/a.dart", "").expect("write");
        std::os::unix::fs::symlink(&target, tree.path().join("link.dart")).expect("file link");
        std::os::unix::fs::symlink(tree.path().join("real"), tree.path().join("linked"))
            .expect("dir link");

        let files = collect(&FixConfig::new(tree.path(), "dart", false));
        assert_eq!(
            files,
            vec![tree.path().join("link.dart"), tree.path().join("real/a.dart")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn yields_dangling_symlinks() {
        let tree = SourceTree::new().expect("tree");
        let link = tree.path().join("a.dart");
        std::os::unix::fs::symlink(tree.path().join("gone.dart"), &link).expect("link");

        let files = collect(&FixConfig::new(tree.path(), "dart", false));
        assert_eq!(files, vec![link]);
    }
}
