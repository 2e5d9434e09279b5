//! Parallel, deterministic discovery of analysis documents.
//!
//! Performance characteristics:
//! - Early directory pruning via `WalkDir::filter_entry` (O(1) subtree skip)
//! - Parallel file processing via Rayon's `par_bridge`
//! - Minimal work in parallel threads (only the extension check)

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directories to exclude by default.
const EXCLUDED_DIRS: &[&str] = &["target", ".git", "node_modules", ".cargo"];

/// Checks if a directory entry should be pruned (excluded from traversal).
#[inline]
fn is_excluded_dir(entry: &walkdir::DirEntry, excludes: &HashSet<&str>) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| excludes.contains(name))
}

/// Gathers all `.json` analysis documents recursively under the root.
///
/// Automatically excludes `target/`, `.git/`, `node_modules/`, and
/// `.cargo/`. Results are sorted so downstream output is deterministic
/// regardless of traversal interleaving.
pub fn gather_documents(root: &Path) -> Result<Vec<PathBuf>> {
    gather_documents_with_excludes(root, &[])
}

/// Gathers documents with additional exclusion directory names.
pub fn gather_documents_with_excludes(root: &Path, excludes: &[&str]) -> Result<Vec<PathBuf>> {
    let all_excludes: HashSet<&str> = EXCLUDED_DIRS
        .iter()
        .copied()
        .chain(excludes.iter().copied())
        .collect();

    let mut files = WalkDir::new(root)
        .into_iter()
        // filter_entry prunes entire subtrees before iteration
        .filter_entry(|e| !is_excluded_dir(e, &all_excludes))
        .par_bridge()
        .filter_map(|entry| match entry {
            Ok(e) => {
                let path = e.path();
                if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                    Some(Ok(path.to_path_buf()))
                } else {
                    None
                }
            }
            Err(e) => Some(Err(e.into())),
        })
        .collect::<Result<Vec<_>>>()
        .context(format!(
            "Failed to gather documents from {}",
            root.display()
        ))?;

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn create_temp_dir(name: &str) -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir()
            .join("enumcheck_scan_test")
            .join(format!("{}_{}", name, id));
        if dir.exists() {
            fs::remove_dir_all(&dir).ok();
        }
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_gather_finds_nested_documents() {
        let dir = create_temp_dir("nested");
        fs::create_dir_all(dir.join("sub")).unwrap();
        fs::write(dir.join("a.json"), "{}").unwrap();
        fs::write(dir.join("sub/b.json"), "{}").unwrap();
        fs::write(dir.join("notes.txt"), "ignore me").unwrap();

        let files = gather_documents(&dir).unwrap();
        assert_eq!(files.len(), 2);
        // Sorted: a.json before sub/b.json.
        assert!(files[0].ends_with("a.json"));
        assert!(files[1].ends_with("sub/b.json"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_gather_prunes_default_excludes() {
        let dir = create_temp_dir("excludes");
        fs::create_dir_all(dir.join("target")).unwrap();
        fs::create_dir_all(dir.join(".git")).unwrap();
        fs::write(dir.join("target/gen.json"), "{}").unwrap();
        fs::write(dir.join(".git/meta.json"), "{}").unwrap();
        fs::write(dir.join("real.json"), "{}").unwrap();

        let files = gather_documents(&dir).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("real.json"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_gather_custom_excludes() {
        let dir = create_temp_dir("custom");
        fs::create_dir_all(dir.join("fixtures")).unwrap();
        fs::write(dir.join("fixtures/f.json"), "{}").unwrap();
        fs::write(dir.join("doc.json"), "{}").unwrap();

        let files = gather_documents_with_excludes(&dir, &["fixtures"]).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("doc.json"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_gather_empty_dir() {
        let dir = create_temp_dir("empty");
        let files = gather_documents(&dir).unwrap();
        assert!(files.is_empty());
        fs::remove_dir_all(&dir).ok();
    }
}
