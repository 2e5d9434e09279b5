//! Builder pattern API for running the analysis over a directory tree.
//!
//! ```rust,ignore
//! use enumcheck_core::prelude::*;
//!
//! let result = Enumcheck::new("/path/to/docs")
//!     .with_sentinel("my.lint.NotExhausted")
//!     .analyze()?;
//!
//! for diag in &result.diagnostics {
//!     println!("{}: {}", diag.id, diag.message);
//! }
//! ```

use std::path::PathBuf;

use anyhow::Result;
use rayon::prelude::*;
use tracing::warn;

use crate::analyzer::analyze_program;
use crate::detect::DEFAULT_SENTINEL_PATH;
use crate::diagnostics::Diagnostic;
use crate::parse::load_document;
use crate::scan::gather_documents_with_excludes;

/// Builder for configuring an analysis run.
#[derive(Debug, Clone)]
pub struct Enumcheck {
    /// Root path to scan for documents
    root: PathBuf,

    /// Fully-qualified path of the sentinel marker type
    sentinel_path: String,

    /// Custom excluded directory names
    excluded_dirs: Vec<String>,
}

impl Enumcheck {
    /// Create a new analysis builder for the given path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            sentinel_path: DEFAULT_SENTINEL_PATH.into(),
            excluded_dirs: Vec::new(),
        }
    }

    /// Override the sentinel marker type path.
    pub fn with_sentinel(mut self, path: impl Into<String>) -> Self {
        self.sentinel_path = path.into();
        self
    }

    /// Add directories to exclude from scanning.
    pub fn exclude_dirs(mut self, dirs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.excluded_dirs.extend(dirs.into_iter().map(Into::into));
        self
    }

    /// Run the analysis and return results.
    ///
    /// Documents are analyzed in parallel; each run is independent, so
    /// a malformed document is logged and skipped rather than failing
    /// the whole run. Diagnostics come back in file order.
    pub fn analyze(&self) -> Result<AnalysisResult> {
        let excludes: Vec<&str> = self.excluded_dirs.iter().map(String::as_str).collect();
        let files = gather_documents_with_excludes(&self.root, &excludes)?;

        let per_file: Vec<(Vec<Diagnostic>, bool)> = files
            .par_iter()
            .map(|path| match load_document(path) {
                Ok((program, table)) => {
                    let mut diags = analyze_program(&program, &table, &self.sentinel_path);
                    for d in &mut diags {
                        d.file = Some(path.display().to_string());
                    }
                    (diags, false)
                }
                Err(e) => {
                    warn!(document = %path.display(), error = %e, "skipping document");
                    (Vec::new(), true)
                }
            })
            .collect();

        let skipped = per_file.iter().filter(|(_, failed)| *failed).count();
        let diagnostics: Vec<Diagnostic> = per_file.into_iter().flat_map(|(d, _)| d).collect();

        Ok(AnalysisResult {
            root: self.root.clone(),
            files_analyzed: files.len() - skipped,
            files_skipped: skipped,
            diagnostics,
        })
    }
}

/// Result of an analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Root path that was scanned
    pub root: PathBuf,

    /// Documents successfully analyzed
    pub files_analyzed: usize,

    /// Documents skipped due to load errors
    pub files_skipped: usize,

    /// All diagnostics, in file order
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisResult {
    /// Whether the run produced no diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
