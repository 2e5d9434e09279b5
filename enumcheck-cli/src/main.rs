//! enumcheck CLI - enum exhaustiveness checker for analysis documents.
//!
//! Features:
//! - Single-document and directory modes
//! - Rayon-powered parallel document analysis (via enumcheck-core)
//! - enumcheck.toml configuration with CLI overrides
//! - Plain or JSON output, CI-friendly exit codes

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use enumcheck_core::{
    analyze_program, init_structured_logging, load_config, load_document, print_json, print_plain,
    Diagnostic, Enumcheck, EnumcheckConfig, DEFAULT_SENTINEL_PATH,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Enum exhaustiveness checker for analysis documents")]
pub struct Cli {
    /// Path to an analysis document or a directory of documents
    #[arg(default_value = ".")]
    path: String,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Fully-qualified path of the sentinel marker type
    #[arg(long)]
    sentinel: Option<String>,

    /// Directory names to exclude from scanning
    #[arg(long, num_args = 1..)]
    exclude: Vec<String>,
}

/// Resolves the sentinel path: CLI flag wins, then config, then default.
fn resolve_sentinel(cli: &Cli, config: Option<&EnumcheckConfig>) -> String {
    cli.sentinel
        .clone()
        .or_else(|| config.and_then(|c| c.sentinel.clone()))
        .unwrap_or_else(|| DEFAULT_SENTINEL_PATH.to_string())
}

/// Resolves JSON output: CLI flag wins, then config format.
fn resolve_json(cli: &Cli, config: Option<&EnumcheckConfig>) -> bool {
    cli.json
        || config
            .and_then(|c| c.output.as_ref())
            .and_then(|o| o.format.as_deref())
            == Some("json")
}

fn report(diagnostics: &[Diagnostic], json: bool) {
    if json {
        print_json(diagnostics);
    } else {
        print_plain(diagnostics);
    }
}

fn main() -> Result<()> {
    // Global panic guard
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] enumcheck internal error: {}", info);
        eprintln!("[PANIC] The process will exit safely with code 2.");
    }));

    // Initialize structured logging (JSON to stderr, respects RUST_LOG)
    init_structured_logging();

    let cli = Cli::parse();
    let input_path = Path::new(&cli.path);

    // Single document mode
    if input_path.is_file() {
        let sentinel = resolve_sentinel(&cli, None);
        let (program, table) = load_document(input_path)
            .with_context(|| format!("Failed to load document: {}", cli.path))?;
        let mut diagnostics = analyze_program(&program, &table, &sentinel);
        for d in &mut diagnostics {
            d.file = Some(input_path.display().to_string());
        }

        report(&diagnostics, cli.json);
        std::process::exit(if diagnostics.is_empty() { 0 } else { 1 });
    }

    // Directory mode: load config from enumcheck.toml if present
    // (safe - don't fail the run on config errors)
    let config = match load_config(input_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("[WARN] config load failed: {}", e);
            None
        }
    };

    let sentinel = resolve_sentinel(&cli, config.as_ref());
    let json = resolve_json(&cli, config.as_ref());

    let mut excludes = cli.exclude.clone();
    if let Some(cfg) = &config {
        if let Some(list) = &cfg.exclude {
            excludes.extend(list.iter().cloned());
        }
    }

    let result = Enumcheck::new(input_path)
        .with_sentinel(sentinel)
        .exclude_dirs(excludes)
        .analyze()
        .with_context(|| format!("Analysis failed for: {}", cli.path))?;

    if result.files_skipped > 0 {
        eprintln!(
            "[WARN] {} document(s) skipped due to load errors",
            result.files_skipped
        );
    }

    report(&result.diagnostics, json);

    // Exit code (CI-friendly)
    std::process::exit(if result.is_clean() { 0 } else { 1 });
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumcheck_core::OutputConfig;

    fn cli(sentinel: Option<&str>, json: bool) -> Cli {
        Cli {
            path: ".".into(),
            json,
            sentinel: sentinel.map(String::from),
            exclude: Vec::new(),
        }
    }

    #[test]
    fn test_resolve_sentinel_precedence() {
        let config = EnumcheckConfig {
            sentinel: Some("cfg.Sentinel".into()),
            exclude: None,
            output: None,
        };

        // CLI flag wins over config.
        assert_eq!(
            resolve_sentinel(&cli(Some("cli.Sentinel"), false), Some(&config)),
            "cli.Sentinel"
        );
        // Config wins over default.
        assert_eq!(
            resolve_sentinel(&cli(None, false), Some(&config)),
            "cfg.Sentinel"
        );
        // Default otherwise.
        assert_eq!(
            resolve_sentinel(&cli(None, false), None),
            DEFAULT_SENTINEL_PATH
        );
    }

    #[test]
    fn test_resolve_json() {
        let config = EnumcheckConfig {
            sentinel: None,
            exclude: None,
            output: Some(OutputConfig {
                format: Some("json".into()),
            }),
        };

        assert!(resolve_json(&cli(None, true), None));
        assert!(resolve_json(&cli(None, false), Some(&config)));
        assert!(!resolve_json(&cli(None, false), None));
    }
}
