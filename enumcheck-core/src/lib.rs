//! enumcheck-core: enum exhaustiveness analysis library
//!
//! Flags code blocks that claim to be an exhaustive switch over an
//! enumeration's values but omit one or more members. The pattern being
//! checked: a block of conditional logic over an enum-typed value that
//! ends with an unconditional raise of a generic "not-exhausted"
//! sentinel parameterized by that enum. The rule verifies that every
//! member of the enum is referenced somewhere in the throw's lexical
//! enclosing block, and reports exactly which members are missing.
//!
//! # Diagnostics
//!
//! - **ENUM001**: enum value(s) not referenced in the enclosing block
//! - **ENUM002**: the sentinel's type argument is not an enum
//!
//! # Quick Start
//!
//! Use the [`prelude`] module for convenient imports:
//!
//! ```rust,ignore
//! use enumcheck_core::prelude::*;
//!
//! let result = Enumcheck::new("/path/to/docs").analyze()?;
//!
//! for diag in &result.diagnostics {
//!     println!("{}: {}", diag.id, diag.message);
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`syntax`]: closed sum-type syntax model and source-order walking
//! - [`semantic`]: semantic-resolution trait and in-memory type table
//! - [`detect`]: sentinel raise detection
//! - [`check`]: exhaustiveness checking
//! - [`analyzer`]: program-level driver
//! - [`diagnostics`]: descriptors, findings, diagnostics
//! - [`parse`]: analysis-document loading
//! - [`scan`]: parallel document discovery
//! - [`builder`]: fluent run API
//! - [`report`]: plaintext and JSON output
//! - [`config`]: enumcheck.toml loading
//! - [`error`]: typed error handling

pub mod analyzer;
pub mod builder;
pub mod check;
pub mod config;
pub mod detect;
pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod parse;
pub mod prelude;
pub mod report;
pub mod scan;
pub mod semantic;
pub mod syntax;

// ============================================================================
// Explicit Re-exports (avoiding glob imports for clear API surface)
// ============================================================================

// Error types
pub use error::{EnumcheckError, EnumcheckResult, IoResultExt};

// Builder API
pub use builder::{AnalysisResult, Enumcheck};

// Core analysis
pub use analyzer::analyze_program;
pub use check::check_exhaustiveness;
pub use detect::{detect_sentinel, SentinelSignal, DEFAULT_SENTINEL_PATH, SENTINEL_ARITY};

// Diagnostics
pub use diagnostics::{
    Descriptor, Diagnostic, Finding, Severity, NON_ENUM_TYPE_ARG, NOT_EXHAUSTED,
};

// Semantic model
pub use semantic::{ScopedModel, SemanticModel, TypeDef, TypeId, TypeInfo, TypeKind, TypeTable};

// Syntax model
pub use syntax::{
    exprs_in_order, BinaryOp, Expr, ExprWalk, Function, Literal, Param, Program, Span, Stmt,
    TypeExpr,
};

// Document loading
pub use parse::{load_document, parse_document, Document, TypeDecl};

// File scanning
pub use scan::{gather_documents, gather_documents_with_excludes};

// Configuration
pub use config::{load_config, EnumcheckConfig, OutputConfig};

// Logging
pub use logging::{init_structured_logging, log_error, log_info, log_warn};

// Reporting
pub use report::{print_json, print_plain};
