//! Prelude module for convenient imports.
//!
//! Import commonly used types with a single line:
//!
//! ```rust,ignore
//! use enumcheck_core::prelude::*;
//! ```

// Core analysis
pub use crate::analyzer::analyze_program;
pub use crate::check::check_exhaustiveness;
pub use crate::detect::{detect_sentinel, SentinelSignal, DEFAULT_SENTINEL_PATH};

// Diagnostics
pub use crate::diagnostics::{Diagnostic, Finding, Severity};

// Semantic model
pub use crate::semantic::{ScopedModel, SemanticModel, TypeDef, TypeId, TypeKind, TypeTable};

// Syntax model
pub use crate::syntax::{Expr, Function, Program, Span, Stmt};

// Document loading
pub use crate::parse::{load_document, parse_document, Document};

// File scanning
pub use crate::scan::{gather_documents, gather_documents_with_excludes};

// Configuration
pub use crate::config::{load_config, EnumcheckConfig};

// Builder API
pub use crate::builder::{AnalysisResult, Enumcheck};

// Errors
pub use crate::error::{EnumcheckError, EnumcheckResult};
