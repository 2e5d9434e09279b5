//! Analysis document loading.
//!
//! Documents are the host-parser stand-in: JSON files carrying the
//! declared types (enums with ordered members, classes with generic
//! arity) and the functions whose bodies get analyzed. Loading builds
//! the in-memory [`TypeTable`] the semantic model resolves against.
//!
//! ```json
//! {
//!   "types": [
//!     {"name": "MyColor", "kind": "enum", "members": ["Red", "Green", "Blue"]},
//!     {"name": "net.ajennings.EnumNotExhaustedException", "kind": "class", "arity": 1}
//!   ],
//!   "functions": [
//!     {"name": "classify",
//!      "params": [{"name": "c", "type": "MyColor"}],
//!      "body": [ ... ]}
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{EnumcheckError, EnumcheckResult, IoResultExt};
use crate::semantic::{TypeDef, TypeKind, TypeTable};
use crate::syntax::{Function, Program};

/// A type declaration as written in a document.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeDecl {
    /// Fully-qualified name.
    pub name: String,
    pub kind: TypeKind,
    /// Generic arity; defaults to 0.
    #[serde(default)]
    pub arity: usize,
    /// Enum member names in declaration order.
    #[serde(default)]
    pub members: Vec<String>,
}

/// Top-level document shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub types: Vec<TypeDecl>,
    #[serde(default)]
    pub functions: Vec<Function>,
}

/// Parses a JSON document into a program plus its type table.
pub fn parse_document(content: &str) -> EnumcheckResult<(Program, TypeTable)> {
    let doc: Document = serde_json::from_str(content)
        .map_err(|e| EnumcheckError::document_at(e.to_string(), e.line(), e.column()))?;

    let mut table = TypeTable::new();
    for decl in doc.types {
        table.insert(TypeDef {
            path: decl.name,
            kind: decl.kind,
            arity: decl.arity,
            members: decl.members,
        });
    }

    let program = Program {
        functions: doc.functions,
    };
    Ok((program, table))
}

/// Reads and parses a document from disk.
pub fn load_document(path: &Path) -> EnumcheckResult<(Program, TypeTable)> {
    let content = fs::read_to_string(path).with_path(path)?;
    parse_document(&content).map_err(|e| e.with_document_path(path))
}
