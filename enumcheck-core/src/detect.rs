//! Sentinel raise detection.
//!
//! Classifies throw statements: a qualifying throw constructs the
//! well-known generic "not-exhausted" marker with exactly one type
//! argument. Everything else is out of scope for the rule, which is
//! not an error - the detector simply declines.

use crate::semantic::{SemanticModel, TypeId};
use crate::syntax::{Expr, Span, Stmt};

/// Default fully-qualified path of the not-exhausted marker type.
pub const DEFAULT_SENTINEL_PATH: &str = "net.ajennings.EnumNotExhaustedException";

/// The marker is generic over exactly the enum being switched on.
pub const SENTINEL_ARITY: usize = 1;

/// A qualifying raise of the not-exhausted marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentinelSignal {
    /// The single type argument of the raised marker.
    pub type_arg: TypeId,
    /// Location of the throw statement.
    pub span: Span,
}

/// Classifies a throw statement, extracting the sentinel's type argument.
///
/// Pure classification with no side effects. Returns `None` for:
/// - statements that are not throws,
/// - raised expressions that are not object constructions,
/// - constructions whose type does not resolve,
/// - types whose generic definition is not the sentinel marker,
/// - sentinel constructions carrying no type arguments.
pub fn detect_sentinel(
    stmt: &Stmt,
    model: &dyn SemanticModel,
    sentinel_path: &str,
) -> Option<SentinelSignal> {
    let (expr, span) = match stmt {
        Stmt::Throw { expr, span } => (expr, *span),
        _ => return None,
    };
    let Expr::New { .. } = expr else {
        return None;
    };
    let info = model.expr_type(expr)?;
    let sentinel = model.named_type(sentinel_path, SENTINEL_ARITY)?;
    if info.def != sentinel || info.args.is_empty() {
        return None;
    }
    Some(SentinelSignal {
        type_arg: info.args[0],
        span,
    })
}
