//! Exhaustiveness checking for sentinel signals.
//!
//! Given the sentinel's type argument and the lexical parent block of
//! the throw, verifies that every member of the enum is referenced via
//! a direct `Receiver.Member` access whose receiver's static type is
//! the enum. Scoping is lexical, not branch-sensitive: any reference
//! anywhere in the enclosing block counts.

use crate::detect::SentinelSignal;
use crate::diagnostics::Finding;
use crate::semantic::{SemanticModel, TypeKind};
use crate::syntax::{exprs_in_order, Expr, Stmt};

/// Checks one signal against the lexical parent block of its throw.
///
/// Returns `WrongKind` for a non-enum type argument regardless of what
/// the scope contains, `MissingMembers` when the scan leaves members
/// unaccounted for, and `None` otherwise.
///
/// The scan stops the moment the working set empties; nodes after that
/// point are never visited. A member of an unrelated type that merely
/// shares a name never matches - matching is gated on the receiver's
/// resolved type.
pub fn check_exhaustiveness(
    signal: &SentinelSignal,
    scope: &[Stmt],
    model: &dyn SemanticModel,
) -> Option<Finding> {
    if model.type_kind(signal.type_arg) != Some(TypeKind::Enum) {
        return Some(Finding::WrongKind { span: signal.span });
    }

    let members = model.enum_members(signal.type_arg)?;
    if members.is_empty() {
        // Vacuously exhaustive.
        return None;
    }

    // Working set in declaration order.
    let mut remaining: Vec<String> = members.to_vec();

    for expr in exprs_in_order(scope) {
        let Expr::Member {
            receiver, member, ..
        } = expr
        else {
            continue;
        };
        let Some(recv) = model.expr_type(receiver) else {
            continue;
        };
        if !recv.is_exactly(signal.type_arg) {
            continue;
        }
        // Set-remove: repeated references to the same member are harmless.
        if let Some(idx) = remaining.iter().position(|m| m == member) {
            remaining.remove(idx);
            if remaining.is_empty() {
                return None;
            }
        }
    }

    Some(Finding::MissingMembers {
        span: signal.span,
        members: remaining,
    })
}
