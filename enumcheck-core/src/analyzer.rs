//! Drives detection and checking over whole programs.
//!
//! This is the host "register a syntax-node action" loop expressed as
//! pure functions: every throw statement is paired with its lexical
//! parent block, classified by the detector, and checked. Each throw
//! is handled independently with no shared mutable state, so callers
//! are free to run analyses for different documents in parallel.

use tracing::debug;

use crate::check::check_exhaustiveness;
use crate::detect::detect_sentinel;
use crate::diagnostics::Diagnostic;
use crate::semantic::{ScopedModel, SemanticModel, TypeTable};
use crate::syntax::{Program, Stmt};

/// Analyzes every function body of a program, collecting diagnostics.
pub fn analyze_program(
    program: &Program,
    table: &TypeTable,
    sentinel_path: &str,
) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for func in &program.functions {
        let model = ScopedModel::for_function(table, func);
        analyze_block(&func.body, &model, sentinel_path, &mut out);
    }
    out
}

/// Visits one statement list. Throws found directly in this list have
/// it as their lexical parent scope; nested blocks are visited with
/// their own statement lists as the scope.
fn analyze_block(
    stmts: &[Stmt],
    model: &dyn SemanticModel,
    sentinel_path: &str,
    out: &mut Vec<Diagnostic>,
) {
    for stmt in stmts {
        if let Some(signal) = detect_sentinel(stmt, model, sentinel_path) {
            debug!(line = signal.span.line, "sentinel raise detected");
            if let Some(finding) = check_exhaustiveness(&signal, stmts, model) {
                out.push(finding.into_diagnostic());
            }
        }
        match stmt {
            Stmt::If { then, else_, .. } => {
                analyze_block(then, model, sentinel_path, out);
                analyze_block(else_, model, sentinel_path, out);
            }
            Stmt::Block { stmts, .. } => analyze_block(stmts, model, sentinel_path, out),
            Stmt::Expr { .. } | Stmt::Throw { .. } | Stmt::Return { .. } | Stmt::Let { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::DEFAULT_SENTINEL_PATH;
    use crate::semantic::{TypeDef, TypeTable};
    use crate::syntax::{BinaryOp, Expr, Function, Param, Span, TypeExpr};

    fn table() -> TypeTable {
        let mut table = TypeTable::new();
        table.insert(TypeDef::enumeration(
            "MyColor",
            vec!["Red".into(), "Green".into(), "Blue".into()],
        ));
        table.insert(TypeDef::class(DEFAULT_SENTINEL_PATH, 1));
        table
    }

    fn ident(name: &str) -> Expr {
        Expr::Ident {
            name: name.into(),
            span: Span::default(),
        }
    }

    fn color_guard(name: &str) -> Stmt {
        Stmt::If {
            cond: Expr::Binary {
                op: BinaryOp::Eq,
                lhs: Box::new(ident("c")),
                rhs: Box::new(Expr::Member {
                    receiver: Box::new(ident("MyColor")),
                    member: name.into(),
                    span: Span::default(),
                }),
                span: Span::default(),
            },
            then: vec![Stmt::Return {
                expr: None,
                span: Span::default(),
            }],
            else_: vec![],
            span: Span::default(),
        }
    }

    fn throw_sentinel(arg: &str, line: u32) -> Stmt {
        Stmt::Throw {
            expr: Expr::New {
                ty: TypeExpr {
                    name: DEFAULT_SENTINEL_PATH.into(),
                    args: vec![TypeExpr::simple(arg)],
                },
                args: vec![],
                span: Span::new(line, 9),
            },
            span: Span::new(line, 9),
        }
    }

    fn program(body: Vec<Stmt>) -> Program {
        Program {
            functions: vec![Function {
                name: "classify".into(),
                params: vec![Param {
                    name: "c".into(),
                    ty: "MyColor".into(),
                }],
                body,
            }],
        }
    }

    #[test]
    fn test_exhaustive_function_is_clean() {
        let table = table();
        let program = program(vec![
            color_guard("Red"),
            color_guard("Green"),
            color_guard("Blue"),
            throw_sentinel("MyColor", 9),
        ]);
        assert!(analyze_program(&program, &table, DEFAULT_SENTINEL_PATH).is_empty());
    }

    #[test]
    fn test_missing_member_reported_at_throw() {
        let table = table();
        let program = program(vec![
            color_guard("Red"),
            color_guard("Green"),
            throw_sentinel("MyColor", 7),
        ]);
        let diags = analyze_program(&program, &table, DEFAULT_SENTINEL_PATH);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].id, "ENUM001");
        assert_eq!(diags[0].span, Span::new(7, 9));
        assert_eq!(
            diags[0].message,
            "enum value(s) not referenced in enclosing block: Blue"
        );
    }

    #[test]
    fn test_throw_in_nested_block_scoped_to_that_block() {
        let table = table();
        // The guards live in the outer body; the throw sits inside a
        // nested block, so its enclosing scope sees no references.
        let program = program(vec![
            color_guard("Red"),
            color_guard("Green"),
            color_guard("Blue"),
            Stmt::Block {
                stmts: vec![throw_sentinel("MyColor", 12)],
                span: Span::default(),
            },
        ]);
        let diags = analyze_program(&program, &table, DEFAULT_SENTINEL_PATH);
        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0].message,
            "enum value(s) not referenced in enclosing block: Red,Green,Blue"
        );
    }

    #[test]
    fn test_non_enum_argument_reported() {
        let table = table();
        let program = program(vec![throw_sentinel("int", 15)]);
        let diags = analyze_program(&program, &table, DEFAULT_SENTINEL_PATH);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].id, "ENUM002");
        assert_eq!(
            diags[0].message,
            "EnumNotExhaustedException must be used with enum"
        );
    }

    #[test]
    fn test_empty_program_no_findings() {
        let table = table();
        assert!(analyze_program(&Program::default(), &table, DEFAULT_SENTINEL_PATH).is_empty());
    }

    #[test]
    fn test_two_throws_two_findings() {
        let table = table();
        let program = Program {
            functions: vec![
                Function {
                    name: "a".into(),
                    params: vec![],
                    body: vec![throw_sentinel("MyColor", 3)],
                },
                Function {
                    name: "b".into(),
                    params: vec![],
                    body: vec![throw_sentinel("int", 8)],
                },
            ],
        };
        let diags = analyze_program(&program, &table, DEFAULT_SENTINEL_PATH);
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].id, "ENUM001");
        assert_eq!(diags[1].id, "ENUM002");
    }
}
