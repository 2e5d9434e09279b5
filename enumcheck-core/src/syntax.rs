//! Syntax model for analyzed documents.
//!
//! The host parse layer is modeled as a closed set of node kinds matched
//! exhaustively, instead of runtime type tests over an open node hierarchy.
//! Only the kinds the rule needs exist: identifiers, literals, object
//! constructions, member accesses, binary operations, calls, and the
//! statement forms that can enclose them.
//!
//! All nodes derive serde so documents can be loaded from JSON (see
//! [`crate::parse`]) and spans round-trip through reports.

use serde::{Deserialize, Serialize};

/// 1-indexed source location of a syntax node.
///
/// Documents may omit spans; missing spans default to `0:0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    #[serde(default)]
    pub line: u32,
    #[serde(default)]
    pub column: u32,
}

impl Span {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// A type reference as written at a construction site,
/// e.g. `EnumNotExhaustedException<MyColor>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeExpr {
    pub name: String,
    #[serde(default)]
    pub args: Vec<TypeExpr>,
}

impl TypeExpr {
    pub fn simple(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }
}

/// Literal values that may appear in guard conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Str(String),
}

/// Binary operators. All of them produce `bool` in this model; the rule
/// only ever cares that operands type-check, not what they evaluate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
}

/// Expression nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expr {
    /// Simple name: a local, a parameter, or a type name used as a
    /// member-access receiver.
    Ident {
        name: String,
        #[serde(default)]
        span: Span,
    },
    Literal {
        value: Literal,
        #[serde(default)]
        span: Span,
    },
    /// Object construction: `new T<...>(args)`.
    New {
        ty: TypeExpr,
        #[serde(default)]
        args: Vec<Expr>,
        #[serde(default)]
        span: Span,
    },
    /// Member access `receiver.member`. The member slot is a plain
    /// identifier by construction; there is no generic-name form here.
    Member {
        receiver: Box<Expr>,
        member: String,
        #[serde(default)]
        span: Span,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
        #[serde(default)]
        span: Span,
    },
    /// Invocation of an arbitrary callee.
    Call {
        callee: Box<Expr>,
        #[serde(default)]
        args: Vec<Expr>,
        #[serde(default)]
        span: Span,
    },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Self::Ident { span, .. }
            | Self::Literal { span, .. }
            | Self::New { span, .. }
            | Self::Member { span, .. }
            | Self::Binary { span, .. }
            | Self::Call { span, .. } => *span,
        }
    }
}

/// Statement nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Stmt {
    Expr {
        expr: Expr,
        #[serde(default)]
        span: Span,
    },
    /// Raise statement. The only statement kind the detector looks at.
    Throw {
        expr: Expr,
        #[serde(default)]
        span: Span,
    },
    Return {
        #[serde(default)]
        expr: Option<Expr>,
        #[serde(default)]
        span: Span,
    },
    Let {
        name: String,
        /// Declared type name; inferred from `value` when absent.
        #[serde(default, rename = "type")]
        ty: Option<String>,
        #[serde(default)]
        value: Option<Expr>,
        #[serde(default)]
        span: Span,
    },
    If {
        cond: Expr,
        then: Vec<Stmt>,
        #[serde(default, rename = "else")]
        else_: Vec<Stmt>,
        #[serde(default)]
        span: Span,
    },
    Block {
        stmts: Vec<Stmt>,
        #[serde(default)]
        span: Span,
    },
}

/// A typed function parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

/// A function with a statement body. Function bodies are the analysis
/// roots: every throw statement inside one is a detector candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    #[serde(default)]
    pub params: Vec<Param>,
    #[serde(default)]
    pub body: Vec<Stmt>,
}

/// A whole analyzed document body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    #[serde(default)]
    pub functions: Vec<Function>,
}

enum Frame<'a> {
    Stmt(&'a Stmt),
    Expr(&'a Expr),
}

/// Pre-order, source-order iterator over every expression node under a
/// statement list.
///
/// Uses an explicit work stack rather than recursion, so a consumer can
/// stop at any node and deeply nested documents cannot exhaust the call
/// stack. Source order is load-bearing: the exhaustiveness scan stops at
/// the first point its working set empties, and nodes past that point
/// are never yielded to it.
pub struct ExprWalk<'a> {
    stack: Vec<Frame<'a>>,
}

/// Walks all descendant expressions of `scope` in source order.
pub fn exprs_in_order(scope: &[Stmt]) -> ExprWalk<'_> {
    ExprWalk {
        stack: scope.iter().rev().map(Frame::Stmt).collect(),
    }
}

impl<'a> Iterator for ExprWalk<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<&'a Expr> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Stmt(stmt) => match stmt {
                    Stmt::Expr { expr, .. } | Stmt::Throw { expr, .. } => {
                        self.stack.push(Frame::Expr(expr));
                    }
                    Stmt::Return { expr, .. } => {
                        if let Some(e) = expr {
                            self.stack.push(Frame::Expr(e));
                        }
                    }
                    Stmt::Let { value, .. } => {
                        if let Some(e) = value {
                            self.stack.push(Frame::Expr(e));
                        }
                    }
                    Stmt::If {
                        cond, then, else_, ..
                    } => {
                        // Reversed pushes so pops come out in source order.
                        for s in else_.iter().rev() {
                            self.stack.push(Frame::Stmt(s));
                        }
                        for s in then.iter().rev() {
                            self.stack.push(Frame::Stmt(s));
                        }
                        self.stack.push(Frame::Expr(cond));
                    }
                    Stmt::Block { stmts, .. } => {
                        for s in stmts.iter().rev() {
                            self.stack.push(Frame::Stmt(s));
                        }
                    }
                },
                Frame::Expr(expr) => {
                    match expr {
                        Expr::Ident { .. } | Expr::Literal { .. } => {}
                        Expr::New { args, .. } => {
                            for a in args.iter().rev() {
                                self.stack.push(Frame::Expr(a));
                            }
                        }
                        Expr::Member { receiver, .. } => {
                            self.stack.push(Frame::Expr(receiver));
                        }
                        Expr::Binary { lhs, rhs, .. } => {
                            self.stack.push(Frame::Expr(rhs));
                            self.stack.push(Frame::Expr(lhs));
                        }
                        Expr::Call { callee, args, .. } => {
                            for a in args.iter().rev() {
                                self.stack.push(Frame::Expr(a));
                            }
                            self.stack.push(Frame::Expr(callee));
                        }
                    }
                    return Some(expr);
                }
            }
        }
        None
    }
}
