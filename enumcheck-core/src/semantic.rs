//! Semantic resolution boundary.
//!
//! The checker never inspects type declarations directly; everything goes
//! through the [`SemanticModel`] trait so the analysis can run against a
//! synthetic resolver in tests exactly as it would against a real host.
//!
//! [`TypeTable`] + [`ScopedModel`] are the in-memory implementation used
//! by the document loader, the builder, and the test suite.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::syntax::{Expr, Function, Literal, Stmt, TypeExpr};

/// Opaque identity of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeId(pub u32);

/// Kind of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Enum,
    Class,
    Interface,
    Primitive,
}

/// Resolved static type of an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    /// Generic definition (the unparameterized form) for instantiations,
    /// or the type itself when not generic.
    pub def: TypeId,
    /// Type arguments; empty when the type is not an instantiation.
    pub args: Vec<TypeId>,
}

impl TypeInfo {
    pub fn simple(def: TypeId) -> Self {
        Self {
            def,
            args: Vec::new(),
        }
    }

    /// Whether this is exactly the given non-generic type.
    pub fn is_exactly(&self, id: TypeId) -> bool {
        self.def == id && self.args.is_empty()
    }
}

/// Semantic-resolution service supplied by the host.
///
/// Every method returns `Option`: `None` means "not resolvable here",
/// which the rule treats as non-applicability, never as an error.
pub trait SemanticModel {
    /// Static type of an expression, if resolvable.
    fn expr_type(&self, expr: &Expr) -> Option<TypeInfo>;

    /// Identity of a named type with the given generic arity.
    fn named_type(&self, path: &str, arity: usize) -> Option<TypeId>;

    /// Kind of a resolved type.
    fn type_kind(&self, id: TypeId) -> Option<TypeKind>;

    /// Member names of an enum type, in declaration order.
    fn enum_members(&self, id: TypeId) -> Option<&[String]>;
}

/// A declared type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDef {
    /// Fully-qualified name, e.g. `net.ajennings.EnumNotExhaustedException`.
    pub path: String,
    pub kind: TypeKind,
    /// Declared generic arity; 0 for non-generic types.
    pub arity: usize,
    /// Enum member names in declaration order; empty for non-enums.
    pub members: Vec<String>,
}

impl TypeDef {
    pub fn enumeration(path: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            path: path.into(),
            kind: TypeKind::Enum,
            arity: 0,
            members,
        }
    }

    pub fn class(path: impl Into<String>, arity: usize) -> Self {
        Self {
            path: path.into(),
            kind: TypeKind::Class,
            arity,
            members: Vec::new(),
        }
    }
}

/// In-memory registry of declared types.
///
/// Primitives `int`, `bool`, and `string` are pre-registered so literals
/// and comparisons always type-check.
#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    defs: Vec<TypeDef>,
    by_path: HashMap<String, TypeId>,
}

impl TypeTable {
    pub fn new() -> Self {
        let mut table = Self::default();
        for prim in ["int", "bool", "string"] {
            table.insert(TypeDef {
                path: prim.into(),
                kind: TypeKind::Primitive,
                arity: 0,
                members: Vec::new(),
            });
        }
        table
    }

    /// Registers a type and returns its identity. Re-declaring a path
    /// keeps the first declaration (paths are unique by language rule).
    pub fn insert(&mut self, def: TypeDef) -> TypeId {
        if let Some(id) = self.by_path.get(&def.path) {
            return *id;
        }
        let id = TypeId(self.defs.len() as u32);
        self.by_path.insert(def.path.clone(), id);
        self.defs.push(def);
        id
    }

    pub fn id_of(&self, path: &str) -> Option<TypeId> {
        self.by_path.get(path).copied()
    }

    pub fn get(&self, id: TypeId) -> Option<&TypeDef> {
        self.defs.get(id.0 as usize)
    }

    /// Resolves a written type reference to its instantiation info.
    ///
    /// Declines when the name is unknown, the argument count does not
    /// match the declared arity, or an argument is itself generic
    /// (nested instantiations are outside this model).
    pub fn resolve_type_expr(&self, te: &TypeExpr) -> Option<TypeInfo> {
        let def = self.id_of(&te.name)?;
        if te.args.is_empty() {
            return Some(TypeInfo::simple(def));
        }
        if self.get(def)?.arity != te.args.len() {
            return None;
        }
        let mut args = Vec::with_capacity(te.args.len());
        for arg in &te.args {
            let info = self.resolve_type_expr(arg)?;
            if !info.args.is_empty() {
                return None;
            }
            args.push(info.def);
        }
        Some(TypeInfo { def, args })
    }
}

/// Per-function view layering local bindings over a [`TypeTable`].
///
/// Locals shadow type names, matching simple-name lookup in the source
/// language. Binding covers params plus every `let` in the body, bound
/// in source order (declared type first, inference from the initializer
/// otherwise); the rule only ever needs receiver typing, so statement-
/// granular scoping is not modeled.
pub struct ScopedModel<'a> {
    table: &'a TypeTable,
    locals: HashMap<String, TypeId>,
}

impl<'a> ScopedModel<'a> {
    pub fn new(table: &'a TypeTable) -> Self {
        Self {
            table,
            locals: HashMap::new(),
        }
    }

    pub fn for_function(table: &'a TypeTable, func: &Function) -> Self {
        let mut model = Self::new(table);
        for param in &func.params {
            if let Some(id) = table.id_of(&param.ty) {
                model.locals.insert(param.name.clone(), id);
            }
        }
        model.bind_lets(&func.body);
        model
    }

    pub fn bind(&mut self, name: impl Into<String>, ty: TypeId) {
        self.locals.insert(name.into(), ty);
    }

    fn bind_lets(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            match stmt {
                Stmt::Let {
                    name, ty, value, ..
                } => {
                    let id = match ty {
                        Some(ty_name) => self.table.id_of(ty_name),
                        None => value
                            .as_ref()
                            .and_then(|v| self.expr_type(v))
                            .filter(|info| info.args.is_empty())
                            .map(|info| info.def),
                    };
                    if let Some(id) = id {
                        self.locals.insert(name.clone(), id);
                    }
                }
                Stmt::If { then, else_, .. } => {
                    self.bind_lets(then);
                    self.bind_lets(else_);
                }
                Stmt::Block { stmts, .. } => self.bind_lets(stmts),
                Stmt::Expr { .. } | Stmt::Throw { .. } | Stmt::Return { .. } => {}
            }
        }
    }
}

impl SemanticModel for ScopedModel<'_> {
    fn expr_type(&self, expr: &Expr) -> Option<TypeInfo> {
        match expr {
            Expr::Ident { name, .. } => {
                if let Some(id) = self.locals.get(name) {
                    return Some(TypeInfo::simple(*id));
                }
                // A bare type name used as a receiver resolves to the
                // type itself, mirroring host typing of type references.
                self.table.id_of(name).map(TypeInfo::simple)
            }
            Expr::Literal { value, .. } => {
                let prim = match value {
                    Literal::Bool(_) => "bool",
                    Literal::Int(_) => "int",
                    Literal::Str(_) => "string",
                };
                self.table.id_of(prim).map(TypeInfo::simple)
            }
            Expr::New { ty, .. } => self.table.resolve_type_expr(ty),
            Expr::Member {
                receiver, member, ..
            } => {
                // Enum member access has the enum's own type. Anything
                // else is unresolved in this model.
                let recv = self.expr_type(receiver)?;
                if !recv.args.is_empty() {
                    return None;
                }
                let def = self.table.get(recv.def)?;
                if def.kind == TypeKind::Enum && def.members.iter().any(|m| m == member) {
                    Some(TypeInfo::simple(recv.def))
                } else {
                    None
                }
            }
            Expr::Binary { .. } => self.table.id_of("bool").map(TypeInfo::simple),
            Expr::Call { .. } => None,
        }
    }

    fn named_type(&self, path: &str, arity: usize) -> Option<TypeId> {
        let id = self.table.id_of(path)?;
        (self.table.get(id)?.arity == arity).then_some(id)
    }

    fn type_kind(&self, id: TypeId) -> Option<TypeKind> {
        self.table.get(id).map(|d| d.kind)
    }

    fn enum_members(&self, id: TypeId) -> Option<&[String]> {
        self.table.get(id).map(|d| d.members.as_slice())
    }
}
