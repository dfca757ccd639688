//! Solver-facing view of type-checking solutions.
//!
//! The constraint solver lives in the compiler proper; during completion it
//! enumerates every self-consistent type assignment ("solution") for the
//! expression holding the completion point and reports each one through
//! [`SolutionCallback`]. This module defines the read-only view the
//! completion layer gets of one such solution: per-expression type bindings
//! plus the context classifications the collector needs.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::context::DeclContext;
use crate::ty::Type;

/// Identifies an expression in the checked function body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExprId(pub u32);

/// Identifies a declaration (function, closure, initializer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeclId(pub u32);

/// One self-consistent type assignment produced by the solver.
///
/// A solution is immutable once reported; the completion layer only queries
/// it. All queries are total: an expression the solver never bound simply
/// reports the error type, and absent classifications report `false`.
#[derive(Debug, Clone, Default)]
pub struct Solution {
    /// Types the solver assigned to expressions.
    expr_types: FxHashMap<ExprId, Type>,
    /// Declaration contexts this solution classified as asynchronous.
    async_contexts: FxHashSet<DeclId>,
    /// Expressions sitting in implicit single-expression-return position.
    single_expression_returns: FxHashSet<ExprId>,
}

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the type assigned to an expression.
    pub fn bind_expr(&mut self, expr: ExprId, ty: Type) {
        self.expr_types.insert(expr, ty);
    }

    /// Classify a declaration context as asynchronous under this solution.
    pub fn mark_context_async(&mut self, decl: DeclId) {
        self.async_contexts.insert(decl);
    }

    /// Classify an expression as an implicit single-expression return.
    pub fn mark_single_expression_return(&mut self, expr: ExprId) {
        self.single_expression_returns.insert(expr);
    }

    /// The type a completion candidate must conform to at `expr` under this
    /// solution. Unbound expressions report [`Type::error`]; there is no
    /// failure path here.
    pub fn expected_type_for(&self, expr: ExprId) -> Type {
        self.expr_types.get(&expr).cloned().unwrap_or_else(Type::error)
    }

    /// Whether the enclosing declaration context is asynchronous, either
    /// by declaration or by this solution's classification.
    pub fn is_context_async(&self, decl_ctx: &DeclContext) -> bool {
        decl_ctx.is_async() || self.async_contexts.contains(&decl_ctx.decl_id())
    }

    /// Whether `expr` sits in a position where its value is implicitly
    /// returned without an explicit return keyword.
    pub fn is_implicit_single_expression_return(&self, expr: ExprId) -> bool {
        self.single_expression_returns.contains(&expr)
    }
}

/// Callback seam between the solver's solution enumeration and the
/// completion layer.
///
/// The solver invokes `saw_solution` once per accepted solution, on a single
/// thread, for the lifetime of one completion request. Implementations own
/// whatever state they accumulate.
pub trait SolutionCallback {
    /// Called for each accepted solution, in the order the solver finds them.
    fn saw_solution(&mut self, solution: &Solution);
}
