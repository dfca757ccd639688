//! Completion after a `#` directive sigil in expression position.
//!
//! The solver enumerates type-checking solutions for the expression holding
//! the completion point and reports each one through
//! [`SolutionCallback::saw_solution`]. This collector keeps one entry per
//! distinct expected type (first seen wins), then
//! [`deliver_results`](DirectiveExprCompletion::deliver_results) runs the
//! lookup engine once per entry and flushes to the consumer.

use indexmap::IndexMap;
use tracing::debug;

use crate::context::{CompletionContext, DeclContext, ParentStmtKind};
use crate::solution::{ExprId, Solution, SolutionCallback};
use crate::ty::Type;

use super::consumer::{deliver_completion_results, CompletionConsumer};
use super::lookup::{CompletionLookup, ExpectedTypeContext};

/// Flags recorded for one distinct expected type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectedResult {
    /// The completion sits in an implicit single-expression-return position.
    pub is_implicit_single_expression_return: bool,
    /// The surrounding context is asynchronous.
    pub is_async: bool,
}

/// Collects solver solutions for a directive expression and presents the
/// deduplicated results.
///
/// Exclusively owned by one completion request; the solver calls
/// [`saw_solution`](SolutionCallback::saw_solution) once per accepted
/// solution on a single thread.
pub struct DirectiveExprCompletion<'a> {
    /// The expression holding the completion point.
    completion_expr: ExprId,
    /// The enclosing declaration.
    decl_ctx: &'a DeclContext,
    /// The statement kind enclosing the completion point.
    parent_stmt_kind: ParentStmtKind,
    /// One entry per distinct expected type, in first-seen order. Keys are
    /// compared structurally; a later solution with an equal expected type
    /// contributes nothing and does not alter the recorded flags.
    results: IndexMap<Type, CollectedResult>,
}

impl<'a> DirectiveExprCompletion<'a> {
    pub fn new(
        completion_expr: ExprId,
        decl_ctx: &'a DeclContext,
        parent_stmt_kind: ParentStmtKind,
    ) -> Self {
        Self {
            completion_expr,
            decl_ctx,
            parent_stmt_kind,
            results: IndexMap::new(),
        }
    }

    /// The collected results, in first-seen order.
    pub fn results(&self) -> impl Iterator<Item = (&Type, &CollectedResult)> {
        self.results.iter()
    }

    /// Number of distinct expected types collected so far.
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// Run the lookup engine once per collected result, in first-seen order,
    /// and hand the accumulated items to `consumer`.
    ///
    /// Duplicate checking is enabled only when more than one result exists:
    /// independent expected types can render overlapping items, while the
    /// single-result fast path cannot.
    pub fn deliver_results(
        &self,
        ctx: &CompletionContext,
        consumer: &mut dyn CompletionConsumer,
    ) {
        let lookup = self.run_lookup(ctx);
        deliver_completion_results(ctx, lookup, self.decl_ctx, consumer);
    }

    fn run_lookup<'b>(&'b self, ctx: &'b CompletionContext) -> CompletionLookup<'b> {
        let mut lookup = CompletionLookup::new(ctx, self.decl_ctx, self.results.len() > 1);

        for (expected_ty, result) in &self.results {
            let expectation = ExpectedTypeContext::new(
                vec![expected_ty.clone()],
                result.is_implicit_single_expression_return,
                /* expects_non_void */ true,
            );
            lookup.add_available_completions(self.parent_stmt_kind, &expectation);
            lookup.add_literal_completions(&expectation);
            lookup.add_interop_keyword_completions(&expectation);
            lookup.add_macro_completions(&expectation);
        }

        lookup
    }
}

impl SolutionCallback for DirectiveExprCompletion<'_> {
    fn saw_solution(&mut self, solution: &Solution) {
        let expected_ty = solution.expected_type_for(self.completion_expr);
        let is_async = solution.is_context_async(self.decl_ctx);

        // A solution whose expected type duplicates an earlier result is
        // ignored, flags included.
        if self.results.contains_key(&expected_ty) {
            debug!(count = self.results.len(), "duplicate expected type ignored");
            return;
        }

        let single_expression =
            solution.is_implicit_single_expression_return(self.completion_expr);
        self.results.insert(
            expected_ty,
            CollectedResult {
                is_implicit_single_expression_return: single_expression,
                is_async,
            },
        );
    }
}
