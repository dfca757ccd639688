//! IDE support library for the Lumen programming language.
//!
//! This crate is the completion layer sitting between the Lumen compiler's
//! constraint solver and an editor front-end:
//!
//! - Type checking and constraint solving happen in the compiler; during
//!   completion the solver reports each accepted solution through
//!   [`SolutionCallback`].
//! - [`completion::DirectiveExprCompletion`] collects one candidate result
//!   per distinct expected type and drives the lookup engine, which renders
//!   directive keywords, magic literals, interop keywords, and visible
//!   macros into completion items.
//! - A [`completion::CompletionConsumer`] receives the final item list.
//!
//! Everything here is synchronous and request-scoped: one collector, one
//! sink, and one context per completion request, never shared across
//! threads.

pub mod completion;
pub mod config;
pub mod context;
pub mod solution;
pub mod ty;

/// Interned name symbol, shared with the compiler's interner.
pub type Symbol = string_interner::DefaultSymbol;

pub use completion::{CompletionConsumer, CompletionItem, DirectiveExprCompletion};
pub use config::CompletionOptions;
pub use context::{CompletionContext, DeclContext, MacroDecl, ParentStmtKind};
pub use solution::{DeclId, ExprId, Solution, SolutionCallback};
pub use ty::{PrimitiveTy, Type, TypeKind};
