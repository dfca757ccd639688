//! Declaration and request contexts for completion.
//!
//! [`DeclContext`] describes the declaration enclosing the completion point
//! (the solver classifies solutions against it; the lookup engine pulls
//! visible macros from it). [`CompletionContext`] is the per-request state:
//! it owns the string interner and the presentation options, lives for one
//! completion request, and is discarded after delivery.

use string_interner::DefaultStringInterner;

use crate::config::CompletionOptions;
use crate::solution::DeclId;
use crate::ty::Type;
use crate::Symbol;

/// The kind of statement enclosing the completion point.
///
/// Availability directives are conditions, so they are only offered when the
/// completion sits inside an `if` or `while` condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentStmtKind {
    /// Not inside a statement with special directive rules.
    None,
    If,
    While,
    Match,
    Return,
}

impl ParentStmtKind {
    /// Whether this statement kind accepts availability conditions.
    pub fn accepts_availability(self) -> bool {
        matches!(self, ParentStmtKind::If | ParentStmtKind::While)
    }
}

/// A macro visible at the completion point.
#[derive(Debug, Clone)]
pub struct MacroDecl {
    /// The macro name (without the directive sigil).
    pub name: Symbol,
    /// Parameter types.
    pub params: Vec<Type>,
    /// The type the macro expansion produces.
    pub result_ty: Type,
}

/// The declaration enclosing the completion point.
#[derive(Debug, Clone)]
pub struct DeclContext {
    decl_id: DeclId,
    is_async: bool,
    visible_macros: Vec<MacroDecl>,
}

impl DeclContext {
    pub fn new(decl_id: DeclId, is_async: bool) -> Self {
        Self {
            decl_id,
            is_async,
            visible_macros: Vec::new(),
        }
    }

    /// Add a macro visible from this context.
    pub fn with_macro(mut self, decl: MacroDecl) -> Self {
        self.visible_macros.push(decl);
        self
    }

    pub fn decl_id(&self) -> DeclId {
        self.decl_id
    }

    /// Whether the declaration itself is marked asynchronous. Solutions may
    /// additionally classify it async; see `Solution::is_context_async`.
    pub fn is_async(&self) -> bool {
        self.is_async
    }

    /// Macros visible at the completion point, in scope order.
    pub fn visible_macros(&self) -> &[MacroDecl] {
        &self.visible_macros
    }
}

/// Per-request completion state.
///
/// Owns the interner used to render type and macro names, plus the
/// presentation options. One instance per completion request; never shared
/// across requests or threads.
#[derive(Debug)]
pub struct CompletionContext {
    interner: DefaultStringInterner,
    options: CompletionOptions,
}

impl CompletionContext {
    pub fn new(interner: DefaultStringInterner) -> Self {
        Self {
            interner,
            options: CompletionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CompletionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn interner(&self) -> &DefaultStringInterner {
        &self.interner
    }

    pub fn options(&self) -> &CompletionOptions {
        &self.options
    }
}

impl Default for CompletionContext {
    fn default() -> Self {
        Self::new(DefaultStringInterner::new())
    }
}
