//! The completion lookup engine.
//!
//! The collector runs one lookup pass per distinct expected type. Each pass
//! passes an explicit [`ExpectedTypeContext`] to the `add_*` calls, which
//! render their candidates against it and push the resulting items into the
//! shared sink. The engine carries no expectation state of its own between
//! calls.

use tracing::debug;

use crate::context::{CompletionContext, DeclContext, ParentStmtKind};
use crate::ty::Type;

use super::item::{Candidate, CompletionItem, CompletionItemKind, TypeRelation};
use super::sink::ResultSink;

/// Magic literal directives and the types they produce.
const MAGIC_LITERALS: &[(&str, fn() -> Type)] = &[
    ("file", Type::str),
    ("line", Type::int),
    ("column", Type::int),
    ("function", Type::str),
];

/// C interop directives and the types they produce.
const INTEROP_KEYWORDS: &[(&str, fn() -> Type)] = &[
    ("c_name", Type::str),
    ("c_sizeof", Type::int),
];

/// The expectation one lookup pass renders against.
///
/// Built fresh per collected result; the lookup never mutates it.
#[derive(Debug, Clone)]
pub struct ExpectedTypeContext {
    /// Types a candidate must conform to. May be empty or error-typed, in
    /// which case relations come out [`TypeRelation::Unknown`].
    pub expected: Vec<Type>,
    /// The completion sits in an implicit single-expression-return position.
    pub is_implicit_single_expression_return: bool,
    /// The position requires a value; unit-producing candidates are marked
    /// [`TypeRelation::Invalid`].
    pub expects_non_void: bool,
}

impl ExpectedTypeContext {
    pub fn new(
        expected: Vec<Type>,
        is_implicit_single_expression_return: bool,
        expects_non_void: bool,
    ) -> Self {
        Self {
            expected,
            is_implicit_single_expression_return,
            expects_non_void,
        }
    }

    /// Expected types that carry information (non-error).
    fn usable_expected(&self) -> impl Iterator<Item = &Type> {
        self.expected.iter().filter(|ty| !ty.is_error())
    }

    /// Relate a candidate's result type to this expectation.
    fn relation_for(&self, result_ty: Option<&Type>) -> TypeRelation {
        let Some(ty) = result_ty else {
            return TypeRelation::Unknown;
        };
        if ty.is_unit() && self.expects_non_void {
            return TypeRelation::Invalid;
        }
        let mut usable = self.usable_expected().peekable();
        if usable.peek().is_none() {
            return TypeRelation::Unknown;
        }
        if usable.any(|expected| expected == ty) {
            TypeRelation::Identical
        } else {
            TypeRelation::Unrelated
        }
    }
}

/// Renders completion candidates into the sink.
///
/// Bound to one completion request's context and declaration context;
/// owns the sink it fills.
pub struct CompletionLookup<'a> {
    ctx: &'a CompletionContext,
    decl_ctx: &'a DeclContext,
    sink: ResultSink,
}

impl<'a> CompletionLookup<'a> {
    /// Create a lookup bound to the request's sink settings.
    ///
    /// `check_duplicates` should be set when the same lookup will run for
    /// more than one expectation, since independent expectations can render
    /// overlapping items.
    pub fn new(
        ctx: &'a CompletionContext,
        decl_ctx: &'a DeclContext,
        check_duplicates: bool,
    ) -> Self {
        Self {
            ctx,
            decl_ctx,
            sink: ResultSink::new(check_duplicates),
        }
    }

    /// Whether the sink filters duplicate items.
    pub fn checks_duplicates(&self) -> bool {
        self.sink.checks_duplicates()
    }

    /// Consume the lookup, yielding the filled sink.
    pub fn into_sink(self) -> ResultSink {
        self.sink
    }

    /// Offer the availability condition directive, scoped to the enclosing
    /// statement kind.
    pub fn add_available_completions(
        &mut self,
        parent_kind: ParentStmtKind,
        expectation: &ExpectedTypeContext,
    ) {
        if !parent_kind.accepts_availability() {
            debug!(?parent_kind, "availability not offered outside conditions");
            return;
        }
        self.push_candidate(
            Candidate {
                name: "available".to_string(),
                insert_text: "#available(".to_string(),
                kind: CompletionItemKind::Keyword,
                result_ty: Some(Type::bool()),
            },
            expectation,
        );
    }

    /// Offer the magic literal directives (`#file`, `#line`, ...).
    pub fn add_literal_completions(&mut self, expectation: &ExpectedTypeContext) {
        for (name, ty) in MAGIC_LITERALS {
            self.push_candidate(
                Candidate {
                    name: (*name).to_string(),
                    insert_text: format!("#{name}"),
                    kind: CompletionItemKind::Literal,
                    result_ty: Some(ty()),
                },
                expectation,
            );
        }
    }

    /// Offer the C interop directives.
    pub fn add_interop_keyword_completions(&mut self, expectation: &ExpectedTypeContext) {
        for (name, ty) in INTEROP_KEYWORDS {
            self.push_candidate(
                Candidate {
                    name: (*name).to_string(),
                    insert_text: format!("#{name}("),
                    kind: CompletionItemKind::Keyword,
                    result_ty: Some(ty()),
                },
                expectation,
            );
        }
    }

    /// Offer every macro visible at the completion point.
    pub fn add_macro_completions(&mut self, expectation: &ExpectedTypeContext) {
        let interner = self.ctx.interner();
        let candidates: Vec<Candidate> = self
            .decl_ctx
            .visible_macros()
            .iter()
            .map(|decl| {
                let name = interner.resolve(decl.name).unwrap_or("<unknown>").to_string();
                let insert_text = if decl.params.is_empty() {
                    format!("#{name}")
                } else {
                    format!("#{name}(")
                };
                Candidate {
                    name,
                    insert_text,
                    kind: CompletionItemKind::Macro,
                    result_ty: Some(decl.result_ty.clone()),
                }
            })
            .collect();
        for candidate in candidates {
            self.push_candidate(candidate, expectation);
        }
    }

    fn push_candidate(&mut self, candidate: Candidate, expectation: &ExpectedTypeContext) {
        let type_relation = expectation.relation_for(candidate.result_ty.as_ref());
        let detail = candidate
            .result_ty
            .as_ref()
            .map(|ty| ty.display(self.ctx.interner()));
        self.sink.push(CompletionItem {
            name: candidate.name,
            insert_text: candidate.insert_text,
            kind: candidate.kind,
            detail,
            type_relation,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::MacroDecl;
    use crate::solution::DeclId;
    use string_interner::DefaultStringInterner;

    fn expectation(expected: Vec<Type>) -> ExpectedTypeContext {
        ExpectedTypeContext::new(expected, false, true)
    }

    #[test]
    fn availability_respects_parent_statement_kind() {
        let ctx = CompletionContext::default();
        let decl_ctx = DeclContext::new(DeclId(0), false);

        let mut lookup = CompletionLookup::new(&ctx, &decl_ctx, false);
        lookup.add_available_completions(ParentStmtKind::Return, &expectation(vec![]));
        assert!(lookup.into_sink().is_empty());

        let mut lookup = CompletionLookup::new(&ctx, &decl_ctx, false);
        lookup.add_available_completions(ParentStmtKind::If, &expectation(vec![]));
        let items = lookup.into_sink().into_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "available");
        assert_eq!(items[0].kind, CompletionItemKind::Keyword);
    }

    #[test]
    fn literal_relations_follow_expected_type() {
        let ctx = CompletionContext::default();
        let decl_ctx = DeclContext::new(DeclId(0), false);

        let mut lookup = CompletionLookup::new(&ctx, &decl_ctx, false);
        lookup.add_literal_completions(&expectation(vec![Type::int()]));
        let items = lookup.into_sink().into_items();

        let line = items.iter().find(|i| i.name == "line").unwrap();
        assert_eq!(line.type_relation, TypeRelation::Identical);
        let file = items.iter().find(|i| i.name == "file").unwrap();
        assert_eq!(file.type_relation, TypeRelation::Unrelated);
    }

    #[test]
    fn error_expectation_relates_as_unknown() {
        let ctx = CompletionContext::default();
        let decl_ctx = DeclContext::new(DeclId(0), false);

        let mut lookup = CompletionLookup::new(&ctx, &decl_ctx, false);
        lookup.add_literal_completions(&expectation(vec![Type::error()]));
        for item in lookup.into_sink().into_items() {
            assert_eq!(item.type_relation, TypeRelation::Unknown);
        }
    }

    #[test]
    fn macro_items_render_name_and_detail() {
        let mut interner = DefaultStringInterner::new();
        let stringify = interner.get_or_intern("stringify");
        let ctx = CompletionContext::new(interner);
        let decl_ctx = DeclContext::new(DeclId(0), false).with_macro(MacroDecl {
            name: stringify,
            params: vec![Type::int()],
            result_ty: Type::str(),
        });

        let mut lookup = CompletionLookup::new(&ctx, &decl_ctx, false);
        lookup.add_macro_completions(&expectation(vec![Type::str()]));
        let items = lookup.into_sink().into_items();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "stringify");
        assert_eq!(items[0].insert_text, "#stringify(");
        assert_eq!(items[0].detail.as_deref(), Some("Str"));
        assert_eq!(items[0].type_relation, TypeRelation::Identical);
    }

    #[test]
    fn unit_macro_is_invalid_when_value_expected() {
        let mut interner = DefaultStringInterner::new();
        let log = interner.get_or_intern("log");
        let ctx = CompletionContext::new(interner);
        let decl_ctx = DeclContext::new(DeclId(0), false).with_macro(MacroDecl {
            name: log,
            params: vec![Type::str()],
            result_ty: Type::unit(),
        });

        let mut lookup = CompletionLookup::new(&ctx, &decl_ctx, false);
        lookup.add_macro_completions(&expectation(vec![Type::int()]));
        let items = lookup.into_sink().into_items();
        assert_eq!(items[0].type_relation, TypeRelation::Invalid);
    }
}
