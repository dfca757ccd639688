//! Completion items produced by the lookup engine.

use crate::ty::Type;

/// The kind of a completion item, used for sorting and duplicate keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CompletionItemKind {
    /// A directive keyword such as `#available`.
    Keyword,
    /// A magic literal directive such as `#file`.
    Literal,
    /// A macro visible at the completion point.
    Macro,
}

/// How an item's result type relates to the active expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeRelation {
    /// Structurally equal to one of the expected types.
    Identical,
    /// Known not to match any expected type.
    Unrelated,
    /// The item produces no value in a position that expects one.
    Invalid,
    /// No usable expectation was available.
    Unknown,
}

/// One completion entry handed to the consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionItem {
    /// The directive or macro name, without the sigil.
    pub name: String,
    /// The text inserted on acceptance, including the sigil.
    pub insert_text: String,
    /// Item kind.
    pub kind: CompletionItemKind,
    /// Rendered result type, if the item produces a value.
    pub detail: Option<String>,
    /// Relation of the item's result type to the expected type.
    pub type_relation: TypeRelation,
}

/// A completion candidate before relation annotation: a name and the type
/// its expansion produces, if any.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub name: String,
    pub insert_text: String,
    pub kind: CompletionItemKind,
    pub result_ty: Option<Type>,
}
