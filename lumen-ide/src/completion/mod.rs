//! Code completion for directive expressions.
//!
//! Completion requests arrive while the solver is enumerating type-checking
//! solutions for the partially typed expression. The flow is one-way:
//!
//! ```text
//! solver ──saw_solution──► DirectiveExprCompletion ──deliver_results──►
//!     CompletionLookup ──► ResultSink ──► CompletionConsumer
//! ```
//!
//! The collector keeps one entry per distinct expected type; the lookup
//! engine renders directive and macro candidates against each expectation;
//! the sink filters textual duplicates; the consumer receives the final
//! item list exactly once per request.

pub mod consumer;
pub mod directive;
pub mod item;
pub mod lookup;
pub mod sink;

pub use consumer::{deliver_completion_results, CollectingConsumer, CompletionConsumer};
pub use directive::{CollectedResult, DirectiveExprCompletion};
pub use item::{CompletionItem, CompletionItemKind, TypeRelation};
pub use lookup::{CompletionLookup, ExpectedTypeContext};
pub use sink::ResultSink;
