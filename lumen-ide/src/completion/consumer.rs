//! Consumer capability and the shared delivery routine.

use tracing::debug;

use crate::context::{CompletionContext, DeclContext};

use super::item::CompletionItem;
use super::lookup::CompletionLookup;

/// Receives the final completion entries for one request, exactly once.
pub trait CompletionConsumer {
    fn handle_items(&mut self, items: &[CompletionItem]);
}

/// A consumer that keeps the delivered items. Used by callers that post-
/// process results themselves (and throughout the test suite).
#[derive(Debug, Default)]
pub struct CollectingConsumer {
    items: Vec<CompletionItem>,
    deliveries: usize,
}

impl CollectingConsumer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CompletionItem] {
        &self.items
    }

    /// How many times `handle_items` was invoked.
    pub fn deliveries(&self) -> usize {
        self.deliveries
    }
}

impl CompletionConsumer for CollectingConsumer {
    fn handle_items(&mut self, items: &[CompletionItem]) {
        self.deliveries += 1;
        self.items.extend_from_slice(items);
    }
}

/// Flush a filled lookup to the consumer.
///
/// Applies the request's presentation options (sort, relation annotation,
/// truncation) and invokes the consumer exactly once, including for an empty
/// item set.
pub fn deliver_completion_results(
    ctx: &CompletionContext,
    lookup: CompletionLookup<'_>,
    _decl_ctx: &DeclContext,
    consumer: &mut dyn CompletionConsumer,
) {
    let options = ctx.options();
    let mut items = lookup.into_sink().into_items();

    if options.sort_items {
        items.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));
    }
    if options.annotate_type_relations {
        for item in &mut items {
            if let Some(detail) = &mut item.detail {
                detail.push_str(&format!(" ({:?})", item.type_relation));
            }
        }
    }
    if let Some(max) = options.max_results {
        items.truncate(max);
    }

    debug!(count = items.len(), "delivering completion results");
    consumer.handle_items(&items);
}
