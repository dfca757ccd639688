//! Ordered sink for completion items.
//!
//! The lookup engine pushes items here as it renders them. When the same
//! lookup runs once per expected type, independent expectations can produce
//! textually identical items; duplicate checking filters those at insertion
//! so later presentation stages see each `(kind, name)` pair at most once.

use rustc_hash::FxHashSet;

use super::item::{CompletionItem, CompletionItemKind};

/// Accumulates completion items in insertion order.
#[derive(Debug, Default)]
pub struct ResultSink {
    items: Vec<CompletionItem>,
    /// Keys of items already pushed. `None` when duplicate checking is off.
    seen: Option<FxHashSet<(CompletionItemKind, String)>>,
}

impl ResultSink {
    /// Create a sink. With `check_duplicates` set, an item whose
    /// `(kind, name)` key was already pushed is silently dropped.
    pub fn new(check_duplicates: bool) -> Self {
        Self {
            items: Vec::new(),
            seen: check_duplicates.then(FxHashSet::default),
        }
    }

    /// Whether duplicate checking is active.
    pub fn checks_duplicates(&self) -> bool {
        self.seen.is_some()
    }

    /// Push an item, subject to duplicate filtering.
    pub fn push(&mut self, item: CompletionItem) {
        if let Some(seen) = &mut self.seen {
            let key = (item.kind, item.name.clone());
            if !seen.insert(key) {
                return;
            }
        }
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the sink, yielding items in insertion order.
    pub fn into_items(self) -> Vec<CompletionItem> {
        self.items
    }
}
