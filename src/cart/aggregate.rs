// Cart - Mutable container of items under version control

use crate::cart::item::{Item, ItemId};
use crate::cart::money::Money;
use crate::history::snapshot::Snapshot;

/// Result of [`Cart::add_or_increment`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum AddOutcome {
    /// A new line was appended
    Inserted,
    /// An existing line grew; carries the new quantity
    Incremented { quantity: u32 },
    /// Zero quantity requested, nothing changed
    Ignored,
}

/// Result of [`Cart::remove_or_decrement`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum RemoveOutcome {
    /// The line was dropped entirely
    Removed,
    /// The line shrank; carries the remaining quantity
    Decremented { remaining: u32 },
    /// No line with that id
    NotFound,
}

/// The aggregate: an insertion-ordered set of cart lines
///
/// Invariants:
/// - at most one item per id
/// - every held item has `quantity > 0`
///
/// The cart never talks to the history on its own. Callers mutate it and
/// then record a snapshot through [`crate::HistoryManager::record`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<Item>,
}

impl Cart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of a line, merging with an existing line
    ///
    /// An existing line keeps its original label and unit price.
    pub fn add_or_increment(
        &mut self,
        id: ItemId,
        label: impl Into<String>,
        quantity: u32,
        unit_price: Money,
    ) -> AddOutcome {
        if quantity == 0 {
            tracing::trace!(id, "ignoring zero-quantity add");
            return AddOutcome::Ignored;
        }

        if let Some(item) = self.get_mut(id) {
            item.quantity = item.quantity.saturating_add(quantity);
            tracing::trace!(id, quantity = item.quantity, "incremented item");
            return AddOutcome::Incremented {
                quantity: item.quantity,
            };
        }

        self.items.push(Item::new(id, label, quantity, unit_price));
        tracing::trace!(id, quantity, "inserted item");
        AddOutcome::Inserted
    }

    /// Remove `amount` units of a line
    ///
    /// `amount <= 0` or `amount >= quantity` drops the whole line.
    pub fn remove_or_decrement(&mut self, id: ItemId, amount: i64) -> RemoveOutcome {
        let Some(index) = self.items.iter().position(|i| i.id == id) else {
            tracing::trace!(id, "remove on unknown item");
            return RemoveOutcome::NotFound;
        };

        let current = self.items[index].quantity;
        if amount <= 0 || amount >= i64::from(current) {
            self.items.remove(index);
            tracing::trace!(id, "removed item");
            return RemoveOutcome::Removed;
        }

        // 0 < amount < current, so this fits in u32 and cannot underflow
        let remaining = current - amount as u32;
        self.items[index].quantity = remaining;
        tracing::trace!(id, remaining, "decremented item");
        RemoveOutcome::Decremented { remaining }
    }

    /// Remove every line
    pub fn clear(&mut self) {
        self.items.clear();
        tracing::trace!("cleared cart");
    }

    /// Capture an independent copy of the current content
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.items)
    }

    /// Replace the whole content with a copy of `snapshot`'s items
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.items = snapshot.to_items();
    }

    /// Lines in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line totals
    pub fn total(&self) -> Money {
        self.items.iter().map(Item::line_total).sum()
    }

    /// Sum of all quantities
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}
