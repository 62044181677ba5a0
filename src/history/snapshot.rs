// Snapshot - Immutable capture of a cart's content

use crate::cart::item::Item;
use crate::cart::money::Money;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Unique identifier of a snapshot
pub type SnapshotId = Uuid;

/// A point-in-time copy of every cart line
///
/// Snapshots own their items and expose no mutable access, so a stored
/// snapshot cannot be changed through the cart it was taken from or
/// through anything a reader gets back from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    id: SnapshotId,
    items: Vec<Item>,
    created_at: DateTime<Utc>,
}

impl Snapshot {
    /// Deep-copy `items` into a new snapshot stamped with the current time
    pub(crate) fn capture(items: &[Item]) -> Self {
        Self {
            id: Uuid::new_v4(),
            items: items.to_vec(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> SnapshotId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Read-only view of the captured lines
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Owned copy of the captured lines
    pub fn to_items(&self) -> Vec<Item> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> Money {
        self.items.iter().map(Item::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_copies_items() {
        let mut items = vec![Item::new(1, "A", 2, Money::from_units(3))];
        let snapshot = Snapshot::capture(&items);

        items[0].quantity = 99;
        items.push(Item::new(2, "B", 1, Money::ZERO));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.items()[0].quantity, 2);
        assert_eq!(snapshot.total(), Money::from_units(6));
    }

    #[test]
    fn test_to_items_is_owned_copy() {
        let snapshot = Snapshot::capture(&[Item::new(1, "A", 2, Money::ZERO)]);
        let mut copy = snapshot.to_items();
        copy[0].quantity = 7;
        assert_eq!(snapshot.items()[0].quantity, 2);
    }

    #[test]
    fn test_snapshots_get_distinct_ids() {
        let a = Snapshot::capture(&[]);
        let b = Snapshot::capture(&[]);
        assert_ne!(a.id(), b.id());
        assert!(a.is_empty());
        assert!(b.created_at() >= a.created_at());
    }
}
