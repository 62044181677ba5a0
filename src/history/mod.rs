// Snapshot history for undo/redo
//
// Architecture:
// - Snapshot: immutable deep copy of a cart plus its creation time
// - HistoryManager: bounded past stack and unbounded future stack of snapshots
//
// The caller mutates the cart first and then records. Undo and redo restore
// whole snapshots; nothing here replays individual edits.

pub mod manager;
pub mod snapshot;

pub use manager::{DEFAULT_CAPACITY, HistoryError, HistoryManager, RedoOutcome, UndoOutcome};
pub use snapshot::{Snapshot, SnapshotId};
