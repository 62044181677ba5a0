// HistoryManager - Manages undo/redo stacks of cart snapshots

use crate::cart::aggregate::Cart;
use crate::history::snapshot::Snapshot;
use std::collections::VecDeque;

/// Default maximum number of snapshots to keep in history
pub const DEFAULT_CAPACITY: usize = 10;

/// Errors raised when building a history manager
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("history capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),
}

/// Result of [`HistoryManager::undo`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum UndoOutcome {
    Applied,
    NothingToUndo,
}

/// Result of [`HistoryManager::redo`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum RedoOutcome {
    Applied,
    NothingToRedo,
}

/// Manages snapshot recording and undo/redo functionality
///
/// The HistoryManager maintains two stacks:
/// - Past: snapshots of states that have been reached (most recent at the back)
/// - Future: snapshots that have been undone and can be redone (most recent at the back)
///
/// Once anything has been recorded, the back of `past` is the snapshot of
/// the cart's current state. Undo therefore needs at least two entries: the
/// current one moves to `future` and the one below it is restored.
///
/// When a new snapshot is recorded:
/// 1. Push it onto the past stack
/// 2. Evict the oldest entry if the capacity is exceeded
/// 3. Clear the future stack (we're on a new timeline)
#[derive(Debug)]
pub struct HistoryManager {
    /// Reached states, oldest at the front
    past: VecDeque<Snapshot>,

    /// Undone states, next redo at the back
    future: VecDeque<Snapshot>,

    /// Maximum number of snapshots in `past`
    capacity: usize,
}

impl HistoryManager {
    /// Create a new HistoryManager keeping at most `capacity` snapshots
    ///
    /// # Errors
    /// Returns [`HistoryError::InvalidCapacity`] if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self, HistoryError> {
        if capacity < 1 {
            return Err(HistoryError::InvalidCapacity(capacity));
        }

        Ok(Self::with_checked_capacity(capacity))
    }

    /// Create a new HistoryManager with [`DEFAULT_CAPACITY`]
    pub fn with_default_capacity() -> Self {
        Self::with_checked_capacity(DEFAULT_CAPACITY)
    }

    /// `capacity` must already be >= 1
    fn with_checked_capacity(capacity: usize) -> Self {
        Self {
            past: VecDeque::with_capacity(capacity + 1),
            future: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record the cart's current state
    ///
    /// Every call pushes, even if the state matches the current snapshot.
    pub fn record(&mut self, cart: &Cart) {
        self.past.push_back(cart.snapshot());

        // Trim history if needed, dropping the oldest entry only
        let mut evicted = 0usize;
        while self.past.len() > self.capacity {
            self.past.pop_front();
            evicted += 1;
        }

        // Clear future stack (we're on a new timeline now)
        let discarded = self.future.len();
        self.future.clear();

        tracing::debug!(
            depth = self.past.len(),
            evicted,
            discarded,
            "recorded snapshot"
        );
    }

    /// Step back to the previous recorded state
    ///
    /// Moves the current snapshot to the future stack and restores the cart
    /// from the one below it. With fewer than two snapshots this does nothing.
    pub fn undo(&mut self, cart: &mut Cart) -> UndoOutcome {
        if self.past.len() < 2 {
            tracing::debug!(depth = self.past.len(), "nothing to undo");
            return UndoOutcome::NothingToUndo;
        }

        let Some(current) = self.past.pop_back() else {
            return UndoOutcome::NothingToUndo;
        };
        self.future.push_back(current);

        if let Some(previous) = self.past.back() {
            cart.restore(previous);
        }

        tracing::debug!(
            depth = self.past.len(),
            redo_depth = self.future.len(),
            "undo applied"
        );
        UndoOutcome::Applied
    }

    /// Step forward to the most recently undone state
    pub fn redo(&mut self, cart: &mut Cart) -> RedoOutcome {
        let Some(next) = self.future.pop_back() else {
            tracing::debug!("nothing to redo");
            return RedoOutcome::NothingToRedo;
        };

        cart.restore(&next);
        self.past.push_back(next);

        tracing::debug!(
            depth = self.past.len(),
            redo_depth = self.future.len(),
            "redo applied"
        );
        RedoOutcome::Applied
    }

    /// Check if an undo would do anything
    pub fn can_undo(&self) -> bool {
        self.past.len() >= 2
    }

    /// Check if a redo would do anything
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of snapshots in the past stack
    pub fn history_depth(&self) -> usize {
        self.past.len()
    }

    /// Number of snapshots in the future stack
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of the current state, if anything was recorded
    pub fn current(&self) -> Option<&Snapshot> {
        self.past.back()
    }

    /// Retained past snapshots, oldest first
    pub fn past(&self) -> impl DoubleEndedIterator<Item = &Snapshot> + ExactSizeIterator {
        self.past.iter()
    }

    /// Drop all history
    pub fn reset(&mut self) {
        self.past.clear();
        self.future.clear();
        tracing::info!("history reset");
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}
