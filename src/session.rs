// Session - A cart paired with its history
//
// The cart and the history manager are one unit: a mutation and the record
// that follows it must happen together, otherwise the top of the past stack
// stops matching the cart. Session enforces that pairing for single-threaded
// callers; SharedSession does it across threads with one lock.

use crate::cart::aggregate::Cart;
use crate::config::SessionConfig;
use crate::history::manager::{HistoryError, HistoryManager, RedoOutcome, UndoOutcome};
use std::sync::{Arc, Mutex, MutexGuard};

/// Session error types
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    History(#[from] HistoryError),

    #[error("session lock poisoned")]
    Poisoned,
}

/// Owns one cart and its history
#[derive(Debug)]
pub struct Session {
    cart: Cart,
    history: HistoryManager,
}

impl Session {
    /// Start a session with an empty cart recorded as the baseline
    pub fn new(capacity: usize) -> Result<Self, SessionError> {
        let cart = Cart::new();
        let mut history = HistoryManager::new(capacity)?;
        history.record(&cart);
        Ok(Self { cart, history })
    }

    pub fn from_config(config: &SessionConfig) -> Result<Self, SessionError> {
        Self::new(config.history_capacity)
    }

    /// Run a mutation, then record the resulting state
    pub fn apply<R>(&mut self, mutate: impl FnOnce(&mut Cart) -> R) -> R {
        let result = mutate(&mut self.cart);
        self.history.record(&self.cart);
        result
    }

    /// Run a mutation and record only if `changed` says it did something
    ///
    /// Used for operations with a no-op outcome (unknown id, zero quantity)
    /// so they don't push a duplicate of the current state.
    pub fn apply_if_changed<R>(
        &mut self,
        mutate: impl FnOnce(&mut Cart) -> R,
        changed: impl FnOnce(&R) -> bool,
    ) -> R {
        let result = mutate(&mut self.cart);
        if changed(&result) {
            self.history.record(&self.cart);
        }
        result
    }

    pub fn undo(&mut self) -> UndoOutcome {
        self.history.undo(&mut self.cart)
    }

    pub fn redo(&mut self) -> RedoOutcome {
        self.history.redo(&mut self.cart)
    }

    /// Empty the cart and start a fresh history from it
    pub fn reset(&mut self) {
        self.cart.clear();
        self.history.reset();
        self.history.record(&self.cart);
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }
}

/// A session shared between threads
///
/// Every method takes the lock once, so a mutation and its record can never
/// interleave with another caller's.
#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<Session>>,
}

impl SharedSession {
    pub fn new(capacity: usize) -> Result<Self, SessionError> {
        Ok(Self::from(Session::new(capacity)?))
    }

    fn lock(&self) -> Result<MutexGuard<'_, Session>, SessionError> {
        self.inner.lock().map_err(|_| SessionError::Poisoned)
    }

    /// Mutate and record under a single lock acquisition
    pub fn apply<R>(&self, mutate: impl FnOnce(&mut Cart) -> R) -> Result<R, SessionError> {
        Ok(self.lock()?.apply(mutate))
    }

    pub fn undo(&self) -> Result<UndoOutcome, SessionError> {
        Ok(self.lock()?.undo())
    }

    pub fn redo(&self) -> Result<RedoOutcome, SessionError> {
        Ok(self.lock()?.redo())
    }

    /// Read the cart while holding the lock
    pub fn with_cart<R>(&self, read: impl FnOnce(&Cart) -> R) -> Result<R, SessionError> {
        Ok(read(self.lock()?.cart()))
    }

    /// `(history_depth, redo_depth)` observed atomically
    pub fn depths(&self) -> Result<(usize, usize), SessionError> {
        let session = self.lock()?;
        Ok((
            session.history().history_depth(),
            session.history().redo_depth(),
        ))
    }
}

impl From<Session> for SharedSession {
    fn from(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }
}
