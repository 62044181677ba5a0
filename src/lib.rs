// Cart History - Library exports for the shell, tests and benchmarks

pub mod cart;
pub mod config;
pub mod history;
pub mod session;
pub mod shell;

// Re-export commonly used types for convenience
pub use cart::{AddOutcome, Cart, Item, ItemId, Money, RemoveOutcome};
pub use config::{ConfigError, SessionConfig};
pub use history::{
    DEFAULT_CAPACITY, HistoryError, HistoryManager, RedoOutcome, Snapshot, SnapshotId, UndoOutcome,
};
pub use session::{Session, SessionError, SharedSession};

/// Install the stderr log subscriber used by the binaries
///
/// `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,cart_history=info"));

    // A second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
