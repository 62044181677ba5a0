// Cart aggregate
//
// The mutable state that the history engine versions:
// - Money: integer-cent prices
// - Item: one cart line (id, label, quantity, unit price)
// - Cart: insertion-ordered lines with merge-on-add semantics

pub mod aggregate;
pub mod item;
pub mod money;

pub use aggregate::{AddOutcome, Cart, RemoveOutcome};
pub use item::{Item, ItemId};
pub use money::{Money, MoneyParseError};
