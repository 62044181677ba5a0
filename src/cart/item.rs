// Item - One line of a cart

use crate::cart::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a cart line (typically a product code)
pub type ItemId = u32;

/// A single cart line
///
/// Two items with the same `id` are the same logical line. The cart merges
/// them instead of holding duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Identity key
    pub id: ItemId,

    /// Display label, fixed at first insertion
    pub label: String,

    /// Units of this line (always > 0 while held by a cart)
    pub quantity: u32,

    /// Price of one unit, fixed at first insertion
    pub unit_price: Money,
}

impl Item {
    pub fn new(id: ItemId, label: impl Into<String>, quantity: u32, unit_price: Money) -> Self {
        Self {
            id,
            label: label.into(),
            quantity,
            unit_price,
        }
    }

    /// `quantity × unit_price`
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} x{} @ {} = {}",
            self.id,
            self.label,
            self.quantity,
            self.unit_price,
            self.line_total()
        )
    }
}
