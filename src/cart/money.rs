// Money - Non-negative price stored as integer cents

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors produced when parsing a price from text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyParseError {
    #[error("empty price")]
    Empty,

    #[error("negative price: {0}")]
    Negative(String),

    #[error("invalid price: {0}")]
    Invalid(String),

    #[error("price has more than two decimal places: {0}")]
    TooPrecise(String),

    #[error("price out of range: {0}")]
    Overflow(String),
}

/// A non-negative amount of money in the smallest unit (cents)
///
/// Prices never go through floating point, so totals are exact.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Whole units, e.g. `Money::from_units(10)` is 10.00
    pub const fn from_units(units: u64) -> Self {
        Self(units.saturating_mul(100))
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Multiply by a quantity, saturating at `u64::MAX` cents
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    pub fn saturating_add(self, other: Money) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    /// Accepts `10`, `10.5`, `10.50` and `.5`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(MoneyParseError::Empty);
        }
        if text.starts_with('-') {
            return Err(MoneyParseError::Negative(text.to_string()));
        }

        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (text, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(MoneyParseError::Invalid(text.to_string()));
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(MoneyParseError::Invalid(text.to_string()));
        }
        if fraction.len() > 2 {
            return Err(MoneyParseError::TooPrecise(text.to_string()));
        }

        let units: u64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| MoneyParseError::Overflow(text.to_string()))?
        };
        let cents: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().unwrap_or(0) * 10,
            _ => fraction.parse::<u64>().unwrap_or(0),
        };

        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Money)
            .ok_or_else(|| MoneyParseError::Overflow(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_units(10).to_string(), "10.00");
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!("10".parse::<Money>().unwrap(), Money::from_cents(1000));
        assert_eq!("10.5".parse::<Money>().unwrap(), Money::from_cents(1050));
        assert_eq!("10.05".parse::<Money>().unwrap(), Money::from_cents(1005));
        assert_eq!(".5".parse::<Money>().unwrap(), Money::from_cents(50));
        assert_eq!("0".parse::<Money>().unwrap(), Money::ZERO);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!("".parse::<Money>(), Err(MoneyParseError::Empty));
        assert!(matches!(
            "-1".parse::<Money>(),
            Err(MoneyParseError::Negative(_))
        ));
        assert!(matches!(
            "1.234".parse::<Money>(),
            Err(MoneyParseError::TooPrecise(_))
        ));
        assert!(matches!(
            "abc".parse::<Money>(),
            Err(MoneyParseError::Invalid(_))
        ));
        assert!(matches!(
            ".".parse::<Money>(),
            Err(MoneyParseError::Invalid(_))
        ));
        assert!(matches!(
            "99999999999999999999".parse::<Money>(),
            Err(MoneyParseError::Overflow(_))
        ));
    }

    #[test]
    fn test_times_saturates() {
        assert_eq!(Money::from_cents(250).times(4), Money::from_cents(1000));
        assert_eq!(
            Money::from_cents(u64::MAX).times(2),
            Money::from_cents(u64::MAX)
        );
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_cents(100), Money::from_cents(250)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_cents(350));
    }
}
