//! Money value object
//!
//! Fines are tracked as fixed-point amounts in hundredths of a currency unit
//! so that balances never drift the way floating point sums do. Amounts are
//! unsigned: a balance can never go negative.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Non-negative amount of money, stored in minor units (1/100)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Zero amount
    pub const ZERO: Money = Money(0);

    /// Minor units per whole currency unit
    pub const MINOR_PER_UNIT: u64 = 100;

    /// Amount from whole currency units (`Money::from_units(10)` is 10.00)
    pub const fn from_units(units: u64) -> Self {
        Self(units.saturating_mul(Self::MINOR_PER_UNIT))
    }

    /// Amount from minor units (`Money::from_minor(1050)` is 10.50)
    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    pub const fn minor(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Subtract, or `None` if `other` exceeds `self`
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Multiply by a count (e.g. days overdue)
    pub fn saturating_mul(self, times: u64) -> Money {
        Money(self.0.saturating_mul(times))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0 / Self::MINOR_PER_UNIT,
            self.0 % Self::MINOR_PER_UNIT
        )
    }
}

/// Error parsing a money amount
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid amount '{input}': expected a non-negative number with at most two decimals")]
pub struct ParseMoneyError {
    input: String,
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMoneyError {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        let (whole, frac) = match trimmed.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (trimmed, ""),
        };
        if whole.is_empty() || frac.len() > 2 {
            return Err(err());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(err());
        }

        let units: u64 = whole.parse().map_err(|_| err())?;
        let minor: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| err())? * 10,
            _ => frac.parse().map_err(|_| err())?,
        };

        units
            .checked_mul(Self::MINOR_PER_UNIT)
            .and_then(|m| m.checked_add(minor))
            .map(Money)
            .ok_or_else(err)
    }
}
