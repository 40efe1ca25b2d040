//! Wallet amounts in integer minor units (cents).

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Minor units per major currency unit.
const MINOR_PER_MAJOR: i64 = 100;

/// Errors converting a major-unit amount into minor units.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyError {
    #[error("amount is not a decimal number")]
    NotANumber,
    #[error("amount is negative")]
    Negative,
    #[error("amount is out of range")]
    OutOfRange,
}

/// A signed amount of minor currency units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MinorUnits(pub i64);

impl MinorUnits {
    pub const ZERO: Self = Self(0);

    /// Convert a major-unit decimal (e.g. `25.50`) to minor units, rounding
    /// half away from zero. Exact for inputs with at most two decimals.
    pub fn from_major(amount: Decimal) -> Result<Self, MoneyError> {
        amount
            .checked_mul(Decimal::from(MINOR_PER_MAJOR))
            .map(|scaled| scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|rounded| rounded.to_i64())
            .map(Self)
            .ok_or(MoneyError::OutOfRange)
    }

    /// Parse a non-negative major-unit amount as typed into a form (`"10.00"`).
    pub fn parse_deposit(input: &str) -> Result<Self, MoneyError> {
        let amount = Decimal::from_str(input.trim()).map_err(|_| MoneyError::NotANumber)?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::Negative);
        }
        Self::from_major(amount)
    }

    pub fn get(self) -> i64 {
        self.0
    }

    /// Major-unit representation with two decimals, e.g. `2550` → `25.50`.
    pub fn to_major(self) -> Decimal {
        Decimal::new(self.0, 2)
    }
}

impl fmt::Display for MinorUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_major().fmt(f)
    }
}
