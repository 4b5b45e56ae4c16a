// src/money.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;
use thiserror::Error;

pub type AmountValue = i64;

/// Whole won. There is no minor unit, so no rounding ever happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(AmountValue);

impl Amount {
    pub const fn new(value: AmountValue) -> Self {
        Amount(value)
    }
}

impl From<AmountValue> for Amount {
    fn from(value: AmountValue) -> Self {
        Amount(value)
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, other: Self) -> Self::Output {
        Amount(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        if self.0 < 0 {
            write!(f, "-")?;
        }
        write!(f, "{}원", grouped)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount format: empty")]
    Empty,

    #[error("Invalid amount value: {0}")]
    InvalidValue(String),
}

impl FromStr for Amount {
    type Err = MoneyError;

    /// Accepts both `150000` and the display form `150,000원`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let trimmed = trimmed.strip_suffix('원').unwrap_or(trimmed).trim_end();
        if trimmed.is_empty() {
            return Err(MoneyError::Empty);
        }

        let plain: String = trimmed.chars().filter(|c| *c != ',').collect();
        plain
            .parse::<AmountValue>()
            .map(Amount)
            .map_err(|_| MoneyError::InvalidValue(s.to_string()))
    }
}
