use crate::Result;

use std::{
    fmt,
    iter::Sum,
    ops::{Add, Sub},
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Negative amounts not supported: {0:?}")]
    Negative(String),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Whole-unit amount of money. Never negative.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub u64);

impl Money {
    pub const ZERO: Self = Self(0);

    pub fn parse(string: String) -> Result<Self> {
        let trimmed = string.trim();

        if trimmed.starts_with('-') {
            Err(MoneyError::Negative(string.clone()))?
        }

        let value: u64 = trimmed
            .parse()
            .map_err(|_| MoneyError::Parse("Expected a whole number", string.clone()))?;

        return Ok(Money(value));
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        return Self(self.0 + other.0);
    }
}

/// Callers check `other <= self` first, the subtraction never wraps.
impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        return Self(self.0 - other.0);
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        return iter.fold(Money::ZERO, |acc, amount| acc + *amount);
    }
}
