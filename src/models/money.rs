//! Money type for representing currency amounts
//!
//! Internally stores amounts in centavos (i64) to avoid floating-point
//! precision issues. On the wire, amounts are plain JSON numbers in
//! currency units, matching the persisted list layout; deserialization
//! rejects negative and non-finite values so a bad amount can never be
//! adopted from storage.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as centavos (hundredths of a real)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from centavos
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in centavos
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole reais portion (truncated toward zero)
    pub const fn reais(&self) -> i64 {
        self.0 / 100
    }

    /// Get the centavos portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a non-negative amount from entry-form input
    ///
    /// Accepts formats: "49,90" (comma decimal), "49.90", "1500",
    /// "R$ 49,90". Negative amounts are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let s = s.strip_prefix("R$").unwrap_or(s).trim_start();

        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }
        if s.starts_with('-') {
            return Err(MoneyParseError::Negative(s.to_string()));
        }

        // The entry form uses a comma as the decimal separator
        let normalized = s.replace(',', ".");

        let cents = if let Some((whole, frac)) = normalized.split_once('.') {
            if frac.contains('.') || !frac.chars().all(|c| c.is_ascii_digit()) {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }

            let reais: i64 = whole
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

            // Pad or truncate centavos to 2 digits
            let frac_cents: i64 = match frac.len() {
                0 => 0,
                1 => {
                    frac.parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => frac[..2]
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            reais * 100 + frac_cents
        } else {
            normalized
                .parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                * 100
        };

        if cents < 0 {
            return Err(MoneyParseError::Negative(s.to_string()));
        }

        Ok(Self(cents))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(
            f,
            "{}R$ {},{:02}",
            sign,
            group_thousands(self.reais().abs()),
            self.cents_part()
        )
    }
}

/// Group whole reais with a dot every three digits ("1234567" -> "1.234.567")
fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// Wire format: a JSON number in currency units. Whole amounts serialize
// as integers, fractional amounts as two-decimal floats.

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_i64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.0 as f64 / 100.0)
        }
    }
}

struct MoneyVisitor;

impl Visitor<'_> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a finite non-negative number of currency units")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Money, E> {
        if value > (i64::MAX / 100) as u64 {
            return Err(E::custom(format!("amount out of range: {}", value)));
        }
        Ok(Money((value as i64) * 100))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Money, E> {
        if value < 0 {
            return Err(E::custom(format!("amount must not be negative: {}", value)));
        }
        self.visit_u64(value as u64)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Money, E> {
        if !value.is_finite() {
            return Err(E::custom("amount must be a finite number"));
        }
        if value < 0.0 {
            return Err(E::custom(format!("amount must not be negative: {}", value)));
        }
        let cents = (value * 100.0).round();
        if cents > i64::MAX as f64 {
            return Err(E::custom(format!("amount out of range: {}", value)));
        }
        Ok(Money(cents as i64))
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    Negative(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
            MoneyParseError::Negative(s) => write!(f, "Amount must not be negative: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
