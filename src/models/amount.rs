//! Amount type for expense values
//!
//! Expenses are recorded as whole, non-negative units of the currency. Input is
//! restricted to decimal digits: no sign, no decimal point, no currency symbol.

use std::fmt;

/// A non-negative whole-unit expense amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(u64);

impl Amount {
    /// Create an amount from whole units
    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    /// Get the amount in whole units
    pub const fn units(&self) -> u64 {
        self.0
    }

    /// Parse an amount made only of ASCII digits
    ///
    /// Surrounding whitespace is ignored; anything else (empty input, signs,
    /// decimal points, currency symbols) is rejected.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let s = s.trim();

        if s.is_empty() {
            return Err(AmountParseError::Empty);
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountParseError::NotDigits(s.to_string()));
        }

        s.parse::<u64>()
            .map(Self)
            .map_err(|_| AmountParseError::TooLarge(s.to_string()))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Empty,
    NotDigits(String),
    TooLarge(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::Empty => write!(f, "Amount is empty"),
            AmountParseError::NotDigits(s) => write!(f, "Amount must contain only digits: {}", s),
            AmountParseError::TooLarge(s) => write!(f, "Amount is too large: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}
