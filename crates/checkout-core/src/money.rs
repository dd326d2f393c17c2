//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  Cart systems built on floats end up sprinkling rounding calls      │
//! │  everywhere just to hide the noise.                                 │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    5 × 3999 cents = 19995 cents, exactly                            │
//! │    The only rounding left in the system is the deliberate           │
//! │    round-up when a tax amount lands between two cents.              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(3999); // $39.99
//!
//! // Arithmetic operations
//! let line = price.multiply_quantity(5);       // $199.95
//! let total = line + Money::from_cents(500);   // $204.95
//!
//! // NEVER do this:
//! // let bad = Money::from_float(39.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul};

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: leaves room for refunds/adjustments in callers
/// - **Single-field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for serialization
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let price = Money::from_cents(3999); // Represents $39.99
    /// assert_eq!(price.cents(), 3999);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let price = Money::from_major_minor(39, 99); // $39.99
    /// assert_eq!(price.cents(), 3999);
    ///
    /// let negative = Money::from_major_minor(-5, 50); // -$5.50
    /// assert_eq!(negative.cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit carries the sign.
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        // if major is negative, minor subtracts
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(3999); // $39.99
    /// let line_total = unit_price.multiply_quantity(5);
    /// assert_eq!(line_total.cents(), 19995); // $199.95
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Calculates tax at the given rate, rounded **up** to the next cent.
    ///
    /// ## Ceiling Rounding
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────┐
    /// │  $279.96 × 12.5% = $34.995  →  $35.00 (never $34.99)            │
    /// │                                                                 │
    /// │  A fractional-cent tax always rounds toward the next whole      │
    /// │  cent. This is the contract receipts are reconciled against;    │
    /// │  do not swap in half-up or banker's rounding.                   │
    /// └─────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Implementation
    /// Integer math in i128: `ceil(cents × bps / 10000)`, via
    /// floor-division plus one when a remainder exists. Correct for
    /// negative amounts too (ceil(-0.5) = 0).
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    /// use checkout_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(27996);       // $279.96
    /// let rate = TaxRate::from_percentage(12.5);     // 1250 bps
    /// assert_eq!(subtotal.calculate_tax(rate).cents(), 3500); // $35.00
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 to prevent overflow on large amounts
        let numerator = self.0 as i128 * rate.bps() as i128;
        let floor = numerator.div_euclid(10000);
        let tax_cents = if numerator.rem_euclid(10000) != 0 {
            floor + 1
        } else {
            floor
        };
        Money::from_cents(tax_cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and log output. Callers handle localized
/// display themselves.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(3999);
        assert_eq!(money.cents(), 3999);
        assert_eq!(money.dollars(), 39);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(39, 99);
        assert_eq!(money.cents(), 3999);

        let whole = Money::from_major_minor(5, 0);
        assert_eq!(whole.cents(), 500);

        // minor subtracts when major is negative
        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.cents(), 1500);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(3999);
        let line_total = unit_price.multiply_quantity(5);
        assert_eq!(line_total.cents(), 19995);
    }

    #[test]
    fn test_tax_exact() {
        // $10.00 at 10% = $1.00, no rounding needed
        let amount = Money::from_cents(1000);
        let rate = TaxRate::from_bps(1000); // 10%
        assert_eq!(amount.calculate_tax(rate).cents(), 100);
    }

    #[test]
    fn test_tax_rounds_up() {
        // $279.96 at 12.5% = $34.995 → $35.00
        let amount = Money::from_cents(27996);
        let rate = TaxRate::from_percentage(12.5);
        assert_eq!(amount.calculate_tax(rate).cents(), 3500);

        // $10.00 at 8.25% = $0.825 → $0.83
        let amount = Money::from_cents(1000);
        let rate = TaxRate::from_bps(825);
        assert_eq!(amount.calculate_tax(rate).cents(), 83);

        // one cent at 12.5% = $0.00125 → still a whole cent
        let amount = Money::from_cents(1);
        let rate = TaxRate::from_percentage(12.5);
        assert_eq!(amount.calculate_tax(rate).cents(), 1);
    }

    #[test]
    fn test_tax_zero_rate() {
        let amount = Money::from_cents(19995);
        assert_eq!(amount.calculate_tax(TaxRate::zero()).cents(), 0);
    }

    #[test]
    fn test_tax_negative_amount() {
        // ceil(-0.5 cents) = 0; ceil(-12.5 cents) = -12
        let amount = Money::from_cents(-100);
        let rate = TaxRate::from_percentage(12.5);
        assert_eq!(amount.calculate_tax(rate).cents(), -12);
    }
}
