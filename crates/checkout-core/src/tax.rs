//! # Tax Calculation
//!
//! The tax seam between the cart store and whatever tax policy applies.
//!
//! ## The Seam
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  CartStore ──► dyn TaxCalculator ──┬──► FlatRateTax (this crate)   │
//! │                                    └──► jurisdiction-aware, ...    │
//! │                                                                     │
//! │  compute_tax(subtotal) → tax, already rounded up to a whole cent.  │
//! │  The store just adds it to the subtotal.                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::money::Money;
use crate::types::TaxRate;

// =============================================================================
// TaxCalculator Trait
// =============================================================================

/// Computes the tax owed on a cart subtotal.
pub trait TaxCalculator: Send + Sync {
    /// Returns the tax for `subtotal`, rounded up to a whole cent.
    ///
    /// No bounds checking: a negative subtotal flows through the same
    /// formula (callers are expected to pass non-negative amounts).
    fn compute_tax(&self, subtotal: Money) -> Money;
}

// =============================================================================
// Flat-Rate Tax
// =============================================================================

/// A single fixed percentage applied to the whole subtotal.
///
/// ## Example
/// ```rust
/// use checkout_core::{FlatRateTax, Money, TaxCalculator, TaxRate};
///
/// let tax = FlatRateTax::new(TaxRate::from_percentage(12.5));
/// // $279.96 × 12.5% = $34.995 → rounds up to $35.00
/// assert_eq!(tax.compute_tax(Money::from_cents(27996)).cents(), 3500);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FlatRateTax {
    rate: TaxRate,
}

impl FlatRateTax {
    /// Creates a calculator with the given rate, fixed for its lifetime.
    pub const fn new(rate: TaxRate) -> Self {
        FlatRateTax { rate }
    }

    /// The configured rate.
    pub const fn rate(&self) -> TaxRate {
        self.rate
    }
}

impl TaxCalculator for FlatRateTax {
    fn compute_tax(&self, subtotal: Money) -> Money {
        subtotal.calculate_tax(self.rate)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_rate() {
        let tax = FlatRateTax::new(TaxRate::from_percentage(12.5));
        assert_eq!(tax.rate().bps(), 1250);

        // exact: $100.00 × 12.5% = $12.50
        assert_eq!(tax.compute_tax(Money::from_cents(10000)).cents(), 1250);

        // fractional cent rounds up: $279.96 × 12.5% = $34.995 → $35.00
        assert_eq!(tax.compute_tax(Money::from_cents(27996)).cents(), 3500);
    }

    #[test]
    fn test_zero_rate() {
        let tax = FlatRateTax::new(TaxRate::zero());
        assert_eq!(tax.compute_tax(Money::from_cents(19995)), Money::zero());
    }

    #[test]
    fn test_zero_subtotal() {
        let tax = FlatRateTax::new(TaxRate::from_percentage(12.5));
        assert_eq!(tax.compute_tax(Money::zero()), Money::zero());
    }
}
