//! # Domain Types
//!
//! Core domain types used throughout checkout.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌──────────────────┐        ┌──────────────────┐                  │
//! │  │     Product      │        │     TaxRate      │                  │
//! │  │  ──────────────  │        │  ──────────────  │                  │
//! │  │  id (business)   │        │  bps (u32)       │                  │
//! │  │  name            │        │  1250 = 12.5%    │                  │
//! │  │  price (Money)   │        │                  │                  │
//! │  └──────────────────┘        └──────────────────┘                  │
//! │                                                                     │
//! │  Cart and CartItem live in the `cart` module next to the store     │
//! │  that owns them.                                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1250 bps = 12.5%. Integer bps keep the tax formula in pure integer
/// math; percentages only appear at construction and display time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::types::TaxRate;
    ///
    /// assert_eq!(TaxRate::from_percentage(12.5).bps(), 1250);
    /// ```
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Immutable once loaded into a catalog: the catalog hands out clones,
/// and cart items freeze the price they saw at first addition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Business identifier - unique, non-empty.
    pub id: String,

    /// Display name shown to the shopper.
    pub name: String,

    /// Unit price in cents.
    pub price: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
