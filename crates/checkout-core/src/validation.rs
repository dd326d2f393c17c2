//! # Validation Module
//!
//! Input-boundary checks for the cart mutator.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Runs                          │
//! │                                                                     │
//! │  add_product(cart_id, product_id, quantity)                        │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  THIS MODULE: precondition checks          ── fail → no lookup,     │
//! │       │                                      no cart created,       │
//! │       ▼                                      no mutation            │
//! │  catalog lookup ──► cart resolution ──► merge ──► recompute        │
//! │                                                                     │
//! │  The data model itself never sees a bad value: quantity is u32     │
//! │  (negatives unrepresentable) and zero is rejected here.            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Precondition Checks
// =============================================================================

/// Validates a product id supplied to `add_product`.
///
/// ## Rules
/// - Must not be empty
///
/// Whether the id actually exists is the catalog's question, not ours.
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_product_id;
///
/// assert!(validate_product_id("Dove Soap").is_ok());
/// assert!(validate_product_id("").is_err());
/// ```
pub fn validate_product_id(product_id: &str) -> CoreResult<()> {
    if product_id.is_empty() {
        return Err(CoreError::precondition("productID", "empty"));
    }
    Ok(())
}

/// Validates a quantity supplied to `add_product`.
///
/// ## Rules
/// - Must be at least 1
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_quantity;
///
/// assert!(validate_quantity(5).is_ok());
/// assert!(validate_quantity(0).is_err());
/// ```
pub fn validate_quantity(quantity: u32) -> CoreResult<()> {
    if quantity == 0 {
        return Err(CoreError::precondition("quantity", "empty"));
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("Axe Deo").is_ok());

        let err = validate_product_id("").unwrap_err();
        assert_eq!(
            err,
            CoreError::PreconditionFailed {
                attribute: "productID",
                message: "empty",
            }
        );
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(255).is_ok());

        let err = validate_quantity(0).unwrap_err();
        assert_eq!(
            err,
            CoreError::PreconditionFailed {
                attribute: "quantity",
                message: "empty",
            }
        );
    }
}
