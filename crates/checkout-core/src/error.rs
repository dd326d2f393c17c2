//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Kinds                                 │
//! │                                                                     │
//! │  PreconditionFailed  - bad input, caught before any lookup/mutation │
//! │  ProductNotFound     - catalog has no entry for the id              │
//! │  CatalogUnavailable  - the catalog backend itself failed;           │
//! │                        passed through to the caller unchanged       │
//! │                                                                     │
//! │  Every kind is recoverable by the caller (pick another product,    │
//! │  fix the input). Nothing here is logged or retried internally.     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (attribute, product id)
//! 3. Errors are enum variants, never String
//! 4. A failed call leaves the cart store untouched

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core cart errors.
///
/// These represent input violations or collaborator failures. They are
/// always returned to the caller; the core never panics on them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// An input failed validation before any lookup or mutation ran.
    ///
    /// ## When This Occurs
    /// - `add_product` called with an empty product id
    /// - `add_product` called with quantity 0
    #[error("pre-condition failed, {attribute}: {message}")]
    PreconditionFailed {
        attribute: &'static str,
        message: &'static str,
    },

    /// The catalog has no entry for the given product id.
    ///
    /// ## When This Occurs
    /// - Unknown product id
    /// - Empty catalog (every lookup misses)
    #[error("product not found: {0}")]
    ProductNotFound(String),

    /// The catalog backend itself failed.
    ///
    /// A static in-memory catalog never produces this; a remote-backed
    /// implementation surfaces its transport failures here, and the
    /// store propagates them without wrapping.
    #[error("catalog unavailable: {reason}")]
    CatalogUnavailable { reason: String },
}

impl CoreError {
    /// Shorthand for a [`CoreError::PreconditionFailed`].
    pub(crate) const fn precondition(
        attribute: &'static str,
        message: &'static str,
    ) -> Self {
        CoreError::PreconditionFailed { attribute, message }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
