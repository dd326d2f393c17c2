//! # checkout-core: In-Memory Shopping Cart Logic
//!
//! This crate is the **heart** of checkout. It owns the active carts and
//! the one operation that mutates them, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      checkout architecture                          │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │        Surfaces (HTTP handlers, CLI, ... not in this repo)    │ │
//! │  └────────────────────────────┬──────────────────────────────────┘ │
//! │                               │ add_product(cart, product, qty)    │
//! │  ┌────────────────────────────▼──────────────────────────────────┐ │
//! │  │              ★ checkout-core (THIS CRATE) ★                   │ │
//! │  │                                                               │ │
//! │  │   ┌─────────┐  ┌─────────┐  ┌─────────────┐  ┌────────────┐  │ │
//! │  │   │  money  │  │  types  │  │    cart     │  │ validation │  │ │
//! │  │   │  Money  │  │ Product │  │  CartStore  │  │   checks   │  │ │
//! │  │   │ TaxRate │  │         │  │ Cart, Item  │  │            │  │ │
//! │  │   └─────────┘  └─────────┘  └─────────────┘  └────────────┘  │ │
//! │  │                                                               │ │
//! │  │   ┌─────────────────────┐  ┌──────────────────────────────┐  │ │
//! │  │   │  catalog (trait)    │  │  tax (trait)                 │  │ │
//! │  │   │  StaticCatalog      │  │  FlatRateTax                 │  │ │
//! │  │   └─────────────────────┘  └──────────────────────────────┘  │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • SYNCHRONOUS             │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer-cent arithmetic (no floating point!)
//! - [`types`] - Domain types ([`Product`], [`TaxRate`])
//! - [`error`] - Domain error types
//! - [`validation`] - Input-boundary precondition checks
//! - [`catalog`] - Product lookup seam ([`Catalog`] trait, [`StaticCatalog`])
//! - [`tax`] - Tax computation seam ([`TaxCalculator`] trait, [`FlatRateTax`])
//! - [`cart`] - The cart store and its `add_product` mutator
//!
//! ## Design Principles
//!
//! 1. **Integer money**: all monetary values are cents (i64), never floats
//! 2. **One mutation path**: [`CartStore::add_product`] is the sole way
//!    cart state changes; there is no raw map access
//! 3. **Frozen prices**: a line item keeps the unit price from its first
//!    addition, regardless of later catalog changes
//! 4. **Explicit errors**: all failures are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use checkout_core::{CartStore, FlatRateTax, Money, Product, StaticCatalog, TaxRate};
//!
//! let catalog = StaticCatalog::new([Product {
//!     id: "Dove Soap".into(),
//!     name: "Dove Soap".into(),
//!     price: Money::from_cents(3999),
//! }]);
//! let store = CartStore::new(Arc::new(catalog), Arc::new(FlatRateTax::new(TaxRate::zero())));
//!
//! let cart = store.add_product("", "Dove Soap", 5).unwrap();
//! assert_eq!(cart.total.cents(), 19995); // $199.95
//!
//! // the generated id addresses the same cart from now on
//! let cart = store.add_product(&cart.id, "Dove Soap", 3).unwrap();
//! assert_eq!(cart.items[0].quantity, 8);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use checkout_core::Money` instead of
// `use checkout_core::money::Money`

pub use cart::{Cart, CartItem, CartStore};
pub use catalog::{Catalog, StaticCatalog};
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use tax::{FlatRateTax, TaxCalculator};
pub use types::{Product, TaxRate};
