//! # Cart Store
//!
//! Owns every active cart and the single operation that mutates them.
//!
//! ## Add-Product Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │            add_product(cart_id, product_id, quantity)              │
//! │                                                                     │
//! │  validate inputs ──── fail ──► PreconditionFailed (store untouched)│
//! │       │                                                             │
//! │  catalog.lookup ───── miss ──► ProductNotFound    (store untouched)│
//! │       │               error ─► propagated          (store untouched)│
//! │       ▼                                                             │
//! │  ┌── lock ─────────────────────────────────────────────────────┐   │
//! │  │  resolve cart (or create with fresh UUID)                   │   │
//! │  │  merge into existing item, or append with frozen price      │   │
//! │  │  recompute subtotal, tax, total from scratch                │   │
//! │  └── unlock ───────────────────────────────────────────────────┘   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Ok(Cart)  - post-mutation snapshot, carries the cart's id         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The cart map sits behind one `Mutex`. Everything between cart
//! resolution and total recomputation runs under a single acquisition,
//! so "add one product to one cart" is atomic for concurrent callers.
//! The catalog lookup runs before the lock: a failed lookup never
//! touches the store, and a slow catalog backend does not serialize
//! unrelated cart traffic.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::tax::TaxCalculator;
use crate::types::Product;
use crate::validation::{validate_product_id, validate_quantity};

// =============================================================================
// Cart Item
// =============================================================================

/// A line item in a shopping cart.
///
/// ## Price Freezing
/// `unit_price` is a snapshot taken when the product is first added.
/// Later catalog price changes never alter an existing line item, and a
/// repeat add keeps the original snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product id this line refers to.
    pub product_id: String,

    /// Quantity in cart (always ≥ 1).
    pub quantity: u32,

    /// Unit price at time of first addition (frozen).
    pub unit_price: Money,

    /// When this item was first added.
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a line item from a product, freezing its current price.
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        CartItem {
            product_id: product.id.clone(),
            quantity,
            unit_price: product.price,
            added_at: Utc::now(),
        }
    }

    /// The line total (unit price × quantity), exact in cents.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(i64::from(self.quantity))
    }
}

// =============================================================================
// Cart
// =============================================================================

/// A shopping cart.
///
/// ## Invariants
/// - Items are unique by `product_id`; adding the same product again
///   increments the existing entry's quantity
/// - Items keep insertion order
/// - `subtotal`, `tax`, and `total` are derived: recomputed in full
///   after every mutation, never adjusted incrementally
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Store-assigned identifier (UUID v4), set at creation.
    pub id: String,

    /// Line items in insertion order.
    pub items: Vec<CartItem>,

    /// Sum of line totals, before tax.
    pub subtotal: Money,

    /// Tax on the subtotal, rounded up to a whole cent.
    pub tax: Money,

    /// Grand total: subtotal + tax.
    pub total: Money,

    /// When the cart was created.
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart with the given id.
    pub fn new(id: String) -> Self {
        Cart {
            id,
            items: Vec::new(),
            subtotal: Money::zero(),
            tax: Money::zero(),
            total: Money::zero(),
            created_at: Utc::now(),
        }
    }

    /// Merges a product into the cart.
    ///
    /// Returns `true` if an existing line was incremented, `false` if a
    /// new line was appended. The caller is responsible for recomputing
    /// totals afterwards.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> bool {
        // linear scan; carts are small
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product.id)
        {
            // saturate rather than wrap or panic on pathological repeat adds
            item.quantity = item.quantity.saturating_add(quantity);
            return true;
        }

        self.items.push(CartItem::from_product(product, quantity));
        false
    }

    /// Sum of line totals. Reading this is idempotent: without a
    /// mutation in between, repeated calls return the same value.
    pub fn compute_subtotal(&self) -> Money {
        self.items
            .iter()
            .map(CartItem::line_total)
            .fold(Money::zero(), |acc, line| acc + line)
    }

    /// Recomputes `subtotal`, `tax`, and `total` from the items.
    ///
    /// The subtotal is a whole number of cents, so adding the already
    /// rounded-up tax to it equals rounding up `subtotal + raw_tax`;
    /// the two-stage rounding the totals are reconciled against is
    /// preserved.
    pub fn recalculate(&mut self, tax: &dyn TaxCalculator) {
        self.subtotal = self.compute_subtotal();
        self.tax = tax.compute_tax(self.subtotal);
        self.total = self.subtotal + self.tax;
    }

    /// Number of distinct line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Cart Store
// =============================================================================

/// Owns the active carts and funnels every mutation through
/// [`CartStore::add_product`].
///
/// ## Lifecycle
/// Carts live in process memory for the lifetime of the store; there
/// is no persistence and no expiry. Dropping the store drops the carts.
///
/// ## Why `Mutex` and not `RwLock`?
/// The only operation is a read-modify-write; reads that would benefit
/// from shared access are rare and cheap.
pub struct CartStore {
    carts: Mutex<HashMap<String, Cart>>,
    catalog: Arc<dyn Catalog>,
    tax: Arc<dyn TaxCalculator>,
}

impl CartStore {
    /// Creates an empty store over the given collaborators.
    pub fn new(catalog: Arc<dyn Catalog>, tax: Arc<dyn TaxCalculator>) -> Self {
        CartStore {
            carts: Mutex::new(HashMap::new()),
            catalog,
            tax,
        }
    }

    /// Adds `quantity` of a product to a cart and returns the
    /// post-mutation cart snapshot.
    ///
    /// ## Behavior
    /// - Unknown or empty `cart_id`: a new cart is created under a
    ///   fresh UUID. The caller-supplied id is only ever used for
    ///   lookup, never as a storage key - read the returned cart's
    ///   `id` to address the same cart again.
    /// - Product already in the cart: its quantity is incremented and
    ///   its frozen unit price kept.
    /// - Otherwise: a new line is appended at the current catalog price.
    ///
    /// ## Errors
    /// - [`CoreError::PreconditionFailed`] for an empty product id or
    ///   zero quantity
    /// - [`CoreError::ProductNotFound`] when the catalog has no entry
    /// - any error the catalog backend surfaces, unchanged
    ///
    /// A failed call never creates a cart and never mutates one.
    pub fn add_product(
        &self,
        cart_id: &str,
        product_id: &str,
        quantity: u32,
    ) -> CoreResult<Cart> {
        validate_product_id(product_id)?;
        validate_quantity(quantity)?;

        let product = self
            .catalog
            .lookup(product_id)?
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

        // One acquisition covers resolve, merge, and recompute.
        let mut carts = self.carts.lock().expect("cart store mutex poisoned");

        let key = if carts.contains_key(cart_id) {
            cart_id.to_string()
        } else {
            let id = Uuid::new_v4().to_string();
            debug!(cart_id = %id, "created cart");
            id
        };

        let cart = carts
            .entry(key)
            .or_insert_with_key(|id| Cart::new(id.clone()));

        let merged = cart.add_item(&product, quantity);
        cart.recalculate(self.tax.as_ref());

        debug!(
            cart_id = %cart.id,
            product_id,
            quantity,
            merged,
            total = %cart.total,
            "added product to cart"
        );

        Ok(cart.clone())
    }

    /// Snapshot of a single cart, if it exists.
    pub fn cart(&self, cart_id: &str) -> Option<Cart> {
        self.carts
            .lock()
            .expect("cart store mutex poisoned")
            .get(cart_id)
            .cloned()
    }

    /// Number of active carts.
    pub fn cart_count(&self) -> usize {
        self.carts.lock().expect("cart store mutex poisoned").len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
