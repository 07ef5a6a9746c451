//! # Store
//!
//! Owns the product catalog and executes multi-line orders.
//!
//! ## Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store::order(&[OrderLine])                           │
//! │                                                                         │
//! │  Phase 1: VALIDATE (read only)                                          │
//! │  ├── quantity > 0?                      ── no ──► ValidationError       │
//! │  ├── product in this store (by id)?     ── no ──► ProductNotFound       │
//! │  ├── product active?                    ── no ──► ProductInactive       │
//! │  ├── Σ requested for product ≤ stock?   ── no ──► InsufficientStock     │
//! │  └── running total fits in Money?       ── no ──► AmountOverflow        │
//! │           │                                                             │
//! │           ▼ every line passed                                           │
//! │  Phase 2: EXECUTE                                                       │
//! │  └── product.buy(qty) for each line, in order                           │
//! │                                                                         │
//! │  Any failure in phase 1 leaves every product exactly as it was.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Requested quantities are summed per product before the stock check, so an
//! order that lists the same product twice cannot pass validation and then
//! run out of stock halfway through execution.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::product::{Product, ProductId};
use crate::validation::validate_quantity;

/// One line of an order: which product, and how many units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: i64,
}

impl OrderLine {
    pub fn new(product_id: ProductId, quantity: i64) -> Self {
        OrderLine {
            product_id,
            quantity,
        }
    }
}

/// An in-memory product catalog.
///
/// Insertion order is preserved; the menu numbers products by their
/// position among the active ones.
#[derive(Debug, Default)]
pub struct Store {
    products: Vec<Product>,
}

impl Store {
    pub fn new(products: Vec<Product>) -> Self {
        Store { products }
    }

    /// Appends a product and returns its id.
    pub fn add_product(&mut self, product: Product) -> ProductId {
        let id = product.id();
        self.products.push(product);
        id
    }

    /// Removes a product by identity and hands it back.
    ///
    /// ## Errors
    /// `ProductNotFound` if no product with this id is in the store.
    pub fn remove_product(&mut self, id: ProductId) -> CoreResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id() == id)
            .ok_or(CoreError::ProductNotFound(id))?;
        Ok(self.products.remove(index))
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Mutable access for restocking and toggling activation.
    pub fn get_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id() == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Sum of stock over active products. Inactive products count as zero.
    ///
    /// Saturates at `i64::MAX`.
    pub fn total_quantity(&self) -> i64 {
        self.products
            .iter()
            .filter(|p| p.is_active())
            .map(Product::quantity)
            .fold(0i64, i64::saturating_add)
    }

    /// Active products, in insertion order.
    pub fn active_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_active()).collect()
    }

    /// Validates every line, then buys every line. Returns the order total.
    ///
    /// All-or-nothing: if any line fails validation, no product changes.
    /// An empty order is valid and costs nothing.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::{Money, OrderLine, Product, Store};
    ///
    /// let a = Product::new("A", Money::from_major_minor(10, 0), 5).unwrap();
    /// let a_id = a.id();
    /// let mut store = Store::new(vec![a]);
    ///
    /// assert_eq!(store.order(&[OrderLine::new(a_id, 3)]).unwrap(), Money::from_major_minor(30, 0));
    /// assert!(store.order(&[OrderLine::new(a_id, 10)]).is_err());
    /// assert_eq!(store.get(a_id).unwrap().quantity(), 2);
    /// ```
    pub fn order(&mut self, lines: &[OrderLine]) -> CoreResult<Money> {
        let total = self.validate_order(lines)?;

        for line in lines {
            let product = self
                .get_mut(line.product_id)
                .ok_or(CoreError::ProductNotFound(line.product_id))?;
            product.buy(line.quantity)?;
        }
        Ok(total)
    }

    /// Checks every line against the stock it would leave behind and returns
    /// the order total. Touches nothing.
    fn validate_order(&self, lines: &[OrderLine]) -> CoreResult<Money> {
        let mut requested: HashMap<ProductId, i64> = HashMap::new();
        let mut total = Money::zero();

        for line in lines {
            validate_quantity(line.quantity)?;
            let product = self
                .get(line.product_id)
                .ok_or(CoreError::ProductNotFound(line.product_id))?;

            let wanted = requested.entry(line.product_id).or_insert(0);
            *wanted = wanted.saturating_add(line.quantity);
            product.quote(*wanted)?;

            let charge = product.quote(line.quantity)?;
            total = total
                .checked_add(charge)
                .ok_or_else(|| CoreError::AmountOverflow {
                    what: "order total".to_string(),
                })?;
        }
        Ok(total)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
