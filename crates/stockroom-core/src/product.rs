//! # Product
//!
//! A single catalog entry: name, unit price, stock on hand, and whether it is
//! currently offered for sale.
//!
//! ## Activation Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Product::new ──► ACTIVE ──── buy() / set_quantity() reaches 0 ──┐     │
//! │                      ▲  │                                         │     │
//! │          activate()  │  │ deactivate()                            ▼     │
//! │                      │  ▼                                               │
//! │                    INACTIVE ◄─────────────────────────────────────┘     │
//! │                                                                         │
//! │   Restocking never re-activates on its own: set_quantity(50) on a       │
//! │   sold-out product leaves it inactive until activate() is called.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{
    validate_price, validate_product_name, validate_quantity, validate_stock_quantity,
};

// =============================================================================
// Product Id
// =============================================================================

/// Identity of a product (UUID v4).
///
/// Two products with identical names, prices and quantities are still
/// different products. Store membership is always decided by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Generates a fresh id.
    pub fn new() -> Self {
        ProductId(Uuid::new_v4())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        ProductId::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Fields are private so that the activation invariant cannot be bypassed:
/// whenever a mutation leaves `quantity == 0`, `active` becomes false.
#[derive(Debug, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    quantity: i64,
    active: bool,
}

impl Product {
    /// Creates an active product.
    ///
    /// ## Errors
    /// `CoreError::Validation` if the name is blank, the price is negative,
    /// or the quantity is negative.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::{Money, Product};
    ///
    /// let earbuds = Product::new("Bose QuietComfort Earbuds", Money::from_major_minor(250, 0), 500).unwrap();
    /// assert!(earbuds.is_active());
    /// assert!(Product::new("  ", Money::zero(), 1).is_err());
    /// ```
    pub fn new(name: impl AsRef<str>, price: Money, quantity: i64) -> CoreResult<Self> {
        let name = validate_product_name(name.as_ref())?;
        validate_price(price)?;
        validate_stock_quantity(quantity)?;

        Ok(Product {
            id: ProductId::new(),
            name,
            price,
            quantity,
            active: true,
        })
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Overwrites the stock level.
    ///
    /// Deactivates the product when the new level is zero. A positive level
    /// does not re-activate it.
    pub fn set_quantity(&mut self, quantity: i64) -> CoreResult<()> {
        validate_stock_quantity(quantity)?;

        self.quantity = quantity;
        if self.quantity == 0 {
            self.active = false;
        }
        Ok(())
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Checks whether `quantity` units could be bought right now and returns
    /// what they would cost, without changing anything.
    ///
    /// Checks run in the same order as [`Product::buy`]: state, then
    /// argument, then stock, then the size of the charge.
    pub fn quote(&self, quantity: i64) -> CoreResult<Money> {
        if !self.active {
            return Err(CoreError::ProductInactive {
                name: self.name.clone(),
            });
        }
        validate_quantity(quantity)?;
        if quantity > self.quantity {
            return Err(CoreError::InsufficientStock {
                name: self.name.clone(),
                available: self.quantity,
                requested: quantity,
            });
        }
        self.price
            .checked_multiply_quantity(quantity)
            .ok_or_else(|| CoreError::AmountOverflow {
                what: format!("charge for {} of '{}'", quantity, self.name),
            })
    }

    /// Buys `quantity` units and returns the charge (`quantity × price`).
    ///
    /// ## Errors
    /// - `ProductInactive` if the product is not active
    /// - `Validation` if `quantity` is not positive
    /// - `InsufficientStock` if `quantity` exceeds the stock on hand
    /// - `AmountOverflow` if the charge does not fit in a `Money`
    ///
    /// A failed purchase leaves quantity and status untouched.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::{Money, Product};
    ///
    /// let mut phone = Product::new("Google Pixel 7", Money::from_major_minor(500, 0), 1).unwrap();
    /// assert_eq!(phone.buy(1).unwrap(), Money::from_major_minor(500, 0));
    /// assert!(!phone.is_active());
    /// assert!(phone.buy(1).is_err());
    /// ```
    pub fn buy(&mut self, quantity: i64) -> CoreResult<Money> {
        let charge = self.quote(quantity)?;

        self.quantity -= quantity;
        if self.quantity == 0 {
            self.active = false;
        }
        Ok(charge)
    }
}

/// `"<name>, Price: <price>, Quantity: <quantity>"`
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, Price: {}, Quantity: {}",
            self.name, self.price, self.quantity
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
