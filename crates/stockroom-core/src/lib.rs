//! # stockroom-core: Pure Business Logic for Stockroom
//!
//! This crate models a store's product catalog and the rules for buying from
//! it. Everything here is deterministic and free of I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (text menu)                         │   │
//! │  │    list products ──► show total ──► make an order ──► quit      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &mut Store                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stockroom-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │  product  │  │   store   │  │   money   │  │ validation│   │   │
//! │  │   │  Product  │  │   Store   │  │   Money   │  │   rules   │   │   │
//! │  │   │ ProductId │  │ OrderLine │  │           │  │           │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - `Product` and its identity `ProductId`
//! - [`store`] - `Store` and atomic multi-line orders
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Argument range checks
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{Money, OrderLine, Product, Store};
//!
//! let laptop = Product::new("MacBook Air M2", Money::from_major_minor(1450, 0), 100).unwrap();
//! let laptop_id = laptop.id();
//! let mut store = Store::new(vec![laptop]);
//!
//! let total = store.order(&[OrderLine::new(laptop_id, 2)]).unwrap();
//! assert_eq!(total.to_string(), "$2900");
//! assert_eq!(store.total_quantity(), 98);
//! ```

pub mod error;
pub mod money;
pub mod product;
pub mod store;
pub mod validation;

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use product::{Product, ProductId};
pub use store::{OrderLine, Store};
