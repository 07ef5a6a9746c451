//! Demo inventory loaded at startup.

use stockroom_core::{CoreResult, Money, Product, Store};

/// Builds a store stocked with three demo products.
pub fn demo_inventory() -> CoreResult<Store> {
    let products = vec![
        Product::new("MacBook Air M2", Money::from_major_minor(1450, 0), 100)?,
        Product::new("Bose QuietComfort Earbuds", Money::from_major_minor(250, 0), 500)?,
        Product::new("Google Pixel 7", Money::from_major_minor(500, 0), 250)?,
    ];
    Ok(Store::new(products))
}
