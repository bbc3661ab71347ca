use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, InvalidValue};

/// Catalog entry: a product tracked by name.
///
/// `name` is the natural key and never changes after construction; neither
/// does `category`. `price` and `quantity` are reachable only through the
/// validated setters, so `price > 0` and `quantity >= 0` hold after every
/// mutation: a rejected setter call leaves the stored value untouched.
///
/// Construction accepts all four fields as given. The setters are the
/// validation boundary, not the constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    category: String,
    price: f64,
    quantity: i64,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Replace the stored price. Rejected unless `price > 0`.
    pub fn set_price(&mut self, price: f64) -> Result<(), InvalidValue> {
        if price > 0.0 {
            self.price = price;
            Ok(())
        } else {
            Err(InvalidValue::Price(price))
        }
    }

    /// Replace the stored quantity. Rejected unless `quantity >= 0`.
    pub fn set_quantity(&mut self, quantity: i64) -> Result<(), InvalidValue> {
        if quantity >= 0 {
            self.quantity = quantity;
            Ok(())
        } else {
            Err(InvalidValue::Quantity(quantity))
        }
    }
}

impl Entity for Product {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Product(name={}, category={}, price={}, quantity={})",
            self.name, self.category, self.price, self.quantity
        )
    }
}
