use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single catalog entry.
///
/// Only the display name can change after construction; the id, price and
/// quantity are fixed once the product has been validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    product_id: u64,
    name: String,
    price: f64,
    quantity: u64,
}

impl Product {
    pub fn new(product_id: u64, name: String, price: f64, quantity: u64) -> Self {
        Self {
            product_id,
            name,
            price,
            quantity,
        }
    }

    pub fn product_id(&self) -> u64 {
        self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Price as shown to the operator, e.g. `$12.30`.
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// On-disk shape of a product. Every field is a string, keyed externally by
/// the product id, so `{"1": {"name": "Widget", "price": "9.99", "quantity": "5"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub price: String,
    pub quantity: String,
}

/// The full persisted catalog, keyed by the stringified product id.
pub type Records = BTreeMap<String, ProductRecord>;

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: price_to_field(product.price),
            quantity: product.quantity.to_string(),
        }
    }
}

/// Why a stored record could not be turned back into a [`Product`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    BadId(String),
    BadPrice(String),
    BadQuantity(String),
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordError::BadId(v) => write!(f, "invalid product id {:?}", v),
            RecordError::BadPrice(v) => write!(f, "invalid price {:?}", v),
            RecordError::BadQuantity(v) => write!(f, "invalid quantity {:?}", v),
        }
    }
}

impl ProductRecord {
    /// Rebuild a product from its key and string fields.
    pub fn to_product(&self, key: &str) -> Result<Product, RecordError> {
        let product_id = key
            .trim()
            .parse::<u64>()
            .map_err(|_| RecordError::BadId(key.to_string()))?;
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| RecordError::BadPrice(self.price.clone()))?;
        let quantity = self
            .quantity
            .trim()
            .parse::<u64>()
            .map_err(|_| RecordError::BadQuantity(self.quantity.clone()))?;

        Ok(Product::new(product_id, self.name.clone(), price, quantity))
    }
}

/// Shortest round-tripping form, always with a fractional part (`10.0`, not `10`),
/// which is what files written by earlier versions contain.
pub fn price_to_field(price: f64) -> String {
    let text = price.to_string();
    if text.contains(['.', 'e', 'E']) || !price.is_finite() {
        text
    } else {
        format!("{}.0", text)
    }
}
