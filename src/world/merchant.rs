//! Merchants and the armor they sell

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price of a generic armor piece, charged when the merchant lacks the exact item
pub const GENERIC_ARMOR_PRICE: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: Decimal,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Generic armor piece
    pub fn armor() -> Self {
        Self::new("Armor", Decimal::from(GENERIC_ARMOR_PRICE))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Merchant {
    pub name: String,
    pub products: Vec<Product>,
}

impl Merchant {
    pub fn new(name: impl Into<String>, products: Vec<Product>) -> Self {
        Self {
            name: name.into(),
            products,
        }
    }

    pub fn find_product(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub total: Decimal,
}

impl std::fmt::Display for Receipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Receipt value: {} gold", self.total)
    }
}
