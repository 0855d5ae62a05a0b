//! Order line items

use notefleet_types::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A priced item in an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    price: f64,
}

impl Item {
    /// Create an item, rejecting negative or non-finite prices
    pub fn new(name: impl Into<String>, price: f64) -> Result<Self> {
        if !price.is_finite() || price < 0.0 {
            return Err(Error::InvalidInput(format!(
                "item price must be a non-negative number, got {}",
                price
            )));
        }
        Ok(Self {
            name: name.into(),
            price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Item name - {}, item price - {}", self.name, self.price)
    }
}
