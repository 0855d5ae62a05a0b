use serde::{Deserialize, Serialize};

/// Delivery destination of an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    city: String,
    postoffice: u32,
}

impl Location {
    pub fn new(city: impl Into<String>, postoffice: u32) -> Self {
        Self {
            city: city.into(),
            postoffice,
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn postoffice(&self) -> u32 {
        self.postoffice
    }
}
