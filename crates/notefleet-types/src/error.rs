//! Error types for notefleet

use thiserror::Error;

use crate::{NoteId, OrderId};

/// Recoverable outcomes of store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("No vehicle available to deliver order #{order_id}")]
    NoVehicleAvailable { order_id: OrderId },

    #[error("No such order: #{0}")]
    OrderNotFound(OrderId),

    #[error("No such note: {0}")]
    NoteNotFound(NoteId),

    #[error("Order #{order_id} was not issued by this store or is already placed")]
    InvalidOrder { order_id: OrderId },

    #[error("No identifiers left in this store")]
    IdsExhausted,
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
