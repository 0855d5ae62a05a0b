//! In-memory stores for orders and notes
//!
//! Nothing here is persisted. Each store owns its own identifier sequence.

pub mod logistics;
pub mod notebook;

pub use logistics::{LogisticSystem, Placement};
pub use notebook::Notebook;

/// First id issued by a new order store
pub const DEFAULT_FIRST_ORDER_ID: u64 = 1;

/// First id issued by a new notebook
pub const DEFAULT_FIRST_NOTE_ID: u64 = 0;
