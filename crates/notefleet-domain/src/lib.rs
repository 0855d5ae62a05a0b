//! Domain module containing the order, fleet and note types

pub mod model;
pub mod service;

pub use model::*;
pub use service::{Clock, FixedClock, IdSequence, SystemClock};
