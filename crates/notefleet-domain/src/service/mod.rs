//! Domain services

pub mod clock;
pub mod id_sequence;

pub use clock::{Clock, FixedClock, SystemClock};
pub use id_sequence::IdSequence;
