//! Domain model types

pub mod item;
pub mod location;
pub mod note;
pub mod order;
pub mod vehicle;

pub use item::Item;
pub use location::Location;
pub use note::Note;
pub use order::{Order, OrderStatus};
pub use vehicle::Vehicle;
