//! Infrastructure layer
//!
//! Loaders that turn external files into domain values.

pub mod fleet_loader;

pub use fleet_loader::FleetLoader;
