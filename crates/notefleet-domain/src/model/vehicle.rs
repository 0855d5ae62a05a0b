//! Delivery vehicle type definitions

use notefleet_types::VehicleId;
use serde::{Deserialize, Serialize};

/// A vehicle in the delivery fleet
///
/// Vehicles start out available. Once assigned to an order they stay
/// unavailable; there is no release transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Fleet number
    pub id: VehicleId,
    /// Whether the vehicle can take a new order
    is_available: bool,
}

impl Vehicle {
    pub fn new(id: u32) -> Self {
        Self {
            id: VehicleId(id),
            is_available: true,
        }
    }

    pub fn is_available(&self) -> bool {
        self.is_available
    }

    /// Take the vehicle out of the available pool
    pub fn mark_unavailable(&mut self) {
        self.is_available = false;
    }

    /// Build a fleet numbered `1..=count`
    pub fn numbered_fleet(count: u32) -> Vec<Vehicle> {
        (1..=count).map(Vehicle::new).collect()
    }
}
