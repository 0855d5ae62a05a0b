//! Order type definitions

use notefleet_types::{OrderId, VehicleId};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Item, Location};

/// A customer order awaiting or assigned to a delivery vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub user_name: String,
    pub location: Location,
    pub items: Vec<Item>,
    /// Vehicle assigned by the order store, absent until placement succeeds
    #[serde(default)]
    vehicle: Option<VehicleId>,
}

impl Order {
    pub fn new(
        order_id: OrderId,
        user_name: impl Into<String>,
        location: Location,
        items: Vec<Item>,
    ) -> Self {
        Self {
            order_id,
            user_name: user_name.into(),
            location,
            items,
            vehicle: None,
        }
    }

    pub fn vehicle(&self) -> Option<VehicleId> {
        self.vehicle
    }

    /// Record the vehicle delivering this order
    ///
    /// Order stores refuse to place an order that already carries a vehicle.
    pub fn assign_vehicle(&mut self, vehicle: VehicleId) {
        self.vehicle = Some(vehicle);
    }

    /// Sum of item prices
    pub fn calculate_amount(&self) -> f64 {
        self.items.iter().map(Item::price).sum()
    }

    pub fn status(&self) -> OrderStatus {
        OrderStatus {
            order_id: self.order_id,
            city: self.location.city().to_string(),
            total_amount: self.calculate_amount(),
            vehicle: self.vehicle,
        }
    }
}

/// Tracking snapshot of an order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderStatus {
    pub order_id: OrderId,
    pub city: String,
    pub total_amount: f64,
    pub vehicle: Option<VehicleId>,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.vehicle {
            None => write!(f, "There is no available vehicle to deliver an order."),
            Some(_) => write!(
                f,
                "Your order #{} is sent to {}. Total price: {} UAH.",
                self.order_id, self.city, self.total_amount
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_with(prices: &[f64]) -> Order {
        let items = prices
            .iter()
            .enumerate()
            .map(|(i, p)| Item::new(format!("item{}", i), *p).unwrap())
            .collect();
        Order::new(OrderId(1), "Olena", Location::new("Lviv", 79000), items)
    }

    #[test]
    fn test_calculate_amount() {
        assert_eq!(order_with(&[10.5, 4.5]).calculate_amount(), 15.0);
    }

    #[test]
    fn test_calculate_amount_empty() {
        assert_eq!(order_with(&[]).calculate_amount(), 0.0);
    }

    #[test]
    fn test_status_without_vehicle() {
        let status = order_with(&[1.0]).status();
        assert_eq!(
            status.to_string(),
            "There is no available vehicle to deliver an order."
        );
    }

    #[test]
    fn test_status_with_vehicle() {
        let mut order = order_with(&[10.5, 4.5]);
        order.assign_vehicle(VehicleId(2));
        let status = order.status();
        assert_eq!(status.city, "Lviv");
        assert_eq!(status.total_amount, 15.0);
        assert_eq!(
            status.to_string(),
            "Your order #1 is sent to Lviv. Total price: 15 UAH."
        );
    }
}
