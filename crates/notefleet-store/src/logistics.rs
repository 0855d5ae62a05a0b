//! Order catalog with vehicle assignment

use notefleet_domain::{IdSequence, Item, Location, Order, OrderStatus, Vehicle};
use notefleet_types::{OrderId, StoreError, VehicleId};
use tracing::{debug, info, warn};

use crate::DEFAULT_FIRST_ORDER_ID;

/// Outcome of placing an order
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    /// The order was stored and a vehicle reserved for it
    Assigned { order_id: OrderId, vehicle: VehicleId },
    /// No vehicle was free; the order is handed back unstored
    NoVehicleAvailable(Order),
    /// The order was not issued by this store, is already placed, or
    /// already carries a vehicle; it is handed back unstored
    InvalidOrder(Order),
}

impl Placement {
    pub fn is_assigned(&self) -> bool {
        matches!(self, Placement::Assigned { .. })
    }

    /// Collapse into a `Result`, dropping a rejected order
    pub fn into_result(self) -> Result<VehicleId, StoreError> {
        match self {
            Placement::Assigned { vehicle, .. } => Ok(vehicle),
            Placement::NoVehicleAvailable(order) => Err(StoreError::NoVehicleAvailable {
                order_id: order.order_id,
            }),
            Placement::InvalidOrder(order) => Err(StoreError::InvalidOrder {
                order_id: order.order_id,
            }),
        }
    }
}

/// Orders in creation order plus the fixed fleet that delivers them
#[derive(Debug, Clone)]
pub struct LogisticSystem {
    orders: Vec<Order>,
    vehicles: Vec<Vehicle>,
    order_ids: IdSequence,
}

impl LogisticSystem {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self::with_first_order_id(vehicles, DEFAULT_FIRST_ORDER_ID)
    }

    pub fn with_first_order_id(vehicles: Vec<Vehicle>, first_order_id: u64) -> Self {
        Self {
            orders: Vec::new(),
            vehicles,
            order_ids: IdSequence::starting_at(first_order_id),
        }
    }

    /// Build an order carrying the next id from this store
    ///
    /// The order is not stored until it is placed.
    pub fn create_order(
        &mut self,
        user_name: impl Into<String>,
        location: Location,
        items: Vec<Item>,
    ) -> Result<Order, StoreError> {
        let order_id = OrderId(self.order_ids.next_id().ok_or(StoreError::IdsExhausted)?);
        debug!(%order_id, "created order");
        Ok(Order::new(order_id, user_name, location, items))
    }

    /// Whether `order` may still be stored
    ///
    /// Its id must come from this store's sequence and be newer than every
    /// stored order, and it must not carry a vehicle yet.
    fn accepts(&self, order: &Order) -> bool {
        let id = order.order_id;
        let newer_than_stored = self.orders.last().map_or(true, |last| id > last.order_id);
        order.vehicle().is_none() && self.order_ids.has_issued(id.0) && newer_than_stored
    }

    /// Assign the first available vehicle and store the order
    pub fn place_order(&mut self, mut order: Order) -> Placement {
        if !self.accepts(&order) {
            warn!(order_id = %order.order_id, "order rejected");
            return Placement::InvalidOrder(order);
        }

        let Some(vehicle) = self.vehicles.iter_mut().find(|v| v.is_available()) else {
            warn!(order_id = %order.order_id, "no vehicle available");
            return Placement::NoVehicleAvailable(order);
        };

        vehicle.mark_unavailable();
        let vehicle_id = vehicle.id;
        order.assign_vehicle(vehicle_id);
        let order_id = order.order_id;
        self.orders.push(order);

        info!(%order_id, vehicle = %vehicle_id, "order assigned");
        Placement::Assigned {
            order_id,
            vehicle: vehicle_id,
        }
    }

    /// Status of a stored order
    pub fn track_order(&self, id: OrderId) -> Result<OrderStatus, StoreError> {
        self.find_order(id)
            .map(Order::status)
            .ok_or(StoreError::OrderNotFound(id))
    }

    /// Linear scan for a stored order
    pub fn find_order(&self, id: OrderId) -> Option<&Order> {
        debug!(order_id = %id, "looking up order");
        self.orders.iter().find(|o| o.order_id == id)
    }

    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Vehicle assigned to a stored order
    pub fn order_vehicle(&self, order_id: OrderId) -> Option<&Vehicle> {
        self.find_order(order_id)
            .and_then(Order::vehicle)
            .and_then(|id| self.vehicle(id))
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn available_vehicle_count(&self) -> usize {
        self.vehicles.iter().filter(|v| v.is_available()).count()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(prices: &[f64]) -> Vec<Item> {
        prices
            .iter()
            .map(|p| Item::new("parcel", *p).unwrap())
            .collect()
    }

    fn new_order(system: &mut LogisticSystem, city: &str, prices: &[f64]) -> Order {
        system
            .create_order("Ivan", Location::new(city, 79000), items(prices))
            .unwrap()
    }

    fn unavailable_fleet() -> Vec<Vehicle> {
        let mut fleet = Vehicle::numbered_fleet(2);
        fleet.iter_mut().for_each(Vehicle::mark_unavailable);
        fleet
    }

    fn stored_ids(system: &LogisticSystem) -> Vec<u64> {
        system.orders().iter().map(|o| o.order_id.0).collect()
    }

    #[test]
    fn test_order_ids_increase_from_one() {
        let mut system = LogisticSystem::new(Vec::new());
        let a = new_order(&mut system, "Kyiv", &[]);
        let b = new_order(&mut system, "Kyiv", &[]);
        assert_eq!(a.order_id, OrderId(1));
        assert_eq!(b.order_id, OrderId(2));
    }

    #[test]
    fn test_independent_stores_do_not_share_ids() {
        let mut first = LogisticSystem::new(Vec::new());
        let mut second = LogisticSystem::new(Vec::new());
        new_order(&mut first, "Kyiv", &[]);
        let order = new_order(&mut second, "Kyiv", &[]);
        assert_eq!(order.order_id, OrderId(1));
    }

    #[test]
    fn test_create_order_when_ids_run_out() {
        let mut system = LogisticSystem::with_first_order_id(Vec::new(), u64::MAX);
        let last = new_order(&mut system, "Kyiv", &[]);
        assert_eq!(last.order_id, OrderId(u64::MAX));

        let result = system.create_order("Petro", Location::new("Kyiv", 1), Vec::new());
        assert_eq!(result.unwrap_err(), StoreError::IdsExhausted);
    }

    #[test]
    fn test_last_possible_id_can_be_placed() {
        let mut system = LogisticSystem::with_first_order_id(Vehicle::numbered_fleet(1), u64::MAX);
        let order = new_order(&mut system, "Kyiv", &[]);
        assert!(system.place_order(order).is_assigned());
        assert_eq!(stored_ids(&system), vec![u64::MAX]);
    }

    #[test]
    fn test_place_order_without_vehicles() {
        let mut system = LogisticSystem::new(unavailable_fleet());
        let order = new_order(&mut system, "Odesa", &[3.0]);

        match system.place_order(order) {
            Placement::NoVehicleAvailable(rejected) => assert!(rejected.vehicle().is_none()),
            other => panic!("unexpected placement: {:?}", other),
        }
        assert!(system.orders().is_empty());
    }

    #[test]
    fn test_place_order_with_empty_fleet() {
        let mut system = LogisticSystem::new(Vec::new());
        let order = new_order(&mut system, "Odesa", &[]);
        let err = system.place_order(order).into_result().unwrap_err();
        assert_eq!(err, StoreError::NoVehicleAvailable { order_id: OrderId(1) });
    }

    #[test]
    fn test_single_vehicle_is_used_once() {
        let mut system = LogisticSystem::new(vec![Vehicle::new(9)]);

        let first = new_order(&mut system, "Lviv", &[1.0]);
        let placement = system.place_order(first);
        assert_eq!(
            placement,
            Placement::Assigned {
                order_id: OrderId(1),
                vehicle: VehicleId(9)
            }
        );
        assert!(!system.vehicle(VehicleId(9)).unwrap().is_available());
        assert_eq!(system.available_vehicle_count(), 0);

        let second = new_order(&mut system, "Lviv", &[2.0]);
        let placement = system.place_order(second);
        assert!(!placement.is_assigned());
        assert_eq!(system.order_count(), 1);
    }

    #[test]
    fn test_placing_same_order_twice_is_rejected() {
        let mut system = LogisticSystem::new(Vehicle::numbered_fleet(3));
        let order = new_order(&mut system, "Lviv", &[1.0]);

        assert!(system.place_order(order.clone()).is_assigned());
        let again = system.place_order(order).into_result();
        assert_eq!(again, Err(StoreError::InvalidOrder { order_id: OrderId(1) }));

        assert_eq!(stored_ids(&system), vec![1]);
        assert_eq!(system.available_vehicle_count(), 2);
    }

    #[test]
    fn test_hand_built_order_ids_are_rejected() {
        let mut system = LogisticSystem::new(Vehicle::numbered_fleet(3));
        let first = new_order(&mut system, "Lviv", &[]);
        system.place_order(first);

        // Same id as a stored order, and an id this store never issued
        for id in [1, 2, 0] {
            let forged = Order::new(OrderId(id), "Petro", Location::new("Lviv", 79000), Vec::new());
            assert!(matches!(
                system.place_order(forged),
                Placement::InvalidOrder(_)
            ));
        }

        assert_eq!(stored_ids(&system), vec![1]);
        assert_eq!(system.available_vehicle_count(), 2);
    }

    #[test]
    fn test_older_order_after_newer_is_rejected() {
        let mut system = LogisticSystem::new(Vehicle::numbered_fleet(3));
        let older = new_order(&mut system, "Lviv", &[]);
        let newer = new_order(&mut system, "Lviv", &[]);

        assert!(system.place_order(newer).is_assigned());
        assert!(!system.place_order(older).is_assigned());
        assert_eq!(stored_ids(&system), vec![2]);
    }

    #[test]
    fn test_order_with_preset_vehicle_is_rejected() {
        let mut system = LogisticSystem::new(Vehicle::numbered_fleet(1));
        let mut order = new_order(&mut system, "Lviv", &[]);
        order.assign_vehicle(VehicleId(1));

        assert!(matches!(system.place_order(order), Placement::InvalidOrder(_)));
        assert!(system.orders().is_empty());
        assert_eq!(system.available_vehicle_count(), 1);
    }

    #[test]
    fn test_rejected_order_can_be_retried_while_newest() {
        let mut fleet = Vehicle::numbered_fleet(1);
        fleet[0].mark_unavailable();
        let mut system = LogisticSystem::new(fleet);
        let order = new_order(&mut system, "Lviv", &[]);

        let Placement::NoVehicleAvailable(rejected) = system.place_order(order) else {
            panic!("expected no vehicle");
        };
        // Nothing newer is stored, so the same order is still acceptable
        assert!(matches!(
            system.place_order(rejected),
            Placement::NoVehicleAvailable(_)
        ));
    }

    #[test]
    fn test_first_available_vehicle_in_fleet_order() {
        let mut fleet = Vehicle::numbered_fleet(3);
        fleet[0].mark_unavailable();
        let mut system = LogisticSystem::new(fleet);

        let order = new_order(&mut system, "Lviv", &[]);
        let vehicle = system.place_order(order).into_result().unwrap();
        assert_eq!(vehicle, VehicleId(2));
        assert_eq!(system.order_vehicle(OrderId(1)).unwrap().id, VehicleId(2));
    }

    #[test]
    fn test_track_order() {
        let mut system = LogisticSystem::new(Vehicle::numbered_fleet(1));
        let order = new_order(&mut system, "Kharkiv", &[10.5, 4.5]);
        system.place_order(order);

        let status = system.track_order(OrderId(1)).unwrap();
        assert_eq!(status.city, "Kharkiv");
        assert_eq!(status.total_amount, 15.0);
        assert_eq!(status.vehicle, Some(VehicleId(1)));
    }

    #[test]
    fn test_track_unknown_order() {
        let system = LogisticSystem::new(Vehicle::numbered_fleet(1));
        assert_eq!(
            system.track_order(OrderId(42)),
            Err(StoreError::OrderNotFound(OrderId(42)))
        );
    }

    #[test]
    fn test_track_rejected_order_is_not_found() {
        let mut system = LogisticSystem::new(Vec::new());
        let order = new_order(&mut system, "Lviv", &[]);
        system.place_order(order);
        assert!(system.track_order(OrderId(1)).is_err());
    }
}
