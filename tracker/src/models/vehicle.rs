//! Vehicle model
//!
//! A vehicle is a capacity-bounded container and a node in a carrier's
//! loading chain. The only way to change its load is `try_load`, which
//! commits a weight iff it fits, so `0 <= load <= capacity` holds at all
//! times by construction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of vehicle in a carrier's fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleType {
    Truck,
    Van,
    Lorry,
}

impl VehicleType {
    /// All known types, in declaration order (used for random synthesis)
    pub const ALL: [VehicleType; 3] = [VehicleType::Truck, VehicleType::Van, VehicleType::Lorry];

    pub fn as_str(self) -> &'static str {
        match self {
            VehicleType::Truck => "TRUCK",
            VehicleType::Van => "VAN",
            VehicleType::Lorry => "LORRY",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A capacity-bounded container for packages
///
/// # Example
/// ```
/// use shipment_tracker_core_rs::{Vehicle, VehicleType};
///
/// let mut vehicle = Vehicle::new("AB12CD34".to_string(), VehicleType::Van, 100);
/// assert!(vehicle.try_load(60));
/// assert!(!vehicle.try_load(50)); // would exceed capacity
/// assert_eq!(vehicle.load(), 60);
/// assert_eq!(vehicle.remaining(), 40);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Plate identifier
    id: String,

    /// Type tag
    vehicle_type: VehicleType,

    /// Container capacity in weight units
    capacity: u32,

    /// Currently committed load, never above capacity
    load: u32,
}

impl Vehicle {
    /// Create a new empty vehicle
    pub fn new(id: String, vehicle_type: VehicleType, capacity: u32) -> Self {
        Self {
            id,
            vehicle_type,
            capacity,
            load: 0,
        }
    }

    /// Plate identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Type tag
    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    /// Container capacity
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Currently committed load
    pub fn load(&self) -> u32 {
        self.load
    }

    /// Capacity still available
    pub fn remaining(&self) -> u32 {
        self.capacity - self.load
    }

    /// Commit `weight` to this vehicle iff it fits
    ///
    /// Returns true and increases the load when `load + weight <= capacity`;
    /// otherwise leaves the vehicle untouched and returns false.
    pub fn try_load(&mut self, weight: u32) -> bool {
        if weight + self.load <= self.capacity {
            self.load += weight;
            true
        } else {
            false
        }
    }
}
