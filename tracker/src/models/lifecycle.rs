//! Package lifecycle state machine
//!
//! Five linearly ordered states. The transition table and the description
//! table are both associated functions on the enum, so the ordering has a
//! single source of truth and no branching logic is scattered elsewhere.
//!
//! # Critical Invariants
//!
//! 1. Transitions are strictly monotonic along the fixed order
//! 2. `Delivered` is terminal: advancing it is a no-op
//! 3. Each `describe` output uniquely identifies its variant

use serde::{Deserialize, Serialize};

/// Lifecycle state of a package
///
/// The derived `Ord` follows the delivery order, which makes monotonicity
/// directly assertable in tests.
///
/// # Example
/// ```
/// use shipment_tracker_core_rs::PackageState;
///
/// let state = PackageState::PickedUp;
/// assert_eq!(state.next(), PackageState::InTransit);
/// assert!(PackageState::Delivered.is_terminal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PackageState {
    /// Picked up by the carrier, ready to ship
    PickedUp,

    /// Travelling towards the hub closest to the delivery point
    InTransit,

    /// Arrived at the hub, waiting to go out for delivery
    AtHub,

    /// Expected to be delivered during the day
    OutForDelivery,

    /// Delivered to the customer (terminal)
    Delivered,
}

impl PackageState {
    /// The first state every registered package starts in
    pub fn initial() -> Self {
        PackageState::PickedUp
    }

    /// Transition table: the state following `self` in the delivery order
    ///
    /// The terminal state maps to itself, which makes repeated advancement
    /// idempotent.
    pub fn next(self) -> Self {
        match self {
            PackageState::PickedUp => PackageState::InTransit,
            PackageState::InTransit => PackageState::AtHub,
            PackageState::AtHub => PackageState::OutForDelivery,
            PackageState::OutForDelivery => PackageState::Delivered,
            PackageState::Delivered => PackageState::Delivered,
        }
    }

    /// Whether this state ends the lifecycle
    pub fn is_terminal(self) -> bool {
        matches!(self, PackageState::Delivered)
    }

    /// Description table: a human-readable status line for the package
    ///
    /// Each variant produces a distinct sentence referencing the package id.
    pub fn describe(self, package_id: &str) -> String {
        match self {
            PackageState::PickedUp => {
                format!("Package {package_id} has been picked up by the carrier")
            }
            PackageState::InTransit => {
                format!("Package {package_id} is travelling towards the hub closest to the delivery point")
            }
            PackageState::AtHub => {
                format!("Package {package_id} has arrived at the hub and should go out for delivery soon")
            }
            PackageState::OutForDelivery => {
                format!("The carrier expects to deliver package {package_id} during the day")
            }
            PackageState::Delivered => {
                format!("Package {package_id} has been delivered to the customer")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER: [PackageState; 5] = [
        PackageState::PickedUp,
        PackageState::InTransit,
        PackageState::AtHub,
        PackageState::OutForDelivery,
        PackageState::Delivered,
    ];

    #[test]
    fn test_next_follows_delivery_order() {
        for pair in ORDER.windows(2) {
            assert_eq!(pair[0].next(), pair[1]);
        }
    }

    #[test]
    fn test_terminal_is_fixed_point() {
        assert_eq!(PackageState::Delivered.next(), PackageState::Delivered);
        assert!(PackageState::Delivered.is_terminal());
    }

    #[test]
    fn test_only_last_state_is_terminal() {
        for state in &ORDER[..4] {
            assert!(!state.is_terminal());
        }
    }

    #[test]
    fn test_descriptions_are_unique() {
        let lines: Vec<String> = ORDER.iter().map(|s| s.describe("PKG-1")).collect();
        for (i, a) in lines.iter().enumerate() {
            for b in &lines[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_description_names_the_package() {
        for state in ORDER {
            assert!(state.describe("PKG-42").contains("PKG-42"));
        }
    }
}
