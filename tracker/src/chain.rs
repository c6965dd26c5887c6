//! Vehicle chain traversal
//!
//! A carrier's vehicles form an ordered handler chain: a node that has room
//! for a package accepts it (committing the load), a node that does not
//! forwards the request to the next node in list order, and the last node
//! rejects it. Chain order is list order; vehicles carry no next-node
//! back-links, the walk is index-based.
//!
//! The walk reports the position of the *committing* node so the caller can
//! record the assignment against that vehicle, not the chain head.

use log::trace;

use crate::models::vehicle::Vehicle;

/// Result of offering a package to the chain starting at some head node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainOutcome {
    /// A node committed the load; `position` indexes the committing vehicle
    Accepted { position: usize },

    /// Every node from the head to the end of the chain forwarded or was
    /// full; the tail rejected the package
    Rejected,
}

/// Offer a package of `weight` to the chain beginning at `head`
///
/// Walks forward through `vehicles[head..]`. The first node with room
/// commits the load and the walk stops; nodes without room forward; running
/// off the end of the chain is a rejection. An out-of-range `head` rejects
/// immediately (the chain has no node to handle the request).
///
/// # Example
/// ```
/// use shipment_tracker_core_rs::{attempt_insert, ChainOutcome, Vehicle, VehicleType};
///
/// let mut chain = vec![
///     Vehicle::new("FULL".to_string(), VehicleType::Truck, 10),
///     Vehicle::new("ROOMY".to_string(), VehicleType::Van, 100),
/// ];
/// // The first node forwards, the second accepts.
/// assert_eq!(
///     attempt_insert(&mut chain, 0, 50),
///     ChainOutcome::Accepted { position: 1 },
/// );
/// ```
pub fn attempt_insert(vehicles: &mut [Vehicle], head: usize, weight: u32) -> ChainOutcome {
    for position in head..vehicles.len() {
        if vehicles[position].try_load(weight) {
            trace!(
                "chain: weight {weight} accepted by vehicle {} at position {position} (head {head})",
                vehicles[position].id()
            );
            return ChainOutcome::Accepted { position };
        }
        // No room here: forwarded to the next node, or rejected at the tail.
    }
    trace!("chain: weight {weight} rejected (head {head}, {} vehicles)", vehicles.len());
    ChainOutcome::Rejected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::VehicleType;

    fn chain(capacities: &[u32]) -> Vec<Vehicle> {
        capacities
            .iter()
            .enumerate()
            .map(|(i, &c)| Vehicle::new(format!("V{i}"), VehicleType::Truck, c))
            .collect()
    }

    #[test]
    fn test_head_node_accepts_when_it_fits() {
        let mut vehicles = chain(&[100, 50]);
        assert_eq!(
            attempt_insert(&mut vehicles, 0, 80),
            ChainOutcome::Accepted { position: 0 }
        );
        assert_eq!(vehicles[0].load(), 80);
        assert_eq!(vehicles[1].load(), 0);
    }

    #[test]
    fn test_full_node_forwards_to_next() {
        let mut vehicles = chain(&[50, 100]);
        assert_eq!(
            attempt_insert(&mut vehicles, 0, 80),
            ChainOutcome::Accepted { position: 1 }
        );
        assert_eq!(vehicles[0].load(), 0);
        assert_eq!(vehicles[1].load(), 80);
    }

    #[test]
    fn test_tail_rejects_when_nothing_fits() {
        let mut vehicles = chain(&[50, 60]);
        assert_eq!(attempt_insert(&mut vehicles, 0, 80), ChainOutcome::Rejected);
        assert_eq!(vehicles[0].load(), 0);
        assert_eq!(vehicles[1].load(), 0);
    }

    #[test]
    fn test_walk_never_wraps_before_the_head() {
        // The roomy vehicle sits before the head, so the walk must reject.
        let mut vehicles = chain(&[100, 10]);
        assert_eq!(attempt_insert(&mut vehicles, 1, 80), ChainOutcome::Rejected);
    }

    #[test]
    fn test_empty_chain_rejects() {
        let mut vehicles: Vec<Vehicle> = Vec::new();
        assert_eq!(attempt_insert(&mut vehicles, 0, 1), ChainOutcome::Rejected);
    }
}
