//! Carrier loading algorithm: cyclic next-fit over the vehicle chain
//!
//! One-shot batch operation assigning every pending package to a vehicle
//! while minimizing new-vehicle creation:
//!
//! 1. Sort vehicles by capacity descending and pending packages by weight
//!    descending (deterministic largest-first heuristic, not optimal).
//! 2. For each package, probe chain heads cyclically starting from a
//!    rotating index, at most `len(vehicles)` probes; each probe runs the
//!    forward chain walk. On success the rotating index moves to the probe
//!    head that succeeded, so later scans resume there instead of at 0.
//! 3. A package whose full cyclic probe fails is deferred; the rotating
//!    index is left where it was.
//! 4. Each deferred package gets a synthesized vehicle (random type tag and
//!    plate from the carrier's seeded RNG) with capacity exactly equal to
//!    the package's weight, appended to the chain and assigned directly.
//!
//! Capacity shortfall is never an error: deferral plus synthesis resolves
//! it, and the postcondition is an empty pending list.

use log::debug;

use crate::carrier::CarrierState;
use crate::chain::{attempt_insert, ChainOutcome};
use crate::models::vehicle::{Vehicle, VehicleType};
use crate::rng::RngManager;

const PLATE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const PLATE_LEN: usize = 8;

/// Assign every pending package of `state` to a vehicle
pub(crate) fn load_pending(carrier: &str, state: &mut CarrierState) {
    state.vehicles.sort_by(|a, b| b.capacity().cmp(&a.capacity()));
    state.pending.sort_by(|a, b| b.weight().cmp(&a.weight()));
    debug!(
        "carrier {carrier}: loading {} package(s) into {} vehicle(s)",
        state.pending.len(),
        state.vehicles.len()
    );

    let mut head = 0usize;
    let mut unhandled = Vec::new();

    for package in std::mem::take(&mut state.pending) {
        let probes = state.vehicles.len();
        let mut accepted = None;
        for offset in 0..probes {
            let probe = (head + offset) % probes;
            if let ChainOutcome::Accepted { position } =
                attempt_insert(&mut state.vehicles, probe, package.weight())
            {
                accepted = Some((probe, position));
                break;
            }
        }

        match accepted {
            Some((probe, position)) => {
                // Next-fit: later scans resume at the probe head that
                // succeeded. On total failure the index stays put.
                head = probe;
                let vehicle_id = state.vehicles[position].id().to_string();
                debug!(
                    "carrier {carrier}: package {} ({} units) -> vehicle {vehicle_id}",
                    package.id(),
                    package.weight()
                );
                state.record_assignment(package, vehicle_id);
            }
            None => unhandled.push(package),
        }
    }

    // Deferred packages each get a vehicle sized exactly to their weight,
    // which accepts them without another probe scan.
    for package in unhandled {
        let mut vehicle = synthesize_vehicle(&mut state.rng, package.weight());
        let loaded = vehicle.try_load(package.weight());
        debug_assert!(loaded, "synthesized vehicle must fit its package");
        debug!(
            "carrier {carrier}: synthesized {} {} (capacity {}) for package {}",
            vehicle.vehicle_type(),
            vehicle.id(),
            vehicle.capacity(),
            package.id()
        );
        let vehicle_id = vehicle.id().to_string();
        state.vehicles.push(vehicle);
        state.record_assignment(package, vehicle_id);
    }
}

/// Build an empty vehicle with a random type tag and plate and `capacity`
fn synthesize_vehicle(rng: &mut RngManager, capacity: u32) -> Vehicle {
    let type_index = rng.range(0, VehicleType::ALL.len() as u64) as usize;
    let plate: String = (0..PLATE_LEN)
        .map(|_| PLATE_ALPHABET[rng.range(0, PLATE_ALPHABET.len() as u64) as usize] as char)
        .collect();
    Vehicle::new(plate, VehicleType::ALL[type_index], capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesized_vehicle_shape() {
        let mut rng = RngManager::new(9);
        let vehicle = synthesize_vehicle(&mut rng, 77);
        assert_eq!(vehicle.capacity(), 77);
        assert_eq!(vehicle.load(), 0);
        assert_eq!(vehicle.id().len(), PLATE_LEN);
        assert!(vehicle
            .id()
            .bytes()
            .all(|b| PLATE_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_synthesis_is_seed_deterministic() {
        let mut a = RngManager::new(31);
        let mut b = RngManager::new(31);
        let va = synthesize_vehicle(&mut a, 10);
        let vb = synthesize_vehicle(&mut b, 10);
        assert_eq!(va.id(), vb.id());
        assert_eq!(va.vehicle_type(), vb.vehicle_type());
    }
}
