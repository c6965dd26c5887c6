//! Carrier: package ownership, the vehicle chain, the assignment map, the
//! one-shot loading run, and the periodic state-advancement scheduler.
//!
//! All mutable carrier state lives behind a single mutex. The loading
//! algorithm (once, before scheduling starts), the scheduler tick, and
//! dispatcher lookups all serialize on it; the dispatcher never holds more
//! than one carrier's lock at a time.

pub mod loader;
pub mod scheduler;

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, warn};
use parking_lot::Mutex;

use crate::config::CarrierConfig;
use crate::models::package::Package;
use crate::models::recipient::RecipientIdentity;
use crate::models::vehicle::Vehicle;
use crate::rng::RngManager;

use self::scheduler::Scheduler;

/// One package's placement: the package itself plus the vehicles holding it
///
/// The vehicle list permits multi-insertion even though a normal loading
/// run records exactly one vehicle per package.
#[derive(Debug, Clone)]
pub(crate) struct Assignment {
    pub(crate) package: Package,
    pub(crate) vehicle_ids: Vec<String>,
}

/// Mutable carrier state, guarded by the carrier's single mutex
pub(crate) struct CarrierState {
    /// Packages registered but not yet loaded; drained by the loading run
    pub(crate) pending: Vec<Package>,

    /// The vehicle chain, in chain order
    pub(crate) vehicles: Vec<Vehicle>,

    /// Assignment map: package id -> placement
    pub(crate) assignments: HashMap<String, Assignment>,

    /// Deterministic RNG for vehicle synthesis
    pub(crate) rng: RngManager,
}

impl CarrierState {
    /// Record that `vehicle_id` holds `package`
    ///
    /// Creates the map entry on first insertion, appends on later ones
    /// (multi-insertion is structurally permitted).
    pub(crate) fn record_assignment(&mut self, package: Package, vehicle_id: String) {
        self.assignments
            .entry(package.id().to_string())
            .or_insert_with(|| Assignment {
                package,
                vehicle_ids: Vec::new(),
            })
            .vehicle_ids
            .push(vehicle_id);
    }
}

/// Advance every package currently present in the assignment map
///
/// Written per-package so one package can never abort the remainder of a
/// tick. Returns how many packages were visited.
pub(crate) fn advance_assignments(state: &mut CarrierState) -> usize {
    let mut advanced = 0;
    for assignment in state.assignments.values_mut() {
        assignment.package.advance();
        advanced += 1;
    }
    advanced
}

/// A carrier: owns packages and vehicles, runs loading and scheduling
///
/// # Example
/// ```
/// use shipment_tracker_core_rs::{Carrier, CarrierConfig, Vehicle, VehicleType};
///
/// let carrier = Carrier::new("ACME Logistics".to_string(), &CarrierConfig::default());
/// carrier.register_vehicle(Vehicle::new("AB12CD34".to_string(), VehicleType::Truck, 100));
/// assert_eq!(carrier.name(), "ACME Logistics");
/// ```
pub struct Carrier {
    name: String,
    config: CarrierConfig,
    state: Arc<Mutex<CarrierState>>,
    scheduler: Mutex<Option<Scheduler>>,
}

impl Carrier {
    /// Create a carrier with no packages, no vehicles, and no scheduler
    pub fn new(name: String, config: &CarrierConfig) -> Self {
        Self {
            name,
            config: config.clone(),
            state: Arc::new(Mutex::new(CarrierState {
                pending: Vec::new(),
                vehicles: Vec::new(),
                assignments: HashMap::new(),
                rng: RngManager::new(config.rng_seed),
            })),
            scheduler: Mutex::new(None),
        }
    }

    /// Carrier name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a vehicle to the end of the chain
    ///
    /// Chain order is fixed once appended; only the one-shot loading run
    /// reorders the list (its capacity sort).
    pub fn register_vehicle(&self, vehicle: Vehicle) {
        self.state.lock().vehicles.push(vehicle);
    }

    /// Add a package to the pending list, awaiting the loading run
    pub fn register_package(&self, package: Package) {
        self.state.lock().pending.push(package);
    }

    /// Run the loading algorithm over all pending packages
    ///
    /// One-shot batch operation; see [`loader`] for the procedure. After it
    /// returns, the pending list is empty and every package is assigned.
    pub fn load_pending(&self) {
        let mut state = self.state.lock();
        loader::load_pending(&self.name, &mut state);
    }

    /// Advance every loaded package one lifecycle step
    ///
    /// This is the scheduler tick body; it is public so a host application
    /// can also step the carrier manually.
    pub fn advance_all(&self) {
        let mut state = self.state.lock();
        let advanced = advance_assignments(&mut state);
        debug!("carrier {}: advanced {advanced} package(s)", self.name);
    }

    /// Find the status line for a package matching both the recipient
    /// identity and the exact shipment code
    ///
    /// Used by the dispatcher's cross-carrier scan.
    pub fn find_status(&self, recipient: &RecipientIdentity, shipment_code: &str) -> Option<String> {
        let state = self.state.lock();
        state.assignments.values().find_map(|assignment| {
            let package = &assignment.package;
            if package.recipient() == recipient && package.shipment_code() == shipment_code {
                Some(package.describe())
            } else {
                None
            }
        })
    }

    /// Number of packages still awaiting a loading run
    pub fn pending_count(&self) -> usize {
        self.state.lock().pending.len()
    }

    /// Snapshot of the vehicle chain
    pub fn vehicles(&self) -> Vec<Vehicle> {
        self.state.lock().vehicles.clone()
    }

    /// Ids of the vehicles holding the given package, if it is loaded
    pub fn vehicles_for(&self, package_id: &str) -> Option<Vec<String>> {
        self.state
            .lock()
            .assignments
            .get(package_id)
            .map(|a| a.vehicle_ids.clone())
    }

    /// Render the package -> vehicles map, one package per line
    ///
    /// Sorted by package id so the output is stable.
    pub fn assignment_report(&self) -> String {
        let state = self.state.lock();
        let mut entries: Vec<&Assignment> = state.assignments.values().collect();
        entries.sort_by(|a, b| a.package.id().cmp(b.package.id()));

        let mut report = String::new();
        for assignment in entries {
            let package = &assignment.package;
            report.push_str(&format!(
                "Package {} for {} is in: {}\n",
                package.id(),
                package.recipient().name,
                assignment.vehicle_ids.join(", ")
            ));
        }
        report
    }

    /// Start the periodic state-advancement task
    ///
    /// One task per carrier: a second call is ignored with a warning.
    pub fn start(&self) {
        let mut slot = self.scheduler.lock();
        if slot.is_some() {
            warn!("carrier {}: scheduler already started", self.name);
            return;
        }
        *slot = Some(Scheduler::start(
            self.name.clone(),
            Arc::clone(&self.state),
            &self.config.scheduler,
        ));
    }

    /// Stop future scheduler ticks
    ///
    /// Idempotent: safe before `start` and after an earlier shutdown. A
    /// tick already in progress runs to completion.
    pub fn shutdown(&self) {
        if let Some(scheduler) = self.scheduler.lock().as_ref() {
            scheduler.shutdown();
        }
    }
}
