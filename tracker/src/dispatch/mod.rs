//! Dispatcher: the mediator centralizing cross-carrier tracking lookups
//!
//! Recipients never talk to carriers directly; they hand the dispatcher a
//! shipment code and get back a status. The dispatcher scans carriers in
//! registration order and each carrier's assignment map in turn, taking one
//! carrier's lock at a time, so no cross-carrier lock ordering exists.
//!
//! Lookup cost is linear in the total package count across all carriers —
//! an explicit, accepted limit for this in-memory simulation.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::trace;
use parking_lot::RwLock;
use thiserror::Error;

use crate::carrier::Carrier;
use crate::config::CarrierConfig;
use crate::models::recipient::RecipientIdentity;

/// Errors raised while wiring entities into the registry
///
/// The ingestion collaborator decides what to do with these (skipping a
/// malformed line is fine); the core never uses them for ordinary control
/// flow.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("carrier `{0}` is already registered")]
    DuplicateCarrier(String),

    #[error("no carrier named `{0}` is registered")]
    UnknownCarrier(String),

    #[error("no recipient with key `{0}` is registered")]
    UnknownRecipient(String),
}

/// Result of a tracking query
///
/// `NotFound` is ordinary data, canonically distinct from every legitimate
/// status string; it is never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackOutcome {
    /// The matching package's current status line
    Status(String),

    /// No package matched the recipient and shipment code
    NotFound,
}

impl fmt::Display for TrackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackOutcome::Status(status) => f.write_str(status),
            TrackOutcome::NotFound => f.write_str("No package was found for this recipient"),
        }
    }
}

/// Registered carriers: registration order plus a unique name index
struct CarrierRegistry {
    ordered: Vec<Arc<Carrier>>,
    by_name: HashMap<String, usize>,
}

/// Mediator over all registered carriers
///
/// # Example
/// ```
/// use shipment_tracker_core_rs::{CarrierConfig, Dispatcher};
///
/// let dispatcher = Dispatcher::new();
/// let carrier = dispatcher
///     .register_carrier("ACME Logistics", &CarrierConfig::default())
///     .unwrap();
/// assert_eq!(carrier.name(), "ACME Logistics");
/// ```
pub struct Dispatcher {
    registry: RwLock<CarrierRegistry>,
}

impl Dispatcher {
    /// Create a dispatcher with no carriers
    pub fn new() -> Self {
        Self {
            registry: RwLock::new(CarrierRegistry {
                ordered: Vec::new(),
                by_name: HashMap::new(),
            }),
        }
    }

    /// Register a carrier under a unique name
    pub fn register_carrier(
        &self,
        name: &str,
        config: &CarrierConfig,
    ) -> Result<Arc<Carrier>, RegistryError> {
        let mut registry = self.registry.write();
        if registry.by_name.contains_key(name) {
            return Err(RegistryError::DuplicateCarrier(name.to_string()));
        }
        let carrier = Arc::new(Carrier::new(name.to_string(), config));
        let index = registry.ordered.len();
        registry.by_name.insert(name.to_string(), index);
        registry.ordered.push(Arc::clone(&carrier));
        Ok(carrier)
    }

    /// Look up a carrier by name
    pub fn carrier(&self, name: &str) -> Option<Arc<Carrier>> {
        let registry = self.registry.read();
        registry
            .by_name
            .get(name)
            .map(|&index| Arc::clone(&registry.ordered[index]))
    }

    /// Resolve a tracking query across all carriers
    ///
    /// Scans carriers in registration order; a match requires recipient
    /// identity equality AND exact shipment-code equality. The first
    /// match's status line wins; a full scan with no match is `NotFound`.
    pub fn track_package(
        &self,
        recipient: &RecipientIdentity,
        shipment_code: &str,
    ) -> TrackOutcome {
        trace!("tracking shipment code {shipment_code}");
        let carriers: Vec<Arc<Carrier>> = self.registry.read().ordered.clone();
        for carrier in carriers {
            if let Some(status) = carrier.find_status(recipient, shipment_code) {
                return TrackOutcome::Status(status);
            }
        }
        TrackOutcome::NotFound
    }

    /// Stop the named carrier's scheduler
    pub fn shutdown_carrier(&self, name: &str) -> Result<(), RegistryError> {
        match self.carrier(name) {
            Some(carrier) => {
                carrier.shutdown();
                Ok(())
            }
            None => Err(RegistryError::UnknownCarrier(name.to_string())),
        }
    }

    /// Stop every registered carrier's scheduler
    pub fn shutdown_all(&self) {
        let carriers: Vec<Arc<Carrier>> = self.registry.read().ordered.clone();
        for carrier in carriers {
            carrier.shutdown();
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
