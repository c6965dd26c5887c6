//! Application context
//!
//! The explicit bootstrap object the ingestion collaborator drives: it owns
//! the dispatcher and the recipient registry and exposes the ordered
//! registration calls. Constructed once and passed by reference — there is
//! no global singleton to look things up in.
//!
//! Expected call order per carrier: register the carrier, its vehicles,
//! recipients, and packages; run `load_carrier` exactly once; then
//! `start_carrier`. Unknown carrier or recipient keys come back as
//! [`RegistryError`] values the collaborator may skip over.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::carrier::Carrier;
use crate::config::CarrierConfig;
use crate::dispatch::{Dispatcher, RegistryError};
use crate::models::package::Package;
use crate::models::recipient::{PackageLabel, Recipient, RecipientIdentity};
use crate::models::vehicle::{Vehicle, VehicleType};

/// Explicit application context: dispatcher plus recipient registry
///
/// # Example
/// ```
/// use shipment_tracker_core_rs::{AppContext, CarrierConfig, RecipientIdentity, VehicleType};
///
/// let context = AppContext::new();
/// context.register_carrier("ACME Logistics", &CarrierConfig::default()).unwrap();
/// context.register_vehicle("ACME Logistics", "AB12CD34", VehicleType::Truck, 100).unwrap();
/// let recipient = context.register_recipient(
///     RecipientIdentity {
///         name: "Ada".to_string(),
///         surname: "Lovelace".to_string(),
///         address: "12 Analytical Way".to_string(),
///         email: "ada@example.com".to_string(),
///     },
///     "secret",
/// );
/// context
///     .register_package("ACME Logistics", "PKG-1", "Babbage Ltd", "ada@example.com", 25, "SHIP123")
///     .unwrap();
/// context.load_carrier("ACME Logistics").unwrap();
/// assert_eq!(recipient.list_packages().len(), 1);
/// ```
pub struct AppContext {
    dispatcher: Arc<Dispatcher>,
    recipients: RwLock<HashMap<String, Arc<Recipient>>>,
}

impl AppContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self {
            dispatcher: Arc::new(Dispatcher::new()),
            recipients: RwLock::new(HashMap::new()),
        }
    }

    /// The mediator shared with every recipient
    pub fn dispatcher(&self) -> &Arc<Dispatcher> {
        &self.dispatcher
    }

    /// Register a carrier under a unique name
    pub fn register_carrier(
        &self,
        name: &str,
        config: &CarrierConfig,
    ) -> Result<Arc<Carrier>, RegistryError> {
        self.dispatcher.register_carrier(name, config)
    }

    /// Register a vehicle with the named carrier
    pub fn register_vehicle(
        &self,
        carrier: &str,
        id: &str,
        vehicle_type: VehicleType,
        capacity: u32,
    ) -> Result<(), RegistryError> {
        let carrier = self.require_carrier(carrier)?;
        carrier.register_vehicle(Vehicle::new(id.to_string(), vehicle_type, capacity));
        Ok(())
    }

    /// Register a recipient, keyed by email
    pub fn register_recipient(
        &self,
        identity: RecipientIdentity,
        credential: &str,
    ) -> Arc<Recipient> {
        let recipient = Arc::new(Recipient::new(
            identity.clone(),
            credential.to_string(),
            Arc::clone(&self.dispatcher),
        ));
        self.recipients
            .write()
            .insert(identity.email, Arc::clone(&recipient));
        recipient
    }

    /// Look up a recipient by email key
    pub fn recipient(&self, email: &str) -> Option<Arc<Recipient>> {
        self.recipients.read().get(email).cloned()
    }

    /// Register a package with the named carrier
    ///
    /// The package starts in the first lifecycle state and a label is
    /// appended to its recipient's list.
    pub fn register_package(
        &self,
        carrier: &str,
        id: &str,
        sender: &str,
        recipient_email: &str,
        weight: u32,
        shipment_code: &str,
    ) -> Result<(), RegistryError> {
        let carrier = self.require_carrier(carrier)?;
        let recipient = self
            .recipient(recipient_email)
            .ok_or_else(|| RegistryError::UnknownRecipient(recipient_email.to_string()))?;

        carrier.register_package(Package::new(
            id.to_string(),
            sender.to_string(),
            recipient.identity().clone(),
            weight,
            shipment_code.to_string(),
        ));
        recipient.record_package(PackageLabel {
            package_id: id.to_string(),
            shipment_code: shipment_code.to_string(),
        });
        Ok(())
    }

    /// Run the named carrier's loading algorithm (once, after registration)
    pub fn load_carrier(&self, name: &str) -> Result<(), RegistryError> {
        self.require_carrier(name)?.load_pending();
        Ok(())
    }

    /// Start the named carrier's periodic scheduler
    pub fn start_carrier(&self, name: &str) -> Result<(), RegistryError> {
        self.require_carrier(name)?.start();
        Ok(())
    }

    /// Stop the named carrier's scheduler
    pub fn shutdown_carrier(&self, name: &str) -> Result<(), RegistryError> {
        self.dispatcher.shutdown_carrier(name)
    }

    fn require_carrier(&self, name: &str) -> Result<Arc<Carrier>, RegistryError> {
        self.dispatcher
            .carrier(name)
            .ok_or_else(|| RegistryError::UnknownCarrier(name.to_string()))
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
