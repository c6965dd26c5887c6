//! Recipient model
//!
//! The recipient is the final receiving party. It keeps personal identity
//! fields, a credential (stored only; verification belongs to an external
//! collaborator), and an append-only list of the packages registered to it.
//!
//! Tracking goes through the dispatcher (mediator): the recipient never
//! talks to a carrier directly.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::dispatch::{Dispatcher, TrackOutcome};

/// Identity fields of a recipient
///
/// Equality covers the identity fields only, never the credential, matching
/// how tracking queries compare recipients.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipientIdentity {
    pub name: String,
    pub surname: String,
    pub address: String,
    pub email: String,
}

/// A package label kept by the recipient, in registration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageLabel {
    pub package_id: String,
    pub shipment_code: String,
}

/// One line of a recipient's package listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSummary {
    pub package_id: String,
    pub shipment_code: String,
    /// Rendered tracking outcome for the shipment code
    pub status: String,
}

/// The receiving party, delegating all queries to the dispatcher
pub struct Recipient {
    identity: RecipientIdentity,
    credential: String,
    labels: Mutex<Vec<PackageLabel>>,
    dispatcher: Arc<Dispatcher>,
}

impl Recipient {
    /// Create a recipient with no packages
    pub fn new(identity: RecipientIdentity, credential: String, dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            identity,
            credential,
            labels: Mutex::new(Vec::new()),
            dispatcher,
        }
    }

    /// Identity fields
    pub fn identity(&self) -> &RecipientIdentity {
        &self.identity
    }

    /// Stored credential (never checked here; login is external)
    pub fn credential(&self) -> &str {
        &self.credential
    }

    /// Append a label for a newly registered package
    pub(crate) fn record_package(&self, label: PackageLabel) {
        self.labels.lock().push(label);
    }

    /// Track one of this recipient's packages by shipment code
    pub fn track_package(&self, shipment_code: &str) -> TrackOutcome {
        self.dispatcher.track_package(&self.identity, shipment_code)
    }

    /// Summaries of every registered package, in registration order
    ///
    /// Each status is resolved through the dispatcher at call time.
    pub fn list_packages(&self) -> Vec<PackageSummary> {
        let labels = self.labels.lock().clone();
        labels
            .into_iter()
            .map(|label| {
                let status = self
                    .dispatcher
                    .track_package(&self.identity, &label.shipment_code);
                PackageSummary {
                    package_id: label.package_id,
                    shipment_code: label.shipment_code,
                    status: status.to_string(),
                }
            })
            .collect()
    }
}
