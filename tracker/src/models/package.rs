//! Package model
//!
//! Represents a shipped item. Each package has:
//! - A unique id and the sender's label
//! - A weight in integer units
//! - An immutable recipient reference
//! - A shipment code, unique per package, used for tracking queries
//! - A current lifecycle state, mutated only through `advance`

use serde::{Deserialize, Serialize};

use crate::models::lifecycle::PackageState;
use crate::models::recipient::RecipientIdentity;

/// A shipped item with a linear lifecycle
///
/// # Example
/// ```
/// use shipment_tracker_core_rs::{Package, PackageState, RecipientIdentity};
///
/// let recipient = RecipientIdentity {
///     name: "Ada".to_string(),
///     surname: "Lovelace".to_string(),
///     address: "12 Analytical Way".to_string(),
///     email: "ada@example.com".to_string(),
/// };
/// let mut package = Package::new(
///     "PKG-1".to_string(),
///     "Babbage Ltd".to_string(),
///     recipient,
///     25,
///     "SHIP123".to_string(),
/// );
/// assert_eq!(package.state(), PackageState::PickedUp);
/// package.advance();
/// assert_eq!(package.state(), PackageState::InTransit);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    /// Unique package identifier
    id: String,

    /// Sender label (display only)
    sender: String,

    /// Recipient identity, fixed at construction
    recipient: RecipientIdentity,

    /// Weight in integer units
    weight: u32,

    /// Shipment code, unique per package
    shipment_code: String,

    /// Current lifecycle state (monotonic)
    state: PackageState,
}

impl Package {
    /// Create a new package in the first lifecycle state
    ///
    /// # Panics
    /// Panics if weight is zero.
    pub fn new(
        id: String,
        sender: String,
        recipient: RecipientIdentity,
        weight: u32,
        shipment_code: String,
    ) -> Self {
        assert!(weight > 0, "weight must be positive");

        Self {
            id,
            sender,
            recipient,
            weight,
            shipment_code,
            state: PackageState::initial(),
        }
    }

    /// Package identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sender label
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Recipient identity (immutable after construction)
    pub fn recipient(&self) -> &RecipientIdentity {
        &self.recipient
    }

    /// Weight in integer units
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Shipment code
    pub fn shipment_code(&self) -> &str {
        &self.shipment_code
    }

    /// Current lifecycle state
    pub fn state(&self) -> PackageState {
        self.state
    }

    /// Advance to the next lifecycle state
    ///
    /// No-op once the package is delivered.
    pub fn advance(&mut self) {
        self.state = self.state.next();
    }

    /// Human-readable status line for the current state
    pub fn describe(&self) -> String {
        self.state.describe(&self.id)
    }
}
