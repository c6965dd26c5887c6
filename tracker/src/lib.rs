//! Shipment Tracker Core - Rust Engine
//!
//! In-memory shipment tracking simulation across multiple carriers.
//!
//! # Architecture
//!
//! - **models**: Domain types (lifecycle state machine, Package, Vehicle, Recipient)
//! - **chain**: Vehicle handler chain (accept / forward / reject)
//! - **carrier**: Package ownership, cyclic next-fit loading, periodic scheduler
//! - **dispatch**: Mediator resolving tracking queries across carriers
//! - **context**: Explicit application context driven by the ingestion collaborator
//! - **config**: Scheduler and carrier configuration
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. Package states advance strictly monotonically; Delivered is terminal
//! 2. A vehicle's load never exceeds its capacity
//! 3. Assignment-map keys are always a subset of the owning carrier's packages
//! 4. All randomness is deterministic (seeded RNG)
//! 5. One lock per carrier; the dispatcher never holds two at once

// Module declarations
pub mod carrier;
pub mod chain;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod models;
pub mod rng;

// Re-exports for convenience
pub use carrier::Carrier;
pub use chain::{attempt_insert, ChainOutcome};
pub use config::{CarrierConfig, SchedulerConfig};
pub use context::AppContext;
pub use dispatch::{Dispatcher, RegistryError, TrackOutcome};
pub use models::{
    lifecycle::PackageState,
    package::Package,
    recipient::{PackageLabel, PackageSummary, Recipient, RecipientIdentity},
    vehicle::{Vehicle, VehicleType},
};
pub use rng::RngManager;
