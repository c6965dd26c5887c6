//! Configuration structs
//!
//! Values, not semantics: the scheduler delays and the RNG seed are knobs,
//! the behavior they feed is fixed by the carrier and loader modules.

use serde::{Deserialize, Serialize};

/// Timing for a carrier's periodic state-advancement task
///
/// Defaults: first tick after 20 seconds, one tick per minute afterwards.
/// Tests shrink these to milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Delay before the first tick, in milliseconds
    pub initial_delay_ms: u64,

    /// Delay between the end of one tick and the start of the next, in
    /// milliseconds
    pub interval_ms: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 20_000,
            interval_ms: 60_000,
        }
    }
}

/// Per-carrier configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierConfig {
    /// Seed for the carrier's deterministic RNG (vehicle synthesis)
    pub rng_seed: u64,

    /// Scheduler timing
    pub scheduler: SchedulerConfig,
}

impl Default for CarrierConfig {
    fn default() -> Self {
        Self {
            rng_seed: 12345,
            scheduler: SchedulerConfig::default(),
        }
    }
}
