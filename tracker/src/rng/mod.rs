//! Deterministic random number generation
//!
//! Uses the xorshift64* algorithm for fast, deterministic random number
//! generation. All pseudo-randomness in the simulation (vehicle type tags,
//! synthesized plates) MUST go through this module so that a loading run is
//! reproducible given its seed.

mod xorshift;

pub use xorshift::RngManager;
