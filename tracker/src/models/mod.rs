//! Domain models
//!
//! - **lifecycle**: the five-state package lifecycle machine
//! - **package**: a shipped item with identity, weight, and state
//! - **vehicle**: a capacity-bounded container in a carrier's chain
//! - **recipient**: the receiving party, delegating queries to the dispatcher

pub mod lifecycle;
pub mod package;
pub mod recipient;
pub mod vehicle;
