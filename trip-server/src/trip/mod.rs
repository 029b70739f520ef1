//! Trip orchestration.
//!
//! The orchestrator sequences geocoding, routing, and recommendation
//! search for one submission, applies the supersession policy, and
//! publishes an immutable result snapshot.

mod orchestrator;

#[cfg(test)]
mod orchestrator_tests;

pub use orchestrator::{TripOrchestrator, TripPhase, TripStatus};
