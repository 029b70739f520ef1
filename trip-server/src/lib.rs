//! Multi-modal trip planning server.
//!
//! Given a free-text origin and destination, plans a transit itinerary
//! and gathers preference-ranked place recommendations near the
//! destination, normalizing heterogeneous provider responses into a
//! stable internal model.

pub mod domain;
pub mod geocode;
pub mod itinerary;
pub mod maps;
pub mod recommend;
pub mod trip;
pub mod web;
