//! Nearby-place recommendations.
//!
//! Runs bounded, preference-driven nearby searches against an injected
//! [`PlaceSearchProvider`] and merges the results into a deduplicated,
//! preference-ranked list. Individual term failures degrade the list;
//! they never abort the aggregation.

mod aggregate;

pub use aggregate::{AggregatorConfig, PlaceSearchProvider, RecommendationAggregator};
