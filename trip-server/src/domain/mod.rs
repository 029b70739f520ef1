//! Domain types for the trip planner.
//!
//! This module contains the core data model shared by the pipeline
//! components. Types enforce their invariants at construction time, so
//! code that receives them can trust their validity. Provider-native
//! structures never appear here; they are converted at the module
//! boundaries that consume them.

mod error;
mod location;
mod place;
mod preference;
mod segment;
mod snapshot;

pub use error::{PlanError, ProviderError};
pub use location::{InvalidTripRequest, Location, TripRequest};
pub use place::{PlaceCandidate, PlaceRecommendation};
pub use preference::{Budget, Pace, PreferenceSet};
pub use segment::{SegmentOrder, TransitKind, TransitSegment};
pub use snapshot::ResultSnapshot;
