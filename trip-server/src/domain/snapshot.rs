//! Result snapshot published by the orchestrator.

use super::{PlaceRecommendation, TransitSegment};

/// The immutable outcome of one completed trip run.
///
/// `generation` identifies the submission that produced this snapshot;
/// consumers comparing generations can tell a fresh result from a stale
/// one.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSnapshot {
    /// Ordered transit segments for the itinerary.
    pub segments: Vec<TransitSegment>,

    /// Deduplicated, preference-ranked places near the destination.
    pub recommendations: Vec<PlaceRecommendation>,

    /// The submission counter value this snapshot belongs to.
    pub generation: u64,
}

impl ResultSnapshot {
    /// Create a snapshot for the given generation.
    pub fn new(
        segments: Vec<TransitSegment>,
        recommendations: Vec<PlaceRecommendation>,
        generation: u64,
    ) -> Self {
        Self {
            segments,
            recommendations,
            generation,
        }
    }
}
