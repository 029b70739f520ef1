//! Normalized transit segments.

use std::fmt;

/// What carries the traveller for one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitKind {
    Bus,
    Train,
    Subway,
    Flight,
    Walk,
}

impl TransitKind {
    /// Lowercase label for display and serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitKind::Bus => "bus",
            TransitKind::Train => "train",
            TransitKind::Subway => "subway",
            TransitKind::Flight => "flight",
            TransitKind::Walk => "walk",
        }
    }
}

impl fmt::Display for TransitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural position of a segment within the provider's response:
/// `(route alternative, leg, step)`.
///
/// This is the sort key for an itinerary. Ordering comes from structural
/// position only, never from timestamps: provider time texts may be
/// imprecise across calendar boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegmentOrder(pub usize, pub usize, pub usize);

impl fmt::Display for SegmentOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.0, self.1, self.2)
    }
}

/// One normalized stage of a journey: a transit ride or a walk.
///
/// Flattened from the provider's nested route structure by the itinerary
/// planner. `id` is unique within one itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitSegment {
    /// Identifier, unique within the itinerary.
    pub id: String,

    /// Structural position within the provider response.
    pub order: SegmentOrder,

    /// Vehicle kind, or `Walk` for pedestrian stages.
    pub kind: TransitKind,

    /// Line label (e.g. "Line 4", "KTX"). Absent for walks.
    pub line: Option<String>,

    /// Boarding stop name, or walking instructions for a walk segment.
    pub departure: String,

    /// Alighting stop name. Empty for walk segments.
    pub arrival: String,

    /// Departure time as the provider formatted it.
    pub departure_time: String,

    /// Arrival time as the provider formatted it.
    pub arrival_time: String,

    /// Duration text as the provider formatted it.
    pub duration: String,

    /// Distance text, when supplied.
    pub distance: Option<String>,

    /// Operating agency name.
    pub provider: Option<String>,

    /// Line color as a `#`-prefixed hex string.
    pub color: Option<String>,

    /// Direction shown on the vehicle, when supplied.
    pub headsign: Option<String>,

    /// Number of stops ridden, when supplied.
    pub num_stops: Option<u32>,
}
