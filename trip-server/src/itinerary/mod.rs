//! Transit itinerary planning.
//!
//! Issues one routing request against an injected [`DirectionsProvider`]
//! and flattens the provider's nested route structure into the ordered
//! [`TransitSegment`](crate::domain::TransitSegment) sequence. The
//! provider's native structure never leaves this module.

mod plan;
mod route;

pub use plan::ItineraryPlanner;
pub use route::{
    DirectionsProvider, Route, RouteLeg, RoutePreference, RouteQuery, RouteSet, RouteStep,
    TransitDetail, TransitMode, TravelMode,
};
