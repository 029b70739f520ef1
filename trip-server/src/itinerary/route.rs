//! Routing capability contract.
//!
//! [`RouteSet`] is the nested route→leg→step structure a directions
//! provider returns. It exists only to cross the provider boundary: the
//! planner consumes it immediately and nothing downstream ever sees it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Location, ProviderError};

/// Transit modes requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitMode {
    Bus,
    Rail,
    Subway,
}

impl TransitMode {
    /// The mode's wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitMode::Bus => "bus",
            TransitMode::Rail => "rail",
            TransitMode::Subway => "subway",
        }
    }
}

/// Routing preference requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePreference {
    FewerTransfers,
}

/// One routing request.
#[derive(Debug, Clone)]
pub struct RouteQuery {
    /// Resolved origin.
    pub origin: Location,

    /// Resolved destination.
    pub destination: Location,

    /// Transit modes to consider.
    pub modes: Vec<TransitMode>,

    /// Routing preference.
    pub preference: RoutePreference,

    /// Departure time, when the user picked one.
    pub departure_time: Option<DateTime<Utc>>,

    /// Whether to request alternative routes.
    pub alternatives: bool,
}

impl RouteQuery {
    /// Build the standard transit query: bus + rail + subway, fewer
    /// transfers preferred.
    pub fn transit(
        origin: Location,
        destination: Location,
        departure_time: Option<DateTime<Utc>>,
        alternatives: bool,
    ) -> Self {
        Self {
            origin,
            destination,
            modes: vec![TransitMode::Bus, TransitMode::Rail, TransitMode::Subway],
            preference: RoutePreference::FewerTransfers,
            departure_time,
            alternatives,
        }
    }
}

/// Travel mode of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelMode {
    /// Riding a transit vehicle.
    Transit,

    /// Walking.
    Walking,

    /// Anything else (driving, cycling). Dropped by the planner.
    Other,
}

/// Transit-specific details of a step.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransitDetail {
    /// Full line name (e.g. "Gyeongbu Line").
    pub line_name: Option<String>,

    /// Short line label (e.g. "4", "KTX"). Preferred for display.
    pub line_short_name: Option<String>,

    /// Provider vehicle taxonomy label (e.g. "SUBWAY", "HEAVY_RAIL").
    pub vehicle: String,

    /// Boarding stop name.
    pub departure_stop: String,

    /// Alighting stop name.
    pub arrival_stop: String,

    /// Departure time text as the provider formatted it.
    pub departure_time_text: Option<String>,

    /// Arrival time text as the provider formatted it.
    pub arrival_time_text: Option<String>,

    /// Operating agency name.
    pub agency: Option<String>,

    /// Line color as a hex string, with or without a leading `#`.
    pub color: Option<String>,

    /// Direction shown on the vehicle.
    pub headsign: Option<String>,

    /// Number of stops ridden.
    pub num_stops: Option<u32>,
}

/// One step of a route leg.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStep {
    /// How this step is travelled.
    pub mode: TravelMode,

    /// Instructions for the traveller (used as the label of a walk).
    pub instructions: Option<String>,

    /// Duration text as the provider formatted it.
    pub duration_text: Option<String>,

    /// Distance text as the provider formatted it.
    pub distance_text: Option<String>,

    /// Transit details; present when `mode` is `Transit`.
    pub transit: Option<TransitDetail>,
}

/// One leg of a route.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteLeg {
    /// Ordered steps of this leg.
    pub steps: Vec<RouteStep>,
}

/// One route alternative.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Route {
    /// Provider's summary label for the route, when supplied.
    pub summary: Option<String>,

    /// Ordered legs of this route.
    pub legs: Vec<RouteLeg>,
}

/// The full routing response: one or more route alternatives.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteSet {
    /// Route alternatives in provider order.
    pub routes: Vec<Route>,
}

/// Capability contract for transit routing.
///
/// `Ok(None)` means the provider found no route; `Err` means the
/// provider itself failed (network, auth).
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    /// Request a route.
    async fn route(&self, query: &RouteQuery) -> Result<Option<RouteSet>, ProviderError>;
}
