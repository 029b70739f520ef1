//! Flattening provider routes into transit segments.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{Location, PlanError, SegmentOrder, TransitKind, TransitSegment};

use super::route::{
    DirectionsProvider, RouteQuery, RouteSet, RouteStep, TransitDetail, TravelMode,
};

/// Map a provider vehicle taxonomy label to the internal kind.
///
/// The table is total: any label not recognized maps to `Bus`, so a
/// segment is never silently dropped for having an exotic vehicle.
fn kind_for_vehicle(vehicle: &str) -> TransitKind {
    match vehicle {
        "SUBWAY" | "METRO_RAIL" => TransitKind::Subway,
        "RAIL" | "HEAVY_RAIL" | "COMMUTER_TRAIN" | "HIGH_SPEED_TRAIN" => TransitKind::Train,
        "BUS" | "INTERCITY_BUS" => TransitKind::Bus,
        _ => TransitKind::Bus,
    }
}

/// Normalize a line color to a `#`-prefixed hex string.
fn normalize_color(color: &str) -> String {
    if color.starts_with('#') {
        color.to_string()
    } else {
        format!("#{color}")
    }
}

/// Plans a transit itinerary through an injected directions provider.
pub struct ItineraryPlanner<'a, D: ?Sized> {
    provider: &'a D,
}

impl<'a, D: DirectionsProvider + ?Sized> ItineraryPlanner<'a, D> {
    /// Create a planner over the given provider.
    pub fn new(provider: &'a D) -> Self {
        Self { provider }
    }

    /// Request a transit route and flatten it into ordered segments.
    ///
    /// Issues exactly one routing request (bus + rail + subway, fewer
    /// transfers, alternatives as requested). Fails with
    /// [`PlanError::RouteNotFound`] when the provider reports no route
    /// or the response contains no usable transit or walking stage.
    pub async fn plan(
        &self,
        origin: &Location,
        destination: &Location,
        departure_time: Option<DateTime<Utc>>,
        alternatives: bool,
    ) -> Result<Vec<TransitSegment>, PlanError> {
        let query = RouteQuery::transit(
            origin.clone(),
            destination.clone(),
            departure_time,
            alternatives,
        );

        let route_set = self
            .provider
            .route(&query)
            .await?
            .ok_or(PlanError::RouteNotFound)?;

        let segments = flatten(&route_set);
        if segments.is_empty() {
            return Err(PlanError::RouteNotFound);
        }

        debug!(
            routes = route_set.routes.len(),
            segments = segments.len(),
            "flattened route response"
        );

        Ok(segments)
    }
}

/// Flatten the nested route→leg→step structure into ordered segments.
///
/// Ordering comes from structural position `(route, leg, step)` only.
/// Transit and walking steps become segments; every other mode is
/// dropped. This pipeline reports the pedestrian and transit stages of
/// a journey, nothing else.
fn flatten(route_set: &RouteSet) -> Vec<TransitSegment> {
    let mut segments = Vec::new();

    for (route_idx, route) in route_set.routes.iter().enumerate() {
        for (leg_idx, leg) in route.legs.iter().enumerate() {
            for (step_idx, step) in leg.steps.iter().enumerate() {
                let order = SegmentOrder(route_idx, leg_idx, step_idx);
                match step.mode {
                    TravelMode::Transit => {
                        if let Some(detail) = &step.transit {
                            segments.push(transit_segment(order, step, detail));
                        }
                    }
                    TravelMode::Walking => segments.push(walk_segment(order, step)),
                    TravelMode::Other => {}
                }
            }
        }
    }

    segments
}

fn transit_segment(order: SegmentOrder, step: &RouteStep, detail: &TransitDetail) -> TransitSegment {
    let line = detail
        .line_short_name
        .clone()
        .or_else(|| detail.line_name.clone());

    TransitSegment {
        id: format!("{}-{}-{}", order.0, order.1, order.2),
        order,
        kind: kind_for_vehicle(&detail.vehicle),
        line,
        departure: detail.departure_stop.clone(),
        arrival: detail.arrival_stop.clone(),
        departure_time: detail.departure_time_text.clone().unwrap_or_default(),
        arrival_time: detail.arrival_time_text.clone().unwrap_or_default(),
        duration: step.duration_text.clone().unwrap_or_default(),
        distance: step.distance_text.clone(),
        provider: detail.agency.clone(),
        color: detail.color.as_deref().map(normalize_color),
        headsign: detail.headsign.clone(),
        num_stops: detail.num_stops,
    }
}

fn walk_segment(order: SegmentOrder, step: &RouteStep) -> TransitSegment {
    TransitSegment {
        id: format!("{}-{}-{}-walk", order.0, order.1, order.2),
        order,
        kind: TransitKind::Walk,
        line: None,
        departure: step.instructions.clone().unwrap_or_default(),
        arrival: String::new(),
        departure_time: String::new(),
        arrival_time: String::new(),
        duration: step.duration_text.clone().unwrap_or_default(),
        distance: step.distance_text.clone(),
        provider: None,
        color: None,
        headsign: None,
        num_stops: None,
    }
}
