//! Conversion from maps DTOs to contract types.
//!
//! The wire structures are converted here, at the client boundary;
//! nothing outside the maps module ever handles them.

use crate::domain::{Location, PlaceCandidate};
use crate::itinerary::{Route, RouteLeg, RouteSet, RouteStep, TransitDetail, TravelMode};

use super::types::{ApiPlace, ApiStep, DirectionsResponse, GeocodeResult};

/// Convert the best geocoding match to a location.
pub fn convert_geocode_result(result: &GeocodeResult) -> Location {
    let mut location = Location::new(
        result.formatted_address.clone(),
        result.geometry.location.lat,
        result.geometry.location.lng,
    );

    // The most specific address component doubles as a display name.
    if let Some(component) = result.address_components.first() {
        location = location.with_name(component.long_name.clone());
    }

    location
}

/// Convert a directions response to the contract route structure.
pub fn convert_directions(response: &DirectionsResponse) -> RouteSet {
    RouteSet {
        routes: response
            .routes
            .iter()
            .map(|route| Route {
                summary: route.summary.clone(),
                legs: route
                    .legs
                    .iter()
                    .map(|leg| RouteLeg {
                        steps: leg.steps.iter().map(convert_step).collect(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn convert_step(step: &ApiStep) -> RouteStep {
    let mode = match step.travel_mode.as_str() {
        "TRANSIT" => TravelMode::Transit,
        "WALKING" => TravelMode::Walking,
        _ => TravelMode::Other,
    };

    let transit = step.transit_details.as_ref().map(|details| TransitDetail {
        line_name: details.line.name.clone(),
        line_short_name: details.line.short_name.clone(),
        vehicle: details
            .line
            .vehicle
            .as_ref()
            .and_then(|v| v.kind.clone())
            .unwrap_or_default(),
        departure_stop: details.departure_stop.name.clone(),
        arrival_stop: details.arrival_stop.name.clone(),
        departure_time_text: details.departure_time.as_ref().map(|t| t.text.clone()),
        arrival_time_text: details.arrival_time.as_ref().map(|t| t.text.clone()),
        agency: details.line.agencies.first().map(|a| a.name.clone()),
        color: details.line.color.clone(),
        headsign: details.headsign.clone(),
        num_stops: details.num_stops,
    });

    RouteStep {
        mode,
        instructions: step.html_instructions.clone(),
        duration_text: step.duration.as_ref().map(|t| t.text.clone()),
        distance_text: step.distance.as_ref().map(|t| t.text.clone()),
        transit,
    }
}

/// Convert a place result to a search candidate.
///
/// Identity falls back to the place name when the service omits the
/// stable id. A name repeats across searches, a result index does not,
/// and dedup needs a key that repeats.
pub fn convert_place(place: &ApiPlace) -> PlaceCandidate {
    let name = place
        .name
        .clone()
        .unwrap_or_else(|| "Unknown".to_string());
    let identity = place.place_id.clone().unwrap_or_else(|| name.clone());
    let address = place.vicinity.clone().unwrap_or_default();

    let location = match &place.geometry {
        Some(geometry) => Location::new(
            address.clone(),
            geometry.location.lat,
            geometry.location.lng,
        ),
        None => Location::unresolved(address.clone()),
    };

    PlaceCandidate {
        identity,
        name,
        rating: place.rating,
        review_count: place.user_ratings_total,
        address,
        location,
        image_ref: place
            .photos
            .first()
            .and_then(|p| p.photo_reference.clone()),
        price_level: place.price_level,
        open_now: place.opening_hours.as_ref().and_then(|h| h.open_now),
        category_tags: place.types.clone(),
    }
}
