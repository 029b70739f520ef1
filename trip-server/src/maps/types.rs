//! Maps API response DTOs.
//!
//! These types map directly to the service's JSON responses. They use
//! `Option` liberally because the service omits fields rather than
//! sending null in many cases. Every response carries a `status` string;
//! HTTP status codes are almost always 200.

use serde::Deserialize;

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Geometry wrapper around a position.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    /// The position itself.
    pub location: LatLng,
}

/// Response from the geocoding endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    /// Application-level status ("OK", "ZERO_RESULTS", ...).
    pub status: String,

    /// Matches, best first.
    #[serde(default)]
    pub results: Vec<GeocodeResult>,

    /// Human-readable detail accompanying an error status.
    pub error_message: Option<String>,
}

/// A single geocoding match.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    /// Canonical formatted address.
    pub formatted_address: String,

    /// Position of the match.
    pub geometry: Geometry,

    /// Address components, most specific first.
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

/// One component of a formatted address.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressComponent {
    /// Full text of the component.
    pub long_name: String,
}

/// Response from the directions endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    /// Application-level status ("OK", "ZERO_RESULTS", "NOT_FOUND", ...).
    pub status: String,

    /// Route alternatives, preferred first.
    #[serde(default)]
    pub routes: Vec<ApiRoute>,

    /// Human-readable detail accompanying an error status.
    pub error_message: Option<String>,
}

/// One route alternative.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiRoute {
    /// Short description of the route.
    pub summary: Option<String>,

    /// Legs of the route. Without waypoints there is exactly one.
    #[serde(default)]
    pub legs: Vec<ApiLeg>,
}

/// One leg of a route.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiLeg {
    /// Ordered steps of this leg.
    #[serde(default)]
    pub steps: Vec<ApiStep>,
}

/// A text rendering of a duration or distance.
#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    /// Human-readable text (e.g. "25 mins", "12.3 km").
    pub text: String,
}

/// One step of a leg.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiStep {
    /// Travel mode label ("TRANSIT", "WALKING", "DRIVING", ...).
    pub travel_mode: String,

    /// Instructions for the traveller (may contain HTML).
    pub html_instructions: Option<String>,

    /// Step duration.
    pub duration: Option<TextValue>,

    /// Step distance.
    pub distance: Option<TextValue>,

    /// Transit details; present only for transit steps.
    pub transit_details: Option<ApiTransitDetails>,
}

/// Transit-specific details of a step.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiTransitDetails {
    /// Boarding stop.
    pub departure_stop: ApiStop,

    /// Alighting stop.
    pub arrival_stop: ApiStop,

    /// Departure time at the boarding stop.
    pub departure_time: Option<TextValue>,

    /// Arrival time at the alighting stop.
    pub arrival_time: Option<TextValue>,

    /// Direction shown on the vehicle.
    pub headsign: Option<String>,

    /// Number of stops ridden.
    pub num_stops: Option<u32>,

    /// The line being ridden.
    pub line: ApiLine,
}

/// A transit stop.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiStop {
    /// Stop name.
    pub name: String,
}

/// A transit line.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiLine {
    /// Full line name.
    pub name: Option<String>,

    /// Short line label, preferred for display.
    pub short_name: Option<String>,

    /// Line color as a hex string.
    pub color: Option<String>,

    /// Vehicle running this line.
    pub vehicle: Option<ApiVehicle>,

    /// Agencies operating this line.
    #[serde(default)]
    pub agencies: Vec<ApiAgency>,
}

/// The vehicle of a transit line.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiVehicle {
    /// Vehicle taxonomy label ("SUBWAY", "HEAVY_RAIL", "BUS", ...).
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// An operating agency.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiAgency {
    /// Agency name.
    pub name: String,
}

/// Response from the nearby-search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacesResponse {
    /// Application-level status ("OK", "ZERO_RESULTS", ...).
    pub status: String,

    /// Matching places in relevance order.
    #[serde(default)]
    pub results: Vec<ApiPlace>,

    /// Human-readable detail accompanying an error status.
    pub error_message: Option<String>,
}

/// A single place result.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPlace {
    /// Stable place identifier.
    pub place_id: Option<String>,

    /// Place name.
    pub name: Option<String>,

    /// Average rating.
    pub rating: Option<f64>,

    /// Number of ratings behind the average.
    pub user_ratings_total: Option<u32>,

    /// Short address / neighborhood description.
    pub vicinity: Option<String>,

    /// Position of the place.
    pub geometry: Option<Geometry>,

    /// Photos of the place.
    #[serde(default)]
    pub photos: Vec<ApiPhoto>,

    /// Price level on a 1-4 scale.
    pub price_level: Option<u8>,

    /// Opening-hours summary.
    pub opening_hours: Option<ApiOpeningHours>,

    /// Category tags.
    #[serde(default)]
    pub types: Vec<String>,
}

/// A photo reference.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPhoto {
    /// Opaque reference usable with the photo endpoint.
    pub photo_reference: Option<String>,
}

/// Opening-hours summary.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiOpeningHours {
    /// Whether the place is open right now.
    pub open_now: Option<bool>,
}
