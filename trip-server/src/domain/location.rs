//! Locations and trip requests.

use std::fmt;

use chrono::{DateTime, Utc};

/// A geographic point with its source address.
///
/// Geocoding produces resolved locations. A location whose coordinates
/// are both exactly zero is the "not yet resolved" sentinel used on the
/// request path: the resolver fills in real coordinates before any
/// downstream component sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// The address as entered or as formatted by the geocoder.
    pub address: String,

    /// Latitude in degrees.
    pub lat: f64,

    /// Longitude in degrees.
    pub lng: f64,

    /// Short display name, when the geocoder supplies one.
    pub name: Option<String>,
}

impl Location {
    /// Create a resolved location.
    pub fn new(address: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            address: address.into(),
            lat,
            lng,
            name: None,
        }
    }

    /// Create an unresolved location from a free-text address.
    ///
    /// The coordinates are the `(0, 0)` sentinel until geocoding runs.
    pub fn unresolved(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            lat: 0.0,
            lng: 0.0,
            name: None,
        }
    }

    /// Attach a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Whether this location carries real coordinates.
    ///
    /// `(0, 0)` is the unresolved sentinel, not a real position (it is in
    /// the Gulf of Guinea, which no supported trip starts from).
    pub fn is_resolved(&self) -> bool {
        self.lat != 0.0 || self.lng != 0.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} ({})", name, self.address),
            None => f.write_str(&self.address),
        }
    }
}

/// Error returned when constructing an invalid trip request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid trip request: {reason}")]
pub struct InvalidTripRequest {
    reason: &'static str,
}

/// One user submission: where from, where to, when, for how long.
///
/// Created once per submission and immutable once handed to the
/// orchestrator. Either endpoint may still be unresolved; the pipeline
/// geocodes them before routing.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRequest {
    /// Trip origin, possibly unresolved.
    pub origin: Location,

    /// Trip destination, possibly unresolved.
    pub destination: Location,

    /// Requested departure time, if the user picked one.
    pub departure_time: Option<DateTime<Utc>>,

    /// Trip length in days. Always at least 1.
    pub duration_days: u32,
}

impl TripRequest {
    /// Create a trip request.
    ///
    /// `duration_days` must be at least 1.
    pub fn new(
        origin: Location,
        destination: Location,
        departure_time: Option<DateTime<Utc>>,
        duration_days: u32,
    ) -> Result<Self, InvalidTripRequest> {
        if duration_days < 1 {
            return Err(InvalidTripRequest {
                reason: "duration must be at least one day",
            });
        }

        Ok(Self {
            origin,
            destination,
            departure_time,
            duration_days,
        })
    }
}
