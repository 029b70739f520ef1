//! Data transfer objects for web requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    Budget, Location, Pace, PlaceRecommendation, PreferenceSet, ResultSnapshot, TransitSegment,
    TripRequest,
};
use crate::trip::{TripPhase, TripStatus};

/// Request to plan a trip.
#[derive(Debug, Deserialize)]
pub struct PlanTripRequest {
    /// Free-text origin address
    pub origin: String,

    /// Free-text destination address
    pub destination: String,

    /// Departure time, RFC 3339 (defaults to "whenever")
    pub departure_time: Option<String>,

    /// Trip length in days (defaults to 1)
    pub duration_days: Option<u32>,

    /// Preference snapshot; omit to skip recommendations entirely
    pub preferences: Option<PreferencesBody>,
}

/// Preference selections in a plan request.
#[derive(Debug, Default, Deserialize)]
pub struct PreferencesBody {
    /// Cuisine labels in selection order
    #[serde(default)]
    pub cuisines: Vec<String>,

    /// Activity labels in selection order
    #[serde(default)]
    pub activities: Vec<String>,

    /// "low", "moderate", or "high" (defaults to moderate)
    pub budget: Option<String>,

    /// "relaxed", "moderate", or "fast" (defaults to moderate)
    pub pace: Option<String>,
}

impl PlanTripRequest {
    /// Convert into the domain request plus optional preference
    /// snapshot. Returns a description of the first invalid field.
    pub fn into_domain(self) -> Result<(TripRequest, Option<PreferenceSet>), String> {
        let departure_time = match self.departure_time.as_deref() {
            Some(raw) => Some(parse_departure(raw)?),
            None => None,
        };

        let request = TripRequest::new(
            Location::unresolved(self.origin),
            Location::unresolved(self.destination),
            departure_time,
            self.duration_days.unwrap_or(1),
        )
        .map_err(|e| e.to_string())?;

        let preferences = self.preferences.map(PreferencesBody::into_domain).transpose()?;

        Ok((request, preferences))
    }
}

impl PreferencesBody {
    fn into_domain(self) -> Result<PreferenceSet, String> {
        let mut prefs = PreferenceSet::new();

        for cuisine in self.cuisines {
            prefs.add_cuisine(cuisine);
        }
        for activity in self.activities {
            prefs.add_activity(activity);
        }

        if let Some(budget) = self.budget.as_deref() {
            prefs.budget = match budget {
                "low" => Budget::Low,
                "moderate" => Budget::Moderate,
                "high" => Budget::High,
                other => return Err(format!("unknown budget: {other}")),
            };
        }

        if let Some(pace) = self.pace.as_deref() {
            prefs.pace = match pace {
                "relaxed" => Pace::Relaxed,
                "moderate" => Pace::Moderate,
                "fast" => Pace::Fast,
                other => return Err(format!("unknown pace: {other}")),
            };
        }

        Ok(prefs)
    }
}

fn parse_departure(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| format!("invalid departure_time: {raw}"))
}

/// Response to a trip submission.
#[derive(Debug, Serialize)]
pub struct SubmitTripResponse {
    /// Generation assigned to this submission
    pub generation: u64,
}

/// Current pipeline status.
#[derive(Debug, Serialize)]
pub struct TripStatusResponse {
    /// "idle", "pending", "ready", or "failed"
    pub state: &'static str,

    /// Pipeline phase while pending
    pub phase: Option<&'static str>,

    /// The result snapshot once ready
    pub snapshot: Option<SnapshotBody>,

    /// Error message when failed
    pub error: Option<String>,

    /// Generation of a failed run
    pub generation: Option<u64>,
}

impl TripStatusResponse {
    /// Render the orchestrator status.
    pub fn from_status(status: &TripStatus) -> Self {
        match status {
            TripStatus::Idle => Self {
                state: "idle",
                phase: None,
                snapshot: None,
                error: None,
                generation: None,
            },
            TripStatus::Pending(phase) => Self {
                state: "pending",
                phase: Some(match phase {
                    TripPhase::Geocoding => "geocoding",
                    TripPhase::Routing => "routing",
                    TripPhase::RecommendationSearch => "recommendation_search",
                }),
                snapshot: None,
                error: None,
                generation: None,
            },
            TripStatus::Ready(snapshot) => Self {
                state: "ready",
                phase: None,
                snapshot: Some(SnapshotBody::from_snapshot(snapshot)),
                error: None,
                generation: None,
            },
            TripStatus::Failed { generation, error } => Self {
                state: "failed",
                phase: None,
                snapshot: None,
                error: Some(error.to_string()),
                generation: Some(*generation),
            },
        }
    }
}

/// A completed trip result.
#[derive(Debug, Serialize)]
pub struct SnapshotBody {
    /// Generation that produced this result
    pub generation: u64,

    /// Ordered itinerary segments
    pub segments: Vec<SegmentBody>,

    /// Ranked place recommendations
    pub recommendations: Vec<RecommendationBody>,
}

impl SnapshotBody {
    fn from_snapshot(snapshot: &ResultSnapshot) -> Self {
        Self {
            generation: snapshot.generation,
            segments: snapshot.segments.iter().map(SegmentBody::from_segment).collect(),
            recommendations: snapshot
                .recommendations
                .iter()
                .map(RecommendationBody::from_recommendation)
                .collect(),
        }
    }
}

/// One itinerary segment.
#[derive(Debug, Serialize)]
pub struct SegmentBody {
    /// Segment id, unique within the itinerary
    pub id: String,

    /// "bus", "train", "subway", "flight", or "walk"
    pub kind: &'static str,

    /// Line label
    pub line: Option<String>,

    /// Boarding stop, or walking instructions
    pub departure: String,

    /// Alighting stop (empty for walks)
    pub arrival: String,

    /// Departure time text
    pub departure_time: String,

    /// Arrival time text
    pub arrival_time: String,

    /// Duration text
    pub duration: String,

    /// Distance text
    pub distance: Option<String>,

    /// Operating agency
    pub provider: Option<String>,

    /// Line color, `#`-prefixed hex
    pub color: Option<String>,

    /// Vehicle headsign
    pub headsign: Option<String>,

    /// Stops ridden
    pub num_stops: Option<u32>,
}

impl SegmentBody {
    fn from_segment(segment: &TransitSegment) -> Self {
        Self {
            id: segment.id.clone(),
            kind: segment.kind.as_str(),
            line: segment.line.clone(),
            departure: segment.departure.clone(),
            arrival: segment.arrival.clone(),
            departure_time: segment.departure_time.clone(),
            arrival_time: segment.arrival_time.clone(),
            duration: segment.duration.clone(),
            distance: segment.distance.clone(),
            provider: segment.provider.clone(),
            color: segment.color.clone(),
            headsign: segment.headsign.clone(),
            num_stops: segment.num_stops,
        }
    }
}

/// One recommended place.
#[derive(Debug, Serialize)]
pub struct RecommendationBody {
    /// Stable place id
    pub id: String,

    /// Place name
    pub name: String,

    /// Rating (0 when unrated)
    pub rating: f64,

    /// Review count behind the rating
    pub review_count: Option<u32>,

    /// Short address
    pub address: String,

    /// Latitude
    pub lat: f64,

    /// Longitude
    pub lng: f64,

    /// Photo reference
    pub image_ref: Option<String>,

    /// Price level, 1-4
    pub price_level: u8,

    /// Whether open right now
    pub open_now: Option<bool>,

    /// Category tags (at most three)
    pub tags: Vec<String>,
}

impl RecommendationBody {
    fn from_recommendation(rec: &PlaceRecommendation) -> Self {
        Self {
            id: rec.id.clone(),
            name: rec.name.clone(),
            rating: rec.rating,
            review_count: rec.review_count,
            address: rec.address.clone(),
            lat: rec.location.lat,
            lng: rec.location.lng,
            image_ref: rec.image_ref.clone(),
            price_level: rec.price_level,
            open_now: rec.open_now,
            tags: rec.tags.clone(),
        }
    }
}

/// Error payload.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable description
    pub error: String,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn plan_request_minimal() {
        let json = r#"{"origin": "Seoul Station", "destination": "Busan Station"}"#;
        let request: PlanTripRequest = serde_json::from_str(json).unwrap();

        let (trip, preferences) = request.into_domain().unwrap();

        assert_eq!(trip.origin.address, "Seoul Station");
        assert!(!trip.origin.is_resolved());
        assert_eq!(trip.duration_days, 1);
        assert!(trip.departure_time.is_none());
        assert!(preferences.is_none());
    }

    #[test]
    fn plan_request_full() {
        let json = r#"{
            "origin": "Seoul Station",
            "destination": "Busan Station",
            "departure_time": "2026-08-15T10:00:00+09:00",
            "duration_days": 3,
            "preferences": {
                "cuisines": ["seafood"],
                "activities": ["beaches", "markets"],
                "budget": "high",
                "pace": "relaxed"
            }
        }"#;
        let request: PlanTripRequest = serde_json::from_str(json).unwrap();

        let (trip, preferences) = request.into_domain().unwrap();
        let preferences = preferences.unwrap();

        assert_eq!(trip.duration_days, 3);
        assert_eq!(
            trip.departure_time,
            Some(Utc.with_ymd_and_hms(2026, 8, 15, 1, 0, 0).unwrap())
        );
        assert_eq!(preferences.terms(), vec!["seafood", "beaches", "markets"]);
        assert_eq!(preferences.budget, Budget::High);
        assert_eq!(preferences.pace, Pace::Relaxed);
    }

    #[test]
    fn empty_preferences_object_is_a_snapshot() {
        // An empty object still means "search with default terms";
        // only a missing field skips recommendations.
        let json = r#"{"origin": "A", "destination": "B", "preferences": {}}"#;
        let request: PlanTripRequest = serde_json::from_str(json).unwrap();

        let (_, preferences) = request.into_domain().unwrap();
        assert!(preferences.unwrap().is_empty());
    }

    #[test]
    fn invalid_fields_rejected() {
        let bad_budget: PlanTripRequest = serde_json::from_str(
            r#"{"origin": "A", "destination": "B", "preferences": {"budget": "lavish"}}"#,
        )
        .unwrap();
        assert_eq!(
            bad_budget.into_domain().unwrap_err(),
            "unknown budget: lavish"
        );

        let bad_pace: PlanTripRequest = serde_json::from_str(
            r#"{"origin": "A", "destination": "B", "preferences": {"pace": "frantic"}}"#,
        )
        .unwrap();
        assert_eq!(bad_pace.into_domain().unwrap_err(), "unknown pace: frantic");

        let bad_time: PlanTripRequest = serde_json::from_str(
            r#"{"origin": "A", "destination": "B", "departure_time": "next tuesday"}"#,
        )
        .unwrap();
        assert!(bad_time.into_domain().unwrap_err().contains("departure_time"));

        let bad_duration: PlanTripRequest =
            serde_json::from_str(r#"{"origin": "A", "destination": "B", "duration_days": 0}"#)
                .unwrap();
        assert!(bad_duration.into_domain().is_err());
    }

    #[test]
    fn status_rendering() {
        let idle = TripStatusResponse::from_status(&TripStatus::Idle);
        assert_eq!(idle.state, "idle");

        let pending = TripStatusResponse::from_status(&TripStatus::Pending(TripPhase::Routing));
        assert_eq!(pending.state, "pending");
        assert_eq!(pending.phase, Some("routing"));

        let failed = TripStatusResponse::from_status(&TripStatus::Failed {
            generation: 3,
            error: crate::domain::PlanError::RouteNotFound,
        });
        assert_eq!(failed.state, "failed");
        assert_eq!(failed.generation, Some(3));
        assert_eq!(failed.error.as_deref(), Some("no transit route found"));
    }
}
