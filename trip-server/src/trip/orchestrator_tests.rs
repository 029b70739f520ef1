//! Scenario tests for the trip pipeline.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::domain::{
    Location, PlaceCandidate, PlanError, PreferenceSet, ProviderError, TripRequest,
};
use crate::geocode::GeocodingProvider;
use crate::itinerary::{
    DirectionsProvider, Route, RouteLeg, RouteQuery, RouteSet, RouteStep, TransitDetail,
    TravelMode,
};
use crate::recommend::PlaceSearchProvider;

use super::{TripOrchestrator, TripStatus};

/// Geocoder mock: fixed address book, misses answer "no match".
struct ScriptedGeocoder {
    answers: HashMap<String, Location>,
    calls: AtomicUsize,
}

impl ScriptedGeocoder {
    fn new(entries: &[(&str, f64, f64)]) -> Arc<Self> {
        let answers = entries
            .iter()
            .map(|(addr, lat, lng)| ((*addr).to_string(), Location::new(*addr, *lat, *lng)))
            .collect();
        Arc::new(Self {
            answers,
            calls: AtomicUsize::new(0),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GeocodingProvider for ScriptedGeocoder {
    async fn geocode(&self, address: &str) -> Result<Option<Location>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.answers.get(address).cloned())
    }
}

/// Directions mock: one canned response, call counters, and an optional
/// gate that parks the first request until the test releases it.
struct ScriptedDirections {
    response: Option<RouteSet>,
    calls: AtomicUsize,
    completed: AtomicUsize,
    gate: Mutex<Option<Arc<Notify>>>,
}

impl ScriptedDirections {
    fn returning(response: Option<RouteSet>) -> Arc<Self> {
        Arc::new(Self {
            response,
            calls: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
            gate: Mutex::new(None),
        })
    }

    /// Park the next request on the returned handle until notified.
    fn gate_next_call(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn completed_count(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DirectionsProvider for ScriptedDirections {
    async fn route(&self, _query: &RouteQuery) -> Result<Option<RouteSet>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let gate = self.gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.completed.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

/// Place search mock: same canned list for every keyword.
struct ScriptedPlaces {
    results: Vec<PlaceCandidate>,
    searched: Mutex<Vec<String>>,
}

impl ScriptedPlaces {
    fn returning(results: Vec<PlaceCandidate>) -> Arc<Self> {
        Arc::new(Self {
            results,
            searched: Mutex::new(Vec::new()),
        })
    }

    fn searched(&self) -> Vec<String> {
        self.searched.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlaceSearchProvider for ScriptedPlaces {
    async fn nearby_search(
        &self,
        _location: &Location,
        _category: &str,
        _radius_m: u32,
        keyword: Option<&str>,
    ) -> Result<Vec<PlaceCandidate>, ProviderError> {
        self.searched
            .lock()
            .unwrap()
            .push(keyword.unwrap_or_default().to_string());
        Ok(self.results.clone())
    }
}

fn seoul_busan_route() -> RouteSet {
    let walk = RouteStep {
        mode: TravelMode::Walking,
        instructions: Some("Walk to Seoul Station".to_string()),
        duration_text: Some("4 mins".to_string()),
        distance_text: Some("300 m".to_string()),
        transit: None,
    };
    let train = RouteStep {
        mode: TravelMode::Transit,
        instructions: None,
        duration_text: Some("2 hours 30 mins".to_string()),
        distance_text: Some("417 km".to_string()),
        transit: Some(TransitDetail {
            line_name: Some("Gyeongbu Line".to_string()),
            line_short_name: Some("KTX".to_string()),
            vehicle: "HIGH_SPEED_TRAIN".to_string(),
            departure_stop: "Seoul Station".to_string(),
            arrival_stop: "Busan Station".to_string(),
            departure_time_text: Some("10:00 AM".to_string()),
            arrival_time_text: Some("12:30 PM".to_string()),
            agency: Some("Korail".to_string()),
            color: Some("003DA5".to_string()),
            headsign: Some("Busan".to_string()),
            num_stops: Some(4),
        }),
    };

    RouteSet {
        routes: vec![Route {
            summary: Some("KTX".to_string()),
            legs: vec![RouteLeg {
                steps: vec![walk, train],
            }],
        }],
    }
}

fn place(identity: &str, name: &str) -> PlaceCandidate {
    PlaceCandidate {
        identity: identity.to_string(),
        name: name.to_string(),
        rating: Some(4.5),
        review_count: Some(321),
        address: "Busan".to_string(),
        location: Location::new("Busan", 35.1, 129.03),
        image_ref: None,
        price_level: None,
        open_now: Some(true),
        category_tags: vec!["restaurant".to_string()],
    }
}

fn request(origin: &str, destination: &str) -> TripRequest {
    TripRequest::new(
        Location::unresolved(origin),
        Location::unresolved(destination),
        None,
        1,
    )
    .unwrap()
}

async fn wait_ready(orchestrator: &TripOrchestrator, generation: u64) -> Arc<crate::domain::ResultSnapshot> {
    let mut rx = orchestrator.subscribe();
    let status = rx
        .wait_for(|s| matches!(s, TripStatus::Ready(snap) if snap.generation == generation))
        .await
        .unwrap();
    match &*status {
        TripStatus::Ready(snap) => snap.clone(),
        _ => unreachable!(),
    }
}

async fn wait_failed(orchestrator: &TripOrchestrator, generation: u64) -> PlanError {
    let mut rx = orchestrator.subscribe();
    let status = rx
        .wait_for(|s| matches!(s, TripStatus::Failed { generation: g, .. } if *g == generation))
        .await
        .unwrap();
    match &*status {
        TripStatus::Failed { error, .. } => error.clone(),
        _ => unreachable!(),
    }
}

#[tokio::test]
async fn end_to_end_seoul_to_busan() {
    let geocoder = ScriptedGeocoder::new(&[
        ("Seoul Station", 37.55, 126.97),
        ("Busan Station", 35.11, 129.04),
    ]);
    let directions = ScriptedDirections::returning(Some(seoul_busan_route()));
    // Every search returns the same three places, so dedup must collapse
    // the three default-term searches down to three entries.
    let places = ScriptedPlaces::returning(vec![
        place("p1", "Jagalchi Market"),
        place("p2", "Gamcheon Culture Village"),
        place("p3", "Haeundae Beach"),
    ]);

    let orchestrator = TripOrchestrator::new(
        geocoder.clone(),
        directions.clone(),
        places.clone(),
    );

    // No departure time, no selections, an empty preference snapshot.
    let generation = orchestrator.submit(
        request("Seoul Station", "Busan Station"),
        Some(PreferenceSet::new()),
    );
    assert_eq!(generation, 1);

    let snapshot = wait_ready(&orchestrator, generation).await;

    assert_eq!(geocoder.call_count(), 2);
    assert_eq!(directions.call_count(), 1);
    assert_eq!(places.searched(), ["restaurant", "attraction", "cafe"]);

    assert!(!snapshot.segments.is_empty());
    for pair in snapshot.segments.windows(2) {
        assert!(pair[0].order < pair[1].order);
    }

    assert!(snapshot.recommendations.len() <= 10);
    assert_eq!(snapshot.recommendations.len(), 3);
    assert_eq!(snapshot.generation, 1);
}

#[tokio::test]
async fn destination_address_failure_skips_routing() {
    // Origin resolves, destination is garbage.
    let geocoder = ScriptedGeocoder::new(&[("Seoul Station", 37.55, 126.97)]);
    let directions = ScriptedDirections::returning(Some(seoul_busan_route()));
    let places = ScriptedPlaces::returning(Vec::new());

    let orchestrator = TripOrchestrator::new(
        geocoder.clone(),
        directions.clone(),
        places.clone(),
    );

    let generation = orchestrator.submit(
        request("Seoul Station", "qwxzzky"),
        Some(PreferenceSet::new()),
    );

    let error = wait_failed(&orchestrator, generation).await;
    assert_eq!(error, PlanError::AddressNotFound("qwxzzky".into()));

    // The directions provider was never invoked.
    assert_eq!(directions.call_count(), 0);
    assert!(places.searched().is_empty());
}

#[tokio::test]
async fn no_preference_snapshot_skips_search() {
    let geocoder = ScriptedGeocoder::new(&[
        ("Seoul Station", 37.55, 126.97),
        ("Busan Station", 35.11, 129.04),
    ]);
    let directions = ScriptedDirections::returning(Some(seoul_busan_route()));
    let places = ScriptedPlaces::returning(vec![place("p1", "Jagalchi Market")]);

    let orchestrator = TripOrchestrator::new(
        geocoder.clone(),
        directions.clone(),
        places.clone(),
    );

    let generation = orchestrator.submit(request("Seoul Station", "Busan Station"), None);
    let snapshot = wait_ready(&orchestrator, generation).await;

    assert!(snapshot.recommendations.is_empty());
    assert!(places.searched().is_empty());
}

#[tokio::test]
async fn no_route_fails_run() {
    let geocoder = ScriptedGeocoder::new(&[
        ("Seoul Station", 37.55, 126.97),
        ("Busan Station", 35.11, 129.04),
    ]);
    let directions = ScriptedDirections::returning(None);
    let places = ScriptedPlaces::returning(Vec::new());

    let orchestrator = TripOrchestrator::new(geocoder, directions, places.clone());

    let generation = orchestrator.submit(
        request("Seoul Station", "Busan Station"),
        Some(PreferenceSet::new()),
    );

    let error = wait_failed(&orchestrator, generation).await;
    assert_eq!(error, PlanError::RouteNotFound);
    assert!(places.searched().is_empty());
}

#[tokio::test]
async fn second_submission_supersedes_first() {
    let geocoder = ScriptedGeocoder::new(&[
        ("Seoul Station", 37.55, 126.97),
        ("Busan Station", 35.11, 129.04),
        ("Gangneung Station", 37.76, 128.9),
    ]);
    let directions = ScriptedDirections::returning(Some(seoul_busan_route()));
    let places = ScriptedPlaces::returning(Vec::new());

    let orchestrator = TripOrchestrator::new(
        geocoder.clone(),
        directions.clone(),
        places.clone(),
    );

    // Park the first run inside its routing call.
    let gate = directions.gate_next_call();
    let first = orchestrator.submit(
        request("Seoul Station", "Busan Station"),
        Some(PreferenceSet::new()),
    );

    // Wait until the first run has actually reached the provider before
    // superseding it.
    while directions.call_count() == 0 {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    let second = orchestrator.submit(
        request("Seoul Station", "Gangneung Station"),
        Some(PreferenceSet::new()),
    );
    assert_eq!((first, second), (1, 2));

    let snapshot = wait_ready(&orchestrator, second).await;
    assert_eq!(snapshot.generation, 2);

    // Release the first run and let its late result arrive.
    gate.notify_one();
    while directions.completed_count() < 2 {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    tokio::time::sleep(Duration::from_millis(20)).await;

    // The stale result was discarded: still the second generation.
    match orchestrator.current_snapshot() {
        TripStatus::Ready(snap) => assert_eq!(snap.generation, 2),
        other => panic!("expected Ready, got {other:?}"),
    }
}

#[tokio::test]
async fn resolved_endpoints_skip_geocoding() {
    let geocoder = ScriptedGeocoder::new(&[]);
    let directions = ScriptedDirections::returning(Some(seoul_busan_route()));
    let places = ScriptedPlaces::returning(Vec::new());

    let orchestrator = TripOrchestrator::new(
        geocoder.clone(),
        directions.clone(),
        places,
    );

    let already_resolved = TripRequest::new(
        Location::new("Seoul Station", 37.55, 126.97),
        Location::new("Busan Station", 35.11, 129.04),
        None,
        3,
    )
    .unwrap();

    let generation = orchestrator.submit(already_resolved, None);
    wait_ready(&orchestrator, generation).await;

    assert_eq!(geocoder.call_count(), 0);
    assert_eq!(directions.call_count(), 1);
}

#[tokio::test]
async fn status_starts_idle_and_becomes_ready() {
    let geocoder = ScriptedGeocoder::new(&[
        ("Seoul Station", 37.55, 126.97),
        ("Busan Station", 35.11, 129.04),
    ]);
    let directions = ScriptedDirections::returning(Some(seoul_busan_route()));
    let places = ScriptedPlaces::returning(Vec::new());

    let orchestrator = TripOrchestrator::new(geocoder, directions, places);
    assert_eq!(orchestrator.current_snapshot(), TripStatus::Idle);

    let generation = orchestrator.submit(request("Seoul Station", "Busan Station"), None);
    wait_ready(&orchestrator, generation).await;

    match orchestrator.current_snapshot() {
        TripStatus::Ready(snap) => assert_eq!(snap.generation, generation),
        other => panic!("expected Ready, got {other:?}"),
    }
}
