//! The trip pipeline state machine.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::domain::{PlanError, PreferenceSet, ResultSnapshot, TripRequest};
use crate::geocode::{GeocodingProvider, GeocodingResolver};
use crate::itinerary::{DirectionsProvider, ItineraryPlanner};
use crate::recommend::{AggregatorConfig, PlaceSearchProvider, RecommendationAggregator};

/// Which stage of the pipeline a pending run is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripPhase {
    Geocoding,
    Routing,
    RecommendationSearch,
}

/// Observable state of the orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub enum TripStatus {
    /// No trip has been submitted yet.
    Idle,

    /// A run is in flight.
    Pending(TripPhase),

    /// The latest run completed; the snapshot is final for its
    /// generation.
    Ready(Arc<ResultSnapshot>),

    /// The latest run failed.
    Failed {
        /// Generation of the failed run.
        generation: u64,
        /// Why it failed.
        error: PlanError,
    },
}

/// Generation counter plus the status it guards.
///
/// The one piece of mutable shared state in the pipeline. Every update
/// goes through [`TripOrchestrator::publish`] while holding the lock, so
/// a stale run can never clobber a newer one; the lock is never held
/// across an await.
struct Shared {
    generation: u64,
    status: TripStatus,
}

/// Sequences one trip submission through geocoding, routing, and
/// recommendation search.
///
/// `submit` is fire-and-forget: it spawns the pipeline and returns the
/// generation assigned to the run. Results arrive through
/// [`current_snapshot`](Self::current_snapshot) or a
/// [`subscribe`](Self::subscribe) channel. Submitting again while a run
/// is in flight supersedes it; the older run's late results are
/// discarded by generation check, no cancellation needed.
#[derive(Clone)]
pub struct TripOrchestrator {
    geocoding: Arc<dyn GeocodingProvider>,
    directions: Arc<dyn DirectionsProvider>,
    places: Arc<dyn PlaceSearchProvider>,
    config: AggregatorConfig,
    shared: Arc<Mutex<Shared>>,
    notify: Arc<watch::Sender<TripStatus>>,
}

impl TripOrchestrator {
    /// Create an orchestrator over the three capability providers, with
    /// the default aggregator configuration.
    pub fn new(
        geocoding: Arc<dyn GeocodingProvider>,
        directions: Arc<dyn DirectionsProvider>,
        places: Arc<dyn PlaceSearchProvider>,
    ) -> Self {
        Self::with_config(geocoding, directions, places, AggregatorConfig::default())
    }

    /// Create an orchestrator with an explicit aggregator configuration.
    pub fn with_config(
        geocoding: Arc<dyn GeocodingProvider>,
        directions: Arc<dyn DirectionsProvider>,
        places: Arc<dyn PlaceSearchProvider>,
        config: AggregatorConfig,
    ) -> Self {
        let (notify, _) = watch::channel(TripStatus::Idle);
        Self {
            geocoding,
            directions,
            places,
            config,
            shared: Arc::new(Mutex::new(Shared {
                generation: 0,
                status: TripStatus::Idle,
            })),
            notify: Arc::new(notify),
        }
    }

    /// Submit a trip. Returns the generation assigned to this run.
    ///
    /// A `None` preference snapshot skips recommendation search
    /// entirely; an empty-but-present snapshot searches the default
    /// terms.
    pub fn submit(&self, request: TripRequest, preferences: Option<PreferenceSet>) -> u64 {
        let generation = {
            let mut shared = self.shared.lock().unwrap();
            shared.generation += 1;
            shared.status = TripStatus::Pending(TripPhase::Geocoding);
            let _ = self.notify.send_replace(shared.status.clone());
            shared.generation
        };

        info!(generation, origin = %request.origin, destination = %request.destination, "trip submitted");

        let this = self.clone();
        tokio::spawn(async move {
            this.run(generation, request, preferences).await;
        });

        generation
    }

    /// The latest observable state.
    pub fn current_snapshot(&self) -> TripStatus {
        self.shared.lock().unwrap().status.clone()
    }

    /// Subscribe to status changes.
    pub fn subscribe(&self) -> watch::Receiver<TripStatus> {
        self.notify.subscribe()
    }

    /// Update the status, unless `generation` has been superseded.
    ///
    /// Returns false when the update was discarded as stale.
    fn publish(&self, generation: u64, status: TripStatus) -> bool {
        let mut shared = self.shared.lock().unwrap();
        if shared.generation != generation {
            debug!(
                generation,
                current = shared.generation,
                "discarding stale pipeline update"
            );
            return false;
        }
        shared.status = status.clone();
        let _ = self.notify.send_replace(status);
        true
    }

    /// Drive one submission through the pipeline.
    async fn run(
        &self,
        generation: u64,
        request: TripRequest,
        preferences: Option<PreferenceSet>,
    ) {
        // Geocoding. Origin and destination have no ordering dependency
        // on each other; routing waits for both.
        let resolver = GeocodingResolver::new(&*self.geocoding);
        let (origin, destination) = tokio::join!(
            resolver.resolve(&request.origin),
            resolver.resolve(&request.destination),
        );

        let (origin, destination) = match (origin, destination) {
            (Ok(o), Ok(d)) => (o, d),
            (Err(e), _) | (_, Err(e)) => {
                self.fail(generation, e);
                return;
            }
        };

        if !self.publish(generation, TripStatus::Pending(TripPhase::Routing)) {
            return;
        }

        // Routing.
        let planner = ItineraryPlanner::new(&*self.directions);
        let segments = match planner
            .plan(&origin, &destination, request.departure_time, true)
            .await
        {
            Ok(segments) => segments,
            Err(e) => {
                self.fail(generation, e);
                return;
            }
        };

        // Recommendation search, when a preference snapshot exists.
        // Term-level failures are absorbed inside the aggregator; there
        // is no error path out of this phase.
        let recommendations = match preferences {
            Some(prefs) => {
                if !self.publish(
                    generation,
                    TripStatus::Pending(TripPhase::RecommendationSearch),
                ) {
                    return;
                }
                let aggregator =
                    RecommendationAggregator::with_config(&*self.places, self.config.clone());
                aggregator.aggregate(&destination, &prefs).await
            }
            None => Vec::new(),
        };

        let snapshot = ResultSnapshot::new(segments, recommendations, generation);
        if self.publish(generation, TripStatus::Ready(Arc::new(snapshot))) {
            info!(generation, "trip pipeline completed");
        }
    }

    /// Publish a fatal error for this run, unless superseded.
    fn fail(&self, generation: u64, error: PlanError) {
        warn!(generation, %error, "trip pipeline failed");
        self.publish(generation, TripStatus::Failed { generation, error });
    }
}
