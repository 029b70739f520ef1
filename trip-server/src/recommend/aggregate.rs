//! Search fan-out, merge, and normalization.

use std::collections::HashSet;

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{debug, warn};

use crate::domain::{Location, PlaceCandidate, PlaceRecommendation, PreferenceSet, ProviderError};

/// Terms searched when the user selected no preferences at all.
const DEFAULT_TERMS: [&str; 3] = ["restaurant", "attraction", "cafe"];

/// Capability contract for nearby-place search.
///
/// An empty result list means "no results", not failure; `Err` is a
/// transport-level failure of that one search.
#[async_trait]
pub trait PlaceSearchProvider: Send + Sync {
    /// Search for places near a location.
    async fn nearby_search(
        &self,
        location: &Location,
        category: &str,
        radius_m: u32,
        keyword: Option<&str>,
    ) -> Result<Vec<PlaceCandidate>, ProviderError>;
}

/// Bounds and knobs for one aggregation.
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Place category passed to every search.
    pub category: String,

    /// Search radius in meters.
    pub radius_m: u32,

    /// Maximum number of search terms (and so provider calls) per run.
    pub max_terms: usize,

    /// How many results to keep from each term's search.
    pub per_term: usize,

    /// Maximum recommendations in the final list.
    pub max_results: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            category: "restaurant".to_string(),
            radius_m: 5000,
            max_terms: 5,
            per_term: 3,
            max_results: 10,
        }
    }
}

impl AggregatorConfig {
    /// Variant used by the detail page, which shows a longer list.
    pub fn detail_page() -> Self {
        Self {
            max_results: 12,
            ..Self::default()
        }
    }

    /// Variant searching tourist attractions instead of restaurants.
    pub fn attractions() -> Self {
        Self {
            category: "tourist_attraction".to_string(),
            ..Self::default()
        }
    }
}

/// Merges bounded nearby searches into a ranked recommendation list.
pub struct RecommendationAggregator<'a, P: ?Sized> {
    provider: &'a P,
    config: AggregatorConfig,
}

impl<'a, P: PlaceSearchProvider + ?Sized> RecommendationAggregator<'a, P> {
    /// Create an aggregator with the default configuration.
    pub fn new(provider: &'a P) -> Self {
        Self::with_config(provider, AggregatorConfig::default())
    }

    /// Create an aggregator with an explicit configuration.
    pub fn with_config(provider: &'a P, config: AggregatorConfig) -> Self {
        Self { provider, config }
    }

    /// Gather recommendations near `destination` for the given
    /// preference snapshot.
    ///
    /// Never fails: a term whose search errors is logged and contributes
    /// zero candidates, so the caller sees a possibly-shorter list
    /// rather than an error. Output order is term-priority order, then
    /// provider relevance within a term, after first-occurrence dedup.
    pub async fn aggregate(
        &self,
        destination: &Location,
        preferences: &PreferenceSet,
    ) -> Vec<PlaceRecommendation> {
        let terms = search_terms(preferences, self.config.max_terms);

        // All term searches run concurrently; join_all preserves input
        // order, so the merge below is fixed by term index regardless of
        // completion order.
        let searches = terms.iter().map(|term| {
            self.provider.nearby_search(
                destination,
                &self.config.category,
                self.config.radius_m,
                Some(term.as_str()),
            )
        });
        let results = join_all(searches).await;

        let mut candidates: Vec<PlaceCandidate> = Vec::new();
        for (term, result) in terms.iter().zip(results) {
            match result {
                Ok(places) => {
                    debug!(term = %term, found = places.len(), "place search completed");
                    candidates.extend(places.into_iter().take(self.config.per_term));
                }
                Err(e) => {
                    warn!(term = %term, error = %e, "place search failed, skipping term");
                }
            }
        }

        dedup_by_identity(&mut candidates);
        candidates.truncate(self.config.max_results);

        candidates
            .into_iter()
            .map(PlaceRecommendation::from_candidate)
            .collect()
    }
}

/// Build the bounded search term list for a preference snapshot:
/// cuisines then activities in selection order, the fixed defaults when
/// nothing is selected, truncated to `max_terms`.
fn search_terms(preferences: &PreferenceSet, max_terms: usize) -> Vec<String> {
    let mut terms: Vec<String> = if preferences.is_empty() {
        DEFAULT_TERMS.iter().map(|t| t.to_string()).collect()
    } else {
        preferences.terms().iter().map(|t| t.to_string()).collect()
    };
    terms.truncate(max_terms);
    terms
}

/// Remove duplicate identities, keeping the first occurrence.
///
/// First occurrence wins so that earlier-selected preference terms keep
/// their rank. That is the ranking signal.
fn dedup_by_identity(candidates: &mut Vec<PlaceCandidate>) {
    let mut seen = HashSet::new();
    candidates.retain(|c| seen.insert(c.identity.clone()));
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use crate::domain::{Location, PlaceCandidate};

    use super::{dedup_by_identity, search_terms, DEFAULT_TERMS};

    fn candidate(identity: String) -> PlaceCandidate {
        PlaceCandidate {
            identity,
            name: "Place".to_string(),
            rating: None,
            review_count: None,
            address: String::new(),
            location: Location::unresolved(""),
            image_ref: None,
            price_level: None,
            open_now: None,
            category_tags: Vec::new(),
        }
    }

    proptest! {
        /// Dedup leaves exactly one candidate per identity and keeps
        /// the first occurrence's position relative to other survivors.
        #[test]
        fn dedup_keeps_unique_first_occurrences(ids in proptest::collection::vec("[a-e]", 0..30)) {
            let mut candidates: Vec<PlaceCandidate> =
                ids.iter().cloned().map(candidate).collect();
            dedup_by_identity(&mut candidates);

            let surviving: Vec<&str> =
                candidates.iter().map(|c| c.identity.as_str()).collect();

            // One survivor per distinct input identity, in first-seen order.
            let mut expected: Vec<&str> = Vec::new();
            for id in &ids {
                if !expected.contains(&id.as_str()) {
                    expected.push(id.as_str());
                }
            }
            prop_assert_eq!(surviving, expected);
        }

        /// The term list never exceeds the bound and never comes out
        /// empty: an empty selection substitutes the fixed defaults.
        #[test]
        fn term_list_is_bounded_and_nonempty(
            cuisines in proptest::collection::vec("[a-z]{1,8}", 0..10),
            activities in proptest::collection::vec("[a-z]{1,8}", 0..10),
        ) {
            let mut prefs = crate::domain::PreferenceSet::new();
            for c in &cuisines {
                prefs.add_cuisine(c.clone());
            }
            for a in &activities {
                prefs.add_activity(a.clone());
            }

            let terms = search_terms(&prefs, 5);

            prop_assert!(!terms.is_empty());
            prop_assert!(terms.len() <= 5);
            if prefs.is_empty() {
                prop_assert_eq!(terms, DEFAULT_TERMS.to_vec());
            }
        }
    }
}
