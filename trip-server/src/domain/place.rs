//! Place search candidates and normalized recommendations.

use super::Location;

/// Default price level (mid-tier on the 1-4 scale) applied when the
/// provider omits one.
const DEFAULT_PRICE_LEVEL: u8 = 2;

/// How many category tags a recommendation keeps.
const MAX_TAGS: usize = 3;

/// Raw result from a single nearby-place search.
///
/// Fields are optional wherever the provider may omit them; defaults are
/// applied once, during normalization into [`PlaceRecommendation`],
/// never inline at use sites.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceCandidate {
    /// Stable key used to deduplicate results across searches.
    pub identity: String,

    /// Place name.
    pub name: String,

    /// Average rating, when the provider supplies one.
    pub rating: Option<f64>,

    /// Number of reviews behind the rating.
    pub review_count: Option<u32>,

    /// Short address or vicinity description.
    pub address: String,

    /// Resolved position of the place.
    pub location: Location,

    /// Opaque reference to a photo, when available.
    pub image_ref: Option<String>,

    /// Price level on a 1-4 scale.
    pub price_level: Option<u8>,

    /// Whether the place is open right now.
    pub open_now: Option<bool>,

    /// Provider category tags, untruncated.
    pub category_tags: Vec<String>,
}

/// A deduplicated, normalized place exposed downstream.
///
/// Same shape as [`PlaceCandidate`] with the default table applied:
/// rating 0.0 when absent, price level 2 when absent, tags truncated to
/// the first three.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceRecommendation {
    /// Same identity key as the candidate.
    pub id: String,

    /// Place name.
    pub name: String,

    /// Average rating; 0.0 means "no rating reported".
    pub rating: f64,

    /// Number of reviews behind the rating.
    pub review_count: Option<u32>,

    /// Short address or vicinity description.
    pub address: String,

    /// Resolved position of the place.
    pub location: Location,

    /// Opaque reference to a photo, when available.
    pub image_ref: Option<String>,

    /// Price level on a 1-4 scale.
    pub price_level: u8,

    /// Whether the place is open right now.
    pub open_now: Option<bool>,

    /// At most three category tags.
    pub tags: Vec<String>,
}

impl PlaceRecommendation {
    /// Normalize a candidate, applying the per-field default table.
    pub fn from_candidate(candidate: PlaceCandidate) -> Self {
        let mut tags = candidate.category_tags;
        tags.truncate(MAX_TAGS);

        Self {
            id: candidate.identity,
            name: candidate.name,
            rating: candidate.rating.unwrap_or(0.0),
            review_count: candidate.review_count,
            address: candidate.address,
            location: candidate.location,
            image_ref: candidate.image_ref,
            price_level: candidate.price_level.unwrap_or(DEFAULT_PRICE_LEVEL),
            open_now: candidate.open_now,
            tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(identity: &str) -> PlaceCandidate {
        PlaceCandidate {
            identity: identity.to_string(),
            name: "Gwangjang Market".to_string(),
            rating: None,
            review_count: None,
            address: "88 Changgyeonggung-ro".to_string(),
            location: Location::new("88 Changgyeonggung-ro", 37.57, 127.0),
            image_ref: None,
            price_level: None,
            open_now: None,
            category_tags: Vec::new(),
        }
    }

    #[test]
    fn defaults_applied_once() {
        let rec = PlaceRecommendation::from_candidate(candidate("p1"));

        assert_eq!(rec.id, "p1");
        assert_eq!(rec.rating, 0.0);
        assert_eq!(rec.price_level, 2);
        assert!(rec.tags.is_empty());
        assert!(rec.open_now.is_none());
    }

    #[test]
    fn supplied_fields_kept() {
        let mut c = candidate("p2");
        c.rating = Some(4.6);
        c.price_level = Some(1);
        c.open_now = Some(true);

        let rec = PlaceRecommendation::from_candidate(c);
        assert_eq!(rec.rating, 4.6);
        assert_eq!(rec.price_level, 1);
        assert_eq!(rec.open_now, Some(true));
    }

    #[test]
    fn tags_truncated_to_three() {
        let mut c = candidate("p3");
        c.category_tags = vec![
            "restaurant".to_string(),
            "food".to_string(),
            "point_of_interest".to_string(),
            "establishment".to_string(),
        ];

        let rec = PlaceRecommendation::from_candidate(c);
        assert_eq!(rec.tags, ["restaurant", "food", "point_of_interest"]);
    }
}
