use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Coordinate, CompetitorOverlap, DemographicArea, LocationCandidate, MatchFactor};

/// Request for the great-circle distance between two points
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DistanceRequest {
    #[validate(nested)]
    pub from: Coordinate,
    #[validate(nested)]
    pub to: Coordinate,
}

/// Request to score one subject from its match factors
///
/// An empty factor list passes validation and is rejected by the scorer.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "subject_id", rename = "subjectId")]
    pub subject_id: String,
    #[serde(default)]
    pub factors: Vec<MatchFactor>,
}

/// Request to score and order candidate sites
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(length(min = 1))]
    #[validate(nested)]
    pub candidates: Vec<LocationCandidate>,
}

/// Request to bucket demographic areas for the map layer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BucketsRequest {
    #[validate(length(min = 1))]
    #[validate(nested)]
    pub areas: Vec<DemographicArea>,
}

/// Request to rank competitors around a target site
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[validate(nested)]
    pub target: LocationCandidate,
    #[validate(nested)]
    #[serde(default)]
    pub competitors: Vec<CompetitorOverlap>,
    #[validate(range(min = 0.0))]
    #[serde(alias = "radius_km", rename = "radiusKm", default)]
    pub radius_km: Option<f64>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}
