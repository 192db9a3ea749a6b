use serde::{Deserialize, Serialize};
use crate::models::domain::{AreaBuckets, OverlapSummary, RankedCompetitor, ScoredResult};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

/// Response for the distance endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceResponse {
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    pub formatted: String,
}

/// Response for the recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub results: Vec<ScoredResult>,
}

/// Response for the buckets endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketsResponse {
    pub areas: Vec<AreaBuckets>,
}

/// Response for the competitor ranking endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    #[serde(rename = "requestId")]
    pub request_id: uuid::Uuid,
    pub competitors: Vec<RankedCompetitor>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    pub overlap: OverlapSummary,
    #[serde(rename = "averageRating")]
    pub average_rating: Option<f64>,
}
