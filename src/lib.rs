//! SiteIQ - Location intelligence and competitive scoring for restaurant discovery
//!
//! This library provides the pure scoring core behind the dashboard: great-circle
//! distances, weighted composite scores, metric buckets for the demographic map
//! layer, and competitor ranking around a candidate site. The HTTP layer in
//! [`routes`] is a thin JSON adapter over it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{bucket, distance_km, format_distance, rank, score, MetricReading, Positioner, ScoringError};
pub use crate::models::{Coordinate, CompetitorRecord, DemographicArea, LocationCandidate, MatchFactor, ScoredResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let here = Coordinate::new(13.7563, 100.5018);
        assert_eq!(format_distance(distance_km(here, here)), "0m");
    }
}
