// Core algorithm exports
pub mod buckets;
pub mod distance;
pub mod error;
pub mod positioning;
pub mod scoring;

pub use buckets::{bucket, bucket_area, MetricReading};
pub use distance::{distance_km, format_distance, haversine_distance, calculate_bounding_box, is_within_bounding_box};
pub use error::ScoringError;
pub use positioning::{rank, recommend, CompetitiveAnalysis, Positioner, PositioningSettings};
pub use scoring::{clamp_score, overlap_tier, score, tier_for};
