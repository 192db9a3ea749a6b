// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AgeBracket, AreaBuckets, BoundingBox, Bucket, Category, ColorToken, CompetitorOverlap,
    CompetitorRecord, Coordinate, DemographicArea, LocationCandidate, MatchFactor, OverlapSummary,
    OverlapTier, Popularity, RankedCompetitor, ScoredResult, Tier,
};
pub use requests::{BucketsRequest, DistanceRequest, RankRequest, RecommendRequest, ScoreRequest};
pub use responses::{
    BucketsResponse, DistanceResponse, ErrorResponse, HealthResponse, RankResponse,
    RecommendResponse,
};
