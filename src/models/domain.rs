use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// Geographic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Coordinate {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(coord: Coordinate) -> Self {
        geo::Point::new(coord.longitude, coord.latitude)
    }
}

/// One dimension contributing to a composite score (foot traffic, rent, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchFactor {
    pub label: String,
    pub score: f64,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl MatchFactor {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self::weighted(label, score, default_weight())
    }

    pub fn weighted(label: impl Into<String>, score: f64, weight: f64) -> Self {
        Self {
            label: label.into(),
            score,
            weight,
        }
    }
}

fn default_weight() -> f64 { 1.0 }

/// Candidate site for a new restaurant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LocationCandidate {
    #[validate(length(min = 1))]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[validate(nested)]
    pub position: Coordinate,
    #[serde(rename = "matchFactors", default)]
    pub match_factors: Vec<MatchFactor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Popularity {
    High,
    Medium,
    Low,
}

/// An existing restaurant competing for the same catchment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CompetitorRecord {
    pub name: String,
    #[validate(nested)]
    pub position: Coordinate,
    pub rating: f64,
    #[serde(rename = "priceLevel")]
    pub price_level: u8,
    pub cuisine: String,
    pub popularity: Popularity,
    #[serde(rename = "estimatedTrafficPerDay", default)]
    pub estimated_traffic_per_day: Option<u32>,
}

/// A competitor paired with the caller's estimate of concept overlap in `[0, 1]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CompetitorOverlap {
    #[validate(nested)]
    pub competitor: CompetitorRecord,
    pub overlap: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    #[serde(rename = "18-25")]
    Age18To25,
    #[serde(rename = "26-35")]
    Age26To35,
    #[serde(rename = "36-50")]
    Age36To50,
    #[serde(rename = "51-65")]
    Age51To65,
    #[serde(rename = "65+")]
    Age65Plus,
}

/// Census-style demographic record for one map area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DemographicArea {
    #[validate(length(min = 1))]
    #[serde(rename = "areaId")]
    pub area_id: String,
    pub population: i64,
    #[serde(rename = "medianIncome")]
    pub median_income: f64,
    #[serde(rename = "ageGroupShare", default)]
    pub age_group_share: BTreeMap<AgeBracket, f64>,
}

impl DemographicArea {
    /// Percentage share of a bracket, 0 when the source omitted it
    pub fn share(&self, bracket: AgeBracket) -> f64 {
        self.age_group_share.get(&bracket).copied().unwrap_or(0.0)
    }
}

/// Abstract display token; the presentation layer maps these to styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Deep,
    Strong,
    Medium,
    Light,
}

/// Quality tier of a composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl Tier {
    pub const fn color(self) -> ColorToken {
        match self {
            Self::Excellent => ColorToken::Deep,
            Self::Good => ColorToken::Strong,
            Self::Moderate => ColorToken::Medium,
            Self::Poor => ColorToken::Light,
        }
    }
}

/// How strongly a competitor's concept overlaps the target's
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapTier {
    High,
    Moderate,
    Distinct,
}

impl OverlapTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "closely competing",
            Self::Moderate => "moderate overlap",
            Self::Distinct => "distinct",
        }
    }

    pub const fn color(self) -> ColorToken {
        match self {
            Self::High => ColorToken::Deep,
            Self::Moderate => ColorToken::Medium,
            Self::Distinct => ColorToken::Light,
        }
    }
}

/// Ordered bucket category, highest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "very high")]
    VeryHigh,
    #[serde(rename = "high")]
    High,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "low")]
    Low,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryHigh => "very high",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub const fn color(self) -> ColorToken {
        match self {
            Self::VeryHigh => ColorToken::Deep,
            Self::High => ColorToken::Strong,
            Self::Medium => ColorToken::Medium,
            Self::Low => ColorToken::Light,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Category plus the token used to color it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub category: Category,
    #[serde(rename = "displayColor")]
    pub display_color: ColorToken,
}

impl From<Category> for Bucket {
    fn from(category: Category) -> Self {
        Self {
            category,
            display_color: category.color(),
        }
    }
}

/// Demographic-layer buckets for one area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaBuckets {
    #[serde(rename = "areaId")]
    pub area_id: String,
    pub population: Bucket,
    pub income: Bucket,
    #[serde(rename = "youngProfessionals")]
    pub young_professionals: Bucket,
}

/// Composite score of one subject; contributing factors carry clamped scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    #[serde(rename = "subjectId")]
    pub subject_id: String,
    #[serde(rename = "compositeScore")]
    pub composite_score: f64,
    pub tier: Tier,
    #[serde(rename = "contributingFactors")]
    pub contributing_factors: Vec<MatchFactor>,
}

/// Competitor positioned relative to a target site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCompetitor {
    pub competitor: CompetitorRecord,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    #[serde(rename = "distanceLabel")]
    pub distance_label: String,
    #[serde(rename = "overlapTier")]
    pub overlap_tier: OverlapTier,
}

/// Competitor counts per overlap tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapSummary {
    pub high: usize,
    pub moderate: usize,
    pub distinct: usize,
}

impl OverlapSummary {
    pub fn record(&mut self, tier: OverlapTier) {
        match tier {
            OverlapTier::High => self.high += 1,
            OverlapTier::Moderate => self.moderate += 1,
            OverlapTier::Distinct => self.distinct += 1,
        }
    }
}

/// Geospatial bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}
