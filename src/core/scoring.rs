use crate::core::error::{ensure_finite, ScoringError};
use crate::models::{MatchFactor, OverlapTier, ScoredResult, Tier};

/// Composite tiers, highest first; a score belongs to the first rung whose
/// floor it reaches (inclusive)
pub const TIER_LADDER: [(f64, Tier); 3] = [
    (80.0, Tier::Excellent),
    (60.0, Tier::Good),
    (40.0, Tier::Moderate),
];

/// Overlap tiers, highest first, inclusive floors on a `[0, 1]` fraction
pub const OVERLAP_LADDER: [(f64, OverlapTier); 2] = [
    (0.7, OverlapTier::High),
    (0.4, OverlapTier::Moderate),
];

/// Clamp a finite score or percentage into `[0, 100]`
#[inline]
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Tier for a composite score already in `[0, 100]`
pub fn tier_for(composite_score: f64) -> Tier {
    TIER_LADDER
        .iter()
        .find(|(floor, _)| composite_score >= *floor)
        .map_or(Tier::Poor, |(_, tier)| *tier)
}

/// Weight-normalised mean of factor scores, 0-100, with its quality tier
///
/// Scoring formula:
/// composite = Σ(score × weight) / Σ(weight)
///
/// Factor scores outside `[0, 100]` are clamped to the nearest boundary
/// before aggregation, so a noisy score of 150 counts as 100 and -3 as 0.
/// The returned contributing factors carry the clamped scores.
///
/// # Errors
/// `InvalidInput` when `factors` is empty, when any score or weight is not
/// finite, or when a weight is not strictly positive.
pub fn score(
    subject_id: impl Into<String>,
    factors: &[MatchFactor],
) -> Result<ScoredResult, ScoringError> {
    if factors.is_empty() {
        return Err(ScoringError::invalid(
            "factors",
            "at least one factor is required",
        ));
    }

    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    let mut contributing_factors = Vec::with_capacity(factors.len());

    for factor in factors {
        let clamped = clamp_score(ensure_finite("factor.score", factor.score)?);
        let weight = ensure_finite("factor.weight", factor.weight)?;
        if weight <= 0.0 {
            return Err(ScoringError::invalid(
                "factor.weight",
                format!("weight of '{}' must be positive, got {}", factor.label, weight),
            ));
        }

        weighted_sum += clamped * weight;
        total_weight += weight;
        contributing_factors.push(MatchFactor::weighted(factor.label.clone(), clamped, weight));
    }

    // Guards against float drift pushing the mean past a boundary
    let composite_score = clamp_score(weighted_sum / total_weight);

    Ok(ScoredResult {
        subject_id: subject_id.into(),
        composite_score,
        tier: tier_for(composite_score),
        contributing_factors,
    })
}

/// Competitive-overlap tier for a shared-attribute fraction
///
/// Answers "how similar", not "how good"; keep it apart from [`tier_for`].
/// Finite fractions outside `[0, 1]` are clamped.
///
/// # Errors
/// `InvalidInput` when `fraction` is NaN or infinite.
pub fn overlap_tier(fraction: f64) -> Result<OverlapTier, ScoringError> {
    let fraction = ensure_finite("overlap", fraction)?.clamp(0.0, 1.0);

    Ok(OVERLAP_LADDER
        .iter()
        .find(|(floor, _)| fraction >= *floor)
        .map_or(OverlapTier::Distinct, |(_, tier)| *tier))
}
