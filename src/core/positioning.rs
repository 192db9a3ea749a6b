use crate::core::{
    distance::{calculate_bounding_box, distance_km, format_distance, is_within_bounding_box},
    error::ScoringError,
    scoring::{overlap_tier, score},
};
use crate::models::{
    CompetitorOverlap, LocationCandidate, OverlapSummary, RankedCompetitor, ScoredResult,
};

/// Rank competitors around a target site, nearest first
///
/// Ties on distance go to the higher rating, then to input order. The
/// overlap fraction is supplied by the caller; this function only tiers it.
///
/// # Errors
/// `InvalidInput` when any overlap fraction is not finite.
pub fn rank(
    target: &LocationCandidate,
    competitors: &[CompetitorOverlap],
) -> Result<Vec<RankedCompetitor>, ScoringError> {
    let mut ranked = competitors
        .iter()
        .map(|entry| -> Result<RankedCompetitor, ScoringError> {
            let distance_km = distance_km(target.position, entry.competitor.position);
            Ok(RankedCompetitor {
                competitor: entry.competitor.clone(),
                distance_km,
                distance_label: format_distance(distance_km),
                overlap_tier: overlap_tier(entry.overlap)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // sort_by is stable, so equal keys keep input order
    ranked.sort_by(|a, b| {
        a.distance_km
            .total_cmp(&b.distance_km)
            .then_with(|| b.competitor.rating.total_cmp(&a.competitor.rating))
    });

    Ok(ranked)
}

/// Score every candidate site, best composite first, ties in input order
///
/// # Errors
/// `InvalidInput` from the first candidate whose factors cannot be scored.
pub fn recommend(candidates: &[LocationCandidate]) -> Result<Vec<ScoredResult>, ScoringError> {
    let mut results = candidates
        .iter()
        .map(|candidate| score(candidate.id.clone(), &candidate.match_factors))
        .collect::<Result<Vec<_>, ScoringError>>()?;

    results.sort_by(|a, b| b.composite_score.total_cmp(&a.composite_score));

    Ok(results)
}

/// Tuning for a competitive analysis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositioningSettings {
    /// Drop competitors farther than this; `None` keeps all of them
    pub radius_km: Option<f64>,
    /// Maximum number of competitors returned
    pub limit: usize,
}

impl Default for PositioningSettings {
    fn default() -> Self {
        Self {
            radius_km: None,
            limit: 20,
        }
    }
}

/// Result of a competitive analysis
#[derive(Debug, Clone, PartialEq)]
pub struct CompetitiveAnalysis {
    pub competitors: Vec<RankedCompetitor>,
    pub total_candidates: usize,
    pub overlap: OverlapSummary,
    pub average_rating: Option<f64>,
}

/// Competitive analysis orchestrator
///
/// # Pipeline Stages
/// 1. Bounding box pre-filter (when a radius is set)
/// 2. Distance ranking with overlap tiers
/// 3. Exact radius cut and limit
/// 4. Summary statistics
#[derive(Debug, Clone)]
pub struct Positioner {
    settings: PositioningSettings,
}

impl Positioner {
    pub fn new(settings: PositioningSettings) -> Self {
        Self { settings }
    }

    pub fn with_default_settings() -> Self {
        Self {
            settings: PositioningSettings::default(),
        }
    }

    pub fn settings(&self) -> PositioningSettings {
        self.settings
    }

    /// Copy of this positioner with per-request overrides applied
    pub fn with_overrides(&self, radius_km: Option<f64>, limit: Option<usize>) -> Self {
        Self::new(PositioningSettings {
            radius_km: radius_km.or(self.settings.radius_km),
            limit: limit.unwrap_or(self.settings.limit),
        })
    }

    /// Rank, filter and summarise competitors around `target`
    ///
    /// # Errors
    /// `InvalidInput` when any overlap fraction is not finite.
    pub fn analyze(
        &self,
        target: &LocationCandidate,
        competitors: &[CompetitorOverlap],
    ) -> Result<CompetitiveAnalysis, ScoringError> {
        let total_candidates = competitors.len();

        let mut ranked = match self.settings.radius_km {
            Some(radius_km) => {
                let bbox = calculate_bounding_box(target.position, radius_km);
                let nearby: Vec<CompetitorOverlap> = competitors
                    .iter()
                    .filter(|entry| is_within_bounding_box(entry.competitor.position, &bbox))
                    .cloned()
                    .collect();

                let mut ranked = rank(target, &nearby)?;
                ranked.retain(|entry| entry.distance_km <= radius_km);
                ranked
            }
            None => rank(target, competitors)?,
        };

        ranked.truncate(self.settings.limit);

        let mut overlap = OverlapSummary::default();
        for entry in &ranked {
            overlap.record(entry.overlap_tier);
        }

        let average_rating = if ranked.is_empty() {
            None
        } else {
            let total: f64 = ranked.iter().map(|entry| entry.competitor.rating).sum();
            Some(total / ranked.len() as f64)
        };

        tracing::debug!(
            "Positioned {} of {} competitors around {} ({} closely competing)",
            ranked.len(),
            total_candidates,
            target.id,
            overlap.high
        );

        Ok(CompetitiveAnalysis {
            competitors: ranked,
            total_candidates,
            overlap,
            average_rating,
        })
    }
}

impl Default for Positioner {
    fn default() -> Self {
        Self::with_default_settings()
    }
}
