//! Threshold ladders turning raw metrics into ordered display categories.
//!
//! Each metric owns its ladder. Rungs are checked highest first and a value
//! lands on the first rung it strictly exceeds; anything below the last rung
//! is [`Category::Low`].

use crate::core::error::{ensure_finite, ScoringError};
use crate::core::scoring::clamp_score;
use crate::models::{AgeBracket, AreaBuckets, Bucket, Category, DemographicArea, Popularity};

/// One rung of a threshold ladder; matches values strictly above `floor`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rung {
    pub floor: f64,
    pub category: Category,
}

const fn rung(floor: f64, category: Category) -> Rung {
    Rung { floor, category }
}

/// Area population
pub const POPULATION_LADDER: [Rung; 3] = [
    rung(80_000.0, Category::VeryHigh),
    rung(60_000.0, Category::High),
    rung(40_000.0, Category::Medium),
];

/// Median annual income
pub const INCOME_LADDER: [Rung; 3] = [
    rung(50_000.0, Category::VeryHigh),
    rung(40_000.0, Category::High),
    rung(30_000.0, Category::Medium),
];

/// Share of residents aged 26-35, in percent
pub const YOUNG_PROFESSIONAL_LADDER: [Rung; 3] = [
    rung(40.0, Category::VeryHigh),
    rung(30.0, Category::High),
    rung(20.0, Category::Medium),
];

/// A raw metric value tagged with the metric it measures
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricReading {
    Population(f64),
    Income(f64),
    AgeYoungProfessional(f64),
    Popularity(Popularity),
}

fn climb(ladder: &[Rung], value: f64) -> Category {
    ladder
        .iter()
        .find(|rung| value > rung.floor)
        .map_or(Category::Low, |rung| rung.category)
}

/// Bucket a metric reading into its category and display color
///
/// Negative population or income is treated as 0 and age shares are clamped
/// to `[0, 100]`; none of these are errors.
///
/// # Errors
/// `InvalidInput` when a numeric reading is NaN or infinite.
pub fn bucket(reading: MetricReading) -> Result<Bucket, ScoringError> {
    let category = match reading {
        MetricReading::Population(value) => {
            climb(&POPULATION_LADDER, ensure_finite("population", value)?.max(0.0))
        }
        MetricReading::Income(value) => {
            climb(&INCOME_LADDER, ensure_finite("income", value)?.max(0.0))
        }
        MetricReading::AgeYoungProfessional(value) => climb(
            &YOUNG_PROFESSIONAL_LADDER,
            clamp_score(ensure_finite("ageGroupShare", value)?),
        ),
        MetricReading::Popularity(popularity) => match popularity {
            Popularity::High => Category::High,
            Popularity::Medium => Category::Medium,
            Popularity::Low => Category::Low,
        },
    };

    Ok(Bucket::from(category))
}

/// Population, income and young-professional buckets for one area
///
/// # Errors
/// `InvalidInput` when the median income or an age share is not finite.
pub fn bucket_area(area: &DemographicArea) -> Result<AreaBuckets, ScoringError> {
    Ok(AreaBuckets {
        area_id: area.area_id.clone(),
        population: bucket(MetricReading::Population(area.population as f64))?,
        income: bucket(MetricReading::Income(area.median_income))?,
        young_professionals: bucket(MetricReading::AgeYoungProfessional(
            area.share(AgeBracket::Age26To35),
        ))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorToken;
    use std::collections::BTreeMap;

    fn category(reading: MetricReading) -> Category {
        bucket(reading).unwrap().category
    }

    #[test]
    fn test_population_strict_boundaries() {
        assert_eq!(category(MetricReading::Population(80_001.0)), Category::VeryHigh);
        assert_eq!(category(MetricReading::Population(80_000.0)), Category::High);
        assert_eq!(category(MetricReading::Population(60_000.0)), Category::Medium);
        assert_eq!(category(MetricReading::Population(40_000.0)), Category::Low);
        assert_eq!(category(MetricReading::Population(-5.0)), Category::Low);
    }

    #[test]
    fn test_income_ladder() {
        assert_eq!(category(MetricReading::Income(65_000.0)), Category::VeryHigh);
        assert_eq!(category(MetricReading::Income(45_000.0)), Category::High);
        assert_eq!(category(MetricReading::Income(30_000.5)), Category::Medium);
        assert_eq!(category(MetricReading::Income(30_000.0)), Category::Low);
    }

    #[test]
    fn test_young_professional_ladder() {
        assert_eq!(category(MetricReading::AgeYoungProfessional(41.0)), Category::VeryHigh);
        assert_eq!(category(MetricReading::AgeYoungProfessional(40.0)), Category::High);
        assert_eq!(category(MetricReading::AgeYoungProfessional(25.0)), Category::Medium);
        assert_eq!(category(MetricReading::AgeYoungProfessional(20.0)), Category::Low);
        assert_eq!(category(MetricReading::AgeYoungProfessional(250.0)), Category::VeryHigh);
    }

    #[test]
    fn test_popularity_passthrough() {
        assert_eq!(category(MetricReading::Popularity(Popularity::High)), Category::High);
        assert_eq!(category(MetricReading::Popularity(Popularity::Medium)), Category::Medium);
        assert_eq!(category(MetricReading::Popularity(Popularity::Low)), Category::Low);
    }

    #[test]
    fn test_display_color_follows_category() {
        let rich = bucket(MetricReading::Income(99_000.0)).unwrap();
        assert_eq!(rich.display_color, ColorToken::Deep);

        let poor = bucket(MetricReading::Income(0.0)).unwrap();
        assert_eq!(poor.display_color, ColorToken::Light);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(bucket(MetricReading::Population(f64::NAN)).is_err());
        assert!(bucket(MetricReading::Income(f64::INFINITY)).is_err());
        assert!(bucket(MetricReading::AgeYoungProfessional(f64::NEG_INFINITY)).is_err());
    }

    #[test]
    fn test_bucket_area() {
        let mut shares = BTreeMap::new();
        shares.insert(AgeBracket::Age18To25, 18.0);
        shares.insert(AgeBracket::Age26To35, 34.5);

        let area = DemographicArea {
            area_id: "silom".to_string(),
            population: 72_000,
            median_income: 52_500.0,
            age_group_share: shares,
        };

        let buckets = bucket_area(&area).unwrap();
        assert_eq!(buckets.area_id, "silom");
        assert_eq!(buckets.population.category, Category::High);
        assert_eq!(buckets.income.category, Category::VeryHigh);
        assert_eq!(buckets.young_professionals.category, Category::High);
    }

    #[test]
    fn test_missing_bracket_reads_as_zero() {
        let area = DemographicArea {
            area_id: "empty".to_string(),
            population: 0,
            median_income: 0.0,
            age_group_share: BTreeMap::new(),
        };

        let buckets = bucket_area(&area).unwrap();
        assert_eq!(buckets.young_professionals.category, Category::Low);
    }
}
