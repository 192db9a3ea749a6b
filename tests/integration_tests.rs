// Integration tests for SiteIQ

use siteiq::core::{rank, recommend, distance_km, format_distance, Positioner, PositioningSettings};
use siteiq::models::{
    CompetitorOverlap, CompetitorRecord, Coordinate, LocationCandidate, MatchFactor, OverlapTier,
    Popularity, Tier,
};

fn create_target(lat: f64, lon: f64) -> LocationCandidate {
    LocationCandidate {
        id: "target".to_string(),
        name: "New Noodle Bar".to_string(),
        address: "Sukhumvit Soi 11".to_string(),
        position: Coordinate::new(lat, lon),
        match_factors: vec![
            MatchFactor::weighted("foot traffic", 85.0, 2.0),
            MatchFactor::new("rent cost", 55.0),
            MatchFactor::new("demographic fit", 70.0),
        ],
    }
}

fn create_competitor(name: &str, lat: f64, lon: f64, rating: f64, overlap: f64) -> CompetitorOverlap {
    CompetitorOverlap {
        competitor: CompetitorRecord {
            name: name.to_string(),
            position: Coordinate::new(lat, lon),
            rating,
            price_level: 2,
            cuisine: "noodles".to_string(),
            popularity: Popularity::High,
            estimated_traffic_per_day: Some(1200),
        },
        overlap,
    }
}

#[test]
fn test_integration_bangkok_distance() {
    let target = Coordinate::new(13.7563, 100.5018);
    let competitor = Coordinate::new(13.7650, 100.5383);

    let distance = distance_km(target, competitor);
    assert!((distance - 4.1).abs() < 0.1, "Expected ~4.1km, got {}", distance);
    assert_eq!(format_distance(distance), "4.1km");
}

#[test]
fn test_integration_end_to_end_positioning() {
    let target = create_target(13.7563, 100.5018);

    let competitors = vec![
        create_competitor("Siam Noodles", 13.7650, 100.5383, 4.5, 0.82),
        create_competitor("Corner Cafe", 13.7570, 100.5025, 3.9, 0.15),
        create_competitor("Chiang Mai Branch", 18.7883, 98.9853, 4.9, 0.95),
        create_competitor("Riverside Pho", 13.7400, 100.4900, 4.1, 0.55),
    ];

    let positioner = Positioner::new(PositioningSettings {
        radius_km: Some(10.0),
        limit: 10,
    });
    let analysis = positioner.analyze(&target, &competitors).unwrap();

    assert_eq!(analysis.total_candidates, 4);
    assert_eq!(analysis.competitors.len(), 3, "Chiang Mai is outside the radius");

    // Nearest first
    for pair in analysis.competitors.windows(2) {
        assert!(pair[0].distance_km <= pair[1].distance_km);
    }
    assert_eq!(analysis.competitors[0].competitor.name, "Corner Cafe");
    assert!(analysis.competitors[0].distance_label.ends_with('m'));

    assert_eq!(analysis.overlap.high, 1);
    assert_eq!(analysis.overlap.moderate, 1);
    assert_eq!(analysis.overlap.distinct, 1);
}

#[test]
fn test_integration_rank_stable_for_ties() {
    let target = create_target(0.0, 0.0);

    // 2km, 5km and 2km north of the target with the same rating
    let km = 1.0 / 111.195;
    let competitors = vec![
        create_competitor("first", 2.0 * km, 0.0, 4.0, 0.5),
        create_competitor("second", 5.0 * km, 0.0, 4.0, 0.5),
        create_competitor("third", 2.0 * km, 0.0, 4.0, 0.5),
    ];

    let ranked = rank(&target, &competitors).unwrap();
    let names: Vec<&str> = ranked.iter().map(|r| r.competitor.name.as_str()).collect();

    assert_eq!(names, vec!["first", "third", "second"]);
    assert!(ranked.iter().all(|r| r.overlap_tier == OverlapTier::Moderate));
}

#[test]
fn test_integration_recommend_sites() {
    let mut strong = create_target(13.7563, 100.5018);
    strong.id = "silom".to_string();

    let mut weak = create_target(13.7000, 100.4000);
    weak.id = "outskirts".to_string();
    weak.match_factors = vec![
        MatchFactor::new("foot traffic", 20.0),
        MatchFactor::new("rent cost", 90.0),
    ];

    let results = recommend(&[weak, strong]).unwrap();

    assert_eq!(results[0].subject_id, "silom");
    // (85*2 + 55 + 70) / 4 = 73.75
    assert!((results[0].composite_score - 73.75).abs() < 1e-9);
    assert_eq!(results[0].tier, Tier::Good);
    assert_eq!(results[1].tier, Tier::Moderate);
}

#[test]
fn test_integration_limit_enforcement() {
    let target = create_target(13.7563, 100.5018);

    let competitors: Vec<CompetitorOverlap> = (0..50)
        .map(|i| create_competitor(&i.to_string(), 13.7563 + i as f64 * 0.001, 100.5018, 4.0, 0.3))
        .collect();

    let positioner = Positioner::new(PositioningSettings {
        radius_km: None,
        limit: 10,
    });
    let analysis = positioner.analyze(&target, &competitors).unwrap();

    assert_eq!(analysis.competitors.len(), 10, "Should not exceed limit of 10");
    assert_eq!(analysis.competitors[0].competitor.name, "0");
}
