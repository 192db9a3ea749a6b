use actix_web::{web, HttpResponse, Responder};
use validator::{Validate, ValidationErrors};
use crate::core::{bucket_area, distance_km, format_distance, recommend, score, Positioner, ScoringError};
use crate::models::{
    BucketsRequest, BucketsResponse, DistanceRequest, DistanceResponse, ErrorResponse,
    HealthResponse, RankRequest, RankResponse, RecommendRequest, RecommendResponse, ScoreRequest,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub positioner: Positioner,
    pub max_limit: usize,
}

/// Configure all analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/distance", web::post().to(distance))
        .route("/score", web::post().to(score_subject))
        .route("/recommend", web::post().to(recommend_sites))
        .route("/buckets", web::post().to(bucket_areas))
        .route("/competitors/rank", web::post().to(rank_competitors));
}

fn validation_failed(errors: ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn invalid_input(err: ScoringError) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Invalid input".to_string(),
        message: err.to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Distance endpoint
///
/// POST /api/v1/distance
///
/// Request body:
/// ```json
/// {
///   "from": { "latitude": 13.7563, "longitude": 100.5018 },
///   "to": { "latitude": 13.7650, "longitude": 100.5383 }
/// }
/// ```
async fn distance(req: web::Json<DistanceRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let km = distance_km(req.from, req.to);

    HttpResponse::Ok().json(DistanceResponse {
        distance_km: km,
        formatted: format_distance(km),
    })
}

/// Composite score endpoint
///
/// POST /api/v1/score
///
/// Request body:
/// ```json
/// {
///   "subjectId": "string",
///   "factors": [{ "label": "foot traffic", "score": 82, "weight": 2 }]
/// }
/// ```
async fn score_subject(req: web::Json<ScoreRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match score(req.subject_id.clone(), &req.factors) {
        Ok(result) => {
            tracing::debug!(
                "Scored {}: {:.1} ({:?})",
                result.subject_id,
                result.composite_score,
                result.tier
            );
            HttpResponse::Ok().json(result)
        }
        Err(e) => {
            tracing::info!("Rejected score request for {}: {}", req.subject_id, e);
            invalid_input(e)
        }
    }
}

/// Location recommendation endpoint
///
/// POST /api/v1/recommend
async fn recommend_sites(req: web::Json<RecommendRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match recommend(&req.candidates) {
        Ok(results) => {
            tracing::info!("Ranked {} candidate sites", results.len());
            HttpResponse::Ok().json(RecommendResponse { results })
        }
        Err(e) => invalid_input(e),
    }
}

/// Demographic layer endpoint
///
/// POST /api/v1/buckets
async fn bucket_areas(req: web::Json<BucketsRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match req.areas.iter().map(bucket_area).collect::<Result<Vec<_>, _>>() {
        Ok(areas) => HttpResponse::Ok().json(BucketsResponse { areas }),
        Err(e) => invalid_input(e),
    }
}

/// Competitor ranking endpoint
///
/// POST /api/v1/competitors/rank
///
/// Request body:
/// ```json
/// {
///   "target": { "id": "string", "name": "string", "position": { ... } },
///   "competitors": [{ "competitor": { ... }, "overlap": 0.8 }],
///   "radiusKm": 5.0,
///   "limit": 10
/// }
/// ```
async fn rank_competitors(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("rank_competitors", %request_id, target = %req.target.id);

    span.in_scope(|| {
        // Cap limit to prevent oversized responses
        let limit = req
            .limit
            .map(usize::from)
            .unwrap_or(state.positioner.settings().limit)
            .min(state.max_limit);
        let positioner = state.positioner.with_overrides(req.radius_km, Some(limit));

        match positioner.analyze(&req.target, &req.competitors) {
            Ok(analysis) => {
                tracing::info!(
                    "Returning {} competitors (from {} candidates)",
                    analysis.competitors.len(),
                    analysis.total_candidates
                );
                HttpResponse::Ok().json(RankResponse {
                    request_id,
                    competitors: analysis.competitors,
                    total_candidates: analysis.total_candidates,
                    overlap: analysis.overlap,
                    average_rating: analysis.average_rating,
                })
            }
            Err(e) => {
                tracing::info!("Rejected rank request: {}", e);
                invalid_input(e)
            }
        }
    })
}
