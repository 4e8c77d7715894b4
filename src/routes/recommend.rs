use actix_web::{web, HttpResponse, Responder};
use std::time::Instant;
use validator::Validate;

use crate::core::catalog_stats;
use crate::models::{
    ErrorResponse, HealthResponse, RecommendRequest, RecommendResponse, ServiceInfo, SkillGapRequest,
    SkillGapResponse,
};
use crate::routes::AppState;
use crate::services::CatalogError;

/// Configure recommendation and catalog routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(root))
        .route("/health", web::get().to(health_check))
        .route("/recommend", web::post().to(recommend))
        .route("/skill-gaps", web::post().to(skill_gaps))
        .route("/internships", web::get().to(list_internships))
        .route("/internships/{id}", web::get().to(get_internship))
        .route("/stats", web::get().to(stats));
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn catalog_unavailable(e: CatalogError) -> HttpResponse {
    tracing::error!("Failed to load catalog: {}", e);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: "Failed to load catalog".to_string(),
        message: e.to_string(),
        status_code: 500,
    })
}

async fn root() -> impl Responder {
    HttpResponse::Ok().json(ServiceInfo {
        message: "Internship Match Recommendation API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "active".to_string(),
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = match state.catalog.postings().await {
        Ok(_) => "healthy",
        Err(e) => {
            tracing::warn!("Catalog unavailable during health check: {}", e);
            "degraded"
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommend internships for a candidate
///
/// POST /recommend
///
/// Request body:
/// ```json
/// {
///   "profile": {
///     "age": 22,
///     "educationLevel": "Graduate",
///     "skills": ["JavaScript", "React"],
///     "sectors": ["Technology"],
///     "locationPreference": "Bangalore, Karnataka"
///   }
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: {:?}", errors);
        return validation_failed(errors);
    }

    let started = Instant::now();

    let catalog = match state.catalog.postings().await {
        Ok(catalog) => catalog,
        Err(e) => return catalog_unavailable(e),
    };

    let profile = &req.profile;
    let result = state.matcher.find_matches(profile, &catalog);
    let skill_gaps = state.matcher.default_skill_gaps(profile, &catalog);

    let processing_time = (started.elapsed().as_secs_f64() * 1000.0).round() / 1000.0;

    tracing::info!(
        "Returning {} recommendations ({} above threshold, {} postings) in {:.3}s",
        result.matches.len(),
        result.qualified,
        result.total_candidates,
        processing_time
    );

    HttpResponse::Ok().json(RecommendResponse {
        total_matches: result.matches.len(),
        total_candidates: result.total_candidates,
        recommendations: result.matches,
        skill_gaps,
        processing_time,
    })
}

/// Skills in demand across the catalog that the candidate lacks
///
/// POST /skill-gaps
async fn skill_gaps(
    state: web::Data<AppState>,
    req: web::Json<SkillGapRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let catalog = match state.catalog.postings().await {
        Ok(catalog) => catalog,
        Err(e) => return catalog_unavailable(e),
    };

    let limit = req.limit.unwrap_or(state.matcher.rules().skill_gap_limit);
    let skills = state.matcher.skill_gaps(&req.profile, &catalog, limit);

    tracing::debug!("Found {} skill gaps (limit {})", skills.len(), limit);

    HttpResponse::Ok().json(SkillGapResponse { skills })
}

/// Full catalog
///
/// GET /internships
async fn list_internships(state: web::Data<AppState>) -> impl Responder {
    match state.catalog.postings().await {
        Ok(catalog) => {
            tracing::info!("Retrieved {} internships", catalog.len());
            HttpResponse::Ok().json(catalog.as_slice())
        }
        Err(e) => catalog_unavailable(e),
    }
}

/// Single posting
///
/// GET /internships/{id}
async fn get_internship(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    match state.catalog.find(&id).await {
        Ok(Some(posting)) => HttpResponse::Ok().json(posting),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Internship not found".to_string(),
            message: format!("No internship with id {}", id),
            status_code: 404,
        }),
        Err(e) => catalog_unavailable(e),
    }
}

/// Catalog statistics
///
/// GET /stats
async fn stats(state: web::Data<AppState>) -> impl Responder {
    match state.catalog.postings().await {
        Ok(catalog) => HttpResponse::Ok().json(catalog_stats(&catalog)),
        Err(e) => catalog_unavailable(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }

    #[test]
    fn test_catalog_error_maps_to_500() {
        let response = catalog_unavailable(CatalogError::ApiError("down".to_string()));
        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
