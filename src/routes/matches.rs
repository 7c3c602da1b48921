use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{Matcher, MatchError};
use crate::models::{
    ErrorResponse, FindMatchesResponse, HealthResponse, InvestorCriteria, InvestorResponse,
    RegisterInvestorRequest, RegisterInvestorResponse, UpdateInvestorRequest,
};
use crate::services::ProfileStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProfileStore>,
    pub matcher: Matcher,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/investors", web::post().to(register_investor))
        .route("/investors/{investor_id}", web::get().to(get_investor))
        .route("/investors/{investor_id}", web::put().to(update_investor))
        .route("/matches/{investor_id}", web::get().to(find_matches));
}

fn error_response(status: u16, error: &str, message: String) -> ErrorResponse {
    ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status,
    }
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let candidates = state.store.list_candidates().await.len();
    let status = if candidates > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        candidates,
    })
}

/// Register investor criteria
///
/// POST /api/v1/investors
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "email": "string",
///   "linkedinUrl": "string",
///   "industries": ["string"],
///   "stages": ["string"],
///   "checkSize": {"min": 500000, "max": 2000000},
///   "geography": ["string"]
/// }
/// ```
async fn register_investor(
    state: web::Data<AppState>,
    req: web::Json<RegisterInvestorRequest>,
) -> impl Responder {
    let req = req.into_inner().normalized();

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for register request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(error_response(400, "Validation failed", errors.to_string()));
    }

    let now = chrono::Utc::now();

    let investor = InvestorCriteria {
        id: format!("inv-{}", uuid::Uuid::new_v4()),
        name: req.name,
        email: req.email,
        linkedin_url: req.linkedin_url,
        industries: req.industries,
        stages: req.stages,
        check_size: req.check_size,
        geography: req.geography,
        created_at: Some(now),
        updated_at: Some(now),
    };

    let profile_id = investor.id.clone();

    match state.store.save_investor(investor).await {
        Ok(()) => {
            tracing::info!("Registered investor: {}", profile_id);
            HttpResponse::Created().json(RegisterInvestorResponse {
                success: true,
                profile_id,
            })
        }
        Err(e) => {
            tracing::error!("Failed to save investor {}: {}", profile_id, e);
            HttpResponse::InternalServerError().json(error_response(500, "Failed to register profile", e.to_string()))
        }
    }
}

/// Get investor criteria
///
/// GET /api/v1/investors/{investor_id}
async fn get_investor(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let investor_id = path.into_inner();

    match state.store.get_investor(&investor_id).await {
        Some(profile) => HttpResponse::Ok().json(InvestorResponse {
            success: true,
            profile,
        }),
        None => HttpResponse::NotFound().json(error_response(
            404,
            "Profile not found",
            format!("No investor profile with id {}", investor_id),
        )),
    }
}

/// Replace investor preferences, keeping identity and creation time
///
/// PUT /api/v1/investors/{investor_id}
async fn update_investor(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<UpdateInvestorRequest>,
) -> impl Responder {
    let req = req.into_inner().normalized();

    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(error_response(400, "Validation failed", errors.to_string()));
    }

    let investor_id = path.into_inner();

    let Some(existing) = state.store.get_investor(&investor_id).await else {
        return HttpResponse::NotFound().json(error_response(
            404,
            "Profile not found",
            format!("No investor profile with id {}", investor_id),
        ));
    };

    let updated = InvestorCriteria {
        industries: req.industries,
        stages: req.stages,
        check_size: req.check_size,
        geography: req.geography,
        updated_at: Some(chrono::Utc::now()),
        ..existing
    };

    match state.store.save_investor(updated).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": "Profile updated successfully",
        })),
        Err(e) => {
            tracing::error!("Failed to update investor {}: {}", investor_id, e);
            HttpResponse::InternalServerError().json(error_response(500, "Failed to update profile", e.to_string()))
        }
    }
}

/// Find matches endpoint
///
/// GET /api/v1/matches/{investor_id}
///
/// Returns the top ranked startups with generated explanation and
/// outreach text. 404 when the investor is unknown, 500 when no
/// candidates are loaded.
async fn find_matches(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let investor_id = path.into_inner();

    match state
        .matcher
        .find_matches_for_investor(state.store.as_ref(), &investor_id)
        .await
    {
        Ok(matches) => {
            tracing::info!("Returning {} matches for investor {}", matches.len(), investor_id);
            HttpResponse::Ok().json(FindMatchesResponse {
                matches,
                timestamp: chrono::Utc::now(),
            })
        }
        Err(e @ MatchError::NotFound(_)) => {
            tracing::info!("Match request for unknown investor {}", investor_id);
            HttpResponse::NotFound().json(error_response(404, "Profile not found", e.to_string()))
        }
        Err(e @ MatchError::EmptyCandidateSet) => {
            tracing::error!("Match request for {} with no candidates loaded", investor_id);
            HttpResponse::InternalServerError().json(error_response(500, "No startups available", e.to_string()))
        }
    }
}
