use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{CompatibilityMatcher, SyntheticProfileResolver};
use crate::models::{CompatibilityRequest, ErrorResponse, FindMatchRequest, HealthResponse, SyntheticProfileQuery};
use crate::services::{MatchError, Matchmaker};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matchmaker: Matchmaker,
    pub compatibility: CompatibilityMatcher,
    pub synthetic: SyntheticProfileResolver,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match", web::post().to(find_match))
        .route("/match/compatibility", web::post().to(find_compatibility))
        .route("/profiles/synthetic", web::get().to(synthetic_profile));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Map a failed match to an HTTP response
///
/// Upstream failures and contract violations are both 502; a person the
/// search cannot find is 404.
pub fn match_error_response(err: &MatchError) -> HttpResponse {
    let (status, error) = match err {
        MatchError::NoSearchResults(_) => (StatusCode::NOT_FOUND, "profile_not_found"),
        e if e.is_schema_violation() => (StatusCode::BAD_GATEWAY, "schema_violation"),
        _ => (StatusCode::BAD_GATEWAY, "upstream_unavailable"),
    };

    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message: err.to_string(),
        status_code: status.as_u16(),
    })
}

/// Model-backed match report
///
/// POST /api/v1/match
///
/// Request body:
/// ```json
/// {
///   "name_person1": "string",
///   "name_person2": "string"
/// }
/// ```
async fn find_match(
    state: web::Data<AppState>,
    req: web::Json<FindMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_match request: {:?}", errors);
        return validation_error(errors);
    }

    match state.matchmaker.find_match(&req.name_person1, &req.name_person2).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => {
            tracing::error!(
                "Failed to match {:?} with {:?}: {}",
                req.name_person1,
                req.name_person2,
                e
            );
            match_error_response(&e)
        }
    }
}

/// Closed-form compatibility report over synthetic profiles
///
/// POST /api/v1/match/compatibility
///
/// Request body:
/// ```json
/// {
///   "first_profile_link": "string",
///   "second_profile_link": "string"
/// }
/// ```
async fn find_compatibility(
    state: web::Data<AppState>,
    req: web::Json<CompatibilityRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let first = state.synthetic.resolve(&req.first_profile_link);
    let second = state.synthetic.resolve(&req.second_profile_link);
    let report = state.compatibility.evaluate(&first, &second);

    tracing::info!(
        "Compatibility {} vs {}: {} (good match: {})",
        first.name,
        second.name,
        report.overall_match_score,
        report.is_good_match
    );

    HttpResponse::Ok().json(report)
}

/// Inspect the synthetic profile behind a link
///
/// GET /api/v1/profiles/synthetic?link={link}
async fn synthetic_profile(
    state: web::Data<AppState>,
    query: web::Query<SyntheticProfileQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_error(errors);
    }

    HttpResponse::Ok().json(state.synthetic.resolve(&query.link))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{LlmError, SearchError};

    #[test]
    fn test_error_status_mapping() {
        let not_found = match_error_response(&MatchError::NoSearchResults("x".into()));
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let schema = match_error_response(&MatchError::Llm(LlmError::SchemaViolation("bad".into())));
        assert_eq!(schema.status(), StatusCode::BAD_GATEWAY);

        let upstream = match_error_response(&MatchError::Search(SearchError::ApiError {
            status: 500,
            message: "down".into(),
        }));
        assert_eq!(upstream.status(), StatusCode::BAD_GATEWAY);
    }
}
