use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::catalog::GrantCatalog;
use crate::config::PricingSettings;
use crate::core::GrantMatcher;
use crate::models::{
    CatalogQuery, CatalogResponse, ErrorResponse, HealthResponse, MatchRequest, MatchResponse,
    PricingResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<GrantCatalog>,
    pub matcher: GrantMatcher,
    pub pricing: PricingSettings,
}

/// Configure all grant-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/grants", web::get().to(list_grants))
        .route("/grants/match", web::post().to(match_grants))
        .route("/pricing", web::get().to(pricing));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_size: state.catalog.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Match endpoint
///
/// POST /api/v1/grants/match
///
/// Request body:
/// ```json
/// {
///   "status": "small_business|startup|nonprofit|education|other",
///   "annualRevenue": 100000,
///   "state": "NC",
///   "level": "federal|state|local|other"
/// }
/// ```
async fn match_grants(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let profile = req.profile();

    tracing::info!(
        "Matching grants for status {:?}, revenue {:?}, state {:?}, level {:?}",
        profile.status,
        profile.annual_revenue,
        profile.state,
        req.level
    );

    let outcome = state
        .matcher
        .find_eligible(state.catalog.grants(), &profile, req.level);

    tracing::info!(
        "Matched {} of {} grants",
        outcome.grants.len(),
        outcome.total_catalog
    );

    HttpResponse::Ok().json(MatchResponse {
        matched: outcome.grants.len(),
        total_catalog: outcome.total_catalog,
        grants: outcome.grants,
    })
}

/// Catalog listing endpoint
///
/// GET /api/v1/grants?level={federal|state|local|other}
///
/// Lists the full catalog, optionally narrowed by level. No profile
/// predicates are applied here.
async fn list_grants(
    state: web::Data<AppState>,
    query: web::Query<CatalogQuery>,
) -> impl Responder {
    let grants: Vec<_> = state
        .catalog
        .grants()
        .iter()
        .filter(|grant| query.level.map_or(true, |wanted| grant.level == Some(wanted)))
        .cloned()
        .collect();

    tracing::debug!("Listing {} grants (level filter: {:?})", grants.len(), query.level);

    HttpResponse::Ok().json(CatalogResponse {
        count: grants.len(),
        grants,
    })
}

/// Pricing endpoint
///
/// GET /api/v1/pricing
async fn pricing(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(PricingResponse {
        tiers: state.pricing.tiers.clone(),
        contact: state.pricing.contact.clone(),
    })
}
