// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{normalize_state, ApplicantProfile, Grant, GrantLevel, OrgStatus};
pub use requests::{CatalogQuery, MatchRequest};
pub use responses::{CatalogResponse, ErrorResponse, HealthResponse, MatchResponse, PricingResponse};
