use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::{ApplicantProfile, GrantLevel, OrgStatus};

/// Request to match the catalog against an applicant's answers
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    pub status: OrgStatus,
    #[serde(alias = "annual_revenue", rename = "annualRevenue", default)]
    pub annual_revenue: Option<u64>,
    #[validate(custom(function = validate_state_code))]
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub level: Option<GrantLevel>,
}

impl MatchRequest {
    /// Convert the raw form answers into a normalized profile
    pub fn profile(&self) -> ApplicantProfile {
        ApplicantProfile::new(self.status, self.annual_revenue, self.state.as_deref())
    }
}

/// A state answer is either blank (treated as unanswered) or a two-letter code
fn validate_state_code(state: &str) -> Result<(), ValidationError> {
    let trimmed = state.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    if trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(ValidationError::new("state_code"))
    }
}

/// Query parameters for the catalog listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    pub level: Option<GrantLevel>,
}
