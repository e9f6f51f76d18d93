use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Organization status reported by the applicant.
///
/// The intake form asks a single question, so the same answer serves as both
/// the applicant's status and their business type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrgStatus {
    SmallBusiness,
    Startup,
    Nonprofit,
    Education,
    Other,
}

/// Administrative level a grant is offered at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrantLevel {
    Federal,
    State,
    Local,
    Other,
}

impl GrantLevel {
    /// Human-readable label for display surfaces
    pub fn label(&self) -> &'static str {
        match self {
            GrantLevel::Federal => "Federal",
            GrantLevel::State => "State",
            GrantLevel::Local => "Local",
            GrantLevel::Other => "Other",
        }
    }
}

/// A funding-opportunity record in the catalog
///
/// Every eligibility field is optional. A grant that declares a constraint
/// only matches profiles satisfying it; a grant that omits one is permissive
/// for that attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grant {
    pub name: String,
    pub description: String,
    #[serde(rename = "minRevenue", default, skip_serializing_if = "Option::is_none")]
    pub min_revenue: Option<u64>,
    #[serde(rename = "maxRevenue", default, skip_serializing_if = "Option::is_none")]
    pub max_revenue: Option<u64>,
    #[serde(
        rename = "requiredBusinessType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub required_business_type: Option<OrgStatus>,
    #[serde(rename = "requiredStatus", default, skip_serializing_if = "Option::is_none")]
    pub required_status: Option<OrgStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<GrantLevel>,
    #[serde(rename = "dueDate", default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
}

impl Grant {
    /// A revenue constraint is declared by the presence of `max_revenue`;
    /// the floor defaults to zero when omitted.
    pub fn has_revenue_bound(&self) -> bool {
        self.max_revenue.is_some()
    }

    pub fn revenue_floor(&self) -> u64 {
        self.min_revenue.unwrap_or(0)
    }
}

/// The applicant's self-reported attributes used for filtering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub status: OrgStatus,
    #[serde(rename = "annualRevenue", default)]
    pub annual_revenue: Option<u64>,
    #[serde(default)]
    pub state: Option<String>,
}

impl ApplicantProfile {
    /// Build a profile, normalizing the state code as the intake form does
    pub fn new(status: OrgStatus, annual_revenue: Option<u64>, state: Option<&str>) -> Self {
        Self {
            status,
            annual_revenue,
            state: state.and_then(normalize_state),
        }
    }
}

/// Normalize a raw state input to a trimmed uppercase code.
///
/// Empty or whitespace-only input means the applicant left the field blank,
/// which is treated the same as not answering at all.
pub fn normalize_state(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}
