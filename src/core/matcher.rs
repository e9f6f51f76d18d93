use crate::core::filters::is_eligible;
use crate::models::{ApplicantProfile, Grant, GrantLevel};

/// Result of a match run
#[derive(Debug)]
pub struct MatchOutcome {
    pub grants: Vec<Grant>,
    pub total_catalog: usize,
}

/// Grant eligibility engine
///
/// Runs a single linear pass over the catalog, keeping the grants whose
/// declared constraints the profile satisfies. Catalog order is preserved;
/// there is no ranking, pagination, or indexing.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrantMatcher;

impl GrantMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Find the grants an applicant is eligible for
    ///
    /// # Arguments
    /// * `catalog` - The full grant list, in its stable display order
    /// * `profile` - The applicant's normalized answers
    /// * `level` - Optional level filter; only grants at that level are considered
    pub fn find_eligible(
        &self,
        catalog: &[Grant],
        profile: &ApplicantProfile,
        level: Option<GrantLevel>,
    ) -> MatchOutcome {
        let total_catalog = catalog.len();

        let grants: Vec<Grant> = catalog
            .iter()
            .filter(|grant| level.map_or(true, |wanted| grant.level == Some(wanted)))
            .filter(|grant| is_eligible(grant, profile))
            .cloned()
            .collect();

        MatchOutcome {
            grants,
            total_catalog,
        }
    }
}
