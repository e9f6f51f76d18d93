//! Grant Guru - grant eligibility matching service
//!
//! This library provides the eligibility engine behind Grant Guru: a small
//! static grant catalog filtered attribute by attribute against an
//! applicant's answers, plus the HTTP shell that serves it.

pub mod catalog;
pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use catalog::{CatalogError, GrantCatalog};
pub use crate::core::{is_eligible, GrantMatcher, MatchOutcome};
pub use models::{ApplicantProfile, Grant, GrantLevel, MatchRequest, MatchResponse, OrgStatus};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let catalog = GrantCatalog::builtin().unwrap();
        let profile = ApplicantProfile::new(OrgStatus::Other, None, None);
        let outcome = GrantMatcher::new().find_eligible(catalog.grants(), &profile, None);

        assert_eq!(outcome.grants.len(), 1);
        assert_eq!(outcome.grants[0].name, "Special Needs Grant");
    }
}
