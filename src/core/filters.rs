use crate::models::{ApplicantProfile, Grant};

/// Check the revenue constraint, if the grant declares one.
///
/// A declared bound requires a reported annual revenue within
/// `[floor, max_revenue]`; a profile with no reported revenue fails it.
#[inline]
pub fn satisfies_revenue(grant: &Grant, profile: &ApplicantProfile) -> bool {
    let Some(max) = grant.max_revenue else {
        return true;
    };

    match profile.annual_revenue {
        Some(revenue) => grant.revenue_floor() <= revenue && revenue <= max,
        None => false,
    }
}

/// Check the business-type and status constraints, if declared.
///
/// The applicant reports a single status, which is held against both.
#[inline]
pub fn satisfies_status(grant: &Grant, profile: &ApplicantProfile) -> bool {
    if let Some(required) = grant.required_business_type {
        if profile.status != required {
            return false;
        }
    }

    if let Some(required) = grant.required_status {
        if profile.status != required {
            return false;
        }
    }

    true
}

/// Check the state constraint, if the grant declares an eligible-states set
#[inline]
pub fn satisfies_states(grant: &Grant, profile: &ApplicantProfile) -> bool {
    let Some(states) = &grant.states else {
        return true;
    };

    match &profile.state {
        Some(code) => states.iter().any(|s| s == code),
        None => false,
    }
}

/// A grant is eligible iff every constraint it declares is satisfied
#[inline]
pub fn is_eligible(grant: &Grant, profile: &ApplicantProfile) -> bool {
    satisfies_revenue(grant, profile)
        && satisfies_status(grant, profile)
        && satisfies_states(grant, profile)
}
