// Unit tests for Grant Guru

use grant_guru::core::{is_eligible, satisfies_revenue, satisfies_states, satisfies_status};
use grant_guru::models::{ApplicantProfile, Grant, GrantLevel, OrgStatus};

fn grant(name: &str) -> Grant {
    Grant {
        name: name.to_string(),
        description: format!("{} description", name),
        min_revenue: None,
        max_revenue: None,
        required_business_type: None,
        required_status: None,
        states: None,
        level: Some(GrantLevel::Other),
        due_date: None,
        requirements: None,
    }
}

fn profile(status: OrgStatus, revenue: Option<u64>, state: Option<&str>) -> ApplicantProfile {
    ApplicantProfile::new(status, revenue, state)
}

#[test]
fn test_unconstrained_grant_is_always_eligible() {
    let g = grant("Open");

    assert!(is_eligible(&g, &profile(OrgStatus::Nonprofit, None, None)));
    assert!(is_eligible(&g, &profile(OrgStatus::Startup, Some(1), Some("WY"))));
}

#[test]
fn test_every_declared_constraint_must_pass() {
    let mut g = grant("Strict");
    g.min_revenue = Some(10_000);
    g.max_revenue = Some(100_000);
    g.required_status = Some(OrgStatus::SmallBusiness);
    g.states = Some(vec!["NC".to_string(), "VA".to_string()]);

    // All constraints satisfied
    assert!(is_eligible(&g, &profile(OrgStatus::SmallBusiness, Some(50_000), Some("NC"))));

    // Each constraint failing alone excludes the grant
    assert!(!is_eligible(&g, &profile(OrgStatus::Nonprofit, Some(50_000), Some("NC"))));
    assert!(!is_eligible(&g, &profile(OrgStatus::SmallBusiness, Some(5_000), Some("NC"))));
    assert!(!is_eligible(&g, &profile(OrgStatus::SmallBusiness, Some(50_000), Some("NY"))));
}

#[test]
fn test_absent_profile_attribute_fails_declared_constraint() {
    let mut revenue_bound = grant("Revenue Bound");
    revenue_bound.max_revenue = Some(100_000);

    let mut state_bound = grant("State Bound");
    state_bound.states = Some(vec!["NC".to_string()]);

    let p = profile(OrgStatus::SmallBusiness, None, None);

    assert!(!satisfies_revenue(&revenue_bound, &p));
    assert!(!satisfies_states(&state_bound, &p));
}

#[test]
fn test_status_and_business_type_both_checked() {
    let mut g = grant("Double");
    g.required_status = Some(OrgStatus::SmallBusiness);
    g.required_business_type = Some(OrgStatus::SmallBusiness);

    assert!(satisfies_status(&g, &profile(OrgStatus::SmallBusiness, None, None)));
    assert!(!satisfies_status(&g, &profile(OrgStatus::Startup, None, None)));
}

#[test]
fn test_state_comparison_uses_normalized_code() {
    let mut g = grant("Stateful");
    g.states = Some(vec!["NC".to_string()]);

    // Lowercase and padded input normalizes before membership is checked
    assert!(satisfies_states(&g, &profile(OrgStatus::Other, None, Some(" nc "))));
}

#[test]
fn test_revenue_bounds_are_inclusive() {
    let mut g = grant("Bounded");
    g.min_revenue = Some(0);
    g.max_revenue = Some(1_000_000);

    assert!(satisfies_revenue(&g, &profile(OrgStatus::SmallBusiness, Some(0), None)));
    assert!(satisfies_revenue(&g, &profile(OrgStatus::SmallBusiness, Some(1_000_000), None)));
    assert!(!satisfies_revenue(&g, &profile(OrgStatus::SmallBusiness, Some(1_000_001), None)));
}
