// Core algorithm exports
pub mod filters;
pub mod matcher;

pub use filters::{is_eligible, satisfies_revenue, satisfies_states, satisfies_status};
pub use matcher::{GrantMatcher, MatchOutcome};
