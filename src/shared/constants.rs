/// Valid risk score range, matching the 1-10 scale used by the UI form
pub const SCORE_MIN: i32 = 1;
pub const SCORE_MAX: i32 = 10;

/// Category labels offered by the UI. Not enforced server-side; any
/// non-empty category string is accepted.
pub const RISK_CATEGORIES: &[&str] = &["Functionality", "Performance", "Security", "Usability"];
