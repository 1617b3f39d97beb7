mod risk;

pub use risk::{Risk, RiskWithAssignees};
