mod assignment;

pub use assignment::{AssignedUser, RiskAssignment};
