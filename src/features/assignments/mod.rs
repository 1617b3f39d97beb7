//! Many-to-many assignment of users to risks.
//!
//! Membership semantics: the composite (risk_id, user_id) primary key keeps
//! assignment a set, and duplicate attempts are rejected with 400.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::AssignmentService;
