//! Threaded discussion on risks.
//!
//! Comments are immutable once created; the only mutation is deletion,
//! which is scoped to the owning risk.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CommentService;
