//! User directory feature.
//!
//! Read-only: users are provisioned out of band and only listed here so the
//! UI can offer an author/assignee selector.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::UserService;
