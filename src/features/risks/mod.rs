//! Risk CRUD feature.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/risks` | List risks with assigned user ids |
//! | POST | `/risks` | Create risk |
//! | PUT | `/risks/{id}` | Update risk |
//! | DELETE | `/risks/{id}` | Delete risk (cascades to comments/assignments) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::RiskService;
