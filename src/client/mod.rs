//! Typed client for the risk register API, used by frontends and tests.

mod risk_api_client;

pub use risk_api_client::{ClientError, ClientResult, RiskApiClient};
