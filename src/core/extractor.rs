use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// Custom JSON extractor that provides consistent error responses
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection(rejection)),
        }
    }
}

pub struct AppJsonRejection(JsonRejection);

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        let message = match self.0 {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err),
            JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
            JsonRejection::MissingJsonContentType(err) => {
                format!("Missing JSON content type: {}", err)
            }
            _ => "Failed to parse JSON body".to_string(),
        };

        AppError::BadRequest(message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Router};
    use axum_test::TestServer;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        user_id: i32,
    }

    async fn echo(AppJson(payload): AppJson<Payload>) -> String {
        payload.user_id.to_string()
    }

    fn router() -> Router {
        Router::new().route("/echo", post(echo))
    }

    #[tokio::test]
    async fn accepts_well_formed_json() {
        let server = TestServer::new(router()).unwrap();
        let response = server
            .post("/echo")
            .json(&serde_json::json!({"user_id": 7}))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.text(), "7");
    }

    #[tokio::test]
    async fn missing_field_is_a_bad_request() {
        let server = TestServer::new(router()).unwrap();
        let response = server.post("/echo").json(&serde_json::json!({})).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_body_is_a_bad_request() {
        let server = TestServer::new(router()).unwrap();
        let response = server
            .post("/echo")
            .content_type("application/json")
            .bytes(axum::body::Bytes::from_static(b"{not json"))
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }
}
