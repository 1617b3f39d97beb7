//! Client-layer tests against an in-process stub server.
//!
//! The stub router returns canned `ApiResponse` envelopes so these tests can
//! verify the client's decoding and error normalization without a database.

use axum::{
    extract::Path,
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};

use riskregister_core::client::{ClientError, RiskApiClient};
use riskregister_core::features::assignments::dtos::AssignedUserDto;
use riskregister_core::features::risks::dtos::{CreateRiskDto, RiskListItemDto, RiskResponseDto};
use riskregister_core::features::users::dtos::UserResponseDto;
use riskregister_core::shared::types::ApiResponse;

async fn list_users_stub() -> Json<ApiResponse<Vec<UserResponseDto>>> {
    let users = vec![
        UserResponseDto {
            id: 1,
            username: "alice".to_string(),
        },
        UserResponseDto {
            id: 2,
            username: "bob".to_string(),
        },
    ];
    Json(ApiResponse::success(Some(users), None, None))
}

async fn list_risks_stub() -> Json<ApiResponse<Vec<RiskListItemDto>>> {
    let risks = vec![RiskListItemDto {
        id: 10,
        title: "Leak in module X".to_string(),
        description: String::new(),
        score: 8,
        category: "Security".to_string(),
        user_id: 1,
        username: "alice".to_string(),
        assigned_user_ids: vec![2],
    }];
    Json(ApiResponse::success(Some(risks), None, None))
}

async fn create_risk_stub(
    Json(dto): Json<CreateRiskDto>,
) -> (StatusCode, Json<ApiResponse<RiskResponseDto>>) {
    let created = RiskResponseDto {
        id: 10,
        title: dto.title,
        description: dto.description.unwrap_or_default(),
        score: dto.score,
        category: dto.category,
        user_id: dto.user_id,
        username: "alice".to_string(),
    };
    (
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(created), None, None)),
    )
}

/// Risk 1 accepts the assignment; any other id reports a duplicate.
async fn assign_user_stub(
    Path(risk_id): Path<i32>,
) -> Result<(StatusCode, Json<ApiResponse<AssignedUserDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    if risk_id == 1 {
        let user = AssignedUserDto {
            id: 2,
            username: "bob".to_string(),
        };
        Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(Some(user), None, None)),
        ))
    } else {
        Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(
                Some("User is already assigned to this risk".to_string()),
                None,
            )),
        ))
    }
}

async fn unassign_user_stub(
    Path((_risk_id, user_id)): Path<(i32, i32)>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    if user_id == 99 {
        Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error(
                Some("Assignment not found".to_string()),
                None,
            )),
        ))
    } else {
        Ok(Json(ApiResponse::success(
            None,
            Some("User unassigned successfully".to_string()),
            None,
        )))
    }
}

/// Success envelope with a null payload, which the client must reject
async fn empty_data_stub() -> Json<ApiResponse<Vec<UserResponseDto>>> {
    Json(ApiResponse::success(None, None, None))
}

fn stub_router() -> Router {
    Router::new()
        .route("/users", get(list_users_stub))
        .route("/risks", get(list_risks_stub).post(create_risk_stub))
        .route("/risks/{id}/assignments", post(assign_user_stub))
        .route(
            "/risks/{id}/assignments/{user_id}",
            delete(unassign_user_stub),
        )
        .route("/empty/users", get(empty_data_stub))
}

async fn spawn_stub_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");
    tokio::spawn(async move {
        axum::serve(listener, stub_router()).await.expect("serve");
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn list_users_decodes_envelope_data() {
    let base_url = spawn_stub_server().await;
    let client = RiskApiClient::new(base_url);

    let users = client.list_users().await.expect("list users");
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, 1);
    assert_eq!(users[1].username, "bob");
}

#[tokio::test]
async fn list_risks_carries_assigned_user_ids() {
    let base_url = spawn_stub_server().await;
    let client = RiskApiClient::new(base_url);

    let risks = client.list_risks().await.expect("list risks");
    assert_eq!(risks.len(), 1);
    assert_eq!(risks[0].assigned_user_ids, vec![2]);
}

#[tokio::test]
async fn create_risk_round_trips_fields() {
    let base_url = spawn_stub_server().await;
    let client = RiskApiClient::new(base_url);

    let created = client
        .create_risk(&CreateRiskDto {
            title: "Leak in module X".to_string(),
            description: None,
            score: 8,
            category: "Security".to_string(),
            user_id: 1,
        })
        .await
        .expect("create risk");

    assert_eq!(created.id, 10);
    assert_eq!(created.title, "Leak in module X");
    assert_eq!(created.score, 8);
    assert_eq!(created.category, "Security");
}

#[tokio::test]
async fn duplicate_assignment_surfaces_server_message() {
    let base_url = spawn_stub_server().await;
    let client = RiskApiClient::new(base_url);

    // Risk 1 accepts the assignment
    let assigned = client.assign_user(1, 2).await.expect("assign user");
    assert_eq!(assigned.id, 2);

    // Risk 2 reports a duplicate
    let error = client.assign_user(2, 2).await.expect_err("should fail");
    match error {
        ClientError::Api { status, message } => {
            assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
            assert!(message.contains("already assigned"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn unassign_missing_is_not_found_not_silent_success() {
    let base_url = spawn_stub_server().await;
    let client = RiskApiClient::new(base_url);

    assert!(client.unassign_user(1, 2).await.is_ok());

    let error = client.unassign_user(1, 99).await.expect_err("should fail");
    match error {
        ClientError::Api { status, .. } => {
            assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn success_without_data_is_an_error() {
    let base_url = spawn_stub_server().await;
    let client = RiskApiClient::new(format!("{}/empty", base_url));

    let error = client.list_users().await.expect_err("should fail");
    assert!(matches!(error, ClientError::Api { .. }));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Nothing listens on port 1
    let client = RiskApiClient::new("http://127.0.0.1:1");

    let error = client.list_users().await.expect_err("should fail");
    assert!(matches!(error, ClientError::Transport(_)));
}
