use std::{sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{header::AUTHORIZATION, Method, Request, StatusCode},
    Router,
};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;
use utoipa::OpenApi;

use crate::server::{
    error::AppError,
    model::user::User,
    router::{api_routes, ApiDoc},
    service::{
        auth::{jwt::JwtService, refresh::RefreshTokenStore},
        notification::LogNotifier,
    },
    state::AppState,
};

const SECRET: &str = "0123456789abcdef0123456789abcdef";

fn app(db: &DatabaseConnection) -> (Router, AppState) {
    let state = AppState::new(
        db.clone(),
        JwtService::new(SECRET, 60),
        RefreshTokenStore::new(Duration::from_secs(60)),
        Arc::new(LogNotifier),
        4,
    );

    (api_routes().with_state(state.clone()), state)
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Tests that protected routes reject requests without a bearer token.
///
/// Expected: 401 Unauthorized
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (app, _) = app(db);

    let response = app
        .oneshot(request(Method::GET, "/api/rooms", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Tests listing rooms through the router.
///
/// Expected: 200 OK with the seeded room
#[tokio::test]
async fn lists_rooms_for_authenticated_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (app, state) = app(db);

    let (_, _, _, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let user = factory::create_user(db).await?;
    let token = state.jwt.issue(&User::from_entity(user))?;

    let response = app
        .oneshot(request(Method::GET, "/api/rooms", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body.as_array().map(|rooms| rooms.len()), Some(1));
    assert_eq!(body[0]["id"], room.id);

    Ok(())
}

/// Tests that room management is limited to admins and technicians.
///
/// Expected: 403 Forbidden for a plain user
#[tokio::test]
async fn forbids_room_creation_for_plain_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (app, state) = app(db);

    let user = factory::create_user_with_role(db, UserRole::User).await?;
    let token = state.jwt.issue(&User::from_entity(user))?;

    let body = r#"{"department_id":1,"responsible_technician_id":1,"name":"Lab","max_capacity":10}"#;
    let response = app
        .oneshot(request(Method::POST, "/api/rooms", Some(&token), Some(body)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Tests an empty reservation history.
///
/// Expected: 200 OK with an explanatory message and no reservations
#[tokio::test]
async fn reports_empty_reservation_history() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (app, state) = app(db);

    let user = factory::create_user(db).await?;
    let uri = format!("/api/reservations/history/{}", user.id);
    let token = state.jwt.issue(&User::from_entity(user))?;

    let response = app
        .oneshot(request(Method::GET, &uri, Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["message"], "You have no previous reservations");
    assert_eq!(body["reservations"], serde_json::json!([]));

    Ok(())
}

/// Tests that another user's reservation stays hidden behind the router.
///
/// Verifies the event detail, participant list, and participant removal routes.
///
/// Expected: 404 Not Found on every route
#[tokio::test]
async fn hides_foreign_reservation_from_outsider() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (app, state) = app(db);

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let participant =
        factory::create_participant(db, reservation.id, "Guest", "guest@example.com").await?;
    let outsider = factory::create_user(db).await?;
    let token = state.jwt.issue(&User::from_entity(outsider))?;

    let routes = [
        (Method::GET, format!("/api/rooms/events/{}", reservation.id)),
        (
            Method::GET,
            format!("/api/reservations/{}/participants", reservation.id),
        ),
        (Method::DELETE, format!("/api/participants/{}", participant.id)),
    ];

    for (method, uri) in routes {
        let response = app
            .clone()
            .oneshot(request(method, &uri, Some(&token), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
    }

    Ok(())
}

#[test]
fn documents_routes_with_bearer_scheme() {
    let doc = ApiDoc::openapi();

    assert!(doc.paths.paths.contains_key("/api/reservations/approval"));
    assert!(doc.paths.paths.contains_key("/api/rooms/{id}/inventory"));
    assert!(doc
        .components
        .as_ref()
        .is_some_and(|c| c.security_schemes.contains_key("bearer")));
}
