use std::{sync::Arc, time::Duration};

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, Request},
};

use super::*;
use crate::server::{
    middleware::auth::AuthUser,
    model::user::User,
    service::{
        auth::{jwt::JwtService, refresh::RefreshTokenStore},
        notification::LogNotifier,
    },
    state::AppState,
};

const SECRET: &str = "0123456789abcdef0123456789abcdef";

fn state(db: &sea_orm::DatabaseConnection, expiration_minutes: i64) -> AppState {
    AppState::new(
        db.clone(),
        JwtService::new(SECRET, expiration_minutes),
        RefreshTokenStore::new(Duration::from_secs(60)),
        Arc::new(LogNotifier),
        4,
    )
}

fn parts(authorization: Option<&str>) -> Parts {
    let mut builder = Request::builder().uri("/api/auth/profile");
    if let Some(value) = authorization {
        builder = builder.header(AUTHORIZATION, value);
    }

    builder.body(()).unwrap().into_parts().0
}

fn token(state: &AppState, user: entity::user::Model) -> String {
    state.jwt.issue(&User::from_entity(user)).unwrap()
}

/// Tests extracting claims from a valid bearer token.
///
/// Expected: Ok(AuthUser) carrying the user's ID
#[tokio::test]
async fn extracts_claims_from_bearer_token() -> Result<(), AppError> {
    let test = test_db().await;
    let db = test.db.as_ref().unwrap();
    let state = state(db, 60);

    let user = factory::create_user(db).await?;
    let header = format!("Bearer {}", token(&state, user.clone()));

    let AuthUser(claims) = AuthUser::from_request_parts(&mut parts(Some(&header)), &state).await?;

    assert_eq!(claims.user_id()?, user.id);
    assert_eq!(claims.email, user.email);

    Ok(())
}

/// Tests rejected authorization headers.
///
/// Verifies missing headers, non-bearer schemes and garbage tokens.
///
/// Expected: MissingToken, then InvalidToken twice
#[tokio::test]
async fn rejects_missing_or_malformed_header() -> Result<(), AppError> {
    let test = test_db().await;
    let db = test.db.as_ref().unwrap();
    let state = state(db, 60);

    let missing = AuthUser::from_request_parts(&mut parts(None), &state).await;
    assert!(matches!(
        missing,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    let basic = AuthUser::from_request_parts(&mut parts(Some("Basic abc")), &state).await;
    assert!(matches!(
        basic,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    let garbage = AuthUser::from_request_parts(&mut parts(Some("Bearer not.a.jwt")), &state).await;
    assert!(matches!(
        garbage,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests an expired token is reported as expired.
///
/// Expected: Err(AuthError::TokenExpired)
#[tokio::test]
async fn rejects_expired_token() -> Result<(), AppError> {
    let test = test_db().await;
    let db = test.db.as_ref().unwrap();
    let state = state(db, -5);

    let user = factory::create_user(db).await?;
    let header = format!("Bearer {}", token(&state, user));

    let result = AuthUser::from_request_parts(&mut parts(Some(&header)), &state).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::TokenExpired))
    ));

    Ok(())
}
