use chrono::{Duration, Utc};
use mockall::predicate;
use slotbook_core::errors::BookingError;
use slotbook_db::models::DbAdminSession;
use uuid::Uuid;

use crate::test_utils::{build_state, TestContext};
use slotbook_api::middleware::error_handling::AppError;

// Mirrors the login handler: verify the shared password, then mint a
// session token.
async fn test_login_wrapper(
    ctx: &mut TestContext,
    password: String,
    ttl_hours: i64,
) -> Result<Uuid, AppError> {
    let password_static: &'static str = Box::leak(password.into_boxed_str());

    let is_valid = ctx.admin_repo.verify_password(password_static).await?;
    if !is_valid {
        return Err(AppError(BookingError::Authentication(
            "Invalid password".to_string(),
        )));
    }

    let session = ctx.session_repo.create_session("admin", ttl_hours).await?;
    Ok(session.token)
}

// Mirrors the AdminContext extractor: a request is authenticated only if
// the token resolves to a live session.
async fn test_session_check_wrapper(
    ctx: &mut TestContext,
    token: Uuid,
) -> Result<String, AppError> {
    let session = ctx
        .session_repo
        .get_valid_session(token)
        .await?
        .ok_or_else(|| {
            AppError(BookingError::Authentication("Admin login required".to_string()))
        })?;

    Ok(session.username)
}

fn session_row(token: Uuid) -> DbAdminSession {
    let now = Utc::now();
    DbAdminSession {
        token,
        username: "admin".to_string(),
        created_at: now,
        expires_at: now + Duration::hours(12),
    }
}

#[tokio::test]
async fn test_login_success_creates_session() {
    let mut ctx = TestContext::new();
    let token = Uuid::new_v4();

    ctx.admin_repo
        .expect_verify_password()
        .with(predicate::eq("correct horse"))
        .returning(|_| Ok(true));

    ctx.session_repo
        .expect_create_session()
        .with(predicate::eq("admin"), predicate::eq(12i64))
        .returning(move |_, _| Ok(session_row(token)));

    let issued = test_login_wrapper(&mut ctx, "correct horse".to_string(), 12)
        .await
        .expect("login should succeed");

    assert_eq!(issued, token);
}

#[tokio::test]
async fn test_login_wrong_password_is_generic_rejection() {
    let mut ctx = TestContext::new();

    // create_session has no expectation: a session must never be minted
    ctx.admin_repo
        .expect_verify_password()
        .returning(|_| Ok(false));

    let err = test_login_wrapper(&mut ctx, "wrong".to_string(), 12)
        .await
        .unwrap_err();

    match err.0 {
        BookingError::Authentication(message) => {
            // The message leaks nothing about whether the account exists
            assert_eq!(message, "Invalid password");
        }
        other => panic!("expected authentication error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unknown_session_token_is_rejected() {
    let mut ctx = TestContext::new();
    let token = Uuid::new_v4();

    ctx.session_repo
        .expect_get_valid_session()
        .with(predicate::eq(token))
        .returning(|_| Ok(None));

    let err = test_session_check_wrapper(&mut ctx, token).await.unwrap_err();
    assert!(matches!(err.0, BookingError::Authentication(_)));
}

#[tokio::test]
async fn test_valid_session_token_is_accepted() {
    let mut ctx = TestContext::new();
    let token = Uuid::new_v4();

    ctx.session_repo
        .expect_get_valid_session()
        .with(predicate::eq(token))
        .returning(move |_| Ok(Some(session_row(token))));

    let username = test_session_check_wrapper(&mut ctx, token)
        .await
        .expect("live session should authenticate");

    assert_eq!(username, "admin");
}

#[tokio::test]
async fn test_logout_removal_cookie_matches_login_path() {
    use axum_test::TestServer;
    use slotbook_api::{middleware::auth::SESSION_COOKIE, routes};

    let app = routes::auth::routes().with_state(build_state());
    let server = TestServer::new(app).expect("failed to start test server");

    // No session cookie on the request, so the handler only clears the jar
    let response = server.post("/api/auth/logout").await;
    response.assert_status_ok();

    let removal = response.cookie(SESSION_COOKIE);
    // Browsers only drop the login cookie if the paths line up
    assert_eq!(removal.path(), Some("/"));
    assert_eq!(removal.value(), "");
}
