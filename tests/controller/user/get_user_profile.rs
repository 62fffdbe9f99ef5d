//! Tests for the get_user_profile endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use souk::{controller::user::get_user_profile, model::session::SessionUserId};
use souk_test_utils::prelude::*;

/// Expect 200 with the profile projection for the session user
#[tokio::test]
async fn success_for_session_user() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let user = fixtures::user::insert_user(&test.db, "Ada", "ada@example.com").await?;
    SessionUserId::insert(&test.session, user.user_id).await.unwrap();

    let result = get_user_profile(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let profile: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(profile["email"], "ada@example.com");
    // The projection excludes the archival flag
    assert!(profile.get("is_archived").is_none());

    Ok(())
}

/// Expect 404 when no user id is present in the session
#[tokio::test]
async fn not_found_without_session_user() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let result = get_user_profile(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 when the session user has no matching row
#[tokio::test]
async fn not_found_for_missing_row() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    SessionUserId::insert(&test.session, 42).await.unwrap();

    let result = get_user_profile(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
