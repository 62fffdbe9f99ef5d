//! Tests for the admin activate_user endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::EntityTrait;
use souk::controller::user::activate_user;
use souk_test_utils::prelude::*;

/// Expect 200 and the archived user reactivated
#[tokio::test]
async fn success_reactivates_archived_user() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let user = fixtures::user::insert_archived_user(&test.db, "Ada", "ada@example.com").await?;

    let result = activate_user(State(test.state()), Path(user.user_id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let activated = entity::prelude::UserDetails::find_by_id(user.user_id)
        .one(&test.db)
        .await?
        .unwrap();
    assert!(!activated.is_archived);

    Ok(())
}

/// Expect 404 when no user matches the given id
#[tokio::test]
async fn not_found_for_missing_user() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let result = activate_user(State(test.state()), Path(42)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
