//! Tests for the admin archive_user endpoint.
//!
//! Unlike self-service archival, the admin endpoint performs no affected-row
//! check and reports success even when the target id does not exist. The
//! second test pins that behavior so a silent change gets noticed.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::EntityTrait;
use souk::controller::user::archive_user;
use souk_test_utils::prelude::*;

/// Expect 200 and the target user archived
#[tokio::test]
async fn success_archives_target_user() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let user = fixtures::user::insert_user(&test.db, "Ada", "ada@example.com").await?;

    let result = archive_user(State(test.state()), Path(user.user_id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let archived = entity::prelude::UserDetails::find_by_id(user.user_id)
        .one(&test.db)
        .await?
        .unwrap();
    assert!(archived.is_archived);

    Ok(())
}

/// Expect 200 even when the target user does not exist
#[tokio::test]
async fn success_even_when_user_does_not_exist() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let result = archive_user(State(test.state()), Path(42)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect Err when required tables have not been created
#[tokio::test]
async fn error_without_tables() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = archive_user(State(test.state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
