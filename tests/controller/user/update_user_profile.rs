//! Tests for the update_user_profile endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::EntityTrait;
use souk::{
    controller::user::update_user_profile,
    model::{session::SessionUserId, user::UpdateProfileRequest},
};
use souk_test_utils::prelude::*;

/// Expect 200 and all five fields overwritten
#[tokio::test]
async fn success_overwrites_profile() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let user = fixtures::user::insert_user(&test.db, "Ada", "ada@example.com").await?;
    SessionUserId::insert(&test.session, user.user_id).await.unwrap();

    let body = UpdateProfileRequest {
        name: Some("Grace".to_string()),
        address: None,
        phone_number: None,
        email: Some("grace@example.com".to_string()),
        is_student: Some(true),
    };
    let result =
        update_user_profile(State(test.state()), test.session.clone(), axum::Json(body)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let updated = entity::prelude::UserDetails::find_by_id(user.user_id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(updated.name, Some("Grace".to_string()));
    // Omitted fields are overwritten with NULL, not preserved
    assert_eq!(updated.address, None);
    assert_eq!(updated.phone_number, None);
    assert_eq!(updated.is_student, Some(true));

    Ok(())
}

/// Expect 404 when the session user has no matching row
#[tokio::test]
async fn not_found_for_missing_row() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    SessionUserId::insert(&test.session, 42).await.unwrap();

    let body = UpdateProfileRequest {
        name: None,
        address: None,
        phone_number: None,
        email: None,
        is_student: None,
    };
    let result =
        update_user_profile(State(test.state()), test.session.clone(), axum::Json(body)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
