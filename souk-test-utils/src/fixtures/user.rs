use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

/// Insert an active user with the given name and email.
pub async fn insert_user(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
) -> Result<entity::user_details::Model, TestError> {
    insert_user_with_archival(db, name, email, false).await
}

/// Insert a user that has already been archived.
pub async fn insert_archived_user(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
) -> Result<entity::user_details::Model, TestError> {
    insert_user_with_archival(db, name, email, true).await
}

async fn insert_user_with_archival(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    is_archived: bool,
) -> Result<entity::user_details::Model, TestError> {
    let user = entity::user_details::ActiveModel {
        name: ActiveValue::Set(Some(name.to_string())),
        address: ActiveValue::Set(Some("1 Test Street".to_string())),
        phone_number: ActiveValue::Set(Some("555-0100".to_string())),
        email: ActiveValue::Set(Some(email.to_string())),
        is_student: ActiveValue::Set(Some(false)),
        is_archived: ActiveValue::Set(is_archived),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(user.insert(db).await?)
}
