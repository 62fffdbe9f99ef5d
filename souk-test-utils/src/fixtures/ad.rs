use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

/// Insert a category data row for the given category type.
pub async fn insert_category_data(
    db: &DatabaseConnection,
    category_type: &str,
) -> Result<entity::category_data::Model, TestError> {
    let category = entity::category_data::ActiveModel {
        category_type: ActiveValue::Set(category_type.to_string()),
        attributes: ActiveValue::Set(serde_json::json!({})),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(category.insert(db).await?)
}

/// Insert an active ad together with its category data row.
pub async fn insert_ad(
    db: &DatabaseConnection,
    category_type: &str,
    title: &str,
    price: i64,
    location: &str,
) -> Result<entity::ad::Model, TestError> {
    insert_ad_with_archival(db, category_type, title, price, location, false).await
}

/// Insert an ad that has already been archived.
pub async fn insert_archived_ad(
    db: &DatabaseConnection,
    category_type: &str,
    title: &str,
    price: i64,
    location: &str,
) -> Result<entity::ad::Model, TestError> {
    insert_ad_with_archival(db, category_type, title, price, location, true).await
}

async fn insert_ad_with_archival(
    db: &DatabaseConnection,
    category_type: &str,
    title: &str,
    price: i64,
    location: &str,
    is_archived: bool,
) -> Result<entity::ad::Model, TestError> {
    let category = insert_category_data(db, category_type).await?;

    let ad = entity::ad::ActiveModel {
        category_type: ActiveValue::Set(category_type.to_string()),
        category_id: ActiveValue::Set(category.id),
        title: ActiveValue::Set(title.to_string()),
        description: ActiveValue::Set(format!("{} in good condition", title)),
        price: ActiveValue::Set(price),
        location: ActiveValue::Set(location.to_string()),
        is_archived: ActiveValue::Set(is_archived),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(ad.insert(db).await?)
}
