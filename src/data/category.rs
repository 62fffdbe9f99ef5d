use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct CategoryDataRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryDataRepository<'a> {
    /// Creates a new instance of [`CategoryDataRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert category-specific attributes, returning the new row.
    ///
    /// This is step one of the two-step ad post; the caller inserts the ad
    /// referencing the returned id.
    pub async fn create(
        &self,
        category_type: &str,
        attributes: serde_json::Value,
    ) -> Result<entity::category_data::Model, DbErr> {
        let category = entity::category_data::ActiveModel {
            category_type: ActiveValue::Set(category_type.to_string()),
            attributes: ActiveValue::Set(attributes),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        category.insert(self.db).await
    }
}
