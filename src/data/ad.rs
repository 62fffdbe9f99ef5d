use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, UpdateResult,
};

use crate::model::ad::AdPayload;

pub struct AdRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdRepository<'a> {
    /// Creates a new instance of [`AdRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List active ads, applying every supplied filter.
    ///
    /// Archived ads are excluded. `sort_by` accepts `price_asc` and
    /// `price_desc`; any other value falls back to newest-first.
    pub async fn fetch_all(
        &self,
        category: Option<&str>,
        min_price: Option<i64>,
        max_price: Option<i64>,
        sort_by: Option<&str>,
        user_location: Option<&str>,
    ) -> Result<Vec<entity::ad::Model>, DbErr> {
        let mut query =
            entity::prelude::Ad::find().filter(entity::ad::Column::IsArchived.eq(false));

        if let Some(category) = category {
            query = query.filter(entity::ad::Column::CategoryType.eq(category));
        }
        if let Some(min_price) = min_price {
            query = query.filter(entity::ad::Column::Price.gte(min_price));
        }
        if let Some(max_price) = max_price {
            query = query.filter(entity::ad::Column::Price.lte(max_price));
        }
        if let Some(location) = user_location {
            query = query.filter(entity::ad::Column::Location.eq(location));
        }

        let query = match sort_by {
            Some("price_asc") => query.order_by_asc(entity::ad::Column::Price),
            Some("price_desc") => query.order_by_desc(entity::ad::Column::Price),
            _ => query.order_by_desc(entity::ad::Column::CreatedAt),
        };

        query.all(self.db).await
    }

    /// Search active ads whose title contains the given term.
    pub async fn search_by_title(&self, term: &str) -> Result<Vec<entity::ad::Model>, DbErr> {
        entity::prelude::Ad::find()
            .filter(entity::ad::Column::IsArchived.eq(false))
            .filter(entity::ad::Column::Title.contains(term))
            .all(self.db)
            .await
    }

    /// Insert an ad referencing an existing category data row.
    pub async fn create(
        &self,
        category_type: &str,
        category_id: i32,
        ad: AdPayload,
    ) -> Result<entity::ad::Model, DbErr> {
        let ad = entity::ad::ActiveModel {
            category_type: ActiveValue::Set(category_type.to_string()),
            category_id: ActiveValue::Set(category_id),
            title: ActiveValue::Set(ad.title),
            description: ActiveValue::Set(ad.description),
            price: ActiveValue::Set(ad.price),
            location: ActiveValue::Set(ad.location),
            is_archived: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        ad.insert(self.db).await
    }

    /// Soft-delete an ad by setting its archival flag.
    ///
    /// Returns OK regardless of the ad existing; callers check
    /// [`UpdateResult::rows_affected`] for existence.
    pub async fn archive(&self, ad_id: i32) -> Result<UpdateResult, DbErr> {
        entity::prelude::Ad::update_many()
            .col_expr(entity::ad::Column::IsArchived, Expr::value(true))
            .filter(entity::ad::Column::AdId.eq(ad_id))
            .exec(self.db)
            .await
    }
}
