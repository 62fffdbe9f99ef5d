use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    UpdateResult,
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetch a single user row by id.
    pub async fn get_by_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::user_details::Model>, DbErr> {
        entity::prelude::UserDetails::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Overwrite all five profile fields unconditionally.
    ///
    /// There are no partial-update semantics: omitted fields arrive as `None`
    /// and are written as NULL.
    pub async fn update_profile(
        &self,
        user_id: i32,
        name: Option<String>,
        address: Option<String>,
        phone_number: Option<String>,
        email: Option<String>,
        is_student: Option<bool>,
    ) -> Result<UpdateResult, DbErr> {
        entity::prelude::UserDetails::update_many()
            .col_expr(entity::user_details::Column::Name, Expr::value(name))
            .col_expr(entity::user_details::Column::Address, Expr::value(address))
            .col_expr(
                entity::user_details::Column::PhoneNumber,
                Expr::value(phone_number),
            )
            .col_expr(entity::user_details::Column::Email, Expr::value(email))
            .col_expr(
                entity::user_details::Column::IsStudent,
                Expr::value(is_student),
            )
            .filter(entity::user_details::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }

    /// Set or clear a user's archival flag.
    ///
    /// Returns OK regardless of the user existing; callers check
    /// [`UpdateResult::rows_affected`] for existence.
    pub async fn set_archived(&self, user_id: i32, archived: bool) -> Result<UpdateResult, DbErr> {
        entity::prelude::UserDetails::update_many()
            .col_expr(
                entity::user_details::Column::IsArchived,
                Expr::value(archived),
            )
            .filter(entity::user_details::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }

    /// Every user row, active and archived.
    pub async fn fetch_all(&self) -> Result<Vec<entity::user_details::Model>, DbErr> {
        entity::prelude::UserDetails::find().all(self.db).await
    }
}
