use sea_orm::entity::prelude::*;

/// Marketplace user details. The five profile fields are nullable because
/// profile updates overwrite all of them unconditionally, writing NULL for
/// anything omitted from the request.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i32,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub is_student: Option<bool>,
    pub is_archived: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
