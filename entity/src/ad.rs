use sea_orm::entity::prelude::*;

/// A marketplace listing. Rows are never hard-deleted; archival flips
/// `is_archived` and archived rows drop out of public listing and search.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ads")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub ad_id: i32,
    pub category_type: String,
    pub category_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub price: i64,
    pub location: String,
    pub is_archived: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category_data::Entity",
        from = "Column::CategoryId",
        to = "super::category_data::Column::Id"
    )]
    CategoryData,
}

impl Related<super::category_data::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CategoryData.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
