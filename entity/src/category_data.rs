use sea_orm::entity::prelude::*;

/// Category-specific attributes for an ad, inserted before the ad row that
/// references it. The attribute shape varies per category so it is stored as
/// a JSON document rather than one table per category.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "category_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub category_type: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub attributes: Json,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ad::Entity")]
    Ad,
}

impl Related<super::ad::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ad.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
