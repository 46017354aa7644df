use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Partitions a credit pool's requirement by course category
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sub_category_pools")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub credit_pool_id: Uuid,
    pub name: String,
    pub course_category: String,
    pub required_credits: Option<i16>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::credit_pools::Entity",
        from = "Column::CreditPoolId",
        to = "super::credit_pools::Column::Id"
    )]
    CreditPool,
}

impl Related<super::credit_pools::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreditPool.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
