use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "curriculum_blacklists")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub curriculum_id: Uuid,
    pub blacklist_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::curricula::Entity",
        from = "Column::CurriculumId",
        to = "super::curricula::Column::Id"
    )]
    Curriculum,
    #[sea_orm(
        belongs_to = "super::blacklists::Entity",
        from = "Column::BlacklistId",
        to = "super::blacklists::Column::Id"
    )]
    Blacklist,
}

impl Related<super::curricula::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Curriculum.def()
    }
}

impl Related<super::blacklists::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Blacklist.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
