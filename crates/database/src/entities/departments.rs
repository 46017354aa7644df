use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub faculty_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::faculties::Entity",
        from = "Column::FacultyId",
        to = "super::faculties::Column::Id"
    )]
    Faculty,
    #[sea_orm(has_many = "super::curricula::Entity")]
    Curricula,
    #[sea_orm(has_many = "super::blacklists::Entity")]
    Blacklists,
}

impl Related<super::faculties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Faculty.def()
    }
}

impl Related<super::curricula::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Curricula.def()
    }
}

impl Related<super::blacklists::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Blacklists.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
