use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Named course set excluded from counting toward attached curricula
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blacklists")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub department_id: Uuid,
    pub created_by: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::DepartmentId",
        to = "super::departments::Column::Id"
    )]
    Department,
    #[sea_orm(has_many = "super::blacklist_courses::Entity")]
    BlacklistCourses,
    #[sea_orm(has_many = "super::curriculum_blacklists::Entity")]
    CurriculumBlacklists,
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::blacklist_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlacklistCourses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
