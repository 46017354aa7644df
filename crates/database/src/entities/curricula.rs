use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "curricula")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub year: i16,
    pub version: String,
    pub free_elective_name: String,
    pub department_id: Uuid,
    pub created_by: Uuid,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::DepartmentId",
        to = "super::departments::Column::Id"
    )]
    Department,
    #[sea_orm(has_many = "super::curriculum_courses::Entity")]
    CurriculumCourses,
    #[sea_orm(has_many = "super::elective_rules::Entity")]
    ElectiveRules,
    #[sea_orm(has_many = "super::credit_pools::Entity")]
    CreditPools,
    #[sea_orm(has_many = "super::curriculum_blacklists::Entity")]
    CurriculumBlacklists,
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::curriculum_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CurriculumCourses.def()
    }
}

impl Related<super::elective_rules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ElectiveRules.def()
    }
}

impl Related<super::credit_pools::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreditPools.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
