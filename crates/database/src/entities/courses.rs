use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub credits: i16,
    pub credit_hours: String,
    pub description: Option<String>,
    pub category: String,
    pub requires_permission: bool,
    pub summer_only: bool,
    pub requires_senior_standing: bool,
    pub min_credit_threshold: Option<i16>,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::curriculum_courses::Entity")]
    CurriculumCourses,
}

impl Related<super::curriculum_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CurriculumCourses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
