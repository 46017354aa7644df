use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Curriculum-scoped prerequisite override; both endpoints must belong to the
/// same curriculum (checked by the service layer, not the schema)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "curriculum_course_prerequisites")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub curriculum_course_id: Uuid,
    pub prerequisite_curriculum_course_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::curriculum_courses::Entity",
        from = "Column::CurriculumCourseId",
        to = "super::curriculum_courses::Column::Id"
    )]
    CurriculumCourse,
    #[sea_orm(
        belongs_to = "super::curriculum_courses::Entity",
        from = "Column::PrerequisiteCurriculumCourseId",
        to = "super::curriculum_courses::Column::Id"
    )]
    Prerequisite,
}

impl ActiveModelBehavior for ActiveModel {}
