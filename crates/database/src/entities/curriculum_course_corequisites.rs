use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Curriculum-scoped corequisite override; symmetric pairs, same-curriculum only
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "curriculum_course_corequisites")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub curriculum_course_id: Uuid,
    pub corequisite_curriculum_course_id: Uuid,
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
        from = "Column::CorequisiteCurriculumCourseId",
        to = "super::curriculum_courses::Column::Id"
    )]
    Corequisite,
}

impl ActiveModelBehavior for ActiveModel {}
