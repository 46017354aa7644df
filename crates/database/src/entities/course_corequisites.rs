use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Corequisite edge; rows always exist in symmetric pairs (A,B) and (B,A)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course_corequisites")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_id: Uuid,
    pub corequisite_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CorequisiteId",
        to = "super::courses::Column::Id"
    )]
    Corequisite,
}

impl ActiveModelBehavior for ActiveModel {}
