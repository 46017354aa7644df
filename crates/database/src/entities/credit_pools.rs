use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Credit range drawn from one or more course-type sources
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "credit_pools")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub curriculum_id: Uuid,
    pub name: String,
    pub min_credits: i16,
    pub max_credits: Option<i16>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::curricula::Entity",
        from = "Column::CurriculumId",
        to = "super::curricula::Column::Id"
    )]
    Curriculum,
    #[sea_orm(has_many = "super::sub_category_pools::Entity")]
    SubCategoryPools,
    #[sea_orm(has_many = "super::attached_pool_courses::Entity")]
    AttachedPoolCourses,
}

impl Related<super::curricula::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Curriculum.def()
    }
}

impl Related<super::sub_category_pools::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubCategoryPools.def()
    }
}

impl Related<super::attached_pool_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttachedPoolCourses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
