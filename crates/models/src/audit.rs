use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use serde::{Deserialize, Serialize};

/// Kinds of records the audit log can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    #[sea_orm(string_value = "COURSE")]
    Course,
    #[sea_orm(string_value = "CURRICULUM")]
    Curriculum,
    #[sea_orm(string_value = "CURRICULUM_COURSE")]
    CurriculumCourse,
    #[sea_orm(string_value = "CONSTRAINT")]
    Constraint,
    #[sea_orm(string_value = "ELECTIVE_RULE")]
    ElectiveRule,
    #[sea_orm(string_value = "CREDIT_POOL")]
    CreditPool,
    #[sea_orm(string_value = "BLACKLIST")]
    Blacklist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    #[sea_orm(string_value = "CREATE")]
    Create,
    #[sea_orm(string_value = "UPDATE")]
    Update,
    #[sea_orm(string_value = "DELETE")]
    Delete,
    #[sea_orm(string_value = "CLONE")]
    Clone,
    #[sea_orm(string_value = "ATTACH")]
    Attach,
    #[sea_orm(string_value = "DETACH")]
    Detach,
}
