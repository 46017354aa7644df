use database::entities::{course_corequisites, course_prerequisites};
use models::flags::CourseFlags;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FlagsBody {
    pub requires_permission: bool,
    pub summer_only: bool,
    pub requires_senior_standing: bool,
    pub min_credit_threshold: Option<i16>,
}

impl From<CourseFlags> for FlagsBody {
    fn from(flags: CourseFlags) -> Self {
        Self {
            requires_permission: flags.requires_permission,
            summer_only: flags.summer_only,
            requires_senior_standing: flags.requires_senior_standing,
            min_credit_threshold: flags.min_credit_threshold,
        }
    }
}

impl From<FlagsBody> for CourseFlags {
    fn from(body: FlagsBody) -> Self {
        Self {
            requires_permission: body.requires_permission,
            summer_only: body.summer_only,
            requires_senior_standing: body.requires_senior_standing,
            min_credit_threshold: body.min_credit_threshold,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PrerequisiteResponse {
    pub id: Uuid,
    pub course_id: Uuid,
    pub prerequisite_id: Uuid,
}

impl From<course_prerequisites::Model> for PrerequisiteResponse {
    fn from(edge: course_prerequisites::Model) -> Self {
        Self {
            id: edge.id,
            course_id: edge.course_id,
            prerequisite_id: edge.prerequisite_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CorequisiteResponse {
    pub id: Uuid,
    pub course_id: Uuid,
    pub corequisite_id: Uuid,
}

impl From<course_corequisites::Model> for CorequisiteResponse {
    fn from(edge: course_corequisites::Model) -> Self {
        Self {
            id: edge.id,
            course_id: edge.course_id,
            corequisite_id: edge.corequisite_id,
        }
    }
}
