use database::entities::courses;
use database::services::course::{CreateCourse, UpdateCourse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
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

impl From<courses::Model> for CourseResponse {
    fn from(course: courses::Model) -> Self {
        Self {
            id: course.id,
            code: course.code,
            name: course.name,
            credits: course.credits,
            credit_hours: course.credit_hours,
            description: course.description,
            category: course.category,
            requires_permission: course.requires_permission,
            summer_only: course.summer_only,
            requires_senior_standing: course.requires_senior_standing,
            min_credit_threshold: course.min_credit_threshold,
            is_active: course.is_active,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CourseQueryParams {
    #[serde(default = "super::common::default_page")]
    pub page: u64,

    #[serde(default = "super::common::default_per_page")]
    pub per_page: u64,

    pub search: Option<String>,
    pub category: Option<String>,
    pub credits: Option<i16>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCourseRequest {
    pub code: String,
    pub name: String,
    pub credits: i16,
    pub credit_hours: String,
    pub description: Option<String>,
    pub category: String,
}

impl From<CreateCourseRequest> for CreateCourse {
    fn from(req: CreateCourseRequest) -> Self {
        Self {
            code: req.code,
            name: req.name,
            credits: req.credits,
            credit_hours: req.credit_hours,
            description: req.description,
            category: req.category,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub credits: Option<i16>,
    pub credit_hours: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl From<UpdateCourseRequest> for UpdateCourse {
    fn from(req: UpdateCourseRequest) -> Self {
        Self {
            name: req.name,
            credits: req.credits,
            credit_hours: req.credit_hours,
            description: req.description,
            category: req.category,
        }
    }
}
