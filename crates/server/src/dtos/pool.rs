use crate::dtos::course::CourseResponse;
use database::entities::{credit_pools, sub_category_pools};
use database::services::pool::{CreatePool, CreateSubCategory, PoolDetail, UpdatePool};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
pub struct PoolResponse {
    pub id: Uuid,
    pub curriculum_id: Uuid,
    pub name: String,
    pub min_credits: i16,
    pub max_credits: Option<i16>,
}

impl From<credit_pools::Model> for PoolResponse {
    fn from(pool: credit_pools::Model) -> Self {
        Self {
            id: pool.id,
            curriculum_id: pool.curriculum_id,
            name: pool.name,
            min_credits: pool.min_credits,
            max_credits: pool.max_credits,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubCategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub course_category: String,
    pub required_credits: Option<i16>,
}

impl From<sub_category_pools::Model> for SubCategoryResponse {
    fn from(sub: sub_category_pools::Model) -> Self {
        Self {
            id: sub.id,
            name: sub.name,
            course_category: sub.course_category,
            required_credits: sub.required_credits,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PoolDetailResponse {
    pub pool: PoolResponse,
    pub sub_categories: Vec<SubCategoryResponse>,
    pub courses: Vec<CourseResponse>,
}

impl From<PoolDetail> for PoolDetailResponse {
    fn from(detail: PoolDetail) -> Self {
        Self {
            pool: detail.pool.into(),
            sub_categories: detail
                .sub_categories
                .into_iter()
                .map(SubCategoryResponse::from)
                .collect(),
            courses: detail.courses.into_iter().map(CourseResponse::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePoolRequest {
    pub name: String,
    pub min_credits: i16,
    pub max_credits: Option<i16>,
}

impl From<CreatePoolRequest> for CreatePool {
    fn from(req: CreatePoolRequest) -> Self {
        Self {
            name: req.name,
            min_credits: req.min_credits,
            max_credits: req.max_credits,
        }
    }
}

/// `clear_max_credits` removes the upper bound; a plain absent `max_credits`
/// leaves it unchanged
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePoolRequest {
    pub name: Option<String>,
    pub min_credits: Option<i16>,
    pub max_credits: Option<i16>,
    #[serde(default)]
    pub clear_max_credits: bool,
}

impl From<UpdatePoolRequest> for UpdatePool {
    fn from(req: UpdatePoolRequest) -> Self {
        let max_credits = if req.clear_max_credits {
            Some(None)
        } else {
            req.max_credits.map(Some)
        };
        Self {
            name: req.name,
            min_credits: req.min_credits,
            max_credits,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSubCategoryRequest {
    pub name: String,
    pub course_category: String,
    pub required_credits: Option<i16>,
}

impl From<CreateSubCategoryRequest> for CreateSubCategory {
    fn from(req: CreateSubCategoryRequest) -> Self {
        Self {
            name: req.name,
            course_category: req.course_category,
            required_credits: req.required_credits,
        }
    }
}
