use crate::dtos::course::CourseResponse;
use database::entities::blacklists;
use database::services::blacklist::{CreateBlacklist, UpdateBlacklist};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
pub struct BlacklistResponse {
    pub id: Uuid,
    pub name: String,
    pub department_id: Uuid,
}

impl From<blacklists::Model> for BlacklistResponse {
    fn from(blacklist: blacklists::Model) -> Self {
        Self {
            id: blacklist.id,
            name: blacklist.name,
            department_id: blacklist.department_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BlacklistDetailResponse {
    pub blacklist: BlacklistResponse,
    pub courses: Vec<CourseResponse>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBlacklistRequest {
    pub name: String,
    pub department_id: Uuid,
    #[serde(default)]
    pub course_ids: Vec<Uuid>,
}

impl From<CreateBlacklistRequest> for CreateBlacklist {
    fn from(req: CreateBlacklistRequest) -> Self {
        Self {
            name: req.name,
            department_id: req.department_id,
            course_ids: req.course_ids,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBlacklistRequest {
    pub name: Option<String>,
    pub course_ids: Option<Vec<Uuid>>,
}

impl From<UpdateBlacklistRequest> for UpdateBlacklist {
    fn from(req: UpdateBlacklistRequest) -> Self {
        Self {
            name: req.name,
            course_ids: req.course_ids,
        }
    }
}
