use crate::dtos::blacklist::BlacklistResponse;
use crate::dtos::course::CourseResponse;
use crate::dtos::elective::ElectiveRuleResponse;
use crate::dtos::pool::PoolDetailResponse;
use database::entities::{curricula, curriculum_courses};
use database::services::curriculum::{
    AddCurriculumCourse, CloneCurriculum, CreateCurriculum, CurriculumCounts, CurriculumDetail,
    UpdateCurriculum,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
pub struct CurriculumResponse {
    pub id: Uuid,
    pub name: String,
    pub year: i16,
    pub version: String,
    pub free_elective_name: String,
    pub department_id: Uuid,
    pub is_active: bool,
}

impl From<curricula::Model> for CurriculumResponse {
    fn from(curriculum: curricula::Model) -> Self {
        Self {
            id: curriculum.id,
            name: curriculum.name,
            year: curriculum.year,
            version: curriculum.version,
            free_elective_name: curriculum.free_elective_name,
            department_id: curriculum.department_id,
            is_active: curriculum.is_active,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CurriculumCourseResponse {
    pub id: Uuid,
    pub position: i32,
    pub is_required: bool,
    pub semester: Option<i16>,
    pub year_level: Option<i16>,
    pub course: Option<CourseResponse>,
}

impl CurriculumCourseResponse {
    pub fn from_pair(
        pair: (
            curriculum_courses::Model,
            Option<database::entities::courses::Model>,
        ),
    ) -> Self {
        let (row, course) = pair;
        Self {
            id: row.id,
            position: row.position,
            is_required: row.is_required,
            semester: row.semester,
            year_level: row.year_level,
            course: course.map(CourseResponse::from),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConstraintCountsResponse {
    pub prerequisites: u64,
    pub corequisites: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CurriculumDetailResponse {
    pub curriculum: CurriculumResponse,
    pub courses: Vec<CurriculumCourseResponse>,
    pub constraint_counts: ConstraintCountsResponse,
    pub elective_rules: Vec<ElectiveRuleResponse>,
    pub pools: Vec<PoolDetailResponse>,
    pub blacklists: Vec<BlacklistResponse>,
}

impl CurriculumDetailResponse {
    pub fn new(detail: CurriculumDetail, prerequisites: u64, corequisites: u64) -> Self {
        Self {
            curriculum: detail.curriculum.into(),
            courses: detail
                .courses
                .into_iter()
                .map(CurriculumCourseResponse::from_pair)
                .collect(),
            constraint_counts: ConstraintCountsResponse {
                prerequisites,
                corequisites,
            },
            elective_rules: detail
                .elective_rules
                .into_iter()
                .map(ElectiveRuleResponse::from)
                .collect(),
            pools: detail
                .pools
                .into_iter()
                .map(PoolDetailResponse::from)
                .collect(),
            blacklists: detail
                .blacklists
                .into_iter()
                .map(BlacklistResponse::from)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CurriculumCountsResponse {
    pub courses: u64,
    pub prerequisites: u64,
    pub corequisites: u64,
    pub elective_rules: u64,
    pub credit_pools: u64,
    pub blacklists: u64,
}

impl From<CurriculumCounts> for CurriculumCountsResponse {
    fn from(counts: CurriculumCounts) -> Self {
        Self {
            courses: counts.courses,
            prerequisites: counts.prerequisites,
            corequisites: counts.corequisites,
            elective_rules: counts.elective_rules,
            credit_pools: counts.credit_pools,
            blacklists: counts.blacklists,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CloneResponse {
    pub curriculum: CurriculumResponse,
    pub counts: CurriculumCountsResponse,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CurriculumQueryParams {
    pub department_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCurriculumRequest {
    pub name: String,
    pub year: i16,
    pub version: String,
    pub department_id: Uuid,
}

impl From<CreateCurriculumRequest> for CreateCurriculum {
    fn from(req: CreateCurriculumRequest) -> Self {
        Self {
            name: req.name,
            year: req.year,
            version: req.version,
            department_id: req.department_id,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCurriculumRequest {
    pub name: Option<String>,
    pub year: Option<i16>,
    pub version: Option<String>,
}

impl From<UpdateCurriculumRequest> for UpdateCurriculum {
    fn from(req: UpdateCurriculumRequest) -> Self {
        Self {
            name: req.name,
            year: req.year,
            version: req.version,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CloneCurriculumRequest {
    pub name: String,
    pub year: i16,
    pub version: String,
}

impl From<CloneCurriculumRequest> for CloneCurriculum {
    fn from(req: CloneCurriculumRequest) -> Self {
        Self {
            name: req.name,
            year: req.year,
            version: req.version,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCurriculumCourseRequest {
    pub course_id: Uuid,
    pub position: i32,
    #[serde(default = "default_required")]
    pub is_required: bool,
    pub semester: Option<i16>,
    pub year_level: Option<i16>,
}

fn default_required() -> bool {
    true
}

impl From<AddCurriculumCourseRequest> for AddCurriculumCourse {
    fn from(req: AddCurriculumCourseRequest) -> Self {
        Self {
            course_id: req.course_id,
            position: req.position,
            is_required: req.is_required,
            semester: req.semester,
            year_level: req.year_level,
        }
    }
}
