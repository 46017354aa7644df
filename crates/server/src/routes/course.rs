use crate::auth::AuthUser;
use crate::dtos::common::{ApiResponse, Paginated, PaginationMeta};
use crate::dtos::course::{
    CourseQueryParams, CourseResponse, CreateCourseRequest, UpdateCourseRequest,
};
use crate::error::ApiResult;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};
use database::error::ServiceError;
use database::services::course::CourseService;
use uuid::Uuid;

/// Paginated course catalog with code/name search and category/credits filters
#[utoipa::path(
    get,
    path = "/courses",
    params(CourseQueryParams),
    responses(
        (status = 200, description = "List of courses", body = Paginated<CourseResponse>),
        (status = 401, description = "Unknown caller")
    ),
    tag = "Courses"
)]
pub async fn list_courses(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<CourseQueryParams>,
) -> ApiResult<Json<ApiResponse<Paginated<CourseResponse>>>> {
    let (courses, total_items) = CourseService::get_courses_paginated(
        &state.db,
        params.page,
        params.per_page,
        params.search,
        params.category,
        params.credits,
    )
    .await?;

    Ok(ApiResponse::new(Paginated {
        items: courses.into_iter().map(CourseResponse::from).collect(),
        pagination: PaginationMeta::new(params.page, params.per_page, total_items),
    }))
}

#[utoipa::path(
    get,
    path = "/courses/{id}",
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses"
)]
pub async fn get_course(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<CourseResponse>>> {
    let course = CourseService::get_course_by_id(&state.db, id)
        .await?
        .ok_or(ServiceError::not_found("course"))?;

    Ok(ApiResponse::new(course.into()))
}

#[utoipa::path(
    post,
    path = "/courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 200, description = "Course created", body = CourseResponse),
        (status = 400, description = "Invalid code or credits"),
        (status = 409, description = "Course code already exists")
    ),
    tag = "Courses"
)]
pub async fn create_course(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateCourseRequest>,
) -> ApiResult<Json<ApiResponse<CourseResponse>>> {
    auth.require_manager()?;

    let course = CourseService::create_course(&state.db, auth.user.id, req.into()).await?;
    Ok(ApiResponse::new(course.into()))
}

#[utoipa::path(
    put,
    path = "/courses/{id}",
    params(("id" = Uuid, Path, description = "Course id")),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Course updated", body = CourseResponse),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses"
)]
pub async fn update_course(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCourseRequest>,
) -> ApiResult<Json<ApiResponse<CourseResponse>>> {
    auth.require_manager()?;

    let course = CourseService::update_course(&state.db, auth.user.id, id, req.into()).await?;
    Ok(ApiResponse::new(course.into()))
}

/// Soft delete; refused while any curriculum still references the course
#[utoipa::path(
    delete,
    path = "/courses/{id}",
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course deactivated"),
        (status = 404, description = "Course not found"),
        (status = 409, description = "Course is referenced by a curriculum")
    ),
    tag = "Courses"
)]
pub async fn delete_course(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<()>>> {
    auth.require_manager()?;

    CourseService::delete_course(&state.db, auth.user.id, id).await?;
    Ok(ApiResponse::new(()))
}
