use crate::auth::AuthUser;
use crate::dtos::common::ApiResponse;
use crate::dtos::curriculum::{
    AddCurriculumCourseRequest, CloneCurriculumRequest, CloneResponse, CreateCurriculumRequest,
    CurriculumCourseResponse, CurriculumDetailResponse, CurriculumQueryParams, CurriculumResponse,
    UpdateCurriculumRequest,
};
use crate::error::ApiResult;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};
use database::entities::curricula;
use database::error::ServiceError;
use database::services::constraint::ConstraintService;
use database::services::curriculum::CurriculumService;
use uuid::Uuid;

/// Loads a curriculum and verifies it is inside the caller's department scope
pub async fn load_scoped_curriculum(
    state: &AppState,
    auth: &AuthUser,
    curriculum_id: Uuid,
) -> ApiResult<curricula::Model> {
    let curriculum = CurriculumService::get_by_id(&state.db, curriculum_id)
        .await?
        .ok_or(ServiceError::not_found("curriculum"))?;
    auth.ensure_department(state, curriculum.department_id)
        .await?;
    Ok(curriculum)
}

#[utoipa::path(
    get,
    path = "/curricula",
    params(CurriculumQueryParams),
    responses(
        (status = 200, description = "Curricula visible to the caller", body = [CurriculumResponse])
    ),
    tag = "Curricula"
)]
pub async fn list_curricula(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<CurriculumQueryParams>,
) -> ApiResult<Json<ApiResponse<Vec<CurriculumResponse>>>> {
    let scope = auth.visible_departments(&state).await?;
    let curricula =
        CurriculumService::list(&state.db, scope.as_deref().map(|v| &v[..]), params.department_id)
            .await?;

    Ok(ApiResponse::new(
        curricula.into_iter().map(CurriculumResponse::from).collect(),
    ))
}

/// Full curriculum view: ordered courses, scoped constraint counts, elective
/// rules, credit pools and attached blacklists
#[utoipa::path(
    get,
    path = "/curricula/{id}",
    params(("id" = Uuid, Path, description = "Curriculum id")),
    responses(
        (status = 200, description = "Curriculum detail", body = CurriculumDetailResponse),
        (status = 404, description = "Curriculum not found")
    ),
    tag = "Curricula"
)]
pub async fn get_curriculum(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<CurriculumDetailResponse>>> {
    load_scoped_curriculum(&state, &auth, id).await?;

    let detail = CurriculumService::get_detail(&state.db, id)
        .await?
        .ok_or(ServiceError::not_found("curriculum"))?;
    let (prerequisites, corequisites) =
        ConstraintService::scoped_constraint_counts(&state.db, id).await?;

    Ok(ApiResponse::new(CurriculumDetailResponse::new(
        detail,
        prerequisites,
        corequisites,
    )))
}

#[utoipa::path(
    post,
    path = "/curricula",
    request_body = CreateCurriculumRequest,
    responses(
        (status = 200, description = "Curriculum created", body = CurriculumResponse),
        (status = 409, description = "Identity tuple already exists")
    ),
    tag = "Curricula"
)]
pub async fn create_curriculum(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateCurriculumRequest>,
) -> ApiResult<Json<ApiResponse<CurriculumResponse>>> {
    auth.require_manager()?;
    auth.ensure_department(&state, req.department_id).await?;

    let curriculum = CurriculumService::create(&state.db, auth.user.id, req.into()).await?;
    Ok(ApiResponse::new(curriculum.into()))
}

#[utoipa::path(
    put,
    path = "/curricula/{id}",
    params(("id" = Uuid, Path, description = "Curriculum id")),
    request_body = UpdateCurriculumRequest,
    responses(
        (status = 200, description = "Curriculum updated", body = CurriculumResponse),
        (status = 404, description = "Curriculum not found"),
        (status = 409, description = "Identity tuple already exists")
    ),
    tag = "Curricula"
)]
pub async fn update_curriculum(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCurriculumRequest>,
) -> ApiResult<Json<ApiResponse<CurriculumResponse>>> {
    auth.require_manager()?;
    load_scoped_curriculum(&state, &auth, id).await?;

    let curriculum = CurriculumService::update(&state.db, auth.user.id, id, req.into()).await?;
    Ok(ApiResponse::new(curriculum.into()))
}

#[utoipa::path(
    delete,
    path = "/curricula/{id}",
    params(("id" = Uuid, Path, description = "Curriculum id")),
    responses(
        (status = 200, description = "Curriculum deactivated"),
        (status = 404, description = "Curriculum not found")
    ),
    tag = "Curricula"
)]
pub async fn delete_curriculum(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<()>>> {
    auth.require_manager()?;
    load_scoped_curriculum(&state, &auth, id).await?;

    CurriculumService::deactivate(&state.db, auth.user.id, id).await?;
    Ok(ApiResponse::new(()))
}

/// Deep copy into a new identity tuple; one transaction, one audit entry
#[utoipa::path(
    post,
    path = "/curricula/{id}/clone",
    params(("id" = Uuid, Path, description = "Source curriculum id")),
    request_body = CloneCurriculumRequest,
    responses(
        (status = 200, description = "Curriculum cloned", body = CloneResponse),
        (status = 404, description = "Source not found"),
        (status = 409, description = "Target identity tuple already exists")
    ),
    tag = "Curricula"
)]
pub async fn clone_curriculum(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<CloneCurriculumRequest>,
) -> ApiResult<Json<ApiResponse<CloneResponse>>> {
    auth.require_manager()?;
    load_scoped_curriculum(&state, &auth, id).await?;

    let cloned = CurriculumService::clone_curriculum(&state.db, auth.user.id, id, req.into())
        .await?;
    let counts = CurriculumService::counts(&state.db, cloned.id).await?;

    Ok(ApiResponse::new(CloneResponse {
        curriculum: cloned.into(),
        counts: counts.into(),
    }))
}

#[utoipa::path(
    post,
    path = "/curricula/{id}/courses",
    params(("id" = Uuid, Path, description = "Curriculum id")),
    request_body = AddCurriculumCourseRequest,
    responses(
        (status = 200, description = "Course added", body = CurriculumCourseResponse),
        (status = 400, description = "Course is deactivated"),
        (status = 409, description = "Course already in curriculum")
    ),
    tag = "Curricula"
)]
pub async fn add_curriculum_course(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<AddCurriculumCourseRequest>,
) -> ApiResult<Json<ApiResponse<CurriculumCourseResponse>>> {
    auth.require_manager()?;
    load_scoped_curriculum(&state, &auth, id).await?;

    let row = CurriculumService::add_course(&state.db, auth.user.id, id, req.into()).await?;
    Ok(ApiResponse::new(CurriculumCourseResponse::from_pair((
        row, None,
    ))))
}

/// Removing a membership row also drops the scoped constraint edges touching it
#[utoipa::path(
    delete,
    path = "/curricula/{id}/courses/{cc_id}",
    params(
        ("id" = Uuid, Path, description = "Curriculum id"),
        ("cc_id" = Uuid, Path, description = "Curriculum course id")
    ),
    responses(
        (status = 200, description = "Course removed"),
        (status = 404, description = "Membership row not found")
    ),
    tag = "Curricula"
)]
pub async fn remove_curriculum_course(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, cc_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<ApiResponse<()>>> {
    auth.require_manager()?;
    load_scoped_curriculum(&state, &auth, id).await?;

    CurriculumService::remove_course(&state.db, auth.user.id, id, cc_id).await?;
    Ok(ApiResponse::new(()))
}
