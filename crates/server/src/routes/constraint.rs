use crate::auth::AuthUser;
use crate::dtos::common::ApiResponse;
use crate::dtos::constraint::{CorequisiteResponse, FlagsBody, PrerequisiteResponse};
use crate::error::ApiResult;
use crate::routes::curriculum::load_scoped_curriculum;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use database::services::constraint::ConstraintService;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/courses/{id}/flags",
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Restriction flags", body = FlagsBody),
        (status = 404, description = "Course not found")
    ),
    tag = "Constraints"
)]
pub async fn get_flags(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<FlagsBody>>> {
    let flags = ConstraintService::get_flags(&state.db, id).await?;
    Ok(ApiResponse::new(flags.into()))
}

/// Replaces the flag set; senior standing demands a threshold in [0, 200]
#[utoipa::path(
    put,
    path = "/courses/{id}/flags",
    params(("id" = Uuid, Path, description = "Course id")),
    request_body = FlagsBody,
    responses(
        (status = 200, description = "Flags updated", body = FlagsBody),
        (status = 400, description = "Invalid senior-standing/threshold pairing"),
        (status = 404, description = "Course not found")
    ),
    tag = "Constraints"
)]
pub async fn set_flags(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<FlagsBody>,
) -> ApiResult<Json<ApiResponse<FlagsBody>>> {
    auth.require_manager()?;

    let course = ConstraintService::set_flags(&state.db, auth.user.id, id, body.into()).await?;
    Ok(ApiResponse::new(FlagsBody {
        requires_permission: course.requires_permission,
        summer_only: course.summer_only,
        requires_senior_standing: course.requires_senior_standing,
        min_credit_threshold: course.min_credit_threshold,
    }))
}

#[utoipa::path(
    get,
    path = "/courses/{id}/prerequisites",
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Prerequisite edges", body = [PrerequisiteResponse])
    ),
    tag = "Constraints"
)]
pub async fn list_prerequisites(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Vec<PrerequisiteResponse>>>> {
    let edges = ConstraintService::list_prerequisites(&state.db, id).await?;
    Ok(ApiResponse::new(
        edges.into_iter().map(PrerequisiteResponse::from).collect(),
    ))
}

#[utoipa::path(
    post,
    path = "/courses/{id}/prerequisites/{prereq_id}",
    params(
        ("id" = Uuid, Path, description = "Course id"),
        ("prereq_id" = Uuid, Path, description = "Prerequisite course id")
    ),
    responses(
        (status = 200, description = "Prerequisite added", body = PrerequisiteResponse),
        (status = 400, description = "Self-referencing edge"),
        (status = 409, description = "Edge already exists")
    ),
    tag = "Constraints"
)]
pub async fn add_prerequisite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, prereq_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<ApiResponse<PrerequisiteResponse>>> {
    auth.require_manager()?;

    let edge = ConstraintService::add_prerequisite(&state.db, auth.user.id, id, prereq_id).await?;
    Ok(ApiResponse::new(edge.into()))
}

#[utoipa::path(
    delete,
    path = "/courses/{id}/prerequisites/{prereq_id}",
    params(
        ("id" = Uuid, Path, description = "Course id"),
        ("prereq_id" = Uuid, Path, description = "Prerequisite course id")
    ),
    responses(
        (status = 200, description = "Prerequisite removed"),
        (status = 404, description = "Edge not found")
    ),
    tag = "Constraints"
)]
pub async fn remove_prerequisite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, prereq_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<ApiResponse<()>>> {
    auth.require_manager()?;

    ConstraintService::remove_prerequisite(&state.db, auth.user.id, id, prereq_id).await?;
    Ok(ApiResponse::new(()))
}

#[utoipa::path(
    get,
    path = "/courses/{id}/corequisites",
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Corequisite edges", body = [CorequisiteResponse])
    ),
    tag = "Constraints"
)]
pub async fn list_corequisites(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Vec<CorequisiteResponse>>>> {
    let edges = ConstraintService::list_corequisites(&state.db, id).await?;
    Ok(ApiResponse::new(
        edges.into_iter().map(CorequisiteResponse::from).collect(),
    ))
}

/// Inserts both directions of the pair in one transaction
#[utoipa::path(
    post,
    path = "/courses/{id}/corequisites/{coreq_id}",
    params(
        ("id" = Uuid, Path, description = "Course id"),
        ("coreq_id" = Uuid, Path, description = "Corequisite course id")
    ),
    responses(
        (status = 200, description = "Corequisite pair added"),
        (status = 400, description = "Self-referencing pair"),
        (status = 409, description = "Pair already exists")
    ),
    tag = "Constraints"
)]
pub async fn add_corequisite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, coreq_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<ApiResponse<()>>> {
    auth.require_manager()?;

    ConstraintService::add_corequisite(&state.db, auth.user.id, id, coreq_id).await?;
    Ok(ApiResponse::new(()))
}

/// Deleting either direction removes both edges
#[utoipa::path(
    delete,
    path = "/courses/{id}/corequisites/{coreq_id}",
    params(
        ("id" = Uuid, Path, description = "Course id"),
        ("coreq_id" = Uuid, Path, description = "Corequisite course id")
    ),
    responses(
        (status = 200, description = "Corequisite pair removed"),
        (status = 404, description = "Pair not found")
    ),
    tag = "Constraints"
)]
pub async fn remove_corequisite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, coreq_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<ApiResponse<()>>> {
    auth.require_manager()?;

    ConstraintService::remove_corequisite(&state.db, auth.user.id, id, coreq_id).await?;
    Ok(ApiResponse::new(()))
}

#[utoipa::path(
    post,
    path = "/curricula/{id}/courses/{cc_id}/prerequisites/{other_id}",
    params(
        ("id" = Uuid, Path, description = "Curriculum id"),
        ("cc_id" = Uuid, Path, description = "Curriculum course id"),
        ("other_id" = Uuid, Path, description = "Prerequisite curriculum course id")
    ),
    responses(
        (status = 200, description = "Scoped prerequisite added"),
        (status = 400, description = "Cross-curriculum or self-referencing edge"),
        (status = 409, description = "Edge already exists")
    ),
    tag = "Constraints"
)]
pub async fn add_scoped_prerequisite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, cc_id, other_id)): Path<(Uuid, Uuid, Uuid)>,
) -> ApiResult<Json<ApiResponse<()>>> {
    auth.require_manager()?;
    load_scoped_curriculum(&state, &auth, id).await?;

    ConstraintService::add_scoped_prerequisite(&state.db, auth.user.id, id, cc_id, other_id)
        .await?;
    Ok(ApiResponse::new(()))
}

#[utoipa::path(
    delete,
    path = "/curricula/{id}/courses/{cc_id}/prerequisites/{other_id}",
    params(
        ("id" = Uuid, Path, description = "Curriculum id"),
        ("cc_id" = Uuid, Path, description = "Curriculum course id"),
        ("other_id" = Uuid, Path, description = "Prerequisite curriculum course id")
    ),
    responses(
        (status = 200, description = "Scoped prerequisite removed"),
        (status = 404, description = "Edge not found")
    ),
    tag = "Constraints"
)]
pub async fn remove_scoped_prerequisite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, cc_id, other_id)): Path<(Uuid, Uuid, Uuid)>,
) -> ApiResult<Json<ApiResponse<()>>> {
    auth.require_manager()?;
    load_scoped_curriculum(&state, &auth, id).await?;

    ConstraintService::remove_scoped_prerequisite(&state.db, auth.user.id, id, cc_id, other_id)
        .await?;
    Ok(ApiResponse::new(()))
}

/// Symmetric within one curriculum, like the global variant
#[utoipa::path(
    post,
    path = "/curricula/{id}/courses/{cc_id}/corequisites/{other_id}",
    params(
        ("id" = Uuid, Path, description = "Curriculum id"),
        ("cc_id" = Uuid, Path, description = "Curriculum course id"),
        ("other_id" = Uuid, Path, description = "Corequisite curriculum course id")
    ),
    responses(
        (status = 200, description = "Scoped corequisite pair added"),
        (status = 400, description = "Cross-curriculum or self-referencing pair"),
        (status = 409, description = "Pair already exists")
    ),
    tag = "Constraints"
)]
pub async fn add_scoped_corequisite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, cc_id, other_id)): Path<(Uuid, Uuid, Uuid)>,
) -> ApiResult<Json<ApiResponse<()>>> {
    auth.require_manager()?;
    load_scoped_curriculum(&state, &auth, id).await?;

    ConstraintService::add_scoped_corequisite(&state.db, auth.user.id, id, cc_id, other_id)
        .await?;
    Ok(ApiResponse::new(()))
}

#[utoipa::path(
    delete,
    path = "/curricula/{id}/courses/{cc_id}/corequisites/{other_id}",
    params(
        ("id" = Uuid, Path, description = "Curriculum id"),
        ("cc_id" = Uuid, Path, description = "Curriculum course id"),
        ("other_id" = Uuid, Path, description = "Corequisite curriculum course id")
    ),
    responses(
        (status = 200, description = "Scoped corequisite pair removed"),
        (status = 404, description = "Pair not found")
    ),
    tag = "Constraints"
)]
pub async fn remove_scoped_corequisite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, cc_id, other_id)): Path<(Uuid, Uuid, Uuid)>,
) -> ApiResult<Json<ApiResponse<()>>> {
    auth.require_manager()?;
    load_scoped_curriculum(&state, &auth, id).await?;

    ConstraintService::remove_scoped_corequisite(&state.db, auth.user.id, id, cc_id, other_id)
        .await?;
    Ok(ApiResponse::new(()))
}
