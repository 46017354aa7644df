use crate::auth::AuthUser;
use crate::dtos::common::ApiResponse;
use crate::dtos::pool::{
    CreatePoolRequest, CreateSubCategoryRequest, PoolDetailResponse, PoolResponse,
    SubCategoryResponse, UpdatePoolRequest,
};
use crate::error::ApiResult;
use crate::routes::curriculum::load_scoped_curriculum;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use database::services::pool::PoolService;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/curricula/{id}/pools",
    params(("id" = Uuid, Path, description = "Curriculum id")),
    responses(
        (status = 200, description = "Credit pools with sub-categories and pinned courses", body = [PoolDetailResponse])
    ),
    tag = "Credit pools"
)]
pub async fn list_pools(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Vec<PoolDetailResponse>>>> {
    load_scoped_curriculum(&state, &auth, id).await?;

    let pools = PoolService::list_for_curriculum(&state.db, id).await?;
    Ok(ApiResponse::new(
        pools.into_iter().map(PoolDetailResponse::from).collect(),
    ))
}

#[utoipa::path(
    post,
    path = "/curricula/{id}/pools",
    params(("id" = Uuid, Path, description = "Curriculum id")),
    request_body = CreatePoolRequest,
    responses(
        (status = 200, description = "Pool created", body = PoolResponse),
        (status = 400, description = "Invalid credit range")
    ),
    tag = "Credit pools"
)]
pub async fn create_pool(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<CreatePoolRequest>,
) -> ApiResult<Json<ApiResponse<PoolResponse>>> {
    auth.require_manager()?;
    load_scoped_curriculum(&state, &auth, id).await?;

    let pool = PoolService::create_pool(&state.db, auth.user.id, id, req.into()).await?;
    Ok(ApiResponse::new(pool.into()))
}

#[utoipa::path(
    put,
    path = "/curricula/{id}/pools/{pool_id}",
    params(
        ("id" = Uuid, Path, description = "Curriculum id"),
        ("pool_id" = Uuid, Path, description = "Credit pool id")
    ),
    request_body = UpdatePoolRequest,
    responses(
        (status = 200, description = "Pool updated", body = PoolResponse),
        (status = 404, description = "Pool not found")
    ),
    tag = "Credit pools"
)]
pub async fn update_pool(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, pool_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<UpdatePoolRequest>,
) -> ApiResult<Json<ApiResponse<PoolResponse>>> {
    auth.require_manager()?;
    load_scoped_curriculum(&state, &auth, id).await?;

    let pool = PoolService::update_pool(&state.db, auth.user.id, id, pool_id, req.into()).await?;
    Ok(ApiResponse::new(pool.into()))
}

#[utoipa::path(
    delete,
    path = "/curricula/{id}/pools/{pool_id}",
    params(
        ("id" = Uuid, Path, description = "Curriculum id"),
        ("pool_id" = Uuid, Path, description = "Credit pool id")
    ),
    responses(
        (status = 200, description = "Pool deleted"),
        (status = 404, description = "Pool not found")
    ),
    tag = "Credit pools"
)]
pub async fn delete_pool(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, pool_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<ApiResponse<()>>> {
    auth.require_manager()?;
    load_scoped_curriculum(&state, &auth, id).await?;

    PoolService::delete_pool(&state.db, auth.user.id, id, pool_id).await?;
    Ok(ApiResponse::new(()))
}

#[utoipa::path(
    post,
    path = "/curricula/{id}/pools/{pool_id}/sub-categories",
    params(
        ("id" = Uuid, Path, description = "Curriculum id"),
        ("pool_id" = Uuid, Path, description = "Credit pool id")
    ),
    request_body = CreateSubCategoryRequest,
    responses(
        (status = 200, description = "Sub-category added", body = SubCategoryResponse),
        (status = 404, description = "Pool not found")
    ),
    tag = "Credit pools"
)]
pub async fn add_sub_category(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, pool_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<CreateSubCategoryRequest>,
) -> ApiResult<Json<ApiResponse<SubCategoryResponse>>> {
    auth.require_manager()?;
    load_scoped_curriculum(&state, &auth, id).await?;

    let sub =
        PoolService::add_sub_category(&state.db, auth.user.id, id, pool_id, req.into()).await?;
    Ok(ApiResponse::new(sub.into()))
}

#[utoipa::path(
    delete,
    path = "/curricula/{id}/pools/{pool_id}/sub-categories/{sub_id}",
    params(
        ("id" = Uuid, Path, description = "Curriculum id"),
        ("pool_id" = Uuid, Path, description = "Credit pool id"),
        ("sub_id" = Uuid, Path, description = "Sub-category id")
    ),
    responses(
        (status = 200, description = "Sub-category removed"),
        (status = 404, description = "Sub-category not found")
    ),
    tag = "Credit pools"
)]
pub async fn remove_sub_category(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, pool_id, sub_id)): Path<(Uuid, Uuid, Uuid)>,
) -> ApiResult<Json<ApiResponse<()>>> {
    auth.require_manager()?;
    load_scoped_curriculum(&state, &auth, id).await?;

    PoolService::remove_sub_category(&state.db, auth.user.id, id, pool_id, sub_id).await?;
    Ok(ApiResponse::new(()))
}

#[utoipa::path(
    post,
    path = "/curricula/{id}/pools/{pool_id}/courses/{course_id}",
    params(
        ("id" = Uuid, Path, description = "Curriculum id"),
        ("pool_id" = Uuid, Path, description = "Credit pool id"),
        ("course_id" = Uuid, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Course pinned to pool"),
        (status = 404, description = "Pool or course not found"),
        (status = 409, description = "Course already pinned")
    ),
    tag = "Credit pools"
)]
pub async fn attach_course(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, pool_id, course_id)): Path<(Uuid, Uuid, Uuid)>,
) -> ApiResult<Json<ApiResponse<()>>> {
    auth.require_manager()?;
    load_scoped_curriculum(&state, &auth, id).await?;

    PoolService::attach_course(&state.db, auth.user.id, id, pool_id, course_id).await?;
    Ok(ApiResponse::new(()))
}

#[utoipa::path(
    delete,
    path = "/curricula/{id}/pools/{pool_id}/courses/{course_id}",
    params(
        ("id" = Uuid, Path, description = "Curriculum id"),
        ("pool_id" = Uuid, Path, description = "Credit pool id"),
        ("course_id" = Uuid, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Course unpinned from pool"),
        (status = 404, description = "Course was not pinned")
    ),
    tag = "Credit pools"
)]
pub async fn detach_course(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, pool_id, course_id)): Path<(Uuid, Uuid, Uuid)>,
) -> ApiResult<Json<ApiResponse<()>>> {
    auth.require_manager()?;
    load_scoped_curriculum(&state, &auth, id).await?;

    PoolService::detach_course(&state.db, auth.user.id, id, pool_id, course_id).await?;
    Ok(ApiResponse::new(()))
}
