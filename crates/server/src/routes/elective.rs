use crate::auth::AuthUser;
use crate::dtos::common::ApiResponse;
use crate::dtos::elective::{
    CreateElectiveRuleRequest, ElectiveRuleResponse, ElectiveSettingsRequest,
    SettingOutcomeResponse, UpdateElectiveRuleRequest,
};
use crate::error::ApiResult;
use crate::routes::curriculum::load_scoped_curriculum;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use database::services::elective::ElectiveService;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/curricula/{id}/elective-rules",
    params(("id" = Uuid, Path, description = "Curriculum id")),
    responses(
        (status = 200, description = "Elective rules", body = [ElectiveRuleResponse])
    ),
    tag = "Electives"
)]
pub async fn list_rules(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Vec<ElectiveRuleResponse>>>> {
    load_scoped_curriculum(&state, &auth, id).await?;

    let rules = ElectiveService::list_rules(&state.db, id).await?;
    Ok(ApiResponse::new(
        rules.into_iter().map(ElectiveRuleResponse::from).collect(),
    ))
}

#[utoipa::path(
    post,
    path = "/curricula/{id}/elective-rules",
    params(("id" = Uuid, Path, description = "Curriculum id")),
    request_body = CreateElectiveRuleRequest,
    responses(
        (status = 200, description = "Rule created", body = ElectiveRuleResponse),
        (status = 400, description = "Credits out of range"),
        (status = 409, description = "Category already has a rule")
    ),
    tag = "Electives"
)]
pub async fn create_rule(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateElectiveRuleRequest>,
) -> ApiResult<Json<ApiResponse<ElectiveRuleResponse>>> {
    auth.require_manager()?;
    load_scoped_curriculum(&state, &auth, id).await?;

    let rule = ElectiveService::create_rule(&state.db, auth.user.id, id, req.into()).await?;
    Ok(ApiResponse::new(rule.into()))
}

#[utoipa::path(
    put,
    path = "/curricula/{id}/elective-rules/{rule_id}",
    params(
        ("id" = Uuid, Path, description = "Curriculum id"),
        ("rule_id" = Uuid, Path, description = "Elective rule id")
    ),
    request_body = UpdateElectiveRuleRequest,
    responses(
        (status = 200, description = "Rule updated", body = ElectiveRuleResponse),
        (status = 404, description = "Rule not found")
    ),
    tag = "Electives"
)]
pub async fn update_rule(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, rule_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<UpdateElectiveRuleRequest>,
) -> ApiResult<Json<ApiResponse<ElectiveRuleResponse>>> {
    auth.require_manager()?;
    load_scoped_curriculum(&state, &auth, id).await?;

    let rule =
        ElectiveService::update_rule(&state.db, auth.user.id, id, rule_id, req.required_credits)
            .await?;
    Ok(ApiResponse::new(rule.into()))
}

#[utoipa::path(
    delete,
    path = "/curricula/{id}/elective-rules/{rule_id}",
    params(
        ("id" = Uuid, Path, description = "Curriculum id"),
        ("rule_id" = Uuid, Path, description = "Elective rule id")
    ),
    responses(
        (status = 200, description = "Rule deleted"),
        (status = 404, description = "Rule not found")
    ),
    tag = "Electives"
)]
pub async fn delete_rule(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, rule_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<ApiResponse<()>>> {
    auth.require_manager()?;
    load_scoped_curriculum(&state, &auth, id).await?;

    ElectiveService::delete_rule(&state.db, auth.user.id, id, rule_id).await?;
    Ok(ApiResponse::new(()))
}

/// Batch settings update; items are applied independently and each reports its
/// own outcome
#[utoipa::path(
    put,
    path = "/curricula/{id}/elective-settings",
    params(("id" = Uuid, Path, description = "Curriculum id")),
    request_body = ElectiveSettingsRequest,
    responses(
        (status = 200, description = "Per-item outcomes", body = [SettingOutcomeResponse]),
        (status = 404, description = "Curriculum not found")
    ),
    tag = "Electives"
)]
pub async fn apply_settings(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ElectiveSettingsRequest>,
) -> ApiResult<Json<ApiResponse<Vec<SettingOutcomeResponse>>>> {
    auth.require_manager()?;
    load_scoped_curriculum(&state, &auth, id).await?;

    let outcomes = ElectiveService::apply_settings(&state.db, auth.user.id, id, req.into()).await?;
    Ok(ApiResponse::new(
        outcomes
            .into_iter()
            .map(SettingOutcomeResponse::from)
            .collect(),
    ))
}
