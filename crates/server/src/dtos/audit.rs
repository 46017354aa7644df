use chrono::NaiveDateTime;
use database::entities::audit_logs;
use models::audit::{AuditAction, EntityType};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
pub struct AuditLogResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    #[schema(value_type = String)]
    pub entity_type: EntityType,
    pub entity_id: Uuid,
    #[schema(value_type = String)]
    pub action: AuditAction,
    pub description: String,
    #[schema(value_type = Option<Object>)]
    pub changes: Option<serde_json::Value>,
    pub created_at: NaiveDateTime,
}

impl From<audit_logs::Model> for AuditLogResponse {
    fn from(entry: audit_logs::Model) -> Self {
        Self {
            id: entry.id,
            user_id: entry.user_id,
            entity_type: entry.entity_type,
            entity_id: entry.entity_id,
            action: entry.action,
            description: entry.description,
            changes: entry.changes,
            created_at: entry.created_at,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct AuditQueryParams {
    #[serde(default = "super::common::default_page")]
    pub page: u64,

    #[serde(default = "super::common::default_per_page")]
    pub per_page: u64,

    #[param(value_type = Option<String>)]
    pub entity_type: Option<EntityType>,
    pub user_id: Option<Uuid>,
}
