use crate::entities::audit_logs;
use crate::error::ServiceResult;
use models::audit::{AuditAction, EntityType};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

pub struct AuditService;

impl AuditService {
    /// Appends one audit row; callers inside a transaction pass the transaction
    /// so the entry commits or rolls back with the mutation it describes
    pub async fn record<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        entity_type: EntityType,
        entity_id: Uuid,
        action: AuditAction,
        description: String,
        changes: Option<serde_json::Value>,
    ) -> Result<audit_logs::Model, DbErr> {
        audit_logs::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            entity_type: Set(entity_type),
            entity_id: Set(entity_id),
            action: Set(action),
            description: Set(description),
            changes: Set(changes),
            created_at: Set(chrono::Utc::now().naive_utc()),
        }
        .insert(conn)
        .await
    }

    /// Paginated, newest-first listing with optional entity-type/user filters
    pub async fn list_paginated(
        db: &DatabaseConnection,
        page: u64,
        per_page: u64,
        entity_type: Option<EntityType>,
        user_id: Option<Uuid>,
    ) -> ServiceResult<(Vec<audit_logs::Model>, u64)> {
        let mut condition = Condition::all();

        if let Some(entity_type) = entity_type {
            condition = condition.add(audit_logs::Column::EntityType.eq(entity_type));
        }

        if let Some(user_id) = user_id {
            condition = condition.add(audit_logs::Column::UserId.eq(user_id));
        }

        let query = audit_logs::Entity::find()
            .filter(condition)
            .order_by_desc(audit_logs::Column::CreatedAt);

        let total_items = query.clone().count(db).await?;
        let paginator = query.paginate(db, per_page);
        let entries = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((entries, total_items))
    }
}
