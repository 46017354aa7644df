use crate::entities::{
    blacklist_courses, blacklists, courses, curricula, curriculum_blacklists, departments,
};
use crate::error::{ServiceError, ServiceResult};
use crate::services::audit::AuditService;
use models::audit::{AuditAction, EntityType};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateBlacklist {
    pub name: String,
    pub department_id: Uuid,
    pub course_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBlacklist {
    pub name: Option<String>,
    pub course_ids: Option<Vec<Uuid>>,
}

pub struct BlacklistService;

impl BlacklistService {
    /// Blacklists visible to a caller; `None` = all departments (super admin)
    pub async fn list_for_departments(
        db: &DatabaseConnection,
        department_ids: Option<&[Uuid]>,
    ) -> ServiceResult<Vec<blacklists::Model>> {
        let mut condition = Condition::all();
        if let Some(ids) = department_ids {
            condition = condition.add(blacklists::Column::DepartmentId.is_in(ids.to_vec()));
        }

        Ok(blacklists::Entity::find()
            .filter(condition)
            .order_by_asc(blacklists::Column::Name)
            .all(db)
            .await?)
    }

    pub async fn get_with_courses(
        db: &DatabaseConnection,
        blacklist_id: Uuid,
    ) -> ServiceResult<Option<(blacklists::Model, Vec<courses::Model>)>> {
        let blacklist = match blacklists::Entity::find_by_id(blacklist_id).one(db).await? {
            Some(blacklist) => blacklist,
            None => return Ok(None),
        };

        let courses = blacklist_courses::Entity::find()
            .filter(blacklist_courses::Column::BlacklistId.eq(blacklist_id))
            .find_also_related(courses::Entity)
            .all(db)
            .await?
            .into_iter()
            .filter_map(|(_, course)| course)
            .collect();

        Ok(Some((blacklist, courses)))
    }

    pub async fn create(
        db: &DatabaseConnection,
        actor: Uuid,
        input: CreateBlacklist,
    ) -> ServiceResult<blacklists::Model> {
        if input.name.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                "blacklist name must not be empty".to_string(),
            ));
        }
        departments::Entity::find_by_id(input.department_id)
            .one(db)
            .await?
            .ok_or(ServiceError::not_found("department"))?;
        Self::check_courses_exist(db, &input.course_ids).await?;

        let txn = db.begin().await?;

        let blacklist = blacklists::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            department_id: Set(input.department_id),
            created_by: Set(actor),
        }
        .insert(&txn)
        .await?;

        let rows: Vec<_> = input
            .course_ids
            .iter()
            .map(|course_id| blacklist_courses::ActiveModel {
                id: Set(Uuid::new_v4()),
                blacklist_id: Set(blacklist.id),
                course_id: Set(*course_id),
            })
            .collect();
        if !rows.is_empty() {
            blacklist_courses::Entity::insert_many(rows).exec(&txn).await?;
        }

        AuditService::record(
            &txn,
            actor,
            EntityType::Blacklist,
            blacklist.id,
            AuditAction::Create,
            format!(
                "Created blacklist {} with {} courses",
                blacklist.name,
                input.course_ids.len()
            ),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(blacklist)
    }

    /// Renames and/or replaces the course set in one transaction
    pub async fn update(
        db: &DatabaseConnection,
        actor: Uuid,
        blacklist_id: Uuid,
        input: UpdateBlacklist,
    ) -> ServiceResult<blacklists::Model> {
        let before = blacklists::Entity::find_by_id(blacklist_id)
            .one(db)
            .await?
            .ok_or(ServiceError::not_found("blacklist"))?;

        if let Some(course_ids) = &input.course_ids {
            Self::check_courses_exist(db, course_ids).await?;
        }

        let txn = db.begin().await?;

        let mut active = before.clone().into_active_model();
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        let after = active.update(&txn).await?;

        if let Some(course_ids) = &input.course_ids {
            blacklist_courses::Entity::delete_many()
                .filter(blacklist_courses::Column::BlacklistId.eq(blacklist_id))
                .exec(&txn)
                .await?;

            let rows: Vec<_> = course_ids
                .iter()
                .map(|course_id| blacklist_courses::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    blacklist_id: Set(blacklist_id),
                    course_id: Set(*course_id),
                })
                .collect();
            if !rows.is_empty() {
                blacklist_courses::Entity::insert_many(rows).exec(&txn).await?;
            }
        }

        AuditService::record(
            &txn,
            actor,
            EntityType::Blacklist,
            after.id,
            AuditAction::Update,
            format!("Updated blacklist {}", after.name),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(after)
    }

    pub async fn delete(
        db: &DatabaseConnection,
        actor: Uuid,
        blacklist_id: Uuid,
    ) -> ServiceResult<()> {
        let blacklist = blacklists::Entity::find_by_id(blacklist_id)
            .one(db)
            .await?
            .ok_or(ServiceError::not_found("blacklist"))?;

        let txn = db.begin().await?;

        blacklist_courses::Entity::delete_many()
            .filter(blacklist_courses::Column::BlacklistId.eq(blacklist_id))
            .exec(&txn)
            .await?;
        curriculum_blacklists::Entity::delete_many()
            .filter(curriculum_blacklists::Column::BlacklistId.eq(blacklist_id))
            .exec(&txn)
            .await?;
        blacklists::Entity::delete_by_id(blacklist_id)
            .exec(&txn)
            .await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::Blacklist,
            blacklist.id,
            AuditAction::Delete,
            format!("Deleted blacklist {}", blacklist.name),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(())
    }

    pub async fn attach(
        db: &DatabaseConnection,
        actor: Uuid,
        curriculum_id: Uuid,
        blacklist_id: Uuid,
    ) -> ServiceResult<curriculum_blacklists::Model> {
        let curriculum = curricula::Entity::find_by_id(curriculum_id)
            .one(db)
            .await?
            .ok_or(ServiceError::not_found("curriculum"))?;
        let blacklist = blacklists::Entity::find_by_id(blacklist_id)
            .one(db)
            .await?
            .ok_or(ServiceError::not_found("blacklist"))?;

        let existing = curriculum_blacklists::Entity::find()
            .filter(curriculum_blacklists::Column::CurriculumId.eq(curriculum_id))
            .filter(curriculum_blacklists::Column::BlacklistId.eq(blacklist_id))
            .one(db)
            .await?;
        if existing.is_some() {
            return Err(ServiceError::AlreadyAttached);
        }

        let txn = db.begin().await?;

        let attachment = curriculum_blacklists::ActiveModel {
            id: Set(Uuid::new_v4()),
            curriculum_id: Set(curriculum_id),
            blacklist_id: Set(blacklist_id),
        }
        .insert(&txn)
        .await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::Blacklist,
            blacklist.id,
            AuditAction::Attach,
            format!(
                "Attached blacklist {} to curriculum {}",
                blacklist.name, curriculum.name
            ),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(attachment)
    }

    pub async fn detach(
        db: &DatabaseConnection,
        actor: Uuid,
        curriculum_id: Uuid,
        blacklist_id: Uuid,
    ) -> ServiceResult<()> {
        let attachment = curriculum_blacklists::Entity::find()
            .filter(curriculum_blacklists::Column::CurriculumId.eq(curriculum_id))
            .filter(curriculum_blacklists::Column::BlacklistId.eq(blacklist_id))
            .one(db)
            .await?
            .ok_or(ServiceError::NotAttached)?;

        let txn = db.begin().await?;

        curriculum_blacklists::Entity::delete_by_id(attachment.id)
            .exec(&txn)
            .await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::Blacklist,
            blacklist_id,
            AuditAction::Detach,
            "Detached blacklist from curriculum".to_string(),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(())
    }

    async fn check_courses_exist(
        db: &DatabaseConnection,
        course_ids: &[Uuid],
    ) -> ServiceResult<()> {
        if course_ids.is_empty() {
            return Ok(());
        }
        let found = courses::Entity::find()
            .filter(courses::Column::Id.is_in(course_ids.to_vec()))
            .count(db)
            .await?;
        if found as usize != course_ids.len() {
            return Err(ServiceError::InvalidInput(
                "one or more course ids do not exist".to_string(),
            ));
        }
        Ok(())
    }
}
