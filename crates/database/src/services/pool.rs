use crate::entities::{attached_pool_courses, courses, credit_pools, curricula, sub_category_pools};
use crate::error::{ServiceError, ServiceResult};
use crate::services::audit::AuditService;
use models::audit::{AuditAction, EntityType};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, TransactionTrait,
};
use serde_json::json;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreatePool {
    pub name: String,
    pub min_credits: i16,
    pub max_credits: Option<i16>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePool {
    pub name: Option<String>,
    pub min_credits: Option<i16>,
    pub max_credits: Option<Option<i16>>,
}

#[derive(Debug, Clone)]
pub struct CreateSubCategory {
    pub name: String,
    pub course_category: String,
    pub required_credits: Option<i16>,
}

/// A pool with its sub-categories and pinned courses
pub struct PoolDetail {
    pub pool: credit_pools::Model,
    pub sub_categories: Vec<sub_category_pools::Model>,
    pub courses: Vec<courses::Model>,
}

pub struct PoolService;

impl PoolService {
    pub async fn list_for_curriculum(
        db: &DatabaseConnection,
        curriculum_id: Uuid,
    ) -> ServiceResult<Vec<PoolDetail>> {
        let pools = credit_pools::Entity::find()
            .filter(credit_pools::Column::CurriculumId.eq(curriculum_id))
            .order_by_asc(credit_pools::Column::Name)
            .all(db)
            .await?;

        if pools.is_empty() {
            return Ok(vec![]);
        }

        let pool_ids: Vec<Uuid> = pools.iter().map(|p| p.id).collect();

        let sub_categories = sub_category_pools::Entity::find()
            .filter(sub_category_pools::Column::CreditPoolId.is_in(pool_ids.clone()))
            .all(db)
            .await?;

        let attached: Vec<(attached_pool_courses::Model, Option<courses::Model>)> =
            attached_pool_courses::Entity::find()
                .filter(attached_pool_courses::Column::CreditPoolId.is_in(pool_ids))
                .find_also_related(courses::Entity)
                .all(db)
                .await?;

        let mut subs_by_pool: HashMap<Uuid, Vec<sub_category_pools::Model>> = HashMap::new();
        for sub in sub_categories {
            subs_by_pool.entry(sub.credit_pool_id).or_default().push(sub);
        }

        let mut courses_by_pool: HashMap<Uuid, Vec<courses::Model>> = HashMap::new();
        for (row, course) in attached {
            if let Some(course) = course {
                courses_by_pool
                    .entry(row.credit_pool_id)
                    .or_default()
                    .push(course);
            }
        }

        let details = pools
            .into_iter()
            .map(|pool| {
                let sub_categories = subs_by_pool.remove(&pool.id).unwrap_or_default();
                let courses = courses_by_pool.remove(&pool.id).unwrap_or_default();
                PoolDetail {
                    pool,
                    sub_categories,
                    courses,
                }
            })
            .collect();

        Ok(details)
    }

    pub async fn create_pool(
        db: &DatabaseConnection,
        actor: Uuid,
        curriculum_id: Uuid,
        input: CreatePool,
    ) -> ServiceResult<credit_pools::Model> {
        curricula::Entity::find_by_id(curriculum_id)
            .one(db)
            .await?
            .ok_or(ServiceError::not_found("curriculum"))?;

        Self::validate_range(input.min_credits, input.max_credits)?;
        if input.name.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                "pool name must not be empty".to_string(),
            ));
        }

        let txn = db.begin().await?;

        let pool = credit_pools::ActiveModel {
            id: Set(Uuid::new_v4()),
            curriculum_id: Set(curriculum_id),
            name: Set(input.name),
            min_credits: Set(input.min_credits),
            max_credits: Set(input.max_credits),
        }
        .insert(&txn)
        .await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::CreditPool,
            pool.id,
            AuditAction::Create,
            format!("Created credit pool {}", pool.name),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(pool)
    }

    pub async fn update_pool(
        db: &DatabaseConnection,
        actor: Uuid,
        curriculum_id: Uuid,
        pool_id: Uuid,
        input: UpdatePool,
    ) -> ServiceResult<credit_pools::Model> {
        let before = Self::find_pool(db, curriculum_id, pool_id).await?;

        let min_credits = input.min_credits.unwrap_or(before.min_credits);
        let max_credits = input.max_credits.unwrap_or(before.max_credits);
        Self::validate_range(min_credits, max_credits)?;

        let mut active = before.clone().into_active_model();
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        active.min_credits = Set(min_credits);
        active.max_credits = Set(max_credits);

        let txn = db.begin().await?;
        let after = active.update(&txn).await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::CreditPool,
            after.id,
            AuditAction::Update,
            format!("Updated credit pool {}", after.name),
            Some(json!({ "before": before, "after": after })),
        )
        .await?;

        txn.commit().await?;
        Ok(after)
    }

    pub async fn delete_pool(
        db: &DatabaseConnection,
        actor: Uuid,
        curriculum_id: Uuid,
        pool_id: Uuid,
    ) -> ServiceResult<()> {
        let pool = Self::find_pool(db, curriculum_id, pool_id).await?;

        let txn = db.begin().await?;

        // Children first; not every backend runs with cascading FKs enabled
        sub_category_pools::Entity::delete_many()
            .filter(sub_category_pools::Column::CreditPoolId.eq(pool.id))
            .exec(&txn)
            .await?;
        attached_pool_courses::Entity::delete_many()
            .filter(attached_pool_courses::Column::CreditPoolId.eq(pool.id))
            .exec(&txn)
            .await?;
        credit_pools::Entity::delete_by_id(pool.id).exec(&txn).await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::CreditPool,
            pool.id,
            AuditAction::Delete,
            format!("Deleted credit pool {}", pool.name),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(())
    }

    pub async fn add_sub_category(
        db: &DatabaseConnection,
        actor: Uuid,
        curriculum_id: Uuid,
        pool_id: Uuid,
        input: CreateSubCategory,
    ) -> ServiceResult<sub_category_pools::Model> {
        let pool = Self::find_pool(db, curriculum_id, pool_id).await?;

        if input.name.trim().is_empty() || input.course_category.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                "sub-category name and course category must not be empty".to_string(),
            ));
        }
        if let Some(credits) = input.required_credits
            && credits < 0
        {
            return Err(ServiceError::InvalidInput(
                "required credits must not be negative".to_string(),
            ));
        }

        let txn = db.begin().await?;

        let sub = sub_category_pools::ActiveModel {
            id: Set(Uuid::new_v4()),
            credit_pool_id: Set(pool.id),
            name: Set(input.name),
            course_category: Set(input.course_category),
            required_credits: Set(input.required_credits),
        }
        .insert(&txn)
        .await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::CreditPool,
            pool.id,
            AuditAction::Update,
            format!("Added sub-category {} to pool {}", sub.name, pool.name),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(sub)
    }

    pub async fn remove_sub_category(
        db: &DatabaseConnection,
        actor: Uuid,
        curriculum_id: Uuid,
        pool_id: Uuid,
        sub_category_id: Uuid,
    ) -> ServiceResult<()> {
        let pool = Self::find_pool(db, curriculum_id, pool_id).await?;

        let sub = sub_category_pools::Entity::find_by_id(sub_category_id)
            .one(db)
            .await?
            .filter(|sub| sub.credit_pool_id == pool.id)
            .ok_or(ServiceError::not_found("sub-category"))?;

        let txn = db.begin().await?;

        sub_category_pools::Entity::delete_by_id(sub.id)
            .exec(&txn)
            .await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::CreditPool,
            pool.id,
            AuditAction::Update,
            format!("Removed sub-category {} from pool {}", sub.name, pool.name),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(())
    }

    pub async fn attach_course(
        db: &DatabaseConnection,
        actor: Uuid,
        curriculum_id: Uuid,
        pool_id: Uuid,
        course_id: Uuid,
    ) -> ServiceResult<attached_pool_courses::Model> {
        let pool = Self::find_pool(db, curriculum_id, pool_id).await?;
        let course = courses::Entity::find_by_id(course_id)
            .one(db)
            .await?
            .ok_or(ServiceError::not_found("course"))?;

        let existing = attached_pool_courses::Entity::find()
            .filter(attached_pool_courses::Column::CreditPoolId.eq(pool.id))
            .filter(attached_pool_courses::Column::CourseId.eq(course_id))
            .one(db)
            .await?;
        if existing.is_some() {
            return Err(ServiceError::Duplicate(format!(
                "course {} is already attached to pool {}",
                course.code, pool.name
            )));
        }

        let txn = db.begin().await?;

        let row = attached_pool_courses::ActiveModel {
            id: Set(Uuid::new_v4()),
            credit_pool_id: Set(pool.id),
            course_id: Set(course_id),
        }
        .insert(&txn)
        .await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::CreditPool,
            pool.id,
            AuditAction::Attach,
            format!("Attached course {} to pool {}", course.code, pool.name),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(row)
    }

    pub async fn detach_course(
        db: &DatabaseConnection,
        actor: Uuid,
        curriculum_id: Uuid,
        pool_id: Uuid,
        course_id: Uuid,
    ) -> ServiceResult<()> {
        let pool = Self::find_pool(db, curriculum_id, pool_id).await?;

        let row = attached_pool_courses::Entity::find()
            .filter(attached_pool_courses::Column::CreditPoolId.eq(pool.id))
            .filter(attached_pool_courses::Column::CourseId.eq(course_id))
            .one(db)
            .await?
            .ok_or(ServiceError::not_found("attached course"))?;

        let txn = db.begin().await?;

        attached_pool_courses::Entity::delete_by_id(row.id)
            .exec(&txn)
            .await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::CreditPool,
            pool.id,
            AuditAction::Detach,
            format!("Detached course from pool {}", pool.name),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(())
    }

    async fn find_pool(
        db: &DatabaseConnection,
        curriculum_id: Uuid,
        pool_id: Uuid,
    ) -> ServiceResult<credit_pools::Model> {
        credit_pools::Entity::find_by_id(pool_id)
            .one(db)
            .await?
            .filter(|pool| pool.curriculum_id == curriculum_id)
            .ok_or(ServiceError::not_found("credit pool"))
    }

    fn validate_range(min_credits: i16, max_credits: Option<i16>) -> ServiceResult<()> {
        if min_credits < 0 {
            return Err(ServiceError::InvalidInput(
                "min credits must not be negative".to_string(),
            ));
        }
        if let Some(max) = max_credits
            && max < min_credits
        {
            return Err(ServiceError::InvalidInput(
                "max credits must not be below min credits".to_string(),
            ));
        }
        Ok(())
    }
}
