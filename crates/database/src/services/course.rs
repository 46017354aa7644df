use crate::entities::{courses, curriculum_courses};
use crate::error::{ServiceError, ServiceResult};
use crate::services::audit::AuditService;
use models::audit::{AuditAction, EntityType};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use serde_json::json;
use uuid::Uuid;

/// Upper bound for a single course's credit value
const MAX_COURSE_CREDITS: i16 = 30;

#[derive(Debug, Clone)]
pub struct CreateCourse {
    pub code: String,
    pub name: String,
    pub credits: i16,
    pub credit_hours: String,
    pub description: Option<String>,
    pub category: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCourse {
    pub name: Option<String>,
    pub credits: Option<i16>,
    pub credit_hours: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

pub struct CourseService;

impl CourseService {
    /// Query active courses with pagination and filtering
    pub async fn get_courses_paginated(
        db: &DatabaseConnection,
        page: u64,
        per_page: u64,
        search: Option<String>,
        category: Option<String>,
        credits: Option<i16>,
    ) -> ServiceResult<(Vec<courses::Model>, u64)> {
        let mut condition = Condition::all().add(courses::Column::IsActive.eq(true));

        if let Some(search) = search
            && !search.is_empty()
        {
            let search_condition = Condition::any()
                .add(courses::Column::Code.like(format!("%{search}%")))
                .add(courses::Column::Name.like(format!("%{search}%")));
            condition = condition.add(search_condition);
        }

        if let Some(category) = category
            && !category.is_empty()
        {
            condition = condition.add(courses::Column::Category.eq(category));
        }

        if let Some(credits) = credits {
            condition = condition.add(courses::Column::Credits.eq(credits));
        }

        let query = courses::Entity::find()
            .filter(condition)
            .order_by_asc(courses::Column::Code);

        let total_items = query.clone().count(db).await?;
        let paginator = query.paginate(db, per_page);
        let courses = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((courses, total_items))
    }

    pub async fn get_course_by_id(
        db: &DatabaseConnection,
        course_id: Uuid,
    ) -> ServiceResult<Option<courses::Model>> {
        Ok(courses::Entity::find_by_id(course_id).one(db).await?)
    }

    pub async fn create_course(
        db: &DatabaseConnection,
        actor: Uuid,
        input: CreateCourse,
    ) -> ServiceResult<courses::Model> {
        if input.code.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                "course code must not be empty".to_string(),
            ));
        }
        if !(1..=MAX_COURSE_CREDITS).contains(&input.credits) {
            return Err(ServiceError::InvalidInput(format!(
                "credits must be between 1 and {MAX_COURSE_CREDITS}"
            )));
        }

        let existing = courses::Entity::find()
            .filter(courses::Column::Code.eq(input.code.clone()))
            .one(db)
            .await?;
        if existing.is_some() {
            return Err(ServiceError::DuplicateCourse(input.code));
        }

        let txn = db.begin().await?;

        let course = courses::ActiveModel {
            id: Set(Uuid::new_v4()),
            code: Set(input.code),
            name: Set(input.name),
            credits: Set(input.credits),
            credit_hours: Set(input.credit_hours),
            description: Set(input.description),
            category: Set(input.category),
            requires_permission: Set(false),
            summer_only: Set(false),
            requires_senior_standing: Set(false),
            min_credit_threshold: Set(None),
            is_active: Set(true),
        }
        .insert(&txn)
        .await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::Course,
            course.id,
            AuditAction::Create,
            format!("Created course {}", course.code),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(course)
    }

    pub async fn update_course(
        db: &DatabaseConnection,
        actor: Uuid,
        course_id: Uuid,
        input: UpdateCourse,
    ) -> ServiceResult<courses::Model> {
        let before = courses::Entity::find_by_id(course_id)
            .one(db)
            .await?
            .ok_or(ServiceError::not_found("course"))?;

        if let Some(credits) = input.credits
            && !(1..=MAX_COURSE_CREDITS).contains(&credits)
        {
            return Err(ServiceError::InvalidInput(format!(
                "credits must be between 1 and {MAX_COURSE_CREDITS}"
            )));
        }

        let mut active = before.clone().into_active_model();
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(credits) = input.credits {
            active.credits = Set(credits);
        }
        if let Some(credit_hours) = input.credit_hours {
            active.credit_hours = Set(credit_hours);
        }
        if let Some(description) = input.description {
            active.description = Set(Some(description));
        }
        if let Some(category) = input.category {
            active.category = Set(category);
        }

        let txn = db.begin().await?;
        let after = active.update(&txn).await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::Course,
            after.id,
            AuditAction::Update,
            format!("Updated course {}", after.code),
            Some(json!({ "before": before, "after": after })),
        )
        .await?;

        txn.commit().await?;
        Ok(after)
    }

    /// Soft-deletes a course; refused while any curriculum references it
    pub async fn delete_course(
        db: &DatabaseConnection,
        actor: Uuid,
        course_id: Uuid,
    ) -> ServiceResult<()> {
        let course = courses::Entity::find_by_id(course_id)
            .one(db)
            .await?
            .ok_or(ServiceError::not_found("course"))?;

        let references = curriculum_courses::Entity::find()
            .filter(curriculum_courses::Column::CourseId.eq(course_id))
            .count(db)
            .await?;
        if references > 0 {
            return Err(ServiceError::CourseInUse(course.code));
        }

        let txn = db.begin().await?;

        let mut active = course.clone().into_active_model();
        active.is_active = Set(false);
        active.update(&txn).await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::Course,
            course.id,
            AuditAction::Delete,
            format!("Deactivated course {}", course.code),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(())
    }
}
