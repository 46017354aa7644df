use crate::entities::{
    course_corequisites, course_prerequisites, courses, curriculum_course_corequisites,
    curriculum_course_prerequisites, curriculum_courses,
};
use crate::error::{ServiceError, ServiceResult};
use crate::services::audit::AuditService;
use models::audit::{AuditAction, EntityType};
use models::flags::CourseFlags;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, TransactionTrait,
};
use serde_json::json;
use uuid::Uuid;

pub struct ConstraintService;

impl ConstraintService {
    pub async fn get_flags(
        db: &DatabaseConnection,
        course_id: Uuid,
    ) -> ServiceResult<CourseFlags> {
        let course = courses::Entity::find_by_id(course_id)
            .one(db)
            .await?
            .ok_or(ServiceError::not_found("course"))?;

        Ok(CourseFlags {
            requires_permission: course.requires_permission,
            summer_only: course.summer_only,
            requires_senior_standing: course.requires_senior_standing,
            min_credit_threshold: course.min_credit_threshold,
        })
    }

    /// Replaces a course's restriction flags after validating the
    /// senior-standing/threshold pairing
    pub async fn set_flags(
        db: &DatabaseConnection,
        actor: Uuid,
        course_id: Uuid,
        flags: CourseFlags,
    ) -> ServiceResult<courses::Model> {
        flags.validate().map_err(ServiceError::InvalidInput)?;
        let flags = flags.normalized();

        let before = courses::Entity::find_by_id(course_id)
            .one(db)
            .await?
            .ok_or(ServiceError::not_found("course"))?;

        let mut active = before.clone().into_active_model();
        active.requires_permission = Set(flags.requires_permission);
        active.summer_only = Set(flags.summer_only);
        active.requires_senior_standing = Set(flags.requires_senior_standing);
        active.min_credit_threshold = Set(flags.min_credit_threshold);

        let txn = db.begin().await?;
        let after = active.update(&txn).await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::Constraint,
            after.id,
            AuditAction::Update,
            format!("Updated restriction flags of course {}", after.code),
            Some(json!({ "before": before, "after": after })),
        )
        .await?;

        txn.commit().await?;
        Ok(after)
    }

    pub async fn list_prerequisites(
        db: &DatabaseConnection,
        course_id: Uuid,
    ) -> ServiceResult<Vec<course_prerequisites::Model>> {
        Ok(course_prerequisites::Entity::find()
            .filter(course_prerequisites::Column::CourseId.eq(course_id))
            .all(db)
            .await?)
    }

    pub async fn list_corequisites(
        db: &DatabaseConnection,
        course_id: Uuid,
    ) -> ServiceResult<Vec<course_corequisites::Model>> {
        Ok(course_corequisites::Entity::find()
            .filter(course_corequisites::Column::CourseId.eq(course_id))
            .all(db)
            .await?)
    }

    pub async fn add_prerequisite(
        db: &DatabaseConnection,
        actor: Uuid,
        course_id: Uuid,
        prerequisite_id: Uuid,
    ) -> ServiceResult<course_prerequisites::Model> {
        if course_id == prerequisite_id {
            return Err(ServiceError::InvalidInput(
                "a course cannot be its own prerequisite".to_string(),
            ));
        }

        let (course, prerequisite) =
            Self::load_course_pair(db, course_id, prerequisite_id).await?;

        let existing = course_prerequisites::Entity::find()
            .filter(course_prerequisites::Column::CourseId.eq(course_id))
            .filter(course_prerequisites::Column::PrerequisiteId.eq(prerequisite_id))
            .one(db)
            .await?;
        if existing.is_some() {
            return Err(ServiceError::Duplicate(format!(
                "{} is already a prerequisite of {}",
                prerequisite.code, course.code
            )));
        }

        let txn = db.begin().await?;

        let edge = course_prerequisites::ActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(course_id),
            prerequisite_id: Set(prerequisite_id),
        }
        .insert(&txn)
        .await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::Constraint,
            course_id,
            AuditAction::Create,
            format!("Added prerequisite {} to {}", prerequisite.code, course.code),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(edge)
    }

    pub async fn remove_prerequisite(
        db: &DatabaseConnection,
        actor: Uuid,
        course_id: Uuid,
        prerequisite_id: Uuid,
    ) -> ServiceResult<()> {
        let edge = course_prerequisites::Entity::find()
            .filter(course_prerequisites::Column::CourseId.eq(course_id))
            .filter(course_prerequisites::Column::PrerequisiteId.eq(prerequisite_id))
            .one(db)
            .await?
            .ok_or(ServiceError::not_found("prerequisite"))?;

        let txn = db.begin().await?;

        course_prerequisites::Entity::delete_by_id(edge.id)
            .exec(&txn)
            .await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::Constraint,
            course_id,
            AuditAction::Delete,
            "Removed prerequisite".to_string(),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(())
    }

    /// Inserts both directions of a corequisite pair in one transaction.
    /// Invariant: (A,B) exists iff (B,A) exists.
    pub async fn add_corequisite(
        db: &DatabaseConnection,
        actor: Uuid,
        course_id: Uuid,
        corequisite_id: Uuid,
    ) -> ServiceResult<()> {
        if course_id == corequisite_id {
            return Err(ServiceError::InvalidInput(
                "a course cannot be its own corequisite".to_string(),
            ));
        }

        let (course, corequisite) =
            Self::load_course_pair(db, course_id, corequisite_id).await?;

        let existing = course_corequisites::Entity::find()
            .filter(course_corequisites::Column::CourseId.eq(course_id))
            .filter(course_corequisites::Column::CorequisiteId.eq(corequisite_id))
            .one(db)
            .await?;
        if existing.is_some() {
            return Err(ServiceError::Duplicate(format!(
                "{} is already a corequisite of {}",
                corequisite.code, course.code
            )));
        }

        let txn = db.begin().await?;

        course_corequisites::ActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(course_id),
            corequisite_id: Set(corequisite_id),
        }
        .insert(&txn)
        .await?;
        course_corequisites::ActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(corequisite_id),
            corequisite_id: Set(course_id),
        }
        .insert(&txn)
        .await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::Constraint,
            course_id,
            AuditAction::Create,
            format!(
                "Added corequisite pair {} <-> {}",
                course.code, corequisite.code
            ),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(())
    }

    /// Deletes both directions of a corequisite pair; removing either edge
    /// removes both
    pub async fn remove_corequisite(
        db: &DatabaseConnection,
        actor: Uuid,
        course_id: Uuid,
        corequisite_id: Uuid,
    ) -> ServiceResult<()> {
        let pair_condition = Condition::any()
            .add(
                Condition::all()
                    .add(course_corequisites::Column::CourseId.eq(course_id))
                    .add(course_corequisites::Column::CorequisiteId.eq(corequisite_id)),
            )
            .add(
                Condition::all()
                    .add(course_corequisites::Column::CourseId.eq(corequisite_id))
                    .add(course_corequisites::Column::CorequisiteId.eq(course_id)),
            );

        let txn = db.begin().await?;

        let deleted = course_corequisites::Entity::delete_many()
            .filter(pair_condition)
            .exec(&txn)
            .await?;
        if deleted.rows_affected == 0 {
            return Err(ServiceError::not_found("corequisite"));
        }

        AuditService::record(
            &txn,
            actor,
            EntityType::Constraint,
            course_id,
            AuditAction::Delete,
            "Removed corequisite pair".to_string(),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(())
    }

    pub async fn add_scoped_prerequisite(
        db: &DatabaseConnection,
        actor: Uuid,
        curriculum_id: Uuid,
        curriculum_course_id: Uuid,
        prerequisite_curriculum_course_id: Uuid,
    ) -> ServiceResult<curriculum_course_prerequisites::Model> {
        Self::check_scoped_pair(
            db,
            curriculum_id,
            curriculum_course_id,
            prerequisite_curriculum_course_id,
        )
        .await?;

        let existing = curriculum_course_prerequisites::Entity::find()
            .filter(
                curriculum_course_prerequisites::Column::CurriculumCourseId
                    .eq(curriculum_course_id),
            )
            .filter(
                curriculum_course_prerequisites::Column::PrerequisiteCurriculumCourseId
                    .eq(prerequisite_curriculum_course_id),
            )
            .one(db)
            .await?;
        if existing.is_some() {
            return Err(ServiceError::Duplicate(
                "prerequisite already exists in this curriculum".to_string(),
            ));
        }

        let txn = db.begin().await?;

        let edge = curriculum_course_prerequisites::ActiveModel {
            id: Set(Uuid::new_v4()),
            curriculum_course_id: Set(curriculum_course_id),
            prerequisite_curriculum_course_id: Set(prerequisite_curriculum_course_id),
        }
        .insert(&txn)
        .await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::Constraint,
            curriculum_id,
            AuditAction::Create,
            "Added curriculum-scoped prerequisite".to_string(),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(edge)
    }

    pub async fn remove_scoped_prerequisite(
        db: &DatabaseConnection,
        actor: Uuid,
        curriculum_id: Uuid,
        curriculum_course_id: Uuid,
        prerequisite_curriculum_course_id: Uuid,
    ) -> ServiceResult<()> {
        let txn = db.begin().await?;

        let deleted = curriculum_course_prerequisites::Entity::delete_many()
            .filter(
                curriculum_course_prerequisites::Column::CurriculumCourseId
                    .eq(curriculum_course_id),
            )
            .filter(
                curriculum_course_prerequisites::Column::PrerequisiteCurriculumCourseId
                    .eq(prerequisite_curriculum_course_id),
            )
            .exec(&txn)
            .await?;
        if deleted.rows_affected == 0 {
            return Err(ServiceError::not_found("prerequisite"));
        }

        AuditService::record(
            &txn,
            actor,
            EntityType::Constraint,
            curriculum_id,
            AuditAction::Delete,
            "Removed curriculum-scoped prerequisite".to_string(),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(())
    }

    /// Curriculum-scoped corequisite pair; symmetric like the global variant
    pub async fn add_scoped_corequisite(
        db: &DatabaseConnection,
        actor: Uuid,
        curriculum_id: Uuid,
        curriculum_course_id: Uuid,
        corequisite_curriculum_course_id: Uuid,
    ) -> ServiceResult<()> {
        Self::check_scoped_pair(
            db,
            curriculum_id,
            curriculum_course_id,
            corequisite_curriculum_course_id,
        )
        .await?;

        let existing = curriculum_course_corequisites::Entity::find()
            .filter(
                curriculum_course_corequisites::Column::CurriculumCourseId
                    .eq(curriculum_course_id),
            )
            .filter(
                curriculum_course_corequisites::Column::CorequisiteCurriculumCourseId
                    .eq(corequisite_curriculum_course_id),
            )
            .one(db)
            .await?;
        if existing.is_some() {
            return Err(ServiceError::Duplicate(
                "corequisite already exists in this curriculum".to_string(),
            ));
        }

        let txn = db.begin().await?;

        curriculum_course_corequisites::ActiveModel {
            id: Set(Uuid::new_v4()),
            curriculum_course_id: Set(curriculum_course_id),
            corequisite_curriculum_course_id: Set(corequisite_curriculum_course_id),
        }
        .insert(&txn)
        .await?;
        curriculum_course_corequisites::ActiveModel {
            id: Set(Uuid::new_v4()),
            curriculum_course_id: Set(corequisite_curriculum_course_id),
            corequisite_curriculum_course_id: Set(curriculum_course_id),
        }
        .insert(&txn)
        .await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::Constraint,
            curriculum_id,
            AuditAction::Create,
            "Added curriculum-scoped corequisite pair".to_string(),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(())
    }

    pub async fn remove_scoped_corequisite(
        db: &DatabaseConnection,
        actor: Uuid,
        curriculum_id: Uuid,
        curriculum_course_id: Uuid,
        corequisite_curriculum_course_id: Uuid,
    ) -> ServiceResult<()> {
        let pair_condition = Condition::any()
            .add(
                Condition::all()
                    .add(
                        curriculum_course_corequisites::Column::CurriculumCourseId
                            .eq(curriculum_course_id),
                    )
                    .add(
                        curriculum_course_corequisites::Column::CorequisiteCurriculumCourseId
                            .eq(corequisite_curriculum_course_id),
                    ),
            )
            .add(
                Condition::all()
                    .add(
                        curriculum_course_corequisites::Column::CurriculumCourseId
                            .eq(corequisite_curriculum_course_id),
                    )
                    .add(
                        curriculum_course_corequisites::Column::CorequisiteCurriculumCourseId
                            .eq(curriculum_course_id),
                    ),
            );

        let txn = db.begin().await?;

        let deleted = curriculum_course_corequisites::Entity::delete_many()
            .filter(pair_condition)
            .exec(&txn)
            .await?;
        if deleted.rows_affected == 0 {
            return Err(ServiceError::not_found("corequisite"));
        }

        AuditService::record(
            &txn,
            actor,
            EntityType::Constraint,
            curriculum_id,
            AuditAction::Delete,
            "Removed curriculum-scoped corequisite pair".to_string(),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(())
    }

    /// Number of curriculum-scoped (prerequisite, corequisite) edges
    pub async fn scoped_constraint_counts(
        db: &DatabaseConnection,
        curriculum_id: Uuid,
    ) -> ServiceResult<(u64, u64)> {
        let cc_ids: Vec<Uuid> = curriculum_courses::Entity::find()
            .filter(curriculum_courses::Column::CurriculumId.eq(curriculum_id))
            .all(db)
            .await?
            .into_iter()
            .map(|cc| cc.id)
            .collect();

        if cc_ids.is_empty() {
            return Ok((0, 0));
        }

        let prerequisites = curriculum_course_prerequisites::Entity::find()
            .filter(
                curriculum_course_prerequisites::Column::CurriculumCourseId
                    .is_in(cc_ids.clone()),
            )
            .count(db)
            .await?;
        let corequisites = curriculum_course_corequisites::Entity::find()
            .filter(
                curriculum_course_corequisites::Column::CurriculumCourseId.is_in(cc_ids),
            )
            .count(db)
            .await?;

        Ok((prerequisites, corequisites))
    }

    async fn load_course_pair(
        db: &DatabaseConnection,
        first: Uuid,
        second: Uuid,
    ) -> ServiceResult<(courses::Model, courses::Model)> {
        let a = courses::Entity::find_by_id(first)
            .one(db)
            .await?
            .ok_or(ServiceError::not_found("course"))?;
        let b = courses::Entity::find_by_id(second)
            .one(db)
            .await?
            .ok_or(ServiceError::not_found("course"))?;
        Ok((a, b))
    }

    /// Both endpoints of a scoped edge must be distinct rows of the same
    /// curriculum; cross-curriculum edges are rejected here because the schema
    /// cannot express the restriction
    async fn check_scoped_pair(
        db: &DatabaseConnection,
        curriculum_id: Uuid,
        first: Uuid,
        second: Uuid,
    ) -> ServiceResult<()> {
        if first == second {
            return Err(ServiceError::InvalidInput(
                "a curriculum course cannot reference itself".to_string(),
            ));
        }

        let a = curriculum_courses::Entity::find_by_id(first)
            .one(db)
            .await?
            .ok_or(ServiceError::not_found("curriculum course"))?;
        let b = curriculum_courses::Entity::find_by_id(second)
            .one(db)
            .await?
            .ok_or(ServiceError::not_found("curriculum course"))?;

        if a.curriculum_id != curriculum_id || b.curriculum_id != curriculum_id {
            return Err(ServiceError::InvalidInput(
                "both courses must belong to the same curriculum".to_string(),
            ));
        }

        Ok(())
    }
}
