use crate::entities::{curricula, curriculum_courses, elective_rules};
use crate::error::{ServiceError, ServiceResult};
use crate::services::audit::AuditService;
use models::audit::{AuditAction, EntityType};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, TransactionTrait,
};
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

/// Upper bound for an elective rule's required-credit target
const MAX_RULE_CREDITS: i16 = 60;

/// Category a curriculum's free-elective rule starts out under
pub const DEFAULT_FREE_ELECTIVE: &str = "Free Elective";

#[derive(Debug, Clone)]
pub struct CreateElectiveRule {
    pub category: String,
    pub required_credits: i16,
}

#[derive(Debug, Clone)]
pub struct FreeElectiveUpdate {
    pub name: String,
    pub required_credits: i16,
}

#[derive(Debug, Clone)]
pub struct CourseRequiredSetting {
    pub curriculum_course_id: Uuid,
    pub is_required: bool,
}

/// Batch payload for the settings endpoint; every item is validated and
/// audited on its own
#[derive(Debug, Clone, Default)]
pub struct ElectiveSettings {
    pub free_elective: Option<FreeElectiveUpdate>,
    pub course_settings: Vec<CourseRequiredSetting>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingOutcome {
    pub target: String,
    pub applied: bool,
    pub error: Option<String>,
}

pub struct ElectiveService;

impl ElectiveService {
    pub async fn list_rules(
        db: &DatabaseConnection,
        curriculum_id: Uuid,
    ) -> ServiceResult<Vec<elective_rules::Model>> {
        Ok(elective_rules::Entity::find()
            .filter(elective_rules::Column::CurriculumId.eq(curriculum_id))
            .order_by_asc(elective_rules::Column::Category)
            .all(db)
            .await?)
    }

    pub async fn create_rule(
        db: &DatabaseConnection,
        actor: Uuid,
        curriculum_id: Uuid,
        input: CreateElectiveRule,
    ) -> ServiceResult<elective_rules::Model> {
        curricula::Entity::find_by_id(curriculum_id)
            .one(db)
            .await?
            .ok_or(ServiceError::not_found("curriculum"))?;

        Self::validate_credits(input.required_credits)?;
        if input.category.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                "category must not be empty".to_string(),
            ));
        }

        let existing = elective_rules::Entity::find()
            .filter(elective_rules::Column::CurriculumId.eq(curriculum_id))
            .filter(elective_rules::Column::Category.eq(input.category.clone()))
            .one(db)
            .await?;
        if existing.is_some() {
            return Err(ServiceError::Duplicate(format!(
                "elective rule for category {} already exists",
                input.category
            )));
        }

        let txn = db.begin().await?;

        let rule = elective_rules::ActiveModel {
            id: Set(Uuid::new_v4()),
            curriculum_id: Set(curriculum_id),
            category: Set(input.category),
            required_credits: Set(input.required_credits),
        }
        .insert(&txn)
        .await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::ElectiveRule,
            rule.id,
            AuditAction::Create,
            format!(
                "Created elective rule {} ({} credits)",
                rule.category, rule.required_credits
            ),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(rule)
    }

    pub async fn update_rule(
        db: &DatabaseConnection,
        actor: Uuid,
        curriculum_id: Uuid,
        rule_id: Uuid,
        required_credits: i16,
    ) -> ServiceResult<elective_rules::Model> {
        Self::validate_credits(required_credits)?;

        let before = elective_rules::Entity::find_by_id(rule_id)
            .one(db)
            .await?
            .filter(|rule| rule.curriculum_id == curriculum_id)
            .ok_or(ServiceError::not_found("elective rule"))?;

        let mut active = before.clone().into_active_model();
        active.required_credits = Set(required_credits);

        let txn = db.begin().await?;
        let after = active.update(&txn).await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::ElectiveRule,
            after.id,
            AuditAction::Update,
            format!("Updated elective rule {}", after.category),
            Some(json!({ "before": before, "after": after })),
        )
        .await?;

        txn.commit().await?;
        Ok(after)
    }

    pub async fn delete_rule(
        db: &DatabaseConnection,
        actor: Uuid,
        curriculum_id: Uuid,
        rule_id: Uuid,
    ) -> ServiceResult<()> {
        let rule = elective_rules::Entity::find_by_id(rule_id)
            .one(db)
            .await?
            .filter(|rule| rule.curriculum_id == curriculum_id)
            .ok_or(ServiceError::not_found("elective rule"))?;

        let txn = db.begin().await?;

        elective_rules::Entity::delete_by_id(rule.id)
            .exec(&txn)
            .await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::ElectiveRule,
            rule.id,
            AuditAction::Delete,
            format!("Deleted elective rule {}", rule.category),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(())
    }

    /// Applies the batch settings update. Items are independent: a failing
    /// item is reported in its outcome and does not roll back the others.
    pub async fn apply_settings(
        db: &DatabaseConnection,
        actor: Uuid,
        curriculum_id: Uuid,
        settings: ElectiveSettings,
    ) -> ServiceResult<Vec<SettingOutcome>> {
        curricula::Entity::find_by_id(curriculum_id)
            .one(db)
            .await?
            .ok_or(ServiceError::not_found("curriculum"))?;

        let mut outcomes = Vec::new();

        if let Some(free) = settings.free_elective {
            let outcome = Self::apply_free_elective(db, actor, curriculum_id, &free).await;
            outcomes.push(match outcome {
                Ok(()) => SettingOutcome {
                    target: format!("free elective {}", free.name),
                    applied: true,
                    error: None,
                },
                Err(err) => SettingOutcome {
                    target: format!("free elective {}", free.name),
                    applied: false,
                    error: Some(err.to_string()),
                },
            });
        }

        for setting in settings.course_settings {
            let outcome =
                Self::apply_course_setting(db, actor, curriculum_id, &setting).await;
            outcomes.push(match outcome {
                Ok(()) => SettingOutcome {
                    target: setting.curriculum_course_id.to_string(),
                    applied: true,
                    error: None,
                },
                Err(err) => SettingOutcome {
                    target: setting.curriculum_course_id.to_string(),
                    applied: false,
                    error: Some(err.to_string()),
                },
            });
        }

        Ok(outcomes)
    }

    /// Renames and re-targets the curriculum's free-elective rule. The rule is
    /// the one filed under the curriculum's current free-elective name; the
    /// name moves with it so a later rename still finds it.
    async fn apply_free_elective(
        db: &DatabaseConnection,
        actor: Uuid,
        curriculum_id: Uuid,
        free: &FreeElectiveUpdate,
    ) -> ServiceResult<()> {
        Self::validate_credits(free.required_credits)?;
        if free.name.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                "free-elective name must not be empty".to_string(),
            ));
        }

        let curriculum = curricula::Entity::find_by_id(curriculum_id)
            .one(db)
            .await?
            .ok_or(ServiceError::not_found("curriculum"))?;

        let current = elective_rules::Entity::find()
            .filter(elective_rules::Column::CurriculumId.eq(curriculum_id))
            .filter(elective_rules::Column::Category.eq(curriculum.free_elective_name.clone()))
            .one(db)
            .await?;

        let renaming = free.name != curriculum.free_elective_name;
        let under_new_name = if renaming {
            elective_rules::Entity::find()
                .filter(elective_rules::Column::CurriculumId.eq(curriculum_id))
                .filter(elective_rules::Column::Category.eq(free.name.clone()))
                .one(db)
                .await?
        } else {
            None
        };

        // Renaming onto another category would violate (curriculum, category)
        // uniqueness
        if current.is_some() && under_new_name.is_some() {
            return Err(ServiceError::Duplicate(format!(
                "elective rule for category {} already exists",
                free.name
            )));
        }

        let txn = db.begin().await?;

        let rule = match current.or(under_new_name) {
            Some(rule) => {
                let mut active = rule.into_active_model();
                active.category = Set(free.name.clone());
                active.required_credits = Set(free.required_credits);
                active.update(&txn).await?
            }
            None => {
                elective_rules::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    curriculum_id: Set(curriculum_id),
                    category: Set(free.name.clone()),
                    required_credits: Set(free.required_credits),
                }
                .insert(&txn)
                .await?
            }
        };

        if renaming {
            let mut active = curriculum.into_active_model();
            active.free_elective_name = Set(free.name.clone());
            active.update(&txn).await?;
        }

        AuditService::record(
            &txn,
            actor,
            EntityType::ElectiveRule,
            rule.id,
            AuditAction::Update,
            format!(
                "Set free-elective rule {} to {} credits",
                rule.category, rule.required_credits
            ),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(())
    }

    async fn apply_course_setting(
        db: &DatabaseConnection,
        actor: Uuid,
        curriculum_id: Uuid,
        setting: &CourseRequiredSetting,
    ) -> ServiceResult<()> {
        let before = curriculum_courses::Entity::find_by_id(setting.curriculum_course_id)
            .one(db)
            .await?
            .filter(|row| row.curriculum_id == curriculum_id)
            .ok_or(ServiceError::not_found("curriculum course"))?;

        let mut active = before.clone().into_active_model();
        active.is_required = Set(setting.is_required);

        let txn = db.begin().await?;
        let after = active.update(&txn).await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::CurriculumCourse,
            after.id,
            AuditAction::Update,
            format!(
                "Set required flag to {} for curriculum course",
                after.is_required
            ),
            Some(json!({ "before": before, "after": after })),
        )
        .await?;

        txn.commit().await?;
        Ok(())
    }

    fn validate_credits(credits: i16) -> ServiceResult<()> {
        if !(0..=MAX_RULE_CREDITS).contains(&credits) {
            return Err(ServiceError::InvalidInput(format!(
                "required credits must be between 0 and {MAX_RULE_CREDITS}"
            )));
        }
        Ok(())
    }
}
