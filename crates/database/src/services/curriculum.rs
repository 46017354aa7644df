use crate::entities::{
    attached_pool_courses, blacklists, courses, credit_pools, curricula, curriculum_blacklists,
    curriculum_course_corequisites, curriculum_course_prerequisites, curriculum_courses,
    elective_rules, sub_category_pools,
};
use crate::error::{ServiceError, ServiceResult};
use crate::services::audit::AuditService;
use crate::services::elective::DEFAULT_FREE_ELECTIVE;
use crate::services::pool::{PoolDetail, PoolService};
use models::audit::{AuditAction, EntityType};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateCurriculum {
    pub name: String,
    pub year: i16,
    pub version: String,
    pub department_id: Uuid,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCurriculum {
    pub name: Option<String>,
    pub year: Option<i16>,
    pub version: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CloneCurriculum {
    pub name: String,
    pub year: i16,
    pub version: String,
}

#[derive(Debug, Clone)]
pub struct AddCurriculumCourse {
    pub course_id: Uuid,
    pub position: i32,
    pub is_required: bool,
    pub semester: Option<i16>,
    pub year_level: Option<i16>,
}

/// Everything a dashboard needs to render one curriculum
pub struct CurriculumDetail {
    pub curriculum: curricula::Model,
    pub courses: Vec<(curriculum_courses::Model, Option<courses::Model>)>,
    pub elective_rules: Vec<elective_rules::Model>,
    pub pools: Vec<PoolDetail>,
    pub blacklists: Vec<blacklists::Model>,
}

/// Row counts used by the clone endpoint response and the test suite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurriculumCounts {
    pub courses: u64,
    pub prerequisites: u64,
    pub corequisites: u64,
    pub elective_rules: u64,
    pub credit_pools: u64,
    pub blacklists: u64,
}

pub struct CurriculumService;

impl CurriculumService {
    /// Active curricula, optionally restricted to a department list
    /// (`None` = unrestricted, for super admins)
    pub async fn list(
        db: &DatabaseConnection,
        department_ids: Option<&[Uuid]>,
        department_filter: Option<Uuid>,
    ) -> ServiceResult<Vec<curricula::Model>> {
        let mut condition = Condition::all().add(curricula::Column::IsActive.eq(true));

        if let Some(ids) = department_ids {
            condition = condition.add(curricula::Column::DepartmentId.is_in(ids.to_vec()));
        }
        if let Some(department_id) = department_filter {
            condition = condition.add(curricula::Column::DepartmentId.eq(department_id));
        }

        Ok(curricula::Entity::find()
            .filter(condition)
            .order_by_asc(curricula::Column::Name)
            .all(db)
            .await?)
    }

    pub async fn get_by_id(
        db: &DatabaseConnection,
        curriculum_id: Uuid,
    ) -> ServiceResult<Option<curricula::Model>> {
        Ok(curricula::Entity::find_by_id(curriculum_id).one(db).await?)
    }

    pub async fn get_detail(
        db: &DatabaseConnection,
        curriculum_id: Uuid,
    ) -> ServiceResult<Option<CurriculumDetail>> {
        let curriculum = match curricula::Entity::find_by_id(curriculum_id).one(db).await? {
            Some(curriculum) => curriculum,
            None => return Ok(None),
        };

        let courses_fut = async {
            Ok::<_, ServiceError>(
                curriculum_courses::Entity::find()
                    .filter(curriculum_courses::Column::CurriculumId.eq(curriculum_id))
                    .order_by_asc(curriculum_courses::Column::Position)
                    .find_also_related(courses::Entity)
                    .all(db)
                    .await?,
            )
        };
        let rules_fut = async {
            Ok::<_, ServiceError>(
                elective_rules::Entity::find()
                    .filter(elective_rules::Column::CurriculumId.eq(curriculum_id))
                    .order_by_asc(elective_rules::Column::Category)
                    .all(db)
                    .await?,
            )
        };
        let blacklists_fut = async {
            let attachments = curriculum_blacklists::Entity::find()
                .filter(curriculum_blacklists::Column::CurriculumId.eq(curriculum_id))
                .all(db)
                .await?;
            let blacklist_ids: Vec<Uuid> =
                attachments.into_iter().map(|a| a.blacklist_id).collect();
            if blacklist_ids.is_empty() {
                return Ok::<_, ServiceError>(vec![]);
            }
            Ok(blacklists::Entity::find()
                .filter(blacklists::Column::Id.is_in(blacklist_ids))
                .all(db)
                .await?)
        };

        let (courses, elective_rules, pools, blacklists) = futures::try_join!(
            courses_fut,
            rules_fut,
            PoolService::list_for_curriculum(db, curriculum_id),
            blacklists_fut,
        )?;

        Ok(Some(CurriculumDetail {
            curriculum,
            courses,
            elective_rules,
            pools,
            blacklists,
        }))
    }

    pub async fn create(
        db: &DatabaseConnection,
        actor: Uuid,
        input: CreateCurriculum,
    ) -> ServiceResult<curricula::Model> {
        if input.name.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                "curriculum name must not be empty".to_string(),
            ));
        }

        Self::ensure_unique(
            db,
            input.department_id,
            &input.name,
            input.year,
            &input.version,
        )
        .await?;

        let txn = db.begin().await?;

        let curriculum = curricula::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            year: Set(input.year),
            version: Set(input.version),
            free_elective_name: Set(DEFAULT_FREE_ELECTIVE.to_string()),
            department_id: Set(input.department_id),
            created_by: Set(actor),
            is_active: Set(true),
        }
        .insert(&txn)
        .await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::Curriculum,
            curriculum.id,
            AuditAction::Create,
            format!("Created curriculum {}", curriculum.name),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(curriculum)
    }

    pub async fn update(
        db: &DatabaseConnection,
        actor: Uuid,
        curriculum_id: Uuid,
        input: UpdateCurriculum,
    ) -> ServiceResult<curricula::Model> {
        let before = curricula::Entity::find_by_id(curriculum_id)
            .one(db)
            .await?
            .ok_or(ServiceError::not_found("curriculum"))?;

        let name = input.name.clone().unwrap_or_else(|| before.name.clone());
        let year = input.year.unwrap_or(before.year);
        let version = input
            .version
            .clone()
            .unwrap_or_else(|| before.version.clone());

        // The identity tuple changed; re-check uniqueness
        if name != before.name || year != before.year || version != before.version {
            Self::ensure_unique(db, before.department_id, &name, year, &version).await?;
        }

        let mut active = before.clone().into_active_model();
        active.name = Set(name);
        active.year = Set(year);
        active.version = Set(version);

        let txn = db.begin().await?;
        let after = active.update(&txn).await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::Curriculum,
            after.id,
            AuditAction::Update,
            format!("Updated curriculum {}", after.name),
            Some(serde_json::json!({ "before": before, "after": after })),
        )
        .await?;

        txn.commit().await?;
        Ok(after)
    }

    pub async fn deactivate(
        db: &DatabaseConnection,
        actor: Uuid,
        curriculum_id: Uuid,
    ) -> ServiceResult<()> {
        let curriculum = curricula::Entity::find_by_id(curriculum_id)
            .one(db)
            .await?
            .ok_or(ServiceError::not_found("curriculum"))?;

        let txn = db.begin().await?;

        let mut active = curriculum.clone().into_active_model();
        active.is_active = Set(false);
        active.update(&txn).await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::Curriculum,
            curriculum.id,
            AuditAction::Delete,
            format!("Deactivated curriculum {}", curriculum.name),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(())
    }

    pub async fn add_course(
        db: &DatabaseConnection,
        actor: Uuid,
        curriculum_id: Uuid,
        input: AddCurriculumCourse,
    ) -> ServiceResult<curriculum_courses::Model> {
        let curriculum = curricula::Entity::find_by_id(curriculum_id)
            .one(db)
            .await?
            .ok_or(ServiceError::not_found("curriculum"))?;
        let course = courses::Entity::find_by_id(input.course_id)
            .one(db)
            .await?
            .ok_or(ServiceError::not_found("course"))?;
        if !course.is_active {
            return Err(ServiceError::InvalidInput(format!(
                "course {} is deactivated",
                course.code
            )));
        }

        let existing = curriculum_courses::Entity::find()
            .filter(curriculum_courses::Column::CurriculumId.eq(curriculum_id))
            .filter(curriculum_courses::Column::CourseId.eq(input.course_id))
            .one(db)
            .await?;
        if existing.is_some() {
            return Err(ServiceError::Duplicate(format!(
                "course {} is already part of curriculum {}",
                course.code, curriculum.name
            )));
        }

        let txn = db.begin().await?;

        let row = curriculum_courses::ActiveModel {
            id: Set(Uuid::new_v4()),
            curriculum_id: Set(curriculum_id),
            course_id: Set(input.course_id),
            position: Set(input.position),
            is_required: Set(input.is_required),
            semester: Set(input.semester),
            year_level: Set(input.year_level),
        }
        .insert(&txn)
        .await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::CurriculumCourse,
            row.id,
            AuditAction::Create,
            format!("Added course {} to curriculum {}", course.code, curriculum.name),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(row)
    }

    pub async fn remove_course(
        db: &DatabaseConnection,
        actor: Uuid,
        curriculum_id: Uuid,
        curriculum_course_id: Uuid,
    ) -> ServiceResult<()> {
        let row = curriculum_courses::Entity::find_by_id(curriculum_course_id)
            .one(db)
            .await?
            .filter(|row| row.curriculum_id == curriculum_id)
            .ok_or(ServiceError::not_found("curriculum course"))?;

        let txn = db.begin().await?;

        // Drop scoped edges touching this row before the row itself
        let edge_condition = Condition::any()
            .add(
                curriculum_course_prerequisites::Column::CurriculumCourseId
                    .eq(curriculum_course_id),
            )
            .add(
                curriculum_course_prerequisites::Column::PrerequisiteCurriculumCourseId
                    .eq(curriculum_course_id),
            );
        curriculum_course_prerequisites::Entity::delete_many()
            .filter(edge_condition)
            .exec(&txn)
            .await?;

        let coreq_condition = Condition::any()
            .add(
                curriculum_course_corequisites::Column::CurriculumCourseId
                    .eq(curriculum_course_id),
            )
            .add(
                curriculum_course_corequisites::Column::CorequisiteCurriculumCourseId
                    .eq(curriculum_course_id),
            );
        curriculum_course_corequisites::Entity::delete_many()
            .filter(coreq_condition)
            .exec(&txn)
            .await?;

        curriculum_courses::Entity::delete_by_id(row.id)
            .exec(&txn)
            .await?;

        AuditService::record(
            &txn,
            actor,
            EntityType::CurriculumCourse,
            row.id,
            AuditAction::Delete,
            "Removed course from curriculum".to_string(),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(())
    }

    /// Deep copy of a curriculum: courses, scoped constraint edges, elective
    /// rules, credit pools (with sub-categories and pinned courses), and
    /// blacklist attachments, all in one transaction with one audit entry
    pub async fn clone_curriculum(
        db: &DatabaseConnection,
        actor: Uuid,
        source_id: Uuid,
        input: CloneCurriculum,
    ) -> ServiceResult<curricula::Model> {
        let source = curricula::Entity::find_by_id(source_id)
            .one(db)
            .await?
            .ok_or(ServiceError::not_found("curriculum"))?;

        Self::ensure_unique(
            db,
            source.department_id,
            &input.name,
            input.year,
            &input.version,
        )
        .await?;

        let txn = db.begin().await?;

        let cloned = curricula::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            year: Set(input.year),
            version: Set(input.version),
            free_elective_name: Set(source.free_elective_name.clone()),
            department_id: Set(source.department_id),
            created_by: Set(actor),
            is_active: Set(true),
        }
        .insert(&txn)
        .await?;

        // Curriculum courses, remembering old id -> new id for edge remapping
        let source_courses = curriculum_courses::Entity::find()
            .filter(curriculum_courses::Column::CurriculumId.eq(source_id))
            .all(&txn)
            .await?;

        let mut course_id_map: HashMap<Uuid, Uuid> = HashMap::new();
        let mut new_courses = Vec::new();
        for cc in &source_courses {
            let new_id = Uuid::new_v4();
            course_id_map.insert(cc.id, new_id);
            new_courses.push(curriculum_courses::ActiveModel {
                id: Set(new_id),
                curriculum_id: Set(cloned.id),
                course_id: Set(cc.course_id),
                position: Set(cc.position),
                is_required: Set(cc.is_required),
                semester: Set(cc.semester),
                year_level: Set(cc.year_level),
            });
        }
        if !new_courses.is_empty() {
            curriculum_courses::Entity::insert_many(new_courses)
                .exec(&txn)
                .await?;
        }

        let source_cc_ids: Vec<Uuid> = source_courses.iter().map(|cc| cc.id).collect();

        if !source_cc_ids.is_empty() {
            // Scoped prerequisite edges; both endpoints live in the source
            // curriculum by invariant, so the map lookups cannot miss
            let prerequisites = curriculum_course_prerequisites::Entity::find()
                .filter(
                    curriculum_course_prerequisites::Column::CurriculumCourseId
                        .is_in(source_cc_ids.clone()),
                )
                .all(&txn)
                .await?;
            let new_prerequisites: Vec<_> = prerequisites
                .iter()
                .filter_map(|edge| {
                    let from = course_id_map.get(&edge.curriculum_course_id)?;
                    let to = course_id_map.get(&edge.prerequisite_curriculum_course_id)?;
                    Some(curriculum_course_prerequisites::ActiveModel {
                        id: Set(Uuid::new_v4()),
                        curriculum_course_id: Set(*from),
                        prerequisite_curriculum_course_id: Set(*to),
                    })
                })
                .collect();
            if !new_prerequisites.is_empty() {
                curriculum_course_prerequisites::Entity::insert_many(new_prerequisites)
                    .exec(&txn)
                    .await?;
            }

            let corequisites = curriculum_course_corequisites::Entity::find()
                .filter(
                    curriculum_course_corequisites::Column::CurriculumCourseId
                        .is_in(source_cc_ids),
                )
                .all(&txn)
                .await?;
            let new_corequisites: Vec<_> = corequisites
                .iter()
                .filter_map(|edge| {
                    let from = course_id_map.get(&edge.curriculum_course_id)?;
                    let to = course_id_map.get(&edge.corequisite_curriculum_course_id)?;
                    Some(curriculum_course_corequisites::ActiveModel {
                        id: Set(Uuid::new_v4()),
                        curriculum_course_id: Set(*from),
                        corequisite_curriculum_course_id: Set(*to),
                    })
                })
                .collect();
            if !new_corequisites.is_empty() {
                curriculum_course_corequisites::Entity::insert_many(new_corequisites)
                    .exec(&txn)
                    .await?;
            }
        }

        // Elective rules
        let rules = elective_rules::Entity::find()
            .filter(elective_rules::Column::CurriculumId.eq(source_id))
            .all(&txn)
            .await?;
        let new_rules: Vec<_> = rules
            .iter()
            .map(|rule| elective_rules::ActiveModel {
                id: Set(Uuid::new_v4()),
                curriculum_id: Set(cloned.id),
                category: Set(rule.category.clone()),
                required_credits: Set(rule.required_credits),
            })
            .collect();
        if !new_rules.is_empty() {
            elective_rules::Entity::insert_many(new_rules)
                .exec(&txn)
                .await?;
        }

        // Credit pools with their sub-categories and pinned courses
        let pools = credit_pools::Entity::find()
            .filter(credit_pools::Column::CurriculumId.eq(source_id))
            .all(&txn)
            .await?;
        let mut pool_id_map: HashMap<Uuid, Uuid> = HashMap::new();
        let mut new_pools = Vec::new();
        for pool in &pools {
            let new_id = Uuid::new_v4();
            pool_id_map.insert(pool.id, new_id);
            new_pools.push(credit_pools::ActiveModel {
                id: Set(new_id),
                curriculum_id: Set(cloned.id),
                name: Set(pool.name.clone()),
                min_credits: Set(pool.min_credits),
                max_credits: Set(pool.max_credits),
            });
        }
        if !new_pools.is_empty() {
            credit_pools::Entity::insert_many(new_pools)
                .exec(&txn)
                .await?;

            let pool_ids: Vec<Uuid> = pools.iter().map(|p| p.id).collect();

            let sub_categories = sub_category_pools::Entity::find()
                .filter(sub_category_pools::Column::CreditPoolId.is_in(pool_ids.clone()))
                .all(&txn)
                .await?;
            let new_sub_categories: Vec<_> = sub_categories
                .iter()
                .filter_map(|sub| {
                    let pool_id = pool_id_map.get(&sub.credit_pool_id)?;
                    Some(sub_category_pools::ActiveModel {
                        id: Set(Uuid::new_v4()),
                        credit_pool_id: Set(*pool_id),
                        name: Set(sub.name.clone()),
                        course_category: Set(sub.course_category.clone()),
                        required_credits: Set(sub.required_credits),
                    })
                })
                .collect();
            if !new_sub_categories.is_empty() {
                sub_category_pools::Entity::insert_many(new_sub_categories)
                    .exec(&txn)
                    .await?;
            }

            let attached = attached_pool_courses::Entity::find()
                .filter(attached_pool_courses::Column::CreditPoolId.is_in(pool_ids))
                .all(&txn)
                .await?;
            let new_attached: Vec<_> = attached
                .iter()
                .filter_map(|row| {
                    let pool_id = pool_id_map.get(&row.credit_pool_id)?;
                    Some(attached_pool_courses::ActiveModel {
                        id: Set(Uuid::new_v4()),
                        credit_pool_id: Set(*pool_id),
                        course_id: Set(row.course_id),
                    })
                })
                .collect();
            if !new_attached.is_empty() {
                attached_pool_courses::Entity::insert_many(new_attached)
                    .exec(&txn)
                    .await?;
            }
        }

        // Blacklist attachments
        let attachments = curriculum_blacklists::Entity::find()
            .filter(curriculum_blacklists::Column::CurriculumId.eq(source_id))
            .all(&txn)
            .await?;
        let new_attachments: Vec<_> = attachments
            .iter()
            .map(|attachment| curriculum_blacklists::ActiveModel {
                id: Set(Uuid::new_v4()),
                curriculum_id: Set(cloned.id),
                blacklist_id: Set(attachment.blacklist_id),
            })
            .collect();
        if !new_attachments.is_empty() {
            curriculum_blacklists::Entity::insert_many(new_attachments)
                .exec(&txn)
                .await?;
        }

        AuditService::record(
            &txn,
            actor,
            EntityType::Curriculum,
            cloned.id,
            AuditAction::Clone,
            format!(
                "Cloned curriculum {} ({}/{}) into {} ({}/{})",
                source.name, source.year, source.version, cloned.name, cloned.year, cloned.version
            ),
            None,
        )
        .await?;

        txn.commit().await?;
        Ok(cloned)
    }

    pub async fn counts(
        db: &DatabaseConnection,
        curriculum_id: Uuid,
    ) -> ServiceResult<CurriculumCounts> {
        let cc_ids: Vec<Uuid> = curriculum_courses::Entity::find()
            .filter(curriculum_courses::Column::CurriculumId.eq(curriculum_id))
            .all(db)
            .await?
            .into_iter()
            .map(|cc| cc.id)
            .collect();

        let (prerequisites, corequisites) = if cc_ids.is_empty() {
            (0, 0)
        } else {
            let prerequisites = curriculum_course_prerequisites::Entity::find()
                .filter(
                    curriculum_course_prerequisites::Column::CurriculumCourseId
                        .is_in(cc_ids.clone()),
                )
                .count(db)
                .await?;
            let corequisites = curriculum_course_corequisites::Entity::find()
                .filter(
                    curriculum_course_corequisites::Column::CurriculumCourseId.is_in(cc_ids.clone()),
                )
                .count(db)
                .await?;
            (prerequisites, corequisites)
        };

        let elective_rules = elective_rules::Entity::find()
            .filter(elective_rules::Column::CurriculumId.eq(curriculum_id))
            .count(db)
            .await?;
        let credit_pools = credit_pools::Entity::find()
            .filter(credit_pools::Column::CurriculumId.eq(curriculum_id))
            .count(db)
            .await?;
        let blacklists = curriculum_blacklists::Entity::find()
            .filter(curriculum_blacklists::Column::CurriculumId.eq(curriculum_id))
            .count(db)
            .await?;

        Ok(CurriculumCounts {
            courses: cc_ids.len() as u64,
            prerequisites,
            corequisites,
            elective_rules,
            credit_pools,
            blacklists,
        })
    }

    async fn ensure_unique(
        db: &DatabaseConnection,
        department_id: Uuid,
        name: &str,
        year: i16,
        version: &str,
    ) -> ServiceResult<()> {
        let existing = curricula::Entity::find()
            .filter(curricula::Column::DepartmentId.eq(department_id))
            .filter(curricula::Column::Name.eq(name))
            .filter(curricula::Column::Year.eq(year))
            .filter(curricula::Column::Version.eq(version))
            .one(db)
            .await?;
        if existing.is_some() {
            return Err(ServiceError::Duplicate(format!(
                "curriculum {name} ({year}/{version}) already exists in this department"
            )));
        }
        Ok(())
    }
}
