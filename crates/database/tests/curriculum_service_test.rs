mod common;

use database::entities::audit_logs;
use database::error::ServiceError;
use database::services::audit::AuditService;
use database::services::blacklist::{BlacklistService, CreateBlacklist};
use database::services::constraint::ConstraintService;
use database::services::curriculum::{
    AddCurriculumCourse, CloneCurriculum, CreateCurriculum, CurriculumService,
};
use database::services::elective::{CreateElectiveRule, ElectiveService};
use database::services::pool::{CreatePool, PoolService};
use models::audit::{AuditAction, EntityType};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

#[tokio::test]
async fn duplicate_identity_tuple_is_rejected() {
    let fixture = common::setup().await;
    common::create_curriculum(&fixture, "BSCS2026", 2026).await;

    let result = CurriculumService::create(
        &fixture.db,
        fixture.chair_id,
        CreateCurriculum {
            name: "BSCS2026".to_string(),
            year: 2026,
            version: "1.0".to_string(),
            department_id: fixture.department_id,
        },
    )
    .await;

    assert!(matches!(result, Err(ServiceError::Duplicate(_))));
}

#[tokio::test]
async fn adding_same_course_twice_is_rejected() {
    let fixture = common::setup().await;
    let course = common::create_course(&fixture, "CS101", 3).await;
    let curriculum = common::create_curriculum(&fixture, "BSCS2026", 2026).await;

    let add = AddCurriculumCourse {
        course_id: course.id,
        position: 1,
        is_required: true,
        semester: Some(1),
        year_level: Some(1),
    };

    CurriculumService::add_course(&fixture.db, fixture.chair_id, curriculum.id, add.clone())
        .await
        .unwrap();
    let result =
        CurriculumService::add_course(&fixture.db, fixture.chair_id, curriculum.id, add).await;
    assert!(matches!(result, Err(ServiceError::Duplicate(_))));
}

#[tokio::test]
async fn clone_copies_courses_constraints_rules_and_attachments() {
    let fixture = common::setup().await;
    let curriculum = common::create_curriculum(&fixture, "BSCS2022", 2022).await;

    // 12 courses, first two with a scoped prerequisite and corequisite pair
    let mut cc_ids = Vec::new();
    for i in 0..12 {
        let course = common::create_course(&fixture, &format!("CS{}", 100 + i), 3).await;
        let cc = CurriculumService::add_course(
            &fixture.db,
            fixture.chair_id,
            curriculum.id,
            AddCurriculumCourse {
                course_id: course.id,
                position: i + 1,
                is_required: true,
                semester: Some(1),
                year_level: Some(1),
            },
        )
        .await
        .unwrap();
        cc_ids.push(cc.id);
    }

    ConstraintService::add_scoped_prerequisite(
        &fixture.db,
        fixture.chair_id,
        curriculum.id,
        cc_ids[1],
        cc_ids[0],
    )
    .await
    .unwrap();
    ConstraintService::add_scoped_corequisite(
        &fixture.db,
        fixture.chair_id,
        curriculum.id,
        cc_ids[2],
        cc_ids[3],
    )
    .await
    .unwrap();

    ElectiveService::create_rule(
        &fixture.db,
        fixture.chair_id,
        curriculum.id,
        CreateElectiveRule {
            category: "Free Elective".to_string(),
            required_credits: 6,
        },
    )
    .await
    .unwrap();

    PoolService::create_pool(
        &fixture.db,
        fixture.chair_id,
        curriculum.id,
        CreatePool {
            name: "General Education".to_string(),
            min_credits: 12,
            max_credits: Some(18),
        },
    )
    .await
    .unwrap();

    let blacklist = BlacklistService::create(
        &fixture.db,
        fixture.chair_id,
        CreateBlacklist {
            name: "Retired Courses".to_string(),
            department_id: fixture.department_id,
            course_ids: vec![],
        },
    )
    .await
    .unwrap();
    BlacklistService::attach(&fixture.db, fixture.chair_id, curriculum.id, blacklist.id)
        .await
        .unwrap();

    let audit_before = audit_logs::Entity::find().all(&fixture.db).await.unwrap().len();

    let cloned = CurriculumService::clone_curriculum(
        &fixture.db,
        fixture.chair_id,
        curriculum.id,
        CloneCurriculum {
            name: "BSCS2026".to_string(),
            year: 2026,
            version: "1.0".to_string(),
        },
    )
    .await
    .unwrap();

    let source_counts = CurriculumService::counts(&fixture.db, curriculum.id)
        .await
        .unwrap();
    let cloned_counts = CurriculumService::counts(&fixture.db, cloned.id).await.unwrap();
    assert_eq!(source_counts, cloned_counts);
    assert_eq!(cloned_counts.courses, 12);
    assert_eq!(cloned_counts.prerequisites, 1);
    assert_eq!(cloned_counts.corequisites, 2);
    assert_eq!(cloned_counts.elective_rules, 1);
    assert_eq!(cloned_counts.credit_pools, 1);
    assert_eq!(cloned_counts.blacklists, 1);

    // Exactly one audit entry for the whole clone
    let audit_after = audit_logs::Entity::find().all(&fixture.db).await.unwrap().len();
    assert_eq!(audit_after, audit_before + 1);

    let clone_entries = audit_logs::Entity::find()
        .filter(audit_logs::Column::Action.eq(AuditAction::Clone))
        .all(&fixture.db)
        .await
        .unwrap();
    assert_eq!(clone_entries.len(), 1);
    assert_eq!(clone_entries[0].entity_id, cloned.id);
    assert_eq!(clone_entries[0].entity_type, EntityType::Curriculum);
}

#[tokio::test]
async fn clone_rejects_existing_identity() {
    let fixture = common::setup().await;
    let curriculum = common::create_curriculum(&fixture, "BSCS2026", 2026).await;

    let result = CurriculumService::clone_curriculum(
        &fixture.db,
        fixture.chair_id,
        curriculum.id,
        CloneCurriculum {
            name: "BSCS2026".to_string(),
            year: 2026,
            version: "1.0".to_string(),
        },
    )
    .await;
    assert!(matches!(result, Err(ServiceError::Duplicate(_))));
}

#[tokio::test]
async fn removing_curriculum_course_drops_its_scoped_edges() {
    let fixture = common::setup().await;
    let a = common::create_course(&fixture, "CS101", 3).await;
    let b = common::create_course(&fixture, "CS201", 3).await;
    let curriculum = common::create_curriculum(&fixture, "BSCS2026", 2026).await;

    let cc_a = CurriculumService::add_course(
        &fixture.db,
        fixture.chair_id,
        curriculum.id,
        AddCurriculumCourse {
            course_id: a.id,
            position: 1,
            is_required: true,
            semester: None,
            year_level: None,
        },
    )
    .await
    .unwrap();
    let cc_b = CurriculumService::add_course(
        &fixture.db,
        fixture.chair_id,
        curriculum.id,
        AddCurriculumCourse {
            course_id: b.id,
            position: 2,
            is_required: true,
            semester: None,
            year_level: None,
        },
    )
    .await
    .unwrap();

    ConstraintService::add_scoped_prerequisite(
        &fixture.db,
        fixture.chair_id,
        curriculum.id,
        cc_b.id,
        cc_a.id,
    )
    .await
    .unwrap();

    CurriculumService::remove_course(&fixture.db, fixture.chair_id, curriculum.id, cc_a.id)
        .await
        .unwrap();

    let (prerequisites, corequisites) =
        ConstraintService::scoped_constraint_counts(&fixture.db, curriculum.id)
            .await
            .unwrap();
    assert_eq!(prerequisites, 0);
    assert_eq!(corequisites, 0);

    let counts = CurriculumService::counts(&fixture.db, curriculum.id).await.unwrap();
    assert_eq!(counts.courses, 1);
}

#[tokio::test]
async fn detail_returns_courses_in_position_order() {
    let fixture = common::setup().await;
    let curriculum = common::create_curriculum(&fixture, "BSCS2026", 2026).await;

    for (code, position) in [("CS300", 3), ("CS100", 1), ("CS200", 2)] {
        let course = common::create_course(&fixture, code, 3).await;
        CurriculumService::add_course(
            &fixture.db,
            fixture.chair_id,
            curriculum.id,
            AddCurriculumCourse {
                course_id: course.id,
                position,
                is_required: true,
                semester: None,
                year_level: None,
            },
        )
        .await
        .unwrap();
    }

    let detail = CurriculumService::get_detail(&fixture.db, curriculum.id)
        .await
        .unwrap()
        .unwrap();

    let codes: Vec<String> = detail
        .courses
        .iter()
        .filter_map(|(_, course)| course.as_ref().map(|c| c.code.clone()))
        .collect();
    assert_eq!(codes, ["CS100", "CS200", "CS300"]);
}

#[tokio::test]
async fn audit_listing_is_paginated_and_filterable() {
    let fixture = common::setup().await;
    common::create_course(&fixture, "CS101", 3).await;
    common::create_curriculum(&fixture, "BSCS2026", 2026).await;

    let (course_entries, total) = AuditService::list_paginated(
        &fixture.db,
        1,
        20,
        Some(EntityType::Course),
        None,
    )
    .await
    .unwrap();
    assert_eq!(total, 1);
    assert_eq!(course_entries[0].action, AuditAction::Create);

    let (all_entries, all_total) =
        AuditService::list_paginated(&fixture.db, 1, 20, None, Some(fixture.chair_id))
            .await
            .unwrap();
    assert_eq!(all_total, 2);
    assert_eq!(all_entries.len(), 2);
}
