mod common;

use database::entities::{audit_logs, curricula, curriculum_courses};
use database::error::ServiceError;
use database::services::curriculum::{AddCurriculumCourse, CurriculumService};
use database::services::elective::{
    CourseRequiredSetting, CreateElectiveRule, ElectiveService, ElectiveSettings,
    FreeElectiveUpdate,
};
use sea_orm::EntityTrait;
use uuid::Uuid;

#[tokio::test]
async fn duplicate_category_is_rejected() {
    let fixture = common::setup().await;
    let curriculum = common::create_curriculum(&fixture, "BSCS2026", 2026).await;

    ElectiveService::create_rule(
        &fixture.db,
        fixture.chair_id,
        curriculum.id,
        CreateElectiveRule {
            category: "Major Elective".to_string(),
            required_credits: 9,
        },
    )
    .await
    .unwrap();

    let result = ElectiveService::create_rule(
        &fixture.db,
        fixture.chair_id,
        curriculum.id,
        CreateElectiveRule {
            category: "Major Elective".to_string(),
            required_credits: 12,
        },
    )
    .await;
    assert!(matches!(result, Err(ServiceError::Duplicate(_))));
}

#[tokio::test]
async fn credit_bounds_are_enforced() {
    let fixture = common::setup().await;
    let curriculum = common::create_curriculum(&fixture, "BSCS2026", 2026).await;

    for credits in [-1, 61] {
        let result = ElectiveService::create_rule(
            &fixture.db,
            fixture.chair_id,
            curriculum.id,
            CreateElectiveRule {
                category: "Free Elective".to_string(),
                required_credits: credits,
            },
        )
        .await;
        assert!(
            matches!(result, Err(ServiceError::InvalidInput(_))),
            "credits {credits} should be rejected"
        );
    }
}

#[tokio::test]
async fn settings_batch_applies_valid_items_and_reports_failures() {
    let fixture = common::setup().await;
    let curriculum = common::create_curriculum(&fixture, "BSCS2026", 2026).await;
    let course = common::create_course(&fixture, "CS101", 3).await;

    let cc = CurriculumService::add_course(
        &fixture.db,
        fixture.chair_id,
        curriculum.id,
        AddCurriculumCourse {
            course_id: course.id,
            position: 1,
            is_required: true,
            semester: None,
            year_level: None,
        },
    )
    .await
    .unwrap();

    let audit_before = audit_logs::Entity::find().all(&fixture.db).await.unwrap().len();

    let outcomes = ElectiveService::apply_settings(
        &fixture.db,
        fixture.chair_id,
        curriculum.id,
        ElectiveSettings {
            free_elective: Some(FreeElectiveUpdate {
                name: "Free Elective".to_string(),
                required_credits: 6,
            }),
            course_settings: vec![
                CourseRequiredSetting {
                    curriculum_course_id: cc.id,
                    is_required: false,
                },
                // Unknown row: reported, does not abort the batch
                CourseRequiredSetting {
                    curriculum_course_id: Uuid::new_v4(),
                    is_required: true,
                },
            ],
        },
    )
    .await
    .unwrap();

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[0].applied);
    assert!(outcomes[1].applied);
    assert!(!outcomes[2].applied);
    assert!(outcomes[2].error.is_some());

    // The valid flag update landed
    let reloaded = curriculum_courses::Entity::find_by_id(cc.id)
        .one(&fixture.db)
        .await
        .unwrap()
        .unwrap();
    assert!(!reloaded.is_required);

    // The free-elective upsert created the rule
    let rules = ElectiveService::list_rules(&fixture.db, curriculum.id)
        .await
        .unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].category, "Free Elective");
    assert_eq!(rules[0].required_credits, 6);

    // One audit entry per applied item, none for the failed one
    let audit_after = audit_logs::Entity::find().all(&fixture.db).await.unwrap().len();
    assert_eq!(audit_after, audit_before + 2);
}

#[tokio::test]
async fn settings_rename_free_elective_rule() {
    let fixture = common::setup().await;
    let curriculum = common::create_curriculum(&fixture, "BSCS2026", 2026).await;

    ElectiveService::apply_settings(
        &fixture.db,
        fixture.chair_id,
        curriculum.id,
        ElectiveSettings {
            free_elective: Some(FreeElectiveUpdate {
                name: "Open Elective".to_string(),
                required_credits: 9,
            }),
            course_settings: vec![],
        },
    )
    .await
    .unwrap();

    let rules = ElectiveService::list_rules(&fixture.db, curriculum.id)
        .await
        .unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].category, "Open Elective");
    assert_eq!(rules[0].required_credits, 9);

    // The curriculum now files its free electives under the new name
    let reloaded = curricula::Entity::find_by_id(curriculum.id)
        .one(&fixture.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.free_elective_name, "Open Elective");
}

#[tokio::test]
async fn settings_rename_moves_existing_rule_instead_of_adding_one() {
    let fixture = common::setup().await;
    let curriculum = common::create_curriculum(&fixture, "BSCS2026", 2026).await;

    let original = ElectiveService::create_rule(
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

    ElectiveService::apply_settings(
        &fixture.db,
        fixture.chair_id,
        curriculum.id,
        ElectiveSettings {
            free_elective: Some(FreeElectiveUpdate {
                name: "Open Elective".to_string(),
                required_credits: 9,
            }),
            course_settings: vec![],
        },
    )
    .await
    .unwrap();

    let rules = ElectiveService::list_rules(&fixture.db, curriculum.id)
        .await
        .unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].id, original.id);
    assert_eq!(rules[0].category, "Open Elective");
    assert_eq!(rules[0].required_credits, 9);

    // A second rename still finds the rule under its moved name
    ElectiveService::apply_settings(
        &fixture.db,
        fixture.chair_id,
        curriculum.id,
        ElectiveSettings {
            free_elective: Some(FreeElectiveUpdate {
                name: "General Elective".to_string(),
                required_credits: 9,
            }),
            course_settings: vec![],
        },
    )
    .await
    .unwrap();

    let rules = ElectiveService::list_rules(&fixture.db, curriculum.id)
        .await
        .unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].id, original.id);
    assert_eq!(rules[0].category, "General Elective");
}

#[tokio::test]
async fn settings_rename_onto_existing_category_is_reported_not_applied() {
    let fixture = common::setup().await;
    let curriculum = common::create_curriculum(&fixture, "BSCS2026", 2026).await;

    for (category, credits) in [("Free Elective", 6), ("Major Elective", 12)] {
        ElectiveService::create_rule(
            &fixture.db,
            fixture.chair_id,
            curriculum.id,
            CreateElectiveRule {
                category: category.to_string(),
                required_credits: credits,
            },
        )
        .await
        .unwrap();
    }

    let outcomes = ElectiveService::apply_settings(
        &fixture.db,
        fixture.chair_id,
        curriculum.id,
        ElectiveSettings {
            free_elective: Some(FreeElectiveUpdate {
                name: "Major Elective".to_string(),
                required_credits: 9,
            }),
            course_settings: vec![],
        },
    )
    .await
    .unwrap();

    assert_eq!(outcomes.len(), 1);
    assert!(!outcomes[0].applied);
    assert!(outcomes[0].error.is_some());

    // Both rules untouched
    let rules = ElectiveService::list_rules(&fixture.db, curriculum.id)
        .await
        .unwrap();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].required_credits, 6);
    assert_eq!(rules[1].required_credits, 12);
}
