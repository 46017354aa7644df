mod common;

use database::entities::{course_corequisites, curriculum_course_corequisites};
use database::error::ServiceError;
use database::services::constraint::ConstraintService;
use database::services::curriculum::{AddCurriculumCourse, CurriculumService};
use models::flags::CourseFlags;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

async fn corequisite_edge_exists(
    db: &sea_orm::DatabaseConnection,
    course_id: Uuid,
    corequisite_id: Uuid,
) -> bool {
    course_corequisites::Entity::find()
        .filter(course_corequisites::Column::CourseId.eq(course_id))
        .filter(course_corequisites::Column::CorequisiteId.eq(corequisite_id))
        .one(db)
        .await
        .unwrap()
        .is_some()
}

#[tokio::test]
async fn corequisite_insert_is_symmetric() {
    let fixture = common::setup().await;
    let math101 = common::create_course(&fixture, "MATH101", 3).await;
    let math102 = common::create_course(&fixture, "MATH102", 3).await;

    ConstraintService::add_corequisite(&fixture.db, fixture.chair_id, math101.id, math102.id)
        .await
        .unwrap();

    assert!(corequisite_edge_exists(&fixture.db, math101.id, math102.id).await);
    assert!(corequisite_edge_exists(&fixture.db, math102.id, math101.id).await);
}

#[tokio::test]
async fn removing_either_corequisite_direction_removes_both() {
    let fixture = common::setup().await;
    let math101 = common::create_course(&fixture, "MATH101", 3).await;
    let math102 = common::create_course(&fixture, "MATH102", 3).await;

    ConstraintService::add_corequisite(&fixture.db, fixture.chair_id, math101.id, math102.id)
        .await
        .unwrap();

    // Delete via the reverse direction
    ConstraintService::remove_corequisite(&fixture.db, fixture.chair_id, math102.id, math101.id)
        .await
        .unwrap();

    assert!(!corequisite_edge_exists(&fixture.db, math101.id, math102.id).await);
    assert!(!corequisite_edge_exists(&fixture.db, math102.id, math101.id).await);
}

#[tokio::test]
async fn removing_missing_corequisite_is_not_found() {
    let fixture = common::setup().await;
    let a = common::create_course(&fixture, "CS101", 3).await;
    let b = common::create_course(&fixture, "CS102", 3).await;

    let result =
        ConstraintService::remove_corequisite(&fixture.db, fixture.chair_id, a.id, b.id).await;
    assert!(matches!(result, Err(ServiceError::NotFound { .. })));
}

#[tokio::test]
async fn self_corequisite_is_rejected() {
    let fixture = common::setup().await;
    let course = common::create_course(&fixture, "CS101", 3).await;

    let result =
        ConstraintService::add_corequisite(&fixture.db, fixture.chair_id, course.id, course.id)
            .await;
    assert!(matches!(result, Err(ServiceError::InvalidInput(_))));
}

#[tokio::test]
async fn senior_standing_requires_threshold() {
    let fixture = common::setup().await;
    let course = common::create_course(&fixture, "CS401", 3).await;

    let result = ConstraintService::set_flags(
        &fixture.db,
        fixture.chair_id,
        course.id,
        CourseFlags {
            requires_senior_standing: true,
            min_credit_threshold: None,
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(result, Err(ServiceError::InvalidInput(_))));

    let result = ConstraintService::set_flags(
        &fixture.db,
        fixture.chair_id,
        course.id,
        CourseFlags {
            requires_senior_standing: true,
            min_credit_threshold: Some(201),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(result, Err(ServiceError::InvalidInput(_))));

    let updated = ConstraintService::set_flags(
        &fixture.db,
        fixture.chair_id,
        course.id,
        CourseFlags {
            requires_senior_standing: true,
            min_credit_threshold: Some(90),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(updated.requires_senior_standing);
    assert_eq!(updated.min_credit_threshold, Some(90));
}

#[tokio::test]
async fn clearing_senior_standing_drops_threshold() {
    let fixture = common::setup().await;
    let course = common::create_course(&fixture, "CS402", 3).await;

    ConstraintService::set_flags(
        &fixture.db,
        fixture.chair_id,
        course.id,
        CourseFlags {
            requires_senior_standing: true,
            min_credit_threshold: Some(90),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let updated = ConstraintService::set_flags(
        &fixture.db,
        fixture.chair_id,
        course.id,
        CourseFlags {
            requires_senior_standing: false,
            min_credit_threshold: Some(90),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(!updated.requires_senior_standing);
    assert_eq!(updated.min_credit_threshold, None);
}

#[tokio::test]
async fn cross_curriculum_scoped_edge_is_rejected() {
    let fixture = common::setup().await;
    let a = common::create_course(&fixture, "CS101", 3).await;
    let b = common::create_course(&fixture, "CS102", 3).await;
    let first = common::create_curriculum(&fixture, "BSCS2026", 2026).await;
    let second = common::create_curriculum(&fixture, "BSSE2026", 2026).await;

    let cc_first = CurriculumService::add_course(
        &fixture.db,
        fixture.chair_id,
        first.id,
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

    let cc_second = CurriculumService::add_course(
        &fixture.db,
        fixture.chair_id,
        second.id,
        AddCurriculumCourse {
            course_id: b.id,
            position: 1,
            is_required: true,
            semester: None,
            year_level: None,
        },
    )
    .await
    .unwrap();

    let result = ConstraintService::add_scoped_prerequisite(
        &fixture.db,
        fixture.chair_id,
        first.id,
        cc_first.id,
        cc_second.id,
    )
    .await;
    assert!(matches!(result, Err(ServiceError::InvalidInput(_))));

    let result = ConstraintService::add_scoped_corequisite(
        &fixture.db,
        fixture.chair_id,
        first.id,
        cc_first.id,
        cc_second.id,
    )
    .await;
    assert!(matches!(result, Err(ServiceError::InvalidInput(_))));
}

#[tokio::test]
async fn scoped_corequisite_pair_is_symmetric() {
    let fixture = common::setup().await;
    let a = common::create_course(&fixture, "CS101", 3).await;
    let b = common::create_course(&fixture, "CS102", 3).await;
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

    ConstraintService::add_scoped_corequisite(
        &fixture.db,
        fixture.chair_id,
        curriculum.id,
        cc_a.id,
        cc_b.id,
    )
    .await
    .unwrap();

    let edges = curriculum_course_corequisites::Entity::find()
        .all(&fixture.db)
        .await
        .unwrap();
    assert_eq!(edges.len(), 2);

    ConstraintService::remove_scoped_corequisite(
        &fixture.db,
        fixture.chair_id,
        curriculum.id,
        cc_b.id,
        cc_a.id,
    )
    .await
    .unwrap();

    let edges = curriculum_course_corequisites::Entity::find()
        .all(&fixture.db)
        .await
        .unwrap();
    assert!(edges.is_empty());
}

#[tokio::test]
async fn prerequisite_duplicate_is_rejected() {
    let fixture = common::setup().await;
    let a = common::create_course(&fixture, "CS201", 3).await;
    let b = common::create_course(&fixture, "CS101", 3).await;

    ConstraintService::add_prerequisite(&fixture.db, fixture.chair_id, a.id, b.id)
        .await
        .unwrap();

    let result =
        ConstraintService::add_prerequisite(&fixture.db, fixture.chair_id, a.id, b.id).await;
    assert!(matches!(result, Err(ServiceError::Duplicate(_))));

    // The reverse direction is a distinct edge and stays allowed
    ConstraintService::add_prerequisite(&fixture.db, fixture.chair_id, b.id, a.id)
        .await
        .unwrap();
}
