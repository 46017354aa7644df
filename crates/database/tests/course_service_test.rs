mod common;

use database::entities::courses;
use database::error::ServiceError;
use database::services::course::{CourseService, CreateCourse, UpdateCourse};
use database::services::curriculum::{AddCurriculumCourse, CurriculumService};
use sea_orm::EntityTrait;

#[tokio::test]
async fn duplicate_course_code_is_rejected() {
    let fixture = common::setup().await;
    common::create_course(&fixture, "CS101", 3).await;

    let result = CourseService::create_course(
        &fixture.db,
        fixture.chair_id,
        CreateCourse {
            code: "CS101".to_string(),
            name: "Different Name".to_string(),
            credits: 4,
            credit_hours: "4-0-4".to_string(),
            description: None,
            category: "Core".to_string(),
        },
    )
    .await;

    assert!(matches!(result, Err(ServiceError::DuplicateCourse(code)) if code == "CS101"));
}

#[tokio::test]
async fn invalid_credits_are_rejected() {
    let fixture = common::setup().await;

    for credits in [0, -1, 31] {
        let result = CourseService::create_course(
            &fixture.db,
            fixture.chair_id,
            CreateCourse {
                code: format!("CS{credits}"),
                name: "Bad Credits".to_string(),
                credits,
                credit_hours: "3-0-3".to_string(),
                description: None,
                category: "Core".to_string(),
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
async fn delete_is_refused_while_course_is_referenced() {
    let fixture = common::setup().await;
    let course = common::create_course(&fixture, "CS101", 3).await;
    let curriculum = common::create_curriculum(&fixture, "BSCS2026", 2026).await;

    CurriculumService::add_course(
        &fixture.db,
        fixture.chair_id,
        curriculum.id,
        AddCurriculumCourse {
            course_id: course.id,
            position: 1,
            is_required: true,
            semester: Some(1),
            year_level: Some(1),
        },
    )
    .await
    .unwrap();

    let result = CourseService::delete_course(&fixture.db, fixture.chair_id, course.id).await;
    assert!(matches!(result, Err(ServiceError::CourseInUse(code)) if code == "CS101"));

    // Still active
    let reloaded = courses::Entity::find_by_id(course.id)
        .one(&fixture.db)
        .await
        .unwrap()
        .unwrap();
    assert!(reloaded.is_active);
}

#[tokio::test]
async fn delete_soft_deletes_unreferenced_course() {
    let fixture = common::setup().await;
    let course = common::create_course(&fixture, "CS102", 3).await;

    CourseService::delete_course(&fixture.db, fixture.chair_id, course.id)
        .await
        .unwrap();

    let reloaded = courses::Entity::find_by_id(course.id)
        .one(&fixture.db)
        .await
        .unwrap()
        .unwrap();
    assert!(!reloaded.is_active);

    // Soft-deleted courses drop out of the catalog listing
    let (listed, total) =
        CourseService::get_courses_paginated(&fixture.db, 1, 20, None, None, None)
            .await
            .unwrap();
    assert_eq!(total, 0);
    assert!(listed.is_empty());
}

#[tokio::test]
async fn search_filters_by_code_and_category() {
    let fixture = common::setup().await;
    common::create_course(&fixture, "CS101", 3).await;
    common::create_course(&fixture, "MATH201", 4).await;

    let (by_code, _) = CourseService::get_courses_paginated(
        &fixture.db,
        1,
        20,
        Some("MATH".to_string()),
        None,
        None,
    )
    .await
    .unwrap();
    assert_eq!(by_code.len(), 1);
    assert_eq!(by_code[0].code, "MATH201");

    let (by_credits, _) =
        CourseService::get_courses_paginated(&fixture.db, 1, 20, None, None, Some(3))
            .await
            .unwrap();
    assert_eq!(by_credits.len(), 1);
    assert_eq!(by_credits[0].code, "CS101");
}

#[tokio::test]
async fn update_changes_only_provided_fields() {
    let fixture = common::setup().await;
    let course = common::create_course(&fixture, "CS103", 3).await;

    let updated = CourseService::update_course(
        &fixture.db,
        fixture.chair_id,
        course.id,
        UpdateCourse {
            name: Some("Data Structures".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.name, "Data Structures");
    assert_eq!(updated.credits, 3);
    assert_eq!(updated.code, "CS103");
}
