mod common;

use database::entities::{departments, faculties};
use database::error::ServiceError;
use database::services::blacklist::{BlacklistService, CreateBlacklist, UpdateBlacklist};
use sea_orm::{ActiveModelTrait, ActiveValue::Set};
use uuid::Uuid;

#[tokio::test]
async fn attach_twice_is_rejected() {
    let fixture = common::setup().await;
    let curriculum = common::create_curriculum(&fixture, "BSCS2026", 2026).await;

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

    let result =
        BlacklistService::attach(&fixture.db, fixture.chair_id, curriculum.id, blacklist.id)
            .await;
    assert!(matches!(result, Err(ServiceError::AlreadyAttached)));
}

#[tokio::test]
async fn detach_when_not_attached_is_not_found() {
    let fixture = common::setup().await;
    let curriculum = common::create_curriculum(&fixture, "BSCS2026", 2026).await;

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

    let result =
        BlacklistService::detach(&fixture.db, fixture.chair_id, curriculum.id, blacklist.id)
            .await;
    assert!(matches!(result, Err(ServiceError::NotAttached)));
}

#[tokio::test]
async fn create_rejects_unknown_course_ids() {
    let fixture = common::setup().await;
    let course = common::create_course(&fixture, "CS101", 3).await;

    let result = BlacklistService::create(
        &fixture.db,
        fixture.chair_id,
        CreateBlacklist {
            name: "Retired Courses".to_string(),
            department_id: fixture.department_id,
            course_ids: vec![course.id, Uuid::new_v4()],
        },
    )
    .await;
    assert!(matches!(result, Err(ServiceError::InvalidInput(_))));
}

#[tokio::test]
async fn listing_is_scoped_by_department() {
    let fixture = common::setup().await;

    let other_faculty = faculties::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Faculty of Science".to_string()),
    }
    .insert(&fixture.db)
    .await
    .unwrap();
    let other_department = departments::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Physics".to_string()),
        faculty_id: Set(other_faculty.id),
    }
    .insert(&fixture.db)
    .await
    .unwrap();

    for (name, department_id) in [
        ("CS Retired", fixture.department_id),
        ("Physics Retired", other_department.id),
    ] {
        BlacklistService::create(
            &fixture.db,
            fixture.chair_id,
            CreateBlacklist {
                name: name.to_string(),
                department_id,
                course_ids: vec![],
            },
        )
        .await
        .unwrap();
    }

    let scoped =
        BlacklistService::list_for_departments(&fixture.db, Some(&[fixture.department_id]))
            .await
            .unwrap();
    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped[0].name, "CS Retired");

    let all = BlacklistService::list_for_departments(&fixture.db, None)
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn update_replaces_the_course_set() {
    let fixture = common::setup().await;
    let a = common::create_course(&fixture, "CS101", 3).await;
    let b = common::create_course(&fixture, "CS102", 3).await;
    let c = common::create_course(&fixture, "CS103", 3).await;

    let blacklist = BlacklistService::create(
        &fixture.db,
        fixture.chair_id,
        CreateBlacklist {
            name: "Retired Courses".to_string(),
            department_id: fixture.department_id,
            course_ids: vec![a.id, b.id],
        },
    )
    .await
    .unwrap();

    BlacklistService::update(
        &fixture.db,
        fixture.chair_id,
        blacklist.id,
        UpdateBlacklist {
            name: Some("Deprecated Courses".to_string()),
            course_ids: Some(vec![c.id]),
        },
    )
    .await
    .unwrap();

    let (updated, courses) = BlacklistService::get_with_courses(&fixture.db, blacklist.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Deprecated Courses");
    let codes: Vec<&str> = courses.iter().map(|course| course.code.as_str()).collect();
    assert_eq!(codes, ["CS103"]);
}
