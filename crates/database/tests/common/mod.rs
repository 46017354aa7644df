use database::entities::{departments, faculties, users};
use database::services::course::{CourseService, CreateCourse};
use database::services::curriculum::{CreateCurriculum, CurriculumService};
use migration::Migrator;
use models::role::Role;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use uuid::Uuid;

/// Seeded faculty/department/chairperson shared by the service tests
pub struct Fixture {
    pub db: DatabaseConnection,
    pub faculty_id: Uuid,
    pub department_id: Uuid,
    pub chair_id: Uuid,
}

pub async fn setup() -> Fixture {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("failed to connect to test database");
    Migrator::up(&db, None)
        .await
        .expect("failed to run migrations");

    let faculty = faculties::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Faculty of Engineering".to_string()),
    }
    .insert(&db)
    .await
    .expect("failed to insert faculty");

    let department = departments::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Computer Science".to_string()),
        faculty_id: Set(faculty.id),
    }
    .insert(&db)
    .await
    .expect("failed to insert department");

    let chair = users::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Chair Person".to_string()),
        email: Set("chair@example.edu".to_string()),
        role: Set(Role::Chairperson),
        faculty_id: Set(Some(faculty.id)),
    }
    .insert(&db)
    .await
    .expect("failed to insert user");

    Fixture {
        db,
        faculty_id: faculty.id,
        department_id: department.id,
        chair_id: chair.id,
    }
}

pub async fn create_course(
    fixture: &Fixture,
    code: &str,
    credits: i16,
) -> database::entities::courses::Model {
    CourseService::create_course(
        &fixture.db,
        fixture.chair_id,
        CreateCourse {
            code: code.to_string(),
            name: format!("Course {code}"),
            credits,
            credit_hours: format!("{credits}-0-{credits}"),
            description: None,
            category: "Core".to_string(),
        },
    )
    .await
    .expect("failed to create course")
}

pub async fn create_curriculum(
    fixture: &Fixture,
    name: &str,
    year: i16,
) -> database::entities::curricula::Model {
    CurriculumService::create(
        &fixture.db,
        fixture.chair_id,
        CreateCurriculum {
            name: name.to_string(),
            year,
            version: "1.0".to_string(),
            department_id: fixture.department_id,
        },
    )
    .await
    .expect("failed to create curriculum")
}
