use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Uniqueness the application relies on
        manager
            .create_index(
                Index::create()
                    .name("uq_courses_code")
                    .table(Courses::Table)
                    .col(Courses::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_curricula_dept_name_year_version")
                    .table(Curricula::Table)
                    .col(Curricula::DepartmentId)
                    .col(Curricula::Name)
                    .col(Curricula::Year)
                    .col(Curricula::Version)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_curriculum_courses_pair")
                    .table(CurriculumCourses::Table)
                    .col(CurriculumCourses::CurriculumId)
                    .col(CurriculumCourses::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_course_prerequisites_pair")
                    .table(CoursePrerequisites::Table)
                    .col(CoursePrerequisites::CourseId)
                    .col(CoursePrerequisites::PrerequisiteId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_course_corequisites_pair")
                    .table(CourseCorequisites::Table)
                    .col(CourseCorequisites::CourseId)
                    .col(CourseCorequisites::CorequisiteId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_curriculum_course_prerequisites_pair")
                    .table(CurriculumCoursePrerequisites::Table)
                    .col(CurriculumCoursePrerequisites::CurriculumCourseId)
                    .col(CurriculumCoursePrerequisites::PrerequisiteCurriculumCourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_curriculum_course_corequisites_pair")
                    .table(CurriculumCourseCorequisites::Table)
                    .col(CurriculumCourseCorequisites::CurriculumCourseId)
                    .col(CurriculumCourseCorequisites::CorequisiteCurriculumCourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_elective_rules_curriculum_category")
                    .table(ElectiveRules::Table)
                    .col(ElectiveRules::CurriculumId)
                    .col(ElectiveRules::Category)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_attached_pool_courses_pair")
                    .table(AttachedPoolCourses::Table)
                    .col(AttachedPoolCourses::CreditPoolId)
                    .col(AttachedPoolCourses::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_blacklist_courses_pair")
                    .table(BlacklistCourses::Table)
                    .col(BlacklistCourses::BlacklistId)
                    .col(BlacklistCourses::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_curriculum_blacklists_pair")
                    .table(CurriculumBlacklists::Table)
                    .col(CurriculumBlacklists::CurriculumId)
                    .col(CurriculumBlacklists::BlacklistId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Indexes for common lookups and joins
        manager
            .create_index(
                Index::create()
                    .name("idx_departments_faculty_id")
                    .table(Departments::Table)
                    .col(Departments::FacultyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_curriculum_courses_curriculum_id")
                    .table(CurriculumCourses::Table)
                    .col(CurriculumCourses::CurriculumId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_credit_pools_curriculum_id")
                    .table(CreditPools::Table)
                    .col(CreditPools::CurriculumId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blacklists_department_id")
                    .table(Blacklists::Table)
                    .col(Blacklists::DepartmentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_audit_logs_entity")
                    .table(AuditLogs::Table)
                    .col(AuditLogs::EntityType)
                    .col(AuditLogs::EntityId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_audit_logs_user_id")
                    .table(AuditLogs::Table)
                    .col(AuditLogs::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_audit_logs_user_id",
            "idx_audit_logs_entity",
            "idx_blacklists_department_id",
            "idx_credit_pools_curriculum_id",
            "idx_curriculum_courses_curriculum_id",
            "idx_departments_faculty_id",
            "uq_curriculum_blacklists_pair",
            "uq_blacklist_courses_pair",
            "uq_attached_pool_courses_pair",
            "uq_elective_rules_curriculum_category",
            "uq_curriculum_course_corequisites_pair",
            "uq_curriculum_course_prerequisites_pair",
            "uq_course_corequisites_pair",
            "uq_course_prerequisites_pair",
            "uq_curriculum_courses_pair",
            "uq_curricula_dept_name_year_version",
            "uq_users_email",
            "uq_courses_code",
        ] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Email,
}

#[derive(DeriveIden)]
enum Departments {
    Table,
    FacultyId,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Code,
}

#[derive(DeriveIden)]
enum Curricula {
    Table,
    Name,
    Year,
    Version,
    DepartmentId,
}

#[derive(DeriveIden)]
enum CurriculumCourses {
    Table,
    CurriculumId,
    CourseId,
}

#[derive(DeriveIden)]
enum CoursePrerequisites {
    Table,
    CourseId,
    PrerequisiteId,
}

#[derive(DeriveIden)]
enum CourseCorequisites {
    Table,
    CourseId,
    CorequisiteId,
}

#[derive(DeriveIden)]
enum CurriculumCoursePrerequisites {
    Table,
    CurriculumCourseId,
    PrerequisiteCurriculumCourseId,
}

#[derive(DeriveIden)]
enum CurriculumCourseCorequisites {
    Table,
    CurriculumCourseId,
    CorequisiteCurriculumCourseId,
}

#[derive(DeriveIden)]
enum ElectiveRules {
    Table,
    CurriculumId,
    Category,
}

#[derive(DeriveIden)]
enum CreditPools {
    Table,
    CurriculumId,
}

#[derive(DeriveIden)]
enum AttachedPoolCourses {
    Table,
    CreditPoolId,
    CourseId,
}

#[derive(DeriveIden)]
enum Blacklists {
    Table,
    DepartmentId,
}

#[derive(DeriveIden)]
enum BlacklistCourses {
    Table,
    BlacklistId,
    CourseId,
}

#[derive(DeriveIden)]
enum CurriculumBlacklists {
    Table,
    CurriculumId,
    BlacklistId,
}

#[derive(DeriveIden)]
enum AuditLogs {
    Table,
    UserId,
    EntityType,
    EntityId,
}
