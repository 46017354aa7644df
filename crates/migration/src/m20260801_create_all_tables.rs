use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create faculties table
        manager
            .create_table(
                Table::create()
                    .table(Faculties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Faculties::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Faculties::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create departments table
        manager
            .create_table(
                Table::create()
                    .table(Departments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Departments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Departments::Name).string().not_null())
                    .col(ColumnDef::new(Departments::FacultyId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-departments-faculty_id")
                            .from(Departments::Table, Departments::FacultyId)
                            .to(Faculties::Table, Faculties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::FacultyId).uuid())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-users-faculty_id")
                            .from(Users::Table, Users::FacultyId)
                            .to(Faculties::Table, Faculties::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Courses::Code).string().not_null())
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(ColumnDef::new(Courses::Credits).small_integer().not_null())
                    .col(ColumnDef::new(Courses::CreditHours).string().not_null())
                    .col(ColumnDef::new(Courses::Description).text())
                    .col(ColumnDef::new(Courses::Category).string().not_null())
                    .col(
                        ColumnDef::new(Courses::RequiresPermission)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Courses::SummerOnly)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Courses::RequiresSeniorStanding)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Courses::MinCreditThreshold).small_integer())
                    .col(
                        ColumnDef::new(Courses::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        // Create curricula table
        manager
            .create_table(
                Table::create()
                    .table(Curricula::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Curricula::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Curricula::Name).string().not_null())
                    .col(ColumnDef::new(Curricula::Year).small_integer().not_null())
                    .col(ColumnDef::new(Curricula::Version).string().not_null())
                    .col(
                        ColumnDef::new(Curricula::FreeElectiveName)
                            .string()
                            .not_null()
                            .default("Free Elective"),
                    )
                    .col(ColumnDef::new(Curricula::DepartmentId).uuid().not_null())
                    .col(ColumnDef::new(Curricula::CreatedBy).uuid().not_null())
                    .col(
                        ColumnDef::new(Curricula::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-curricula-department_id")
                            .from(Curricula::Table, Curricula::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-curricula-created_by")
                            .from(Curricula::Table, Curricula::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Create curriculum_courses join table
        manager
            .create_table(
                Table::create()
                    .table(CurriculumCourses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CurriculumCourses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CurriculumCourses::CurriculumId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CurriculumCourses::CourseId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CurriculumCourses::Position)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CurriculumCourses::IsRequired)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(CurriculumCourses::Semester).small_integer())
                    .col(ColumnDef::new(CurriculumCourses::YearLevel).small_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-curriculum_courses-curriculum_id")
                            .from(CurriculumCourses::Table, CurriculumCourses::CurriculumId)
                            .to(Curricula::Table, Curricula::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-curriculum_courses-course_id")
                            .from(CurriculumCourses::Table, CurriculumCourses::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_prerequisites table (global, directed)
        manager
            .create_table(
                Table::create()
                    .table(CoursePrerequisites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CoursePrerequisites::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CoursePrerequisites::CourseId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CoursePrerequisites::PrerequisiteId)
                            .uuid()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_prerequisites-course_id")
                            .from(CoursePrerequisites::Table, CoursePrerequisites::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_prerequisites-prerequisite_id")
                            .from(
                                CoursePrerequisites::Table,
                                CoursePrerequisites::PrerequisiteId,
                            )
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_corequisites table (global, rows come in symmetric pairs)
        manager
            .create_table(
                Table::create()
                    .table(CourseCorequisites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseCorequisites::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseCorequisites::CourseId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseCorequisites::CorequisiteId)
                            .uuid()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_corequisites-course_id")
                            .from(CourseCorequisites::Table, CourseCorequisites::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_corequisites-corequisite_id")
                            .from(
                                CourseCorequisites::Table,
                                CourseCorequisites::CorequisiteId,
                            )
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create curriculum_course_prerequisites table (curriculum-scoped)
        manager
            .create_table(
                Table::create()
                    .table(CurriculumCoursePrerequisites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CurriculumCoursePrerequisites::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CurriculumCoursePrerequisites::CurriculumCourseId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(
                            CurriculumCoursePrerequisites::PrerequisiteCurriculumCourseId,
                        )
                        .uuid()
                        .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-curriculum_course_prerequisites-curriculum_course_id")
                            .from(
                                CurriculumCoursePrerequisites::Table,
                                CurriculumCoursePrerequisites::CurriculumCourseId,
                            )
                            .to(CurriculumCourses::Table, CurriculumCourses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-curriculum_course_prerequisites-prerequisite_id")
                            .from(
                                CurriculumCoursePrerequisites::Table,
                                CurriculumCoursePrerequisites::PrerequisiteCurriculumCourseId,
                            )
                            .to(CurriculumCourses::Table, CurriculumCourses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create curriculum_course_corequisites table (curriculum-scoped, symmetric pairs)
        manager
            .create_table(
                Table::create()
                    .table(CurriculumCourseCorequisites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CurriculumCourseCorequisites::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CurriculumCourseCorequisites::CurriculumCourseId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(
                            CurriculumCourseCorequisites::CorequisiteCurriculumCourseId,
                        )
                        .uuid()
                        .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-curriculum_course_corequisites-curriculum_course_id")
                            .from(
                                CurriculumCourseCorequisites::Table,
                                CurriculumCourseCorequisites::CurriculumCourseId,
                            )
                            .to(CurriculumCourses::Table, CurriculumCourses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-curriculum_course_corequisites-corequisite_id")
                            .from(
                                CurriculumCourseCorequisites::Table,
                                CurriculumCourseCorequisites::CorequisiteCurriculumCourseId,
                            )
                            .to(CurriculumCourses::Table, CurriculumCourses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create elective_rules table
        manager
            .create_table(
                Table::create()
                    .table(ElectiveRules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ElectiveRules::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ElectiveRules::CurriculumId).uuid().not_null())
                    .col(ColumnDef::new(ElectiveRules::Category).string().not_null())
                    .col(
                        ColumnDef::new(ElectiveRules::RequiredCredits)
                            .small_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-elective_rules-curriculum_id")
                            .from(ElectiveRules::Table, ElectiveRules::CurriculumId)
                            .to(Curricula::Table, Curricula::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create credit_pools table
        manager
            .create_table(
                Table::create()
                    .table(CreditPools::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CreditPools::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CreditPools::CurriculumId).uuid().not_null())
                    .col(ColumnDef::new(CreditPools::Name).string().not_null())
                    .col(
                        ColumnDef::new(CreditPools::MinCredits)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CreditPools::MaxCredits).small_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-credit_pools-curriculum_id")
                            .from(CreditPools::Table, CreditPools::CurriculumId)
                            .to(Curricula::Table, Curricula::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create sub_category_pools table
        manager
            .create_table(
                Table::create()
                    .table(SubCategoryPools::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubCategoryPools::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SubCategoryPools::CreditPoolId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SubCategoryPools::Name).string().not_null())
                    .col(
                        ColumnDef::new(SubCategoryPools::CourseCategory)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SubCategoryPools::RequiredCredits).small_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sub_category_pools-credit_pool_id")
                            .from(SubCategoryPools::Table, SubCategoryPools::CreditPoolId)
                            .to(CreditPools::Table, CreditPools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create attached_pool_courses table
        manager
            .create_table(
                Table::create()
                    .table(AttachedPoolCourses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AttachedPoolCourses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AttachedPoolCourses::CreditPoolId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttachedPoolCourses::CourseId)
                            .uuid()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-attached_pool_courses-credit_pool_id")
                            .from(AttachedPoolCourses::Table, AttachedPoolCourses::CreditPoolId)
                            .to(CreditPools::Table, CreditPools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-attached_pool_courses-course_id")
                            .from(AttachedPoolCourses::Table, AttachedPoolCourses::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create blacklists table
        manager
            .create_table(
                Table::create()
                    .table(Blacklists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Blacklists::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Blacklists::Name).string().not_null())
                    .col(ColumnDef::new(Blacklists::DepartmentId).uuid().not_null())
                    .col(ColumnDef::new(Blacklists::CreatedBy).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-blacklists-department_id")
                            .from(Blacklists::Table, Blacklists::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-blacklists-created_by")
                            .from(Blacklists::Table, Blacklists::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Create blacklist_courses junction table
        manager
            .create_table(
                Table::create()
                    .table(BlacklistCourses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlacklistCourses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BlacklistCourses::BlacklistId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(BlacklistCourses::CourseId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-blacklist_courses-blacklist_id")
                            .from(BlacklistCourses::Table, BlacklistCourses::BlacklistId)
                            .to(Blacklists::Table, Blacklists::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-blacklist_courses-course_id")
                            .from(BlacklistCourses::Table, BlacklistCourses::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create curriculum_blacklists junction table
        manager
            .create_table(
                Table::create()
                    .table(CurriculumBlacklists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CurriculumBlacklists::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CurriculumBlacklists::CurriculumId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CurriculumBlacklists::BlacklistId)
                            .uuid()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-curriculum_blacklists-curriculum_id")
                            .from(
                                CurriculumBlacklists::Table,
                                CurriculumBlacklists::CurriculumId,
                            )
                            .to(Curricula::Table, Curricula::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-curriculum_blacklists-blacklist_id")
                            .from(
                                CurriculumBlacklists::Table,
                                CurriculumBlacklists::BlacklistId,
                            )
                            .to(Blacklists::Table, Blacklists::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create audit_logs table (append-only)
        manager
            .create_table(
                Table::create()
                    .table(AuditLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AuditLogs::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AuditLogs::UserId).uuid().not_null())
                    .col(ColumnDef::new(AuditLogs::EntityType).string().not_null())
                    .col(ColumnDef::new(AuditLogs::EntityId).uuid().not_null())
                    .col(ColumnDef::new(AuditLogs::Action).string().not_null())
                    .col(ColumnDef::new(AuditLogs::Description).text().not_null())
                    .col(ColumnDef::new(AuditLogs::Changes).json())
                    .col(ColumnDef::new(AuditLogs::CreatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-audit_logs-user_id")
                            .from(AuditLogs::Table, AuditLogs::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse dependency order
        manager
            .drop_table(Table::drop().table(AuditLogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CurriculumBlacklists::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BlacklistCourses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Blacklists::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AttachedPoolCourses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SubCategoryPools::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CreditPools::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ElectiveRules::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(CurriculumCourseCorequisites::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(CurriculumCoursePrerequisites::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(CourseCorequisites::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CoursePrerequisites::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CurriculumCourses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Curricula::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Departments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Faculties::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Faculties {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Departments {
    Table,
    Id,
    Name,
    FacultyId,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Name,
    Email,
    Role,
    FacultyId,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
    Code,
    Name,
    Credits,
    CreditHours,
    Description,
    Category,
    RequiresPermission,
    SummerOnly,
    RequiresSeniorStanding,
    MinCreditThreshold,
    IsActive,
}

#[derive(DeriveIden)]
enum Curricula {
    Table,
    Id,
    Name,
    Year,
    Version,
    FreeElectiveName,
    DepartmentId,
    CreatedBy,
    IsActive,
}

#[derive(DeriveIden)]
enum CurriculumCourses {
    Table,
    Id,
    CurriculumId,
    CourseId,
    Position,
    IsRequired,
    Semester,
    YearLevel,
}

#[derive(DeriveIden)]
enum CoursePrerequisites {
    Table,
    Id,
    CourseId,
    PrerequisiteId,
}

#[derive(DeriveIden)]
enum CourseCorequisites {
    Table,
    Id,
    CourseId,
    CorequisiteId,
}

#[derive(DeriveIden)]
enum CurriculumCoursePrerequisites {
    Table,
    Id,
    CurriculumCourseId,
    PrerequisiteCurriculumCourseId,
}

#[derive(DeriveIden)]
enum CurriculumCourseCorequisites {
    Table,
    Id,
    CurriculumCourseId,
    CorequisiteCurriculumCourseId,
}

#[derive(DeriveIden)]
enum ElectiveRules {
    Table,
    Id,
    CurriculumId,
    Category,
    RequiredCredits,
}

#[derive(DeriveIden)]
enum CreditPools {
    Table,
    Id,
    CurriculumId,
    Name,
    MinCredits,
    MaxCredits,
}

#[derive(DeriveIden)]
enum SubCategoryPools {
    Table,
    Id,
    CreditPoolId,
    Name,
    CourseCategory,
    RequiredCredits,
}

#[derive(DeriveIden)]
enum AttachedPoolCourses {
    Table,
    Id,
    CreditPoolId,
    CourseId,
}

#[derive(DeriveIden)]
enum Blacklists {
    Table,
    Id,
    Name,
    DepartmentId,
    CreatedBy,
}

#[derive(DeriveIden)]
enum BlacklistCourses {
    Table,
    Id,
    BlacklistId,
    CourseId,
}

#[derive(DeriveIden)]
enum CurriculumBlacklists {
    Table,
    Id,
    CurriculumId,
    BlacklistId,
}

#[derive(DeriveIden)]
enum AuditLogs {
    Table,
    Id,
    UserId,
    EntityType,
    EntityId,
    Action,
    Description,
    Changes,
    CreatedAt,
}
