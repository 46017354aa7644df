use crate::routes::{audit, blacklist, constraint, course, curriculum, elective, health, pool};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        course::list_courses,
        course::get_course,
        course::create_course,
        course::update_course,
        course::delete_course,
        constraint::get_flags,
        constraint::set_flags,
        constraint::list_prerequisites,
        constraint::add_prerequisite,
        constraint::remove_prerequisite,
        constraint::list_corequisites,
        constraint::add_corequisite,
        constraint::remove_corequisite,
        constraint::add_scoped_prerequisite,
        constraint::remove_scoped_prerequisite,
        constraint::add_scoped_corequisite,
        constraint::remove_scoped_corequisite,
        curriculum::list_curricula,
        curriculum::get_curriculum,
        curriculum::create_curriculum,
        curriculum::update_curriculum,
        curriculum::delete_curriculum,
        curriculum::clone_curriculum,
        curriculum::add_curriculum_course,
        curriculum::remove_curriculum_course,
        elective::list_rules,
        elective::create_rule,
        elective::update_rule,
        elective::delete_rule,
        elective::apply_settings,
        pool::list_pools,
        pool::create_pool,
        pool::update_pool,
        pool::delete_pool,
        pool::add_sub_category,
        pool::remove_sub_category,
        pool::attach_course,
        pool::detach_course,
        blacklist::list_blacklists,
        blacklist::get_blacklist,
        blacklist::create_blacklist,
        blacklist::update_blacklist,
        blacklist::delete_blacklist,
        blacklist::attach_blacklist,
        blacklist::detach_blacklist,
        audit::list_audit_logs
    ),
    tags(
        (name = "Health", description = "Service liveness"),
        (name = "Courses", description = "Course catalog"),
        (name = "Constraints", description = "Course flags, prerequisites and corequisites"),
        (name = "Curricula", description = "Curriculum management"),
        (name = "Electives", description = "Elective rules and batch settings"),
        (name = "Credit pools", description = "Credit pools and pinned courses"),
        (name = "Blacklists", description = "Course blacklists and attachments"),
        (name = "Audit", description = "Audit trail"),
    ),
    info(
        title = "Curriculum API",
        version = "1.0.0",
        description = "University curriculum management API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
