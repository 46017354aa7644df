pub mod attached_pool_courses;
pub mod audit_logs;
pub mod blacklist_courses;
pub mod blacklists;
pub mod course_corequisites;
pub mod course_prerequisites;
pub mod courses;
pub mod credit_pools;
pub mod curricula;
pub mod curriculum_blacklists;
pub mod curriculum_course_corequisites;
pub mod curriculum_course_prerequisites;
pub mod curriculum_courses;
pub mod departments;
pub mod elective_rules;
pub mod faculties;
pub mod sub_category_pools;
pub mod users;
