mod auth;
mod cache;
mod doc;
mod dtos;
mod error;
mod routes;
mod state;
mod utils;

use crate::doc::ApiDoc;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post, put};
use database::db::create_connection;
use log::info;
use migration::Migrator;
use sea_orm_migration::MigratorTrait;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(routes::health::health))
        .route(
            "/courses",
            get(routes::course::list_courses).post(routes::course::create_course),
        )
        .route(
            "/courses/{id}",
            get(routes::course::get_course)
                .put(routes::course::update_course)
                .delete(routes::course::delete_course),
        )
        .route(
            "/courses/{id}/flags",
            get(routes::constraint::get_flags).put(routes::constraint::set_flags),
        )
        .route(
            "/courses/{id}/prerequisites",
            get(routes::constraint::list_prerequisites),
        )
        .route(
            "/courses/{id}/prerequisites/{prereq_id}",
            post(routes::constraint::add_prerequisite)
                .delete(routes::constraint::remove_prerequisite),
        )
        .route(
            "/courses/{id}/corequisites",
            get(routes::constraint::list_corequisites),
        )
        .route(
            "/courses/{id}/corequisites/{coreq_id}",
            post(routes::constraint::add_corequisite)
                .delete(routes::constraint::remove_corequisite),
        )
        .route(
            "/curricula",
            get(routes::curriculum::list_curricula).post(routes::curriculum::create_curriculum),
        )
        .route(
            "/curricula/{id}",
            get(routes::curriculum::get_curriculum)
                .put(routes::curriculum::update_curriculum)
                .delete(routes::curriculum::delete_curriculum),
        )
        .route("/curricula/{id}/clone", post(routes::curriculum::clone_curriculum))
        .route(
            "/curricula/{id}/courses",
            post(routes::curriculum::add_curriculum_course),
        )
        .route(
            "/curricula/{id}/courses/{cc_id}",
            axum::routing::delete(routes::curriculum::remove_curriculum_course),
        )
        .route(
            "/curricula/{id}/courses/{cc_id}/prerequisites/{other_id}",
            post(routes::constraint::add_scoped_prerequisite)
                .delete(routes::constraint::remove_scoped_prerequisite),
        )
        .route(
            "/curricula/{id}/courses/{cc_id}/corequisites/{other_id}",
            post(routes::constraint::add_scoped_corequisite)
                .delete(routes::constraint::remove_scoped_corequisite),
        )
        .route(
            "/curricula/{id}/elective-rules",
            get(routes::elective::list_rules).post(routes::elective::create_rule),
        )
        .route(
            "/curricula/{id}/elective-rules/{rule_id}",
            put(routes::elective::update_rule).delete(routes::elective::delete_rule),
        )
        .route(
            "/curricula/{id}/elective-settings",
            put(routes::elective::apply_settings),
        )
        .route(
            "/curricula/{id}/pools",
            get(routes::pool::list_pools).post(routes::pool::create_pool),
        )
        .route(
            "/curricula/{id}/pools/{pool_id}",
            put(routes::pool::update_pool).delete(routes::pool::delete_pool),
        )
        .route(
            "/curricula/{id}/pools/{pool_id}/sub-categories",
            post(routes::pool::add_sub_category),
        )
        .route(
            "/curricula/{id}/pools/{pool_id}/sub-categories/{sub_id}",
            axum::routing::delete(routes::pool::remove_sub_category),
        )
        .route(
            "/curricula/{id}/pools/{pool_id}/courses/{course_id}",
            post(routes::pool::attach_course).delete(routes::pool::detach_course),
        )
        .route(
            "/blacklists",
            get(routes::blacklist::list_blacklists).post(routes::blacklist::create_blacklist),
        )
        .route(
            "/blacklists/{id}",
            get(routes::blacklist::get_blacklist)
                .put(routes::blacklist::update_blacklist)
                .delete(routes::blacklist::delete_blacklist),
        )
        .route(
            "/curricula/{id}/blacklists/{blacklist_id}",
            post(routes::blacklist::attach_blacklist)
                .delete(routes::blacklist::detach_blacklist),
        )
        .route("/audit-logs", get(routes::audit::list_audit_logs))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let db = create_connection()
        .await
        .expect("failed to connect to database");
    Migrator::up(&db, None)
        .await
        .expect("failed to run migrations");

    let app = router(AppState::new(db));

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listener");
    info!("Running axum on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(utils::shutdown::shutdown_signal())
        .await
        .expect("server error");
}
