pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeFile;

use crate::media::{handlers as media, CROPPED_SLOT};
use crate::models::{
    Award, Experience, PersonalStatement, Profile, Project, SectionFields, SkillEntry,
};
use crate::registry::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let cropped_route = format!("{}/{}", state.config.upload_mount, CROPPED_SLOT);
    let cropped_file = ServeFile::new(state.slots.cropped_path());
    let upload_limit = state.config.max_upload_bytes;

    let router = Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Users and portfolios
        .route(
            "/users",
            get(handlers::handle_list_users).post(handlers::handle_create_user),
        )
        .route("/portfolio", post(handlers::handle_create_portfolio))
        .route("/portfolio/:id", get(handlers::handle_get_portfolio));

    // Portfolio sections (echo only)
    let router = with_section::<Profile>(router);
    let router = with_section::<PersonalStatement>(router);
    let router = with_section::<SkillEntry>(router);
    let router = with_section::<Award>(router);
    let router = with_section::<Experience>(router);
    let router = with_section::<Project>(router);

    router
        // Image upload
        .route(
            "/upload/",
            post(media::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route_service(&cropped_route, cropped_file)
        .with_state(state)
}

fn with_section<T: SectionFields>(router: Router<AppState>) -> Router<AppState> {
    let path = format!("/portfolio/:id/{}", T::KIND.path_segment());
    router.route(&path, post(handlers::handle_create_section::<T>))
}
