use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/profiles", get(handlers::list_profiles).post(handlers::add_profile))
        .route("/api/profiles/:id", delete(handlers::remove_profile))
        .route(
            "/api/profiles/:id/tags",
            post(handlers::add_tag).delete(handlers::remove_tag),
        )
        .route("/api/profiles/:id/stats", get(handlers::profile_stats))
        .route(
            "/api/engagements",
            get(handlers::list_engagements).post(handlers::log_engagement),
        )
        .route("/api/dashboard", get(handlers::dashboard))
        .route(
            "/api/templates",
            get(handlers::list_templates).post(handlers::add_template),
        )
        .route("/api/templates/:index", delete(handlers::delete_template))
        .route("/api/comment", get(handlers::generate_comment))
        .route("/api/tips", get(handlers::tips))
        .route("/api/best-times", get(handlers::best_times))
        .route("/api/reminders", post(handlers::schedule_reminder))
        .with_state(state)
}
