use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/dashboard/summary", get(handlers::summary))
        .route("/dashboard/books", get(handlers::books))
        .route("/dashboard/charts/tags", get(handlers::tags_chart))
        .route("/dashboard/charts/ratings", get(handlers::ratings_chart))
        .route("/dashboard/charts/authors", get(handlers::authors_chart))
        .route("/dashboard/charts/correlation", get(handlers::correlation_chart))
        .route("/dashboard/state", get(handlers::dashboard_state))
        .with_state(state)
}
