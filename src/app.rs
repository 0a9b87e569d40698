use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::table_page))
        .route("/table/sort", post(handlers::table_sort))
        .route("/table/search", post(handlers::table_search))
        .route("/table/refresh", post(handlers::table_refresh))
        .route("/charts", get(handlers::charts_page))
        .route("/charts/filter", post(handlers::charts_filter))
        .route("/charts/reset", post(handlers::charts_reset))
        .route("/summary", get(handlers::summary_page))
        .route("/summary/generate", post(handlers::summary_generate))
        .route("/api/table", get(handlers::get_table))
        .route("/api/table/sort", post(handlers::sort_table))
        .route("/api/table/search", post(handlers::search_table))
        .route("/api/table/refresh", post(handlers::refresh_table))
        .route("/api/charts", get(handlers::get_charts))
        .route("/api/charts/filter", post(handlers::filter_charts))
        .route("/api/charts/reset", post(handlers::reset_charts))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/summary/generate", post(handlers::generate_summary))
        .with_state(state)
}
