use crate::controller::{ChartsSnapshot, SummarySnapshot, TableSnapshot};
use crate::errors::AppError;
use crate::models::{FilterCriteria, GenerateRequest, SearchRequest, SortRequest, SummaryKind};
use crate::state::AppState;
use crate::ui::{render_charts, render_summary, render_table};
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form, Json,
};

pub async fn table_page(State(state): State<AppState>) -> Html<String> {
    let snapshot = state.controller.ensure_table().await;
    Html(render_table(&snapshot))
}

pub async fn charts_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let snapshot = state.controller.ensure_charts().await;
    Ok(Html(render_charts(&snapshot)?))
}

pub async fn summary_page(State(state): State<AppState>) -> Html<String> {
    let snapshot = state.controller.summary_snapshot().await;
    Html(render_summary(&snapshot))
}

pub async fn table_sort(
    State(state): State<AppState>,
    Form(payload): Form<SortRequest>,
) -> Result<Redirect, AppError> {
    sort_field(&payload)?;
    state.controller.request_sort(payload.field.trim()).await;
    Ok(Redirect::to("/"))
}

pub async fn table_search(
    State(state): State<AppState>,
    Form(payload): Form<SearchRequest>,
) -> Redirect {
    state.controller.search(&payload.term).await;
    Redirect::to("/")
}

pub async fn table_refresh(State(state): State<AppState>) -> Redirect {
    state.controller.load_table().await;
    Redirect::to("/")
}

pub async fn charts_filter(
    State(state): State<AppState>,
    Form(criteria): Form<FilterCriteria>,
) -> Redirect {
    state.controller.apply_filters(criteria).await;
    Redirect::to("/charts")
}

pub async fn charts_reset(State(state): State<AppState>) -> Redirect {
    state.controller.reset_filters().await;
    Redirect::to("/charts")
}

pub async fn summary_generate(
    State(state): State<AppState>,
    Form(payload): Form<GenerateRequest>,
) -> Result<Redirect, AppError> {
    let kind = summary_kind(&payload)?;
    state.controller.generate_summary(kind).await;
    Ok(Redirect::to("/summary"))
}

pub async fn get_table(State(state): State<AppState>) -> Json<TableSnapshot> {
    Json(state.controller.ensure_table().await)
}

pub async fn sort_table(
    State(state): State<AppState>,
    Json(payload): Json<SortRequest>,
) -> Result<Json<TableSnapshot>, AppError> {
    sort_field(&payload)?;
    Ok(Json(state.controller.request_sort(payload.field.trim()).await))
}

pub async fn search_table(
    State(state): State<AppState>,
    Json(payload): Json<SearchRequest>,
) -> Json<TableSnapshot> {
    Json(state.controller.search(&payload.term).await)
}

pub async fn refresh_table(State(state): State<AppState>) -> Json<TableSnapshot> {
    Json(state.controller.load_table().await)
}

pub async fn get_charts(State(state): State<AppState>) -> Json<ChartsSnapshot> {
    Json(state.controller.ensure_charts().await)
}

pub async fn filter_charts(
    State(state): State<AppState>,
    Json(criteria): Json<FilterCriteria>,
) -> Json<ChartsSnapshot> {
    Json(state.controller.apply_filters(criteria).await)
}

pub async fn reset_charts(State(state): State<AppState>) -> Json<ChartsSnapshot> {
    Json(state.controller.reset_filters().await)
}

pub async fn get_summary(State(state): State<AppState>) -> Json<SummarySnapshot> {
    Json(state.controller.summary_snapshot().await)
}

pub async fn generate_summary(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<SummarySnapshot>, AppError> {
    let kind = summary_kind(&payload)?;
    Ok(Json(state.controller.generate_summary(kind).await))
}

fn sort_field(payload: &SortRequest) -> Result<(), AppError> {
    if payload.field.trim().is_empty() {
        return Err(AppError::bad_request("field must not be empty"));
    }
    Ok(())
}

fn summary_kind(payload: &GenerateRequest) -> Result<SummaryKind, AppError> {
    payload.kind.parse().map_err(AppError::bad_request)
}
