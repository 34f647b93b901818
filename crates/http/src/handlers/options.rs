use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use passage_archive_service::MockExamOptions;

use crate::query_types::UnitsQuery;
use crate::AppState;

pub async fn textbooks(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.service.textbook_options().await)
}

pub async fn units(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UnitsQuery>,
) -> Json<Vec<String>> {
    Json(state.service.unit_options(&query.textbook).await)
}

pub async fn mock_exam(State(state): State<Arc<AppState>>) -> Json<MockExamOptions> {
    Json(state.service.mock_exam_options())
}
