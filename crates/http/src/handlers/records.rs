use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use passage_archive_core::{Category, FormInput, Record};
use passage_archive_service::SubmitOutcome;

use crate::api_error::ApiError;
use crate::query_types::RecordsQuery;
use crate::AppState;

pub async fn list_records(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RecordsQuery>,
) -> Result<Json<Vec<Record>>, ApiError> {
    let category = query
        .category
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .map(str::parse::<Category>)
        .transpose()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let limit = query.capped_limit(state.default_list_limit);
    let records = state.service.list_records(category, limit).await?;
    Ok(Json(records))
}

pub async fn submit_record(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FormInput>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitOutcome>), ApiError> {
    let Json(form) = payload?;
    let outcome = state.service.submit(&form).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}
