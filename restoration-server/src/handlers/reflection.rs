//! Reflection handlers

use super::reading::ReadingQuery;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use restoration_core::reflection::{ReflectionKind, ReflectionSource};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReflectionResponse {
    pub kind: ReflectionKind,
    pub reference: String,
    pub text: String,
    pub source: ReflectionSource,
}

/// Generate (or sample) a reflection on the day's reading
pub async fn get_reflection(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(query): Query<ReadingQuery>,
) -> Result<Json<ReflectionResponse>, (StatusCode, String)> {
    let kind: ReflectionKind = kind
        .parse()
        .map_err(|e: restoration_core::ReflectionError| (StatusCode::NOT_FOUND, e.to_string()))?;

    let language = state.language(query.lang);
    let reading = state
        .schedule
        .daily_reading(query.date_or_today(), language);

    let reflection = state
        .reflections
        .reflect(kind, &reading)
        .await
        .map_err(|e| {
            tracing::error!("Reflection failed: {}", e);
            (StatusCode::BAD_GATEWAY, e.to_string())
        })?;

    Ok(Json(ReflectionResponse {
        kind: reflection.kind,
        reference: reading.reference(),
        text: reflection.text,
        source: reflection.source,
    }))
}
