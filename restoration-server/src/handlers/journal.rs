//! Diary and mission handlers

use crate::state::{AppState, ServerEvent};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use restoration_core::journal::{DiaryEntry, JournalKind, MissionPlan, SavedEntry};
use restoration_core::JournalError;
use serde::{Deserialize, Serialize};

/// Entries saved for one date
#[derive(Debug, Serialize)]
pub struct JournalResponse<T> {
    pub key: String,
    pub entries: Vec<SavedEntry<T>>,
}

/// Mission plan request body
#[derive(Debug, Deserialize)]
pub struct MissionRequest {
    pub plan: String,
}

fn journal_error(e: JournalError) -> (StatusCode, String) {
    let status = match &e {
        JournalError::EmptyEntry => StatusCode::BAD_REQUEST,
        JournalError::Corrupt { .. } | JournalError::Serialize(_) | JournalError::Storage(_) => {
            tracing::error!("Journal failure: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, e.to_string())
}

/// List diary entries for a date
pub async fn get_diary(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<JournalResponse<DiaryEntry>>, (StatusCode, String)> {
    let entries = state
        .journal
        .entries::<DiaryEntry>(date)
        .await
        .map_err(journal_error)?;

    Ok(Json(JournalResponse {
        key: JournalKind::Diary.record_key(date),
        entries,
    }))
}

/// Save a diary entry for a date
pub async fn save_diary(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
    Json(entry): Json<DiaryEntry>,
) -> Result<(StatusCode, Json<SavedEntry<DiaryEntry>>), (StatusCode, String)> {
    let saved = state
        .journal
        .save_diary(date, entry)
        .await
        .map_err(journal_error)?;

    state.broadcast(ServerEvent::DiarySaved { date, id: saved.id });

    Ok((StatusCode::CREATED, Json(saved)))
}

/// List mission plans for a date
pub async fn get_mission(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<JournalResponse<MissionPlan>>, (StatusCode, String)> {
    let entries = state
        .journal
        .entries::<MissionPlan>(date)
        .await
        .map_err(journal_error)?;

    Ok(Json(JournalResponse {
        key: JournalKind::Mission.record_key(date),
        entries,
    }))
}

/// Save a mission plan for a date
pub async fn save_mission(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
    Json(request): Json<MissionRequest>,
) -> Result<(StatusCode, Json<SavedEntry<MissionPlan>>), (StatusCode, String)> {
    let saved = state
        .journal
        .save_mission(date, MissionPlan::new(request.plan))
        .await
        .map_err(journal_error)?;

    state.broadcast(ServerEvent::MissionSaved { date, id: saved.id });

    Ok((StatusCode::CREATED, Json(saved)))
}
