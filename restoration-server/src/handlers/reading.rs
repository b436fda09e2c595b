//! Reading schedule handlers

use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use restoration_core::history::{historical_context, HistoricalContext};
use restoration_core::i18n::{self, MessageKey};
use restoration_core::{ChapterRef, Language, ReadingSchedule, ScheduleItem};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Query parameters shared by the reading endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ReadingQuery {
    /// `ko` or `en`; the configured default when absent
    pub lang: Option<Language>,

    /// `YYYY-MM-DD`; today's local date when absent
    pub date: Option<NaiveDate>,
}

impl ReadingQuery {
    pub fn date_or_today(&self) -> NaiveDate {
        self.date
            .unwrap_or_else(|| ReadingSchedule::date_for(&chrono::Local::now()))
    }
}

/// Today's reading response
#[derive(Debug, Serialize)]
pub struct TodayResponse {
    pub date: NaiveDate,
    pub language: Language,

    /// 1-based day within the current cycle
    pub day: u32,
    pub total_days: u32,
    pub readings: [ChapterRef; 2],
    pub reference: String,

    /// Localized "N days in total, today is day M" text
    pub info: String,
}

/// Resolve the reading for a date
pub async fn today_reading(
    State(state): State<AppState>,
    Query(query): Query<ReadingQuery>,
) -> Json<TodayResponse> {
    let language = state.language(query.lang);
    let date = query.date_or_today();
    let reading = state.schedule.daily_reading(date, language);
    let day = state.schedule.current_day(date);
    let total_days = state.schedule.total_days();

    Json(TodayResponse {
        date,
        language,
        day,
        total_days,
        readings: reading.chapters,
        reference: reading.reference(),
        info: i18n::t_with(
            language,
            MessageKey::ReadingPlanInfo,
            &[("totalDays", &total_days), ("currentDay", &day)],
        ),
    })
}

/// Full schedule response
#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub language: Language,
    pub title: &'static str,
    pub total_days: u32,

    /// Day to highlight for the requested date
    pub current_day: u32,
    pub items: Vec<ScheduleItem>,
}

/// List one full reading cycle
pub async fn full_schedule(
    State(state): State<AppState>,
    Query(query): Query<ReadingQuery>,
) -> Json<ScheduleResponse> {
    let language = state.language(query.lang);

    Json(ScheduleResponse {
        language,
        title: i18n::t(language, MessageKey::ReadingPlanTitle),
        total_days: state.schedule.total_days(),
        current_day: state.schedule.current_day(query.date_or_today()),
        items: state.schedule.full_schedule(language).collect(),
    })
}

/// Historical timeline of the era
pub async fn history(
    State(state): State<AppState>,
    Query(query): Query<ReadingQuery>,
) -> Json<&'static HistoricalContext> {
    Json(historical_context(state.language(query.lang)))
}

/// Message catalog for client-side rendering
pub async fn messages(
    State(state): State<AppState>,
    Query(query): Query<ReadingQuery>,
) -> Json<BTreeMap<&'static str, &'static str>> {
    Json(i18n::catalog(state.language(query.lang)))
}
