//! Server-Sent Events for journal updates

use crate::state::{AppState, ServerEvent};
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::Stream;
use std::convert::Infallible;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

impl ServerEvent {
    /// SSE event name
    pub fn name(&self) -> &'static str {
        match self {
            ServerEvent::DiarySaved { .. } => "diary_saved",
            ServerEvent::MissionSaved { .. } => "mission_saved",
        }
    }

    /// JSON payload
    pub fn payload(&self) -> serde_json::Value {
        match self {
            ServerEvent::DiarySaved { date, id } | ServerEvent::MissionSaved { date, id } => {
                serde_json::json!({ "date": date, "id": id })
            }
        }
    }
}

/// SSE endpoint for journal updates
pub async fn sync_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = BroadcastStream::new(state.subscribe());

    let event_stream = stream.filter_map(|result| match result {
        Ok(event) => Some(Ok(Event::default()
            .event(event.name())
            .data(event.payload().to_string()))),
        Err(lagged) => {
            tracing::debug!("SSE subscriber lagged: {}", lagged);
            None
        }
    });

    Sse::new(event_stream).keep_alive(KeepAlive::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn test_event_names_and_payload() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let id = Uuid::new_v4();

        let diary = ServerEvent::DiarySaved { date, id };
        assert_eq!(diary.name(), "diary_saved");
        assert_eq!(diary.payload()["date"], "2025-03-01");
        assert_eq!(diary.payload()["id"], id.to_string());

        assert_eq!(ServerEvent::MissionSaved { date, id }.name(), "mission_saved");
    }
}
