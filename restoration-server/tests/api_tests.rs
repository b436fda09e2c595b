//! Integration tests for the Restoration Server API

use axum::http::StatusCode;
use axum_test::TestServer;
use restoration_core::journal::JournalStore;
use restoration_core::reflection::{MockProvider, ReflectionService};
use restoration_core::storage::MemoryStorage;
use restoration_core::{Language, ReadingSchedule, Settings};
use restoration_server::routes::create_router;
use restoration_server::state::AppState;
use serde_json::{json, Value};
use std::sync::Arc;

fn create_test_state(language: Language) -> AppState {
    let settings = Settings {
        language,
        ..Settings::default()
    };
    let journal = JournalStore::new(Arc::new(MemoryStorage::new()));
    let reflections = ReflectionService::new(Arc::new(MockProvider));

    AppState::with_services(settings, journal, reflections)
}

fn create_test_server() -> TestServer {
    let app = create_router(create_test_state(Language::Ko));
    TestServer::new(app).expect("Failed to create test server")
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_today_reading_on_epoch() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/reading/today")
        .add_query_param("date", "2025-01-01")
        .add_query_param("lang", "en")
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["reference"], "Haggai 1-2");
    assert_eq!(body["day"], 1);
    assert_eq!(body["total_days"], 27);
    assert_eq!(body["readings"][0]["book"], "Haggai");
    assert_eq!(body["readings"][1]["chapter"], 2);
    assert!(body["info"].as_str().unwrap().contains("27 days"));
}

#[tokio::test]
async fn test_today_reading_defaults_to_configured_language() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/reading/today")
        .add_query_param("date", "2025-01-02")
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["language"], "ko");
    assert_eq!(body["reference"], "스가랴 1-2장");
}

#[tokio::test]
async fn test_today_reading_wraps_across_books() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/reading/today")
        .add_query_param("date", "2025-01-27")
        .add_query_param("lang", "en")
        .await;

    let body: Value = response.json();
    assert_eq!(body["reference"], "Malachi 4 & Haggai 1");
    assert_eq!(body["day"], 27);
}

#[tokio::test]
async fn test_today_reading_rejects_bad_parameters() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/reading/today")
        .add_query_param("date", "2025-13-40")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .get("/api/v1/reading/today")
        .add_query_param("lang", "de")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_full_schedule() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/schedule")
        .add_query_param("lang", "en")
        .add_query_param("date", "2025-01-03")
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 27);
    assert_eq!(items[0], json!({ "day": 1, "reading": "Haggai 1-2" }));
    assert_eq!(items[26], json!({ "day": 27, "reading": "Malachi 4" }));
    assert_eq!(body["current_day"], 3);
    assert_eq!(body["title"], "Ezra-Nehemiah Era Reading Order");
}

#[tokio::test]
async fn test_history_and_messages() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/history")
        .add_query_param("lang", "en")
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["periods"][0]["year"], "586 BC");

    let response = server.get("/api/v1/messages").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["readingPlanTitle"], "에스라-느헤미야 시대 읽기 순서");
}

#[tokio::test]
async fn test_reflection_uses_mock_provider() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/reflections/meditation-guide")
        .add_query_param("date", "2025-01-01")
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["kind"], "meditation_guide");
    assert_eq!(body["source"], "mock");
    assert_eq!(body["reference"], "학개 1-2장");
    assert!(!body["text"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_reflection_kind() {
    let server = create_test_server();

    let response = server.get("/api/v1/reflections/sermon").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_diary_round_trip() {
    let server = create_test_server();

    let response = server.get("/api/v1/diary/2025-02-01").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["key"], "diary-2025-02-01");
    assert_eq!(body["entries"].as_array().unwrap().len(), 0);

    let response = server
        .post("/api/v1/diary/2025-02-01")
        .json(&json!({ "repentance": "Thankful for today", "dream": "Rebuild the wall" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let saved: Value = response.json();
    assert!(saved["id"].is_string());
    assert_eq!(saved["content"]["resolve"], "");

    let response = server.get("/api/v1/diary/2025-02-01").await;
    let body: Value = response.json();
    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], saved["id"]);
    assert_eq!(entries[0]["content"]["dream"], "Rebuild the wall");
}

#[tokio::test]
async fn test_blank_diary_is_rejected() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/diary/2025-02-01")
        .json(&json!({ "repentance": "   " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_mission_round_trip() {
    let server = create_test_server();

    for plan in ["Visit a neighbor", "Share lunch"] {
        let response = server
            .post("/api/v1/mission/2025-02-02")
            .json(&json!({ "plan": plan }))
            .await;
        response.assert_status(StatusCode::CREATED);
    }

    let response = server.get("/api/v1/mission/2025-02-02").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["key"], "mission-2025-02-02");
    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["content"], "Visit a neighbor");
    assert_eq!(entries[1]["content"], "Share lunch");

    // Other dates stay empty
    let body: Value = server.get("/api/v1/mission/2025-02-03").await.json();
    assert_eq!(body["entries"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_journal_rejects_invalid_date() {
    let server = create_test_server();

    let response = server.get("/api/v1/diary/yesterday").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_saving_broadcasts_event() {
    let state = create_test_state(Language::En);
    let mut rx = state.subscribe();
    let server = TestServer::new(create_router(state)).expect("Failed to create test server");

    let response = server
        .post("/api/v1/mission/2025-02-02")
        .json(&json!({ "plan": "Pray for the city" }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let event = rx.try_recv().expect("event should be broadcast");
    assert_eq!(event.name(), "mission_saved");
    assert_eq!(event.payload()["date"], "2025-02-02");
}

#[tokio::test]
async fn test_today_reading_without_date_uses_local_today() {
    let server = create_test_server();
    let today = ReadingSchedule::date_for(&chrono::Local::now());

    let body: Value = server
        .get("/api/v1/reading/today")
        .add_query_param("lang", "en")
        .await
        .json();

    // Midnight may pass between the request and the comparison
    let resolved: chrono::NaiveDate = serde_json::from_value(body["date"].clone()).unwrap();
    assert!(resolved == today || resolved == today.succ_opt().unwrap());
    let expected = ReadingSchedule::restoration().daily_reading(resolved, Language::En);
    assert_eq!(body["reference"], expected.reference());
}
