//! Application state

use anyhow::{Context, Result};
use chrono::NaiveDate;
use restoration_core::journal::JournalStore;
use restoration_core::reflection::ReflectionService;
use restoration_core::storage::LocalStorage;
use restoration_core::{Language, ReadingSchedule, Settings};
use std::sync::Arc;
use tokio::sync::broadcast;
use uuid::Uuid;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,

    /// The reading schedule all dates resolve against
    pub schedule: &'static ReadingSchedule,

    /// Diary and mission persistence
    pub journal: JournalStore,

    /// Generated reflections (or samples without an API key)
    pub reflections: ReflectionService,

    /// Channel for SSE events
    pub event_tx: broadcast::Sender<ServerEvent>,
}

/// Server-sent events
#[derive(Debug, Clone)]
pub enum ServerEvent {
    /// A diary entry was saved
    DiarySaved { date: NaiveDate, id: Uuid },

    /// A mission plan was saved
    MissionSaved { date: NaiveDate, id: Uuid },
}

impl AppState {
    /// Create state backed by local storage under the configured data path
    pub async fn new(settings: Settings) -> Result<Self> {
        let data_dir = settings
            .ensure_data_dir()
            .await
            .with_context(|| format!("Failed to create data directory {:?}", settings.data_path))?;

        let journal = JournalStore::new(Arc::new(LocalStorage::new(data_dir)));
        let reflections = ReflectionService::from_settings(&settings);

        Ok(Self::with_services(settings, journal, reflections))
    }

    /// Assemble state from explicit services
    pub fn with_services(
        settings: Settings,
        journal: JournalStore,
        reflections: ReflectionService,
    ) -> Self {
        let (event_tx, _) = broadcast::channel(100);

        Self {
            settings: Arc::new(settings),
            schedule: ReadingSchedule::restoration(),
            journal,
            reflections,
            event_tx,
        }
    }

    /// Requested language, or the configured default
    pub fn language(&self, requested: Option<Language>) -> Language {
        requested.unwrap_or(self.settings.language)
    }

    /// Subscribe to server events
    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.event_tx.subscribe()
    }

    /// Broadcast an event
    pub fn broadcast(&self, event: ServerEvent) {
        // Ignore errors (no subscribers)
        let _ = self.event_tx.send(event);
    }
}
