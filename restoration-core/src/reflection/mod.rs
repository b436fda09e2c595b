//! Generated reflections about the daily reading
//!
//! Reflections come from a generative text service. When no API key is
//! configured, or generation fails, localized sample text is served instead.

mod gemini;
pub mod mock;
pub mod prompt;

pub use gemini::{GeminiProvider, DEFAULT_BASE_URL, DEFAULT_MODEL};

use crate::config::Settings;
use crate::error::ReflectionError;
use crate::schedule::DailyReading;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Result type for reflection operations
pub type ReflectionResult<T> = std::result::Result<T, ReflectionError>;

/// The kinds of generated content shown alongside a reading
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReflectionKind {
    /// Full text of the day's chapters
    Passage,

    /// Meditation guide with questions
    MeditationGuide,

    /// God's intent and providence in the passage
    Intention,

    /// Historical background
    Context,

    /// Practical evangelism tips
    EvangelismTips,

    /// A prayer following the passage
    Prayer,
}

impl ReflectionKind {
    pub const ALL: [ReflectionKind; 6] = [
        ReflectionKind::Passage,
        ReflectionKind::MeditationGuide,
        ReflectionKind::Intention,
        ReflectionKind::Context,
        ReflectionKind::EvangelismTips,
        ReflectionKind::Prayer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReflectionKind::Passage => "passage",
            ReflectionKind::MeditationGuide => "meditation_guide",
            ReflectionKind::Intention => "intention",
            ReflectionKind::Context => "context",
            ReflectionKind::EvangelismTips => "evangelism_tips",
            ReflectionKind::Prayer => "prayer",
        }
    }

    /// Whether the prompt is built from the passage text rather than the reference
    pub fn needs_passage(self) -> bool {
        matches!(self, ReflectionKind::EvangelismTips | ReflectionKind::Prayer)
    }
}

impl fmt::Display for ReflectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReflectionKind {
    type Err = ReflectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        ReflectionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ReflectionError::UnknownKind(s.to_string()))
    }
}

/// Where a reflection's text came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReflectionSource {
    Generated,
    Mock,
}

/// Input to a reflection provider
#[derive(Debug, Clone)]
pub struct ReflectionRequest {
    pub kind: ReflectionKind,
    pub reading: DailyReading,

    /// Passage text for kinds that are grounded on it
    pub passage: Option<String>,
}

/// Generated (or sample) content for one kind
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reflection {
    pub kind: ReflectionKind,
    pub text: String,
    pub source: ReflectionSource,
}

/// A source of reflection text
#[async_trait]
pub trait ReflectionProvider: Send + Sync {
    async fn reflect(&self, request: &ReflectionRequest) -> ReflectionResult<Reflection>;
}

/// Serves the localized sample text
#[derive(Debug, Default, Clone, Copy)]
pub struct MockProvider;

#[async_trait]
impl ReflectionProvider for MockProvider {
    async fn reflect(&self, request: &ReflectionRequest) -> ReflectionResult<Reflection> {
        Ok(Reflection {
            kind: request.kind,
            text: mock::mock_text(request.kind, request.reading.language).to_string(),
            source: ReflectionSource::Mock,
        })
    }
}

/// Falls back to sample text whenever the inner provider fails
pub struct FallbackProvider<P> {
    inner: P,
}

impl<P> FallbackProvider<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<P: ReflectionProvider> ReflectionProvider for FallbackProvider<P> {
    async fn reflect(&self, request: &ReflectionRequest) -> ReflectionResult<Reflection> {
        match self.inner.reflect(request).await {
            Ok(reflection) => Ok(reflection),
            Err(e) => {
                tracing::warn!("Falling back to sample {}: {}", request.kind, e);
                MockProvider.reflect(request).await
            }
        }
    }
}

/// Resolves reflections for a daily reading
#[derive(Clone)]
pub struct ReflectionService {
    provider: Arc<dyn ReflectionProvider>,
}

impl ReflectionService {
    pub fn new(provider: Arc<dyn ReflectionProvider>) -> Self {
        Self { provider }
    }

    /// Generated content when an API key is configured, sample text otherwise
    pub fn from_settings(settings: &Settings) -> Self {
        let Some(key) = settings.api_key.as_deref() else {
            tracing::info!("No API key configured, serving sample reflections");
            return Self::new(Arc::new(MockProvider));
        };

        match GeminiProvider::new(key) {
            Ok(gemini) => {
                let gemini = gemini
                    .with_model(settings.model.clone())
                    .with_base_url(settings.api_base_url.clone());
                Self::new(Arc::new(FallbackProvider::new(gemini)))
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to initialize Gemini client, serving sample reflections: {}",
                    e
                );
                Self::new(Arc::new(MockProvider))
            }
        }
    }

    /// Content of `kind` for `reading`, fetching the passage first when needed
    pub async fn reflect(
        &self,
        kind: ReflectionKind,
        reading: &DailyReading,
    ) -> ReflectionResult<Reflection> {
        let passage = if kind.needs_passage() {
            let request = ReflectionRequest {
                kind: ReflectionKind::Passage,
                reading: *reading,
                passage: None,
            };
            Some(self.provider.reflect(&request).await?.text)
        } else {
            None
        };

        self.provider
            .reflect(&ReflectionRequest {
                kind,
                reading: *reading,
                passage,
            })
            .await
    }
}
