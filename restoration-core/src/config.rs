//! Environment-driven settings shared by the CLI and server

use crate::error::{RestorationError, Result};
use crate::locale::Language;
use crate::reflection::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const DATA_PATH_VAR: &str = "RESTORATION_DATA_PATH";
pub const LANG_VAR: &str = "RESTORATION_LANG";
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];
pub const MODEL_VAR: &str = "GEMINI_MODEL";
pub const BASE_URL_VAR: &str = "GEMINI_BASE_URL";
pub const BIND_VAR: &str = "RESTORATION_BIND";
pub const CORS_VAR: &str = "RESTORATION_CORS_ORIGINS";

/// Variables only the server reads
pub const SERVER_VARS: [&str; 2] = [BIND_VAR, CORS_VAR];

/// Value shipped in sample env files; treated as no key at all
const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

const DEFAULT_DATA_PATH: &str = "./restoration_data";
const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Root directory for journal records
    pub data_path: PathBuf,

    /// Language used when none is requested
    pub language: Language,

    /// Generative API key; sample reflections are served without one
    pub api_key: Option<String>,

    pub model: String,
    pub api_base_url: String,

    /// Server listen address
    pub bind_addr: SocketAddr,

    /// `*` or a comma-separated origin list; localhost origins when unset
    pub cors_origins: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            language: Language::default(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base_url: DEFAULT_BASE_URL.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            cors_origins: None,
        }
    }
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings for a client of the journal, ignoring server-only variables
    pub fn client_from_env() -> Result<Self> {
        Self::client_from_lookup(|name| std::env::var(name).ok())
    }

    pub fn client_from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup(|name| {
            if SERVER_VARS.contains(&name) {
                None
            } else {
                lookup(name)
            }
        })
    }

    /// Create the data directory if needed
    pub async fn ensure_data_dir(&self) -> Result<&Path> {
        tokio::fs::create_dir_all(&self.data_path).await?;
        Ok(&self.data_path)
    }

    /// Read settings through `lookup`; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let language = match get(LANG_VAR) {
            Some(tag) => tag.parse()?,
            None => defaults.language,
        };

        let bind_addr: SocketAddr = get(BIND_VAR)
            .unwrap_or_else(|| DEFAULT_BIND.to_string())
            .parse()
            .map_err(|e| RestorationError::Config(format!("invalid {}: {}", BIND_VAR, e)))?;

        let api_key = API_KEY_VARS
            .iter()
            .find_map(|name| get(*name))
            .filter(|key| key != PLACEHOLDER_API_KEY);

        Ok(Self {
            data_path: get(DATA_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            language,
            api_key,
            model: get(MODEL_VAR).unwrap_or(defaults.model),
            api_base_url: get(BASE_URL_VAR).unwrap_or(defaults.api_base_url),
            bind_addr,
            cors_origins: get(CORS_VAR),
        })
    }
}
