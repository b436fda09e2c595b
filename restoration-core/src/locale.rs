//! Supported display languages

use crate::error::LanguageError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language for every text-bearing value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Korean
    #[default]
    Ko,

    /// English
    En,
}

impl Language {
    /// Every supported language, in display order
    pub const ALL: [Language; 2] = [Language::Ko, Language::En];

    /// The locale tag (`ko` or `en`)
    pub fn tag(self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|language| language.tag() == tag)
            .ok_or_else(|| LanguageError::Unsupported(s.to_string()))
    }
}

/// A value carried once per supported language
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Localized<T> {
    pub ko: T,
    pub en: T,
}

impl<T> Localized<T> {
    pub const fn new(ko: T, en: T) -> Self {
        Self { ko, en }
    }

    /// Select the value for `language`
    pub fn get(&self, language: Language) -> &T {
        match language {
            Language::Ko => &self.ko,
            Language::En => &self.en,
        }
    }
}
