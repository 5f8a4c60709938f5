//! User preferences: theme and language.

use std::fmt;
use std::str::FromStr;

use crate::storage::KvStore;

const THEME_KEY: &str = "settings_theme";
const LANGUAGE_KEY: &str = "settings_language";

/// Color scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::System => "system",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(Theme::System),
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!(
                "Invalid theme '{}'. Valid options: system, light, dark",
                s
            )),
        }
    }
}

/// Display language preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    System,
    En,
    Tr,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::System => "system",
            Language::En => "en",
            Language::Tr => "tr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(Language::System),
            "en" => Ok(Language::En),
            "tr" => Ok(Language::Tr),
            _ => Err(format!(
                "Invalid language '{}'. Valid options: system, en, tr",
                s
            )),
        }
    }
}

/// Pass-through store over two raw string keys.
///
/// Getters re-read the stored string on every call and fall back to
/// `system` when it doesn't parse. No cross-field invariants.
pub struct SettingsStore {
    kv: KvStore,
}

impl SettingsStore {
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    pub fn theme(&self) -> Theme {
        self.kv
            .get::<String>(THEME_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.kv.set(THEME_KEY, &theme.as_str());
    }

    pub fn language(&self) -> Language {
        self.kv
            .get::<String>(LANGUAGE_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    pub fn set_language(&self, language: Language) {
        self.kv.set(LANGUAGE_KEY, &language.as_str());
    }
}
