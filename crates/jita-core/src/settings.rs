//! Quiz settings loaded from TOML, following the same OnceLock pattern as
//! the romaji rules.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first
//!   `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::answer::{Form, FormSet};
use crate::verbs::VerbType;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub filter: FilterSettings,
    pub display: DisplaySettings,
}

/// Which cards enter the deck and in what order.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterSettings {
    pub levels: Vec<u8>,
    pub types: Vec<VerbType>,
    pub forms: Vec<Form>,
    pub fixed_order: bool,
}

impl FilterSettings {
    pub fn form_set(&self) -> FormSet {
        FormSet::from_forms(&self.forms)
    }
}

/// Presentation toggles, passed through to front ends untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySettings {
    pub furigana: bool,
    pub dictionary: bool,
    pub pairs: bool,
    pub english: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

/// Each selection list must keep at least one entry. The answer validator
/// itself tolerates an empty form set (it matches nothing); this guard
/// exists so a deck, once configured, can always be played.
fn validate(s: &Settings) -> Result<(), SettingsError> {
    fn non_empty<T>(field: &str, values: &[T]) -> Result<(), SettingsError> {
        if values.is_empty() {
            return Err(SettingsError::InvalidValue {
                field: field.to_string(),
                reason: "at least one entry must be selected".to_string(),
            });
        }
        Ok(())
    }

    non_empty("filter.levels", &s.filter.levels)?;
    non_empty("filter.types", &s.filter.types)?;
    non_empty("filter.forms", &s.filter.forms)?;

    for level in &s.filter.levels {
        if !(1..=6).contains(level) {
            return Err(SettingsError::InvalidValue {
                field: "filter.levels".to_string(),
                reason: format!("level must be 1..=6, got {level}"),
            });
        }
    }

    Ok(())
}
