//! Global settings loaded from TOML, following the same OnceLock pattern as
//! the conversion table.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::cue::AudioCue;

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
    pub layout: LayoutSettings,
    pub labels: LabelSettings,
    pub audio: AudioSettings,
    pub volume: VolumeSettings,
}

/// Where and how large a cue is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Placement {
    pub font_scale: u8,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LayoutSettings {
    pub glyph: Placement,
    pub label: Placement,
    pub arrow: Placement,
    pub kana: Placement,
    pub pending: Placement,
    pub romaji: Placement,
    pub mode: Placement,
    pub volume: Placement,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabelSettings {
    pub alphabet_mode: String,
    pub romaji_mode: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioSettings {
    /// Played for keys with no sound of their own.
    pub fallback: AudioCue,
    /// Directory prefix on the sound storage, with leading and trailing `/`.
    pub root: String,
    pub extension: String,
}

impl AudioSettings {
    /// Resource path for a cue, e.g. `/A.wav`.
    pub fn path_for(&self, cue: &AudioCue) -> String {
        format!("{}{}.{}", self.root, cue.as_str(), self.extension)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VolumeSettings {
    pub initial: u8,
    pub low: u8,
    pub high: u8,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn invalid(field: &str, reason: &str) -> SettingsError {
    SettingsError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive_scale {
        ($section:ident . $field:ident) => {
            if s.$section.$field.font_scale == 0 {
                return Err(invalid(
                    concat!(stringify!($section), ".", stringify!($field), ".font_scale"),
                    "must be positive",
                ));
            }
        };
    }

    check_positive_scale!(layout.glyph);
    check_positive_scale!(layout.label);
    check_positive_scale!(layout.arrow);
    check_positive_scale!(layout.kana);
    check_positive_scale!(layout.pending);
    check_positive_scale!(layout.romaji);
    check_positive_scale!(layout.mode);
    check_positive_scale!(layout.volume);

    if s.labels.alphabet_mode.is_empty() {
        return Err(invalid("labels.alphabet_mode", "must not be empty"));
    }
    if s.labels.romaji_mode.is_empty() {
        return Err(invalid("labels.romaji_mode", "must not be empty"));
    }

    if !s.audio.root.starts_with('/') || !s.audio.root.ends_with('/') {
        return Err(invalid("audio.root", "must start and end with '/'"));
    }
    if s.audio.extension.is_empty() || !s.audio.extension.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(invalid("audio.extension", "must be ASCII alphanumeric"));
    }

    if s.volume.low > s.volume.high {
        return Err(invalid("volume.low", "must not exceed volume.high"));
    }

    Ok(())
}
