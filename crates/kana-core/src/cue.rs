//! Presentation records handed to the display and speaker.
//!
//! [`CueResolver`] turns key codes and engine output into [`DisplayCue`]s.
//! It never draws or plays anything itself.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::keycode::{classify, Key};
use crate::romaji::{EngineMode, EngineState, Step};
use crate::settings::{settings, Placement, Settings};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AudioCueError {
    #[error("audio cue id is empty")]
    Empty,
    #[error("audio cue id {id:?} contains {ch:?}")]
    InvalidChar { id: String, ch: char },
}

/// Identifier of one sound resource, e.g. `A`, `Space`, `か`.
///
/// Validated on construction so it can be joined into a resource path
/// without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AudioCue(String);

impl AudioCue {
    pub fn new(id: impl Into<String>) -> Result<Self, AudioCueError> {
        let id = id.into();
        if id.is_empty() {
            return Err(AudioCueError::Empty);
        }
        if let Some(ch) = id
            .chars()
            .find(|&c| matches!(c, '/' | '\\' | '.') || c.is_whitespace() || c.is_control())
        {
            return Err(AudioCueError::InvalidChar { id, ch });
        }
        Ok(Self(id))
    }

    /// For ids from the fixed key tables, which are covered by tests.
    fn from_static(id: &'static str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AudioCue {
    type Error = AudioCueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AudioCue> for String {
    fn from(cue: AudioCue) -> Self {
        cue.0
    }
}

impl fmt::Display for AudioCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One thing to draw, and optionally a sound to play with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayCue {
    pub text: String,
    pub font_scale: u8,
    pub x: i32,
    pub y: i32,
    pub audio: Option<AudioCue>,
}

impl DisplayCue {
    fn at(text: impl Into<String>, placement: Placement, audio: Option<AudioCue>) -> Self {
        Self {
            text: text.into(),
            font_scale: placement.font_scale,
            x: placement.x,
            y: placement.y,
            audio,
        }
    }
}

/// Maps keys and engine output to cues using one set of layout settings.
#[derive(Debug, Clone, Copy)]
pub struct CueResolver<'a> {
    settings: &'a Settings,
}

impl Default for CueResolver<'static> {
    fn default() -> Self {
        Self::new(settings())
    }
}

impl<'a> CueResolver<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// The blank cue with the fallback bell, used for unmapped keys.
    pub fn fallback(&self) -> DisplayCue {
        DisplayCue::at(
            "",
            self.settings.layout.glyph,
            Some(self.settings.audio.fallback.clone()),
        )
    }

    /// Alphabet-mode cue for a raw keycode.
    pub fn alphabet(&self, keycode: u8) -> DisplayCue {
        self.key(classify(keycode))
    }

    pub fn key(&self, key: Key) -> DisplayCue {
        let layout = &self.settings.layout;
        match key {
            Key::Letter(c) | Key::Digit(c) => {
                let text = c.to_string();
                let audio = AudioCue(text.clone());
                DisplayCue::at(text, layout.glyph, Some(audio))
            }
            Key::Named(named) => {
                let placement = if named.is_arrow() {
                    layout.arrow
                } else {
                    layout.label
                };
                DisplayCue::at(
                    named.label(),
                    placement,
                    Some(AudioCue::from_static(named.audio_id())),
                )
            }
            Key::Unmapped => self.fallback(),
        }
    }

    /// Committed kana, spoken.
    pub fn kana(&self, kana: &str) -> DisplayCue {
        DisplayCue::at(kana, self.settings.layout.kana, AudioCue::new(kana).ok())
    }

    /// Small silent echo of the romaji that produced the last kana.
    pub fn romaji_echo(&self, romaji: &str) -> DisplayCue {
        DisplayCue::at(romaji, self.settings.layout.romaji, None)
    }

    /// The held consonant or `n`, silent.
    pub fn pending(&self, glyph: &str) -> DisplayCue {
        DisplayCue::at(glyph, self.settings.layout.pending, None)
    }

    /// Cues for one romaji-mode keystroke, given the step result and the
    /// engine state after it.
    pub fn romaji(&self, step: &Step, state: EngineState) -> Vec<DisplayCue> {
        if step.is_committed() {
            return vec![self.kana(&step.kana), self.romaji_echo(&step.romaji)];
        }
        match state {
            EngineState::ConsonantPending(c) => vec![self.pending(c.as_str())],
            EngineState::NasalPending => vec![self.pending("n")],
            EngineState::Initial => Vec::new(),
        }
    }

    pub fn mode(&self, mode: EngineMode) -> DisplayCue {
        let labels = &self.settings.labels;
        let text = match mode {
            EngineMode::Alphabet => &labels.alphabet_mode,
            EngineMode::Romaji => &labels.romaji_mode,
        };
        DisplayCue::at(text.as_str(), self.settings.layout.mode, None)
    }

    pub fn volume(&self, level: u8) -> DisplayCue {
        DisplayCue::at(
            format!("volume: {level}"),
            self.settings.layout.volume,
            None,
        )
    }
}
