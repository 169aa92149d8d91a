//! Kiosk driver state: turns raw HID keyboard reports into display and
//! audio work.
//!
//! `KioskSession` owns the romaji engine and the press latch, and returns
//! a [`Response`] per report that the firmware applies to its
//! [`RenderSink`] and [`AudioSink`].

mod key_handlers;
mod sink;
mod types;

#[cfg(test)]
mod tests;

use kana_core::cue::CueResolver;
use kana_core::romaji::{EngineMode, RomajiEngine};
use kana_core::settings::{settings, Settings, VolumeSettings};

pub use sink::{AudioSink, RenderSink};
pub use types::{BootReport, ReportError, Response};

/// One kiosk's input state. Not shared: the polling loop owns it.
pub struct KioskSession {
    engine: RomajiEngine,
    resolver: CueResolver<'static>,
    volume_settings: &'static VolumeSettings,

    /// Current speaker volume.
    volume: u8,
    /// Set on the first report of a press, cleared when all keys are up.
    press_latched: bool,
}

impl Default for KioskSession {
    fn default() -> Self {
        Self::new()
    }
}

impl KioskSession {
    pub fn new() -> Self {
        Self::with_settings(settings())
    }

    pub fn with_settings(settings: &'static Settings) -> Self {
        Self::with_engine(RomajiEngine::new(), settings)
    }

    pub fn with_engine(engine: RomajiEngine, settings: &'static Settings) -> Self {
        Self {
            engine,
            resolver: CueResolver::new(settings),
            volume_settings: &settings.volume,
            volume: settings.volume.initial,
            press_latched: false,
        }
    }

    pub fn mode(&self) -> EngineMode {
        self.engine.mode()
    }

    pub fn engine(&self) -> &RomajiEngine {
        &self.engine
    }

    /// Volume the speaker should be set to at startup.
    pub fn initial_volume(&self) -> u8 {
        self.volume_settings.initial
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// The not-yet-committed romaji keystroke, if any.
    pub fn pending_glyph(&self) -> &'static str {
        self.engine.pending_glyph()
    }
}
