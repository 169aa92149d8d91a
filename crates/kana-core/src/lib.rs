//! Core of the kana kiosk: key code normalization, the romaji-to-kana
//! engine, and the mapping from keystrokes to display and audio cues.

pub mod cue;
pub mod keycode;
pub mod romaji;
pub mod settings;
pub mod unicode;
