use clap::ValueEnum;

use kana_core::cue::{CueResolver, DisplayCue};
use kana_session::KioskSession;

use super::die;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CueMode {
    Alphabet,
    Romaji,
}

/// Accepts decimal (`4`) or hex (`0x04`).
pub fn parse_keycode(s: &str) -> Result<u8, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse::<u8>(),
    };
    parsed.map_err(|e| format!("invalid keycode {s:?}: {e}"))
}

/// Cues a single keypress produces from a fresh session in `mode`.
pub fn cues_for(keycode: u8, mode: CueMode) -> Vec<DisplayCue> {
    match mode {
        CueMode::Alphabet => vec![CueResolver::default().alphabet(keycode)],
        CueMode::Romaji => {
            let mut session = KioskSession::new();
            session.toggle_mode();
            session.handle_key(keycode).cues
        }
    }
}

pub fn cue_cmd(keycode: u8, mode: CueMode) {
    let cues = cues_for(keycode, mode);
    let json = die!(serde_json::to_string_pretty(&cues), "Error: {}");
    println!("{json}");
}
