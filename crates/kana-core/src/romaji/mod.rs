//! Romaji-to-kana conversion engine.
//!
//! A Mealy machine over single keystrokes: each letter either commits one
//! kana syllable or is held as the one pending consonant (or pending `n`).
//! The syllable grid comes from an embedded TOML table that can be replaced
//! once at startup.

mod config;
mod engine;
mod symbol;
mod table;

pub use config::{parse_table_toml, TableError};
pub use engine::{EngineMode, EngineState, RomajiEngine, Step};
pub use symbol::{normalize, Consonant, InputSymbol, Vowel};
pub use table::{default_toml, KanaTable, Row, HATSUON};
