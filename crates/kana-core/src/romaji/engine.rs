use tracing::debug;

use super::symbol::{Consonant, InputSymbol};
use super::table::{KanaTable, HATSUON};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineMode {
    /// Keys are shown as-is; the engine is not consulted.
    #[default]
    Alphabet,
    Romaji,
}

impl EngineMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Alphabet => Self::Romaji,
            Self::Romaji => Self::Alphabet,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    #[default]
    Initial,
    /// A consonant is held waiting for its vowel.
    ConsonantPending(Consonant),
    /// An `n` is held: ん or the start of な-row, decided by the next key.
    NasalPending,
}

/// What a single keystroke produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Step {
    /// Committed kana, `""` when the keystroke was absorbed.
    pub kana: String,
    /// Romaji the committed kana was spelled with (`"ka"`, `"n"`, `"nn"`).
    /// Empty whenever `kana` is.
    pub romaji: String,
}

impl Step {
    pub fn silent() -> Self {
        Self::default()
    }

    fn emit(kana: &str, romaji: String) -> Self {
        if kana.is_empty() {
            return Self::silent();
        }
        Self {
            kana: kana.to_string(),
            romaji,
        }
    }

    pub fn is_committed(&self) -> bool {
        !self.kana.is_empty()
    }
}

/// Incremental romaji-to-kana converter with one mora of lookahead.
///
/// Mode and state are only changed together: toggling the mode always drops
/// whatever was pending.
#[derive(Debug, Clone)]
pub struct RomajiEngine {
    table: &'static KanaTable,
    mode: EngineMode,
    state: EngineState,
}

impl Default for RomajiEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RomajiEngine {
    /// Engine over the global conversion table, starting in alphabet mode.
    pub fn new() -> Self {
        Self::with_table(KanaTable::global())
    }

    pub fn with_table(table: &'static KanaTable) -> Self {
        Self {
            table,
            mode: EngineMode::Alphabet,
            state: EngineState::Initial,
        }
    }

    pub fn mode(&self) -> EngineMode {
        self.mode
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Flip between alphabet and romaji mode, discarding anything pending.
    pub fn toggle_mode(&mut self) -> EngineMode {
        self.mode = self.mode.toggled();
        self.reset();
        debug!(mode = ?self.mode, "mode toggled");
        self.mode
    }

    pub fn reset(&mut self) {
        self.state = EngineState::Initial;
    }

    /// The not-yet-committed keystroke: the held consonant, `"n"`, or `""`.
    pub fn pending_glyph(&self) -> &'static str {
        match self.state {
            EngineState::Initial => "",
            EngineState::ConsonantPending(c) => c.as_str(),
            EngineState::NasalPending => "n",
        }
    }

    /// Feed one symbol. A no-op in alphabet mode.
    pub fn step(&mut self, symbol: InputSymbol) -> Step {
        if self.mode == EngineMode::Alphabet {
            return Step::silent();
        }

        use EngineState::*;
        let (next, step) = match (self.state, symbol) {
            (state, InputSymbol::None) => (state, Step::silent()),

            (Initial, InputSymbol::Vowel(v)) => (
                Initial,
                Step::emit(self.table.vowel(v), v.as_char().to_string()),
            ),
            (ConsonantPending(held), InputSymbol::Vowel(v)) => (
                Initial,
                Step::emit(
                    self.table.kana(held, v),
                    format!("{}{}", held.as_char(), v.as_char()),
                ),
            ),
            (NasalPending, InputSymbol::Vowel(v)) => (
                Initial,
                Step::emit(self.table.nasal(v), format!("n{}", v.as_char())),
            ),

            // A newer consonant replaces a held one without converting it.
            (Initial | ConsonantPending(_), InputSymbol::Consonant(c)) => {
                (ConsonantPending(c), Step::silent())
            }
            (NasalPending, InputSymbol::Consonant(c)) => {
                (ConsonantPending(c), Step::emit(HATSUON, "n".to_string()))
            }

            (Initial | ConsonantPending(_), InputSymbol::Nasal) => (NasalPending, Step::silent()),
            (NasalPending, InputSymbol::Nasal) => {
                (NasalPending, Step::emit(HATSUON, "nn".to_string()))
            }
        };

        debug!(?symbol, from = ?self.state, to = ?next, kana = %step.kana, "romaji step");
        self.state = next;
        step
    }
}
