use serde::Serialize;

use kana_core::romaji::{EngineState, InputSymbol, RomajiEngine};

/// One letter's trip through the engine.
#[derive(Debug, Serialize)]
pub struct TypeStep {
    pub key: char,
    pub symbol: String,
    pub kana: String,
    pub romaji: String,
    pub state: String,
    pub pending: &'static str,
}

fn describe_symbol(symbol: InputSymbol) -> String {
    match symbol {
        InputSymbol::Vowel(v) => format!("vowel {}", v.as_char()),
        InputSymbol::Consonant(c) => format!("consonant {}", c.as_str()),
        InputSymbol::Nasal => "nasal".to_string(),
        InputSymbol::None => "none".to_string(),
    }
}

fn describe_state(state: EngineState) -> String {
    match state {
        EngineState::Initial => "initial".to_string(),
        EngineState::ConsonantPending(c) => format!("pending {}", c.as_str()),
        EngineState::NasalPending => "pending n".to_string(),
    }
}

/// Run `letters` through a fresh romaji-mode engine.
pub fn trace(letters: &str) -> Vec<TypeStep> {
    let mut engine = RomajiEngine::new();
    engine.toggle_mode();
    letters
        .chars()
        .map(|key| {
            let symbol = InputSymbol::from_char(key);
            let step = engine.step(symbol);
            TypeStep {
                key,
                symbol: describe_symbol(symbol),
                kana: step.kana,
                romaji: step.romaji,
                state: describe_state(engine.state()),
                pending: engine.pending_glyph(),
            }
        })
        .collect()
}

pub fn type_cmd(letters: &str, json: bool) {
    let steps = trace(letters);
    if json {
        for step in &steps {
            match serde_json::to_string(step) {
                Ok(line) => println!("{line}"),
                Err(e) => eprintln!("Error serializing step: {e}"),
            }
        }
        return;
    }

    for step in &steps {
        let out = if step.kana.is_empty() {
            "-".to_string()
        } else {
            format!("{} ({})", step.kana, step.romaji)
        };
        println!("{}  {:<12} {:<10} {}", step.key, step.symbol, out, step.state);
    }
    let text: String = steps.iter().map(|s| s.kana.as_str()).collect();
    println!("=> {text}");
}
