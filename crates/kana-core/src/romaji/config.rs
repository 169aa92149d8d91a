use std::collections::BTreeMap;

use serde::Deserialize;

use super::symbol::{Consonant, Vowel};
use super::table::{KanaTable, Row};
use crate::unicode::is_single_hiragana;

#[derive(Deserialize)]
struct TableConfig {
    vowels: Vec<String>,
    rows: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("expected 5 vowel entries, got {0}")]
    VowelCount(usize),
    #[error("empty vowel entry for '{0}'")]
    EmptyVowel(char),
    #[error("unknown consonant row: {0}")]
    UnknownRow(String),
    #[error("row {row} has {len} entries, expected 5")]
    RowLength { row: String, len: usize },
    #[error("[rows] is missing the {0} row")]
    MissingRow(char),
    #[error("row {row} needs a kana for '{vowel}'")]
    MissingKana { row: char, vowel: char },
    #[error("row {row} must stay empty for '{vowel}'")]
    UnexpectedKana { row: char, vowel: char },
    #[error("row {row}: {value:?} is not a single hiragana")]
    NotKana { row: String, value: String },
    #[error("conversion table already initialized")]
    AlreadyInitialized,
}

/// Rows that are recognized as consonants but never produce kana.
const SILENT_ROWS: [char; 6] = ['c', 'f', 'v', 'j', 'l', 'x'];

/// Whether `row + vowel` is a syllable. The table may respell syllables but
/// not add or remove them.
fn is_syllable(row: char, v: Vowel) -> bool {
    match row {
        'y' => !matches!(v, Vowel::I | Vowel::E),
        'w' => !matches!(v, Vowel::I | Vowel::U | Vowel::E),
        _ => !SILENT_ROWS.contains(&row),
    }
}

fn to_row(row: &str, cells: Vec<String>) -> Result<Row, TableError> {
    let len = cells.len();
    let cells: Row = cells.try_into().map_err(|_| TableError::RowLength {
        row: row.to_string(),
        len,
    })?;
    if let Some(bad) = cells
        .iter()
        .find(|k| !k.is_empty() && !is_single_hiragana(k))
    {
        return Err(TableError::NotKana {
            row: row.to_string(),
            value: bad.clone(),
        });
    }
    Ok(cells)
}

fn check_shape(letter: char, row: &Row) -> Result<(), TableError> {
    for v in Vowel::ALL {
        match (is_syllable(letter, v), row[v.index()].is_empty()) {
            (true, true) => {
                return Err(TableError::MissingKana {
                    row: letter,
                    vowel: v.as_char(),
                })
            }
            (false, false) => {
                return Err(TableError::UnexpectedKana {
                    row: letter,
                    vowel: v.as_char(),
                })
            }
            _ => {}
        }
    }
    Ok(())
}

/// Parse and validate a conversion table.
///
/// Every syllable row (`k`..`p`, `n`) must be present. The silent rows
/// (`c f v j l x`) may be omitted and must be empty when given.
pub fn parse_table_toml(toml_str: &str) -> Result<KanaTable, TableError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    if config.vowels.len() != Vowel::ALL.len() {
        return Err(TableError::VowelCount(config.vowels.len()));
    }
    let vowels = to_row("vowels", config.vowels)?;
    for v in Vowel::ALL {
        if vowels[v.index()].is_empty() {
            return Err(TableError::EmptyVowel(v.as_char()));
        }
    }

    let mut nasal: Option<Row> = None;
    let mut rows: [Option<Row>; Consonant::COUNT] = Default::default();

    for (key, cells) in config.rows {
        let mut chars = key.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(TableError::UnknownRow(key)),
        };
        let slot = if letter == 'n' {
            &mut nasal
        } else if let Some(k) = Consonant::from_char(letter) {
            &mut rows[k.index()]
        } else {
            return Err(TableError::UnknownRow(key));
        };
        let row = to_row(&key, cells)?;
        check_shape(letter, &row)?;
        *slot = Some(row);
    }

    let nasal = nasal.ok_or(TableError::MissingRow('n'))?;
    let mut filled: [Row; Consonant::COUNT] = Default::default();
    for k in Consonant::ALL {
        match rows[k.index()].take() {
            Some(row) => filled[k.index()] = row,
            None if SILENT_ROWS.contains(&k.as_char()) => {}
            None => return Err(TableError::MissingRow(k.as_char())),
        }
    }

    Ok(KanaTable::from_parts(vowels, nasal, filled))
}
