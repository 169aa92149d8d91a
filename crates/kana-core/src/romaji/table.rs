use std::sync::OnceLock;

use super::config::{parse_table_toml, TableError};
use super::symbol::{Consonant, Vowel};

pub const DEFAULT_TOML: &str = include_str!("default_table.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// One consonant row, in a, i, u, e, o order. `""` marks a non-syllable.
pub type Row = [String; 5];

/// The moraic nasal.
pub const HATSUON: &str = "ん";

/// Immutable `(consonant, vowel) -> kana` grid plus the vowel-alone row.
#[derive(Debug, Clone)]
pub struct KanaTable {
    vowels: Row,
    nasal: Row,
    rows: [Row; Consonant::COUNT],
}

impl KanaTable {
    pub(crate) fn from_parts(vowels: Row, nasal: Row, rows: [Row; Consonant::COUNT]) -> Self {
        Self {
            vowels,
            nasal,
            rows,
        }
    }

    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableError> {
        // Validate eagerly
        parse_table_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static KanaTable {
        static INSTANCE: OnceLock<KanaTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            parse_table_toml(toml_str).expect("conversion table TOML must be valid")
        })
    }

    pub fn vowel(&self, v: Vowel) -> &str {
        &self.vowels[v.index()]
    }

    /// Kana for `consonant + vowel`, `""` when the pair is not a syllable.
    pub fn kana(&self, c: Consonant, v: Vowel) -> &str {
        &self.rows[c.index()][v.index()]
    }

    /// な-row entry, used when a pending `n` meets a vowel.
    pub fn nasal(&self, v: Vowel) -> &str {
        &self.nasal[v.index()]
    }

    /// All rows keyed by their romaji letter, `n` included, in table order.
    pub fn rows(&self) -> impl Iterator<Item = (char, &Row)> {
        Consonant::ALL
            .into_iter()
            .map(|k| (k.as_char(), &self.rows[k.index()]))
            .chain(std::iter::once(('n', &self.nasal)))
    }

    pub fn vowel_row(&self) -> &Row {
        &self.vowels
    }
}

/// Returns the embedded default table TOML.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowels() {
        let table = KanaTable::global();
        let kana: Vec<&str> = Vowel::ALL.into_iter().map(|v| table.vowel(v)).collect();
        assert_eq!(kana, ["あ", "い", "う", "え", "お"]);
    }

    #[test]
    fn test_ka_row() {
        let table = KanaTable::global();
        assert_eq!(table.kana(Consonant::K, Vowel::A), "か");
        assert_eq!(table.kana(Consonant::K, Vowel::O), "こ");
    }

    #[test]
    fn test_nasal_row() {
        let table = KanaTable::global();
        assert_eq!(table.nasal(Vowel::A), "な");
        assert_eq!(table.nasal(Vowel::U), "ぬ");
    }

    #[test]
    fn test_gaps_in_y_and_w_rows() {
        let table = KanaTable::global();
        assert_eq!(table.kana(Consonant::Y, Vowel::I), "");
        assert_eq!(table.kana(Consonant::Y, Vowel::E), "");
        assert_eq!(table.kana(Consonant::Y, Vowel::U), "ゆ");
        assert_eq!(table.kana(Consonant::W, Vowel::U), "");
        assert_eq!(table.kana(Consonant::W, Vowel::O), "を");
    }

    #[test]
    fn test_unused_rows_are_empty() {
        let table = KanaTable::global();
        for k in [
            Consonant::C,
            Consonant::F,
            Consonant::V,
            Consonant::J,
            Consonant::L,
            Consonant::X,
        ] {
            for v in Vowel::ALL {
                assert_eq!(table.kana(k, v), "", "{}{}", k.as_char(), v.as_char());
            }
        }
    }

    #[test]
    fn test_full_rows_have_no_gaps() {
        let table = KanaTable::global();
        for row in "kstnhmrgzdbp".chars() {
            let (_, cells) = table.rows().find(|(c, _)| *c == row).unwrap();
            assert!(cells.iter().all(|k| !k.is_empty()), "row {row}");
        }
    }

    #[test]
    fn test_rows_lists_every_letter_once() {
        let table = KanaTable::global();
        let letters: String = table.rows().map(|(c, _)| c).collect();
        assert_eq!(letters.len(), 20);
        assert!(letters.contains('n'));
    }

    #[test]
    fn test_init_custom_rejects_invalid() {
        let err = KanaTable::init_custom("[rows]\n".to_string()).unwrap_err();
        assert!(matches!(err, TableError::Parse(_)));
    }
}
