//! Character-level Unicode classification for kana table entries.

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check that a table cell is exactly one hiragana.
pub fn is_single_hiragana(s: &str) -> bool {
    let mut chars = s.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if is_hiragana(c))
}
