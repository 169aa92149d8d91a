use std::fs;

use unicode_width::UnicodeWidthStr;

use kana_core::romaji::{self, KanaTable, Vowel};
use kana_core::settings;

use super::die;

/// Display width of one grid cell.
const CELL_WIDTH: usize = 4;

pub fn table_export() {
    print!("{}", romaji::default_toml());
}

pub fn table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let table = die!(romaji::parse_table_toml(&content), "Error: {}");
    println!("OK: {} syllables", syllable_count(&table));
}

pub fn table_show() {
    print!("{}", format_grid(KanaTable::global()));
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: audio={}*.{} fallback={}, volume={}/{}/{}",
        s.audio.root, s.audio.extension, s.audio.fallback, s.volume.initial, s.volume.low, s.volume.high
    );
}

/// Number of non-empty entries, bare vowels included.
pub fn syllable_count(table: &KanaTable) -> usize {
    let vowels = table.vowel_row().iter().filter(|k| !k.is_empty()).count();
    let rows: usize = table
        .rows()
        .map(|(_, row)| row.iter().filter(|k| !k.is_empty()).count())
        .sum();
    vowels + rows
}

fn pad(cell: &str) -> String {
    let width = UnicodeWidthStr::width(cell);
    format!("{cell}{}", " ".repeat(CELL_WIDTH.saturating_sub(width)))
}

fn push_line<'a>(out: &mut String, label: &str, cells: impl IntoIterator<Item = &'a str>) {
    let mut line = pad(label);
    for cell in cells {
        line.push_str(&pad(if cell.is_empty() { "-" } else { cell }));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Render the table as a consonant-by-vowel grid, `-` for gaps.
pub fn format_grid(table: &KanaTable) -> String {
    let mut out = String::new();
    let header: Vec<String> = Vowel::ALL.iter().map(|v| v.as_char().to_string()).collect();
    push_line(&mut out, "", header.iter().map(String::as_str));
    push_line(&mut out, "", table.vowel_row().iter().map(String::as_str));
    for (c, row) in table.rows() {
        push_line(&mut out, &c.to_string(), row.iter().map(String::as_str));
    }
    out
}
