use clap::{Parser, Subcommand};

use kana_cli::commands::cue_ops::{self, CueMode};
use kana_cli::commands::{config_ops, replay_ops, type_ops};

#[derive(Parser)]
#[command(name = "kanatool", about = "Kana kiosk engine diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run letters through the romaji engine and show every step
    Type {
        /// Lowercase romaji, e.g. "konnitiha"
        letters: String,
        /// Output as JSON lines instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the cues one keypress produces, as JSON
    Cue {
        /// HID usage id, decimal or 0x hex
        #[arg(value_parser = cue_ops::parse_keycode)]
        keycode: u8,
        /// Mode the keypress is handled in
        #[arg(long, value_enum, default_value = "alphabet")]
        mode: CueMode,
    },
    /// Feed a file of recorded HID reports through a session
    Replay {
        /// One report per line, hex bytes, '#' comments
        file: String,
        /// Output as JSON lines instead of text
        #[arg(long)]
        json: bool,
    },
    /// Kana table tools
    Table {
        #[command(subcommand)]
        action: TableAction,
    },
    /// Display and audio settings tools
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum TableAction {
    /// Export the default kana table as TOML
    Export,
    /// Validate a custom kana table TOML file
    Validate {
        /// Path to the TOML file
        file: String,
    },
    /// Print the default kana table as a grid
    Show,
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Export the default settings as TOML
    Export,
    /// Validate a custom settings TOML file
    Validate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Type { letters, json } => type_ops::type_cmd(&letters, json),
        Command::Cue { keycode, mode } => cue_ops::cue_cmd(keycode, mode),
        Command::Replay { file, json } => replay_ops::replay_cmd(&file, json),
        Command::Table { action } => match action {
            TableAction::Export => config_ops::table_export(),
            TableAction::Validate { file } => config_ops::table_validate(&file),
            TableAction::Show => config_ops::table_show(),
        },
        Command::Settings { action } => match action {
            SettingsAction::Export => config_ops::settings_export(),
            SettingsAction::Validate { file } => config_ops::settings_validate(&file),
        },
    }
}
