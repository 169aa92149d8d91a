//! Custom configuration, installed once before the first session is created.

use std::ffi::c_char;

use kana_core::romaji::{KanaTable, TableError};
use kana_core::settings::{self, SettingsError};

use super::ffi_guard;

pub const KANA_OK: u8 = 0;
/// Null pointer or text that is not UTF-8.
pub const KANA_ERR_ARG: u8 = 1;
pub const KANA_ERR_INVALID: u8 = 2;
pub const KANA_ERR_ALREADY_INITIALIZED: u8 = 3;

fn table_status(result: Result<(), TableError>) -> u8 {
    match result {
        Ok(()) => KANA_OK,
        Err(TableError::AlreadyInitialized) => KANA_ERR_ALREADY_INITIALIZED,
        Err(_) => KANA_ERR_INVALID,
    }
}

fn settings_status(result: Result<(), SettingsError>) -> u8 {
    match result {
        Ok(()) => KANA_OK,
        Err(SettingsError::AlreadyInitialized) => KANA_ERR_ALREADY_INITIALIZED,
        Err(_) => KANA_ERR_INVALID,
    }
}

/// Replace the embedded settings with `toml`. Must run before the first
/// `kana_session_new`.
#[no_mangle]
pub extern "C" fn kana_settings_init(toml: *const c_char) -> u8 {
    ffi_guard!(KANA_ERR_ARG;
        str: content = toml,
    );
    let result = settings::init_custom(content.to_string());
    if let Err(ref e) = result {
        tracing::debug!(error = %e, "custom settings rejected");
    }
    settings_status(result)
}

/// Replace the embedded kana table with `toml`. Must run before the first
/// `kana_session_new`.
#[no_mangle]
pub extern "C" fn kana_table_init(toml: *const c_char) -> u8 {
    ffi_guard!(KANA_ERR_ARG;
        str: content = toml,
    );
    let result = KanaTable::init_custom(content.to_string());
    if let Err(ref e) = result {
        tracing::debug!(error = %e, "custom kana table rejected");
    }
    table_status(result)
}
