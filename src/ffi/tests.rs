use super::*;
use std::ffi::CStr;
use std::slice;

const RELEASE: [u8; 8] = [0; 8];

fn press(session: *mut KanaSession, modifiers: u8, keycode: u8) -> KanaResponse {
    let report = [modifiers, 0, keycode, 0, 0, 0, 0, 0];
    kana_session_handle_report(session, report.as_ptr(), report.len() as u32)
}

fn release(session: *mut KanaSession) {
    let resp = kana_session_handle_report(session, RELEASE.as_ptr(), 8);
    assert_eq!(resp.cues_len, 0);
    kana_response_free(resp);
}

fn cue_texts(resp: &KanaResponse) -> Vec<String> {
    if resp.cues.is_null() {
        return Vec::new();
    }
    unsafe {
        slice::from_raw_parts(resp.cues, resp.cues_len as usize)
            .iter()
            .map(|c| CStr::from_ptr(c.text).to_str().unwrap().to_string())
            .collect()
    }
}

fn audio_path(resp: &KanaResponse) -> Option<String> {
    if resp.audio.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(resp.audio) }.to_str().unwrap().to_string())
}

#[test]
fn test_ffi_version() {
    let v = unsafe { CStr::from_ptr(kana_engine_version()) };
    assert_eq!(v.to_str().unwrap(), "0.1.0");
}

#[test]
fn test_ffi_alphabet_key() {
    let session = kana_session_new();
    assert_eq!(kana_session_mode(session), 0);

    let resp = press(session, 0, 0x04);
    assert_eq!(resp.clear, 1);
    assert_eq!(cue_texts(&resp), ["A"]);
    assert_eq!(audio_path(&resp).as_deref(), Some("/A.wav"));
    assert_eq!(resp.has_volume, 0);
    unsafe {
        let cue = &*resp.cues;
        assert_eq!(cue.font_scale, 15);
        assert_eq!((cue.x, cue.y), (90, -20));
    }
    kana_response_free(resp);
    release(session);

    kana_session_free(session);
}

#[test]
fn test_ffi_romaji_roundtrip() {
    let session = kana_session_new();

    let resp = press(session, 0x01, 0x10); // Ctrl+M
    assert_eq!(cue_texts(&resp), ["ローマ字モード"]);
    assert!(audio_path(&resp).is_none());
    kana_response_free(resp);
    release(session);
    assert_eq!(kana_session_mode(session), 1);

    let resp = press(session, 0, 0x0E); // k
    assert_eq!(cue_texts(&resp), ["k"]);
    kana_response_free(resp);
    release(session);

    let glyph = unsafe { CStr::from_ptr(kana_session_pending_glyph(session)) };
    assert_eq!(glyph.to_str().unwrap(), "k");

    let resp = press(session, 0, 0x04); // a
    assert_eq!(cue_texts(&resp), ["か", "ka"]);
    assert_eq!(audio_path(&resp).as_deref(), Some("/か.wav"));
    kana_response_free(resp);
    release(session);

    let glyph = unsafe { CStr::from_ptr(kana_session_pending_glyph(session)) };
    assert_eq!(glyph.to_str().unwrap(), "");

    kana_session_free(session);
}

#[test]
fn test_ffi_held_key_is_empty() {
    let session = kana_session_new();
    let first = press(session, 0, 0x05);
    assert_eq!(cue_texts(&first), ["B"]);
    kana_response_free(first);

    let held = press(session, 0, 0x05);
    assert_eq!(held.clear, 0);
    assert!(held.cues.is_null());
    assert!(held._owned.is_null());
    kana_response_free(held);

    kana_session_free(session);
}

#[test]
fn test_ffi_swallowed_key_only_clears() {
    let session = kana_session_new();
    kana_response_free(press(session, 0x01, 0x10)); // Ctrl+M
    release(session);

    let resp = press(session, 0, 0x1E); // '1'
    assert_eq!(resp.clear, 1);
    assert!(resp.cues.is_null());
    assert_eq!(resp.cues_len, 0);
    assert!(resp.audio.is_null());
    assert!(resp._owned.is_null());
    kana_response_free(resp);

    kana_session_free(session);
}

#[test]
fn test_ffi_volume_chord() {
    let session = kana_session_new();
    let resp = press(session, 0x01, 0x4F);
    assert_eq!(resp.has_volume, 1);
    assert_eq!(resp.volume, 100);
    assert_eq!(cue_texts(&resp), ["volume: 100"]);
    kana_response_free(resp);
    kana_session_free(session);
}

#[test]
fn test_ffi_bad_arguments() {
    let session = kana_session_new();
    let short = [0u8, 0];
    let resp = kana_session_handle_report(session, short.as_ptr(), 2);
    assert!(resp.cues.is_null());
    kana_response_free(resp);

    let resp = kana_session_handle_report(session, std::ptr::null(), 8);
    assert!(resp.cues.is_null());
    kana_response_free(resp);

    let resp = kana_session_handle_report(std::ptr::null_mut(), RELEASE.as_ptr(), 8);
    assert!(resp.cues.is_null());
    kana_response_free(resp);

    assert_eq!(kana_session_mode(std::ptr::null()), 0);
    assert!(kana_session_pending_glyph(std::ptr::null_mut()).is_null());

    kana_session_free(session);
    kana_session_free(std::ptr::null_mut());
}

#[test]
fn test_ffi_config_init_rejects_bad_input() {
    assert_eq!(kana_settings_init(std::ptr::null()), KANA_ERR_ARG);
    assert_eq!(kana_table_init(std::ptr::null()), KANA_ERR_ARG);

    let broken = c"[layout".as_ptr();
    assert_eq!(kana_settings_init(broken), KANA_ERR_INVALID);
    assert_eq!(kana_table_init(broken), KANA_ERR_INVALID);
}
