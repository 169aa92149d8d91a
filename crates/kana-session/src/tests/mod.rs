mod proptest_fsm;

use kana_core::keycode::usage;

use super::types::modifier;
use super::KioskSession;
use super::Response;

pub(super) const RELEASE: [u8; 8] = [0; 8];

/// A boot report with one key down.
pub(super) fn report(modifiers: u8, keycode: u8) -> [u8; 8] {
    [modifiers, 0, keycode, 0, 0, 0, 0, 0]
}

/// HID usage id for a lowercase letter.
pub(super) fn letter(c: char) -> u8 {
    assert!(c.is_ascii_lowercase());
    usage::A + (c as u8 - b'a')
}

/// Press and release one key, returning the press response.
pub(super) fn tap(session: &mut KioskSession, modifiers: u8, keycode: u8) -> Response {
    let resp = session.handle_report(&report(modifiers, keycode)).unwrap();
    let up = session.handle_report(&RELEASE).unwrap();
    assert!(up.is_idle());
    resp
}

pub(super) fn ctrl_m(session: &mut KioskSession) -> Response {
    tap(session, modifier::LEFT_CTRL, usage::M)
}

/// Type a string of lowercase letters, one tap each.
pub(super) fn type_string(session: &mut KioskSession, s: &str) -> Vec<Response> {
    s.chars().map(|c| tap(session, 0, letter(c))).collect()
}

pub(super) fn romaji_session() -> KioskSession {
    let mut session = KioskSession::new();
    ctrl_m(&mut session);
    session
}

pub(super) fn texts(resp: &Response) -> Vec<&str> {
    resp.cues.iter().map(|c| c.text.as_str()).collect()
}

pub(super) fn audio(resp: &Response) -> Option<&str> {
    resp.audio.as_ref().map(|a| a.as_str())
}
