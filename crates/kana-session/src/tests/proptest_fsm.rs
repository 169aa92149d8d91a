//! Property-based tests for the report-driven session.
//!
//! Generates random report sequences via proptest and checks structural
//! invariants after every report.

use proptest::prelude::*;

use kana_core::romaji::EngineMode;
use kana_core::settings::settings;

use super::*;

#[derive(Debug, Clone)]
enum Action {
    Letter(char),
    CtrlM,
    VolumeHigh,
    VolumeLow,
    /// A non-letter key without modifiers.
    Other(u8),
    /// All keys up.
    Release,
    /// Send the previous report again, as the keyboard does while a key is held.
    Repeat,
}

fn arb_letter() -> impl Strategy<Value = char> {
    prop_oneof![
        3 => prop::sample::select(vec!['a', 'i', 'u', 'e', 'o', 'n']),
        1 => prop::sample::select(('a'..='z').collect::<Vec<_>>()),
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        40 => arb_letter().prop_map(Action::Letter),
        4 => Just(Action::CtrlM),
        2 => Just(Action::VolumeHigh),
        2 => Just(Action::VolumeLow),
        4 => prop::sample::select(vec![
            usage::SPACE,
            usage::ENTER,
            usage::TAB,
            usage::DIGIT_1,
            usage::AT,
            usage::UP,
            usage::RIGHT,
            0x39,
        ])
        .prop_map(Action::Other),
        30 => Just(Action::Release),
        8 => Just(Action::Repeat),
    ]
}

fn to_report(action: &Action, last: [u8; 8]) -> [u8; 8] {
    match action {
        Action::Letter(c) => report(0, letter(*c)),
        Action::CtrlM => report(modifier::LEFT_CTRL, usage::M),
        Action::VolumeHigh => report(modifier::LEFT_CTRL, usage::RIGHT),
        Action::VolumeLow => report(modifier::LEFT_CTRL, usage::LEFT),
        Action::Other(code) => report(0, *code),
        Action::Release => RELEASE,
        Action::Repeat => last,
    }
}

fn assert_invariants(
    session: &KioskSession,
    resp: &Response,
    bytes: &[u8; 8],
    was_held: bool,
    mode_before: EngineMode,
) {
    let volume = &settings().volume;

    // A held key or a release never does anything; every new press clears.
    let press_edge = !was_held && *bytes != RELEASE;
    if !press_edge {
        assert!(resp.is_idle(), "repeat must be idle, got {resp:?}");
        assert_eq!(session.mode(), mode_before);
    }
    assert_eq!(resp.clear, press_edge, "{resp:?}");

    // Audio always belongs to a drawn cue.
    if let Some(ref cue) = resp.audio {
        assert!(resp.cues.iter().any(|c| c.audio.as_ref() == Some(cue)));
    }

    // At most one grapheme is ever held back.
    assert!(session.pending_glyph().chars().count() <= 1);
    if session.mode() == EngineMode::Alphabet {
        assert_eq!(session.pending_glyph(), "");
    }

    let level = session.volume();
    assert!(
        level == volume.initial || level == volume.low || level == volume.high,
        "unexpected volume {level}"
    );
    if let Some(set) = resp.volume {
        assert_eq!(set, level);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn session_invariants_hold(actions in prop::collection::vec(arb_action(), 1..120)) {
        let mut session = KioskSession::new();
        let mut last = RELEASE;
        let mut held = false;

        for action in &actions {
            let bytes = to_report(action, last);
            let mode_before = session.mode();
            let resp = session.handle_report(&bytes).unwrap();
            assert_invariants(&session, &resp, &bytes, held, mode_before);

            if !held && matches!(action, Action::CtrlM) {
                assert_ne!(session.mode(), mode_before);
                assert_eq!(session.pending_glyph(), "");
                assert_eq!(resp.cues.len(), 1);
                assert!(resp.audio.is_none());
            }

            held = bytes != RELEASE;
            last = bytes;
        }
    }

    #[test]
    fn alphabet_mode_always_speaks(codes in prop::collection::vec(0u8..=0x65, 1..40)) {
        let mut session = KioskSession::new();
        for code in codes {
            let resp = tap(&mut session, 0, code);
            if code == 0 {
                // keycode 0 with no modifiers is a release
                prop_assert!(resp.is_idle());
                continue;
            }
            prop_assert_eq!(resp.cues.len(), 1);
            prop_assert!(resp.audio.is_some());
        }
    }
}
