use std::ffi::{c_char, CString};
use std::ptr;

use kana_core::romaji::EngineMode;
use kana_core::settings::settings;
use kana_session::{KioskSession, Response};

use super::{ffi_close, ffi_guard, into_handle};

/// Opaque handle owned by the firmware polling loop.
pub struct KanaSession {
    inner: KioskSession,
    /// Backing store for the last `kana_session_pending_glyph` result.
    pending: CString,
}

#[repr(C)]
pub struct KanaCue {
    pub text: *const c_char,
    pub font_scale: u8,
    pub x: i32,
    pub y: i32,
}

#[repr(C)]
pub struct KanaResponse {
    /// 1 = wipe the screen before drawing `cues`
    pub clear: u8,
    pub cues: *const KanaCue,
    pub cues_len: u32,
    /// Resource path to play, or NULL
    pub audio: *const c_char,
    /// 1 = set the speaker to `volume`
    pub has_volume: u8,
    pub volume: u8,
    pub(crate) _owned: *mut CueBuffer,
}

impl KanaResponse {
    pub(crate) fn empty() -> Self {
        Self {
            clear: 0,
            cues: ptr::null(),
            cues_len: 0,
            audio: ptr::null(),
            has_volume: 0,
            volume: 0,
            _owned: ptr::null_mut(),
        }
    }
}

/// Heap storage behind one `KanaResponse`: the cue array and every string
/// its pointers reference. Freed by `kana_response_free`.
pub(crate) struct CueBuffer {
    cues: Vec<KanaCue>,
    _text: Vec<CString>,
}

pub(crate) fn pack_response(resp: Response) -> KanaResponse {
    let mut text: Vec<CString> = Vec::with_capacity(resp.cues.len() + 1);
    let mut cues: Vec<KanaCue> = Vec::with_capacity(resp.cues.len());
    for cue in &resp.cues {
        let Ok(glyph) = CString::new(cue.text.as_str()) else {
            continue;
        };
        // CString's buffer does not move when the CString itself does.
        cues.push(KanaCue {
            text: glyph.as_ptr(),
            font_scale: cue.font_scale,
            x: cue.x,
            y: cue.y,
        });
        text.push(glyph);
    }

    let audio = match resp
        .audio
        .as_ref()
        .and_then(|cue| CString::new(settings().audio.path_for(cue)).ok())
    {
        Some(path) => {
            let p = path.as_ptr();
            text.push(path);
            p
        }
        None => ptr::null(),
    };

    let mut packed = KanaResponse {
        clear: resp.clear as u8,
        audio,
        has_volume: resp.volume.is_some() as u8,
        volume: resp.volume.unwrap_or(0),
        ..KanaResponse::empty()
    };
    if text.is_empty() {
        return packed;
    }

    let buffer = into_handle(CueBuffer { cues, _text: text });
    // SAFETY: freshly allocated, released only by kana_response_free.
    let cues = unsafe { &(*buffer).cues };
    if !cues.is_empty() {
        packed.cues = cues.as_ptr();
        packed.cues_len = cues.len() as u32;
    }
    packed._owned = buffer;
    packed
}

#[no_mangle]
pub extern "C" fn kana_session_new() -> *mut KanaSession {
    into_handle(KanaSession {
        inner: KioskSession::new(),
        pending: CString::default(),
    })
}

ffi_close!(kana_session_free, KanaSession);

/// Feed one HID boot report. Short reports and null pointers produce the
/// empty response.
#[no_mangle]
pub extern "C" fn kana_session_handle_report(
    session: *mut KanaSession,
    report: *const u8,
    len: u32,
) -> KanaResponse {
    ffi_guard!(KanaResponse::empty();
        mut: session = session,
    );
    if report.is_null() {
        return KanaResponse::empty();
    }
    let bytes = unsafe { std::slice::from_raw_parts(report, len as usize) };
    match session.inner.handle_report(bytes) {
        Ok(resp) => pack_response(resp),
        Err(e) => {
            tracing::debug!(error = %e, "report dropped");
            KanaResponse::empty()
        }
    }
}

#[no_mangle]
pub extern "C" fn kana_response_free(response: KanaResponse) {
    unsafe { super::free_handle(response._owned) };
}

/// 0 = alphabet, 1 = romaji
#[no_mangle]
pub extern "C" fn kana_session_mode(session: *const KanaSession) -> u8 {
    ffi_guard!(0;
        ref: session = session,
    );
    match session.inner.mode() {
        EngineMode::Alphabet => 0,
        EngineMode::Romaji => 1,
    }
}

/// The held romaji keystroke ("" when none). Valid until the next call on
/// this session.
#[no_mangle]
pub extern "C" fn kana_session_pending_glyph(session: *mut KanaSession) -> *const c_char {
    ffi_guard!(ptr::null();
        mut: session = session,
    );
    session.pending = CString::new(session.inner.pending_glyph()).unwrap_or_default();
    session.pending.as_ptr()
}
