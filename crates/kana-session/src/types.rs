use kana_core::cue::{AudioCue, DisplayCue};

// Boot keyboard report modifier bits
pub(crate) mod modifier {
    pub const LEFT_CTRL: u8 = 0x01;
    pub const RIGHT_CTRL: u8 = 0x10;
}

/// Modifier byte, reserved byte, first key slot.
const MIN_REPORT_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    #[error("HID report too short: {0} bytes, need at least 3")]
    TooShort(usize),
}

/// The parts of a USB HID boot keyboard report the kiosk reads:
/// `[modifiers, reserved, key0, key1, ..]`. Only the first key slot counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootReport {
    pub modifiers: u8,
    pub keycode: u8,
}

impl BootReport {
    pub fn parse(bytes: &[u8]) -> Result<Self, ReportError> {
        if bytes.len() < MIN_REPORT_LEN {
            return Err(ReportError::TooShort(bytes.len()));
        }
        Ok(Self {
            modifiers: bytes[0],
            keycode: bytes[2],
        })
    }

    /// Either Ctrl key held.
    pub fn ctrl(&self) -> bool {
        self.modifiers & (modifier::LEFT_CTRL | modifier::RIGHT_CTRL) != 0
    }

    /// Left Ctrl and nothing else.
    pub fn left_ctrl_only(&self) -> bool {
        self.modifiers == modifier::LEFT_CTRL
    }

    /// All keys up.
    pub fn is_release(&self) -> bool {
        self.keycode == 0
    }
}

/// What the caller should do after one report: everything the render and
/// audio sinks need, in one record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response {
    /// Wipe the screen before drawing `cues`.
    pub clear: bool,
    pub cues: Vec<DisplayCue>,
    pub audio: Option<AudioCue>,
    /// New speaker volume.
    pub volume: Option<u8>,
}

impl Response {
    /// Nothing to do: a held key or the all-keys-up report.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Wipe the screen, draw `cues` and play the first sound among them.
    /// Every handled press goes through here, even one that draws nothing.
    pub(crate) fn show(cues: Vec<DisplayCue>) -> Self {
        let audio = cues.iter().find_map(|c| c.audio.clone());
        Self {
            clear: true,
            cues,
            audio,
            volume: None,
        }
    }

    pub fn is_idle(&self) -> bool {
        !self.clear && self.cues.is_empty() && self.audio.is_none() && self.volume.is_none()
    }
}
