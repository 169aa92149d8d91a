//! USB HID keyboard usage ids and their classification.
//!
//! Only the subset of the usage page the kiosk reacts to is named here.
//! Everything else classifies as [`Key::Unmapped`].

/// HID keyboard usage ids (usage page 0x07).
pub mod usage {
    pub const A: u8 = 0x04;
    pub const M: u8 = 0x10;
    pub const Z: u8 = 0x1D;
    pub const DIGIT_1: u8 = 0x1E;
    pub const DIGIT_0: u8 = 0x27;
    pub const ENTER: u8 = 0x28;
    pub const TAB: u8 = 0x2B;
    pub const SPACE: u8 = 0x2C;
    /// `[` on US layouts, `@` on the JIS layout the kiosk ships with.
    pub const AT: u8 = 0x2F;
    pub const RIGHT: u8 = 0x4F;
    pub const LEFT: u8 = 0x50;
    pub const DOWN: u8 = 0x51;
    pub const UP: u8 = 0x52;
}

const DIGITS: [char; 10] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', '0'];

/// A keycode resolved to what the key means, independent of input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Latin letter, always uppercase.
    Letter(char),
    Digit(char),
    Named(NamedKey),
    Unmapped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedKey {
    Enter,
    Tab,
    Space,
    At,
    Right,
    Left,
    Down,
    Up,
}

impl NamedKey {
    /// Text drawn for the key.
    pub fn label(self) -> &'static str {
        match self {
            Self::Enter => "Enter",
            Self::Tab => "Tab",
            Self::Space => "Space",
            Self::At => "@",
            Self::Right => "→",
            Self::Left => "←",
            Self::Down => "↓",
            Self::Up => "↑",
        }
    }

    /// Audio resource id. Arrows use two-letter ids since their glyphs
    /// are not usable as file names.
    pub fn audio_id(self) -> &'static str {
        match self {
            Self::Enter => "Enter",
            Self::Tab => "Tab",
            Self::Space => "Space",
            Self::At => "at",
            Self::Right => "RA",
            Self::Left => "LA",
            Self::Down => "DA",
            Self::Up => "UA",
        }
    }

    pub fn is_arrow(self) -> bool {
        matches!(self, Self::Right | Self::Left | Self::Down | Self::Up)
    }
}

/// Classify a raw HID usage id. Total over `u8`.
pub fn classify(code: u8) -> Key {
    match code {
        usage::A..=usage::Z => Key::Letter(char::from(b'A' + (code - usage::A))),
        usage::DIGIT_1..=usage::DIGIT_0 => Key::Digit(DIGITS[usize::from(code - usage::DIGIT_1)]),
        usage::ENTER => Key::Named(NamedKey::Enter),
        usage::TAB => Key::Named(NamedKey::Tab),
        usage::SPACE => Key::Named(NamedKey::Space),
        usage::AT => Key::Named(NamedKey::At),
        usage::RIGHT => Key::Named(NamedKey::Right),
        usage::LEFT => Key::Named(NamedKey::Left),
        usage::DOWN => Key::Named(NamedKey::Down),
        usage::UP => Key::Named(NamedKey::Up),
        _ => Key::Unmapped,
    }
}
