use crate::keycode::{classify, Key};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vowel {
    A,
    I,
    U,
    E,
    O,
}

impl Vowel {
    pub const ALL: [Vowel; 5] = [Self::A, Self::I, Self::U, Self::E, Self::O];

    /// Column in the conversion table (a, i, u, e, o order).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_char(self) -> char {
        match self {
            Self::A => 'a',
            Self::I => 'i',
            Self::U => 'u',
            Self::E => 'e',
            Self::O => 'o',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a' => Some(Self::A),
            'i' => Some(Self::I),
            'u' => Some(Self::U),
            'e' => Some(Self::E),
            'o' => Some(Self::O),
            _ => None,
        }
    }
}

/// Consonants that can be held while waiting for a vowel.
///
/// `n` is deliberately absent: it is always [`InputSymbol::Nasal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Consonant {
    K,
    S,
    T,
    H,
    M,
    Y,
    R,
    W,
    G,
    Z,
    D,
    B,
    P,
    C,
    F,
    V,
    J,
    L,
    X,
}

impl Consonant {
    pub const COUNT: usize = 19;

    pub const ALL: [Consonant; Self::COUNT] = [
        Self::K,
        Self::S,
        Self::T,
        Self::H,
        Self::M,
        Self::Y,
        Self::R,
        Self::W,
        Self::G,
        Self::Z,
        Self::D,
        Self::B,
        Self::P,
        Self::C,
        Self::F,
        Self::V,
        Self::J,
        Self::L,
        Self::X,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::K => "k",
            Self::S => "s",
            Self::T => "t",
            Self::H => "h",
            Self::M => "m",
            Self::Y => "y",
            Self::R => "r",
            Self::W => "w",
            Self::G => "g",
            Self::Z => "z",
            Self::D => "d",
            Self::B => "b",
            Self::P => "p",
            Self::C => "c",
            Self::F => "f",
            Self::V => "v",
            Self::J => "j",
            Self::L => "l",
            Self::X => "x",
        }
    }

    pub fn as_char(self) -> char {
        // as_str is always a single ASCII letter
        char::from(self.as_str().as_bytes()[0])
    }

    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_char() == c)
    }
}

/// One keystroke as the romaji engine sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSymbol {
    Vowel(Vowel),
    Consonant(Consonant),
    /// The letter `n`: either the start of な-row or the moraic nasal ん.
    Nasal,
    /// Unmapped key, or a letter outside the romaji alphabet (`q`).
    None,
}

impl InputSymbol {
    /// Classify a Latin letter. Case-insensitive.
    pub fn from_char(c: char) -> Self {
        let c = c.to_ascii_lowercase();
        if c == 'n' {
            return Self::Nasal;
        }
        if let Some(v) = Vowel::from_char(c) {
            return Self::Vowel(v);
        }
        match Consonant::from_char(c) {
            Some(k) => Self::Consonant(k),
            None => Self::None,
        }
    }
}

/// Map a raw HID keycode to the symbol fed to the romaji engine.
///
/// Only letter keys produce symbols; digits and named keys are alphabet-mode
/// only and normalize to [`InputSymbol::None`].
pub fn normalize(keycode: u8) -> InputSymbol {
    match classify(keycode) {
        Key::Letter(c) => InputSymbol::from_char(c),
        Key::Digit(_) | Key::Named(_) | Key::Unmapped => InputSymbol::None,
    }
}
