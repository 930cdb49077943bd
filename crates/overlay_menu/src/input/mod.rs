//! Input types consumed from the windowing system
//!
//! Key codes follow the GLFW layout: printable keys use their uppercase
//! ASCII value (`A` = 65 .. `Z` = 90, `0` = 48, space = 32) and function keys
//! start at 256. Text boxes rely on this layout when mapping keys to
//! characters, so hosts using another windowing library must translate into
//! these codes.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Key code in the GLFW key layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(pub i32);

impl Key {
    /// Space bar
    pub const SPACE: Self = Self(32);
    /// Digit 0
    pub const NUM_0: Self = Self(48);
    /// Digit 9
    pub const NUM_9: Self = Self(57);
    /// A key
    pub const A: Self = Self(65);
    /// B key
    pub const B: Self = Self(66);
    /// M key, the default menu toggle
    pub const M: Self = Self(77);
    /// Z key
    pub const Z: Self = Self(90);
    /// Escape key
    pub const ESCAPE: Self = Self(256);
    /// Enter key
    pub const ENTER: Self = Self(257);
    /// Tab key
    pub const TAB: Self = Self(258);
    /// Backspace key
    pub const BACKSPACE: Self = Self(259);

    /// Key for an ASCII letter, digit or punctuation character
    ///
    /// Letters map to their uppercase code regardless of the case passed in.
    pub fn from_char(c: char) -> Self {
        Self(c.to_ascii_uppercase() as i32)
    }

    /// Whether the code lies in the `A`..=`Z` letter range
    pub const fn is_letter(self) -> bool {
        self.0 >= Self::A.0 && self.0 <= Self::Z.0
    }

    /// Character produced by this key
    ///
    /// Letters are lower-cased by a fixed offset of 32 unless shift is held.
    /// Every other code is taken as its own code point; codes that are not
    /// valid `char`s yield `None`.
    pub fn to_char(self, shift_held: bool) -> Option<char> {
        let code = if !shift_held && self.is_letter() {
            self.0 + 32
        } else {
            self.0
        };
        u32::try_from(code).ok().and_then(char::from_u32)
    }
}

/// Mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Middle mouse button
    Middle,
    /// Right mouse button
    Right,
    /// No button; used for hover events
    Unclicked,
    /// Any additional button, by zero-based index
    Other(u8),
}

bitflags! {
    /// Modifier keys held during a key event (GLFW bit values)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifiers: i32 {
        /// Either shift key
        const SHIFT = 0x0001;
        /// Either control key
        const CONTROL = 0x0002;
        /// Either alt key
        const ALT = 0x0004;
        /// Either super key
        const SUPER = 0x0008;
    }
}

impl KeyModifiers {
    /// Whether shift is held
    pub const fn shift(self) -> bool {
        self.contains(Self::SHIFT)
    }
}

#[cfg(feature = "glfw")]
mod glfw_conversions {
    use super::{Key, KeyModifiers, MouseButton};

    impl From<glfw::Key> for Key {
        fn from(key: glfw::Key) -> Self {
            Self(key as i32)
        }
    }

    impl From<glfw::MouseButton> for MouseButton {
        fn from(button: glfw::MouseButton) -> Self {
            match button {
                glfw::MouseButton::Button1 => Self::Left,
                glfw::MouseButton::Button2 => Self::Right,
                glfw::MouseButton::Button3 => Self::Middle,
                other => Self::Other(other as u8),
            }
        }
    }

    impl From<glfw::Modifiers> for KeyModifiers {
        fn from(mods: glfw::Modifiers) -> Self {
            Self::from_bits_truncate(mods.bits())
        }
    }
}
