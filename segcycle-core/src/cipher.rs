//! Message ciphers
//!
//! A cipher turns source text into the message shown on the display. The
//! output is capped at one character per display position.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::position::POSITION_COUNT;

/// Characters to show, one per display position
pub type Message = Vec<char, POSITION_COUNT>;

/// Transformation from source text to a display message
pub trait Cipher {
    /// Transform a single character
    fn encode_char(&self, ch: char) -> char;

    /// Transform text into a message
    ///
    /// Characters beyond the display width are dropped.
    fn encode(&self, text: &str) -> Message {
        text.chars()
            .take(POSITION_COUNT)
            .map(|ch| self.encode_char(ch))
            .collect()
    }
}

/// Show text as-is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Passthrough;

impl Cipher for Passthrough {
    fn encode_char(&self, ch: char) -> char {
        ch
    }
}

/// Rotation cipher over the displayable alphabet
///
/// ASCII letters are folded to uppercase and rotated within `A-Z`, digits
/// are rotated within `0-9`. Everything else passes through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Caesar {
    /// Rotation distance
    pub shift: u8,
}

impl Caesar {
    /// ROT13
    pub const ROT13: Self = Self { shift: 13 };

    /// Create a rotation cipher
    pub const fn new(shift: u8) -> Self {
        Self { shift }
    }
}

impl Cipher for Caesar {
    fn encode_char(&self, ch: char) -> char {
        if ch.is_ascii_alphabetic() {
            let offset = ch.to_ascii_uppercase() as u8 - b'A';
            (b'A' + ((offset as u16 + self.shift as u16) % 26) as u8) as char
        } else if ch.is_ascii_digit() {
            let offset = ch as u8 - b'0';
            (b'0' + ((offset as u16 + self.shift as u16) % 10) as u8) as char
        } else {
            ch
        }
    }
}

/// Cipher selection for configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CipherKind {
    /// Show the text unchanged
    Passthrough,
    /// Uppercase and rotate
    Caesar(Caesar),
}

impl Default for CipherKind {
    fn default() -> Self {
        CipherKind::Caesar(Caesar::ROT13)
    }
}

impl Cipher for CipherKind {
    fn encode_char(&self, ch: char) -> char {
        match self {
            CipherKind::Passthrough => Passthrough.encode_char(ch),
            CipherKind::Caesar(c) => c.encode_char(ch),
        }
    }
}
