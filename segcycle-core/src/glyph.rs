//! Character glyph tables
//!
//! Each supported character maps to four 4-bit segment patterns, one per
//! segment line of a display position. Only `0-9` and `A-Z` are defined.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of segment lines per character position
pub const LINES_PER_GLYPH: usize = 4;

/// Four 4-bit segment patterns for one character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Glyph(pub [u8; LINES_PER_GLYPH]);

//      a
//     ---
//  f | k | b
//     -g-m
//  e | q | c
//     ---
//      d

/// Digit glyphs, indexed by `ch - '0'`
static DIGITS: [Glyph; 10] = [
    Glyph([0x07, 0x09, 0x08, 0x0A]), // 0  a+b+c+d+e+f+k+q
    Glyph([0x00, 0x00, 0x00, 0x0A]), // 1
    Glyph([0x03, 0x0A, 0x00, 0x0C]), // 2
    Glyph([0x01, 0x0A, 0x00, 0x0E]), // 3
    Glyph([0x04, 0x02, 0x00, 0x0E]), // 4
    Glyph([0x05, 0x0A, 0x01, 0x00]), // 5
    Glyph([0x07, 0x0A, 0x00, 0x06]), // 6
    Glyph([0x00, 0x08, 0x00, 0x0A]), // 7
    Glyph([0x07, 0x0A, 0x00, 0x0E]), // 8
    Glyph([0x05, 0x0A, 0x00, 0x0E]), // 9
];

/// Uppercase letter glyphs, indexed by `ch - 'A'`
static LETTERS: [Glyph; 26] = [
    Glyph([0x06, 0x0A, 0x00, 0x0E]), // A  a+b+c+e+f+g+m
    Glyph([0x01, 0x08, 0x06, 0x0E]), // B
    Glyph([0x07, 0x08, 0x00, 0x00]), // C
    Glyph([0x01, 0x08, 0x06, 0x0A]), // D
    Glyph([0x07, 0x0A, 0x00, 0x00]), // E
    Glyph([0x06, 0x0A, 0x00, 0x00]), // F
    Glyph([0x07, 0x08, 0x00, 0x06]), // G
    Glyph([0x06, 0x02, 0x00, 0x0E]), // H
    Glyph([0x01, 0x08, 0x06, 0x00]), // I
    Glyph([0x03, 0x00, 0x00, 0x0A]), // J
    Glyph([0x06, 0x02, 0x09, 0x00]), // K
    Glyph([0x07, 0x00, 0x00, 0x00]), // L
    Glyph([0x06, 0x04, 0x08, 0x0A]), // M
    Glyph([0x06, 0x04, 0x01, 0x0A]), // N
    Glyph([0x07, 0x08, 0x00, 0x0A]), // O
    Glyph([0x06, 0x0A, 0x00, 0x0C]), // P
    Glyph([0x07, 0x08, 0x01, 0x0A]), // Q
    Glyph([0x06, 0x0A, 0x01, 0x0C]), // R
    Glyph([0x05, 0x0A, 0x00, 0x06]), // S
    Glyph([0x00, 0x08, 0x06, 0x00]), // T
    Glyph([0x07, 0x00, 0x00, 0x0A]), // U
    Glyph([0x06, 0x01, 0x08, 0x00]), // V
    Glyph([0x06, 0x01, 0x01, 0x0A]), // W
    Glyph([0x00, 0x05, 0x09, 0x00]), // X
    Glyph([0x05, 0x02, 0x00, 0x0E]), // Y
    Glyph([0x01, 0x09, 0x08, 0x00]), // Z
];

impl Glyph {
    /// All segments off
    pub const BLANK: Self = Self([0; LINES_PER_GLYPH]);

    /// Look up the glyph for a character
    ///
    /// Returns `None` for anything outside `0-9` and `A-Z`. Lowercase
    /// letters are not folded.
    pub fn for_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => Some(DIGITS[ch as usize - '0' as usize]),
            'A'..='Z' => Some(LETTERS[ch as usize - 'A' as usize]),
            _ => None,
        }
    }

    /// Check if a character has a glyph
    pub fn is_supported(ch: char) -> bool {
        matches!(ch, '0'..='9' | 'A'..='Z')
    }

    /// Find the character drawn by this glyph
    ///
    /// Digits are searched before letters.
    pub fn to_char(self) -> Option<char> {
        if let Some(i) = DIGITS.iter().position(|g| *g == self) {
            return Some((b'0' + i as u8) as char);
        }
        LETTERS
            .iter()
            .position(|g| *g == self)
            .map(|i| (b'A' + i as u8) as char)
    }

    /// Iterate the four segment patterns in line order
    pub fn nibbles(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }
}
