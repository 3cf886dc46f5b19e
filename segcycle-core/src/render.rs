//! Segment renderer
//!
//! Writes glyphs into segment memory one nibble at a time. Each write is a
//! read-modify-write of the owning byte so the neighbouring segment line,
//! which may belong to another position, is left untouched.

use segcycle_hal::{NibbleSlot, SegmentMemory};

use crate::cipher::Message;
use crate::glyph::{Glyph, LINES_PER_GLYPH};
use crate::position::{DisplayLayout, SegmentPosition};

/// Errors that can occur while rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// Character has no glyph; nothing was written
    UnsupportedChar(char),
    /// Segment line maps past the end of segment memory; nothing was written
    PinOutOfRange {
        /// Offending segment line
        pin: u8,
        /// Segment memory size in bytes
        len: usize,
    },
}

/// Glyph rendering on top of raw segment memory
///
/// Implemented for every [`SegmentMemory`].
pub trait GlyphWriter: SegmentMemory {
    /// Render a character at a position
    ///
    /// Supported characters are `0-9` and `A-Z`. Anything else returns
    /// [`RenderError::UnsupportedChar`] and leaves memory unchanged.
    fn show_char(&mut self, ch: char, position: &SegmentPosition) -> Result<(), RenderError> {
        let glyph = Glyph::for_char(ch).ok_or(RenderError::UnsupportedChar(ch))?;
        self.show_glyph(glyph, position)
    }

    /// Render a raw glyph at a position
    ///
    /// Nibbles are written in pin1..pin4 order. All lines are checked
    /// against the memory size before the first write.
    fn show_glyph(&mut self, glyph: Glyph, position: &SegmentPosition) -> Result<(), RenderError> {
        if let Some(pin) = position.lines().into_iter().find(|&l| !self.contains_line(l)) {
            return Err(RenderError::PinOutOfRange {
                pin,
                len: self.len(),
            });
        }

        for (slot, nibble) in position.slots().zip(glyph.nibbles()) {
            self.write_nibble(slot, nibble);
        }

        Ok(())
    }

    /// Turn off all segments of a position
    fn clear_position(&mut self, position: &SegmentPosition) -> Result<(), RenderError> {
        self.show_glyph(Glyph::BLANK, position)
    }

    /// Read back the four nibbles currently shown at a position
    ///
    /// Lines outside segment memory read as 0.
    fn read_glyph(&self, position: &SegmentPosition) -> Glyph {
        let mut nibbles = [0u8; LINES_PER_GLYPH];
        for (out, line) in nibbles.iter_mut().zip(position.lines()) {
            if self.contains_line(line) {
                *out = self.read_nibble(NibbleSlot::for_line(line));
            }
        }
        Glyph(nibbles)
    }

    /// Render a whole message, one character per position
    ///
    /// Positions past the end of the message are cleared. Every position
    /// is attempted; the first error encountered is returned.
    fn show_message(&mut self, layout: &DisplayLayout, message: &Message) -> Result<(), RenderError> {
        let mut first_error = None;

        for (slot, position) in layout.iter().enumerate() {
            let result = match message.get(slot) {
                Some(&ch) => self.show_char(ch, position),
                None => self.clear_position(position),
            };

            if let Err(e) = result {
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

// Blanket implementation for all segment memories
impl<T: SegmentMemory + ?Sized> GlyphWriter for T {}
