//! Display positions and layout
//!
//! A position is one on-screen character slot, wired to four segment
//! lines. The layout binds all six slots and is built once at startup.

use segcycle_hal::NibbleSlot;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::glyph::LINES_PER_GLYPH;

/// Number of character positions on the display
pub const POSITION_COUNT: usize = 6;

/// Highest segment line number on the panel
pub const MAX_SEGMENT_LINE: u8 = 59;

/// Errors when building a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PositionError {
    /// Segment line above [`MAX_SEGMENT_LINE`]
    LineOutOfRange(u8),
    /// The same segment line appears twice
    DuplicateLine(u8),
    /// Segment line already wired to another position
    LineInUse(u8),
}

/// Four segment lines driving one character position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentPosition {
    lines: [u8; LINES_PER_GLYPH],
}

impl SegmentPosition {
    /// Create a position from its four segment lines (pin1..pin4)
    pub fn new(lines: [u8; LINES_PER_GLYPH]) -> Result<Self, PositionError> {
        for (i, &line) in lines.iter().enumerate() {
            if line > MAX_SEGMENT_LINE {
                return Err(PositionError::LineOutOfRange(line));
            }
            if lines[..i].contains(&line) {
                return Err(PositionError::DuplicateLine(line));
            }
        }
        Ok(Self { lines })
    }

    /// Board tables only; checked by `test_launchpad_layout_is_valid`
    const fn new_unchecked(lines: [u8; LINES_PER_GLYPH]) -> Self {
        Self { lines }
    }

    /// Segment lines in pin1..pin4 order
    pub fn lines(&self) -> [u8; LINES_PER_GLYPH] {
        self.lines
    }

    /// Memory slots in pin1..pin4 order
    pub fn slots(&self) -> impl Iterator<Item = NibbleSlot> + '_ {
        self.lines.iter().map(|&line| NibbleSlot::for_line(line))
    }
}

/// The six character positions of the display, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayLayout {
    positions: [SegmentPosition; POSITION_COUNT],
}

impl DisplayLayout {
    /// Segment wiring of the MSPM0L2228 LaunchPad's onboard LCD
    pub const LAUNCHPAD: Self = Self {
        positions: [
            SegmentPosition::new_unchecked([58, 57, 56, 55]),
            SegmentPosition::new_unchecked([36, 37, 38, 18]),
            SegmentPosition::new_unchecked([19, 20, 23, 39]),
            SegmentPosition::new_unchecked([40, 41, 54, 53]),
            SegmentPosition::new_unchecked([52, 51, 50, 49]),
            SegmentPosition::new_unchecked([48, 47, 46, 45]),
        ],
    };

    /// Create a layout from six positions
    ///
    /// Each segment line may drive only one position.
    pub fn new(positions: [SegmentPosition; POSITION_COUNT]) -> Result<Self, PositionError> {
        for (i, position) in positions.iter().enumerate() {
            for line in position.lines {
                if positions[..i].iter().any(|p| p.lines.contains(&line)) {
                    return Err(PositionError::LineInUse(line));
                }
            }
        }
        Ok(Self { positions })
    }

    /// Get a position by slot index (0-5)
    pub fn get(&self, slot: usize) -> Option<&SegmentPosition> {
        self.positions.get(slot)
    }

    /// All positions, left to right
    pub fn positions(&self) -> &[SegmentPosition; POSITION_COUNT] {
        &self.positions
    }

    /// Iterate positions left to right
    pub fn iter(&self) -> impl Iterator<Item = &SegmentPosition> {
        self.positions.iter()
    }
}

impl Default for DisplayLayout {
    fn default() -> Self {
        Self::LAUNCHPAD
    }
}
