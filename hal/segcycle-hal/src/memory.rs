//! Segment memory abstraction
//!
//! Provides the byte-level read/write interface to the LCD controller's
//! segment memory that chip-specific HALs implement.

use crate::nibble::NibbleSlot;

/// Byte-addressed LCD segment memory
///
/// Each bit of the memory drives one visible segment. The memory is shared
/// hardware state: callers must read-modify-write to avoid disturbing
/// segments they do not own.
///
/// Indices are byte indices (`line / 2`), not segment line numbers.
pub trait SegmentMemory {
    /// Number of addressable bytes
    fn len(&self) -> usize;

    /// Check if the memory has no addressable bytes
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the byte at `index`
    ///
    /// `index` must be less than [`len`](Self::len). Implementations may
    /// return 0 for out-of-range reads.
    fn read(&self, index: usize) -> u8;

    /// Write the byte at `index`
    ///
    /// `index` must be less than [`len`](Self::len). Implementations may
    /// ignore out-of-range writes.
    fn write(&mut self, index: usize, value: u8);

    /// Check if a segment line maps into this memory
    fn contains_line(&self, line: u8) -> bool {
        NibbleSlot::for_line(line).index < self.len()
    }

    /// Read the 4-bit value belonging to a segment line
    fn read_nibble(&self, slot: NibbleSlot) -> u8 {
        slot.extract(self.read(slot.index))
    }

    /// Write the 4-bit value belonging to a segment line
    ///
    /// The other nibble of the byte is preserved.
    fn write_nibble(&mut self, slot: NibbleSlot, value: u8) {
        let merged = slot.merge(self.read(slot.index), value);
        self.write(slot.index, merged);
    }
}

impl<T: SegmentMemory + ?Sized> SegmentMemory for &mut T {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn read(&self, index: usize) -> u8 {
        (**self).read(index)
    }

    fn write(&mut self, index: usize, value: u8) {
        (**self).write(index, value)
    }
}
