//! RAM-backed segment memory
//!
//! Runs the renderer off-target, or anywhere the panel has no
//! memory-mapped segment registers.

use segcycle_hal::SegmentMemory;

use super::PANEL_MEMORY_LEN;

/// Segment memory held in a plain byte array
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RamSegmentMemory<const N: usize = PANEL_MEMORY_LEN> {
    bytes: [u8; N],
}

impl<const N: usize> Default for RamSegmentMemory<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RamSegmentMemory<N> {
    /// Create a memory with all segments off
    pub const fn new() -> Self {
        Self { bytes: [0; N] }
    }

    /// Create a memory with existing contents
    pub const fn from_bytes(bytes: [u8; N]) -> Self {
        Self { bytes }
    }

    /// Raw contents
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.bytes
    }
}

impl<const N: usize> SegmentMemory for RamSegmentMemory<N> {
    fn len(&self) -> usize {
        N
    }

    fn read(&self, index: usize) -> u8 {
        self.bytes.get(index).copied().unwrap_or(0)
    }

    fn write(&mut self, index: usize, value: u8) {
        if let Some(byte) = self.bytes.get_mut(index) {
            *byte = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use segcycle_core::{DisplayLayout, GlyphWriter};

    #[test]
    fn test_out_of_range_access() {
        let mut mem = RamSegmentMemory::<2>::new();
        mem.write(5, 0xFF);
        assert_eq!(mem.read(5), 0);
        assert_eq!(mem.as_bytes(), &[0, 0]);
    }

    #[test]
    fn test_renders_on_default_panel() {
        let mut mem: RamSegmentMemory = RamSegmentMemory::new();
        let layout = DisplayLayout::LAUNCHPAD;

        for (position, ch) in layout.iter().zip(['S', 'E', 'G', '1', '2', '3']) {
            mem.show_char(ch, position).unwrap();
        }

        for (position, ch) in layout.iter().zip(['S', 'E', 'G', '1', '2', '3']) {
            assert_eq!(mem.read_glyph(position).to_char(), Some(ch));
        }
    }
}
