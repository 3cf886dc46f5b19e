//! Memory-mapped segment memory
//!
//! Accesses the LCD controller's segment memory registers directly with
//! volatile byte reads and writes.

#![allow(unsafe_code)]

use core::ptr::NonNull;

use segcycle_hal::SegmentMemory;

/// LCD segment memory at a fixed address
///
/// The controller's memory registers must be byte-addressable and laid out
/// consecutively, one byte per pair of segment lines.
pub struct MmioSegmentMemory {
    base: NonNull<u8>,
    len: usize,
}

impl MmioSegmentMemory {
    /// Wrap the segment memory block at `base`
    ///
    /// Returns `None` if `base` is null.
    ///
    /// # Safety
    ///
    /// `base..base + len` must be the LCD controller's segment memory,
    /// valid for volatile byte reads and writes for the lifetime of the
    /// returned value, and not accessed through any other handle meanwhile.
    pub unsafe fn new(base: *mut u8, len: usize) -> Option<Self> {
        NonNull::new(base).map(|base| Self { base, len })
    }
}

impl SegmentMemory for MmioSegmentMemory {
    fn len(&self) -> usize {
        self.len
    }

    fn read(&self, index: usize) -> u8 {
        if index >= self.len {
            return 0;
        }
        // SAFETY: index is in bounds and the block is valid per `new`
        unsafe { self.base.as_ptr().add(index).read_volatile() }
    }

    fn write(&mut self, index: usize, value: u8) {
        if index >= self.len {
            return;
        }
        // SAFETY: index is in bounds and the block is valid per `new`
        unsafe { self.base.as_ptr().add(index).write_volatile(value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use segcycle_core::{DisplayLayout, GlyphWriter};

    use crate::lcd::PANEL_MEMORY_LEN;

    #[test]
    fn test_null_base_rejected() {
        let mem = unsafe { MmioSegmentMemory::new(core::ptr::null_mut(), 4) };
        assert!(mem.is_none());
    }

    #[test]
    fn test_reads_and_writes_backing_block() {
        let mut block = [0u8; PANEL_MEMORY_LEN];
        block[3] = 0x5A;

        {
            let len = block.len();
            let mut mem = unsafe { MmioSegmentMemory::new(block.as_mut_ptr(), len) }.unwrap();
            assert_eq!(mem.read(3), 0x5A);

            mem.write(4, 0x11);
            // Out of range is ignored
            mem.write(PANEL_MEMORY_LEN, 0xFF);
            assert_eq!(mem.read(PANEL_MEMORY_LEN), 0);

            let layout = DisplayLayout::LAUNCHPAD;
            let position = layout.get(0).unwrap();
            mem.show_char('7', position).unwrap();
        }

        assert_eq!(block[3], 0x5A);
        assert_eq!(block[4], 0x11);
        // '7' = 0, 8, 0, A on lines 58, 57, 56, 55
        assert_eq!(block[29] & 0x0F, 0x0);
        assert_eq!(block[28], 0x80);
        assert_eq!(block[27] >> 4, 0xA);
    }
}
