//! Nibble addressing for segment lines
//!
//! Segment line `n` occupies byte `n / 2` of segment memory. Odd lines use
//! the high nibble, even lines the low nibble.

/// Which half of a memory byte a segment line occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NibbleHalf {
    /// Bits 0-3 (even segment lines)
    Low,
    /// Bits 4-7 (odd segment lines)
    High,
}

impl NibbleHalf {
    /// Bit shift of this half within a byte
    pub const fn shift(self) -> u8 {
        match self {
            NibbleHalf::Low => 0,
            NibbleHalf::High => 4,
        }
    }

    /// Mask selecting this half within a byte
    pub const fn mask(self) -> u8 {
        0x0F << self.shift()
    }
}

/// Location of a segment line's 4-bit value in segment memory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NibbleSlot {
    /// Byte index into segment memory
    pub index: usize,
    /// Half of the byte holding the value
    pub half: NibbleHalf,
}

impl NibbleSlot {
    /// Locate a segment line
    pub const fn for_line(line: u8) -> Self {
        let half = if line % 2 == 1 {
            NibbleHalf::High
        } else {
            NibbleHalf::Low
        };

        Self {
            index: (line / 2) as usize,
            half,
        }
    }

    /// Combine `value` into `byte`, keeping the other half untouched
    ///
    /// Only the low four bits of `value` are used.
    pub const fn merge(self, byte: u8, value: u8) -> u8 {
        (byte & !self.half.mask()) | ((value & 0x0F) << self.half.shift())
    }

    /// Extract this slot's 4-bit value from `byte`
    pub const fn extract(self, byte: u8) -> u8 {
        (byte & self.half.mask()) >> self.half.shift()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_odd_line_is_high_nibble() {
        let slot = NibbleSlot::for_line(57);
        assert_eq!(slot.index, 28);
        assert_eq!(slot.half, NibbleHalf::High);
    }

    #[test]
    fn test_even_line_is_low_nibble() {
        let slot = NibbleSlot::for_line(56);
        assert_eq!(slot.index, 28);
        assert_eq!(slot.half, NibbleHalf::Low);
    }

    #[test]
    fn test_merge_low_keeps_high() {
        let slot = NibbleSlot::for_line(4);
        assert_eq!(slot.merge(0xA5, 0x3), 0xA3);
    }

    #[test]
    fn test_merge_high_keeps_low() {
        let slot = NibbleSlot::for_line(5);
        assert_eq!(slot.merge(0xA5, 0x3), 0x35);
    }

    #[test]
    fn test_merge_ignores_upper_value_bits() {
        let slot = NibbleSlot::for_line(0);
        assert_eq!(slot.merge(0x00, 0xF7), 0x07);
    }

    proptest! {
        #[test]
        fn merge_preserves_other_half(line in 0u8..60, byte: u8, value in 0u8..16) {
            let slot = NibbleSlot::for_line(line);
            let other = NibbleSlot {
                index: slot.index,
                half: match slot.half {
                    NibbleHalf::Low => NibbleHalf::High,
                    NibbleHalf::High => NibbleHalf::Low,
                },
            };

            let merged = slot.merge(byte, value);
            prop_assert_eq!(slot.extract(merged), value);
            prop_assert_eq!(other.extract(merged), other.extract(byte));
        }
    }
}
