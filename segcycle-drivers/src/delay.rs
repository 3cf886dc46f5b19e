//! Busy-wait cycle delay
//!
//! Spins the core for a number of cycles derived from the core clock. No
//! timer peripheral is needed, so timing is approximate.

use embedded_hal::delay::DelayNs;

/// Default core clock (Hz)
pub const DEFAULT_CORE_CLOCK_HZ: u32 = 32_000_000;

/// Busy-wait delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleDelay {
    core_clock_hz: u32,
}

impl Default for CycleDelay {
    fn default() -> Self {
        Self::new(DEFAULT_CORE_CLOCK_HZ)
    }
}

impl CycleDelay {
    /// Create a delay for the given core clock
    pub const fn new(core_clock_hz: u32) -> Self {
        Self { core_clock_hz }
    }

    /// Number of cycles spanning `ns` nanoseconds
    pub fn cycles_for_ns(&self, ns: u32) -> u64 {
        ns as u64 * self.core_clock_hz as u64 / 1_000_000_000
    }

    /// Spin for roughly `cycles` core cycles
    pub fn delay_cycles(&mut self, cycles: u64) {
        for _ in 0..cycles {
            core::hint::spin_loop();
        }
    }
}

impl DelayNs for CycleDelay {
    fn delay_ns(&mut self, ns: u32) {
        let cycles = self.cycles_for_ns(ns);
        self.delay_cycles(cycles);
    }
}
