//! Configuration type definitions
//!
//! These types describe what the display shows and how fast it cycles.

use heapless::String;

use crate::cipher::{Cipher, CipherKind, Message};
use crate::cycle::DisplayCycle;
use crate::position::DisplayLayout;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum source text length
pub const MAX_TEXT_LEN: usize = 32;

/// Default delay between steps (ms)
///
/// 32,000,000 cycles at the 32 MHz core clock.
pub const DEFAULT_STEP_DELAY_MS: u32 = 1000;

/// Default source text
pub const DEFAULT_TEXT: &str = "lbuctf";

/// Display configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Segment wiring of the six positions
    pub layout: DisplayLayout,
    /// Source text, before the cipher is applied
    pub text: String<MAX_TEXT_LEN>,
    /// Cipher applied to the text
    pub cipher: CipherKind,
    /// Delay after each step (ms)
    pub step_delay_ms: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            layout: DisplayLayout::LAUNCHPAD,
            text: String::try_from(DEFAULT_TEXT).unwrap_or_default(),
            cipher: CipherKind::default(),
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
        }
    }
}

impl DisplayConfig {
    /// Message shown on the display (text after the cipher)
    pub fn message(&self) -> Message {
        self.cipher.encode(&self.text)
    }

    /// Build the display cycle for this configuration
    pub fn cycle(&self) -> DisplayCycle {
        DisplayCycle::new(self.layout, self.message())
    }
}
