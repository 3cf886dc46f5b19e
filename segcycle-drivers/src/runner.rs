//! Display cycle runner
//!
//! Drives a [`DisplayCycle`] against real segment memory: one step, then a
//! fixed delay, forever.

use embedded_hal::delay::DelayNs;
use segcycle_core::config::DisplayConfig;
use segcycle_core::{DisplayCycle, Message, StepOutcome};
use segcycle_hal::SegmentMemory;

/// Refresh loop for a six-position segment display
pub struct CycleRunner<M, D> {
    memory: M,
    delay: D,
    cycle: DisplayCycle,
    step_delay_ms: u32,
}

impl<M: SegmentMemory, D: DelayNs> CycleRunner<M, D> {
    /// Create a runner
    pub fn new(memory: M, delay: D, cycle: DisplayCycle, step_delay_ms: u32) -> Self {
        Self {
            memory,
            delay,
            cycle,
            step_delay_ms,
        }
    }

    /// Create a runner from a display configuration
    ///
    /// The configured cipher is applied to the text once, here.
    pub fn from_config(memory: M, delay: D, config: &DisplayConfig) -> Self {
        Self::new(memory, delay, config.cycle(), config.step_delay_ms)
    }

    /// Render the next position, then wait the step delay
    pub fn step(&mut self) -> StepOutcome {
        let outcome = self.cycle.step(&mut self.memory);

        #[cfg(feature = "defmt")]
        match outcome {
            StepOutcome::Skipped { slot, error } => {
                defmt::warn!("Slot {}: nothing written ({})", slot, error);
            }
            _ => defmt::debug!("Step: {}", outcome),
        }

        self.delay.delay_ms(self.step_delay_ms);
        outcome
    }

    /// Run the refresh loop forever
    pub fn run(&mut self) -> ! {
        #[cfg(feature = "defmt")]
        defmt::info!(
            "Cycling {} characters, {} ms per step",
            self.cycle.message().len(),
            self.step_delay_ms
        );

        loop {
            self.step();
        }
    }

    /// Show a different message, starting again from the first position
    pub fn set_message(&mut self, message: Message) {
        self.cycle.set_message(message);
    }

    /// Change the delay between steps
    pub fn set_step_delay_ms(&mut self, step_delay_ms: u32) {
        self.step_delay_ms = step_delay_ms;
    }

    /// Access the segment memory
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Access the cycle state
    pub fn cycle(&self) -> &DisplayCycle {
        &self.cycle
    }

    /// Release the segment memory and delay
    pub fn release(self) -> (M, D) {
        (self.memory, self.delay)
    }
}
