//! Display cycle state machine
//!
//! Walks the six positions left to right, one per step, showing the
//! message character for that slot. After the last slot it wraps back to
//! the first, forever. Timing between steps is the caller's concern.

use segcycle_hal::SegmentMemory;

use crate::cipher::Message;
use crate::position::{DisplayLayout, SegmentPosition, POSITION_COUNT};
use crate::render::{GlyphWriter, RenderError};

/// What a step does to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepAction {
    /// Render a character
    Show(char),
    /// Slot has no message character; turn its segments off
    Blank,
}

/// A single scheduled write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    /// Slot index (0-5)
    pub slot: usize,
    /// Position wired to the slot
    pub position: SegmentPosition,
    /// Action to perform
    pub action: StepAction,
}

/// Result of applying a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepOutcome {
    /// Character rendered
    Shown { slot: usize, ch: char },
    /// Position cleared
    Blanked { slot: usize },
    /// Nothing written
    Skipped { slot: usize, error: RenderError },
}

impl StepOutcome {
    /// Slot the step targeted
    pub fn slot(&self) -> usize {
        match *self {
            StepOutcome::Shown { slot, .. }
            | StepOutcome::Blanked { slot }
            | StepOutcome::Skipped { slot, .. } => slot,
        }
    }

    /// Check if the step wrote to memory
    pub fn is_written(&self) -> bool {
        !matches!(self, StepOutcome::Skipped { .. })
    }
}

/// Round-robin writer of a message across the display
#[derive(Debug, Clone)]
pub struct DisplayCycle {
    layout: DisplayLayout,
    message: Message,
    cursor: usize,
    cycles: u32,
}

impl DisplayCycle {
    /// Create a cycle starting at the leftmost position
    pub fn new(layout: DisplayLayout, message: Message) -> Self {
        Self {
            layout,
            message,
            cursor: 0,
            cycles: 0,
        }
    }

    /// Replace the message; the cycle restarts at slot 0
    pub fn set_message(&mut self, message: Message) {
        self.message = message;
        self.cursor = 0;
    }

    /// Current message
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Layout in use
    pub fn layout(&self) -> &DisplayLayout {
        &self.layout
    }

    /// Slot the next step will target
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of completed passes over all six positions
    pub fn completed_cycles(&self) -> u32 {
        self.cycles
    }

    /// Step that [`next_step`](Self::next_step) would return, without advancing
    pub fn peek(&self) -> Step {
        let slot = self.cursor;
        let action = match self.message.get(slot) {
            Some(&ch) => StepAction::Show(ch),
            None => StepAction::Blank,
        };

        // cursor is always < POSITION_COUNT
        let position = self.layout.positions()[slot];

        Step {
            slot,
            position,
            action,
        }
    }

    /// Take the next step and advance the cursor
    pub fn next_step(&mut self) -> Step {
        let step = self.peek();

        self.cursor += 1;
        if self.cursor == POSITION_COUNT {
            self.cursor = 0;
            self.cycles = self.cycles.wrapping_add(1);
        }

        step
    }

    /// Apply the next step to segment memory
    ///
    /// Render errors are reported in the outcome; the cycle always advances.
    pub fn step<M: SegmentMemory + ?Sized>(&mut self, memory: &mut M) -> StepOutcome {
        let step = self.next_step();
        let slot = step.slot;

        let result = match step.action {
            StepAction::Show(ch) => memory.show_char(ch, &step.position),
            StepAction::Blank => memory.clear_position(&step.position),
        };

        match (result, step.action) {
            (Err(error), _) => StepOutcome::Skipped { slot, error },
            (Ok(()), StepAction::Show(ch)) => StepOutcome::Shown { slot, ch },
            (Ok(()), StepAction::Blank) => StepOutcome::Blanked { slot },
        }
    }
}
