//! Board-agnostic core logic for six-position segment LCDs
//!
//! This crate contains all display logic that does not depend on
//! specific hardware implementations:
//!
//! - Glyph tables for digits and uppercase letters
//! - Segment positions and the six-slot display layout
//! - Segment renderer (nibble-preserving glyph writes)
//! - Message ciphers
//! - Display cycle state machine
//! - Configuration types and parsing

#![no_std]
#![deny(unsafe_code)]

pub mod cipher;
pub mod config;
pub mod cycle;
pub mod glyph;
pub mod position;
pub mod render;

pub use cipher::{Caesar, Cipher, CipherKind, Message, Passthrough};
pub use cycle::{DisplayCycle, Step, StepAction, StepOutcome};
pub use glyph::Glyph;
pub use position::{DisplayLayout, PositionError, SegmentPosition, POSITION_COUNT};
pub use render::{GlyphWriter, RenderError};
