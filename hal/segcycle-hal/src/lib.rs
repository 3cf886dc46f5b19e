//! Segment LCD Hardware Abstraction Layer
//!
//! This crate defines the interface between glyph rendering logic and the
//! LCD controller's segment memory. Chip-specific code implements
//! [`SegmentMemory`]; everything above it stays board-agnostic.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  segcycle-drivers (runner, delay)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  segcycle-core (glyphs, renderer)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  segcycle-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`memory::SegmentMemory`] - Byte-addressed LCD segment memory
//!
//! # Nibble addressing
//!
//! With a multiplex rate below 5 each segment line uses four bits, so two
//! lines share one memory byte. See [`nibble::NibbleSlot`].

#![no_std]
#![deny(unsafe_code)]

pub mod memory;
pub mod nibble;

// Re-export key types at crate root for convenience
pub use memory::SegmentMemory;
pub use nibble::{NibbleHalf, NibbleSlot};
