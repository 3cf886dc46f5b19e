//! Hardware driver implementations
//!
//! This crate provides concrete implementations for driving a segment LCD:
//!
//! - Segment memory backends (RAM buffer, memory-mapped registers)
//! - Busy-wait cycle delay
//! - Cycle runner (the display refresh loop)

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod lcd;
pub mod runner;

pub use delay::CycleDelay;
pub use lcd::{MmioSegmentMemory, RamSegmentMemory, PANEL_MEMORY_LEN};
pub use runner::CycleRunner;
