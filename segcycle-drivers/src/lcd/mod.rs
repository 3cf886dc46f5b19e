//! Segment memory backends

pub mod mmio;
pub mod ram;

pub use mmio::MmioSegmentMemory;
pub use ram::RamSegmentMemory;

/// Segment memory bytes needed for lines 0-59
pub const PANEL_MEMORY_LEN: usize = 30;
