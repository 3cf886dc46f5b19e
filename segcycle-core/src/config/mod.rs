//! Configuration types
//!
//! Board-agnostic display configuration and its text format.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ParseError};
pub use types::*;
