//! Core utilities shared across commands
//!
//! - `dump`: scratch JSON dumps of computed breakdowns

pub mod dump;

pub use dump::{default_dump_dir, write_breakdown_dump, write_string};
