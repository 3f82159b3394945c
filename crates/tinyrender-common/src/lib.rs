//! Common utilities for the tinyrender pipeline.
//!
//! This crate provides shared infrastructure used by all pipeline components:
//! - **Warning System** - colored, deduplicated terminal output for unsupported features
//! - **Source Cursor** - character scanner shared by the markup and stylesheet parsers

pub mod cursor;
pub mod warning;

pub use cursor::Cursor;
