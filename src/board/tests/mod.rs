//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `squares.rs` - Coordinate conversions and notation
//! - `ranges.rs` - Piece ranges independent of occupancy
//! - `movegen.rs` - Capture generation and slider blocking
//! - `apply.rs` - Move application and its preconditions
//! - `scenarios.rs` - Whole-level play-throughs
//! - `proptest.rs` - Property-based tests

mod scenarios;
mod squares;
