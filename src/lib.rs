//! # Loop Constructs
//!
//! This crate walks through the loop forms Rust offers by printing a small,
//! fixed transcript to standard output.
//!
//! ## Patterns Covered
//!
//! 1. **Condition loop** - `while` re-checking a boolean before every pass
//! 2. **Classic loop** - init, condition and update spelled out around a `while`
//! 3. **Range loop** - `for` consuming a lazy `0..n` range
//! 4. **Infinite loop** - `loop` that exits through an explicit `break`
//! 5. **Continue** - `for` over a range that skips even values with `continue`
//!
//! Running the binary prints thirteen lines:
//!
//! ```text
//! 1
//! 2
//! 3
//! 0
//! 1
//! 2
//! range 0
//! range 1
//! range 2
//! loop
//! 1
//! 3
//! 5
//! ```
//!
//! ## Running Examples
//!
//! ```bash
//! # All five patterns in order
//! cargo run --bin for_loops
//!
//! # One pattern at a time
//! cargo run --example p1_condition_loop
//! cargo run --example p2_classic_loop
//! cargo run --example p3_range_loop
//! cargo run --example p4_infinite_loop
//! cargo run --example p5_continue_loop
//!
//! # Per-pattern diagnostics on stderr
//! RUST_LOG=for_loops=trace cargo run --bin for_loops
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Error type for output failures
//! - `tracing` - Spans and events around each pattern
//! - `tracing-subscriber` - Stderr log output for the binary
//! - `colored` - Highlighted error line in the binary

pub mod bounds;
pub mod error;
pub mod patterns;
pub mod runner;

pub use bounds::LoopBounds;
pub use error::LoopError;
pub use patterns::Pattern;
pub use runner::{run, run_pattern, run_to, run_with};
