//! Pattern 1: while with a single condition
//!
//! Run with: cargo run --example p1_condition_loop

use std::io;

use for_loops::{run_pattern, LoopBounds, LoopError, Pattern};

fn main() -> Result<(), LoopError> {
    let pattern = Pattern::Condition;
    println!("== {} ({}) ==", pattern.title(), pattern);

    let written = run_pattern(pattern, &mut io::stdout().lock(), &LoopBounds::default())?;
    println!("-- {written} line(s)");
    Ok(())
}
