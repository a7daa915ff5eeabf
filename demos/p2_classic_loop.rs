//! Pattern 2: init, condition and update
//!
//! Run with: cargo run --example p2_classic_loop

use std::io;

use for_loops::{run_pattern, LoopBounds, LoopError, Pattern};

fn main() -> Result<(), LoopError> {
    let pattern = Pattern::Classic;
    println!("== {} ({}) ==", pattern.title(), pattern);

    let written = run_pattern(pattern, &mut io::stdout().lock(), &LoopBounds::default())?;
    println!("-- {written} line(s)");
    Ok(())
}
