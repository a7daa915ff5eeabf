//! Pattern 4: loop with break
//!
//! Run with: cargo run --example p4_infinite_loop

use std::io;

use for_loops::{run_pattern, LoopBounds, LoopError, Pattern};

fn main() -> Result<(), LoopError> {
    let pattern = Pattern::Infinite;
    println!("== {} ({}) ==", pattern.title(), pattern);

    let written = run_pattern(pattern, &mut io::stdout().lock(), &LoopBounds::default())?;
    println!("-- {written} line(s)");
    Ok(())
}
