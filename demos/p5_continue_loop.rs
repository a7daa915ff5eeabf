//! Pattern 5: continue to the next iteration
//!
//! Run with: cargo run --example p5_continue_loop

use std::io;

use for_loops::{run_pattern, LoopBounds, LoopError, Pattern};

fn main() -> Result<(), LoopError> {
    let bounds = LoopBounds::default().with_filtered_len(12);
    println!("== odd values below {} ==", bounds.filtered_len);

    let written = run_pattern(Pattern::Continue, &mut io::stdout().lock(), &bounds)?;
    println!("-- {written} printed, {} skipped", bounds.filtered_len as usize - written);
    Ok(())
}
