//! Pattern 3: for over a range
//!
//! Run with: cargo run --example p3_range_loop

use std::io;

use for_loops::{run_pattern, LoopBounds, LoopError, Pattern};

fn main() -> Result<(), LoopError> {
    let mut out = io::stdout().lock();

    // The range is produced lazily and consumed once per loop
    for len in [3, 5] {
        let bounds = LoopBounds::default().with_range_len(len);
        println!("== 0..{len} ==");
        run_pattern(Pattern::Range, &mut out, &bounds)?;
    }
    Ok(())
}
