use std::io::{self, Write};

use tracing::{debug, debug_span};

use crate::bounds::LoopBounds;
use crate::error::LoopError;
use crate::patterns::{self, Pattern};

/// Prints the full transcript to standard output.
pub fn run() -> Result<(), LoopError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_to(&mut out)
}

/// Writes the full transcript with the default bounds to `out`.
pub fn run_to<W: Write>(out: &mut W) -> Result<(), LoopError> {
    run_with(out, &LoopBounds::default())
}

/// Runs every pattern in `Pattern::ALL` order, then flushes `out` once.
pub fn run_with<W: Write>(out: &mut W, bounds: &LoopBounds) -> Result<(), LoopError> {
    let mut total = 0;
    for pattern in Pattern::ALL {
        total += run_pattern(pattern, out, bounds)?;
    }
    out.flush()?;
    debug!(lines = total, "transcript written");
    Ok(())
}

/// Runs a single pattern and returns how many lines it wrote.
pub fn run_pattern<W: Write>(
    pattern: Pattern,
    out: &mut W,
    bounds: &LoopBounds,
) -> Result<usize, LoopError> {
    let span = debug_span!("pattern", name = pattern.name());
    let _enter = span.enter();

    let written = match pattern {
        Pattern::Condition => patterns::condition_loop(out, bounds),
        Pattern::Classic => patterns::classic_loop(out, bounds),
        Pattern::Range => patterns::range_loop(out, bounds),
        Pattern::Infinite => patterns::infinite_loop(out, bounds),
        Pattern::Continue => patterns::continue_loop(out, bounds),
    }
    .map_err(|source| LoopError::Write { pattern, source })?;

    debug!(lines = written, "pattern finished");
    Ok(written)
}
