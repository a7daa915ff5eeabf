// The five loop patterns, each writing its lines to any `Write` sink.
// Every counter lives inside its own function; nothing is shared between them.

use std::fmt;
use std::io::{self, Write};

use tracing::trace;

use crate::bounds::LoopBounds;

//==============================================================================
// Pattern catalogue
//==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Condition,
    Classic,
    Range,
    Infinite,
    Continue,
}

impl Pattern {
    /// Execution order of the demo.
    pub const ALL: [Pattern; 5] = [
        Pattern::Condition,
        Pattern::Classic,
        Pattern::Range,
        Pattern::Infinite,
        Pattern::Continue,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Condition => "condition",
            Pattern::Classic => "classic",
            Pattern::Range => "range",
            Pattern::Infinite => "infinite",
            Pattern::Continue => "continue",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Pattern::Condition => "while with a single condition",
            Pattern::Classic => "init, condition and update",
            Pattern::Range => "for over a range",
            Pattern::Infinite => "loop with break",
            Pattern::Continue => "continue to the next iteration",
        }
    }

    /// The lines this pattern prints for `bounds`, derived with iterator
    /// adapters instead of the loop itself.
    pub fn expected_lines(self, bounds: &LoopBounds) -> Vec<String> {
        match self {
            Pattern::Condition => (bounds.condition_start..=bounds.condition_limit)
                .map(|i| i.to_string())
                .collect(),
            Pattern::Classic => (bounds.classic_start..bounds.classic_limit)
                .map(|j| j.to_string())
                .collect(),
            Pattern::Range => (0..bounds.range_len)
                .map(|i| format!("range {i}"))
                .collect(),
            Pattern::Infinite => vec!["loop".to_string()],
            Pattern::Continue => (0..bounds.filtered_len)
                .filter(|n| n % 2 == 1)
                .map(|n| n.to_string())
                .collect(),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//==============================================================================
// Loop bodies
//==============================================================================

/// Prints `i` while `i <= condition_limit`, starting at `condition_start`.
pub fn condition_loop<W: Write>(out: &mut W, bounds: &LoopBounds) -> io::Result<usize> {
    let mut written = 0;
    let mut i = bounds.condition_start;
    while i <= bounds.condition_limit {
        writeln!(out, "{i}")?;
        trace!(value = i, "printed");
        written += 1;
        // Stop at the top of the counter's range instead of wrapping
        match i.checked_add(1) {
            Some(next) => i = next,
            None => break,
        }
    }
    Ok(written)
}

/// Prints `j` for `j = classic_start; j < classic_limit; j += 1`.
pub fn classic_loop<W: Write>(out: &mut W, bounds: &LoopBounds) -> io::Result<usize> {
    let mut written = 0;
    let mut j = bounds.classic_start;
    while j < bounds.classic_limit {
        writeln!(out, "{j}")?;
        trace!(value = j, "printed");
        written += 1;
        j += 1;
    }
    Ok(written)
}

/// Prints `range i` for every value of `0..range_len`.
pub fn range_loop<W: Write>(out: &mut W, bounds: &LoopBounds) -> io::Result<usize> {
    let mut written = 0;
    for i in 0..bounds.range_len {
        writeln!(out, "range {i}")?;
        trace!(value = i, "printed");
        written += 1;
    }
    Ok(written)
}

/// Prints `loop` once. The loop has no condition; `break` is the only exit.
#[allow(clippy::never_loop)]
pub fn infinite_loop<W: Write>(out: &mut W, _bounds: &LoopBounds) -> io::Result<usize> {
    let written = loop {
        writeln!(out, "loop")?;
        trace!("printed");
        break 1;
    };
    Ok(written)
}

/// Prints the odd values of `0..filtered_len`, skipping even ones with `continue`.
pub fn continue_loop<W: Write>(out: &mut W, bounds: &LoopBounds) -> io::Result<usize> {
    let mut written = 0;
    for n in 0..bounds.filtered_len {
        if n % 2 == 0 {
            continue;
        }
        writeln!(out, "{n}")?;
        trace!(value = n, "printed");
        written += 1;
    }
    Ok(written)
}
