use std::io;

use thiserror::Error;

use crate::patterns::Pattern;

/// The only way the demo can fail: its output cannot be written.
#[derive(Error, Debug)]
pub enum LoopError {
    #[error("failed to write output of the {pattern} loop: {source}")]
    Write {
        pattern: Pattern,
        #[source]
        source: io::Error,
    },

    #[error("failed to flush output: {0}")]
    Flush(#[from] io::Error),
}

impl LoopError {
    /// The pattern that was writing when the error happened, if any.
    pub fn pattern(&self) -> Option<Pattern> {
        match self {
            LoopError::Write { pattern, .. } => Some(*pattern),
            LoopError::Flush(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_write_error_display() {
        let error = LoopError::Write {
            pattern: Pattern::Range,
            source: io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"),
        };
        let display = error.to_string();
        assert!(display.contains("range loop"));
        assert!(display.contains("pipe closed"));
        assert!(error.source().is_some());
        assert_eq!(error.pattern(), Some(Pattern::Range));
    }

    #[test]
    fn test_flush_error_from_io() {
        let error: LoopError = io::Error::other("disk full").into();
        assert!(matches!(error, LoopError::Flush(_)));
        assert_eq!(error.pattern(), None);
        assert_eq!(error.to_string(), "failed to flush output: disk full");
    }
}
