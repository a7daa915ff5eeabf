//==============================================================================
// Loop Bounds
//==============================================================================

/// The constants each loop pattern counts with.
///
/// `LoopBounds::default()` is the transcript the binary prints. Other values
/// are only reachable through the library API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopBounds {
    /// First value of the condition loop.
    pub condition_start: u32,
    /// Inclusive upper limit of the condition loop; `u32::MAX` is allowed.
    pub condition_limit: u32,
    /// Initial value of the classic loop counter.
    pub classic_start: u32,
    /// Exclusive upper limit of the classic loop.
    pub classic_limit: u32,
    /// Number of values the range loop produces.
    pub range_len: u32,
    /// Number of values the continue loop produces before filtering.
    pub filtered_len: u32,
}

impl Default for LoopBounds {
    fn default() -> Self {
        LoopBounds {
            condition_start: 1,
            condition_limit: 3,
            classic_start: 0,
            classic_limit: 3,
            range_len: 3,
            filtered_len: 6,
        }
    }
}

impl LoopBounds {
    pub fn with_condition(mut self, start: u32, limit: u32) -> Self {
        self.condition_start = start;
        self.condition_limit = limit;
        self
    }

    pub fn with_classic(mut self, start: u32, limit: u32) -> Self {
        self.classic_start = start;
        self.classic_limit = limit;
        self
    }

    pub fn with_range_len(mut self, len: u32) -> Self {
        self.range_len = len;
        self
    }

    pub fn with_filtered_len(mut self, len: u32) -> Self {
        self.filtered_len = len;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let bounds = LoopBounds::default();
        assert_eq!(bounds.condition_start, 1);
        assert_eq!(bounds.condition_limit, 3);
        assert_eq!(bounds.classic_start, 0);
        assert_eq!(bounds.classic_limit, 3);
        assert_eq!(bounds.range_len, 3);
        assert_eq!(bounds.filtered_len, 6);
    }

    #[test]
    fn test_builders_touch_only_their_fields() {
        let bounds = LoopBounds::default().with_range_len(10).with_filtered_len(0);
        assert_eq!(bounds.range_len, 10);
        assert_eq!(bounds.filtered_len, 0);
        assert_eq!(bounds.condition_limit, 3);
        assert_eq!(bounds.classic_limit, 3);
    }
}
