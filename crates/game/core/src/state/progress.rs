//! Run-level progression bookkeeping.

/// Index into the fixed stage order.
///
/// Persists for the lifetime of a save. Advancing past the final stage
/// holds at the final entry; there is no wrap and no separate
/// "run complete" state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    pub stage_index: usize,
}

impl Progress {
    /// Moves to the next stage, clamped to the last valid index.
    pub fn advance(&mut self, stage_count: usize) {
        debug_assert!(stage_count > 0, "stage order is never empty");
        self.stage_index = (self.stage_index + 1).min(stage_count.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_clamps_at_the_final_stage() {
        let mut progress = Progress::default();
        for expected in [1, 2, 2, 2] {
            progress.advance(3);
            assert_eq!(progress.stage_index, expected);
        }
    }
}
