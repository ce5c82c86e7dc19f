// crates/usecase/src/reducer.rs
use media_split_domain::{BoundsList, WidthBounds, bounds};
use media_split_shared_kernel::Result;

use crate::resolver::CandidateRecord;

/// Result of reducing one rule against its candidates.
#[derive(Debug, Clone, Copy)]
pub struct ReduceOutcome {
    /// Uncovered pixel count left after all subtractions.
    pub residual: u64,
    /// Number of candidates emitted.
    pub emitted: usize,
}

impl ReduceOutcome {
    /// The source rule may be deleted iff something was emitted and nothing
    /// of its range is left uncovered.
    pub const fn removable(&self) -> bool {
        self.emitted > 0 && self.residual == 0
    }
}

/// Drive coverage reduction for one rule.
///
/// Every candidate is emitted exactly once, whether or not it still overlaps
/// the running remainder; subtraction happens after its emission. The
/// remainder starts as the rule's own bounds.
pub fn reduce<F>(
    rule_bounds: WidthBounds,
    candidates: &[CandidateRecord],
    mut emit: F,
) -> Result<ReduceOutcome>
where
    F: FnMut(&CandidateRecord) -> Result<()>,
{
    let mut remainder: BoundsList = vec![rule_bounds];
    for candidate in candidates {
        emit(candidate)?;
        remainder = bounds::subtract_all(&remainder, candidate.bounds);
    }

    Ok(ReduceOutcome {
        residual: bounds::residual_size(&remainder),
        emitted: candidates.len(),
    })
}

#[cfg(test)]
mod tests {
    use media_split_domain::Edge;

    use super::*;

    fn px(min: i64, max: i64) -> WidthBounds {
        WidthBounds::bounded(Edge::Px(min), Edge::Px(max))
    }

    fn candidate(label: &str, bounds: WidthBounds) -> CandidateRecord {
        CandidateRecord { breakpoint_label: label.to_string(), bounds }
    }

    #[test]
    fn full_coverage_is_removable() {
        let candidates = vec![candidate("small", px(0, 768)), candidate("large", px(768, 1200))];
        let mut emitted = Vec::new();
        let outcome = reduce(px(0, 1200), &candidates, |c| {
            emitted.push(c.breakpoint_label.clone());
            Ok(())
        })
        .unwrap();
        assert_eq!(emitted, ["small", "large"]);
        assert_eq!(outcome.residual, 0);
        assert!(outcome.removable());
    }

    #[test]
    fn partial_coverage_is_retained() {
        let candidates = vec![candidate("small", px(0, 600))];
        let outcome = reduce(px(0, 1200), &candidates, |_| Ok(())).unwrap();
        assert_eq!(outcome.residual, 599);
        assert!(!outcome.removable());
    }

    #[test]
    fn no_candidates_is_never_removable() {
        let outcome = reduce(px(0, 1200), &[], |_| Ok(())).unwrap();
        assert!(!outcome.removable());
    }

    #[test]
    fn emission_fires_even_for_non_overlapping_candidates() {
        // An alias-matched breakpoint may not overlap at all; it still emits.
        let candidates = vec![candidate("offscreen", px(5000, 6000))];
        let mut calls = 0;
        let outcome = reduce(px(0, 100), &candidates, |_| {
            calls += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(calls, 1);
        assert_eq!(outcome.residual, 99);
    }

    #[test]
    fn duplicate_candidates_emit_twice() {
        let candidates = vec![candidate("small", px(0, 768)), candidate("small", px(0, 768))];
        let mut calls = 0;
        let outcome = reduce(px(0, 768), &candidates, |_| {
            calls += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(calls, 2);
        assert!(outcome.removable());
    }

    #[test]
    fn alias_matched_untracked_rule_is_removable() {
        // An untracked rule carries no width range, so one alias candidate
        // covers it outright: emit once, residual zero, source rule deletable.
        let candidates = vec![candidate("print", WidthBounds::untracked())];
        let mut calls = 0;
        let outcome = reduce(WidthBounds::untracked(), &candidates, |_| {
            calls += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(calls, 1);
        assert_eq!(outcome.residual, 0);
        assert!(outcome.removable());
    }

    #[test]
    fn untracked_rule_keeps_zero_residual_but_needs_candidates() {
        // Untracked seeds size to zero; with no candidates the rule stays.
        let outcome = reduce(WidthBounds::untracked(), &[], |_| Ok(())).unwrap();
        assert_eq!(outcome.residual, 0);
        assert!(!outcome.removable());
    }

    #[test]
    fn emit_error_propagates() {
        let candidates = vec![candidate("small", px(0, 768))];
        let result = reduce(px(0, 768), &candidates, |_| {
            Err(media_split_shared_kernel::InfrastructureError::OutputError {
                message: "sink closed".to_string(),
                source: None,
            }
            .into())
        });
        assert!(result.is_err());
    }
}
