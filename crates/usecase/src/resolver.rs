// crates/usecase/src/resolver.rs
use media_split_domain::{BreakpointTable, WidthBounds, bounds};

/// One breakpoint selected as relevant to a rule, in resolver order.
#[derive(Debug, Clone)]
pub struct CandidateRecord {
    pub breakpoint_label: String,
    pub bounds: WidthBounds,
}

/// Select the breakpoints that apply to a rule: first every breakpoint whose
/// bounds intersect the rule's bounds, then every breakpoint whose configured
/// query normalizes to exactly the rule's normalized condition.
///
/// Both passes walk the table in declared order and the results are
/// concatenated without deduplication; a breakpoint matching both ways is
/// emitted and consumed twice, intentionally.
pub fn resolve_candidates(
    normalized_condition: &str,
    rule_bounds: WidthBounds,
    table: &BreakpointTable,
) -> Vec<CandidateRecord> {
    let mut candidates: Vec<CandidateRecord> = table
        .iter()
        .filter(|breakpoint| bounds::intersects(rule_bounds, breakpoint.bounds))
        .map(CandidateRecord::from)
        .collect();

    candidates.extend(
        table
            .iter()
            .filter(|breakpoint| breakpoint.normalized_query == normalized_condition)
            .map(CandidateRecord::from),
    );

    candidates
}

impl From<&media_split_domain::Breakpoint> for CandidateRecord {
    fn from(breakpoint: &media_split_domain::Breakpoint) -> Self {
        Self {
            breakpoint_label: breakpoint.label.clone(),
            bounds: breakpoint.bounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use media_split_domain::{Breakpoint, Edge};

    use super::*;

    fn breakpoint(label: &str, normalized_query: &str, bounds: WidthBounds) -> Breakpoint {
        Breakpoint {
            label: label.to_string(),
            raw_query: normalized_query.to_string(),
            normalized_query: normalized_query.to_string(),
            bounds,
        }
    }

    fn px(min: i64, max: i64) -> WidthBounds {
        WidthBounds::bounded(Edge::Px(min), Edge::Px(max))
    }

    fn table(entries: Vec<Breakpoint>) -> BreakpointTable {
        BreakpointTable::new(entries).unwrap()
    }

    #[test]
    fn intersection_matches_keep_table_order() {
        let table = table(vec![
            breakpoint("small", "(max-width: 768px)", px(0, 768)),
            breakpoint("large", "(min-width: 768px)", px(768, 1200)),
        ]);
        let candidates = resolve_candidates("(max-width: 1200px)", px(0, 1200), &table);
        let labels: Vec<_> = candidates.iter().map(|c| c.breakpoint_label.as_str()).collect();
        assert_eq!(labels, ["small", "large"]);
    }

    #[test]
    fn alias_match_ignores_bounds() {
        let table = table(vec![breakpoint("print", "print", WidthBounds::untracked())]);
        let candidates = resolve_candidates("print", WidthBounds::untracked(), &table);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].breakpoint_label, "print");
    }

    #[test]
    fn double_match_appears_twice() {
        let table = table(vec![breakpoint("small", "(max-width: 768px)", px(0, 768))]);
        let candidates = resolve_candidates("(max-width: 768px)", px(0, 768), &table);
        let labels: Vec<_> = candidates.iter().map(|c| c.breakpoint_label.as_str()).collect();
        assert_eq!(labels, ["small", "small"]);
    }

    #[test]
    fn untracked_rule_never_matches_by_bounds() {
        let table = table(vec![breakpoint("small", "(max-width: 768px)", px(0, 768))]);
        let candidates = resolve_candidates("screen", WidthBounds::untracked(), &table);
        assert!(candidates.is_empty());
    }
}
