// crates/domain/src/bounds.rs
use serde::{Deserialize, Serialize};

/// One endpoint of a half-open pixel interval.
///
/// Derived ordering places `NegInf` below every finite pixel count and
/// `PosInf` above every finite pixel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Edge {
    NegInf,
    Px(i64),
    PosInf,
}

/// Width information extracted from a media condition.
///
/// `Bounded` models the half-open pixel interval `[min, max)`. `Empty` is the
/// absorbing zero-width interval. `Untracked` means the condition carried no
/// usable width information; it keeps the literal extracted values (if any)
/// untouched, and never satisfies inclusion or intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidthBounds {
    Bounded { min: Edge, max: Edge },
    Empty,
    Untracked { min: Option<i64>, max: Option<i64> },
}

/// Remainder accumulator for coverage reduction. May hold duplicates and
/// `Empty` entries; those are pruned only when sizing.
pub type BoundsList = Vec<WidthBounds>;

impl WidthBounds {
    /// Construct a bounded interval, normalizing degenerate (equal-endpoint)
    /// intervals to `Empty`.
    pub fn bounded(min: Edge, max: Edge) -> Self {
        if min == max { Self::Empty } else { Self::Bounded { min, max } }
    }

    /// An `Untracked` value with no literal sides.
    pub const fn untracked() -> Self {
        Self::Untracked { min: None, max: None }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// True iff `b` fully contains `a`. Only bounded intervals ever contain or
/// are contained; `Empty` and `Untracked` fail in both directions.
pub fn included(a: WidthBounds, b: WidthBounds) -> bool {
    match (a, b) {
        (
            WidthBounds::Bounded { min: a_min, max: a_max },
            WidthBounds::Bounded { min: b_min, max: b_max },
        ) => a_min >= b_min && a_max <= b_max,
        _ => false,
    }
}

/// Half-open overlap test. Two intervals sharing only a boundary point do
/// not intersect.
pub fn intersects(a: WidthBounds, b: WidthBounds) -> bool {
    match (a, b) {
        (
            WidthBounds::Bounded { min: a_min, max: a_max },
            WidthBounds::Bounded { min: b_min, max: b_max },
        ) => {
            if a_min <= b_min { a_max > b_min } else { a_min < b_max }
        }
        _ => false,
    }
}

/// Subtract `b` from `a`, returning the uncovered pieces.
///
/// Splitting `a` around a strictly interior `b` yields two pieces; every
/// other case yields one. Degenerate pieces come back as `Empty` rather than
/// being dropped, so the caller sees one entry per algebraic branch.
pub fn subtract(a: WidthBounds, b: WidthBounds) -> BoundsList {
    let (a_min, a_max) = match a {
        WidthBounds::Empty => return vec![WidthBounds::Empty],
        WidthBounds::Untracked { .. } => return vec![a],
        WidthBounds::Bounded { min, max } => (min, max),
    };
    let (b_min, b_max) = match b {
        // Empty and Untracked subtrahends remove nothing.
        WidthBounds::Empty | WidthBounds::Untracked { .. } => return vec![a],
        WidthBounds::Bounded { min, max } => (min, max),
    };

    if included(a, b) {
        return vec![WidthBounds::Empty];
    }
    if included(b, a) {
        // b cuts a hole out of a; keep both flanks.
        return vec![WidthBounds::bounded(a_min, b_min), WidthBounds::bounded(b_max, a_max)];
    }
    if intersects(a, b) {
        let trimmed = if a_min < b_min {
            WidthBounds::bounded(a_min, b_min)
        } else {
            WidthBounds::bounded(b_max, a_max)
        };
        return vec![trimmed];
    }

    vec![a]
}

/// Subtract `b` from every element of `list`, flattening the results.
pub fn subtract_all(list: &BoundsList, b: WidthBounds) -> BoundsList {
    list.iter().flat_map(|&piece| subtract(piece, b)).collect()
}

/// Number of integer pixel positions strictly enclosed by the interval.
///
/// Endpoints are boundary pixels of a half-open range, so a gap of exactly
/// one pixel encloses nothing and counts as zero; non-positive gaps clamp to
/// zero. Unbounded intervals saturate to `u64::MAX`.
pub fn size(bounds: WidthBounds) -> u64 {
    let WidthBounds::Bounded { min, max } = bounds else {
        return 0;
    };
    match (min, max) {
        (Edge::Px(lo), Edge::Px(hi)) => {
            let gap = hi - lo;
            if gap > 1 { (gap - 1) as u64 } else { 0 }
        }
        (Edge::NegInf, Edge::Px(_) | Edge::PosInf) | (Edge::Px(_), Edge::PosInf) => u64::MAX,
        _ => 0,
    }
}

/// Total uncovered pixel count of a remainder list, skipping `Empty` entries.
pub fn residual_size(list: &BoundsList) -> u64 {
    list.iter()
        .filter(|piece| !piece.is_empty())
        .fold(0_u64, |acc, &piece| acc.saturating_add(size(piece)))
}
