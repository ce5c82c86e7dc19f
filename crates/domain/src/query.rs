// crates/domain/src/query.rs
//! Width-condition parsing.
//!
//! Turns a single normalized media condition into a [`WidthBounds`] value.
//! Conditions with at least one positive `min-width` / `max-width` pixel
//! literal become bounded intervals; everything else stays untracked, with
//! any zero or negative literal carried through unmodified.

use std::sync::OnceLock;

use regex::Regex;

use crate::bounds::{Edge, WidthBounds};

fn min_width_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"min-width:\s*(-?\d+)px").unwrap())
}

fn max_width_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"max-width:\s*(-?\d+)px").unwrap())
}

fn capture_px(re: &Regex, text: &str) -> Option<i64> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok())
}

/// Parse an already-normalized width condition.
///
/// The caller is responsible for normalizing the raw condition text first,
/// with the same normalizer used for alias matching, so both see identical
/// formatting.
pub fn parse_width_condition(normalized: &str) -> WidthBounds {
    let min_px = capture_px(min_width_re(), normalized);
    let max_px = capture_px(max_width_re(), normalized);

    // Only a strictly positive literal on either side makes the condition
    // tracked. Zero and negative literals pass through untouched; alias
    // matching still applies to such conditions.
    let tracked = min_px.is_some_and(|v| v > 0) || max_px.is_some_and(|v| v > 0);
    if !tracked {
        return WidthBounds::Untracked { min: min_px, max: max_px };
    }

    let min = match min_px {
        Some(v) if v >= 0 => Edge::Px(v),
        _ => Edge::NegInf,
    };
    let max = match max_px {
        Some(v) if v >= 0 => Edge::Px(v),
        _ => Edge::PosInf,
    };
    WidthBounds::bounded(min, max)
}
