// crates/ports/src/normalizer.rs

/// Port for condition-text normalization.
///
/// The same normalizer must be used for deriving breakpoint bounds, parsing
/// rule conditions, and alias matching, so that all three treat formatting
/// variance identically.
pub trait ConditionNormalizer: Send + Sync {
    fn normalize(&self, text: &str) -> String;
}
