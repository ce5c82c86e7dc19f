// crates/ports/src/stylesheet.rs
use serde::{Deserialize, Serialize};

/// DTO representing one top-level conditional width rule of a stylesheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaRuleDto {
    /// Stable handle for removal; meaningful only to the issuing source.
    pub index: usize,
    /// Raw condition text as written in the source, untrimmed of meaning.
    pub raw_condition: String,
    /// The full rule (prelude and body) re-rendered as CSS text.
    pub css_text: String,
}

/// Port over the CSS-processing collaborator: one parsed stylesheet unit.
pub trait StylesheetSource {
    /// Enumerate the top-level `@media` rules in source order.
    fn media_rules(&self) -> Vec<MediaRuleDto>;

    /// Remove the rules with the given handles from the tree.
    fn remove_rules(&mut self, indices: &[usize]);

    /// Re-render the remaining stylesheet to CSS text.
    fn render(&self) -> String;
}
