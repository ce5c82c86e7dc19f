// crates/usecase/src/pipeline.rs
use std::path::Path;

use media_split_domain::{BreakpointTable, GroupRule, bucket_label, parse_width_condition};
use media_split_ports::normalizer::ConditionNormalizer;
use media_split_ports::sink::MediaSink;
use media_split_ports::stylesheet::StylesheetSource;
use media_split_shared_kernel::Result;

use crate::reducer::reduce;
use crate::resolver::resolve_candidates;

/// Run-wide context for one stylesheet unit.
pub struct UnitContext<'a> {
    pub unit_name: &'a str,
    pub source_path: &'a Path,
    pub table: &'a BreakpointTable,
    pub groups: &'a [GroupRule],
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UnitOptions {
    /// Never delete covered rules from the source.
    pub keep_rules: bool,
}

/// What happened to one unit.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitReport {
    pub rules_seen: usize,
    pub emissions: usize,
    pub removed: usize,
}

impl UnitReport {
    pub const fn modified(&self) -> bool {
        self.removed > 0
    }
}

/// Per-unit pipeline: parse each media rule's condition, resolve candidates,
/// reduce coverage with emission to the sink, and drop rules that became
/// fully redundant.
pub struct SplitUnit<'a> {
    normalizer: &'a dyn ConditionNormalizer,
    sink: &'a dyn MediaSink,
}

impl<'a> SplitUnit<'a> {
    pub fn new(normalizer: &'a dyn ConditionNormalizer, sink: &'a dyn MediaSink) -> Self {
        Self { normalizer, sink }
    }

    pub fn run(
        &self,
        ctx: &UnitContext<'_>,
        source: &mut dyn StylesheetSource,
        options: UnitOptions,
    ) -> Result<UnitReport> {
        let mut report = UnitReport::default();
        let mut to_remove = Vec::new();

        for rule in source.media_rules() {
            report.rules_seen += 1;

            let normalized = self.normalizer.normalize(&rule.raw_condition);
            let rule_bounds = parse_width_condition(&normalized);
            let candidates = resolve_candidates(&normalized, rule_bounds, ctx.table);

            let outcome = reduce(rule_bounds, &candidates, |candidate| {
                let bucket = bucket_label(ctx.groups, ctx.unit_name, &candidate.breakpoint_label);
                self.sink.add_media(&bucket, &rule.css_text, ctx.source_path, &rule.raw_condition)
            })?;

            report.emissions += outcome.emitted;
            if !options.keep_rules && outcome.removable() {
                to_remove.push(rule.index);
            }
        }

        if !to_remove.is_empty() {
            source.remove_rules(&to_remove);
            report.removed = to_remove.len();
        }

        Ok(report)
    }
}
