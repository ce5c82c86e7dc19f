// crates/usecase/src/bootstrap.rs
use media_split_domain::{Breakpoint, BreakpointTable, parse_width_condition};
use media_split_ports::normalizer::ConditionNormalizer;
use media_split_shared_kernel::Result;

/// One breakpoint as declared in configuration.
#[derive(Debug, Clone)]
pub struct BreakpointSpec {
    pub label: String,
    pub query: String,
}

/// Build the run-wide breakpoint table: normalize each configured query once,
/// derive its bounds, and freeze the result in declared order.
pub fn build_breakpoint_table(
    specs: &[BreakpointSpec],
    normalizer: &dyn ConditionNormalizer,
) -> Result<BreakpointTable> {
    let entries = specs
        .iter()
        .map(|spec| {
            let normalized_query = normalizer.normalize(&spec.query);
            let bounds = parse_width_condition(&normalized_query);
            Breakpoint {
                label: spec.label.clone(),
                raw_query: spec.query.clone(),
                normalized_query,
                bounds,
            }
        })
        .collect();

    Ok(BreakpointTable::new(entries)?)
}
