// crates/domain/src/breakpoint.rs
use media_split_shared_kernel::{DomainError, DomainResult};

use crate::bounds::WidthBounds;

/// A configured named breakpoint: its label, the raw condition string from
/// configuration, that string normalized, and the derived bounds.
#[derive(Debug, Clone)]
pub struct Breakpoint {
    pub label: String,
    pub raw_query: String,
    pub normalized_query: String,
    pub bounds: WidthBounds,
}

/// Ordered, read-only table of breakpoints for one run. Declared order is
/// semantic: candidate resolution walks the table in this order.
#[derive(Debug, Clone)]
pub struct BreakpointTable {
    entries: Vec<Breakpoint>,
}

impl BreakpointTable {
    pub fn new(entries: Vec<Breakpoint>) -> DomainResult<Self> {
        let mut seen: Vec<&str> = Vec::with_capacity(entries.len());
        for entry in &entries {
            if seen.contains(&entry.label.as_str()) {
                return Err(DomainError::DuplicateBreakpoint { label: entry.label.clone() });
            }
            seen.push(&entry.label);
        }
        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bp(label: &str) -> Breakpoint {
        Breakpoint {
            label: label.to_string(),
            raw_query: String::new(),
            normalized_query: String::new(),
            bounds: WidthBounds::untracked(),
        }
    }

    #[test]
    fn preserves_declared_order() {
        let table = BreakpointTable::new(vec![bp("small"), bp("medium"), bp("large")]).unwrap();
        let labels: Vec<_> = table.iter().map(|entry| entry.label.as_str()).collect();
        assert_eq!(labels, ["small", "medium", "large"]);
    }

    #[test]
    fn rejects_duplicate_labels() {
        let err = BreakpointTable::new(vec![bp("small"), bp("small")]).unwrap_err();
        assert!(matches!(err, DomainError::DuplicateBreakpoint { label } if label == "small"));
    }
}
