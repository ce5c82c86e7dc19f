// crates/domain/src/group.rs
use media_split_shared_kernel::{DomainError, DomainResult};
use regex::Regex;

/// How a group claims source units: by regex pattern on the unit name, or by
/// explicit membership list.
#[derive(Debug, Clone)]
pub enum GroupMatcher {
    Pattern(Regex),
    Members(Vec<String>),
}

/// One configured group. Groups are scanned in declared order; the first
/// match wins.
#[derive(Debug, Clone)]
pub struct GroupRule {
    pub label: String,
    matcher: GroupMatcher,
}

impl GroupRule {
    pub fn pattern(label: impl Into<String>, pattern: &str) -> DomainResult<Self> {
        let regex = Regex::new(pattern).map_err(|e| DomainError::InvalidPattern {
            pattern: pattern.to_string(),
            details: e.to_string(),
            source: Some(Box::new(e)),
        })?;
        Ok(Self { label: label.into(), matcher: GroupMatcher::Pattern(regex) })
    }

    pub fn members(label: impl Into<String>, members: Vec<String>) -> Self {
        Self { label: label.into(), matcher: GroupMatcher::Members(members) }
    }

    pub fn matches(&self, unit_name: &str) -> bool {
        match &self.matcher {
            GroupMatcher::Pattern(regex) => regex.is_match(unit_name),
            GroupMatcher::Members(members) => members.iter().any(|member| member == unit_name),
        }
    }
}

/// First group claiming `unit_name`, in declared order.
pub fn resolve_group<'a>(rules: &'a [GroupRule], unit_name: &str) -> Option<&'a str> {
    rules
        .iter()
        .find(|rule| rule.matches(unit_name))
        .map(|rule| rule.label.as_str())
}

/// Bucket label for one emission: `"<group-or-own-name>-<breakpoint>"`.
pub fn bucket_label(rules: &[GroupRule], unit_name: &str, breakpoint_label: &str) -> String {
    let owner = resolve_group(rules, unit_name).unwrap_or(unit_name);
    format!("{owner}-{breakpoint_label}")
}
