// src/config.rs
use std::path::Path;

use media_split_domain::GroupRule;
use media_split_shared_kernel::{DomainError, InfrastructureError, Result};
use media_split_usecase::BreakpointSpec;
use serde::Deserialize;

/// On-disk configuration. Breakpoints and groups are arrays because their
/// declared order is semantic: table order drives candidate resolution and
/// the first matching group wins.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub breakpoints: Vec<BreakpointEntry>,
    #[serde(default)]
    pub groups: Vec<GroupEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BreakpointEntry {
    pub label: String,
    pub query: String,
}

/// A group claims units either by regex `pattern` or by explicit `members`;
/// exactly one of the two must be present.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupEntry {
    pub label: String,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub members: Option<Vec<String>>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| {
            InfrastructureError::FileRead { path: path.to_path_buf(), source }
        })?;

        let is_yaml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        if is_yaml {
            return Self::load_yaml(&text, path);
        }
        let config: Self = serde_json::from_str(&text)
            .map_err(InfrastructureError::from)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "yaml")]
    fn load_yaml(text: &str, _path: &Path) -> Result<Self> {
        let config: Self = serde_yaml::from_str(text).map_err(InfrastructureError::from)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(not(feature = "yaml"))]
    fn load_yaml(_text: &str, path: &Path) -> Result<Self> {
        Err(media_split_shared_kernel::PresentationError::ConfigBuildFailed(format!(
            "'{}' is YAML, but this build lacks the `yaml` feature",
            path.display()
        ))
        .into())
    }

    fn validate(&self) -> Result<()> {
        if self.breakpoints.is_empty() {
            return Err(DomainError::InvalidConfiguration {
                reason: "no breakpoints configured".to_string(),
            }
            .into());
        }
        for group in &self.groups {
            if group.pattern.is_some() == group.members.is_some() {
                return Err(DomainError::InvalidConfiguration {
                    reason: format!(
                        "group '{}' must set exactly one of `pattern` or `members`",
                        group.label
                    ),
                }
                .into());
            }
        }
        Ok(())
    }

    pub fn breakpoint_specs(&self) -> Vec<BreakpointSpec> {
        self.breakpoints
            .iter()
            .map(|entry| BreakpointSpec { label: entry.label.clone(), query: entry.query.clone() })
            .collect()
    }

    pub fn group_rules(&self) -> Result<Vec<GroupRule>> {
        self.groups
            .iter()
            .map(|entry| match (&entry.pattern, &entry.members) {
                (Some(pattern), None) => Ok(GroupRule::pattern(&entry.label, pattern)?),
                (None, Some(members)) => Ok(GroupRule::members(&entry.label, members.clone())),
                // Ruled out by validate().
                _ => Err(DomainError::InvalidConfiguration {
                    reason: format!("group '{}' is ambiguous", entry.label),
                }
                .into()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(json: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, json).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_breakpoints_and_groups() {
        let (_dir, path) = write_config(
            r#"{
                "breakpoints": [
                    { "label": "small", "query": "(max-width: 767px)" },
                    { "label": "large", "query": "(min-width: 768px)" }
                ],
                "groups": [
                    { "label": "layout", "members": ["header", "footer"] },
                    { "label": "pages", "pattern": "^page-" }
                ]
            }"#,
        );
        let config = ConfigFile::load(&path).unwrap();
        assert_eq!(config.breakpoint_specs().len(), 2);
        let rules = config.group_rules().unwrap();
        assert_eq!(rules.len(), 2);
        assert!(rules[0].matches("footer"));
        assert!(rules[1].matches("page-about"));
    }

    #[test]
    fn rejects_group_with_both_matchers() {
        let (_dir, path) = write_config(
            r#"{
                "breakpoints": [ { "label": "small", "query": "(max-width: 767px)" } ],
                "groups": [ { "label": "bad", "pattern": "x", "members": ["y"] } ]
            }"#,
        );
        assert!(ConfigFile::load(&path).is_err());
    }

    #[test]
    fn rejects_empty_breakpoints() {
        let (_dir, path) = write_config(r#"{ "breakpoints": [] }"#);
        assert!(ConfigFile::load(&path).is_err());
    }
}
