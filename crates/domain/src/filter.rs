//! Exposure policy: which hub entities the assistant may see and control.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::entity::EntityId;

/// Raw include/exclude lists as they appear in configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub include_domains: Vec<String>,
    pub include_entities: Vec<String>,
    pub exclude_domains: Vec<String>,
    pub exclude_entities: Vec<String>,
}

/// Immutable entity-exposure decision built from a [`FilterConfig`].
///
/// Rules are evaluated as follows:
///
/// - no rules: expose everything;
/// - only includes: the entity or its domain is included;
/// - only excludes: neither the entity nor its domain is excluded;
/// - both, with included domains: the entity is included, or its domain is
///   included and the entity is not excluded;
/// - both, with excluded domains only: the entity is not excluded, and its
///   domain is not excluded unless the entity is explicitly included;
/// - otherwise: the entity is explicitly included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExposurePolicy {
    include_domains: HashSet<String>,
    include_entities: HashSet<String>,
    exclude_domains: HashSet<String>,
    exclude_entities: HashSet<String>,
}

impl ExposurePolicy {
    #[must_use]
    pub fn new(config: &FilterConfig) -> Self {
        let set = |items: &[String]| items.iter().cloned().collect::<HashSet<_>>();
        Self {
            include_domains: set(&config.include_domains),
            include_entities: set(&config.include_entities),
            exclude_domains: set(&config.exclude_domains),
            exclude_entities: set(&config.exclude_entities),
        }
    }

    /// Policy that exposes every entity.
    #[must_use]
    pub fn allow_all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn should_expose(&self, entity_id: &EntityId) -> bool {
        let id = entity_id.as_str();
        let domain = entity_id.domain_str();

        let has_includes = !self.include_domains.is_empty() || !self.include_entities.is_empty();
        let has_excludes = !self.exclude_domains.is_empty() || !self.exclude_entities.is_empty();

        let entity_included = self.include_entities.contains(id);
        let entity_excluded = self.exclude_entities.contains(id);
        let domain_included = self.include_domains.contains(domain);
        let domain_excluded = self.exclude_domains.contains(domain);

        match (has_includes, has_excludes) {
            (false, false) => true,
            (true, false) => entity_included || domain_included,
            (false, true) => !entity_excluded && !domain_excluded,
            (true, true) if !self.include_domains.is_empty() => {
                entity_included || (domain_included && !entity_excluded)
            }
            (true, true) if !self.exclude_domains.is_empty() => {
                !entity_excluded && (!domain_excluded || entity_included)
            }
            (true, true) => entity_included,
        }
    }
}

impl From<&FilterConfig> for ExposurePolicy {
    fn from(config: &FilterConfig) -> Self {
        Self::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> EntityId {
        raw.parse().unwrap()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn should_expose_everything_without_rules() {
        let policy = ExposurePolicy::allow_all();
        assert!(policy.should_expose(&id("light.kitchen")));
        assert!(policy.should_expose(&id("script.anything")));
    }

    #[test]
    fn should_expose_only_included_entities_and_domains() {
        let policy = ExposurePolicy::new(&FilterConfig {
            include_domains: strings(&["light"]),
            include_entities: strings(&["switch.porch"]),
            ..FilterConfig::default()
        });
        assert!(policy.should_expose(&id("light.kitchen")));
        assert!(policy.should_expose(&id("switch.porch")));
        assert!(!policy.should_expose(&id("switch.garden")));
    }

    #[test]
    fn should_hide_excluded_domain_and_entity() {
        let policy = ExposurePolicy::new(&FilterConfig {
            exclude_domains: strings(&["script"]),
            exclude_entities: strings(&["cover.deny"]),
            ..FilterConfig::default()
        });
        let visible: Vec<&str> = ["switch.test", "script.deny", "cover.deny"]
            .into_iter()
            .filter(|raw| policy.should_expose(&id(raw)))
            .collect();
        assert_eq!(visible, vec!["switch.test"]);
    }

    #[test]
    fn should_let_excluded_entity_win_inside_included_domain() {
        let policy = ExposurePolicy::new(&FilterConfig {
            include_domains: strings(&["light"]),
            exclude_entities: strings(&["light.attic"]),
            ..FilterConfig::default()
        });
        assert!(policy.should_expose(&id("light.kitchen")));
        assert!(!policy.should_expose(&id("light.attic")));
        assert!(!policy.should_expose(&id("switch.porch")));
    }

    #[test]
    fn should_let_included_entity_win_inside_excluded_domain() {
        let policy = ExposurePolicy::new(&FilterConfig {
            include_entities: strings(&["script.good_night"]),
            exclude_domains: strings(&["script"]),
            ..FilterConfig::default()
        });
        assert!(policy.should_expose(&id("script.good_night")));
        assert!(!policy.should_expose(&id("script.other")));
        assert!(policy.should_expose(&id("light.kitchen")));
    }

    #[test]
    fn should_require_explicit_include_when_only_entities_listed() {
        let policy = ExposurePolicy::new(&FilterConfig {
            include_entities: strings(&["light.kitchen"]),
            exclude_entities: strings(&["light.attic"]),
            ..FilterConfig::default()
        });
        assert!(policy.should_expose(&id("light.kitchen")));
        assert!(!policy.should_expose(&id("light.attic")));
        assert!(!policy.should_expose(&id("switch.porch")));
    }

    #[test]
    fn should_deserialize_partial_config() {
        let config: FilterConfig =
            serde_json::from_str(r#"{"exclude_domains": ["script"]}"#).unwrap();
        assert_eq!(config.exclude_domains, vec!["script".to_string()]);
        assert!(config.include_entities.is_empty());
    }
}
