//! # Configuration Merge
//!
//! Applies a partial update to a configuration without touching the input.
//!
//! ## Semantics
//!
//! - Merge is **one level deep per top-level key**: a sub-patch overrides
//!   individual fields of the matching sub-record, nothing deeper
//! - Lists (`ignored`, `excluded`) are atomic and replaced wholesale, never
//!   merged element by element
//! - `None` means "absent": the base value is kept

use serde::{Deserialize, Serialize};

use crate::model::Configuration;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_prefix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectorsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignored: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_element: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PathsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObserverPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_list: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtree: Option<bool>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::model::deserialize_optional_millis"
    )]
    pub throttle_delay: Option<u64>,
}

/// Partial configuration accepted by [`merge`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorsPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selectors: Option<SelectorsPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<PathsPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observer: Option<ObserverPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
}

impl ConfigPatch {
    pub fn is_empty(&self) -> bool {
        self == &ConfigPatch::default()
    }
}

fn apply<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

impl ColorsPatch {
    pub fn apply_to(&self, colors: &mut crate::ThemeColors) {
        apply(&mut colors.light, &self.light);
        apply(&mut colors.dark, &self.dark);
        apply(&mut colors.specific_prefix, &self.specific_prefix);
    }
}

impl SelectorsPatch {
    pub fn apply_to(&self, selectors: &mut crate::SelectorConfig) {
        apply(&mut selectors.light_theme, &self.light_theme);
        apply(&mut selectors.dark_theme, &self.dark_theme);
        apply(&mut selectors.ignored, &self.ignored);
        apply(&mut selectors.root_element, &self.root_element);
    }
}

impl PathsPatch {
    pub fn apply_to(&self, paths: &mut crate::PathConfig) {
        apply(&mut paths.excluded, &self.excluded);
    }
}

impl ObserverPatch {
    pub fn apply_to(&self, observer: &mut crate::ObserverConfig) {
        apply(&mut observer.child_list, &self.child_list);
        apply(&mut observer.subtree, &self.subtree);
        apply(&mut observer.throttle_delay, &self.throttle_delay);
    }
}

/// Merge `patch` into a copy of `base`
pub fn merge(base: &Configuration, patch: &ConfigPatch) -> Configuration {
    let mut result = base.clone();

    if let Some(colors) = &patch.colors {
        colors.apply_to(&mut result.colors);
    }
    if let Some(selectors) = &patch.selectors {
        selectors.apply_to(&mut result.selectors);
    }
    if let Some(paths) = &patch.paths {
        paths.apply_to(&mut result.paths);
    }
    if let Some(observer) = &patch.observer {
        observer.apply_to(&mut result.observer);
    }
    apply(&mut result.debug, &patch.debug);

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_patch_is_identity() {
        let base = Configuration::default();
        assert_eq!(merge(&base, &ConfigPatch::default()), base);
    }

    #[test]
    fn test_patch_overrides_one_level() {
        let base = Configuration::default();
        let patch = ConfigPatch {
            colors: Some(ColorsPatch {
                dark: Some("black".to_string()),
                ..Default::default()
            }),
            debug: Some(true),
            ..Default::default()
        };

        let merged = merge(&base, &patch);

        assert_eq!(merged.colors.dark, "black");
        assert_eq!(merged.colors.light, base.colors.light);
        assert_eq!(merged.colors.specific_prefix, base.colors.specific_prefix);
        assert!(merged.debug);
        assert_eq!(merged.selectors, base.selectors);
    }

    #[test]
    fn test_lists_replaced_wholesale() {
        let base = Configuration::default();
        assert!(base.selectors.ignored.len() > 1);

        let patch = ConfigPatch {
            selectors: Some(SelectorsPatch {
                ignored: Some(vec!["svg".to_string()]),
                ..Default::default()
            }),
            paths: Some(PathsPatch {
                excluded: Some(vec![]),
            }),
            ..Default::default()
        };

        let merged = merge(&base, &patch);
        assert_eq!(merged.selectors.ignored, vec!["svg".to_string()]);
        assert!(merged.paths.excluded.is_empty());
        assert_eq!(merged.selectors.light_theme, base.selectors.light_theme);
    }

    #[test]
    fn test_base_not_mutated() {
        let base = Configuration::default();
        let snapshot = base.clone();

        let patch = ConfigPatch {
            observer: Some(ObserverPatch {
                throttle_delay: Some(250),
                subtree: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        };

        let merged = merge(&base, &patch);
        assert_eq!(base, snapshot);
        assert_eq!(merged.observer.throttle_delay, 250);
        assert!(!merged.observer.subtree);
        assert!(merged.observer.child_list);
    }

    #[test]
    fn test_patch_from_json() {
        let patch: ConfigPatch =
            serde_json::from_str(r#"{"colors":{"light":"red"},"observer":{"throttleDelay":40}}"#)
                .unwrap();

        let merged = merge(&Configuration::default(), &patch);
        assert_eq!(merged.colors.light, "red");
        assert_eq!(merged.observer.throttle_delay, 40);
        assert!(patch.paths.is_none());
    }

    #[test]
    fn test_patch_throttle_accepts_floats() {
        let patch: ConfigPatch =
            serde_json::from_str(r#"{"observer":{"throttleDelay":1e3}}"#).unwrap();
        assert_eq!(merge(&Configuration::default(), &patch).observer.throttle_delay, 1000);

        let patch: ConfigPatch = serde_json::from_str(r#"{"observer":{"throttleDelay":null}}"#).unwrap();
        assert!(patch.observer.unwrap().throttle_delay.is_none());

        assert!(serde_json::from_str::<ConfigPatch>(r#"{"observer":{"throttleDelay":-1}}"#).is_err());
    }

    #[test]
    fn test_null_fields_are_skipped() {
        let patch: ConfigPatch =
            serde_json::from_str(r#"{"colors":{"light":null},"debug":null}"#).unwrap();

        let base = Configuration::default();
        assert_eq!(merge(&base, &patch), base);
    }
}
