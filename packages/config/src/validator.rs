//! Structural validation of untrusted configuration values.
//!
//! Imported or persisted JSON is checked field by field against the schema
//! before it is ever deserialized into a [`Configuration`], so that every
//! violated rule produces its own message and nothing panics on malformed
//! input.

use serde_json::{Map, Value};
use tracing::debug;

use crate::model::{millis, Configuration};

/// Outcome of validating an untrusted value
#[derive(Debug, Clone, PartialEq)]
pub enum Validation<T> {
    Valid(T),
    /// One human-readable message per violated rule
    Invalid(Vec<String>),
}

impl<T> Validation<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    pub fn errors(&self) -> &[String] {
        match self {
            Validation::Valid(_) => &[],
            Validation::Invalid(errors) => errors,
        }
    }

    pub fn into_result(self) -> Result<T, Vec<String>> {
        match self {
            Validation::Valid(value) => Ok(value),
            Validation::Invalid(errors) => Err(errors),
        }
    }
}

/// True iff `candidate` is a structurally valid configuration
pub fn is_valid(candidate: &Value) -> bool {
    validate(candidate).is_valid()
}

/// Validate an untrusted value against the configuration schema
pub fn validate(candidate: &Value) -> Validation<Configuration> {
    let mut errors = Vec::new();

    let Some(root) = candidate.as_object() else {
        return Validation::Invalid(vec!["configuration must be an object".to_string()]);
    };

    if let Some(colors) = section(root, "colors", &mut errors) {
        non_empty_string(colors, "colors", "light", &mut errors);
        non_empty_string(colors, "colors", "dark", &mut errors);
        optional_string(colors, "colors", "specificPrefix", &mut errors);
    }

    if let Some(selectors) = section(root, "selectors", &mut errors) {
        non_empty_string(selectors, "selectors", "lightTheme", &mut errors);
        non_empty_string(selectors, "selectors", "darkTheme", &mut errors);
        string_list(selectors, "selectors", "ignored", &mut errors);
        non_empty_string(selectors, "selectors", "rootElement", &mut errors);
    }

    if let Some(paths) = section(root, "paths", &mut errors) {
        string_list(paths, "paths", "excluded", &mut errors);
    }

    if let Some(observer) = section(root, "observer", &mut errors) {
        optional_bool(observer, "observer", "childList", &mut errors);
        optional_bool(observer, "observer", "subtree", &mut errors);
        throttle_delay(observer, &mut errors);
    }

    if let Some(debug) = root.get("debug") {
        if !debug.is_boolean() {
            errors.push("debug must be a boolean".to_string());
        }
    }

    if !errors.is_empty() {
        debug!(errors = errors.len(), "configuration rejected");
        return Validation::Invalid(errors);
    }

    match serde_json::from_value::<Configuration>(candidate.clone()) {
        Ok(config) => Validation::Valid(config),
        Err(e) => Validation::Invalid(vec![format!("configuration does not match schema: {}", e)]),
    }
}

/// Re-check the non-empty invariants on an already typed configuration
pub fn check(config: &Configuration) -> Vec<String> {
    let mut errors = Vec::new();

    let required = [
        ("colors.light", &config.colors.light),
        ("colors.dark", &config.colors.dark),
        ("selectors.lightTheme", &config.selectors.light_theme),
        ("selectors.darkTheme", &config.selectors.dark_theme),
        ("selectors.rootElement", &config.selectors.root_element),
    ];

    for (field, value) in required {
        if value.is_empty() {
            errors.push(format!("{} must not be empty", field));
        }
    }

    errors
}

fn section<'a>(
    root: &'a Map<String, Value>,
    name: &str,
    errors: &mut Vec<String>,
) -> Option<&'a Map<String, Value>> {
    match root.get(name) {
        Some(Value::Object(map)) => Some(map),
        Some(_) => {
            errors.push(format!("{} must be an object", name));
            None
        }
        None => {
            errors.push(format!("{} is missing", name));
            None
        }
    }
}

fn non_empty_string(map: &Map<String, Value>, section: &str, field: &str, errors: &mut Vec<String>) {
    match map.get(field) {
        Some(Value::String(s)) if !s.is_empty() => {}
        Some(Value::String(_)) => errors.push(format!("{}.{} must not be empty", section, field)),
        Some(_) => errors.push(format!("{}.{} must be a string", section, field)),
        None => errors.push(format!("{}.{} is missing", section, field)),
    }
}

fn optional_string(map: &Map<String, Value>, section: &str, field: &str, errors: &mut Vec<String>) {
    if let Some(value) = map.get(field) {
        if !value.is_string() {
            errors.push(format!("{}.{} must be a string", section, field));
        }
    }
}

fn optional_bool(map: &Map<String, Value>, section: &str, field: &str, errors: &mut Vec<String>) {
    if let Some(value) = map.get(field) {
        if !value.is_boolean() {
            errors.push(format!("{}.{} must be a boolean", section, field));
        }
    }
}

fn string_list(map: &Map<String, Value>, section: &str, field: &str, errors: &mut Vec<String>) {
    match map.get(field) {
        Some(Value::Array(items)) => {
            if items.iter().any(|item| !item.is_string()) {
                errors.push(format!("{}.{} must only contain strings", section, field));
            }
        }
        Some(_) => errors.push(format!("{}.{} must be an array", section, field)),
        None => errors.push(format!("{}.{} is missing", section, field)),
    }
}

fn throttle_delay(map: &Map<String, Value>, errors: &mut Vec<String>) {
    match map.get("throttleDelay") {
        Some(Value::Number(n)) => {
            if millis(n).is_none() {
                errors.push("observer.throttleDelay must be non-negative".to_string());
            }
        }
        Some(_) => errors.push("observer.throttleDelay must be a number".to_string()),
        None => errors.push("observer.throttleDelay is missing".to_string()),
    }
}
