//! Pre-render validation reports.
//!
//! Rendering trusts its input; these helpers are what callers run first.

use listskin_config::{check, Configuration, ModuleConfiguration};
use url::Url;

use crate::modular::generator_for;

/// Outcome of a validation pass, one message per violated rule
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

pub fn validate_config(config: &Configuration) -> ValidationReport {
    ValidationReport::from_errors(check(config))
}

pub fn validate_module_config(config: &ModuleConfiguration) -> ValidationReport {
    let mut errors = Vec::new();

    let enabled = config.enabled_ids();
    if enabled.is_empty() {
        errors.push("At least one beautification module must be enabled".to_string());
    }

    for id in enabled {
        if let Some(module) = config.get(id) {
            errors.extend(generator_for(id).validate(module));
        }
    }

    ValidationReport::from_errors(errors)
}

/// Well-formed absolute URL
pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok()
}
