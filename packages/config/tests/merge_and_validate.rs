//! Merge and validation behavior across the preset catalog

use listskin_config::{
    is_valid, merge, presets, validate, ColorsPatch, ConfigPatch, Configuration, ObserverPatch,
    PathsPatch, SelectorsPatch, Validation,
};

fn sample_patches() -> Vec<ConfigPatch> {
    vec![
        ConfigPatch::default(),
        ConfigPatch {
            colors: Some(ColorsPatch {
                light: Some("red".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        },
        ConfigPatch {
            selectors: Some(SelectorsPatch {
                ignored: Some(vec![".a".to_string(), ".b".to_string()]),
                root_element: Some("#app".to_string()),
                ..Default::default()
            }),
            paths: Some(PathsPatch {
                excluded: Some(vec!["/admin".to_string()]),
            }),
            ..Default::default()
        },
        ConfigPatch {
            observer: Some(ObserverPatch {
                child_list: Some(false),
                ..Default::default()
            }),
            debug: Some(true),
            ..Default::default()
        },
    ]
}

#[test]
fn test_merge_agrees_with_patch_or_base() {
    for preset in presets() {
        for patch in sample_patches() {
            let base = preset.config.clone();
            let merged = merge(&base, &patch);

            assert_eq!(base, preset.config, "base mutated");

            match &patch.colors {
                Some(colors) => {
                    assert_eq!(&merged.colors.light, colors.light.as_ref().unwrap_or(&base.colors.light));
                    assert_eq!(&merged.colors.dark, colors.dark.as_ref().unwrap_or(&base.colors.dark));
                }
                None => assert_eq!(merged.colors, base.colors),
            }
            match &patch.selectors {
                Some(selectors) => {
                    assert_eq!(
                        &merged.selectors.ignored,
                        selectors.ignored.as_ref().unwrap_or(&base.selectors.ignored)
                    );
                    assert_eq!(merged.selectors.light_theme, base.selectors.light_theme);
                }
                None => assert_eq!(merged.selectors, base.selectors),
            }
            if patch.paths.is_none() {
                assert_eq!(merged.paths, base.paths);
            }
            if patch.observer.is_none() {
                assert_eq!(merged.observer, base.observer);
            }
            assert_eq!(merged.debug, patch.debug.unwrap_or(base.debug));
        }
    }
}

#[test]
fn test_export_import_export_round_trip() {
    for preset in presets() {
        let exported = preset.config.to_json().unwrap();
        let imported = Configuration::from_json(&exported).unwrap();

        assert_eq!(imported, preset.config);
        assert_eq!(imported.to_json().unwrap(), exported);
    }
}

#[test]
fn test_validate_returns_typed_config() {
    let value = serde_json::to_value(Configuration::default()).unwrap();

    match validate(&value) {
        Validation::Valid(config) => assert_eq!(config, Configuration::default()),
        Validation::Invalid(errors) => panic!("unexpected errors: {:?}", errors),
    }
}

#[test]
fn test_validate_never_panics_on_garbage() {
    let inputs = [
        "null",
        "[]",
        "{}",
        r#"{"colors": null, "selectors": 3, "paths": "x", "observer": []}"#,
        r#"{"colors": {"light": 1, "dark": true}}"#,
        r#"{"observer": {"throttleDelay": 1.5}}"#,
    ];

    for input in inputs {
        let value: serde_json::Value = serde_json::from_str(input).unwrap();
        assert!(!is_valid(&value), "{} should be invalid", input);
    }
}
