//! Module rendering scenarios driven through the public API

use chrono::{TimeZone, Utc};
use listskin_compiler::{
    minify_css, render_modules, validate_module_config, ModularGeneratedFiles,
};
use listskin_config::{ModuleConfiguration, ModuleId};

fn render_json(json: &str) -> ModularGeneratedFiles {
    let config = ModuleConfiguration::from_json(json).unwrap();
    let at = Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap();
    render_modules(&config, &at)
}

#[test]
fn test_light_image_only() {
    let output = render_json(
        r#"{
            "modules": {"backgroundImage": {"enabled": true, "lightImage": "https://example.com/l.jpg", "darkImage": ""}},
            "global": {"generateComments": false, "minifyOutput": false}
        }"#,
    );
    let head = &output.files.head_content;

    println!("{}", head);

    assert!(head.contains("--light-bg-image: url('https://example.com/l.jpg');"));
    assert!(head.contains("background-image: var(--light-bg-image);"));
    assert!(!head.contains("--dark-bg-image"));
    assert_eq!(output.enabled_modules, vec![ModuleId::BackgroundImage]);
}

#[test]
fn test_dark_image_only_with_comments() {
    let output = render_json(
        r#"{
            "modules": {"backgroundImage": {"enabled": true, "lightImage": "", "darkImage": "https://example.com/d.jpg"}},
            "global": {"generateComments": true, "minifyOutput": false}
        }"#,
    );
    let head = &output.files.head_content;

    assert!(head.contains("--dark-bg-image"));
    assert!(!head.contains("--light-bg-image"));
    assert!(head.contains("- Minified output: no"));
    assert!(head.contains("- Generated comments: yes"));
    assert!(head.contains("Generated at: 2024-02-29 12:00:00"));
}

#[test]
fn test_disabled_module_contributes_nothing() {
    let output = render_json(
        r#"{
            "modules": {"backgroundImage": {"enabled": false, "lightImage": "https://example.com/l.jpg", "darkImage": ""}},
            "global": {"generateComments": true, "minifyOutput": false}
        }"#,
    );

    assert_eq!(output.files.head_content, "");
    assert_eq!(output.files.body_content, "");
    assert_eq!(output.module_count, 0);
    assert_eq!(output.stats.head_lines, 1);
    assert_eq!(output.stats.body_lines, 1);
    assert_eq!(output.stats.total_size, "0 B");
}

#[test]
fn test_minified_comments_keep_header() {
    let output = render_json(
        r#"{
            "modules": {"backgroundImage": {"enabled": true, "lightImage": "https://example.com/l.jpg", "darkImage": "https://example.com/d.jpg"}},
            "global": {"generateComments": true, "minifyOutput": true}
        }"#,
    );
    let head = &output.files.head_content;

    // Section comments are stripped by the minifier; the file header stays
    assert!(head.contains("Listskin - head.html"));
    assert!(!head.contains("/* Background image module */"));
    assert!(head.contains(
        "<style>body{--light-bg-image:url('https://example.com/l.jpg');--dark-bg-image:url('https://example.com/d.jpg')}"
    ));
}

#[test]
fn test_minify_is_idempotent_on_output() {
    let output = render_json(
        r#"{
            "modules": {"backgroundImage": {"enabled": true, "lightImage": "https://example.com/l.jpg", "darkImage": ""}},
            "global": {"generateComments": false, "minifyOutput": true}
        }"#,
    );
    let head = &output.files.head_content;
    assert_eq!(&minify_css(head), head);
}

#[test]
fn test_render_ignores_validation() {
    let json = r#"{
        "modules": {"backgroundImage": {"enabled": true, "lightImage": "not a url", "darkImage": ""}},
        "global": {"generateComments": false, "minifyOutput": false}
    }"#;

    let config = ModuleConfiguration::from_json(json).unwrap();
    let report = validate_module_config(&config);
    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1);

    let output = render_json(json);
    assert!(output.files.head_content.contains("url('not a url')"));
}

#[test]
fn test_minified_url_with_comment_marker() {
    let json = r#"{
        "modules": {"backgroundImage": {"enabled": true, "lightImage": "https://example.com/gallery/*/bg.jpg", "darkImage": ""}},
        "global": {"generateComments": false, "minifyOutput": true}
    }"#;

    let config = ModuleConfiguration::from_json(json).unwrap();
    assert!(validate_module_config(&config).valid);

    let head = render_json(json).files.head_content;
    println!("{}", head);

    assert!(head.contains("--light-bg-image:url('https://example.com/gallery/*/bg.jpg')"));
    assert!(head.contains(".hope-ui-light{background-image:var(--light-bg-image)"));
    assert!(head.ends_with("</style>"));
}
