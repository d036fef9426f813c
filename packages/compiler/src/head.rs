//! `head.html`: page-level styles, font, widgets and the optional debug
//! highlighting, followed by the configuration summary.

use std::fmt;

use chrono::{DateTime, TimeZone};
use listskin_config::Configuration;

use crate::context::Context;
use crate::escape::css_text;
use crate::summary::summary_comment;

const FONT_STYLESHEET: &str =
    "https://s4.zstatic.net/ajax/libs/lxgw-wenkai-webfont/1.7.0/lxgwwenkai-regular.min.css";
const BACKGROUND_IMAGE: &str = "https://t.alcy.cc/moez";
const MASCOT_SCRIPT: &str = "https://l2d.mmoe.work/dist/autoload.js";
const POLYFILL_SCRIPT: &str =
    "https://s4.zstatic.net/ajax/libs/js-polyfills/0.1.43/polyfill.min.js?features=String.prototype.replaceAll";

/// Site announcement banner
const ANNOUNCEMENT_SELECTOR: &str = ".hope-c-PJLV-ikJQsXT-css";

const BASE_STYLES: &str = r#"/* Hide native video controls */
video::-webkit-media-controls {
    display: none;
}

/* Background image layout */
body {
    background-repeat: no-repeat;
    background-size: cover;
    background-attachment: fixed;
    background-position: center;
}"#;

const FONT_STYLES: &str = r#"/* Custom font */
* {
    font-family: "LXGW WenKai", sans-serif;
}

/* Generator mark */
body::before {
    content: "Styled with listskin";
    position: fixed;
    bottom: 10px;
    right: 10px;
    font-size: 10px;
    color: rgba(128, 128, 128, 0.3);
    pointer-events: none;
    z-index: 9999;
    font-family: "LXGW WenKai", sans-serif;
}"#;

const MASCOT_DEFAULTS: &str = r#"<script>
if (localStorage.getItem('modelId') === null) {
    localStorage.setItem('modelId', '3');
    localStorage.setItem('modelTexturesId', '0');
}
</script>"#;

const DEBUG_STYLES: &str = r#"<style>
    [data-beautified] {
        position: relative;
    }

    [data-beautified]::after {
        content: "styled";
        position: absolute;
        top: 2px;
        left: 2px;
        background: rgba(255, 0, 0, 0.8);
        color: white;
        font-size: 10px;
        padding: 1px 3px;
        border-radius: 2px;
        pointer-events: none;
        z-index: 10000;
    }
</style>"#;

pub fn render_head<Tz>(config: &Configuration, generated_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut ctx = Context::new("    ");

    ctx.add_line("<!-- Listskin head file -->");
    ctx.add_line("<!-- Generated by listskin; regenerate instead of editing by hand -->");
    ctx.blank_line();

    ctx.add_line("<!-- Custom font -->");
    ctx.add_line(&format!("<link rel=\"stylesheet\" href=\"{}\">", FONT_STYLESHEET));
    ctx.blank_line();

    ctx.add_line("<style>");
    ctx.indent();
    ctx.add_lines(BASE_STYLES);
    ctx.blank_line();
    theme_backgrounds(config, &mut ctx);
    ctx.blank_line();
    announcement_styles(config, &mut ctx);
    ctx.blank_line();
    ctx.add_lines(FONT_STYLES);
    ctx.dedent();
    ctx.add_line("</style>");
    ctx.blank_line();

    ctx.add_line("<!-- Mascot widget -->");
    ctx.add_lines(MASCOT_DEFAULTS);
    ctx.add_line(&format!("<script src=\"{}\"></script>", MASCOT_SCRIPT));
    ctx.blank_line();

    ctx.add_line("<!-- Compatibility polyfills -->");
    ctx.add_line(&format!("<script src=\"{}\"></script>", POLYFILL_SCRIPT));

    if config.debug {
        ctx.blank_line();
        ctx.add_line("<!-- Debug highlighting -->");
        ctx.add_lines(DEBUG_STYLES);
    }

    ctx.add(&summary_comment(config, generated_at));
    ctx.get_output()
}

fn theme_backgrounds(config: &Configuration, ctx: &mut Context) {
    let dark = &config.selectors.dark_theme;
    let light = &config.selectors.light_theme;

    ctx.add_line("/* Dark theme background, dimmed */");
    ctx.add_line(&format!("{} {{", body_selector(dark)));
    ctx.indent();
    ctx.add_line(&format!("background-color: {};", css_text(&config.colors.dark)));
    ctx.add_line(&format!(
        "background-image: linear-gradient(rgba(32, 36, 37, 0.7), rgba(32, 36, 37, 0.7)), url('{}');",
        BACKGROUND_IMAGE
    ));
    ctx.dedent();
    ctx.add_line("}");
    ctx.blank_line();

    ctx.add_line("/* Light theme background */");
    ctx.add_line(&format!("{} {{", body_selector(light)));
    ctx.indent();
    ctx.add_line(&format!("background-image: url('{}');", BACKGROUND_IMAGE));
    ctx.dedent();
    ctx.add_line("}");
}

fn announcement_styles(config: &Configuration, ctx: &mut Context) {
    ctx.add_line("/* Announcement banner */");
    let themes = [
        (&config.selectors.light_theme, &config.colors.light),
        (&config.selectors.dark_theme, &config.colors.dark),
    ];

    for (i, (selector, color)) in themes.into_iter().enumerate() {
        if i > 0 {
            ctx.blank_line();
        }
        ctx.add_line(&format!("{} {} {{", css_text(selector), ANNOUNCEMENT_SELECTOR));
        ctx.indent();
        ctx.add_line(&format!("background: {} !important;", css_text(color)));
        ctx.add_line("backdrop-filter: blur(0) !important;");
        ctx.dedent();
        ctx.add_line("}");
    }
}

/// Compound a class/id/attribute selector onto `body`; other selectors are
/// used as-is
fn body_selector(selector: &str) -> String {
    let selector = css_text(selector);
    match selector.chars().next() {
        Some('.' | '#' | '[' | ':') => format!("body{}", selector),
        _ => selector,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use listskin_config::default_config;

    #[test]
    fn test_body_selector() {
        assert_eq!(body_selector(".hope-ui-dark"), "body.hope-ui-dark");
        assert_eq!(body_selector("[data-theme=dark]"), "body[data-theme=dark]");
        assert_eq!(body_selector("html.dark"), "html.dark");
    }

    #[test]
    fn test_head_uses_colors_and_selectors() {
        let mut config = default_config();
        config.colors.light = "rgba(1, 2, 3, 0.5)".to_string();
        config.selectors.dark_theme = ".night".to_string();

        let at = Utc::now();
        let head = render_head(&config, &at);

        assert!(head.contains("background: rgba(1, 2, 3, 0.5) !important;"));
        assert!(head.contains("body.night {"));
        assert!(head.contains(".night .hope-c-PJLV-ikJQsXT-css {"));
        assert!(head.contains(&format!("background-color: {};", config.colors.dark)));
    }

    #[test]
    fn test_values_cannot_close_style_block() {
        let mut config = default_config();
        config.colors.dark = "red</style><script>x()</script>".to_string();
        config.selectors.light_theme = ".a</style>".to_string();

        let head = render_head(&config, &Utc::now());
        let styles = head.split("Listskin configuration").next().unwrap();
        assert_eq!(styles.matches("</style>").count(), 1);
        assert!(head.contains("background-color: red\\3C /style>"));
    }

    #[test]
    fn test_debug_block_only_when_enabled() {
        let mut config = default_config();
        let at = Utc::now();

        assert!(!render_head(&config, &at).contains("[data-beautified]::after"));

        config.debug = true;
        assert!(render_head(&config, &at).contains("[data-beautified]::after"));
    }

    #[test]
    fn test_head_ends_with_summary() {
        let head = render_head(&default_config(), &Utc::now());
        assert!(head.trim_end().ends_with("-->"));
        assert!(head.contains("Listskin configuration"));
    }
}
