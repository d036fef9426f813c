//! Human-readable configuration summaries for terminals and preview panes

use listskin_config::{Configuration, ModuleConfiguration, ModuleId};

use crate::context::Context;
use crate::summary::on_off;

const DIVIDER: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

pub fn config_preview(config: &Configuration) -> String {
    let mut ctx = Context::new("   ");
    ctx.add_line("Configuration preview:");
    ctx.add_line(DIVIDER);

    ctx.add_line("🎨 Theme colors:");
    ctx.indent();
    ctx.add_line(&format!("Light theme: {}", config.colors.light));
    ctx.add_line(&format!("Dark theme: {}", config.colors.dark));
    ctx.add_line(&format!("Specific prefix: {}", config.colors.specific_prefix));
    ctx.dedent();
    ctx.blank_line();

    ctx.add_line("🎯 Selectors:");
    ctx.indent();
    ctx.add_line(&format!("Light theme: {}", config.selectors.light_theme));
    ctx.add_line(&format!("Dark theme: {}", config.selectors.dark_theme));
    ctx.add_line(&format!("Root element: {}", config.selectors.root_element));
    ctx.add_line(&format!("Ignored elements: {}", config.selectors.ignored.len()));
    ctx.dedent();
    ctx.blank_line();

    ctx.add_line("🚫 Excluded paths:");
    ctx.indent();
    if config.paths.excluded.is_empty() {
        ctx.add_line("none");
    } else {
        ctx.add_line(&config.paths.excluded.join(", "));
    }
    ctx.dedent();
    ctx.blank_line();

    ctx.add_line("⚙️ Observer:");
    ctx.indent();
    ctx.add_line(&format!("Throttle delay: {}ms", config.observer.throttle_delay));
    ctx.add_line(&format!("Watch child list: {}", on_off(config.observer.child_list)));
    ctx.add_line(&format!("Watch subtree: {}", on_off(config.observer.subtree)));
    ctx.dedent();
    ctx.blank_line();

    ctx.add_line("🐛 Debug mode:");
    ctx.indent();
    ctx.add_line(on_off(config.debug));
    ctx.dedent();
    ctx.add(DIVIDER);
    ctx.get_output()
}

pub fn module_config_preview(config: &ModuleConfiguration) -> String {
    let enabled = config.enabled_ids();

    let mut ctx = Context::new("   ");
    ctx.add_line("Configuration preview:");
    ctx.add_line(DIVIDER);

    ctx.add_line(&format!("📦 Enabled modules ({}):", enabled.len()));
    ctx.indent();
    for id in &enabled {
        ctx.add_line(&format!("✓ {}", id.definition().name));
    }
    ctx.dedent();
    ctx.blank_line();

    ctx.add_line("⚙️ Global options:");
    ctx.indent();
    ctx.add_line(&format!("Generate comments: {}", on_off(config.global.generate_comments)));
    ctx.add_line(&format!("Minify output: {}", on_off(config.global.minify_output)));
    ctx.dedent();

    if let Some(bg) = config
        .get(ModuleId::BackgroundImage)
        .and_then(|module| module.as_background_image())
    {
        ctx.blank_line();
        ctx.add_line("🖼️ Background image:");
        ctx.indent();
        if bg.enabled {
            ctx.add_line("✓ enabled");
            if !bg.light_image.is_empty() {
                ctx.add_line(&format!("Light theme: {}", bg.light_image));
            }
            if !bg.dark_image.is_empty() {
                ctx.add_line(&format!("Dark theme: {}", bg.dark_image));
            }
        } else {
            ctx.add_line("✗ disabled");
        }
        ctx.dedent();
    }

    ctx.add(DIVIDER);
    ctx.get_output()
}
