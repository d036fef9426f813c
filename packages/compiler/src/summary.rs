use std::fmt;

use chrono::{DateTime, TimeZone};
use listskin_config::Configuration;

use crate::context::Context;

pub(crate) const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

pub(crate) fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub(crate) fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

/// Trailing comment summarizing every field of the configuration
pub(crate) fn summary_comment<Tz>(config: &Configuration, generated_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut ctx = Context::new("  ");
    ctx.blank_line();
    ctx.add_line("<!--");
    ctx.indent();
    ctx.add_line("Listskin configuration");
    ctx.add_line("======================");

    ctx.add_line("Colors:");
    ctx.add_line(&format!("- Light theme: {}", config.colors.light));
    ctx.add_line(&format!("- Dark theme: {}", config.colors.dark));
    ctx.add_line(&format!("- Specific prefix: {}", config.colors.specific_prefix));
    ctx.blank_line();

    ctx.add_line("Selectors:");
    ctx.add_line(&format!("- Light theme selector: {}", config.selectors.light_theme));
    ctx.add_line(&format!("- Dark theme selector: {}", config.selectors.dark_theme));
    ctx.add_line(&format!("- Root element: {}", config.selectors.root_element));
    ctx.add_line(&format!("- Ignored elements: {}", config.selectors.ignored.len()));
    ctx.blank_line();

    ctx.add_line("Paths:");
    ctx.add_line(&format!("- Excluded paths: {}", config.paths.excluded.len()));
    ctx.blank_line();

    ctx.add_line("Observer:");
    ctx.add_line(&format!("- Throttle delay: {}ms", config.observer.throttle_delay));
    ctx.add_line(&format!("- Watch child list: {}", config.observer.child_list));
    ctx.add_line(&format!("- Watch subtree: {}", config.observer.subtree));
    ctx.blank_line();

    ctx.add_line("Other:");
    ctx.add_line(&format!("- Debug mode: {}", on_off(config.debug)));
    ctx.blank_line();

    ctx.add_line(&format!("Generated at: {}", format_timestamp(generated_at)));
    ctx.add_line(&format!("Generator: listskin v{}", GENERATOR_VERSION));
    ctx.dedent();
    ctx.add("-->");
    ctx.get_output()
}
