//! `body.html`: transparency fixes plus the beautifier runtime with the
//! configuration inlined as a JavaScript object literal.

use std::fmt;

use chrono::{DateTime, TimeZone};
use listskin_config::Configuration;

use crate::context::Context;
use crate::escape::css_text;
use crate::summary::summary_comment;

const JS_INDENT: &str = "    ";

const HEADER: &str = r#"<!-- Listskin body file -->
<!-- Generated by listskin; regenerate instead of editing by hand -->
<!--
    Paste this into the site's custom body setting (Settings / Global).

    It contains the transparency fixes the background relies on and the
    beautifier runtime. The runtime exposes window.beautifier for control
    from the browser console.
-->"#;

const TRANSPARENCY_NOTE: &str = "<!-- Transparency fixes so the background shows through -->";

/// Rules not tied to a theme selector
const STABLE_STYLES: &str = r#"body {
    position: relative;
}

[data-beautified] {
    transform: translateZ(0);
    isolation: isolate;
}"#;

/// Runtime that follows the inlined `DEFAULT_CONFIG`
const RUNTIME: &str = r#"class Logger {
    constructor(name, debug) {
        this.name = name;
        this.debugEnabled = debug;
    }

    info(message, ...args) {
        if (this.debugEnabled) console.info(`[${this.name}] ${message}`, ...args);
    }

    warn(message, ...args) {
        console.warn(`[${this.name}] ${message}`, ...args);
    }

    debug(message, ...args) {
        if (this.debugEnabled) console.log(`[${this.name}][debug] ${message}`, ...args);
    }
}

const MARKER = 'data-beautified';

function safeQueryAll(selector, context = document) {
    try {
        return Array.from(context.querySelectorAll(selector));
    } catch (error) {
        console.warn(`selector query failed: ${selector}`, error);
        return [];
    }
}

function safeMatches(element, selector) {
    try {
        return element.matches(selector);
    } catch {
        return false;
    }
}

class Beautifier {
    constructor(config) {
        this.config = config;
        this.logger = new Logger('listskin', config.debug);
        this.observer = null;
        this.timer = null;
        this.state = 'stopped';
        this.stats = { runs: 0, beautified: 0, restored: 0 };
    }

    getConfig() {
        return this.config;
    }

    updateConfig(partial) {
        const next = { ...this.config };
        for (const key of Object.keys(partial)) {
            const value = partial[key];
            next[key] = value && typeof value === 'object' && !Array.isArray(value)
                ? { ...next[key], ...value }
                : value;
        }
        this.config = next;
        this.logger.debugEnabled = next.debug;
        this.restart();
    }

    isExcludedPath() {
        return this.config.paths.excluded.some((path) => location.pathname.startsWith(path));
    }

    themeColor() {
        const { colors, selectors } = this.config;
        if (document.querySelector(selectors.darkTheme)) return colors.dark;
        if (document.querySelector(selectors.lightTheme)) return colors.light;
        return null;
    }

    isIgnored(element) {
        return this.config.selectors.ignored.some((selector) => safeMatches(element, selector));
    }

    candidates(root) {
        const prefix = this.config.colors.specificPrefix;
        return safeQueryAll('*', root).filter((element) => {
            if (this.isIgnored(element)) return false;
            const background = getComputedStyle(element).backgroundColor;
            return element.hasAttribute(MARKER) || (prefix && background.startsWith(prefix));
        });
    }

    beautify() {
        this.stats.runs += 1;
        if (this.isExcludedPath()) {
            this.undo();
            return;
        }

        const color = this.themeColor();
        const root = document.querySelector(this.config.selectors.rootElement);
        if (!color || !root) return;

        for (const element of this.candidates(root)) {
            if (element.style.backgroundColor !== color) {
                element.style.backgroundColor = color;
                element.setAttribute(MARKER, 'true');
                this.stats.beautified += 1;
            }
        }
        this.logger.debug('pass complete', this.stats);
    }

    schedule() {
        if (this.timer !== null) return;
        this.timer = setTimeout(() => {
            this.timer = null;
            this.beautify();
        }, this.config.observer.throttleDelay);
    }

    observe() {
        if (this.observer) return;
        const root = document.querySelector(this.config.selectors.rootElement) || document.body;
        this.observer = new MutationObserver(() => this.schedule());
        this.observer.observe(root, {
            childList: this.config.observer.childList,
            subtree: this.config.observer.subtree,
            attributes: true,
            attributeFilter: ['class'],
        });
        this.state = 'running';
        this.beautify();
        this.logger.info('observing', root);
    }

    disconnect() {
        if (this.observer) this.observer.disconnect();
        if (this.timer !== null) clearTimeout(this.timer);
        this.observer = null;
        this.timer = null;
        this.state = 'stopped';
    }

    undo() {
        for (const element of safeQueryAll(`[${MARKER}]`)) {
            element.style.backgroundColor = '';
            element.removeAttribute(MARKER);
            this.stats.restored += 1;
        }
    }

    forceBeautify() {
        this.beautify();
    }

    restart() {
        this.disconnect();
        this.observe();
    }

    getStats() {
        return { ...this.stats };
    }

    getState() {
        return this.state;
    }

    isRunning() {
        return this.state === 'running';
    }

    isStopped() {
        return this.state === 'stopped';
    }
}

const beautifier = new Beautifier(DEFAULT_CONFIG);

window.beautifier = {
    observe() { beautifier.observe(); return this; },
    disconnect() { beautifier.disconnect(); return this; },
    undo() { beautifier.undo(); return this; },
    getStats() { return beautifier.getStats(); },
    getState() { return beautifier.getState(); },
    getConfig() { return beautifier.getConfig(); },
    updateConfig(partial) { beautifier.updateConfig(partial); return this; },
    forceBeautify() { beautifier.forceBeautify(); return this; },
    restart() { beautifier.restart(); return this; },
    isRunning() { return beautifier.isRunning(); },
    isStopped() { return beautifier.isStopped(); },
};

if (document.readyState === 'loading') {
    document.addEventListener('DOMContentLoaded', () => beautifier.observe());
} else {
    beautifier.observe();
}

console.log(`listskin beautifier ${beautifier.getState()}: window.beautifier.observe() | disconnect() | undo() | getStats()`);"#;

pub fn render_body<Tz>(config: &Configuration, generated_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut ctx = Context::new(JS_INDENT);
    ctx.add_lines(HEADER);
    ctx.blank_line();

    ctx.add_line(TRANSPARENCY_NOTE);
    ctx.add_line("<style>");
    ctx.indent();
    ctx.add_line(&format!("{},", css_text(&config.selectors.light_theme)));
    ctx.add_line(&format!("{} {{", css_text(&config.selectors.dark_theme)));
    ctx.indent();
    ctx.add_line("--hope-colors-background: transparent;");
    ctx.dedent();
    ctx.add_line("}");
    ctx.blank_line();
    ctx.add_lines(STABLE_STYLES);
    ctx.dedent();
    ctx.add_line("</style>");
    ctx.blank_line();

    ctx.add_line("<script type=\"module\">");
    ctx.add("const DEFAULT_CONFIG = ");
    ctx.add(&config_literal(config));
    ctx.add(";\n\n");
    ctx.add_lines(RUNTIME);
    ctx.add_line("</script>");

    ctx.add(&summary_comment(config, generated_at));
    ctx.get_output()
}

enum Literal<'a> {
    Str(&'a str),
    Number(u64),
    Bool(bool),
    List(&'a [String]),
    Object(Vec<(&'static str, Literal<'a>)>),
}

/// The configuration as a single-quoted object literal, keys in serialized
/// (camelCase) form
fn config_literal(config: &Configuration) -> String {
    let literal = Literal::Object(vec![
        (
            "colors",
            Literal::Object(vec![
                ("light", Literal::Str(&config.colors.light)),
                ("dark", Literal::Str(&config.colors.dark)),
                ("specificPrefix", Literal::Str(&config.colors.specific_prefix)),
            ]),
        ),
        (
            "selectors",
            Literal::Object(vec![
                ("lightTheme", Literal::Str(&config.selectors.light_theme)),
                ("darkTheme", Literal::Str(&config.selectors.dark_theme)),
                ("ignored", Literal::List(&config.selectors.ignored)),
                ("rootElement", Literal::Str(&config.selectors.root_element)),
            ]),
        ),
        (
            "paths",
            Literal::Object(vec![("excluded", Literal::List(&config.paths.excluded))]),
        ),
        (
            "observer",
            Literal::Object(vec![
                ("childList", Literal::Bool(config.observer.child_list)),
                ("subtree", Literal::Bool(config.observer.subtree)),
                ("throttleDelay", Literal::Number(config.observer.throttle_delay)),
            ]),
        ),
        ("debug", Literal::Bool(config.debug)),
    ]);

    let mut out = String::new();
    write_literal(&mut out, &literal, 0);
    out
}

fn write_literal(out: &mut String, literal: &Literal<'_>, depth: usize) {
    match literal {
        Literal::Str(s) => out.push_str(&js_string(s)),
        Literal::Number(n) => out.push_str(&n.to_string()),
        Literal::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Literal::List(items) if items.is_empty() => out.push_str("[]"),
        Literal::List(items) => {
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                push_indent(out, depth + 1);
                out.push_str(&js_string(item));
                out.push_str(if i + 1 < items.len() { ",\n" } else { "\n" });
            }
            push_indent(out, depth);
            out.push(']');
        }
        Literal::Object(fields) => {
            out.push_str("{\n");
            for (i, (key, value)) in fields.iter().enumerate() {
                push_indent(out, depth + 1);
                out.push_str(&js_string(key));
                out.push_str(": ");
                write_literal(out, value, depth + 1);
                out.push_str(if i + 1 < fields.len() { ",\n" } else { "\n" });
            }
            push_indent(out, depth);
            out.push('}');
        }
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(JS_INDENT);
    }
}

/// Single-quoted JavaScript string literal, safe inside a `<script>` element
fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\x3C"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            other => out.push(other),
        }
    }
    out.push('\'');
    out
}
