//! CSS minification for rendered sections

/// Minify CSS (optionally wrapped in `<style>` tags).
///
/// Strips `/* */` comments, collapses whitespace runs, tightens spacing
/// around braces, semicolons and declaration colons, and drops the last
/// semicolon of each block. Quoted strings are copied untouched.
pub fn minify_css(source: &str) -> String {
    let stripped = strip_comments(source);

    // Collapse whitespace outside quotes
    let mut collapsed = String::with_capacity(stripped.len());
    let mut last_was_space = false;
    let mut quote: Option<char> = None;

    for ch in stripped.trim().chars() {
        if let Some(q) = quote {
            collapsed.push(ch);
            if ch == q {
                quote = None;
            }
            continue;
        }

        if ch.is_whitespace() {
            if !last_was_space {
                collapsed.push(' ');
                last_was_space = true;
            }
            continue;
        }

        if ch == '\'' || ch == '"' {
            quote = Some(ch);
        }
        collapsed.push(ch);
        last_was_space = false;
    }

    tighten(&collapsed)
}

/// Drop `/* */` comments that start outside quoted strings
fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut quote: Option<char> = None;

    while let Some(ch) = chars.next() {
        if let Some(q) = quote {
            out.push(ch);
            if ch == q {
                quote = None;
            }
            continue;
        }

        match ch {
            '\'' | '"' => {
                quote = Some(ch);
                out.push(ch);
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                // Unterminated comment runs to the end
                let mut prev = None;
                for c in chars.by_ref() {
                    if prev == Some('*') && c == '/' {
                        break;
                    }
                    prev = Some(c);
                }
            }
            _ => out.push(ch),
        }
    }

    out
}

/// Remove single spaces next to punctuation; input is already collapsed
fn tighten(collapsed: &str) -> String {
    let chars: Vec<char> = collapsed.chars().collect();
    let mut out = String::with_capacity(collapsed.len());
    let mut quote: Option<char> = None;

    for (i, &ch) in chars.iter().enumerate() {
        if let Some(q) = quote {
            out.push(ch);
            if ch == q {
                quote = None;
            }
            continue;
        }

        match ch {
            '\'' | '"' => {
                quote = Some(ch);
                out.push(ch);
            }
            ' ' => {
                let prev = out.chars().last();
                let next = chars.get(i + 1).copied();
                let drop = matches!(prev, Some('{' | '}' | ';' | ',' | '>'))
                    || matches!(next, Some('{' | '}' | ';' | '<'))
                    || (prev == Some(':') && in_declaration(&out));
                if !drop {
                    out.push(' ');
                }
            }
            '}' => {
                if out.ends_with(';') {
                    out.pop();
                }
                out.push('}');
            }
            _ => out.push(ch),
        }
    }

    out
}

/// Whether the output ends inside a `{ }` block, where `:` separates a
/// property from its value
fn in_declaration(out: &str) -> bool {
    out.rfind('{').map_or(false, |open| out.rfind('}').map_or(true, |close| open > close))
}
