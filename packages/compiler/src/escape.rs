//! Escaping for user values embedded in `<style>` blocks

/// Selector or color text; `<` becomes a CSS hex escape so no value can
/// close the surrounding `<style>` element
pub(crate) fn css_text(value: &str) -> String {
    value.replace('<', "\\3C ")
}

/// Keep a URL inside its `url('...')` wrapper and on one line
pub(crate) fn css_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for ch in url.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\A "),
            '\r' => out.push_str("\\D "),
            '<' => out.push_str("\\3C "),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_text() {
        assert_eq!(css_text(".hope-ui-dark"), ".hope-ui-dark");
        assert_eq!(css_text("a</style><b"), "a\\3C /style>\\3C b");
    }

    #[test]
    fn test_css_url() {
        assert_eq!(css_url("https://a.example/it's.jpg"), "https://a.example/it\\'s.jpg");
        assert_eq!(css_url("a\\b"), "a\\\\b");
        assert_eq!(css_url("a\nb</style>"), "a\\A b\\3C /style>");
    }
}
