//! MiniJinja filter registration.

use minijinja::{Environment, Value};

/// Registers the shell's filters on a minijinja environment.
pub(crate) fn register_filters(env: &mut Environment<'static>) {
    // Stylesheet text goes into <style> unescaped; a literal "</" could close
    // the element early, so it is rewritten to the CSS-equivalent "<\/".
    env.add_filter("css", |value: Value| -> Value {
        let text = value.as_str().map(str::to_string).unwrap_or_default();
        Value::from_safe_string(text.replace("</", "<\\/"))
    });

    // Turns an emoji into an inline SVG icon usable as a favicon href.
    env.add_filter("glyph_icon", |glyph: String| -> String { glyph_data_uri(&glyph) });
}

/// Builds a `data:` URI rendering `glyph` as an SVG image.
pub fn glyph_data_uri(glyph: &str) -> String {
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'>\
         <text y='.9em' font-size='90'>{}</text></svg>",
        glyph
    );
    format!("data:image/svg+xml,{}", urlencoding::encode(&svg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    fn render(source: &'static str, ctx: Value) -> String {
        let mut env = Environment::new();
        register_filters(&mut env);
        env.add_template("t.html", source).unwrap();
        env.get_template("t.html").unwrap().render(ctx).unwrap()
    }

    #[test]
    fn test_css_filter_is_not_html_escaped() {
        let out = render(
            "<style>{{ css | css }}</style>",
            context! { css => "a > b { content: \"x\"; }" },
        );
        assert_eq!(out, "<style>a > b { content: \"x\"; }</style>");
    }

    #[test]
    fn test_css_filter_neutralizes_closing_tag() {
        let out = render(
            "<style>{{ css | css }}</style>",
            context! { css => "</style><script>alert(1)</script>" },
        );
        assert!(!out.contains("</style><script>"));
        assert!(out.contains("<\\/style><script>"));
    }

    #[test]
    fn test_glyph_data_uri_encodes_markup() {
        let uri = glyph_data_uri("💡");
        assert!(uri.starts_with("data:image/svg+xml,%3Csvg"));
        assert!(!uri.contains('<'));
        assert!(!uri.contains(' '));

        let payload = uri.trim_start_matches("data:image/svg+xml,");
        let decoded = urlencoding::decode(payload).unwrap();
        assert!(decoded.contains(">💡</text>"));
    }

    #[test]
    fn test_glyph_data_uri_escapes_percent() {
        let uri = glyph_data_uri("100%");
        assert!(uri.contains("100%25"));
        assert!(!uri.contains("%%"));
    }
}
