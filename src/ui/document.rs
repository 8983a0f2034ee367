//! HTML document shell around the rendered page body.

/// Reveal stylesheet, inlined so the document works without `/static`.
const REVEAL_CSS: &str = include_str!("../../assets/reveal.css");

/// Reveal script, inlined for the same reason.
const REVEAL_JS: &str = include_str!("../../assets/reveal.js");

/// Generate the HTML shell for the page.
pub fn html_shell(title: &str, description: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="dark">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="{description}">
    <title>{title}</title>

    <!-- Utility stylesheet (built outside this crate) -->
    <link rel="stylesheet" href="/static/app.css">

    <style>{REVEAL_CSS}</style>
    <noscript><style>[data-reveal] {{ opacity: 1 !important; transform: none !important; }}</style></noscript>
    <script>{REVEAL_JS}</script>
</head>
<body class="antialiased">
{body}
</body>
</html>"#,
        title = escape(title),
        description = escape(description),
    )
}

/// Minimal escaping for text placed in `<title>` and attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
