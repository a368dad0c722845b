//! Standalone HTML document wrapping the fragment and stylesheet

/// Minimal HTML5 page with the stylesheet inlined
pub fn full_document(html: &str, css: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Footer</title>
    <style>
{css}
    </style>
</head>
<body>
{html}
</body>
</html>"#
    )
}
