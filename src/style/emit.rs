//! Optimized declaration lists for the exported stylesheet.
//! Each list holds `property: value` strings with no trailing semicolon.

use super::{MARGIN_SIDES, PADDING_SIDES, RADIUS_CORNERS, camel_to_kebab, is_zero, with_px};
use crate::types::StyleMap;

const DEFAULT_BORDER_STYLE: &str = "solid";
const DEFAULT_BORDER_COLOR: &str = "#000";

const TEXT_EMITTED: [&str; 10] = [
    "color",
    "fontSize",
    "fontFamily",
    "fontWeight",
    "fontStyle",
    "lineHeight",
    "letterSpacing",
    "textDecoration",
    "textShadow",
    "cursor",
];

const TEXT_DEFAULTS: &[(&str, &str)] = &[
    ("color", "#212529"),
    ("fontSize", "14px"),
    ("fontWeight", "400"),
    ("fontStyle", "normal"),
    ("textDecoration", "none"),
    ("letterSpacing", "0px"),
    ("textShadow", "none"),
    ("cursor", "default"),
];

const IMAGE_EMITTED: [&str; 8] = [
    "width",
    "height",
    "maxWidth",
    "maxHeight",
    "objectFit",
    "objectPosition",
    "opacity",
    "cursor",
];

const IMAGE_DEFAULTS: &[(&str, &str)] = &[
    ("opacity", "1"),
    ("cursor", "default"),
    ("width", "auto"),
    ("height", "auto"),
    ("maxWidth", "100%"),
    ("maxHeight", "none"),
];

/// Keys allowed in the inline `<img>` style attribute
const INLINE_IMAGE_KEYS: &[&str] = &[
    "width",
    "height",
    "maxWidth",
    "maxHeight",
    "objectFit",
    "objectPosition",
    "opacity",
    "cursor",
    "borderRadius",
    "borderTopLeftRadius",
    "borderTopRightRadius",
    "borderBottomRightRadius",
    "borderBottomLeftRadius",
    "borderWidth",
    "borderStyle",
    "borderColor",
    "backgroundColor",
];

fn lookup<'a>(table: &'a [(&str, &str)], key: &str) -> Option<&'a str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn present<'a>(styles: &'a StyleMap, key: &str) -> Option<&'a str> {
    styles.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

/// Shorthand if non-zero, then every side that is non-zero and differs from it
pub fn process_shorthand(styles: &StyleMap, shorthand: &str, sides: &[&str], out: &mut Vec<String>) {
    let base = present(styles, shorthand);
    if let Some(value) = base
        && !is_zero(value)
    {
        out.push(format!("{}: {}", camel_to_kebab(shorthand), value));
    }
    for side in sides {
        if let Some(value) = present(styles, side)
            && !is_zero(value)
            && Some(value) != base
        {
            out.push(format!("{}: {}", camel_to_kebab(side), value));
        }
    }
}

fn push_border(styles: &StyleMap, out: &mut Vec<String>) {
    if let Some(width) = present(styles, "borderWidth")
        && !is_zero(width)
    {
        out.push(format!("border-width: {width}"));
        out.push(format!(
            "border-style: {}",
            present(styles, "borderStyle").unwrap_or(DEFAULT_BORDER_STYLE)
        ));
        out.push(format!(
            "border-color: {}",
            present(styles, "borderColor").unwrap_or(DEFAULT_BORDER_COLOR)
        ));
    }
}

/// Declarations for the item's own container rule
pub fn container_declarations(styles: &StyleMap) -> Vec<String> {
    let mut out = Vec::new();
    if let Some(width) = present(styles, "width") {
        out.push(format!("width: {width}"));
    }
    if let Some(height) = present(styles, "height") {
        out.push(format!("height: {height}"));
    }

    process_shorthand(styles, "padding", &PADDING_SIDES, &mut out);
    process_shorthand(styles, "margin", &MARGIN_SIDES, &mut out);
    process_shorthand(styles, "borderRadius", &RADIUS_CORNERS, &mut out);
    push_border(styles, &mut out);

    if let Some(background) = present(styles, "backgroundColor") {
        out.push(format!("background-color: {background}"));
    }
    if let Some(shadow) = present(styles, "boxShadow")
        && shadow != "none"
    {
        out.push(format!("box-shadow: {shadow}"));
    }

    out.push("white-space: nowrap".to_string());
    out
}

/// Declarations for `.text-content`
pub fn text_declarations(styles: &StyleMap) -> Vec<String> {
    let mut out = Vec::new();
    process_shorthand(styles, "padding", &PADDING_SIDES, &mut out);
    process_shorthand(styles, "margin", &MARGIN_SIDES, &mut out);

    for key in TEXT_EMITTED {
        if let Some(value) = present(styles, key)
            && lookup(TEXT_DEFAULTS, key) != Some(value)
        {
            out.push(format!("{}: {}", camel_to_kebab(key), value));
        }
    }

    if let Some(align) = present(styles, "textAlign") {
        out.push(format!("text-align: {align}"));
    }
    out
}

/// Declarations for the `img` rule inside an image item
pub fn image_declarations(image_styles: &StyleMap) -> Vec<String> {
    let mut out = Vec::new();
    for key in IMAGE_EMITTED {
        if let Some(value) = present(image_styles, key)
            && lookup(IMAGE_DEFAULTS, key) != Some(value)
        {
            out.push(format!("{}: {}", camel_to_kebab(key), value));
        }
    }

    process_shorthand(image_styles, "borderRadius", &RADIUS_CORNERS, &mut out);
    push_border(image_styles, &mut out);

    if let Some(background) = present(image_styles, "backgroundColor")
        && background != "transparent"
    {
        out.push(format!("background-color: {background}"));
    }

    if !out.iter().any(|decl| decl.starts_with("max-width")) {
        out.push("max-width: 100%".to_string());
    }
    out
}

/// Inline `style` attribute of an exported `<img>`
pub fn inline_image_style(image_styles: &StyleMap) -> String {
    image_styles
        .iter()
        .filter(|(key, _)| INLINE_IMAGE_KEYS.contains(&key.as_str()))
        .map(|(key, value)| {
            let value = if key.starts_with("border") && key.contains("Radius") {
                with_px(value)
            } else {
                value.clone()
            };
            format!("{}: {}", camel_to_kebab(key), value)
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::defaults::fill_div_defaults;
    use crate::types::DivStyles;

    fn map(pairs: &[(&str, &str)]) -> StyleMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_shorthand_only_when_sides_match() {
        let styles = map(&[
            ("padding", "10px"),
            ("paddingTop", "10px"),
            ("paddingLeft", "0px"),
        ]);
        let mut out = Vec::new();
        process_shorthand(&styles, "padding", &PADDING_SIDES, &mut out);
        assert_eq!(out, vec!["padding: 10px"]);
    }

    #[test]
    fn test_shorthand_and_diverging_side() {
        let styles = map(&[("padding", "10px"), ("paddingTop", "20px")]);
        let mut out = Vec::new();
        process_shorthand(&styles, "padding", &PADDING_SIDES, &mut out);
        assert_eq!(out, vec!["padding: 10px", "padding-top: 20px"]);
    }

    #[test]
    fn test_container_on_baseline() {
        let mut styles = DivStyles::default();
        fill_div_defaults(&mut styles);
        let decls = container_declarations(&styles.props);
        assert_eq!(
            decls,
            vec![
                "width: 100%",
                "height: 100%",
                "background-color: transparent",
                "white-space: nowrap",
            ]
        );
    }

    #[test]
    fn test_container_border_trio() {
        let styles = map(&[("borderWidth", "2px"), ("borderColor", "#333")]);
        let decls = container_declarations(&styles);
        assert!(decls.contains(&"border-width: 2px".to_string()));
        assert!(decls.contains(&"border-style: solid".to_string()));
        assert!(decls.contains(&"border-color: #333".to_string()));
    }

    #[test]
    fn test_text_suppresses_defaults() {
        let mut styles = DivStyles::default();
        fill_div_defaults(&mut styles);
        let decls = text_declarations(&styles.props);
        assert!(!decls.iter().any(|d| d.starts_with("font-size")));
        assert!(decls.contains(&"text-align: left".to_string()));
        assert!(decls.contains(&"font-family: Arial, sans-serif".to_string()));

        styles.set("fontSize", "18px");
        styles.set("textShadow", "1px 1px #000");
        let decls = text_declarations(&styles.props);
        assert!(decls.contains(&"font-size: 18px".to_string()));
        assert_eq!(decls.iter().filter(|d| d.starts_with("text-shadow")).count(), 1);
    }

    #[test]
    fn test_image_declarations() {
        let styles = map(&[
            ("width", "120px"),
            ("height", "auto"),
            ("opacity", "1"),
            ("objectFit", "contain"),
        ]);
        assert_eq!(
            image_declarations(&styles),
            vec!["width: 120px", "object-fit: contain", "max-width: 100%"]
        );

        let capped = map(&[("maxWidth", "300px")]);
        assert_eq!(image_declarations(&capped), vec!["max-width: 300px"]);
    }

    #[test]
    fn test_inline_image_style() {
        let styles = map(&[("width", "50px"), ("borderRadius", "8"), ("color", "red")]);
        assert_eq!(inline_image_style(&styles), "border-radius: 8px; width: 50px");
    }
}
