//! Effective styles: footer inheritance and live preview style strings

use tracing::debug;

use super::defaults::div_baseline;
use super::{CONTAINER_PROPERTIES, IMAGE_PROPERTIES, RADIUS_CORNERS, TEXT_PROPERTIES, camel_to_kebab};
use crate::types::{DivStyles, GridItem, StyleMap};

/// Div properties that track the footer while they still hold the baseline value
pub const FOOTER_TRACKED: [&str; 4] = ["color", "fontSize", "textAlign", "fontWeight"];

/// Background sentinel meaning "show whatever is behind me"
pub const TRANSPARENT: &str = "transparent";

/// Background written into divs once the footer has been styled
pub const INHERIT: &str = "inherit";

/// Propagate a footer style update to the device's filled items.
///
/// A tracked property still equal to its baseline value is treated as
/// inheriting and takes the footer's value. A transparent background becomes
/// `inherit`. Returns the number of items changed.
pub fn apply_footer_inheritance(items: &mut [GridItem], footer: &StyleMap) -> usize {
    let mut changed = 0;
    for item in items.iter_mut().filter(|item| !item.is_empty) {
        let styles = &mut item.div_styles;
        let mut touched = false;

        if styles.get("backgroundColor") == Some(TRANSPARENT) {
            styles.set("backgroundColor", INHERIT);
            touched = true;
        }

        for key in FOOTER_TRACKED {
            let Some(footer_value) = footer.get(key).filter(|v| !v.is_empty()) else {
                continue;
            };
            if styles.get(key).is_some() && styles.get(key) == div_baseline(key) {
                styles.set(key, footer_value.clone());
                touched = true;
            }
        }

        if touched {
            debug!(item = %item.id, "Div picked up footer styles");
            changed += 1;
        }
    }
    changed
}

/// Background actually seen in the preview: transparent (or inherited)
/// divs show the footer's background
pub fn effective_background(styles: &DivStyles, footer: &StyleMap) -> String {
    match styles.get("backgroundColor") {
        Some(TRANSPARENT) | Some(INHERIT) | None => footer
            .get("backgroundColor")
            .filter(|v| !v.is_empty())
            .cloned()
            .unwrap_or_else(|| TRANSPARENT.to_string()),
        Some(other) => other.to_string(),
    }
}

/// Inline style strings for the live preview of one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewStyles {
    pub container: String,
    pub text: String,
    pub image: String,
    pub background: String,
}

fn declarations(map: &StyleMap, whitelist: &[&str]) -> Vec<String> {
    map.iter()
        .filter(|(key, value)| whitelist.contains(&key.as_str()) && !value.is_empty())
        .map(|(key, value)| format!("{}: {}", camel_to_kebab(key), value))
        .collect()
}

fn join(decls: Vec<String>) -> String {
    if decls.is_empty() {
        String::new()
    } else {
        format!("{};", decls.join("; "))
    }
}

pub fn preview_styles(item: &GridItem, footer: &StyleMap) -> PreviewStyles {
    let styles = &item.div_styles;
    let background = effective_background(styles, footer);

    let mut container: Vec<String> = declarations(&styles.props, CONTAINER_PROPERTIES)
        .into_iter()
        .filter(|decl| !decl.starts_with("background-color"))
        .collect();
    for corner in RADIUS_CORNERS {
        if let Some(value) = styles.get(corner).filter(|v| !v.is_empty()) {
            container.push(format!("{}: {}", camel_to_kebab(corner), value));
        }
    }
    container.push(format!("background: {background}"));
    container.push("display: flex".to_string());
    container.push("align-items: center".to_string());
    container.push("justify-content: center".to_string());

    let mut text = declarations(&styles.props, TEXT_PROPERTIES);
    text.push("display: block".to_string());
    text.push("width: 100%".to_string());

    let mut image = declarations(&styles.image_styles, IMAGE_PROPERTIES);
    if item.has_link() && item.show_pointer {
        image.push("cursor: pointer".to_string());
    }
    image.push("max-width: 100%".to_string());

    PreviewStyles {
        container: join(container),
        text: join(text),
        image: join(image),
        background,
    }
}
