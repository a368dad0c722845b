//! Default style baselines
//!
//! Baselines are applied when an item is touched (added or edited), never at
//! render time, so a filled item carries a complete property set afterwards.

use crate::types::{DivStyles, StyleMap};

/// Baseline for every div's container and text properties
pub const DIV_BASELINE: &[(&str, &str)] = &[
    ("backgroundColor", "transparent"),
    ("color", "#212529"),
    ("fontSize", "14px"),
    ("fontFamily", "Arial, sans-serif"),
    ("fontWeight", "400"),
    ("textAlign", "left"),
    ("lineHeight", "1.5"),
    ("letterSpacing", "0px"),
    ("textDecoration", "none"),
    ("fontStyle", "normal"),
    ("padding", "0px"),
    ("paddingTop", "0px"),
    ("paddingRight", "0px"),
    ("paddingBottom", "0px"),
    ("paddingLeft", "0px"),
    ("margin", "0px"),
    ("marginTop", "0px"),
    ("marginRight", "0px"),
    ("marginBottom", "0px"),
    ("marginLeft", "0px"),
    ("borderRadius", "0px"),
    ("borderWidth", "0px"),
    ("borderColor", "#dee2e6"),
    ("borderStyle", "solid"),
    ("width", "100%"),
    ("height", "100%"),
    ("maxWidth", "100%"),
    ("maxHeight", "none"),
    ("opacity", "1"),
    ("objectFit", "cover"),
    ("objectPosition", "center"),
    ("boxShadow", "none"),
    ("textShadow", "none"),
    ("cursor", "default"),
];

/// Footer styles written when a device grid is first initialized
pub const INITIAL_FOOTER_STYLES: &[(&str, &str)] = &[
    ("backgroundColor", "white"),
    ("padding", "40px"),
    ("color", "black"),
    ("minHeight", "200px"),
];

/// Baseline shown by the footer style editor for unset properties
pub const FOOTER_BASELINE: &[(&str, &str)] = &[
    ("backgroundColor", "#2c3e50"),
    ("color", "#ffffff"),
    ("padding", "40px"),
    ("paddingTop", "40px"),
    ("paddingRight", "40px"),
    ("paddingBottom", "40px"),
    ("paddingLeft", "40px"),
    ("margin", "0"),
    ("marginTop", "0"),
    ("marginRight", "0"),
    ("marginBottom", "0"),
    ("marginLeft", "0"),
    ("borderRadius", "0"),
    ("borderTopWidth", "0"),
    ("borderRightWidth", "0"),
    ("borderBottomWidth", "0"),
    ("borderLeftWidth", "0"),
    ("borderColor", "#ffffff"),
    ("borderStyle", "solid"),
    ("textAlign", "left"),
    ("fontWeight", "400"),
    ("fontSize", "16px"),
    ("fontFamily", "Arial"),
    ("width", "100%"),
    ("minHeight", "200px"),
    ("boxShadow", "none"),
];

/// Footer properties a new div picks up at creation time
pub const INHERITED_ON_CREATE: [&str; 4] = ["color", "fontSize", "textAlign", "fontWeight"];

/// Baseline value of a div property, if it has one
pub fn div_baseline(key: &str) -> Option<&'static str> {
    DIV_BASELINE
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| *value)
}

/// Fill every missing div property from the baseline. Existing values win.
pub fn fill_div_defaults(styles: &mut DivStyles) {
    for (key, value) in DIV_BASELINE {
        styles
            .props
            .entry((*key).to_string())
            .or_insert_with(|| (*value).to_string());
    }
}

/// Fill unset or empty footer properties from the footer baseline
pub fn fill_footer_defaults(styles: &mut StyleMap) {
    for (key, value) in FOOTER_BASELINE {
        let entry = styles.entry((*key).to_string()).or_default();
        if entry.is_empty() {
            *entry = (*value).to_string();
        }
    }
}

pub fn initial_footer_styles() -> StyleMap {
    INITIAL_FOOTER_STYLES
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// Complete styles for a freshly added div, picking up the footer's
/// color, font size, alignment and weight when set
pub fn new_div_styles(footer: &StyleMap) -> DivStyles {
    let mut styles = DivStyles::default();
    fill_div_defaults(&mut styles);
    for key in INHERITED_ON_CREATE {
        if let Some(value) = footer.get(key).filter(|v| !v.is_empty()) {
            styles.set(key, value.clone());
        }
    }
    styles
}
