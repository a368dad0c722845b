//! Style resolution and defaulting
//!
//! - **defaults**: baselines and filling of missing properties
//! - **emit**: optimized declaration lists for the exported stylesheet
//! - **resolve**: footer inheritance and preview style strings
//! - **presets**: one-click text, image and footer style sets

pub mod defaults;
pub mod emit;
pub mod presets;
pub mod resolve;

use regex::Regex;
use std::sync::LazyLock;

pub use defaults::{fill_div_defaults, fill_footer_defaults, new_div_styles};
pub use resolve::{apply_footer_inheritance, effective_background};

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid camel boundary pattern"));

/// Properties routed to the `<img>` element (stored under `imageStyles`)
pub const IMAGE_PROPERTIES: &[&str] = &[
    "width",
    "height",
    "maxWidth",
    "maxHeight",
    "objectFit",
    "objectPosition",
    "opacity",
    "cursor",
];

/// Properties routed to the wrapping container
pub const CONTAINER_PROPERTIES: &[&str] = &[
    "backgroundColor",
    "padding",
    "paddingTop",
    "paddingRight",
    "paddingBottom",
    "paddingLeft",
    "margin",
    "marginTop",
    "marginRight",
    "marginBottom",
    "marginLeft",
    "borderRadius",
    "borderWidth",
    "borderColor",
    "borderStyle",
    "boxShadow",
    "width",
    "height",
];

/// Properties routed to the text-content wrapper
pub const TEXT_PROPERTIES: &[&str] = &[
    "color",
    "fontSize",
    "fontFamily",
    "fontWeight",
    "fontStyle",
    "textAlign",
    "lineHeight",
    "letterSpacing",
    "textDecoration",
    "textShadow",
    "cursor",
];

pub const PADDING_SIDES: [&str; 4] = ["paddingTop", "paddingRight", "paddingBottom", "paddingLeft"];
pub const MARGIN_SIDES: [&str; 4] = ["marginTop", "marginRight", "marginBottom", "marginLeft"];
pub const RADIUS_CORNERS: [&str; 4] = [
    "borderTopLeftRadius",
    "borderTopRightRadius",
    "borderBottomRightRadius",
    "borderBottomLeftRadius",
];

/// `backgroundColor` → `background-color`
pub fn camel_to_kebab(name: &str) -> String {
    CAMEL_BOUNDARY.replace_all(name, "${1}-${2}").to_lowercase()
}

/// Zero-like values are never emitted
pub fn is_zero(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == "0" || value == "0px"
}

/// Append `px` to a bare number, leave anything else alone
pub fn with_px(value: &str) -> String {
    let trimmed = value.trim();
    if !trimmed.is_empty() && trimmed.parse::<f64>().is_ok() {
        format!("{trimmed}px")
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_to_kebab() {
        assert_eq!(camel_to_kebab("backgroundColor"), "background-color");
        assert_eq!(camel_to_kebab("borderTopLeftRadius"), "border-top-left-radius");
        assert_eq!(camel_to_kebab("color"), "color");
        assert_eq!(camel_to_kebab("h1Size"), "h1-size");
    }

    #[test]
    fn test_is_zero() {
        assert!(is_zero("0"));
        assert!(is_zero("0px"));
        assert!(is_zero(""));
        assert!(!is_zero("0.5"));
        assert!(!is_zero("10px"));
    }

    #[test]
    fn test_with_px() {
        assert_eq!(with_px("12"), "12px");
        assert_eq!(with_px("12px"), "12px");
        assert_eq!(with_px("50%"), "50%");
    }
}
