//! Derived preview artifacts for the device currently being edited

use std::collections::BTreeMap;
use tracing::debug;

use crate::codegen::{self, Highlight};
use crate::constants::breakpoints::{DESKTOP_PREVIEW_WIDTH, MOBILE_PREVIEW_WIDTH, TABLET_PREVIEW_WIDTH};
use crate::identity::dedupe_across_devices;
use crate::style::resolve::{PreviewStyles, preview_styles};
use crate::types::{Configuration, Device};

/// Width of the preview frame for a device
pub fn preview_width(device: Device) -> u32 {
    match device {
        Device::Desktop => DESKTOP_PREVIEW_WIDTH,
        Device::Tablet => TABLET_PREVIEW_WIDTH,
        Device::Mobile => MOBILE_PREVIEW_WIDTH,
    }
}

/// Snapshot of everything the preview pane shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preview {
    pub device: Option<Device>,
    pub width: u32,
    /// Full export fragment, all devices deduped
    pub html: String,
    /// Full responsive stylesheet
    pub css: String,
    /// Current device only, no media queries
    pub preview_css: String,
    /// Inline styles per item id of the current device
    pub item_styles: BTreeMap<String, PreviewStyles>,
}

impl Preview {
    /// Recompute every artifact from the given state
    pub fn render(
        configurations: &Configuration,
        device: Device,
        highlight: &Highlight,
        origin: &str,
    ) -> Self {
        let unique = dedupe_across_devices(configurations);
        let html = codegen::generate_html(&unique, highlight, origin);
        let css = codegen::generate_css(configurations, &unique, highlight.enabled);
        let preview_css =
            codegen::generate_preview_css(configurations, device, &unique, highlight.enabled);

        let item_styles = configurations
            .get(device)
            .map(|config| {
                config
                    .filled_items()
                    .map(|item| (item.id.clone(), preview_styles(item, &config.footer_styles)))
                    .collect()
            })
            .unwrap_or_default();

        debug!(device = %device, divs = unique.len(), "Rendered preview");
        Self {
            device: Some(device),
            width: preview_width(device),
            html,
            css,
            preview_css,
            item_styles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ConfigStore;
    use crate::types::GridItemPatch;

    #[test]
    fn test_preview_covers_current_device() {
        let mut store = ConfigStore::new();
        store.initialize_all();
        store.update_grid_item(
            "cell-1-1",
            Device::Tablet,
            GridItemPatch {
                is_empty: Some(false),
                content: Some("Tablet only".to_string()),
                ..Default::default()
            },
        );

        let preview = Preview::render(
            store.configurations(),
            Device::Tablet,
            &Highlight::disabled(),
            "",
        );
        assert_eq!(preview.width, 768);
        assert!(preview.html.contains("tablet-only"));
        assert!(preview.preview_css.contains(".tablet-only {"));
        assert!(!preview.preview_css.contains("@media"));
        assert!(preview.item_styles.contains_key("cell-1-1"));
    }

    #[test]
    fn test_preview_background_falls_back_to_footer() {
        let mut store = ConfigStore::new();
        store.initialize_all();
        let mut styles = crate::types::DivStyles::default();
        styles.set("backgroundColor", "transparent");
        store.update_grid_item(
            "cell-1-1",
            Device::Desktop,
            GridItemPatch {
                is_empty: Some(false),
                content: Some("Hi".to_string()),
                div_styles: Some(styles),
                ..Default::default()
            },
        );
        let preview = Preview::render(store.configurations(), Device::Desktop, &Highlight::disabled(), "");
        assert_eq!(preview.item_styles["cell-1-1"].background, "white");
    }
}
