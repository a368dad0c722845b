//! Static HTML/CSS generation from a configuration
//!
//! Items are deduped across devices first, markup is emitted once per logical
//! element and the stylesheet carries one media-query block per device.

pub mod css;
pub mod document;
pub mod html;

use std::collections::HashSet;

use crate::identity::dedupe_across_devices;
use crate::types::Configuration;

pub use css::{generate_css, generate_preview_css};
pub use document::full_document;
pub use html::generate_html;

/// Divs drawn with the highlight outline
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlight {
    pub enabled: bool,
    pub ids: HashSet<String>,
}

impl Highlight {
    pub fn new(ids: impl IntoIterator<Item = String>) -> Self {
        Self {
            enabled: true,
            ids: ids.into_iter().collect(),
        }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.enabled && self.ids.contains(id)
    }
}

/// Options that do not live in the configuration itself
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Prefix for image `src` attributes
    pub origin: String,
    pub highlight: Highlight,
}

/// Every export artifact for one configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBundle {
    pub html: String,
    pub css: String,
    pub document: String,
}

pub fn export(configurations: &Configuration, options: &ExportOptions) -> ExportBundle {
    let unique = dedupe_across_devices(configurations);
    let html = generate_html(&unique, &options.highlight, &options.origin);
    let css = generate_css(configurations, &unique, options.highlight.enabled);
    let document = full_document(&html, &css);
    ExportBundle { html, css, document }
}
