//! Class name derivation and cross-device deduplication
//!
//! Items on different devices that derive the same class name are treated as
//! the same logical element: markup is emitted once and each device only
//! contributes its own placement and styles.

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::constants::naming::{
    COPY_SUFFIX, DIGIT_PREFIX, FALLBACK_BASE, IMAGE_BASE, MAX_CLASS_NAME_LEN, SOCIAL_BASE, TEXT_BASE,
};
use crate::types::{Configuration, ContentType, Device, GridItem};

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

static NON_CLASS_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9-]").expect("Invalid class character regex"));

static COPY_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-copy(-\d+)?$").expect("Invalid copy suffix regex"));

/// Lowercase, whitespace runs to `-`, drop anything outside `[a-z0-9-]`
pub fn slugify(value: &str) -> String {
    let lowered = value.trim().to_lowercase();
    let hyphenated = WHITESPACE.replace_all(&lowered, "-");
    NON_CLASS_CHARS.replace_all(&hyphenated, "").into_owned()
}

fn truncate(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

/// Export class name of a filled item
pub fn derive_class_name(item: &GridItem) -> String {
    let custom = item.custom_class_name.trim();
    if !custom.is_empty() {
        return slugify(custom);
    }

    let base = match item.content_type {
        ContentType::Image => IMAGE_BASE,
        ContentType::SocialIcons => SOCIAL_BASE,
        ContentType::Text => match item.content.trim() {
            "" => TEXT_BASE,
            text => text,
        },
    };

    let sanitized = truncate(&slugify(base), MAX_CLASS_NAME_LEN);
    if sanitized.is_empty() {
        FALLBACK_BASE.to_string()
    } else if sanitized.starts_with(|c: char| c.is_ascii_digit()) {
        format!("{DIGIT_PREFIX}{sanitized}")
    } else {
        sanitized
    }
}

/// Auto-generated `customClassName` for new, pasted and loaded divs.
/// Empty when the content has no usable characters.
pub fn generate_class_name(content: &str) -> String {
    truncate(&slugify(content), MAX_CLASS_NAME_LEN)
}

/// Canonical representative of one logical element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalItem {
    pub class_name: String,
    pub device: Device,
    pub item: GridItem,
}

/// First filled item per class name, scanning desktop, tablet, mobile
pub fn dedupe_across_devices(configurations: &Configuration) -> Vec<CanonicalItem> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for (device, config) in configurations.devices() {
        for item in config.filled_items() {
            let class_name = derive_class_name(item);
            if seen.insert(class_name.clone()) {
                unique.push(CanonicalItem {
                    class_name,
                    device,
                    item: item.clone(),
                });
            }
        }
    }
    unique
}

/// Find a device's own filled item carrying the given class name
pub fn find_by_class<'a>(items: &'a [GridItem], class_name: &str) -> Option<&'a GridItem> {
    items
        .iter()
        .find(|item| !item.is_empty && derive_class_name(item) == class_name)
}

/// Per-base counters for naming pasted copies (`footer-links-copy-2`)
#[derive(Debug, Default)]
pub struct CopyNamer {
    counters: HashMap<String, u32>,
}

impl CopyNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strip any previous `-copy` / `-copy-N` tail
    pub fn base_of(name: &str) -> String {
        COPY_TAIL.replace(name, "").into_owned()
    }

    /// Next class name and counter for a copy of `item`
    pub fn next_name(&mut self, item: &GridItem) -> (String, u32) {
        let source = if item.custom_class_name.trim().is_empty() {
            let content = if item.content.trim().is_empty() { "div" } else { item.content.as_str() };
            generate_class_name(content)
        } else {
            item.custom_class_name.trim().to_string()
        };
        let base = Self::base_of(&source);
        let counter = self.counters.entry(base.clone()).or_insert(0);
        *counter += 1;
        (format!("{base}{COPY_SUFFIX}-{counter}"), *counter)
    }
}
