//! Named style presets for text, images and the footer container

use crate::types::{DivStyles, StyleMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPreset {
    Heading,
    Body,
    Caption,
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePreset {
    Cover,
    Contain,
    Circle,
    Rounded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterPreset {
    Modern,
    Minimal,
    Corporate,
    Elegant,
}

impl TextPreset {
    fn values(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            TextPreset::Heading => &[
                ("fontSize", "24px"),
                ("fontWeight", "600"),
                ("color", "#000000"),
                ("textAlign", "center"),
                ("lineHeight", "1.2"),
                ("textDecoration", "none"),
            ],
            TextPreset::Body => &[
                ("fontSize", "16px"),
                ("fontWeight", "400"),
                ("color", "#333333"),
                ("textAlign", "left"),
                ("lineHeight", "1.6"),
                ("textDecoration", "none"),
            ],
            TextPreset::Caption => &[
                ("fontSize", "12px"),
                ("fontWeight", "300"),
                ("color", "#666666"),
                ("textAlign", "center"),
                ("lineHeight", "1.4"),
                ("textDecoration", "none"),
            ],
            TextPreset::Link => &[
                ("fontSize", "14px"),
                ("fontWeight", "500"),
                ("color", "#0066cc"),
                ("textDecoration", "underline"),
                ("textAlign", "left"),
                ("cursor", "pointer"),
            ],
        }
    }

    /// Overlay this preset onto existing div styles
    pub fn apply(&self, styles: &mut DivStyles) {
        for (key, value) in self.values() {
            styles.set(key, *value);
        }
    }
}

impl ImagePreset {
    fn values(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            ImagePreset::Cover => &[
                ("width", "100%"),
                ("height", "200px"),
                ("objectFit", "cover"),
                ("objectPosition", "center"),
                ("opacity", "1"),
                ("borderRadius", "0px"),
            ],
            ImagePreset::Contain => &[
                ("width", "100%"),
                ("height", "auto"),
                ("objectFit", "contain"),
                ("objectPosition", "center"),
                ("opacity", "1"),
                ("borderRadius", "0px"),
            ],
            ImagePreset::Circle => &[
                ("width", "100px"),
                ("height", "100px"),
                ("objectFit", "cover"),
                ("borderRadius", "50%"),
                ("opacity", "1"),
            ],
            ImagePreset::Rounded => &[
                ("width", "100%"),
                ("height", "auto"),
                ("objectFit", "cover"),
                ("borderRadius", "12px"),
                ("opacity", "1"),
            ],
        }
    }

    /// Overlay this preset onto the nested image styles
    pub fn apply(&self, styles: &mut DivStyles) {
        for (key, value) in self.values() {
            styles.set_image(key, *value);
        }
    }
}

impl FooterPreset {
    fn values(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            FooterPreset::Modern => &[
                ("backgroundColor", "#1a202c"),
                ("color", "#ffffff"),
                ("padding", "60px"),
                ("borderRadius", "12px"),
                ("boxShadow", "0 10px 30px rgba(0,0,0,0.2)"),
            ],
            FooterPreset::Minimal => &[
                ("backgroundColor", "#ffffff"),
                ("color", "#2d3748"),
                ("padding", "40px"),
                ("borderTopWidth", "1px"),
                ("borderColor", "#e2e8f0"),
                ("boxShadow", "none"),
            ],
            FooterPreset::Corporate => &[
                ("backgroundColor", "#2b6cb0"),
                ("color", "#ffffff"),
                ("padding", "50px"),
                ("borderRadius", "0px"),
                ("boxShadow", "0 4px 20px rgba(43, 108, 176, 0.3)"),
            ],
            FooterPreset::Elegant => &[
                ("backgroundColor", "#4a5568"),
                ("color", "#f7fafc"),
                ("padding", "48px"),
                ("borderRadius", "8px"),
                ("boxShadow", "0 8px 25px rgba(0,0,0,0.15)"),
            ],
        }
    }

    /// Patch suitable for `ConfigStore::update_footer_styles`
    pub fn patch(&self) -> StyleMap {
        self.values()
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }
}
