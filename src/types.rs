//! Core data model shared by every builder component
//!
//! The serialized shape (camelCase keys) is the design file format, so field
//! renames here are format changes.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::constants::{device_defaults, grid, social};

/// CSS property name (camelCase) → value
pub type StyleMap = BTreeMap<String, String>;

/// Key of the nested image style map inside `divStyles`
pub const IMAGE_STYLES_KEY: &str = "imageStyles";

/// One of the three fixed breakpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Desktop,
    Tablet,
    Mobile,
}

impl Device {
    /// Fixed iteration order: desktop wins over tablet wins over mobile
    pub const ALL: [Device; 3] = [Device::Desktop, Device::Tablet, Device::Mobile];

    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Desktop => "desktop",
            Device::Tablet => "tablet",
            Device::Mobile => "mobile",
        }
    }

    /// Default (columns, rows, gap) used on initialization and reset
    pub fn default_dimensions(&self) -> (u32, u32, u32) {
        match self {
            Device::Desktop => (
                device_defaults::DESKTOP_COLUMNS,
                device_defaults::DESKTOP_ROWS,
                device_defaults::DESKTOP_GAP,
            ),
            Device::Tablet => (
                device_defaults::TABLET_COLUMNS,
                device_defaults::TABLET_ROWS,
                device_defaults::TABLET_GAP,
            ),
            Device::Mobile => (
                device_defaults::MOBILE_COLUMNS,
                device_defaults::MOBILE_ROWS,
                device_defaults::MOBILE_GAP,
            ),
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Device {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "desktop" => Ok(Device::Desktop),
            "tablet" => Ok(Device::Tablet),
            "mobile" => Ok(Device::Mobile),
            other => Err(format!("unknown device '{other}' (expected desktop, tablet or mobile)")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    #[default]
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "image")]
    Image,
    #[serde(rename = "social-icons")]
    SocialIcons,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkTarget {
    #[default]
    #[serde(rename = "_self")]
    SelfFrame,
    #[serde(rename = "_blank")]
    Blank,
    #[serde(rename = "_parent")]
    Parent,
    #[serde(rename = "_top")]
    Top,
}

impl LinkTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkTarget::SelfFrame => "_self",
            LinkTarget::Blank => "_blank",
            LinkTarget::Parent => "_parent",
            LinkTarget::Top => "_top",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconLayout {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSize {
    Small,
    #[default]
    Medium,
    Large,
    Xl,
}

impl IconSize {
    /// Rendered icon edge length in pixels
    pub fn px(&self) -> u32 {
        match self {
            IconSize::Small => social::SIZE_SMALL_PX,
            IconSize::Medium => social::SIZE_MEDIUM_PX,
            IconSize::Large => social::SIZE_LARGE_PX,
            IconSize::Xl => social::SIZE_XL_PX,
        }
    }
}

/// Social network an icon links to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Facebook,
    Twitter,
    Instagram,
    Linkedin,
    Youtube,
    Tiktok,
    Whatsapp,
    Telegram,
    Discord,
    Custom,
}

impl Platform {
    pub const PRESETS: [Platform; 9] = [
        Platform::Facebook,
        Platform::Twitter,
        Platform::Instagram,
        Platform::Linkedin,
        Platform::Youtube,
        Platform::Tiktok,
        Platform::Whatsapp,
        Platform::Telegram,
        Platform::Discord,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
            Platform::Linkedin => "linkedin",
            Platform::Youtube => "youtube",
            Platform::Tiktok => "tiktok",
            Platform::Whatsapp => "whatsapp",
            Platform::Telegram => "telegram",
            Platform::Discord => "discord",
            Platform::Custom => "custom",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grid track size token (`auto`, `fit-content(100%)` or a literal length)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CellSize {
    #[default]
    Auto,
    FitContent,
    Fixed(String),
}

impl From<String> for CellSize {
    fn from(value: String) -> Self {
        match value.trim() {
            "" | grid::SIZE_AUTO => CellSize::Auto,
            grid::SIZE_FIT_CONTENT | "fit-content" => CellSize::FitContent,
            other => CellSize::Fixed(other.to_string()),
        }
    }
}

impl From<CellSize> for String {
    fn from(value: CellSize) -> Self {
        match value {
            CellSize::Auto => grid::SIZE_AUTO.to_string(),
            CellSize::FitContent => grid::SIZE_FIT_CONTENT.to_string(),
            CellSize::Fixed(v) => v,
        }
    }
}

impl CellSize {
    /// Track size for `grid-template-columns`
    pub fn column_track(&self) -> String {
        match self {
            CellSize::Auto => grid::AUTO_COLUMN_TRACK.to_string(),
            CellSize::FitContent => grid::SIZE_FIT_CONTENT.to_string(),
            CellSize::Fixed(v) => v.clone(),
        }
    }

    /// Track size for `grid-template-rows`
    pub fn row_track(&self) -> String {
        match self {
            CellSize::Auto => grid::AUTO_ROW_TRACK.to_string(),
            CellSize::FitContent => grid::SIZE_FIT_CONTENT.to_string(),
            CellSize::Fixed(v) => v.clone(),
        }
    }
}

/// Div-level styles: flat container/text properties plus the nested image map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct DivStyles {
    pub props: StyleMap,
    pub image_styles: StyleMap,
}

impl DivStyles {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.props.get(key).map(String::as_str)
    }

    pub fn image(&self, key: &str) -> Option<&str> {
        self.image_styles.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.props.insert(key.to_string(), value.into());
    }

    pub fn set_image(&mut self, key: &str, value: impl Into<String>) {
        self.image_styles.insert(key.to_string(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty() && self.image_styles.is_empty()
    }
}

impl From<Map<String, Value>> for DivStyles {
    fn from(mut map: Map<String, Value>) -> Self {
        let image_styles = match map.remove(IMAGE_STYLES_KEY) {
            Some(Value::Object(inner)) => style_map_from_json(inner),
            _ => StyleMap::new(),
        };
        Self {
            props: style_map_from_json(map),
            image_styles,
        }
    }
}

impl From<DivStyles> for Map<String, Value> {
    fn from(styles: DivStyles) -> Self {
        let mut map: Map<String, Value> = styles
            .props
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect();
        if !styles.image_styles.is_empty() {
            let inner: Map<String, Value> = styles
                .image_styles
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect();
            map.insert(IMAGE_STYLES_KEY.to_string(), Value::Object(inner));
        }
        map
    }
}

/// Convert a loosely typed JSON object into a style map.
/// Numbers and booleans are stringified, nulls and nested values dropped.
pub fn style_map_from_json(map: Map<String, Value>) -> StyleMap {
    map.into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(s) => Some((key, s)),
            Value::Number(n) => Some((key, n.to_string())),
            Value::Bool(b) => Some((key, b.to_string())),
            _ => None,
        })
        .collect()
}

/// Serde helpers for loosely typed style maps
pub mod style_map {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<StyleMap, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Map<String, Value>>::deserialize(deserializer)?;
        Ok(raw.map(style_map_from_json).unwrap_or_default())
    }
}

/// Treat an explicit JSON `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialIcon {
    pub id: String,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub custom_icon_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link_url: String,
    #[serde(default)]
    pub link_target: LinkTarget,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub is_custom: bool,
    /// Recomputed after every list change, never persisted
    #[serde(skip)]
    pub is_first: bool,
    #[serde(skip)]
    pub is_last: bool,
}

/// One cell of a device grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridItem {
    pub id: String,
    pub grid_column: u32,
    pub grid_row: u32,
    #[serde(default = "default_span")]
    pub col_span: u32,
    #[serde(default = "default_span")]
    pub row_span: u32,
    #[serde(default = "default_true")]
    pub is_empty: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content_type: ContentType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link_target: LinkTarget,
    #[serde(default)]
    pub show_pointer: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub custom_class_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub div_styles: DivStyles,
    #[serde(default, deserialize_with = "null_as_default")]
    pub social_icons: Vec<SocialIcon>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon_layout: IconLayout,
    #[serde(default = "default_icon_alignment")]
    pub icon_alignment: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon_size: IconSize,
    #[serde(default = "default_icon_spacing")]
    pub icon_spacing: String,
    /// CSS grid placement string
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub draggable: bool,
}

fn default_span() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_icon_alignment() -> String {
    "center".to_string()
}

fn default_icon_spacing() -> String {
    social::DEFAULT_SPACING.to_string()
}

impl GridItem {
    /// Empty single-cell placeholder at the given origin
    pub fn empty(id: impl Into<String>, col: u32, row: u32) -> Self {
        Self {
            id: id.into(),
            grid_column: col,
            grid_row: row,
            col_span: 1,
            row_span: 1,
            is_empty: true,
            content_type: ContentType::Text,
            content: String::new(),
            image_url: String::new(),
            link_url: String::new(),
            link_target: LinkTarget::SelfFrame,
            show_pointer: false,
            custom_class_name: String::new(),
            div_styles: DivStyles::default(),
            social_icons: Vec::new(),
            icon_layout: IconLayout::Horizontal,
            icon_alignment: default_icon_alignment(),
            icon_size: IconSize::Medium,
            icon_spacing: default_icon_spacing(),
            style: crate::grid::cell_style(col, row, 1, 1),
            draggable: false,
        }
    }

    /// Reset every content field, keeping id and origin
    pub fn reset_to_empty(&mut self) {
        *self = GridItem::empty(std::mem::take(&mut self.id), self.grid_column, self.grid_row);
    }

    /// Copy content, style and span from another item, keeping this item's id and origin
    pub fn take_content_from(&mut self, source: &GridItem) {
        self.content = source.content.clone();
        self.content_type = source.content_type;
        self.image_url = source.image_url.clone();
        self.link_url = source.link_url.clone();
        self.link_target = source.link_target;
        self.show_pointer = source.show_pointer;
        self.is_empty = false;
        self.div_styles = source.div_styles.clone();
        self.custom_class_name = source.custom_class_name.clone();
        self.social_icons = source.social_icons.clone();
        self.icon_layout = source.icon_layout;
        self.icon_alignment = source.icon_alignment.clone();
        self.icon_size = source.icon_size;
        self.icon_spacing = source.icon_spacing.clone();
        self.col_span = source.col_span;
        self.row_span = source.row_span;
        self.style =
            crate::grid::cell_style(self.grid_column, self.grid_row, self.col_span, self.row_span);
        self.draggable = true;
    }

    pub fn is_text(&self) -> bool {
        self.content_type == ContentType::Text
    }

    pub fn is_image(&self) -> bool {
        self.content_type == ContentType::Image
    }

    pub fn is_social(&self) -> bool {
        self.content_type == ContentType::SocialIcons
    }

    pub fn has_link(&self) -> bool {
        !self.link_url.trim().is_empty()
    }

    /// Whether the item's rectangle lies inside a cols × rows grid
    pub fn fits(&self, cols: u32, rows: u32) -> bool {
        self.grid_column >= 1
            && self.grid_row >= 1
            && self.grid_column + self.col_span - 1 <= cols
            && self.grid_row + self.row_span - 1 <= rows
    }
}

/// Shallow patch applied by `ConfigStore::update_grid_item`.
/// `None` fields leave the item untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridItemPatch {
    pub grid_column: Option<u32>,
    pub grid_row: Option<u32>,
    pub col_span: Option<u32>,
    pub row_span: Option<u32>,
    pub is_empty: Option<bool>,
    pub content_type: Option<ContentType>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub link_target: Option<LinkTarget>,
    pub show_pointer: Option<bool>,
    pub custom_class_name: Option<String>,
    pub div_styles: Option<DivStyles>,
    pub social_icons: Option<Vec<SocialIcon>>,
    pub icon_layout: Option<IconLayout>,
    pub icon_alignment: Option<String>,
    pub icon_size: Option<IconSize>,
    pub icon_spacing: Option<String>,
    pub style: Option<String>,
    pub draggable: Option<bool>,
}

impl GridItemPatch {
    /// Patch that replaces every content field with the given item's
    pub fn from_item(item: &GridItem) -> Self {
        Self {
            grid_column: Some(item.grid_column),
            grid_row: Some(item.grid_row),
            col_span: Some(item.col_span),
            row_span: Some(item.row_span),
            is_empty: Some(item.is_empty),
            content_type: Some(item.content_type),
            content: Some(item.content.clone()),
            image_url: Some(item.image_url.clone()),
            link_url: Some(item.link_url.clone()),
            link_target: Some(item.link_target),
            show_pointer: Some(item.show_pointer),
            custom_class_name: Some(item.custom_class_name.clone()),
            div_styles: Some(item.div_styles.clone()),
            social_icons: Some(item.social_icons.clone()),
            icon_layout: Some(item.icon_layout),
            icon_alignment: Some(item.icon_alignment.clone()),
            icon_size: Some(item.icon_size),
            icon_spacing: Some(item.icon_spacing.clone()),
            style: Some(item.style.clone()),
            draggable: None,
        }
    }

    pub fn touches_styles(&self) -> bool {
        self.div_styles.is_some()
    }

    /// Merge onto an item. Unspecified `draggable` becomes `!is_empty`.
    pub fn apply(self, item: &mut GridItem) {
        if let Some(value) = self.grid_column {
            item.grid_column = value;
        }
        if let Some(value) = self.grid_row {
            item.grid_row = value;
        }
        if let Some(value) = self.col_span {
            item.col_span = value;
        }
        if let Some(value) = self.row_span {
            item.row_span = value;
        }
        if let Some(value) = self.is_empty {
            item.is_empty = value;
        }
        if let Some(value) = self.content_type {
            item.content_type = value;
        }
        if let Some(value) = self.content {
            item.content = value;
        }
        if let Some(value) = self.image_url {
            item.image_url = value;
        }
        if let Some(value) = self.link_url {
            item.link_url = value;
        }
        if let Some(value) = self.link_target {
            item.link_target = value;
        }
        if let Some(value) = self.show_pointer {
            item.show_pointer = value;
        }
        if let Some(value) = self.custom_class_name {
            item.custom_class_name = value;
        }
        if let Some(value) = self.div_styles {
            item.div_styles = value;
        }
        if let Some(value) = self.social_icons {
            item.social_icons = value;
        }
        if let Some(value) = self.icon_layout {
            item.icon_layout = value;
        }
        if let Some(value) = self.icon_alignment {
            item.icon_alignment = value;
        }
        if let Some(value) = self.icon_size {
            item.icon_size = value;
        }
        if let Some(value) = self.icon_spacing {
            item.icon_spacing = value;
        }
        if let Some(value) = self.style {
            item.style = value;
        }
        item.draggable = self.draggable.unwrap_or(!item.is_empty);
    }
}

/// Grid and footer settings for one breakpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub grid_items: Vec<GridItem>,
    #[serde(default, deserialize_with = "style_map::deserialize")]
    pub footer_styles: StyleMap,
    #[serde(default = "default_columns")]
    pub device_columns: u32,
    #[serde(default = "default_rows")]
    pub device_rows: u32,
    #[serde(default)]
    pub device_gap: u32,
    #[serde(default)]
    pub device_cell_width: CellSize,
    #[serde(default)]
    pub device_cell_height: CellSize,
}

fn default_columns() -> u32 {
    device_defaults::DESKTOP_COLUMNS
}

fn default_rows() -> u32 {
    device_defaults::DESKTOP_ROWS
}

impl DeviceConfig {
    /// Device defaults with no items and no footer styles
    pub fn for_device(device: Device) -> Self {
        let (columns, rows, gap) = device.default_dimensions();
        Self {
            grid_items: Vec::new(),
            footer_styles: StyleMap::new(),
            device_columns: columns,
            device_rows: rows,
            device_gap: gap,
            device_cell_width: CellSize::Auto,
            device_cell_height: CellSize::FitContent,
        }
    }

    pub fn item(&self, id: &str) -> Option<&GridItem> {
        self.grid_items.iter().find(|item| item.id == id)
    }

    pub fn item_mut(&mut self, id: &str) -> Option<&mut GridItem> {
        self.grid_items.iter_mut().find(|item| item.id == id)
    }

    pub fn filled_items(&self) -> impl Iterator<Item = &GridItem> {
        self.grid_items.iter().filter(|item| !item.is_empty)
    }

    pub fn filled_count(&self) -> usize {
        self.filled_items().count()
    }

    pub fn footer_style(&self, key: &str) -> Option<&str> {
        self.footer_styles
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Root state: one optional config per device. A missing device is "not yet initialized".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop: Option<DeviceConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tablet: Option<DeviceConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<DeviceConfig>,
}

impl Configuration {
    pub fn get(&self, device: Device) -> Option<&DeviceConfig> {
        match device {
            Device::Desktop => self.desktop.as_ref(),
            Device::Tablet => self.tablet.as_ref(),
            Device::Mobile => self.mobile.as_ref(),
        }
    }

    pub fn get_mut(&mut self, device: Device) -> Option<&mut DeviceConfig> {
        match device {
            Device::Desktop => self.desktop.as_mut(),
            Device::Tablet => self.tablet.as_mut(),
            Device::Mobile => self.mobile.as_mut(),
        }
    }

    pub fn set(&mut self, device: Device, config: DeviceConfig) {
        let slot = match device {
            Device::Desktop => &mut self.desktop,
            Device::Tablet => &mut self.tablet,
            Device::Mobile => &mut self.mobile,
        };
        *slot = Some(config);
    }

    /// Initialized devices in fixed order
    pub fn devices(&self) -> impl Iterator<Item = (Device, &DeviceConfig)> {
        Device::ALL
            .into_iter()
            .filter_map(|device| self.get(device).map(|config| (device, config)))
    }

    pub fn is_initialized(&self) -> bool {
        Device::ALL.iter().all(|device| self.get(*device).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_parse_and_display() {
        assert_eq!("Tablet".parse::<Device>(), Ok(Device::Tablet));
        assert_eq!(Device::Mobile.to_string(), "mobile");
        assert!("watch".parse::<Device>().is_err());
    }

    #[test]
    fn test_cell_size_tokens() {
        assert_eq!(CellSize::from("auto".to_string()), CellSize::Auto);
        assert_eq!(CellSize::from("fit-content(100%)".to_string()), CellSize::FitContent);
        assert_eq!(CellSize::from("120px".to_string()), CellSize::Fixed("120px".to_string()));
        assert_eq!(CellSize::Auto.column_track(), "1fr");
        assert_eq!(CellSize::Auto.row_track(), "minmax(80px, auto)");
        assert_eq!(CellSize::Fixed("90px".to_string()).row_track(), "90px");
    }

    #[test]
    fn test_div_styles_split_image_map() {
        let json = r##"{"color":"#fff","fontSize":14,"margin":null,"imageStyles":{"width":"50px"}}"##;
        let styles: DivStyles = serde_json::from_str(json).unwrap();
        assert_eq!(styles.get("color"), Some("#fff"));
        assert_eq!(styles.get("fontSize"), Some("14"));
        assert_eq!(styles.get("margin"), None);
        assert_eq!(styles.image("width"), Some("50px"));

        let back = serde_json::to_value(&styles).unwrap();
        assert_eq!(back["imageStyles"]["width"], "50px");
    }

    #[test]
    fn test_grid_item_lenient_deserialize() {
        let json = r#"{"id":"cell-1-1","gridColumn":1,"gridRow":1,"content":null,"divStyles":null}"#;
        let item: GridItem = serde_json::from_str(json).unwrap();
        assert!(item.is_empty);
        assert_eq!(item.col_span, 1);
        assert_eq!(item.content, "");
        assert!(item.div_styles.is_empty());
        assert_eq!(item.icon_spacing, "12px");
    }

    #[test]
    fn test_social_icon_flags_not_serialized() {
        let icon = SocialIcon {
            id: "icon_1".to_string(),
            platform: Platform::Discord,
            icon_url: String::new(),
            custom_icon_url: String::new(),
            link_url: String::new(),
            link_target: LinkTarget::Blank,
            order: 1,
            is_custom: false,
            is_first: true,
            is_last: true,
        };
        let value = serde_json::to_value(&icon).unwrap();
        assert!(value.get("isFirst").is_none());
        assert_eq!(value["platform"], "discord");
        assert_eq!(value["linkTarget"], "_blank");
    }

    #[test]
    fn test_patch_defaults_draggable() {
        let mut item = GridItem::empty("cell-1-1", 1, 1);
        GridItemPatch {
            is_empty: Some(false),
            content: Some("Hello".to_string()),
            ..Default::default()
        }
        .apply(&mut item);
        assert!(item.draggable);
        assert_eq!(item.content, "Hello");

        GridItemPatch {
            draggable: Some(false),
            ..Default::default()
        }
        .apply(&mut item);
        assert!(!item.draggable);
    }

    #[test]
    fn test_reset_to_empty_keeps_identity() {
        let mut item = GridItem::empty("cell-2-3", 3, 2);
        item.is_empty = false;
        item.content = "x".to_string();
        item.col_span = 2;
        item.draggable = true;
        item.reset_to_empty();
        assert_eq!(item, GridItem::empty("cell-2-3", 3, 2));
    }

    #[test]
    fn test_configuration_missing_devices() {
        let json = r#"{"desktop":{"gridItems":[],"deviceColumns":2,"deviceRows":1}}"#;
        let cfg: Configuration = serde_json::from_str(json).unwrap();
        assert!(cfg.get(Device::Desktop).is_some());
        assert!(cfg.get(Device::Mobile).is_none());
        assert!(!cfg.is_initialized());
        assert_eq!(cfg.devices().count(), 1);
    }
}
