//! Application-wide constants
//!
//! This module contains the magic numbers and string literals used throughout
//! the builder, providing a single source of truth for constant values.

/// Grid geometry constants
pub mod grid {
    /// Prefix of every lattice cell id (`cell-{row}-{col}`)
    pub const CELL_ID_PREFIX: &str = "cell-";

    /// z-index of an item spanning more than one cell in either axis
    pub const SPANNING_Z_INDEX: u32 = 10;

    /// z-index of a single-cell item
    pub const DEFAULT_Z_INDEX: u32 = 1;

    /// Cell size token meaning "share remaining space"
    pub const SIZE_AUTO: &str = "auto";

    /// Cell size token meaning "size to content"
    pub const SIZE_FIT_CONTENT: &str = "fit-content(100%)";

    /// Track size emitted for an `auto` column width
    pub const AUTO_COLUMN_TRACK: &str = "1fr";

    /// Track size emitted for an `auto` row height
    pub const AUTO_ROW_TRACK: &str = "minmax(80px, auto)";

    /// Gap used for the base container when desktop has none
    pub const FALLBACK_GAP: u32 = 8;

    /// Upper bound for a device's column or row count
    pub const MAX_TRACKS: u32 = 24;
}

/// Per-device default dimensions applied on initialization and reset
pub mod device_defaults {
    pub const DESKTOP_COLUMNS: u32 = 4;
    pub const DESKTOP_ROWS: u32 = 3;
    pub const DESKTOP_GAP: u32 = 8;

    pub const TABLET_COLUMNS: u32 = 3;
    pub const TABLET_ROWS: u32 = 3;
    pub const TABLET_GAP: u32 = 6;

    pub const MOBILE_COLUMNS: u32 = 2;
    pub const MOBILE_ROWS: u32 = 4;
    pub const MOBILE_GAP: u32 = 4;
}

/// Responsive breakpoints for the generated stylesheet
pub mod breakpoints {
    /// Media query of the desktop block
    pub const DESKTOP_QUERY: &str = "@media (min-width: 769px)";

    /// Media query of the tablet block
    pub const TABLET_QUERY: &str = "@media (max-width: 768px) and (min-width: 481px)";

    /// Media query of the mobile block
    pub const MOBILE_QUERY: &str = "@media (max-width: 480px)";

    /// Maximum width of the exported footer container in pixels
    pub const CONTAINER_MAX_WIDTH: u32 = 1200;

    /// Preview frame widths per device in pixels
    pub const DESKTOP_PREVIEW_WIDTH: u32 = 1200;
    pub const TABLET_PREVIEW_WIDTH: u32 = 768;
    pub const MOBILE_PREVIEW_WIDTH: u32 = 480;
}

/// Class name derivation constants
pub mod naming {
    /// Maximum length of an auto-derived class name
    pub const MAX_CLASS_NAME_LEN: usize = 50;

    /// Prefix added to class names starting with a digit
    pub const DIGIT_PREFIX: &str = "class-";

    /// Base name for image items without a custom name
    pub const IMAGE_BASE: &str = "image-container";

    /// Base name for social icon items without a custom name
    pub const SOCIAL_BASE: &str = "social-icons";

    /// Base name for text items with no text
    pub const TEXT_BASE: &str = "text-block";

    /// Fallback when slugification leaves nothing
    pub const FALLBACK_BASE: &str = "footer-div";

    /// Suffix marker used when pasting a copied div
    pub const COPY_SUFFIX: &str = "-copy";

    /// Class name of the exported root container
    pub const CONTAINER_CLASS: &str = "footer-container";

    /// Class name added to highlighted divs
    pub const HIGHLIGHT_CLASS: &str = "highlighted-div";
}

/// Undo/redo history constants
pub mod history {
    /// Default number of snapshots kept on each stack
    pub const DEFAULT_LIMIT: usize = 10;

    /// Upper bound accepted from settings
    pub const MAX_LIMIT: usize = 100;
}

/// Social icon constants
pub mod social {
    /// CDN serving the simple-icons SVG set
    pub const ICON_CDN_BASE: &str = "https://cdn.jsdelivr.net/npm/simple-icons@v9/icons";

    /// Default spacing between icons
    pub const DEFAULT_SPACING: &str = "12px";

    /// Exported icon sizes in pixels
    pub const SIZE_SMALL_PX: u32 = 24;
    pub const SIZE_MEDIUM_PX: u32 = 32;
    pub const SIZE_LARGE_PX: u32 = 48;
    pub const SIZE_XL_PX: u32 = 64;
}

/// Key-value storage constants
pub mod storage {
    /// Key prefix of a saved design (`footerBuilder_design_{name}`)
    pub const DESIGN_KEY_PREFIX: &str = "footerBuilder_design_";

    /// Key of the saved design index
    pub const DESIGN_LIST_KEY: &str = "footerBuilder_savedDesignsList";

    /// File format version written with every design
    pub const FORMAT_VERSION: &str = "1.0";

    /// Directory under the platform data dir holding stored keys
    pub const DATA_DIR: &str = "footer-builder";

    /// Extension of one stored key on disk
    pub const KEY_EXTENSION: &str = "json";
}

/// Configuration file constants
pub mod config {
    /// Application directory name under the config dir
    pub const APP_DIR: &str = "footer-builder";

    /// Settings filename
    pub const FILENAME: &str = "settings.json";

    /// Default origin prepended to image sources
    pub const DEFAULT_ORIGIN: &str = "";
}
