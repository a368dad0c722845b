//! Stylesheet generation: base container rule, resets and one media-query
//! block per device

use std::fmt::Write as _;

use crate::constants::breakpoints::{
    CONTAINER_MAX_WIDTH, DESKTOP_QUERY, MOBILE_QUERY, TABLET_QUERY,
};
use crate::constants::grid::FALLBACK_GAP;
use crate::constants::naming::{CONTAINER_CLASS, HIGHLIGHT_CLASS};
use crate::grid::placement;
use crate::identity::{CanonicalItem, find_by_class};
use crate::style::emit::{container_declarations, image_declarations, text_declarations};
use crate::style::{camel_to_kebab, is_zero};
use crate::types::{Configuration, ContentType, Device, DeviceConfig, GridItem, IconLayout, StyleMap};

const INDENT: &str = "    ";

fn media_query(device: Device) -> &'static str {
    match device {
        Device::Desktop => DESKTOP_QUERY,
        Device::Tablet => TABLET_QUERY,
        Device::Mobile => MOBILE_QUERY,
    }
}

/// `justify-content` for an alignment keyword; unknown values pass through
pub fn justify_content(alignment: &str) -> String {
    match alignment {
        "left" | "top left" | "bottom left" => "flex-start",
        "center" | "top" | "bottom" => "center",
        "right" | "top right" | "bottom right" => "flex-end",
        other => other,
    }
    .to_string()
}

/// `align-items` for an alignment keyword; unknown values center
pub fn align_items(alignment: &str) -> &'static str {
    match alignment {
        "top" | "top left" | "top right" => "flex-start",
        "bottom" | "bottom left" | "bottom right" => "flex-end",
        _ => "center",
    }
}

fn footer_declarations(footer: &StyleMap, indent: &str, out: &mut String) {
    for (key, value) in footer {
        if !is_zero(value) {
            let _ = writeln!(out, "{indent}{}: {value};", camel_to_kebab(key));
        }
    }
}

fn write_prelude(out: &mut String, highlight_enabled: bool) {
    if highlight_enabled {
        let _ = write!(
            out,
            ".{HIGHLIGHT_CLASS} {{\n    border: 1px solid #28a745 !important;\n    box-shadow: 0 0 0 1px rgba(40, 167, 69, 0.5) !important;\n}}\n\n"
        );
    }
    out.push_str("* {\n    margin: 0;\n    padding: 0;\n    text-decoration: none;\n}\n\n");
}

fn write_block(out: &mut String, indent: &str, selector: &str, decls: &[String]) {
    let _ = writeln!(out, "{indent}{selector} {{");
    for decl in decls {
        let _ = writeln!(out, "{indent}{INDENT}{decl};");
    }
    let _ = writeln!(out, "{indent}}}");
}

fn write_social_rules(out: &mut String, indent: &str, class: &str, item: &GridItem) {
    let direction = match item.icon_layout {
        IconLayout::Horizontal => "row",
        IconLayout::Vertical => "column",
    };
    let gap = if item.icon_spacing.is_empty() { "12px" } else { item.icon_spacing.as_str() };
    let size = format!("{}px", item.icon_size.px());

    write_block(
        out,
        indent,
        &format!(".{class} .social-icons-container"),
        &[
            "display: flex".to_string(),
            format!("flex-direction: {direction}"),
            format!("justify-content: {}", justify_content(&item.icon_alignment)),
            format!("align-items: {}", align_items(&item.icon_alignment)),
            format!("gap: {gap}"),
            "flex-wrap: wrap".to_string(),
            "width: 100%".to_string(),
            "height: 100%".to_string(),
        ],
    );
    write_block(
        out,
        indent,
        &format!(".{class} .social-icon"),
        &[
            format!("width: {size}"),
            format!("height: {size}"),
            "object-fit: contain".to_string(),
            "transition: all 0.2s ease".to_string(),
            "border-radius: 4px".to_string(),
        ],
    );
    write_block(
        out,
        indent,
        &format!(".{class} .social-icon:hover"),
        &[
            "transform: scale(1.1)".to_string(),
            "filter: drop-shadow(0 4px 8px rgba(0, 0, 0, 0.2))".to_string(),
        ],
    );
    out.push('\n');
}

fn write_image_rules(out: &mut String, indent: &str, class: &str, item: &GridItem) {
    let decls = image_declarations(&item.div_styles.image_styles);
    write_block(out, indent, &format!(".{class} img"), &decls);
    if item.has_link() {
        let pointer = if item.show_pointer { " cursor: pointer;" } else { "" };
        let _ = writeln!(
            out,
            "{indent}.{class} a.image-link {{ display: inline-block; text-decoration: none; transition: all 0.2s ease; border-radius: 4px; overflow: hidden;{pointer} }}"
        );
        let _ = writeln!(
            out,
            "{indent}.{class} a.image-link:hover {{ transform: scale(1.02); box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); }}"
        );
        let _ = writeln!(
            out,
            "{indent}.{class} a.image-link:hover img {{ filter: brightness(1.1); }}\n"
        );
    }
}

fn write_text_rules(out: &mut String, indent: &str, class: &str, item: &GridItem) {
    let decls = text_declarations(&item.div_styles.props);
    if !decls.is_empty() {
        write_block(out, indent, &format!(".{class} .text-content"), &decls);
    }
    if item.has_link() {
        let _ = writeln!(out, "{indent}.{class} a.text-content:hover {{ opacity: 0.8; }}\n");
    }
}

/// Rules for every canonical class as laid out on one device. Classes the
/// device does not contain are hidden.
pub fn generate_cell_css(items: &[CanonicalItem], config: &DeviceConfig, indent: &str) -> String {
    let mut out = String::new();
    for canonical in items {
        let class = &canonical.class_name;
        let Some(cell) = find_by_class(&config.grid_items, class) else {
            write_block(&mut out, indent, &format!(".{class}"), &["display: none".to_string()]);
            out.push('\n');
            continue;
        };

        let alignment = if cell.content_type == ContentType::Image {
            cell.div_styles.image("objectPosition").unwrap_or("center")
        } else {
            cell.div_styles.get("textAlign").unwrap_or("left")
        };

        let mut decls = vec![
            format!("grid-column: {}", placement(cell.grid_column, cell.col_span)),
            format!("grid-row: {}", placement(cell.grid_row, cell.row_span)),
        ];
        decls.extend(container_declarations(&cell.div_styles.props));
        decls.push("display: flex".to_string());
        decls.push(format!("justify-content: {}", justify_content(alignment)));
        decls.push(format!("align-items: {}", align_items(alignment)));
        write_block(&mut out, indent, &format!(".{class}"), &decls);
        out.push('\n');

        match cell.content_type {
            ContentType::SocialIcons => write_social_rules(&mut out, indent, class, cell),
            ContentType::Image => write_image_rules(&mut out, indent, class, cell),
            ContentType::Text => write_text_rules(&mut out, indent, class, cell),
        }
    }
    out
}

fn write_grid_template(out: &mut String, config: &DeviceConfig, indent: &str) {
    let _ = writeln!(
        out,
        "{indent}{INDENT}grid-template-columns: repeat({}, {});",
        config.device_columns,
        config.device_cell_width.column_track()
    );
    let _ = writeln!(
        out,
        "{indent}{INDENT}grid-template-rows: repeat({}, {});",
        config.device_rows,
        config.device_cell_height.row_track()
    );
    let _ = writeln!(out, "{indent}{INDENT}gap: {}px;", config.device_gap);
}

/// Responsive stylesheet for every initialized device
pub fn generate_css(
    configurations: &Configuration,
    items: &[CanonicalItem],
    highlight_enabled: bool,
) -> String {
    let desktop = configurations.get(Device::Desktop);
    let gap = desktop
        .map(|config| config.device_gap)
        .filter(|gap| *gap > 0)
        .unwrap_or(FALLBACK_GAP);

    let mut out = format!(".{CONTAINER_CLASS} {{\n");
    let _ = writeln!(out, "{INDENT}max-width: {CONTAINER_MAX_WIDTH}px;");
    let _ = writeln!(out, "{INDENT}margin: auto;");
    let _ = writeln!(out, "{INDENT}display: grid;");
    let _ = writeln!(out, "{INDENT}gap: {gap}px;");
    if let Some(config) = desktop {
        footer_declarations(&config.footer_styles, INDENT, &mut out);
    }
    out.push_str("}\n\n");

    write_prelude(&mut out, highlight_enabled);

    for (device, config) in configurations.devices() {
        let _ = writeln!(out, "{} {{", media_query(device));
        let _ = writeln!(out, "{INDENT}.{CONTAINER_CLASS} {{");
        write_grid_template(&mut out, config, INDENT);
        let _ = writeln!(out, "{INDENT}}}");
        out.push_str(&generate_cell_css(items, config, INDENT));
        out.push_str("}\n\n");
    }

    out
}

/// Single-device stylesheet used by the live preview: no media queries and
/// no max-width, footer styles taken from that device
pub fn generate_preview_css(
    configurations: &Configuration,
    device: Device,
    items: &[CanonicalItem],
    highlight_enabled: bool,
) -> String {
    let Some(config) = configurations.get(device) else {
        return String::new();
    };

    let mut out = format!(".{CONTAINER_CLASS} {{\n");
    let _ = writeln!(out, "{INDENT}display: grid;");
    write_grid_template(&mut out, config, "");
    footer_declarations(&config.footer_styles, INDENT, &mut out);
    out.push_str("}\n\n");

    write_prelude(&mut out, highlight_enabled);
    out.push_str(&generate_cell_css(items, config, ""));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::dedupe_across_devices;
    use crate::style::defaults::fill_div_defaults;

    fn filled(id: &str, col: u32, row: u32, content: &str) -> GridItem {
        let mut item = GridItem::empty(id, col, row);
        item.is_empty = false;
        item.content = content.to_string();
        fill_div_defaults(&mut item.div_styles);
        item
    }

    fn three_devices() -> Configuration {
        let mut cfg = Configuration::default();
        for device in Device::ALL {
            let mut config = DeviceConfig::for_device(device);
            config.grid_items = crate::grid::empty_lattice(config.device_columns, config.device_rows);
            cfg.set(device, config);
        }
        cfg
    }

    #[test]
    fn test_alignment_tables() {
        assert_eq!(justify_content("right"), "flex-end");
        assert_eq!(justify_content("top"), "center");
        assert_eq!(justify_content("space-between"), "space-between");
        assert_eq!(align_items("bottom left"), "flex-end");
        assert_eq!(align_items("space-between"), "center");
    }

    #[test]
    fn test_base_rule_and_media_blocks() {
        let mut cfg = three_devices();
        if let Some(desktop) = cfg.get_mut(Device::Desktop) {
            desktop.footer_styles.insert("backgroundColor".to_string(), "#112233".to_string());
            desktop.footer_styles.insert("padding".to_string(), "0px".to_string());
        }
        let css = generate_css(&cfg, &[], false);
        assert!(css.starts_with(".footer-container {\n    max-width: 1200px;\n    margin: auto;\n    display: grid;\n    gap: 8px;\n    background-color: #112233;\n}\n\n"));
        assert!(!css.contains("padding: 0px"));
        assert!(!css.contains(".highlighted-div"));
        assert!(css.contains("@media (min-width: 769px) {\n    .footer-container {\n        grid-template-columns: repeat(4, 1fr);\n        grid-template-rows: repeat(3, fit-content(100%));\n        gap: 8px;\n    }\n"));
        assert!(css.contains("@media (max-width: 768px) and (min-width: 481px) {"));
        assert!(css.contains("@media (max-width: 480px) {"));
    }

    #[test]
    fn test_per_device_placement_and_hiding() {
        let mut cfg = three_devices();
        let mut desktop_item = filled("cell-1-2", 2, 1, "Links");
        desktop_item.col_span = 2;
        let mobile_item = filled("cell-3-1", 1, 3, "Links");
        cfg.get_mut(Device::Desktop).unwrap().grid_items[1] = desktop_item;
        cfg.get_mut(Device::Mobile).unwrap().grid_items[4] = mobile_item;

        let unique = dedupe_across_devices(&cfg);
        assert_eq!(unique.len(), 1);
        let css = generate_css(&cfg, &unique, true);

        assert!(css.contains(".highlighted-div {"));
        assert!(css.contains("        grid-column: 2 / span 2;\n        grid-row: 1;\n"));
        assert!(css.contains("        grid-column: 1;\n        grid-row: 3;\n"));
        assert!(css.contains("    .links {\n        display: none;\n    }\n"));
        assert!(css.contains("    .links .text-content {\n"));
        assert!(!css.contains("font-size: 14px"));
    }

    #[test]
    fn test_image_rules_with_link() {
        let mut cfg = three_devices();
        let mut image = filled("cell-1-1", 1, 1, "");
        image.content_type = ContentType::Image;
        image.custom_class_name = "logo".to_string();
        image.link_url = "/home".to_string();
        image.show_pointer = true;
        image.div_styles.set_image("objectPosition", "top right");
        cfg.get_mut(Device::Desktop).unwrap().grid_items[0] = image;

        let unique = dedupe_across_devices(&cfg);
        let css = generate_css(&cfg, &unique, false);
        assert!(css.contains("        justify-content: flex-end;\n        align-items: flex-start;\n"));
        assert!(css.contains("    .logo img {\n        object-position: top right;\n        max-width: 100%;\n    }\n"));
        assert!(css.contains("overflow: hidden; cursor: pointer; }"));
    }

    #[test]
    fn test_preview_css_single_device() {
        let mut cfg = three_devices();
        cfg.get_mut(Device::Tablet).unwrap().grid_items[0] = filled("cell-1-1", 1, 1, "Hi");
        let unique = dedupe_across_devices(&cfg);
        let css = generate_preview_css(&cfg, Device::Tablet, &unique, false);
        assert!(css.starts_with(".footer-container {\n    display: grid;\n    grid-template-columns: repeat(3, 1fr);\n"));
        assert!(!css.contains("@media"));
        assert!(!css.contains("max-width: 1200px"));
        assert!(css.contains(".hi {\n    grid-column: 1;\n"));
    }
}
