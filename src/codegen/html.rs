//! HTML fragment generation

use std::fmt::Write as _;

use super::Highlight;
use crate::constants::naming::{CONTAINER_CLASS, HIGHLIGHT_CLASS};
use crate::identity::CanonicalItem;
use crate::style::emit::inline_image_style;
use crate::types::{ContentType, GridItem, LinkTarget};

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

fn target_attr(target: LinkTarget) -> &'static str {
    if target == LinkTarget::Blank {
        r#" target="_blank""#
    } else {
        ""
    }
}

/// Literal `\n` sequences become line breaks; multiple lines are wrapped in `<p>`
pub fn process_text(text: &str) -> String {
    let unescaped = text.replace("\\n", "\n");
    if unescaped.contains('\n') {
        unescaped
            .split('\n')
            .map(|line| format!("<p>{line}</p>"))
            .collect()
    } else {
        unescaped
    }
}

fn write_social(out: &mut String, item: &GridItem) {
    out.push_str("        <div class=\"social-icons-container\">\n");
    for icon in item.social_icons.iter().filter(|icon| !icon.icon_url.is_empty()) {
        let img = format!(
            r#"<img src="{}" alt="{}" class="social-icon">"#,
            escape_attr(&icon.icon_url),
            icon.platform
        );
        if icon.link_url.is_empty() {
            let _ = writeln!(out, "            {img}");
        } else {
            let _ = writeln!(
                out,
                r#"            <a href="{}"{}>{img}</a>"#,
                escape_attr(&icon.link_url),
                target_attr(icon.link_target)
            );
        }
    }
    out.push_str("        </div>\n");
}

fn write_image(out: &mut String, item: &GridItem, origin: &str) {
    let alt = if item.content.is_empty() { "Image" } else { item.content.as_str() };
    let img = format!(
        r#"<img src="{}{}" alt="{}" style="{}">"#,
        escape_attr(origin),
        escape_attr(&item.image_url),
        escape_attr(alt),
        inline_image_style(&item.div_styles.image_styles)
    );
    if item.has_link() {
        let _ = writeln!(
            out,
            r#"        <a href="{}"{} class="image-link">{img}</a>"#,
            escape_attr(&item.link_url),
            target_attr(item.link_target)
        );
    } else {
        let _ = writeln!(out, "        {img}");
    }
}

fn write_text(out: &mut String, item: &GridItem) {
    let body = process_text(&item.content);
    if item.has_link() {
        let _ = writeln!(
            out,
            r#"        <a href="{}"{} class="text-content">{body}</a>"#,
            escape_attr(&item.link_url),
            target_attr(item.link_target)
        );
    } else {
        let _ = writeln!(out, r#"        <span class="text-content">{body}</span>"#);
    }
}

/// One container div per canonical item inside the footer container
pub fn generate_html(items: &[CanonicalItem], highlight: &Highlight, origin: &str) -> String {
    let mut out = format!("<div class=\"{CONTAINER_CLASS}\">\n");
    for canonical in items {
        let item = &canonical.item;
        let mut class = canonical.class_name.clone();
        if highlight.contains(&item.id) {
            class.push(' ');
            class.push_str(HIGHLIGHT_CLASS);
        }
        let _ = writeln!(out, r#"    <div class="{class}" data-id="{}">"#, escape_attr(&item.id));

        match item.content_type {
            ContentType::SocialIcons => write_social(&mut out, item),
            ContentType::Image => write_image(&mut out, item, origin),
            ContentType::Text => write_text(&mut out, item),
        }

        out.push_str("    </div>\n");
    }
    out.push_str("</div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::dedupe_across_devices;
    use crate::types::{Configuration, Device, DeviceConfig, Platform, SocialIcon};

    fn filled(id: &str, content: &str) -> GridItem {
        let mut item = GridItem::empty(id, 1, 1);
        item.is_empty = false;
        item.content = content.to_string();
        item
    }

    fn canonical(item: GridItem) -> CanonicalItem {
        CanonicalItem {
            class_name: crate::identity::derive_class_name(&item),
            device: Device::Desktop,
            item,
        }
    }

    #[test]
    fn test_process_text_line_breaks() {
        assert_eq!(process_text("line1\\nline2"), "<p>line1</p><p>line2</p>");
        assert_eq!(process_text("single"), "single");
        assert_eq!(process_text("a\nb"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_text_with_escaped_newline_renders_paragraphs() {
        let html = generate_html(
            &[canonical(filled("cell-1-1", "line1\\nline2"))],
            &Highlight::disabled(),
            "",
        );
        assert!(html.contains(r#"<span class="text-content"><p>line1</p><p>line2</p></span>"#));
    }

    #[test]
    fn test_text_link_and_highlight() {
        let mut item = filled("cell-1-2", "Docs");
        item.link_url = "https://example.com/docs".to_string();
        item.link_target = LinkTarget::Blank;
        let html = generate_html(
            &[canonical(item)],
            &Highlight::new(["cell-1-2".to_string()]),
            "",
        );
        assert!(html.contains(r#"<div class="docs highlighted-div" data-id="cell-1-2">"#));
        assert!(html.contains(
            r#"<a href="https://example.com/docs" target="_blank" class="text-content">Docs</a>"#
        ));
    }

    #[test]
    fn test_image_uses_origin_and_inline_style() {
        let mut item = filled("cell-2-1", "");
        item.content_type = ContentType::Image;
        item.image_url = "/logo.png".to_string();
        item.div_styles.set_image("width", "80px");
        let html = generate_html(&[canonical(item)], &Highlight::disabled(), "https://site.test");
        assert!(html.contains(
            r#"        <img src="https://site.test/logo.png" alt="Image" style="width: 80px">"#
        ));
    }

    #[test]
    fn test_social_icons_skip_missing_url() {
        let mut item = filled("cell-3-1", "");
        item.content_type = ContentType::SocialIcons;
        item.social_icons = vec![
            SocialIcon {
                id: "icon_1".to_string(),
                platform: Platform::Facebook,
                icon_url: "https://cdn.test/facebook.svg".to_string(),
                custom_icon_url: String::new(),
                link_url: "https://facebook.com/acme".to_string(),
                link_target: LinkTarget::Blank,
                order: 1,
                is_custom: false,
                is_first: true,
                is_last: false,
            },
            SocialIcon {
                id: "icon_2".to_string(),
                platform: Platform::Custom,
                icon_url: String::new(),
                custom_icon_url: String::new(),
                link_url: String::new(),
                link_target: LinkTarget::SelfFrame,
                order: 2,
                is_custom: true,
                is_first: false,
                is_last: true,
            },
        ];
        let html = generate_html(&[canonical(item)], &Highlight::disabled(), "");
        assert!(html.contains(r#"<a href="https://facebook.com/acme" target="_blank"><img src="https://cdn.test/facebook.svg" alt="facebook" class="social-icon"></a>"#));
        assert_eq!(html.matches("<img").count(), 1);
    }

    #[test]
    fn test_shared_class_emits_single_div() {
        let mut cfg = Configuration::default();
        for device in Device::ALL {
            let mut config = DeviceConfig::for_device(device);
            let mut item = filled("cell-1-1", &format!("{device} text"));
            item.custom_class_name = "brand".to_string();
            config.grid_items = vec![item];
            cfg.set(device, config);
        }
        let html = generate_html(&dedupe_across_devices(&cfg), &Highlight::disabled(), "");
        assert_eq!(html.matches(r#"class="brand""#).count(), 1);
        assert!(html.contains("desktop text"));
    }
}
