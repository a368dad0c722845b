//! Social icon catalogue and icon-list editing

use chrono::Utc;
use tracing::{debug, warn};

use crate::constants::social::ICON_CDN_BASE;
use crate::types::{LinkTarget, Platform, SocialIcon};

/// CDN icon for a preset platform. Custom icons have no catalogue entry.
pub fn platform_icon_url(platform: Platform) -> Option<String> {
    match platform {
        Platform::Custom => None,
        preset => Some(format!("{ICON_CDN_BASE}/{}.svg", preset.as_str())),
    }
}

/// Unique id in the `icon_{millis}` form, bumped until it is free
fn next_icon_id(icons: &[SocialIcon]) -> String {
    let mut stamp = Utc::now().timestamp_millis();
    loop {
        let id = format!("icon_{stamp}");
        if !icons.iter().any(|icon| icon.id == id) {
            return id;
        }
        stamp += 1;
    }
}

fn new_icon(icons: &[SocialIcon], platform: Platform) -> SocialIcon {
    SocialIcon {
        id: next_icon_id(icons),
        platform,
        icon_url: platform_icon_url(platform).unwrap_or_default(),
        custom_icon_url: String::new(),
        link_url: String::new(),
        link_target: LinkTarget::Blank,
        order: icons.len() as u32 + 1,
        is_custom: platform == Platform::Custom,
        is_first: false,
        is_last: false,
    }
}

/// Renumber `order` and recompute the first/last flags
pub fn refresh_positions(icons: &mut [SocialIcon]) {
    let last = icons.len().saturating_sub(1);
    for (index, icon) in icons.iter_mut().enumerate() {
        icon.order = index as u32 + 1;
        icon.is_first = index == 0;
        icon.is_last = index == last;
    }
}

/// Append a facebook icon, the default for a new slot. Returns the new id.
pub fn add_icon(icons: &mut Vec<SocialIcon>) -> String {
    let icon = new_icon(icons, Platform::Facebook);
    let id = icon.id.clone();
    icons.push(icon);
    refresh_positions(icons);
    id
}

/// Append a preset platform icon. A platform already in the list is rejected.
pub fn add_preset(icons: &mut Vec<SocialIcon>, platform: Platform) -> Option<String> {
    if icons.iter().any(|icon| icon.platform == platform) {
        warn!(platform = %platform, "Icon already added");
        return None;
    }
    let icon = new_icon(icons, platform);
    let id = icon.id.clone();
    icons.push(icon);
    refresh_positions(icons);
    Some(id)
}

fn find_mut<'a>(icons: &'a mut [SocialIcon], id: &str) -> Option<&'a mut SocialIcon> {
    icons.iter_mut().find(|icon| icon.id == id)
}

/// Switch an icon's platform. Leaving `custom` clears the custom URL;
/// entering it shows the custom URL.
pub fn change_platform(icons: &mut [SocialIcon], id: &str, platform: Platform) -> bool {
    let Some(icon) = find_mut(icons, id) else {
        return false;
    };
    icon.platform = platform;
    icon.is_custom = platform == Platform::Custom;
    if icon.is_custom {
        icon.icon_url = icon.custom_icon_url.clone();
    } else {
        icon.custom_icon_url.clear();
        icon.icon_url = platform_icon_url(platform).unwrap_or_default();
    }
    true
}

pub fn set_custom_icon_url(icons: &mut [SocialIcon], id: &str, url: &str) -> bool {
    let Some(icon) = find_mut(icons, id) else {
        return false;
    };
    icon.custom_icon_url = url.to_string();
    icon.icon_url = url.to_string();
    true
}

pub fn set_link(icons: &mut [SocialIcon], id: &str, url: &str, target: LinkTarget) -> bool {
    let Some(icon) = find_mut(icons, id) else {
        return false;
    };
    icon.link_url = url.to_string();
    icon.link_target = target;
    true
}

pub fn move_up(icons: &mut [SocialIcon], id: &str) -> bool {
    match icons.iter().position(|icon| icon.id == id) {
        Some(index) if index > 0 => {
            icons.swap(index - 1, index);
            refresh_positions(icons);
            true
        }
        _ => false,
    }
}

pub fn move_down(icons: &mut [SocialIcon], id: &str) -> bool {
    match icons.iter().position(|icon| icon.id == id) {
        Some(index) if index + 1 < icons.len() => {
            icons.swap(index, index + 1);
            refresh_positions(icons);
            true
        }
        _ => false,
    }
}

pub fn delete_icon(icons: &mut Vec<SocialIcon>, id: &str) -> bool {
    let before = icons.len();
    icons.retain(|icon| icon.id != id);
    if icons.len() == before {
        return false;
    }
    refresh_positions(icons);
    debug!(icon = %id, remaining = icons.len(), "Deleted social icon");
    true
}
