//! User-level editing operations on top of the configuration store
//!
//! Every operation works on the current form factor. Store events mark the
//! render scheduler dirty; `flush` recomputes the preview once per burst.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, error, info, warn};

use crate::codegen::{self, ExportBundle, ExportOptions, Highlight};
use crate::config::BuilderSettings;
use crate::error::StoreError;
use crate::grid::{self, clamp_span};
use crate::history::History;
use crate::identity::{CopyNamer, generate_class_name};
use crate::notify::{Notice, Notifier};
use crate::persistence::{DesignFile, parse_design};
use crate::preview::Preview;
use crate::scheduler::RenderScheduler;
use crate::social;
use crate::store::{ConfigStore, Topic};
use crate::style::presets::{FooterPreset, ImagePreset, TextPreset};
use crate::style::{apply_footer_inheritance, fill_div_defaults, fill_footer_defaults, new_div_styles};
use crate::types::{
    CellSize, Configuration, ContentType, Device, DeviceConfig, DivStyles, GridItem, GridItemPatch,
    LinkTarget, Platform, SocialIcon, StyleMap,
};

/// History entry: one device's full config, dimensions included
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    device: Device,
    config: DeviceConfig,
}

pub struct FooterEditor {
    store: ConfigStore,
    history: History,
    scheduler: Rc<RefCell<RenderScheduler>>,
    preview: Preview,
    copy_namer: CopyNamer,
    clipboard: Option<GridItem>,
    selection: Vec<String>,
    highlight_enabled: bool,
    origin: String,
}

impl Default for FooterEditor {
    fn default() -> Self {
        Self::new(&BuilderSettings::default())
    }
}

impl FooterEditor {
    /// Fresh editor with every device initialized to its defaults
    pub fn new(settings: &BuilderSettings) -> Self {
        let mut store = ConfigStore::new();
        let scheduler = Rc::new(RefCell::new(RenderScheduler::new()));
        for topic in Topic::ALL {
            let scheduler = Rc::clone(&scheduler);
            store.subscribe(topic, move |_| {
                scheduler.borrow_mut().mark_dirty();
                Ok(())
            });
        }
        store.initialize_all();

        Self {
            store,
            history: History::new(settings.history_limit),
            scheduler,
            preview: Preview::default(),
            copy_namer: CopyNamer::new(),
            clipboard: None,
            selection: Vec::new(),
            highlight_enabled: false,
            origin: settings.origin.clone(),
        }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn device(&self) -> Device {
        self.store.form_factor()
    }

    pub fn configurations(&self) -> Configuration {
        self.store.get_configurations()
    }

    pub fn current(&self) -> Option<&DeviceConfig> {
        self.store.device(self.device())
    }

    pub fn item(&self, cell_id: &str) -> Option<&GridItem> {
        self.current().and_then(|config| config.item(cell_id))
    }

    fn footer_styles(&self) -> StyleMap {
        self.current()
            .map(|config| config.footer_styles.clone())
            .unwrap_or_default()
    }

    fn grid_size(&self) -> (u32, u32) {
        self.current()
            .map(|config| (config.device_columns, config.device_rows))
            .unwrap_or((1, 1))
    }

    fn snapshot(&self) -> Option<String> {
        let snapshot = Snapshot {
            device: self.device(),
            config: self.current()?.clone(),
        };
        match serde_json::to_string(&snapshot) {
            Ok(json) => Some(json),
            Err(e) => {
                error!(error = %e, "Failed to snapshot grid for history");
                None
            }
        }
    }

    /// Run a user action and push the pre-action state onto the undo stack
    /// if the action changed the current device.
    fn tracked<R>(&mut self, action: impl FnOnce(&mut Self) -> R) -> R {
        let before = self.snapshot();
        let result = action(self);
        if let Some(before) = before
            && self.snapshot().as_ref() != Some(&before)
        {
            self.history.push(before);
        }
        result
    }

    /// Put a snapshot back. Snapshots of another device are refused.
    fn restore(&mut self, snapshot: &str) -> bool {
        let snapshot = match serde_json::from_str::<Snapshot>(snapshot) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!(error = %e, "Discarding unreadable history snapshot");
                return false;
            }
        };
        if snapshot.device != self.device() {
            warn!(
                snapshot = %snapshot.device,
                current = %self.device(),
                "Discarding history snapshot of another device"
            );
            return false;
        }
        let mut config = snapshot.config;
        for item in &mut config.grid_items {
            social::refresh_positions(&mut item.social_icons);
        }
        self.store.replace_device(snapshot.device, config);
        let config = self.store.device(snapshot.device);
        self.selection.retain(|id| {
            config
                .and_then(|config| config.item(id))
                .is_some_and(|item| !item.is_empty)
        });
        true
    }

    fn update(&mut self, cell_id: &str, patch: GridItemPatch) -> bool {
        let device = self.device();
        self.store.update_grid_item(cell_id, device, patch)
    }

    /// Change the edited form factor. History is per device, so it starts
    /// over on a switch.
    pub fn switch_device(&mut self, device: Device) {
        if device != self.device() && (self.history.can_undo() || self.history.can_redo()) {
            debug!(from = %self.device(), to = %device, "History cleared on device switch");
            self.history.clear();
        }
        if self.store.device(device).is_none() {
            let (cols, rows, _) = device.default_dimensions();
            self.store.initialize_grid(device, cols, rows);
        }
        self.selection.clear();
        self.store.set_form_factor(device);
        info!(device = %device, "Switched device");
    }

    /// Fill an empty cell with a new text div named after the filled count
    pub fn add_div_to_cell(&mut self, cell_id: &str) -> bool {
        let Some(item) = self.item(cell_id) else {
            return false;
        };
        if !item.is_empty {
            debug!(item = %cell_id, "Add ignored for occupied cell");
            return false;
        }

        let filled = self.current().map(DeviceConfig::filled_count).unwrap_or(0);
        let content = format!("div{}", filled + 1);
        let patch = GridItemPatch {
            is_empty: Some(false),
            content_type: Some(ContentType::Text),
            custom_class_name: Some(generate_class_name(&content)),
            div_styles: Some(new_div_styles(&self.footer_styles())),
            content: Some(content),
            ..Default::default()
        };
        self.tracked(|editor| editor.update(cell_id, patch))
    }

    pub fn delete_cell(&mut self, cell_id: &str) -> bool {
        if self.item(cell_id).is_none() {
            return false;
        }
        self.selection.retain(|id| id != cell_id);
        self.tracked(|editor| {
            editor.update(
                cell_id,
                GridItemPatch {
                    is_empty: Some(true),
                    ..Default::default()
                },
            )
        })
    }

    /// Drag-drop: move content onto an empty cell
    pub fn drop_item(&mut self, source_id: &str, target_id: &str) -> Result<bool, StoreError> {
        let device = self.device();
        self.tracked(|editor| editor.store.move_grid_item(source_id, target_id, device))
    }

    /// Resize to the requested spans, clamped to the grid edge
    pub fn resize_item(&mut self, cell_id: &str, col_span: u32, row_span: u32) -> bool {
        let (cols, rows) = self.grid_size();
        let Some(item) = self.item(cell_id) else {
            return false;
        };
        if item.is_empty {
            return false;
        }
        let col_span = clamp_span(item.grid_column, col_span, cols);
        let row_span = clamp_span(item.grid_row, row_span, rows);
        if col_span == item.col_span && row_span == item.row_span {
            return false;
        }
        let style = grid::cell_style(item.grid_column, item.grid_row, col_span, row_span);
        self.tracked(|editor| {
            editor.update(
                cell_id,
                GridItemPatch {
                    col_span: Some(col_span),
                    row_span: Some(row_span),
                    style: Some(style),
                    ..Default::default()
                },
            )
        })
    }

    pub fn set_columns(&mut self, columns: u32) -> bool {
        let (cols, rows) = self.grid_size();
        if columns == cols {
            return false;
        }
        let device = self.device();
        self.tracked(|editor| editor.store.update_grid_dimensions(device, columns, rows))
    }

    pub fn set_rows(&mut self, rows: u32) -> bool {
        let (cols, current_rows) = self.grid_size();
        if rows == current_rows {
            return false;
        }
        let device = self.device();
        self.tracked(|editor| editor.store.update_grid_dimensions(device, cols, rows))
    }

    pub fn set_gap(&mut self, gap: u32) -> bool {
        let device = self.device();
        self.tracked(|editor| editor.store.set_gap(device, gap))
    }

    pub fn set_cell_width(&mut self, width: CellSize) -> bool {
        let device = self.device();
        self.tracked(|editor| editor.store.set_cell_size(device, Some(width), None))
    }

    pub fn set_cell_height(&mut self, height: CellSize) -> bool {
        let device = self.device();
        self.tracked(|editor| editor.store.set_cell_size(device, None, Some(height)))
    }

    /// Rebuild the current device's grid from its defaults, discarding content
    pub fn reset_grid(&mut self) {
        let device = self.device();
        let (cols, rows, gap) = device.default_dimensions();
        self.tracked(|editor| {
            editor.store.initialize_grid(device, cols, rows);
            editor.store.set_gap(device, gap);
            editor
                .store
                .set_cell_size(device, Some(CellSize::Auto), Some(CellSize::FitContent));
        });
        self.selection.clear();
        info!(device = %device, "Reset grid");
    }

    /// Copy the desktop layout and footer styles onto the current device
    pub fn sync_from_desktop(&mut self) -> bool {
        let device = self.device();
        if device == Device::Desktop {
            return false;
        }
        let Some(desktop) = self.store.device(Device::Desktop).cloned() else {
            warn!("Nothing to sync, desktop is not initialized");
            return false;
        };
        self.selection.clear();
        self.tracked(|editor| editor.store.replace_device(device, desktop));
        info!(device = %device, "Synced from desktop");
        true
    }

    /// Merge footer styles, complete them from the footer baseline and let
    /// untouched div styles follow them
    pub fn update_footer_styles(&mut self, patch: StyleMap) -> bool {
        if self.current().is_none() {
            return false;
        }
        let mut footer = self.footer_styles();
        footer.extend(patch);
        fill_footer_defaults(&mut footer);
        self.tracked(|editor| editor.apply_footer_styles(footer))
    }

    fn apply_footer_styles(&mut self, footer: StyleMap) -> bool {
        let device = self.device();
        if !self.store.update_footer_styles(device, footer) {
            return false;
        }
        let footer = self.footer_styles();
        let Some(mut items) = self.current().map(|config| config.grid_items.clone()) else {
            return true;
        };
        let changed = apply_footer_inheritance(&mut items, &footer);
        if changed > 0 {
            debug!(device = %device, divs = changed, "Footer styles propagated");
            self.store.replace_grid_items(device, items);
        }
        true
    }

    pub fn apply_footer_preset(&mut self, preset: FooterPreset) -> bool {
        self.update_footer_styles(preset.patch())
    }

    /// Single-div edit from the style editor. Styles are completed from the
    /// baseline before they are stored.
    pub fn update_div(&mut self, cell_id: &str, mut patch: GridItemPatch) -> bool {
        if self.item(cell_id).is_none() {
            return false;
        }
        if let Some(styles) = patch.div_styles.as_mut() {
            fill_div_defaults(styles);
        }
        self.tracked(|editor| editor.update(cell_id, patch))
    }

    fn edit_styles<F>(&mut self, cell_id: &str, edit: F) -> bool
    where
        F: FnOnce(&mut DivStyles),
    {
        let Some(item) = self.item(cell_id).filter(|item| !item.is_empty) else {
            return false;
        };
        let mut styles = item.div_styles.clone();
        edit(&mut styles);
        self.update_div(
            cell_id,
            GridItemPatch {
                div_styles: Some(styles),
                ..Default::default()
            },
        )
    }

    pub fn apply_text_preset(&mut self, cell_id: &str, preset: TextPreset) -> bool {
        self.edit_styles(cell_id, |styles| preset.apply(styles))
    }

    pub fn apply_image_preset(&mut self, cell_id: &str, preset: ImagePreset) -> bool {
        self.edit_styles(cell_id, |styles| preset.apply(styles))
    }

    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    /// Add or remove a filled cell from the multi-selection
    pub fn toggle_selection(&mut self, cell_id: &str) {
        if let Some(index) = self.selection.iter().position(|id| id == cell_id) {
            self.selection.remove(index);
        } else if self.item(cell_id).is_some_and(|item| !item.is_empty) {
            self.selection.push(cell_id.to_string());
        }
        self.mark_dirty_if_highlighting();
    }

    /// Extend the selection with every filled cell between the last selected
    /// cell and `cell_id`, in grid order
    pub fn select_range(&mut self, cell_id: &str) {
        let Some(last) = self.selection.last().cloned() else {
            self.selection.push(cell_id.to_string());
            self.mark_dirty_if_highlighting();
            return;
        };
        let Some(items) = self.current().map(|config| config.grid_items.clone()) else {
            return;
        };
        let start = items.iter().position(|item| item.id == last);
        let end = items.iter().position(|item| item.id == cell_id);
        if let (Some(start), Some(end)) = (start, end) {
            let (low, high) = (start.min(end), start.max(end));
            for item in items[low..=high].iter().filter(|item| !item.is_empty) {
                if !self.selection.contains(&item.id) {
                    self.selection.push(item.id.clone());
                }
            }
        }
        self.mark_dirty_if_highlighting();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.mark_dirty_if_highlighting();
    }

    /// Multi-select edit: only styles and class name reach the selected divs
    pub fn update_selected(&mut self, styles: DivStyles, custom_class_name: Option<String>) -> usize {
        if self.selection.is_empty() {
            warn!("No target divs for style update");
            return 0;
        }
        let mut styles = styles;
        fill_div_defaults(&mut styles);

        self.tracked(|editor| {
            let mut updated = 0;
            for id in editor.selection.clone() {
                let patch = GridItemPatch {
                    div_styles: Some(styles.clone()),
                    custom_class_name: custom_class_name.clone(),
                    ..Default::default()
                };
                if editor.update(&id, patch) {
                    updated += 1;
                }
            }
            updated
        })
    }

    pub fn copy_div(&mut self, cell_id: &str) -> bool {
        match self.item(cell_id).filter(|item| !item.is_empty).cloned() {
            Some(item) => {
                debug!(item = %cell_id, "Copied div");
                self.clipboard = Some(item);
                true
            }
            None => false,
        }
    }

    pub fn has_clipboard(&self) -> bool {
        self.clipboard.is_some()
    }

    /// Paste the copied div into an empty cell under a `-copy-N` class name.
    /// The clipboard is consumed.
    pub fn paste_to_cell(&mut self, cell_id: &str) -> bool {
        let (cols, rows) = self.grid_size();
        let Some(target) = self.item(cell_id).filter(|item| item.is_empty).cloned() else {
            return false;
        };
        let Some(source) = self.clipboard.take() else {
            return false;
        };

        let (class_name, counter) = self.copy_namer.next_name(&source);
        let mut pasted = target.clone();
        pasted.take_content_from(&source);
        pasted.custom_class_name = class_name;
        if source.is_text() && !source.content.is_empty() {
            pasted.content = format!("{}-copy-{counter}", source.content);
        }
        pasted.col_span = clamp_span(target.grid_column, source.col_span, cols);
        pasted.row_span = clamp_span(target.grid_row, source.row_span, rows);
        pasted.style = grid::cell_style(
            target.grid_column,
            target.grid_row,
            pasted.col_span,
            pasted.row_span,
        );

        info!(item = %cell_id, class = %pasted.custom_class_name, "Pasted div");
        self.tracked(|editor| editor.update(cell_id, GridItemPatch::from_item(&pasted)))
    }

    pub fn undo(&mut self) -> bool {
        let Some(current) = self.snapshot() else {
            return false;
        };
        match self.history.undo(current) {
            Some(previous) => self.restore(&previous),
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        let Some(current) = self.snapshot() else {
            return false;
        };
        match self.history.redo(current) {
            Some(next) => self.restore(&next),
            None => false,
        }
    }

    /// Run a social-icon list edit on one div and store the result. An edit
    /// that leaves the list unchanged stores nothing.
    fn edit_icons<F, R>(&mut self, cell_id: &str, edit: F) -> Option<R>
    where
        F: FnOnce(&mut Vec<SocialIcon>) -> R,
    {
        let before = self.item(cell_id).filter(|item| !item.is_empty)?.social_icons.clone();
        let mut icons = before.clone();
        let result = edit(&mut icons);
        if icons == before {
            return Some(result);
        }
        self.tracked(|editor| {
            editor.update(
                cell_id,
                GridItemPatch {
                    content_type: Some(ContentType::SocialIcons),
                    social_icons: Some(icons),
                    ..Default::default()
                },
            )
        });
        Some(result)
    }

    pub fn add_social_icon(&mut self, cell_id: &str) -> Option<String> {
        self.edit_icons(cell_id, social::add_icon)
    }

    pub fn add_preset_icon(&mut self, cell_id: &str, platform: Platform) -> Option<String> {
        self.edit_icons(cell_id, |icons| social::add_preset(icons, platform))
            .flatten()
    }

    pub fn change_icon_platform(&mut self, cell_id: &str, icon_id: &str, platform: Platform) -> bool {
        self.edit_icons(cell_id, |icons| social::change_platform(icons, icon_id, platform))
            .unwrap_or(false)
    }

    pub fn move_icon_up(&mut self, cell_id: &str, icon_id: &str) -> bool {
        self.edit_icons(cell_id, |icons| social::move_up(icons, icon_id))
            .unwrap_or(false)
    }

    pub fn move_icon_down(&mut self, cell_id: &str, icon_id: &str) -> bool {
        self.edit_icons(cell_id, |icons| social::move_down(icons, icon_id))
            .unwrap_or(false)
    }

    pub fn delete_icon(&mut self, cell_id: &str, icon_id: &str) -> bool {
        self.edit_icons(cell_id, |icons| social::delete_icon(icons, icon_id))
            .unwrap_or(false)
    }

    pub fn set_icon_link(
        &mut self,
        cell_id: &str,
        icon_id: &str,
        url: &str,
        target: LinkTarget,
    ) -> bool {
        self.edit_icons(cell_id, |icons| social::set_link(icons, icon_id, url, target))
            .unwrap_or(false)
    }

    /// Set the image of a `custom` platform icon
    pub fn set_custom_icon_url(&mut self, cell_id: &str, icon_id: &str, url: &str) -> bool {
        self.edit_icons(cell_id, |icons| social::set_custom_icon_url(icons, icon_id, url))
            .unwrap_or(false)
    }

    /// Replace the whole state with a design. Filled divs without a class
    /// name get one derived from their content.
    pub fn load_design(&mut self, design: DesignFile, notifier: &dyn Notifier) {
        let mut configurations = design.configurations;
        for device in Device::ALL {
            if let Some(config) = configurations.get_mut(device) {
                for item in config.grid_items.iter_mut().filter(|item| !item.is_empty) {
                    if item.custom_class_name.trim().is_empty() {
                        item.custom_class_name = generate_class_name(&item.content);
                    }
                    social::refresh_positions(&mut item.social_icons);
                }
            }
        }

        let missing: Vec<&str> = Device::ALL
            .into_iter()
            .filter(|device| configurations.get(*device).is_none())
            .map(|device| device.as_str())
            .collect();
        if !missing.is_empty() {
            notifier.notify(Notice::warning(
                "Warning",
                format!("Design has no {} layout; defaults were used.", missing.join(", ")),
            ));
        }

        self.store.set_configurations(configurations);
        self.store.initialize_all();
        self.history.clear();
        self.selection.clear();
        self.clipboard = None;
        self.switch_device(Device::Desktop);

        let name = if design.name.trim().is_empty() { "Loaded Design" } else { design.name.trim() };
        notifier.notify(Notice::success("Success", format!("Design '{name}' loaded.")));
    }

    /// Parse and load design JSON. Invalid input is reported and leaves the
    /// state untouched.
    pub fn load_design_json(&mut self, json: &str, notifier: &dyn Notifier) -> bool {
        match parse_design(json) {
            Ok(design) => {
                self.load_design(design, notifier);
                true
            }
            Err(e) => {
                warn!(error = %e, "Rejected design data");
                notifier.notify(Notice::error("Error", e.user_message()));
                false
            }
        }
    }

    pub fn design_file(&self, name: &str) -> DesignFile {
        DesignFile::new(name, self.store.get_configurations())
    }

    pub fn set_highlight(&mut self, enabled: bool) {
        self.highlight_enabled = enabled;
        self.scheduler.borrow_mut().mark_dirty();
    }

    fn mark_dirty_if_highlighting(&mut self) {
        if self.highlight_enabled {
            self.scheduler.borrow_mut().mark_dirty();
        }
    }

    fn highlight(&self) -> Highlight {
        Highlight {
            enabled: self.highlight_enabled,
            ids: self.selection.iter().cloned().collect(),
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.scheduler.borrow().is_dirty()
    }

    /// Re-render the preview if anything changed. Returns whether it rendered.
    pub fn flush(&mut self) -> bool {
        let highlight = self.highlight();
        let device = self.device();
        let scheduler = Rc::clone(&self.scheduler);
        let mut scheduler = scheduler.borrow_mut();
        scheduler.flush(|| {
            self.preview = Preview::render(self.store.configurations(), device, &highlight, &self.origin);
        })
    }

    pub fn renders(&self) -> u64 {
        self.scheduler.borrow().renders()
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn export(&self) -> ExportBundle {
        let options = ExportOptions {
            origin: self.origin.clone(),
            highlight: self.highlight(),
        };
        codegen::export(self.store.configurations(), &options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{CollectingNotifier, NoticeKind};

    fn editor() -> FooterEditor {
        FooterEditor::default()
    }

    #[test]
    fn test_add_div_names_and_styles() {
        let mut editor = editor();
        assert!(editor.add_div_to_cell("cell-1-1"));
        assert!(editor.add_div_to_cell("cell-1-2"));
        assert!(!editor.add_div_to_cell("cell-1-2"));

        let item = editor.item("cell-1-2").unwrap();
        assert_eq!(item.content, "div2");
        assert_eq!(item.custom_class_name, "div2");
        assert!(item.draggable);
        // Initial footer styles set color black, which a new div picks up
        assert_eq!(item.div_styles.get("color"), Some("black"));
        assert_eq!(item.div_styles.get("fontSize"), Some("14px"));
    }

    #[test]
    fn test_delete_resets_cell() {
        let mut editor = editor();
        editor.add_div_to_cell("cell-2-2");
        editor.resize_item("cell-2-2", 2, 1);
        assert!(editor.delete_cell("cell-2-2"));
        assert_eq!(editor.item("cell-2-2"), Some(&GridItem::empty("cell-2-2", 2, 2)));
    }

    #[test]
    fn test_resize_is_clamped_to_grid() {
        let mut editor = editor();
        editor.add_div_to_cell("cell-1-3");
        assert!(editor.resize_item("cell-1-3", 9, 9));
        let item = editor.item("cell-1-3").unwrap();
        assert_eq!((item.col_span, item.row_span), (2, 3));
        assert_eq!(item.style, "grid-column: 3 / 5; grid-row: 1 / 4; z-index: 10;");
        assert!(!editor.resize_item("cell-1-3", 2, 3));
    }

    #[test]
    fn test_drop_onto_occupied_cell() {
        let mut editor = editor();
        editor.add_div_to_cell("cell-1-1");
        editor.add_div_to_cell("cell-1-2");
        assert!(editor.drop_item("cell-1-1", "cell-1-2").is_err());
        assert_eq!(editor.drop_item("cell-1-1", "cell-2-1"), Ok(true));
        assert!(editor.item("cell-1-1").unwrap().is_empty);
        assert_eq!(editor.item("cell-2-1").unwrap().content, "div1");
    }

    #[test]
    fn test_copy_paste_counters() {
        let mut editor = editor();
        editor.add_div_to_cell("cell-1-1");
        editor.update_div(
            "cell-1-1",
            GridItemPatch {
                content: Some("Links".to_string()),
                custom_class_name: Some("footer-links".to_string()),
                ..Default::default()
            },
        );

        assert!(editor.copy_div("cell-1-1"));
        assert!(editor.paste_to_cell("cell-1-2"));
        assert!(!editor.has_clipboard());
        assert!(editor.copy_div("cell-1-2"));
        assert!(editor.paste_to_cell("cell-1-3"));

        let first = editor.item("cell-1-2").unwrap();
        assert_eq!(first.custom_class_name, "footer-links-copy-1");
        assert_eq!(first.content, "Links-copy-1");
        assert_eq!((first.grid_column, first.grid_row), (2, 1));
        let second = editor.item("cell-1-3").unwrap();
        assert_eq!(second.custom_class_name, "footer-links-copy-2");
    }

    #[test]
    fn test_paste_requires_empty_target() {
        let mut editor = editor();
        editor.add_div_to_cell("cell-1-1");
        editor.copy_div("cell-1-1");
        assert!(!editor.paste_to_cell("cell-1-1"));
        assert!(editor.has_clipboard());
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut editor = editor();
        let before = editor.current().unwrap().grid_items.clone();
        editor.add_div_to_cell("cell-1-1");
        let after = editor.current().unwrap().grid_items.clone();

        assert!(editor.undo());
        assert_eq!(editor.current().unwrap().grid_items, before);
        assert!(editor.redo());
        assert_eq!(editor.current().unwrap().grid_items, after);
        assert!(!editor.redo());
    }

    #[test]
    fn test_new_action_clears_redo() {
        let mut editor = editor();
        editor.add_div_to_cell("cell-1-1");
        editor.undo();
        assert!(editor.history().can_redo());
        editor.add_div_to_cell("cell-1-2");
        assert!(!editor.history().can_redo());
    }

    #[test]
    fn test_footer_update_propagates_to_defaulted_divs() {
        let mut editor = editor();
        editor.add_div_to_cell("cell-1-1");
        // Back to the baseline so it tracks the footer
        editor.edit_styles("cell-1-1", |styles| {
            styles.set("color", "#212529");
            styles.set("backgroundColor", "transparent");
        });
        editor.add_div_to_cell("cell-1-2");
        editor.edit_styles("cell-1-2", |styles| styles.set("color", "#ff0000"));

        let mut patch = StyleMap::new();
        patch.insert("color".to_string(), "#112233".to_string());
        assert!(editor.update_footer_styles(patch));

        let tracked = editor.item("cell-1-1").unwrap();
        assert_eq!(tracked.div_styles.get("color"), Some("#112233"));
        assert_eq!(tracked.div_styles.get("backgroundColor"), Some("inherit"));
        assert_eq!(editor.item("cell-1-2").unwrap().div_styles.get("color"), Some("#ff0000"));
    }

    #[test]
    fn test_multi_select_only_touches_styles() {
        let mut editor = editor();
        editor.add_div_to_cell("cell-1-1");
        editor.add_div_to_cell("cell-1-2");
        editor.add_div_to_cell("cell-1-3");
        editor.toggle_selection("cell-1-1");
        editor.select_range("cell-1-3");
        assert_eq!(editor.selection().len(), 3);

        let mut styles = DivStyles::default();
        styles.set("fontSize", "20px");
        assert_eq!(editor.update_selected(styles, None), 3);

        let item = editor.item("cell-1-2").unwrap();
        assert_eq!(item.div_styles.get("fontSize"), Some("20px"));
        assert_eq!(item.div_styles.get("borderColor"), Some("#dee2e6"));
        assert_eq!(item.content, "div2");
        assert_eq!(item.custom_class_name, "div2");
    }

    #[test]
    fn test_sync_from_desktop() {
        let mut editor = editor();
        editor.add_div_to_cell("cell-1-1");
        assert!(!editor.sync_from_desktop());

        editor.switch_device(Device::Mobile);
        assert!(editor.sync_from_desktop());
        let mobile = editor.current().unwrap();
        assert_eq!((mobile.device_columns, mobile.device_rows), (4, 3));
        assert_eq!(mobile.item("cell-1-1").unwrap().content, "div1");
    }

    #[test]
    fn test_reset_grid_restores_device_defaults() {
        let mut editor = editor();
        editor.switch_device(Device::Tablet);
        editor.set_columns(5);
        editor.set_gap(20);
        editor.add_div_to_cell("cell-1-1");
        editor.reset_grid();
        let tablet = editor.current().unwrap();
        assert_eq!((tablet.device_columns, tablet.device_rows, tablet.device_gap), (3, 3, 6));
        assert_eq!(tablet.filled_count(), 0);
    }

    #[test]
    fn test_burst_of_edits_renders_once() {
        let mut editor = editor();
        editor.flush();
        let baseline = editor.renders();

        for cell in ["cell-1-1", "cell-1-2", "cell-1-3", "cell-2-1"] {
            editor.add_div_to_cell(cell);
        }
        editor.set_gap(12);
        assert!(editor.is_dirty());
        assert!(editor.flush());
        assert!(!editor.flush());
        assert_eq!(editor.renders(), baseline + 1);
        assert!(editor.preview().html.contains("div4"));
    }

    #[test]
    fn test_load_rejects_missing_configurations() {
        let mut editor = editor();
        editor.add_div_to_cell("cell-1-1");
        let before = editor.configurations();
        let notifier = CollectingNotifier::new();

        assert!(!editor.load_design_json(r#"{"name":"broken"}"#, &notifier));
        assert_eq!(editor.configurations(), before);
        let notice = notifier.last().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "Invalid file format: Missing configurations data.");
    }

    #[test]
    fn test_load_fills_class_names() {
        let mut editor = editor();
        let json = r#"{
            "configurations": {
                "desktop": {
                    "gridItems": [
                        {"id": "cell-1-1", "gridColumn": 1, "gridRow": 1, "isEmpty": false, "content": "About Us"}
                    ],
                    "deviceColumns": 1,
                    "deviceRows": 1
                }
            },
            "name": "Imported"
        }"#;
        let notifier = CollectingNotifier::new();
        assert!(editor.load_design_json(json, &notifier));
        assert_eq!(editor.item("cell-1-1").unwrap().custom_class_name, "about-us");
        assert!(editor.store().configurations().is_initialized());
        assert_eq!(notifier.last().unwrap().kind, NoticeKind::Success);
        let warning = notifier
            .notices()
            .into_iter()
            .find(|notice| notice.kind == NoticeKind::Warning)
            .unwrap();
        assert!(warning.message.contains("tablet, mobile"));
    }

    #[test]
    fn test_social_icon_editing() {
        let mut editor = editor();
        assert_eq!(editor.add_social_icon("cell-1-1"), None);

        editor.add_div_to_cell("cell-1-1");
        let facebook = editor.add_social_icon("cell-1-1").unwrap();
        let discord = editor.add_preset_icon("cell-1-1", Platform::Discord).unwrap();
        assert_eq!(editor.add_preset_icon("cell-1-1", Platform::Discord), None);
        assert!(editor.move_icon_up("cell-1-1", &discord));

        let item = editor.item("cell-1-1").unwrap();
        assert!(item.is_social());
        let order: Vec<_> = item.social_icons.iter().map(|icon| icon.id.clone()).collect();
        assert_eq!(order, vec![discord.clone(), facebook.clone()]);

        assert!(editor.change_icon_platform("cell-1-1", &facebook, Platform::Youtube));
        assert!(editor.delete_icon("cell-1-1", &discord));
        assert!(!editor.move_icon_down("cell-1-1", &facebook));
        let icons = &editor.item("cell-1-1").unwrap().social_icons;
        assert_eq!(icons.len(), 1);
        assert_eq!(icons[0].platform, Platform::Youtube);
    }

    fn assert_lattice_fits(config: &DeviceConfig) {
        let (cols, rows) = (config.device_columns, config.device_rows);
        assert_eq!(config.grid_items.len() as u32, cols * rows);
        assert!(config.grid_items.iter().all(|item| item.fits(cols, rows)));
    }

    #[test]
    fn test_undo_column_change_restores_dimensions() {
        let mut editor = editor();
        editor.add_div_to_cell("cell-1-3");
        assert!(editor.set_columns(2));
        assert_lattice_fits(editor.current().unwrap());
        assert_eq!(editor.current().unwrap().filled_count(), 0);

        assert!(editor.undo());
        let desktop = editor.current().unwrap();
        assert_eq!((desktop.device_columns, desktop.device_rows), (4, 3));
        assert_lattice_fits(desktop);
        assert_eq!(desktop.item("cell-1-3").unwrap().content, "div1");

        assert!(editor.redo());
        let desktop = editor.current().unwrap();
        assert_eq!(desktop.device_columns, 2);
        assert_lattice_fits(desktop);
    }

    #[test]
    fn test_undo_gap_and_footer_changes() {
        let mut editor = editor();
        editor.set_gap(20);
        let mut patch = StyleMap::new();
        patch.insert("color".to_string(), "#112233".to_string());
        editor.update_footer_styles(patch);

        let footer = &editor.current().unwrap().footer_styles;
        assert_eq!(footer["color"], "#112233");
        assert_eq!(footer["backgroundColor"], "white");
        assert_eq!(footer["fontSize"], "16px");

        assert!(editor.undo());
        assert_eq!(editor.current().unwrap().footer_styles["color"], "black");
        assert!(!editor.current().unwrap().footer_styles.contains_key("fontSize"));
        assert!(editor.undo());
        assert_eq!(editor.current().unwrap().device_gap, 8);
    }

    #[test]
    fn test_device_switch_starts_new_history() {
        let mut editor = editor();
        editor.add_div_to_cell("cell-1-1");
        let desktop_snapshot = editor.snapshot().unwrap();

        editor.switch_device(Device::Mobile);
        assert!(!editor.history().can_undo());
        assert!(!editor.undo());
        let mobile = editor.current().unwrap();
        assert_eq!(mobile.grid_items.len(), 8);
        assert_lattice_fits(mobile);

        assert!(!editor.restore(&desktop_snapshot));
        assert_eq!(editor.current().unwrap().grid_items.len(), 8);
    }

    #[test]
    fn test_failed_edits_keep_history() {
        let mut editor = editor();
        editor.add_div_to_cell("cell-1-1");
        editor.add_div_to_cell("cell-1-2");
        let facebook = editor.add_social_icon("cell-1-1").unwrap();
        editor.undo();
        editor.redo();
        assert!(editor.history().can_undo());
        let depth = editor.history().undo_len();

        assert!(editor.drop_item("cell-1-1", "cell-1-2").is_err());
        assert!(!editor.move_icon_up("cell-1-1", &facebook));
        assert!(!editor.delete_icon("cell-1-1", "icon_missing"));
        assert_eq!(editor.history().undo_len(), depth);

        editor.undo();
        assert!(editor.history().can_redo());
        assert!(editor.drop_item("cell-1-1", "cell-1-2").is_err());
        assert!(editor.history().can_redo());
    }

    #[test]
    fn test_icon_link_and_custom_url() {
        let mut editor = editor();
        editor.add_div_to_cell("cell-1-1");
        let icon = editor.add_social_icon("cell-1-1").unwrap();

        assert!(editor.set_icon_link("cell-1-1", &icon, "https://facebook.com/acme", LinkTarget::SelfFrame));
        assert!(editor.change_icon_platform("cell-1-1", &icon, Platform::Custom));
        assert!(editor.set_custom_icon_url("cell-1-1", &icon, "https://cdn.test/acme.svg"));
        assert!(!editor.set_icon_link("cell-1-1", "icon_missing", "https://x.test", LinkTarget::Blank));

        let saved = editor.item("cell-1-1").unwrap().social_icons[0].clone();
        assert_eq!(saved.link_url, "https://facebook.com/acme");
        assert_eq!(saved.link_target, LinkTarget::SelfFrame);
        assert_eq!(saved.icon_url, "https://cdn.test/acme.svg");

        editor.flush();
        assert!(editor.preview().html.contains("https://cdn.test/acme.svg"));

        assert!(editor.undo());
        assert!(editor.item("cell-1-1").unwrap().social_icons[0].custom_icon_url.is_empty());
    }
}
