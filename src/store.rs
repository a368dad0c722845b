//! Configuration store: the single owner of the per-device grid state
//!
//! Reads hand out copies, writes go through the methods below, and every
//! successful write publishes an event to the subscribers of its topic.
//! Subscribers run synchronously in subscription order; a failing subscriber
//! is logged and does not stop delivery to the rest.

use std::collections::HashMap;
use tracing::{debug, error, info, warn};

use crate::constants::grid::MAX_TRACKS;
use crate::error::StoreError;
use crate::grid::{self, clamp_span};
use crate::style::defaults::initial_footer_styles;
use crate::types::{CellSize, Configuration, Device, DeviceConfig, GridItem, GridItemPatch, StyleMap};

/// Event topics a subscriber can listen to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    ConfigChanged,
    GridChanged,
    FooterStyleChanged,
    StyleChanged,
    FormFactorChanged,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::ConfigChanged,
        Topic::GridChanged,
        Topic::FooterStyleChanged,
        Topic::StyleChanged,
        Topic::FormFactorChanged,
    ];
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// Whole state replaced; carries a copy of the new state
    ConfigChanged(Box<Configuration>),
    GridChanged { device: Device },
    FooterStyleChanged { device: Device },
    StyleChanged { device: Device, item_id: String },
    FormFactorChanged { device: Device },
}

impl StoreEvent {
    pub fn topic(&self) -> Topic {
        match self {
            StoreEvent::ConfigChanged(_) => Topic::ConfigChanged,
            StoreEvent::GridChanged { .. } => Topic::GridChanged,
            StoreEvent::FooterStyleChanged { .. } => Topic::FooterStyleChanged,
            StoreEvent::StyleChanged { .. } => Topic::StyleChanged,
            StoreEvent::FormFactorChanged { .. } => Topic::FormFactorChanged,
        }
    }
}

/// Handle returned by `subscribe`; the only way to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub type Subscriber = Box<dyn FnMut(&StoreEvent) -> anyhow::Result<()>>;

pub struct ConfigStore {
    configurations: Configuration,
    form_factor: Device,
    subscribers: HashMap<Topic, Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: u64,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self {
            configurations: Configuration::default(),
            form_factor: Device::Desktop,
            subscribers: HashMap::new(),
            next_subscription: 1,
        }
    }
}

/// Keep column and row counts within `1..=MAX_TRACKS`
fn clamp_tracks(device: Device, cols: u32, rows: u32) -> (u32, u32) {
    let clamped = (cols.clamp(1, MAX_TRACKS), rows.clamp(1, MAX_TRACKS));
    if clamped != (cols, rows) {
        warn!(
            device = %device,
            cols = cols,
            rows = rows,
            max = MAX_TRACKS,
            "Grid dimensions out of range, clamping"
        );
    }
    clamped
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Independent copy of the whole state
    pub fn get_configurations(&self) -> Configuration {
        self.configurations.clone()
    }

    /// Read-only view for derived computations
    pub fn configurations(&self) -> &Configuration {
        &self.configurations
    }

    pub fn device(&self, device: Device) -> Option<&DeviceConfig> {
        self.configurations.get(device)
    }

    /// Replace the whole state
    pub fn set_configurations(&mut self, configurations: Configuration) {
        self.configurations = configurations;
        info!(
            devices = self.configurations.devices().count(),
            "Configurations replaced"
        );
        let snapshot = Box::new(self.configurations.clone());
        self.publish(StoreEvent::ConfigChanged(snapshot));
    }

    /// Build an empty `cols × rows` lattice for a device, creating the device
    /// config if needed. Returns a copy of the new items.
    pub fn initialize_grid(&mut self, device: Device, cols: u32, rows: u32) -> Vec<GridItem> {
        let (cols, rows) = clamp_tracks(device, cols, rows);
        let items = grid::empty_lattice(cols, rows);

        if self.configurations.get(device).is_none() {
            self.configurations.set(device, DeviceConfig::for_device(device));
        }
        if let Some(config) = self.configurations.get_mut(device) {
            config.device_columns = cols;
            config.device_rows = rows;
            config.grid_items = items.clone();
            if config.footer_styles.is_empty() {
                config.footer_styles = initial_footer_styles();
            }
        }

        info!(device = %device, cols = cols, rows = rows, "Initialized grid");
        self.publish(StoreEvent::GridChanged { device });
        items
    }

    /// Initialize every device that has no config yet, using device defaults
    pub fn initialize_all(&mut self) {
        for device in Device::ALL {
            if self.configurations.get(device).is_none() {
                let (cols, rows, _) = device.default_dimensions();
                self.initialize_grid(device, cols, rows);
            }
        }
    }

    /// Re-flow a device onto new dimensions, dropping filled items whose
    /// origin no longer fits
    pub fn update_grid_dimensions(&mut self, device: Device, cols: u32, rows: u32) -> bool {
        let Some(config) = self.configurations.get_mut(device) else {
            debug!(device = %device, "Resize ignored for uninitialized device");
            return false;
        };
        let (cols, rows) = clamp_tracks(device, cols, rows);
        let before = config.filled_count();
        config.grid_items = grid::update_grid_dimensions(&config.grid_items, cols, rows);
        config.device_columns = cols;
        config.device_rows = rows;

        let dropped = before - config.filled_count();
        if dropped > 0 {
            warn!(device = %device, dropped = dropped, "Resize dropped filled items");
        }
        info!(device = %device, cols = cols, rows = rows, "Updated grid dimensions");
        self.publish(StoreEvent::GridChanged { device });
        true
    }

    /// Replace a device's items wholesale (undo/redo restore, sync)
    pub fn replace_grid_items(&mut self, device: Device, items: Vec<GridItem>) -> bool {
        let Some(config) = self.configurations.get_mut(device) else {
            return false;
        };
        config.grid_items = items;
        self.publish(StoreEvent::GridChanged { device });
        true
    }

    /// Replace a whole device config
    pub fn replace_device(&mut self, device: Device, config: DeviceConfig) {
        self.configurations.set(device, config);
        self.publish(StoreEvent::GridChanged { device });
        self.publish(StoreEvent::FooterStyleChanged { device });
    }

    pub fn set_gap(&mut self, device: Device, gap: u32) -> bool {
        let Some(config) = self.configurations.get_mut(device) else {
            return false;
        };
        config.device_gap = gap;
        self.publish(StoreEvent::GridChanged { device });
        true
    }

    pub fn set_cell_size(
        &mut self,
        device: Device,
        width: Option<CellSize>,
        height: Option<CellSize>,
    ) -> bool {
        let Some(config) = self.configurations.get_mut(device) else {
            return false;
        };
        if let Some(width) = width {
            config.device_cell_width = width;
        }
        if let Some(height) = height {
            config.device_cell_height = height;
        }
        self.publish(StoreEvent::GridChanged { device });
        true
    }

    /// Shallow-merge a patch onto one item. Unknown device or item is a no-op.
    pub fn update_grid_item(&mut self, item_id: &str, device: Device, patch: GridItemPatch) -> bool {
        let Some(item) = self
            .configurations
            .get_mut(device)
            .and_then(|config| config.item_mut(item_id))
        else {
            debug!(device = %device, item = %item_id, "Update ignored for unknown item");
            return false;
        };

        let touches_styles = patch.touches_styles();
        patch.apply(item);
        if item.is_empty {
            item.reset_to_empty();
        }

        debug!(device = %device, item = %item_id, "Updated grid item");
        self.publish(StoreEvent::GridChanged { device });
        if touches_styles {
            self.publish(StoreEvent::StyleChanged {
                device,
                item_id: item_id.to_string(),
            });
        }
        true
    }

    /// Transplant content from `source_id` into the empty `target_id`.
    ///
    /// Returns `Ok(false)` when either id is unknown or the source is empty,
    /// and `TargetOccupied` when the target already holds content.
    pub fn move_grid_item(
        &mut self,
        source_id: &str,
        target_id: &str,
        device: Device,
    ) -> Result<bool, StoreError> {
        let Some(config) = self.configurations.get_mut(device) else {
            return Ok(false);
        };
        let Some(source) = config.item(source_id).cloned() else {
            return Ok(false);
        };
        if source.is_empty {
            debug!(device = %device, item = %source_id, "Move ignored for empty source");
            return Ok(false);
        }
        let (cols, rows) = (config.device_columns, config.device_rows);
        let Some(target) = config.item_mut(target_id) else {
            return Ok(false);
        };
        if !target.is_empty || source_id == target_id {
            return Err(StoreError::TargetOccupied {
                target: target_id.to_string(),
            });
        }

        target.take_content_from(&source);
        target.col_span = clamp_span(target.grid_column, target.col_span, cols);
        target.row_span = clamp_span(target.grid_row, target.row_span, rows);
        target.style = grid::cell_style(
            target.grid_column,
            target.grid_row,
            target.col_span,
            target.row_span,
        );

        if let Some(source) = config.item_mut(source_id) {
            source.reset_to_empty();
        }

        info!(device = %device, from = %source_id, to = %target_id, "Moved grid item");
        self.publish(StoreEvent::GridChanged { device });
        Ok(true)
    }

    /// Shallow-merge footer styles for a device
    pub fn update_footer_styles(&mut self, device: Device, patch: StyleMap) -> bool {
        let Some(config) = self.configurations.get_mut(device) else {
            return false;
        };
        config.footer_styles.extend(patch);
        debug!(device = %device, "Updated footer styles");
        self.publish(StoreEvent::FooterStyleChanged { device });
        true
    }

    pub fn form_factor(&self) -> Device {
        self.form_factor
    }

    pub fn set_form_factor(&mut self, device: Device) {
        self.form_factor = device;
        self.publish(StoreEvent::FormFactorChanged { device });
    }

    pub fn subscribe<F>(&mut self, topic: Topic, callback: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) -> anyhow::Result<()> + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers
            .entry(topic)
            .or_default()
            .push((id, Box::new(callback)));
        id
    }

    /// Returns false when the id was not subscribed to that topic
    pub fn unsubscribe(&mut self, topic: Topic, id: SubscriptionId) -> bool {
        let Some(list) = self.subscribers.get_mut(&topic) else {
            return false;
        };
        let before = list.len();
        list.retain(|(existing, _)| *existing != id);
        list.len() != before
    }

    fn publish(&mut self, event: StoreEvent) {
        let topic = event.topic();
        let Some(list) = self.subscribers.get_mut(&topic) else {
            return;
        };
        for (id, callback) in list.iter_mut() {
            if let Err(e) = callback(&event) {
                error!(topic = ?topic, subscription = id.0, error = %e, "Subscriber failed");
            }
        }
    }
}
