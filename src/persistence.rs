//! Design files and the saved-designs library
//!
//! A design file wraps a full configuration with a name and a timestamp.
//! Saved designs live in a key-value surface: one entry per design plus one
//! entry holding the list of references.

use chrono::Utc;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, info, warn};

use crate::constants::storage::{
    DATA_DIR, DESIGN_KEY_PREFIX, DESIGN_LIST_KEY, FORMAT_VERSION, KEY_EXTENSION,
};
use crate::error::PersistenceError;
use crate::notify::Confirm;
use crate::types::{CellSize, Configuration, Device};

/// Characters that cannot appear in a storage file name
static UNSAFE_KEY_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9._ -]").expect("valid key regex"));

/// File stem for a storage key. Safe keys are used verbatim; anything else
/// gets a readable sanitised prefix plus `~` and the hex of the full key, so
/// distinct keys never share a file.
fn key_file_stem(key: &str) -> String {
    if !key.is_empty() && !UNSAFE_KEY_CHARS.is_match(key) {
        return key.to_string();
    }
    let readable = UNSAFE_KEY_CHARS.replace_all(key, "_");
    format!("{readable}~{}", hex::encode(key.as_bytes()))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignFile {
    pub configurations: Configuration,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl DesignFile {
    /// Stamp a configuration with a name and the current time
    pub fn new(name: &str, configurations: Configuration) -> Self {
        Self {
            configurations,
            timestamp: Utc::now().to_rfc3339(),
            name: name.trim().to_string(),
            version: Some(FORMAT_VERSION.to_string()),
        }
    }

    /// Name to show the user, with a fallback for unnamed files
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.name.trim().is_empty() { fallback } else { self.name.trim() }
    }

    pub fn to_json(&self) -> Result<String, PersistenceError> {
        serde_json::to_string_pretty(self).map_err(|source| PersistenceError::Serialization { source })
    }
}

/// Parse and validate design JSON. The `configurations` object is mandatory.
pub fn parse_design(json: &str) -> Result<DesignFile, PersistenceError> {
    let mut value: Value =
        serde_json::from_str(json).map_err(|source| PersistenceError::Parse { source })?;

    let configurations = match value.get_mut("configurations").map(Value::take) {
        Some(object @ Value::Object(_)) => object,
        _ => return Err(PersistenceError::MissingConfigurations),
    };
    let configurations: Configuration = serde_json::from_value(configurations)
        .map_err(|source| PersistenceError::InvalidConfigurations { source })?;

    let text = |key: &str| {
        value
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    Ok(DesignFile {
        configurations,
        timestamp: text("timestamp").unwrap_or_default(),
        name: text("name").unwrap_or_default(),
        version: text("version"),
    })
}

/// Minimal string storage the design library persists through
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
    fn remove(&mut self, key: &str) -> Result<(), PersistenceError>;
}

/// One JSON file per key under a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// `<data dir>/footer-builder`, falling back to the working directory
    pub fn default_root() -> PathBuf {
        let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(DATA_DIR);
        path
    }

    /// Open a store rooted at `root`, creating the directory if needed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| PersistenceError::Io {
            operation: "create",
            path: root.clone(),
            source,
        })?;
        debug!(root = %root.display(), "Opened file store");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.{KEY_EXTENSION}", key_file_stem(key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|source| PersistenceError::Io {
                operation: "read",
                path,
                source,
            })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let path = self.key_path(key);
        fs::write(&path, value).map_err(|source| PersistenceError::Io {
            operation: "write",
            path,
            source,
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(());
        }
        fs::remove_file(&path).map_err(|source| PersistenceError::Io {
            operation: "delete",
            path,
            source,
        })
    }
}

/// In-process store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Entry of the saved-designs list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedDesignRef {
    pub id: String,
    pub name: String,
    pub timestamp: String,
}

/// Storage id for a design name
pub fn design_id(name: &str) -> String {
    format!("{DESIGN_KEY_PREFIX}{}", name.trim())
}

/// Saved designs over a key-value store
pub struct DesignLibrary<S: KeyValueStore> {
    store: S,
    designs: Vec<SavedDesignRef>,
}

impl<S: KeyValueStore> DesignLibrary<S> {
    /// Open the library and read its reference list. A corrupt list is
    /// logged and treated as empty.
    pub fn open(store: S) -> Result<Self, PersistenceError> {
        let designs = match store.get(DESIGN_LIST_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(error = %e, "Saved designs list is unreadable, starting empty");
                Vec::new()
            }),
            None => Vec::new(),
        };
        info!(count = designs.len(), "Loaded saved designs list");
        Ok(Self { store, designs })
    }

    pub fn list(&self) -> &[SavedDesignRef] {
        &self.designs
    }

    pub fn find(&self, id: &str) -> Option<&SavedDesignRef> {
        self.designs.iter().find(|design| design.id == id)
    }

    /// Look a design up by id or by plain name
    pub fn resolve(&self, id_or_name: &str) -> Option<&SavedDesignRef> {
        self.find(id_or_name)
            .or_else(|| self.find(&design_id(id_or_name)))
    }

    fn write_list(&mut self) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(&self.designs)
            .map_err(|source| PersistenceError::Serialization { source })?;
        self.store.set(DESIGN_LIST_KEY, &raw)
    }

    fn write_design(&mut self, id: &str, design: &DesignFile) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(design)
            .map_err(|source| PersistenceError::Serialization { source })?;
        self.store.set(id, &raw)
    }

    /// Save under a name. Overwriting an existing design needs confirmation.
    pub fn save(
        &mut self,
        name: &str,
        configurations: Configuration,
        confirm: &dyn Confirm,
    ) -> Result<SavedDesignRef, PersistenceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PersistenceError::EmptyName);
        }
        let id = design_id(name);
        let exists = self.find(&id).is_some();
        if exists
            && !confirm.confirm(&format!(
                "A design named '{name}' already exists. Do you want to overwrite it?"
            ))
        {
            return Err(PersistenceError::AlreadyExists {
                name: name.to_string(),
            });
        }

        let design = DesignFile::new(name, configurations);
        self.write_design(&id, &design)?;

        let reference = SavedDesignRef {
            id: id.clone(),
            name: name.to_string(),
            timestamp: design.timestamp.clone(),
        };
        match self.designs.iter_mut().find(|d| d.id == id) {
            Some(existing) => existing.timestamp = design.timestamp,
            None => self.designs.push(reference.clone()),
        }
        self.write_list()?;

        info!(design = %name, overwrite = exists, "Saved design");
        Ok(reference)
    }

    /// Overwrite a saved design with new configurations
    pub fn update(
        &mut self,
        id: &str,
        configurations: Configuration,
        confirm: &dyn Confirm,
    ) -> Result<SavedDesignRef, PersistenceError> {
        let Some(existing) = self.find(id).cloned() else {
            return Err(PersistenceError::NotFound { id: id.to_string() });
        };
        if !confirm.confirm(&format!(
            "Are you sure you want to update the design '{}'? This will overwrite the existing saved design.",
            existing.name
        )) {
            return Err(PersistenceError::Cancelled);
        }

        let design = DesignFile::new(&existing.name, configurations);
        self.write_design(id, &design)?;
        if let Some(entry) = self.designs.iter_mut().find(|d| d.id == id) {
            entry.timestamp = design.timestamp.clone();
        }
        self.write_list()?;

        info!(design = %existing.name, "Updated design");
        Ok(SavedDesignRef {
            timestamp: design.timestamp,
            ..existing
        })
    }

    pub fn load(&self, id: &str) -> Result<DesignFile, PersistenceError> {
        let raw = self
            .store
            .get(id)?
            .ok_or_else(|| PersistenceError::NotFound { id: id.to_string() })?;
        parse_design(&raw)
    }

    pub fn delete(&mut self, id: &str, confirm: &dyn Confirm) -> Result<(), PersistenceError> {
        let Some(existing) = self.find(id).cloned() else {
            return Err(PersistenceError::NotFound { id: id.to_string() });
        };
        if !confirm.confirm(&format!(
            "Are you sure you want to delete the design '{}'? This action cannot be undone.",
            existing.name
        )) {
            return Err(PersistenceError::Cancelled);
        }

        self.store.remove(id)?;
        self.designs.retain(|d| d.id != id);
        self.write_list()?;
        info!(design = %existing.name, "Deleted design");
        Ok(())
    }

    /// Write a saved design to a standalone file
    pub fn export_saved(&self, id: &str, path: &Path) -> Result<(), PersistenceError> {
        let design = self.load(id)?;
        export_file(path, &design)
    }
}

/// Read and validate a design file
pub fn import_file(path: &Path) -> Result<DesignFile, PersistenceError> {
    let raw = fs::read_to_string(path).map_err(|source| PersistenceError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source,
    })?;
    let design = parse_design(&raw)?;
    info!(path = %path.display(), design = %design.display_name("Uploaded Design"), "Imported design");
    Ok(design)
}

/// Write a design as pretty-printed JSON
pub fn export_file(path: &Path, design: &DesignFile) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| PersistenceError::Io {
            operation: "create",
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let raw = design.to_json()?;
    fs::write(path, raw).map_err(|source| PersistenceError::Io {
        operation: "write",
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "Exported design");
    Ok(())
}

/// Per-device overview shown next to the saved designs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSummary {
    pub device: Device,
    pub columns: u32,
    pub rows: u32,
    pub gap: u32,
    pub width: CellSize,
    pub height: CellSize,
    pub divs: usize,
}

impl fmt::Display for DeviceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width: String = self.width.clone().into();
        let height: String = self.height.clone().into();
        write!(
            f,
            "{:<8} {}x{}  gap {}px  cell {} / {}  divs {}",
            self.device, self.columns, self.rows, self.gap, width, height, self.divs
        )
    }
}

pub fn device_summaries(configurations: &Configuration) -> Vec<DeviceSummary> {
    configurations
        .devices()
        .map(|(device, config)| DeviceSummary {
            device,
            columns: config.device_columns,
            rows: config.device_rows,
            gap: config.device_gap,
            width: config.device_cell_width.clone(),
            height: config.device_cell_height.clone(),
            divs: config.filled_count(),
        })
        .collect()
}
