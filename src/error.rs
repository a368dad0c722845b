//! Typed errors for store and persistence operations.
//!
//! Not-found conditions are never errors; they are silent no-ops at the call
//! site. These enums cover the failures a user has to hear about.

use std::path::PathBuf;
use thiserror::Error;

/// Store mutation rejected because it would break a grid invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Drop target already holds content
    #[error("Cell {target} is already occupied")]
    TargetOccupied { target: String },
}

impl StoreError {
    pub fn user_message(&self) -> String {
        match self {
            Self::TargetOccupied { .. } => "That cell already holds content.".to_string(),
        }
    }

    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::TargetOccupied { .. } => Some("Drop onto an empty cell or delete its content first."),
        }
    }
}

/// Design load/save failure
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Storage read/write failed
    #[error("Failed to {operation} {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not JSON
    #[error("Failed to parse design data")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    /// JSON is valid but has no `configurations` object
    #[error("Invalid file format: Missing configurations data.")]
    MissingConfigurations,

    /// `configurations` present but does not match the design shape
    #[error("Invalid configurations data")]
    InvalidConfigurations {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize design")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    #[error("Design name cannot be empty")]
    EmptyName,

    #[error("Design not found: {id}")]
    NotFound { id: String },

    /// Existing design and the user declined to overwrite it
    #[error("Design {name} already exists")]
    AlreadyExists { name: String },

    /// User declined a confirmation
    #[error("Operation cancelled")]
    Cancelled,
}

impl PersistenceError {
    /// Message suitable for a toast
    pub fn user_message(&self) -> String {
        match self {
            Self::Io { operation, path, .. } => {
                format!("Could not {} {}", operation, path.display())
            }
            Self::Parse { source } => format!("Error loading file: {source}"),
            Self::MissingConfigurations => {
                "Invalid file format: Missing configurations data.".to_string()
            }
            Self::InvalidConfigurations { source } => {
                format!("The design's configurations could not be read: {source}")
            }
            Self::Serialization { .. } => "The design could not be serialized.".to_string(),
            Self::EmptyName => "Please enter a design name.".to_string(),
            Self::NotFound { id } => format!("No saved design named \"{id}\"."),
            Self::AlreadyExists { name } => format!("A design named \"{name}\" already exists."),
            Self::Cancelled => "Operation cancelled.".to_string(),
        }
    }

    /// Optional remediation hint
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Io { .. } => Some("Check that the storage directory exists and is writable."),
            Self::Parse { .. } | Self::MissingConfigurations | Self::InvalidConfigurations { .. } => {
                Some("Choose a file exported by the footer builder.")
            }
            Self::AlreadyExists { .. } => Some("Confirm the overwrite or choose another name."),
            Self::NotFound { .. } => Some("List saved designs to see available names."),
            Self::Serialization { .. } | Self::EmptyName | Self::Cancelled => None,
        }
    }
}
