//! Responsive footer layout builder: per-device grids of divs, styles,
//! undo history, saved designs and HTML/CSS export.

#![forbid(unsafe_code)]

pub mod codegen;
pub mod config;
pub mod constants;
pub mod editor;
pub mod error;
pub mod grid;
pub mod history;
pub mod identity;
pub mod notify;
pub mod persistence;
pub mod preview;
pub mod scheduler;
pub mod social;
pub mod store;
pub mod style;
pub mod types;
