//! Application settings for the footer builder

pub mod settings;

pub use settings::BuilderSettings;
