//! Configuration module
//!
//! Handles loading and validating settings from YAML files and environment
//! variables. Settings are constructed once at startup and injected into the
//! application state; nothing here is global.

mod settings;

pub use settings::*;
