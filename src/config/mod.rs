//! Configuration management for focusflow.
//!
//! This module handles loading and saving configuration from `~/.focusflow/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ApiConfig, ColorSetting, Config, FocusConfig, GeneralConfig, API_URL_ENV};
