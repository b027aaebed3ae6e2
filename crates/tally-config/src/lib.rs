//! Configuration for tally
//!
//! This crate provides:
//! - Config directory utilities
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::{config_search_paths, load_config_file_from};
