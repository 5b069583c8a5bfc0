//! Serialization and persistence

pub mod pattern;
pub mod config;
pub mod loader;
pub mod cache;

pub use pattern::{export_pattern, import_pattern, PatternDoc};
pub use config::{export_full_config, import_full_config, ConfigDoc, CONFIG_VERSION};
pub use loader::{load_pattern_str, LoadKind};
pub use cache::PatternCache;
