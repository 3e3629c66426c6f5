// Sonic-Sort Library Root
// Media library ordering: natural-order strings, collation, entry tie-breaks

pub mod config;
pub mod settings;
pub mod sort;

// Re-exports
pub use config::Config;
pub use settings::{SettingsStore, SortSettings, Strength, TextOrderKind};
pub use sort::{
    AlphanumComparator, Comparator, Comparators, MediaEntry, MediaEntryComparator, MediaType,
    OrderBy, TextOrder,
};

// Common types and utilities
pub mod error {
    pub type Result<T> = std::result::Result<T, Error>;

    #[derive(Debug, thiserror::Error)]
    pub enum Error {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("JSON error: {0}")]
        Json(#[from] serde_json::Error),

        #[error("YAML error: {0}")]
        Yaml(#[from] serde_yaml::Error),

        #[error("Config error: {0}")]
        Config(String),

        #[error("Unsupported locale '{locale}': {reason}")]
        Locale { locale: String, reason: String },
    }
}
