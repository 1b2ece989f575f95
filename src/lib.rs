pub mod api;
pub mod database;
pub mod route;

use once_cell::sync::Lazy;
use std::path::PathBuf;

// Application data directory from environment or default
pub static APP_DATA_DIR: Lazy<PathBuf> = Lazy::new(|| {
    std::env::var("APP_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            // {homedir}/.paramd
            let home_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home_dir.join(".paramd")
        })
});

// Schema file loaded into the store at startup and on sync-schema
pub static SCHEMA_PATH: Lazy<PathBuf> = Lazy::new(|| {
    std::env::var("SCHEMA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("schemas/default_schema.json"))
});

/// Get the current application data directory
pub fn get_app_data_dir() -> PathBuf {
    APP_DATA_DIR.clone()
}
