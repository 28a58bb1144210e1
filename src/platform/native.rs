use std::path::PathBuf;

use crate::store::{FileStore, StoreError};

/// Environment variable overriding the store file location
pub const DATA_ENV: &str = "GOLDEN_BULL_DATA";
pub const DEFAULT_STORE_FILE: &str = "golden_bull_store.json";

/// env_logger, filtered by RUST_LOG (info by default)
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

fn store_path() -> PathBuf {
    std::env::var_os(DATA_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE))
}

/// Open the JSON file store
pub fn open_store() -> Result<FileStore, StoreError> {
    FileStore::open(store_path())
}
