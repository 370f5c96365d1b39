use crate::error::{Result, SchedulerError};
use crate::types::Store;
use std::fs;
use std::path::Path;

/// Loads the whole persisted document from `path`.
pub fn load_store(path: &Path) -> Result<Store> {
    let path_str = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| SchedulerError::FileRead {
        path: path_str.clone(),
        source,
    })?;

    serde_json::from_str(&content)
        .map_err(|e| SchedulerError::JsonParse { file: path_str, message: e.to_string() }.into())
}

/// Loads `path` if present, otherwise an empty `Store` — mirrors
/// `Config::load_or_default`'s "never fail on a missing file" posture.
pub fn load_store_or_default(path: &Path) -> Result<Store> {
    if !path.exists() {
        return Ok(Store::default());
    }
    load_store(path)
}

/// Serializes `store` to pretty JSON and writes it to `path`.
pub fn save_store(store: &Store, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(store)?;
    fs::write(path, json).map_err(|source| {
        SchedulerError::FileRead { path: path.display().to_string(), source }.into()
    })
}
