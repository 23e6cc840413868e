//! Data file location.

use std::env;
use std::fs;
use std::path::PathBuf;

use crate::error::{EvRegError, EvRegResult};

/// Environment variable overriding the default data file location.
pub const DATA_FILE_ENV: &str = "EVREG_DATA_FILE";

/// Resolve the path of the backing CSV file.
///
/// Honors `EVREG_DATA_FILE` when set, otherwise falls back to
/// `<data_dir>/evreg/events.csv`. The parent directory is created if it
/// does not exist yet.
pub fn data_file_path() -> EvRegResult<PathBuf> {
    if let Ok(path) = env::var(DATA_FILE_ENV) {
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        return Ok(path);
    }

    let data_dir = dirs::data_dir()
        .ok_or_else(|| EvRegError::Config("Could not determine data directory".to_string()))?;

    let dir = data_dir.join("evreg");
    fs::create_dir_all(&dir)?;

    Ok(dir.join("events.csv"))
}
