use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::ScrapeError;

/// Creates `dir` and its parents if missing. Succeeds when it already exists.
pub fn ensure_directory<P: AsRef<Path>>(dir: P) -> Result<(), ScrapeError> {
    fs::create_dir_all(dir)?;
    Ok(())
}

pub fn save_to_file<T: Serialize>(path: &str, data: &T) -> Result<(), ScrapeError> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}
