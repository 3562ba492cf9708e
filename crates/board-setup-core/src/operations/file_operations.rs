use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn read_file_content(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))
}

pub fn write_file_content(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write file: {:?}", path))
}

pub fn is_read_only(path: &Path) -> Result<bool> {
    let metadata =
        fs::metadata(path).with_context(|| format!("Failed to stat file: {:?}", path))?;
    Ok(metadata.permissions().readonly())
}
