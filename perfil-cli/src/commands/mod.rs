//! Command implementations for the perfil CLI

pub mod info;
pub mod print;
pub mod render;
pub mod template;
pub mod validate;

use anyhow::Result;
use perfil_core::Well;
use std::path::Path;

use crate::error::CliError;

/// Load a well snapshot from a JSON file. Unknown soil or element types
/// fail here rather than falling back to a default.
pub fn load_well(path: &Path) -> Result<Well> {
    if !path.exists() {
        return Err(CliError::file_not_found(path.to_path_buf()).into());
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("{}: {}", path.display(), e)))?;
    let well: Well = serde_json::from_str(&content)
        .map_err(|e| CliError::parse(path.display().to_string(), e.to_string()))?;
    Ok(well)
}
