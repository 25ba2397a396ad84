//! Template command implementation - list templates and seed new wells

use anyhow::{Context, Result};
use std::path::PathBuf;

use perfil_core::builtin_templates;

use crate::error::CliError;

pub fn list() -> Result<()> {
    for template in builtin_templates() {
        println!(
            "{:<10} {}: {}",
            template.slug, template.name, template.description
        );
    }
    Ok(())
}

/// Seed a new well snapshot from a named template and write it as JSON.
pub fn new(name: String, output: PathBuf) -> Result<()> {
    let template = builtin_templates()
        .into_iter()
        .find(|t| t.slug == name)
        .ok_or_else(|| {
            CliError::config(format!(
                "unknown template '{}', run `perfil template list`",
                name
            ))
        })?;

    let well = template.build();
    let json = serde_json::to_string_pretty(&well).context("Failed to serialize well")?;
    std::fs::write(&output, json)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    log::info!("Seeded well {} from template '{}'", well.id, name);
    println!("Criado {} a partir do modelo '{}'", output.display(), name);
    Ok(())
}
