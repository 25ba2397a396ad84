//! Validate command implementation - run the profile consistency checks

use anyhow::Result;
use std::path::PathBuf;

use perfil_core::validate;

use crate::error::CliError;

pub fn execute(input: PathBuf) -> Result<()> {
    log::info!("Validating snapshot: {}", input.display());

    let well = super::load_well(&input)?;
    let report = validate(&well);

    for warning in &report.warnings {
        log::warn!("{}: {}", warning.field, warning.message);
        println!("AVISO  [{}] {}", warning.field, warning.message);
    }
    for error in &report.errors {
        log::error!("{}: {}", error.field, error.message);
        println!("ERRO   [{}] {}", error.field, error.message);
    }

    if report.is_valid() {
        println!(
            "Poço {} válido ({} avisos)",
            well.project_info.well_id,
            report.warnings.len()
        );
        Ok(())
    } else {
        Err(CliError::validation(format!(
            "{} error(s), {} warning(s)",
            report.errors.len(),
            report.warnings.len()
        ))
        .into())
    }
}
