//! Render command implementation - export the composite profile drawing to SVG

use anyhow::Result;
use std::path::PathBuf;

use perfil_render::{ProfileLayout, ProfileRenderer};

use crate::config::Config;
use crate::error::CliError;

pub fn execute(config: &Config, input: PathBuf, output: PathBuf) -> Result<()> {
    log::info!("Starting profile rendering");
    log::info!("Input snapshot: {}", input.display());
    log::info!("Output file: {}", output.display());

    let well = super::load_well(&input)?;
    log::info!(
        "Loaded well {} with {} layers, {} constructive elements, {} VOC readings",
        well.project_info.well_id,
        well.lithologic_profile.len(),
        well.constructive_profile.elements.len(),
        well.voc_readings.len()
    );

    let renderer = ProfileRenderer {
        layout: ProfileLayout {
            scale: config.render.scale,
            max_voc: config.render.max_voc,
            ..Default::default()
        },
    };
    let drawing = renderer.render(&well);
    log::info!(
        "Rendered {}x{} px drawing at {} px/m",
        drawing.width,
        drawing.height,
        config.render.scale
    );

    std::fs::write(&output, drawing.to_svg()).map_err(|e| {
        CliError::rendering(format!("failed to write {}: {}", output.display(), e))
    })?;
    log::info!("Wrote {}", output.display());

    Ok(())
}
