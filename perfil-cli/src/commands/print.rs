//! Print command implementation - assemble the full print document on a page

use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;

use perfil_render::{
    assemble, print_filename, Margins, Orientation, PageFormat, PageOptions, ProfileLayout,
    ProfileRenderer,
};

use crate::config::Config;
use crate::error::CliError;

pub fn execute(
    config: &Config,
    input: PathBuf,
    output: Option<PathBuf>,
    format: Option<String>,
    orientation: Option<Orientation>,
) -> Result<()> {
    log::info!("Starting print document assembly");
    log::info!("Input snapshot: {}", input.display());

    let well = super::load_well(&input)?;

    let format = parse_format(format.as_deref().unwrap_or(&config.print.format))?;
    let options = PageOptions {
        format,
        orientation,
        margins: Margins {
            top: config.print.margin_top,
            bottom: config.print.margin_bottom,
            left: config.print.margin_left,
            right: config.print.margin_right,
        },
    };

    let renderer = ProfileRenderer {
        layout: ProfileLayout {
            scale: config.render.scale,
            max_voc: config.render.max_voc,
            ..Default::default()
        },
    };
    let drawing = renderer.render(&well);
    let document = assemble(&drawing, &well, &options);
    log::info!(
        "Assembled {:?} {:?} page, fit scale {:.3}",
        format,
        document.orientation,
        document.fit_scale
    );

    let output = output.unwrap_or_else(|| {
        PathBuf::from(print_filename(&well.project_info.well_id, Utc::now()))
    });
    std::fs::write(&output, document.to_svg())
        .with_context(|| format!("Failed to write print document to {}", output.display()))?;
    log::info!("Wrote {}", output.display());

    Ok(())
}

fn parse_format(name: &str) -> Result<PageFormat> {
    match name.to_ascii_lowercase().as_str() {
        "a4" => Ok(PageFormat::A4),
        "a3" => Ok(PageFormat::A3),
        other => Err(CliError::invalid_format(format!(
            "unknown page format '{}', expected a4 or a3",
            other
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_are_case_insensitive() {
        assert_eq!(parse_format("A4").unwrap(), PageFormat::A4);
        assert_eq!(parse_format("a3").unwrap(), PageFormat::A3);
        assert!(parse_format("letter").is_err());
    }
}
