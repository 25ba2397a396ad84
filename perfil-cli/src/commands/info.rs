//! Info command implementation - summarize a well snapshot

use anyhow::Result;
use std::path::PathBuf;

use perfil_core::validate;

pub fn execute(input: PathBuf) -> Result<()> {
    let well = super::load_well(&input)?;
    let report = validate(&well);

    println!("Poço:            {}", well.project_info.well_id);
    println!("Projeto:         {}", well.project_info.project_name);
    println!("Local:           {}", well.project_info.location);
    println!("Prof. sondagem:  {:.2} m", well.well_info.drilling_depth);
    println!("Prof. poço:      {:.2} m", well.well_info.well_depth);
    println!(
        "Nível d'água:    {}",
        if well.water_level_depth() > 0.0 {
            format!("{:.2} m", well.water_level_depth())
        } else {
            "não medido".to_string()
        }
    );
    println!(
        "Método:          {}",
        well.well_info.drilling_method.display_name()
    );
    println!("Camadas:         {}", well.lithologic_profile.len());
    println!(
        "Elementos:       {}",
        well.constructive_profile.elements.len()
    );
    println!("Leituras VOC:    {}", well.voc_readings.len());
    println!(
        "Validação:       {} erro(s), {} aviso(s)",
        report.errors.len(),
        report.warnings.len()
    );

    Ok(())
}
