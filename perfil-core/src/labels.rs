//! Display dictionaries for the closed enumerations.
//!
//! The strings here appear verbatim in rendered panels and legends, so they
//! keep the Portuguese wording of the field forms.

use crate::types::{
    CasingMaterial, Consistency, DrillingMethod, ElementType, GrainSize, MoistureState, SoilType,
};

impl SoilType {
    pub fn display_name(&self) -> &'static str {
        match self {
            SoilType::Asphalt => "Asfalto",
            SoilType::Concrete => "Concreto",
            SoilType::Fill => "Aterro",
            SoilType::Topsoil => "Solo Orgânico",
            SoilType::Clay => "Argila",
            SoilType::Silt => "Silte",
            SoilType::Sand => "Areia",
            SoilType::Gravel => "Pedregulho",
            SoilType::SandyClay => "Argila arenosa",
            SoilType::ClayeySand => "Areia argilosa",
            SoilType::SiltyClay => "Argila siltosa",
            SoilType::SiltySand => "Areia siltosa",
            SoilType::SandySilt => "Silte arenoso",
            SoilType::ClayeySilt => "Silte argiloso",
            SoilType::OrganicClay => "Argila orgânica",
            SoilType::Peat => "Turfa",
            SoilType::Saprolite => "Saprólito",
            SoilType::WeatheredRock => "Rocha alterada",
            SoilType::Rock => "Rocha",
            SoilType::Other => "Outro",
        }
    }

    /// Flat swatch color used in the legend panel.
    pub fn base_color(&self) -> &'static str {
        match self {
            SoilType::Asphalt => "#333333",
            SoilType::Concrete => "#999999",
            SoilType::Fill => "#8B4513",
            SoilType::Topsoil => "#654321",
            SoilType::Clay => "#CD853F",
            SoilType::Silt => "#D2B48C",
            SoilType::Sand => "#F5DEB3",
            SoilType::Gravel => "#A0A0A0",
            SoilType::SandyClay => "#DEB887",
            SoilType::ClayeySand => "#E6D5AC",
            SoilType::SiltyClay => "#D2B48C",
            SoilType::SiltySand => "#F0E68C",
            SoilType::SandySilt => "#E6D5AC",
            SoilType::ClayeySilt => "#C9B896",
            SoilType::OrganicClay => "#2F4F4F",
            SoilType::Peat => "#3E2723",
            SoilType::Saprolite => "#D2691E",
            SoilType::WeatheredRock => "#808080",
            SoilType::Rock => "#696969",
            SoilType::Other => "#CCCCCC",
        }
    }
}

impl DrillingMethod {
    pub fn display_name(&self) -> &'static str {
        match self {
            DrillingMethod::HollowStemAuger => "Trado Oco (Hollow Stem Auger)",
            DrillingMethod::DirectPush => "Direct Push",
            DrillingMethod::Rotary => "Rotativa",
            DrillingMethod::Percussion => "Percussão",
            DrillingMethod::ManualAuger => "Trado Manual",
            DrillingMethod::Sonic => "Sônica",
            DrillingMethod::Other => "Outro",
        }
    }
}

impl ElementType {
    pub fn display_name(&self) -> &'static str {
        match self {
            ElementType::SurfaceCompletion => "Acabamento Superficial",
            ElementType::CementSeal => "Selo de Cimento",
            ElementType::BentoniteSeal => "Selo de Bentonita",
            ElementType::BentonitePellet => "Pellet de Bentonita",
            ElementType::GeomechanicalCasing => "Tubo Geomecânico",
            ElementType::SlottedCasing => "Filtro (Ranhurado)",
            ElementType::Prefilter => "Pré-filtro",
            ElementType::Cap => "Tampa",
            ElementType::Centralizer => "Centralizador",
            ElementType::BottomCap => "Fundo",
        }
    }
}

impl GrainSize {
    pub fn display_name(&self) -> &'static str {
        match self {
            GrainSize::Fine => "finos",
            GrainSize::Medium => "médios",
            GrainSize::Coarse => "grossos",
            GrainSize::FineToMedium => "finos a médios",
            GrainSize::MediumToCoarse => "médios a grossos",
        }
    }
}

impl Consistency {
    pub fn display_name(&self) -> &'static str {
        match self {
            Consistency::VerySoft => "muito mole",
            Consistency::Soft => "mole",
            Consistency::Medium => "média",
            Consistency::Stiff => "rija",
            Consistency::VeryStiff => "muito rija",
            Consistency::Hard => "dura",
            Consistency::VeryLoose => "muito fofa",
            Consistency::Loose => "fofa",
            Consistency::MediumDense => "medianamente compacta",
            Consistency::Dense => "compacta",
            Consistency::VeryDense => "muito compacta",
        }
    }
}

impl MoistureState {
    pub fn display_name(&self) -> &'static str {
        match self {
            MoistureState::Dry => "seco",
            MoistureState::SlightlyMoist => "pouco úmido",
            MoistureState::Moist => "úmido",
            MoistureState::VeryMoist => "muito úmido",
            MoistureState::Saturated => "saturado",
        }
    }
}

impl CasingMaterial {
    pub fn display_name(&self) -> &'static str {
        match self {
            CasingMaterial::Pvc => "PVC",
            CasingMaterial::Pead => "PEAD",
            CasingMaterial::Steel => "Aço",
            CasingMaterial::Ptfe => "PTFE",
        }
    }
}
