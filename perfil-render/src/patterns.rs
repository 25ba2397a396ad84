//! Tileable fill patterns for lithology classes and construction materials.
//!
//! Motifs follow ABGE geological drafting conventions: clays are horizontal
//! lines, sands are dots, silts dashed lines, mixed soils combine them.
//! The mapping is total over the closed [`SoilType`] enumeration; an
//! unknown soil never reaches this module because deserialization rejects
//! it at the boundary.

use perfil_core::SoilType;

use crate::svg::SvgFragment;

/// Pattern id referenced as `fill="url(#...)"` by the lithology bands.
pub fn pattern_id(soil: SoilType) -> &'static str {
    match soil {
        SoilType::Asphalt => "pattern-asphalt",
        SoilType::Concrete => "pattern-concrete",
        SoilType::Fill => "pattern-fill",
        SoilType::Topsoil => "pattern-topsoil",
        SoilType::Clay => "pattern-clay",
        SoilType::Silt => "pattern-silt",
        SoilType::Sand => "pattern-sand",
        SoilType::Gravel => "pattern-gravel",
        SoilType::SandyClay => "pattern-sandy_clay",
        SoilType::ClayeySand => "pattern-clayey_sand",
        SoilType::SiltyClay => "pattern-silty_clay",
        SoilType::SiltySand => "pattern-silty_sand",
        SoilType::SandySilt => "pattern-sandy_silt",
        SoilType::ClayeySilt => "pattern-clayey_silt",
        SoilType::OrganicClay => "pattern-organic_clay",
        SoilType::Peat => "pattern-peat",
        SoilType::Saprolite => "pattern-saprolite",
        SoilType::WeatheredRock => "pattern-weathered_rock",
        SoilType::Rock => "pattern-rock",
        SoilType::Other => "pattern-other",
    }
}

/// Construction-material fills.
pub const PREFILTER_PATTERN: &str = "pattern-prefilter";
pub const BENTONITE_PATTERN: &str = "pattern-bentonite";
pub const CEMENT_PATTERN: &str = "pattern-cement";
/// Plain casing is drawn unpatterned.
pub const CASING_FILL: &str = "#fff";

/// The full `<defs>` block, emitted once per document.
pub fn defs() -> SvgFragment {
    let mut d = SvgFragment::new();
    d.push_str("<defs>");

    // Clay: horizontal lines
    d.push_str(r##"<pattern id="pattern-clay" patternUnits="userSpaceOnUse" width="10" height="4"><line x1="0" y1="2" x2="10" y2="2" stroke="#8B4513" stroke-width="1"/></pattern>"##);
    // Sand: dots
    d.push_str(r##"<pattern id="pattern-sand" patternUnits="userSpaceOnUse" width="6" height="6"><circle cx="2" cy="2" r="1" fill="#8B7355"/><circle cx="5" cy="5" r="1" fill="#8B7355"/></pattern>"##);
    // Sandy clay: lines + dots
    d.push_str(r##"<pattern id="pattern-sandy_clay" patternUnits="userSpaceOnUse" width="10" height="8"><line x1="0" y1="2" x2="10" y2="2" stroke="#8B4513" stroke-width="1"/><line x1="0" y1="6" x2="10" y2="6" stroke="#8B4513" stroke-width="1"/><circle cx="3" cy="4" r="1" fill="#8B7355"/><circle cx="7" cy="4" r="1" fill="#8B7355"/></pattern>"##);
    // Clayey sand: dots + sparse lines
    d.push_str(r##"<pattern id="pattern-clayey_sand" patternUnits="userSpaceOnUse" width="8" height="8"><circle cx="2" cy="2" r="1" fill="#8B7355"/><circle cx="6" cy="6" r="1" fill="#8B7355"/><line x1="0" y1="4" x2="8" y2="4" stroke="#8B4513" stroke-width="0.5"/></pattern>"##);
    // Silt: dashed lines
    d.push_str(r##"<pattern id="pattern-silt" patternUnits="userSpaceOnUse" width="12" height="4"><line x1="0" y1="2" x2="4" y2="2" stroke="#A0522D" stroke-width="1"/><line x1="6" y1="2" x2="10" y2="2" stroke="#A0522D" stroke-width="1"/></pattern>"##);
    // Sandy silt
    d.push_str(r##"<pattern id="pattern-sandy_silt" patternUnits="userSpaceOnUse" width="10" height="6"><line x1="0" y1="2" x2="4" y2="2" stroke="#A0522D" stroke-width="0.5"/><line x1="6" y1="2" x2="10" y2="2" stroke="#A0522D" stroke-width="0.5"/><circle cx="3" cy="4" r="0.8" fill="#8B7355"/><circle cx="7" cy="4" r="0.8" fill="#8B7355"/></pattern>"##);
    // Silty clay
    d.push_str(r##"<pattern id="pattern-silty_clay" patternUnits="userSpaceOnUse" width="12" height="6"><line x1="0" y1="2" x2="12" y2="2" stroke="#8B4513" stroke-width="1"/><line x1="0" y1="3" x2="4" y2="3" stroke="#A0522D" stroke-width="0.5"/><line x1="6" y1="3" x2="10" y2="3" stroke="#A0522D" stroke-width="0.5"/></pattern>"##);
    // Clayey silt
    d.push_str(r##"<pattern id="pattern-clayey_silt" patternUnits="userSpaceOnUse" width="12" height="6"><line x1="0" y1="2" x2="4" y2="2" stroke="#A0522D" stroke-width="1"/><line x1="6" y1="2" x2="10" y2="2" stroke="#A0522D" stroke-width="1"/><line x1="0" y1="4" x2="12" y2="4" stroke="#8B4513" stroke-width="0.5"/></pattern>"##);
    // Silty sand
    d.push_str(r##"<pattern id="pattern-silty_sand" patternUnits="userSpaceOnUse" width="8" height="8"><circle cx="2" cy="2" r="1" fill="#8B7355"/><circle cx="6" cy="6" r="1" fill="#8B7355"/><line x1="0" y1="4" x2="3" y2="4" stroke="#A0522D" stroke-width="0.5"/><line x1="5" y1="4" x2="8" y2="4" stroke="#A0522D" stroke-width="0.5"/></pattern>"##);
    // Organic clay: lines + organic squiggle
    d.push_str(r##"<pattern id="pattern-organic_clay" patternUnits="userSpaceOnUse" width="12" height="8"><line x1="0" y1="2" x2="12" y2="2" stroke="#2F4F4F" stroke-width="1"/><line x1="0" y1="6" x2="12" y2="6" stroke="#2F4F4F" stroke-width="1"/><path d="M2,4 Q4,3 6,4 Q8,5 10,4" stroke="#1a3a3a" fill="none" stroke-width="0.5"/></pattern>"##);
    // Gravel: open circles
    d.push_str(r##"<pattern id="pattern-gravel" patternUnits="userSpaceOnUse" width="12" height="12"><circle cx="4" cy="4" r="3" fill="none" stroke="#666" stroke-width="1"/><circle cx="10" cy="10" r="2" fill="none" stroke="#666" stroke-width="1"/></pattern>"##);
    // Weathered rock: V marks
    d.push_str(r##"<pattern id="pattern-weathered_rock" patternUnits="userSpaceOnUse" width="10" height="10"><path d="M2,2 L5,8 L8,2" stroke="#555" fill="none" stroke-width="1"/></pattern>"##);
    // Rock: dense cross-hatch
    d.push_str(r##"<pattern id="pattern-rock" patternUnits="userSpaceOnUse" width="6" height="6"><line x1="0" y1="0" x2="6" y2="6" stroke="#333" stroke-width="1"/><line x1="0" y1="6" x2="6" y2="0" stroke="#333" stroke-width="1"/></pattern>"##);
    // Fill: irregular hatch
    d.push_str(r##"<pattern id="pattern-fill" patternUnits="userSpaceOnUse" width="10" height="10"><line x1="0" y1="0" x2="10" y2="10" stroke="#8B4513" stroke-width="1"/><circle cx="7" cy="3" r="1.5" fill="none" stroke="#8B4513"/></pattern>"##);
    // Asphalt: solid dark
    d.push_str(r##"<pattern id="pattern-asphalt" patternUnits="userSpaceOnUse" width="4" height="4"><rect width="4" height="4" fill="#333"/></pattern>"##);
    // Concrete: grid + dots
    d.push_str(r##"<pattern id="pattern-concrete" patternUnits="userSpaceOnUse" width="8" height="8"><line x1="0" y1="4" x2="8" y2="4" stroke="#666" stroke-width="0.5"/><line x1="4" y1="0" x2="4" y2="8" stroke="#666" stroke-width="0.5"/><circle cx="2" cy="2" r="0.5" fill="#999"/><circle cx="6" cy="6" r="0.5" fill="#999"/></pattern>"##);
    // Topsoil
    d.push_str(r##"<pattern id="pattern-topsoil" patternUnits="userSpaceOnUse" width="10" height="8"><path d="M0,4 Q2,2 4,4 Q6,6 8,4 Q9,3 10,4" stroke="#654321" fill="none" stroke-width="1"/><circle cx="3" cy="2" r="0.8" fill="#654321"/><circle cx="7" cy="6" r="0.8" fill="#654321"/></pattern>"##);
    // Peat
    d.push_str(r##"<pattern id="pattern-peat" patternUnits="userSpaceOnUse" width="12" height="10"><path d="M0,5 Q3,3 6,5 Q9,7 12,5" stroke="#3E2723" fill="none" stroke-width="1.5"/><path d="M0,2 Q3,1 6,2" stroke="#3E2723" fill="none" stroke-width="0.8"/><path d="M6,8 Q9,7 12,8" stroke="#3E2723" fill="none" stroke-width="0.8"/></pattern>"##);
    // Saprolite
    d.push_str(r##"<pattern id="pattern-saprolite" patternUnits="userSpaceOnUse" width="10" height="10"><line x1="0" y1="3" x2="10" y2="3" stroke="#D2691E" stroke-width="0.5"/><line x1="0" y1="7" x2="10" y2="7" stroke="#D2691E" stroke-width="0.5"/><path d="M2,5 L4,1 L6,5" stroke="#D2691E" fill="none" stroke-width="0.8"/><path d="M7,5 L9,1" stroke="#D2691E" fill="none" stroke-width="0.8"/></pattern>"##);
    // Other
    d.push_str(r##"<pattern id="pattern-other" patternUnits="userSpaceOnUse" width="8" height="8"><rect width="8" height="8" fill="#EEEEEE"/><line x1="0" y1="0" x2="8" y2="8" stroke="#999" stroke-width="0.5" stroke-dasharray="1,1"/></pattern>"##);

    // Construction materials

    // Prefilter (coarse sand): large dots
    d.push_str(r##"<pattern id="pattern-prefilter" patternUnits="userSpaceOnUse" width="6" height="6"><circle cx="3" cy="3" r="2" fill="#DAA520"/></pattern>"##);
    // Bentonite: diagonal
    d.push_str(r##"<pattern id="pattern-bentonite" patternUnits="userSpaceOnUse" width="8" height="8"><line x1="0" y1="8" x2="8" y2="0" stroke="#808080" stroke-width="2"/></pattern>"##);
    // Cement: crossed
    d.push_str(r##"<pattern id="pattern-cement" patternUnits="userSpaceOnUse" width="8" height="8"><line x1="0" y1="4" x2="8" y2="4" stroke="#999" stroke-width="1"/><line x1="4" y1="0" x2="4" y2="8" stroke="#999" stroke-width="1"/></pattern>"##);

    d.push_str("</defs>");
    d
}
