use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type Depth = f64;

/// Aggregate root for one monitoring well.
///
/// The renderer receives this as a read-only snapshot; all mutation goes
/// through [`crate::store::WellStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Well {
    pub id: Uuid,
    pub project_info: ProjectInfo,
    pub well_info: WellInfo,
    pub constructive_profile: ConstructiveProfile,
    pub lithologic_profile: Vec<LithologicLayer>,
    pub voc_readings: Vec<VocReading>,
    pub water_level: WaterLevel,
}

impl Well {
    /// The water-level depth used by the profile drawing.
    ///
    /// `well_info.water_level` and `water_level.depth` are a synchronized
    /// pair maintained by `WellStore::set_water_level`; this accessor is the
    /// single read point for layout code.
    pub fn water_level_depth(&self) -> Depth {
        self.well_info.water_level
    }

    /// Maximum depth for scaling: never less than 50 m so short wells keep
    /// a legible canvas.
    pub fn max_depth(&self) -> Depth {
        self.well_info
            .drilling_depth
            .max(self.well_info.well_depth)
            .max(50.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub title: String,
    pub well_id: String,
    pub client: String,
    pub project_name: String,
    pub location: String,
    pub figure: String,
    pub date: String,
    pub responsible: String,
    pub crea: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellInfo {
    pub drilling: DateTimeRange,
    pub well_construction: DateTimeRange,
    /// Borehole depth in meters.
    pub drilling_depth: Depth,
    /// Finished well depth in meters.
    pub well_depth: Depth,
    /// Borehole diameter in inches.
    pub borehole_diameter: f64,
    /// Casing diameter in inches.
    pub casing_diameter: f64,
    pub drilling_method: DrillingMethod,
    /// Static water level in meters; kept in sync with `Well::water_level`.
    pub water_level: Depth,
    pub water_level_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeRange {
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrillingMethod {
    HollowStemAuger,
    DirectPush,
    Rotary,
    Percussion,
    ManualAuger,
    Sonic,
    Other,
}

// ============================================
// Constructive profile
// ============================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstructiveProfile {
    pub elements: Vec<ConstructiveElement>,
}

impl ConstructiveProfile {
    /// First element of the given type, if any. Layout lookups are
    /// "find first"; an absent type simply omits that sub-drawing.
    pub fn find_first(&self, kind: ElementType) -> Option<&ConstructiveElement> {
        self.elements.iter().find(|e| e.kind.element_type() == kind)
    }

    pub fn surface_completion(&self) -> Option<&ConstructiveElement> {
        self.find_first(ElementType::SurfaceCompletion)
    }

    pub fn casing(&self) -> Option<&ConstructiveElement> {
        self.find_first(ElementType::GeomechanicalCasing)
    }

    pub fn screen(&self) -> Option<&ConstructiveElement> {
        self.find_first(ElementType::SlottedCasing)
    }

    pub fn prefilter(&self) -> Option<&ConstructiveElement> {
        self.find_first(ElementType::Prefilter)
    }

    /// All cement seal records. Seals repeat; every record renders.
    pub fn cement_seals(&self) -> impl Iterator<Item = &ConstructiveElement> {
        self.elements
            .iter()
            .filter(|e| e.kind.element_type() == ElementType::CementSeal)
    }

    /// All bentonite records, seals and pellets alike.
    pub fn bentonite_seals(&self) -> impl Iterator<Item = &ConstructiveElement> {
        self.elements.iter().filter(|e| {
            matches!(
                e.kind.element_type(),
                ElementType::BentoniteSeal | ElementType::BentonitePellet
            )
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructiveElement {
    pub id: Uuid,
    #[serde(flatten)]
    pub kind: ElementKind,
    pub top_depth: Depth,
    pub bottom_depth: Depth,
}

impl ConstructiveElement {
    pub fn span(&self) -> Depth {
        self.bottom_depth - self.top_depth
    }
}

/// One physical component of the well construction, with only the
/// properties meaningful for that component. Serializes as the classic
/// `{"type": ..., "properties": {...}}` wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "properties", rename_all = "snake_case")]
pub enum ElementKind {
    #[serde(rename_all = "camelCase")]
    SurfaceCompletion {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    CementSeal {
        /// Thickness in meters.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        thickness: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    BentoniteSeal {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        thickness: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    BentonitePellet {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        thickness: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    GeomechanicalCasing {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        material: Option<CasingMaterial>,
        /// Diameter in inches.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        diameter: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    SlottedCasing {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        material: Option<CasingMaterial>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        diameter: Option<f64>,
        /// Slot opening in millimeters.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        slot_size: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Prefilter {
        /// Grain-size range as free text, e.g. "1,0 - 2,0 mm".
        #[serde(default, skip_serializing_if = "Option::is_none")]
        grain_size: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Cap {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Centralizer {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    BottomCap {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },
}

impl ElementKind {
    pub fn element_type(&self) -> ElementType {
        match self {
            ElementKind::SurfaceCompletion { .. } => ElementType::SurfaceCompletion,
            ElementKind::CementSeal { .. } => ElementType::CementSeal,
            ElementKind::BentoniteSeal { .. } => ElementType::BentoniteSeal,
            ElementKind::BentonitePellet { .. } => ElementType::BentonitePellet,
            ElementKind::GeomechanicalCasing { .. } => ElementType::GeomechanicalCasing,
            ElementKind::SlottedCasing { .. } => ElementType::SlottedCasing,
            ElementKind::Prefilter { .. } => ElementType::Prefilter,
            ElementKind::Cap { .. } => ElementType::Cap,
            ElementKind::Centralizer { .. } => ElementType::Centralizer,
            ElementKind::BottomCap { .. } => ElementType::BottomCap,
        }
    }

    pub fn slot_size(&self) -> Option<f64> {
        match self {
            ElementKind::SlottedCasing { slot_size, .. } => *slot_size,
            _ => None,
        }
    }

    pub fn grain_size(&self) -> Option<&str> {
        match self {
            ElementKind::Prefilter { grain_size, .. } => grain_size.as_deref(),
            _ => None,
        }
    }
}

/// Discriminant-only view of [`ElementKind`], for lookups and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    SurfaceCompletion,
    CementSeal,
    BentoniteSeal,
    BentonitePellet,
    GeomechanicalCasing,
    SlottedCasing,
    Prefilter,
    Cap,
    Centralizer,
    BottomCap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CasingMaterial {
    Pvc,
    Pead,
    Steel,
    Ptfe,
}

// ============================================
// Lithologic profile
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LithologicLayer {
    pub id: Uuid,
    pub top_depth: Depth,
    pub bottom_depth: Depth,
    pub primary_soil_type: SoilType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_soil_type: Option<SoilType>,
    pub description: LithologicDescription,
}

impl LithologicLayer {
    pub fn span(&self) -> Depth {
        self.bottom_depth - self.top_depth
    }
}

/// Closed soil/material enumeration. An unrecognized value on the wire is
/// rejected during deserialization; there is no silent fallback pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilType {
    Asphalt,
    Concrete,
    Fill,
    Topsoil,
    Clay,
    Silt,
    Sand,
    Gravel,
    SandyClay,
    ClayeySand,
    SiltyClay,
    SiltySand,
    SandySilt,
    ClayeySilt,
    OrganicClay,
    Peat,
    Saprolite,
    WeatheredRock,
    Rock,
    Other,
}

impl SoilType {
    /// Every variant, in declaration order. Used by the pattern library and
    /// legend to enumerate the closed set.
    pub const ALL: [SoilType; 20] = [
        SoilType::Asphalt,
        SoilType::Concrete,
        SoilType::Fill,
        SoilType::Topsoil,
        SoilType::Clay,
        SoilType::Silt,
        SoilType::Sand,
        SoilType::Gravel,
        SoilType::SandyClay,
        SoilType::ClayeySand,
        SoilType::SiltyClay,
        SoilType::SiltySand,
        SoilType::SandySilt,
        SoilType::ClayeySilt,
        SoilType::OrganicClay,
        SoilType::Peat,
        SoilType::Saprolite,
        SoilType::WeatheredRock,
        SoilType::Rock,
        SoilType::Other,
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LithologicDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grain_size: Option<GrainSize>,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plasticity: Option<Plasticity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consistency: Option<Consistency>,
    pub moisture: MoistureState,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inclusions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odor: Option<Odor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odor_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrainSize {
    Fine,
    Medium,
    Coarse,
    FineToMedium,
    MediumToCoarse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Plasticity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Consistency {
    // Cohesive soils
    VerySoft,
    Soft,
    Medium,
    Stiff,
    VeryStiff,
    Hard,
    // Granular soils
    VeryLoose,
    Loose,
    MediumDense,
    Dense,
    VeryDense,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoistureState {
    #[default]
    Dry,
    SlightlyMoist,
    Moist,
    VeryMoist,
    Saturated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Odor {
    None,
    Slight,
    Strong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Natural,
    Fill,
    Mixed,
}

// ============================================
// Measurements
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocReading {
    /// Reading depth in meters.
    pub depth: Depth,
    /// Concentration in PPM.
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterLevel {
    pub depth: Depth,
    pub measurement_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_artesian: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_kind_wire_shape_matches_legacy_json() {
        let el = ConstructiveElement {
            id: Uuid::nil(),
            kind: ElementKind::SlottedCasing {
                material: Some(CasingMaterial::Pvc),
                diameter: Some(4.0),
                slot_size: Some(0.5),
                notes: None,
            },
            top_depth: 45.0,
            bottom_depth: 50.0,
        };
        let json = serde_json::to_value(&el).unwrap();
        assert_eq!(json["type"], "slotted_casing");
        assert_eq!(json["properties"]["slotSize"], 0.5);
        assert_eq!(json["topDepth"], 45.0);
        assert_eq!(json["bottomDepth"], 50.0);
    }

    #[test]
    fn unknown_soil_type_is_rejected() {
        let err = serde_json::from_str::<SoilType>("\"quicksand\"");
        assert!(err.is_err());
    }

    #[test]
    fn unknown_element_type_is_rejected() {
        let json = r#"{"id":"00000000-0000-0000-0000-000000000000","type":"mystery","properties":{},"topDepth":0.0,"bottomDepth":1.0}"#;
        assert!(serde_json::from_str::<ConstructiveElement>(json).is_err());
    }

    #[test]
    fn max_depth_has_a_50m_floor() {
        let mut well = crate::templates::standard_monitoring_well().build();
        well.well_info.drilling_depth = 12.0;
        well.well_info.well_depth = 12.0;
        assert_eq!(well.max_depth(), 50.0);
        well.well_info.drilling_depth = 80.0;
        assert_eq!(well.max_depth(), 80.0);
    }

    #[test]
    fn find_first_returns_none_for_absent_type() {
        let profile = ConstructiveProfile::default();
        assert!(profile.screen().is_none());
        assert!(profile.cement_seals().next().is_none());
    }
}
