use perfil_core::templates::standard_monitoring_well;
use perfil_core::types::{ElementKind, LithologicDescription, SoilType};
use perfil_core::{ConstructiveElement, LithologicLayer, VocReading, Well, WellStore};
use perfil_render::ProfileRenderer;
use uuid::Uuid;

fn scenario_well() -> Well {
    // drillingDepth = wellDepth = 50, one sand layer covering the full
    // depth, casing 0-45, screen 45-50, prefilter 43-50, water at 5 m.
    let mut well = standard_monitoring_well().build();
    well.well_info.drilling_depth = 50.0;
    well.well_info.well_depth = 50.0;
    well.well_info.water_level = 5.0;
    well.water_level.depth = 5.0;
    well.lithologic_profile = vec![LithologicLayer {
        id: Uuid::new_v4(),
        top_depth: 0.0,
        bottom_depth: 50.0,
        primary_soil_type: SoilType::Sand,
        secondary_soil_type: None,
        description: LithologicDescription::default(),
    }];
    well
}

#[test]
fn end_to_end_layout_of_a_standard_50m_well() {
    let well = scenario_well();
    let svg = ProfileRenderer::new().render(&well).to_svg();

    // Lithology column height 500 px.
    assert!(svg.contains("height=\"500\""));
    assert!(svg.contains("url(#pattern-sand)"));
    // Water marker at y = 50.
    assert!(svg.contains("y1=\"50\" y2=\"50\" stroke=\"#0066cc\""));
    // Screen band y 450-500 with 10 slot ticks.
    assert!(svg.contains("<rect x=\"85\" y=\"450\" width=\"30\" height=\"50\""));
    assert_eq!(svg.matches("<line x1=\"88\" x2=\"112\"").count(), 10);
    // Two symmetric prefilter side bands spanning y 430-500.
    assert!(svg.contains("<rect x=\"70\" y=\"430\" width=\"13\" height=\"70\""));
    assert!(svg.contains("<rect x=\"117\" y=\"430\" width=\"13\" height=\"70\""));
}

#[test]
fn single_voc_reading_renders_marker_without_path() {
    let mut well = scenario_well();
    well.voc_readings = vec![VocReading {
        depth: 2.0,
        value: 30.0,
        timestamp: None,
    }];
    let svg = ProfileRenderer::new().render(&well).to_svg();

    let voc = svg
        .split("voc-column")
        .nth(1)
        .and_then(|rest| rest.split("</g>").next())
        .expect("voc column group present");
    assert!(!voc.contains("<path"));
    assert!(voc.contains("<circle"));
    assert!(voc.contains(">30</text>"));
}

#[test]
fn missing_voc_readings_narrow_the_canvas_by_the_column_width() {
    let with_voc = {
        let mut well = scenario_well();
        well.voc_readings = vec![
            VocReading {
                depth: 1.0,
                value: 10.0,
                timestamp: None,
            },
            VocReading {
                depth: 3.0,
                value: 40.0,
                timestamp: None,
            },
        ];
        ProfileRenderer::new().render(&well)
    };
    let without_voc = ProfileRenderer::new().render(&scenario_well());

    assert_eq!(with_voc.width - without_voc.width, 80.0);
    assert!(!without_voc.to_svg().contains("voc-column"));
}

#[test]
fn json_round_trip_renders_byte_identical_markup() {
    let template = standard_monitoring_well();
    let mut store = WellStore::new(&template);
    store.add_voc_reading(VocReading {
        depth: 4.0,
        value: 22.5,
        timestamp: Some("2025-03-01T10:00:00Z".to_string()),
    });

    let before = ProfileRenderer::new().render(store.well()).to_svg();

    let snapshot = store.export_json().unwrap();
    let mut restored = WellStore::new(&template);
    restored.import_json(&snapshot).unwrap();

    let after = ProfileRenderer::new().render(restored.well()).to_svg();
    assert_eq!(before, after, "markup differs after export/import round trip");
}

#[test]
fn missing_screen_element_omits_band_and_ticks() {
    let mut well = scenario_well();
    well.constructive_profile
        .elements
        .retain(|e: &ConstructiveElement| !matches!(e.kind, ElementKind::SlottedCasing { .. }));
    let svg = ProfileRenderer::new().render(&well).to_svg();
    assert!(!svg.contains("screen-section"));
    assert_eq!(svg.matches("<line x1=\"88\" x2=\"112\"").count(), 0);
}
