use perfil_core::templates::{shallow_well, standard_monitoring_well};
use perfil_render::print::mm_to_px;
use perfil_render::{assemble, PageFormat, PageOptions, ProfileRenderer};

#[test]
fn print_document_is_deterministic() {
    let well = standard_monitoring_well().build();
    let renderer = ProfileRenderer::new();
    let drawing = renderer.render(&well);

    let dir = tempfile::tempdir().unwrap();
    let f1 = dir.path().join("a.svg");
    let f2 = dir.path().join("b.svg");

    assemble(&drawing, &well, &PageOptions::default())
        .document
        .write_to_file(&f1)
        .unwrap();
    assemble(&drawing, &well, &PageOptions::default())
        .document
        .write_to_file(&f2)
        .unwrap();

    let b1 = std::fs::read(&f1).unwrap();
    let b2 = std::fs::read(&f2).unwrap();
    assert_eq!(b1, b2, "SVG bytes differ between identical print runs");
}

#[test]
fn content_never_upscales_past_full_size() {
    let well = shallow_well().build();
    let drawing = ProfileRenderer::new().render(&well);
    let doc = assemble(
        &drawing,
        &well,
        &PageOptions {
            format: PageFormat::A3,
            ..Default::default()
        },
    );
    assert!(doc.fit_scale <= 1.0);
}

#[test]
fn scaled_content_fits_inside_the_page_margins() {
    let well = standard_monitoring_well().build();
    let drawing = ProfileRenderer::new().render(&well);
    let options = PageOptions::default();
    let doc = assemble(&drawing, &well, &options);

    let avail_w = doc.document.width - mm_to_px(options.margins.left + options.margins.right);
    let avail_h = doc.document.height - mm_to_px(options.margins.top + options.margins.bottom);

    // Panels stack taller than the drawing for the standard template.
    let content_w = drawing.width + 20.0 + 280.0;
    assert!(content_w * doc.fit_scale <= avail_w + 1e-9);
    assert!(drawing.height * doc.fit_scale <= avail_h + 1e-9);
}

#[test]
fn print_and_preview_share_the_same_column_markup() {
    let well = standard_monitoring_well().build();
    let drawing = ProfileRenderer::new().render(&well);
    let preview = drawing.to_svg();
    let printed = assemble(&drawing, &well, &PageOptions::default()).to_svg();

    // Every drawing element of the preview appears verbatim in the print
    // document; only the outer svg wrapper differs.
    for line in preview.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("<rect") || trimmed.starts_with("<line") {
            assert!(printed.contains(trimmed), "missing element: {trimmed}");
        }
    }
}
