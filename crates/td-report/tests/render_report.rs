use td_design::{DesignResult, default_operating_point, evaluate};
use td_project::SpecFile;
use td_report::{render_diagram, render_text};

fn evaluated(file: &SpecFile) -> DesignResult {
    let spec = file.compile();
    let (bm, j) = default_operating_point(&spec);
    evaluate(&spec, bm, j).unwrap()
}

#[test]
fn report_covers_every_section() {
    let mut file = SpecFile::new(50_000.0, 11_000.0, 415.0);
    file.name = "Plant feeder".to_string();
    let result = evaluated(&file);

    let report = render_text(&file, &result);

    for header in [
        "Advanced Transformer Design Report",
        "Project: Plant feeder",
        "Design Standard: IEC 60076",
        "Project Information",
        "Electrical Parameters",
        "Environmental Parameters",
        "Design Summary",
        "Core Design Details",
        "Winding Design Details",
        "Loss Analysis",
        "Thermal Analysis",
        "Mechanical Design",
        "Dynamic Performance",
        "Cost Analysis",
        "Design Methodology",
    ] {
        assert!(report.contains(header), "missing {:?}", header);
    }

    // three-phase documents carry the vector group
    assert!(report.contains("Connection Type:"));
    assert!(report.contains("Delta-Wye"));

    // a few load-bearing rows
    assert!(report.contains("Power Rating:"));
    assert!(report.contains("50000 VA"));
    assert!(report.contains("Total Losses:"));
    assert!(report.contains("SWG "));
    assert!(report.contains("11. Cost Estimation:"));
}

#[test]
fn single_phase_omits_connection_row() {
    let mut file = SpecFile::new(2_000.0, 230.0, 24.0);
    file.phase = td_materials::Phase::Single;
    let result = evaluated(&file);

    let report = render_text(&file, &result);
    assert!(!report.contains("Connection Type:"));
    // single-phase current formula is the plain rating over voltage
    assert!(report.contains("I1 = P/V1 = 2000/230"));
}

#[test]
fn noise_rows_follow_the_limit() {
    let mut file = SpecFile::new(50_000.0, 11_000.0, 415.0);
    let quiet = render_text(&file, &evaluated(&file));
    assert!(!quiet.contains("Noise Level:"));
    assert!(!quiet.contains("8. Noise Calculation:"));
    // later steps keep their numbers either way
    assert!(quiet.contains("9. Mechanical Design:"));

    file.limits.noise_limit_db = Some(65.0);
    let noisy = render_text(&file, &evaluated(&file));
    assert!(noisy.contains("Noise Limit:"));
    assert!(noisy.contains("Noise Level:"));
    assert!(noisy.contains("8. Noise Calculation:"));
    assert!(noisy.contains("Total noise level:"));
}

#[test]
fn methodology_substitutes_the_sizing_constant() {
    let small = SpecFile::new(500.0, 230.0, 12.0);
    let report = render_text(&small, &evaluated(&small));
    assert!(report.contains("0.9 × sqrt(500)"));

    let large = SpecFile::new(50_000.0, 11_000.0, 415.0);
    let report = render_text(&large, &evaluated(&large));
    assert!(report.contains("1.1 × sqrt(50000)"));
}

#[test]
fn diagram_reflects_the_evaluated_core() {
    let mut file = SpecFile::new(25_000.0, 11_000.0, 415.0);
    file.core_shape = td_materials::CoreShape::Toroidal;
    let result = evaluated(&file);

    let svg = render_diagram(&result.core);
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Toroidal"));
    assert!(svg.contains(&format!(
        "Window: Ø{:.0} mm",
        result.core.window_width_mm
    )));
}
