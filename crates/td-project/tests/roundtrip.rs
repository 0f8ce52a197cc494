use td_materials::{ConnectionType, CoolingType, CoreMaterial, Phase};
use td_project::schema::SpecFile;
use td_project::{ProjectError, load_json, load_yaml, save_json, save_yaml, validate_spec};

#[test]
fn minimal_yaml_fills_defaults() {
    let yaml = r#"
power_va: 100000.0
primary_voltage_v: 11000.0
secondary_voltage_v: 415.0
"#;
    let file: SpecFile = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(file.name, "");
    assert_eq!(file.frequency_hz, 50.0);
    assert_eq!(file.phase, Phase::Three);
    assert_eq!(file.connection, ConnectionType::DeltaWye);
    assert_eq!(file.core_material, CoreMaterial::Crgo);
    assert_eq!(file.cooling, CoolingType::Onan);
    assert_eq!(file.target_efficiency, 0.95);
    assert_eq!(file.regulation, 0.05);
    assert_eq!(file.ambient_c, 30.0);
    assert_eq!(file.altitude_m, 0.0);
    assert_eq!(file.harmonic_factor, 1.0);
    assert_eq!(file.limits.max_temp_rise_c, 65.0);
    assert!(file.limits.max_losses_w.is_none());
}

#[test]
fn partial_limits_block_keeps_rise_default() {
    let yaml = r#"
power_va: 100000.0
primary_voltage_v: 11000.0
secondary_voltage_v: 415.0
limits:
  max_losses_w: 1800.0
"#;
    let file: SpecFile = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(file.limits.max_temp_rise_c, 65.0);
    assert_eq!(file.limits.max_losses_w, Some(1800.0));
    assert!(file.limits.max_cost_usd.is_none());
}

#[test]
fn unknown_material_string_fails_parse() {
    let yaml = r#"
power_va: 100000.0
primary_voltage_v: 11000.0
secondary_voltage_v: 415.0
core_material: Unobtainium
"#;
    let parsed: Result<SpecFile, _> = serde_yaml::from_str(yaml);
    assert!(parsed.is_err());
}

#[test]
fn roundtrip_yaml_custom_document() {
    let mut file = SpecFile::new(250_000.0, 33_000.0, 11_000.0);
    file.name = "Plant feeder".to_string();
    file.connection = ConnectionType::WyeWye;
    file.cooling = CoolingType::Onaf;
    file.harmonic_factor = 1.2;
    file.limits.noise_limit_db = Some(72.0);

    let path = std::env::temp_dir().join("td_project_roundtrip_custom.yaml");
    save_yaml(&path, &file).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(file, loaded);
}

#[test]
fn roundtrip_json_custom_document() {
    let mut file = SpecFile::new(5_000.0, 230.0, 24.0);
    file.phase = Phase::Single;
    file.cooling = CoolingType::AirNatural;

    let path = std::env::temp_dir().join("td_project_roundtrip_custom.json");
    save_json(&path, &file).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(file, loaded);
}

#[test]
fn load_rejects_stratospheric_altitude() {
    let yaml = r#"
power_va: 100000.0
primary_voltage_v: 11000.0
secondary_voltage_v: 415.0
altitude_m: 9500.0
"#;
    let path = std::env::temp_dir().join("td_project_bad_altitude.yaml");
    std::fs::write(&path, yaml).unwrap();

    let err = load_yaml(&path).unwrap_err();
    assert!(matches!(err, ProjectError::Validation(_)));
}

#[test]
fn validator_reports_every_problem() {
    let mut file = SpecFile::new(0.0, -11_000.0, 415.0);
    file.regulation = 1.5;

    let problems = validate_spec(&file);
    assert_eq!(problems.len(), 3);

    let rendered: Vec<String> = problems.iter().map(|p| p.to_string()).collect();
    assert!(rendered.iter().any(|p| p.contains("power_va")));
    assert!(rendered.iter().any(|p| p.contains("primary_voltage_v")));
    assert!(rendered.iter().any(|p| p.contains("regulation")));
}

#[test]
fn compiled_spec_passes_engine_validation() {
    let mut file = SpecFile::new(100_000.0, 11_000.0, 415.0);
    file.limits.max_weight_kg = Some(400.0);

    let spec = file.compile();
    spec.validate().unwrap();
    assert_eq!(spec.power_va, 100_000.0);
    assert_eq!(spec.limits.max_weight_kg, Some(400.0));
    assert_eq!(spec.limits.max_temp_rise_c, 65.0);
}
