use knapbench::{load_settings, ExperimentSettings, SeedPolicy, DEFAULT_SEED};
use std::{fs, path::PathBuf};
use tempfile::tempdir;

#[test]
fn test_default_settings() {
    let settings = ExperimentSettings::default();
    assert_eq!(settings.sizes, vec![50, 100, 200, 500]);
    assert_eq!(settings.seed, DEFAULT_SEED);
    assert_eq!(settings.seed_policy, SeedPolicy::PerSize);
    assert_eq!(settings.output, PathBuf::from("resultados_experimentos.csv"));
}

#[test]
fn test_load_inline_settings() {
    let settings = load_settings(r#"{"sizes": [10, 20], "seed_policy": "stream"}"#).unwrap();
    assert_eq!(settings.sizes, vec![10, 20]);
    assert_eq!(settings.seed_policy, SeedPolicy::Stream);
    assert_eq!(settings.seed, DEFAULT_SEED);
    assert_eq!(
        settings.max_table_cells,
        ExperimentSettings::default().max_table_cells
    );
}

#[test]
fn test_load_settings_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"seed": 7, "output": "out.csv"}"#).unwrap();

    let settings = load_settings(path.to_str().unwrap()).unwrap();
    assert_eq!(settings.seed, 7);
    assert_eq!(settings.output, PathBuf::from("out.csv"));
}

#[test]
fn test_load_invalid_settings() {
    assert!(load_settings("{not json").is_err());
    assert!(load_settings(r#"{"seed_policy": "random"}"#).is_err());
}

#[test]
fn test_seed_policy() {
    assert_eq!(SeedPolicy::PerSize.seed_for(42, 100), Some(142));
    assert_eq!(SeedPolicy::Fixed.seed_for(42, 100), Some(42));
    assert_eq!(SeedPolicy::Stream.seed_for(42, 100), None);
    assert_eq!("fixed".parse::<SeedPolicy>().unwrap(), SeedPolicy::Fixed);
    assert!("other".parse::<SeedPolicy>().is_err());
}
