//! Integration test: загрузка артефактов и движок предсказаний

mod common;

use quake_predict::config::{base_dir_from, ARTIFACTS_DIR, PREPROCESSING_DIR, REGRESSION_DIR};
use quake_predict::loader::{self, CLASSIFICATION_MODELS, REGRESSION_MODELS};
use quake_predict::{ArtifactError, PredictionInput};
use serde_json::json;

fn sample() -> PredictionInput {
    PredictionInput {
        latitude: 34.05,
        longitude: -118.25,
        depth: 10.0,
        stations: 25,
    }
}

#[test]
fn test_loads_all_ten_models() {
    let dir = common::fixture_dir();
    let engine = loader::load_engine(dir.path()).unwrap();
    assert_eq!(engine.registry().len(), 10);
    assert_eq!(engine.preprocessor().label_encoder.classes(), common::CLASSES);
}

#[test]
fn test_prediction_has_every_model() {
    let dir = common::fixture_dir();
    let engine = loader::load_engine(dir.path()).unwrap();
    let output = engine.predict(&sample()).unwrap();

    let reg_names: Vec<&str> = REGRESSION_MODELS.iter().map(|(n, _)| *n).collect();
    let clf_names: Vec<&str> = CLASSIFICATION_MODELS.iter().map(|(n, _)| *n).collect();
    assert_eq!(output.regression.len(), 5);
    assert_eq!(output.classification.len(), 5);
    for name in reg_names {
        assert!(output.regression[name].is_finite(), "{} is not finite", name);
    }
    for name in clf_names {
        assert!(common::CLASSES.contains(&output.classification[name].as_str()));
    }
}

#[test]
fn test_linear_regression_value() {
    let dir = common::fixture_dir();
    let engine = loader::load_engine(dir.path()).unwrap();
    let output = engine.predict(&sample()).unwrap();
    // Нормализовано: [-0.19, -0.05, -0.5, 0.5]
    assert!((output.regression["Linear Regression"] - 3.5285).abs() < 1e-9);
}

#[test]
fn test_prediction_is_deterministic() {
    let dir = common::fixture_dir();
    let engine = loader::load_engine(dir.path()).unwrap();
    assert_eq!(engine.predict(&sample()).unwrap(), engine.predict(&sample()).unwrap());
}

#[test]
fn test_missing_artifact_reports_path() {
    let dir = common::fixture_dir();
    let removed = dir
        .path()
        .join(REGRESSION_DIR)
        .join("regression_xgboost_regression.json");
    std::fs::remove_file(&removed).unwrap();

    match loader::load_engine(dir.path()) {
        Err(ArtifactError::NotFound(path)) => assert_eq!(path, removed),
        other => panic!("Expected NotFound, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_malformed_artifact_is_parse_error() {
    let dir = common::fixture_dir();
    std::fs::write(
        dir.path().join(PREPROCESSING_DIR).join("scaler.json"),
        b"not json",
    )
    .unwrap();
    assert!(matches!(
        loader::load_engine(dir.path()),
        Err(ArtifactError::Parse { .. })
    ));
}

#[test]
fn test_scaler_feature_count_must_match_columns() {
    let dir = common::fixture_dir();
    common::write_artifact(
        dir.path(),
        PREPROCESSING_DIR,
        "scaler.json",
        &json!({"kind": "standard", "mean": [0.0, 0.0, 0.0], "scale": [1.0, 1.0, 1.0]}),
    );
    assert!(matches!(
        loader::load_engine(dir.path()),
        Err(ArtifactError::Invalid { .. })
    ));
}

#[test]
fn test_classifier_with_too_many_classes_rejected() {
    let dir = common::fixture_dir();
    common::write_artifact(
        dir.path(),
        PREPROCESSING_DIR,
        "label_encoder.json",
        &json!({"classes": ["Light", "Moderate"]}),
    );
    assert!(matches!(
        loader::load_engine(dir.path()),
        Err(ArtifactError::Invalid { .. })
    ));
}

#[test]
fn test_nested_artifacts_directory() {
    let root = tempfile::tempdir().unwrap();
    common::write_bundle(&root.path().join(ARTIFACTS_DIR));

    let base = base_dir_from(root.path());
    assert_eq!(base, root.path().join(ARTIFACTS_DIR));
    assert!(loader::load_engine(&base).is_ok());
}
