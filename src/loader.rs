//! Загрузка артефактов при старте

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::config::{CLASSIFICATION_DIR, PREPROCESSING_DIR, REGRESSION_DIR};
use crate::engine::PredictionEngine;
use crate::error::ArtifactError;
use crate::models::{ClassificationModel, RegressionModel};
use crate::preprocessing::{DataNormalizer, FeatureEngineer, LabelEncoder, Preprocessor};
use crate::registry::ModelRegistry;

pub const SCALER_FILE: &str = "scaler.json";
pub const LABEL_ENCODER_FILE: &str = "label_encoder.json";
pub const FEATURE_COLUMNS_FILE: &str = "feature_columns.json";

/// Имя в ответе и файл модели, в порядке загрузки
pub const REGRESSION_MODELS: [(&str, &str); 5] = [
    ("Linear Regression", "regression_linear_regression.json"),
    ("SVR", "regression_support_vector_regression.json"),
    ("Random Forest", "regression_random_forest_regression.json"),
    ("XGBoost", "regression_xgboost_regression.json"),
    ("Voting Regressor", "regression_voting_regressor.json"),
];

pub const CLASSIFICATION_MODELS: [(&str, &str); 5] = [
    ("Naive Bayes", "classification_naive_bayes.json"),
    ("Logistic Regression", "classification_logistic_regression.json"),
    ("SVM", "classification_svm_classification.json"),
    ("XGBoost", "classification_xgboost_classification.json"),
    ("Voting Classifier", "classification_voting_classifier.json"),
];

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    if !path.is_file() {
        return Err(ArtifactError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Loaded {}", path.display());
    Ok(value)
}

fn invalid(path: PathBuf, reason: String) -> ArtifactError {
    ArtifactError::Invalid { path, reason }
}

pub fn load_preprocessor(base_dir: &Path) -> Result<Preprocessor, ArtifactError> {
    let dir = base_dir.join(PREPROCESSING_DIR);

    let scaler_path = dir.join(SCALER_FILE);
    let scaler: DataNormalizer = load_json(&scaler_path)?;
    scaler
        .validate()
        .map_err(|reason| invalid(scaler_path.clone(), reason))?;

    let encoder_path = dir.join(LABEL_ENCODER_FILE);
    let label_encoder: LabelEncoder = load_json(&encoder_path)?;
    label_encoder
        .validate()
        .map_err(|reason| invalid(encoder_path, reason))?;

    let columns_path = dir.join(FEATURE_COLUMNS_FILE);
    let columns: Vec<String> = load_json(&columns_path)?;
    let features =
        FeatureEngineer::new(columns).map_err(|reason| invalid(columns_path.clone(), reason))?;

    Preprocessor::new(features, scaler, label_encoder).map_err(|reason| invalid(columns_path, reason))
}

pub fn load_registry(base_dir: &Path, n_labels: usize) -> Result<ModelRegistry, ArtifactError> {
    let mut registry = ModelRegistry::new();

    let reg_dir = base_dir.join(REGRESSION_DIR);
    for (name, file) in REGRESSION_MODELS {
        let model: RegressionModel = load_json(&reg_dir.join(file))?;
        registry.register_regressor(name, model);
    }

    let clf_dir = base_dir.join(CLASSIFICATION_DIR);
    for (name, file) in CLASSIFICATION_MODELS {
        let path = clf_dir.join(file);
        let model: ClassificationModel = load_json(&path)?;
        if model.n_classes() > n_labels {
            return Err(invalid(
                path,
                format!(
                    "model has {} classes but the label encoder knows {}",
                    model.n_classes(),
                    n_labels
                ),
            ));
        }
        registry.register_classifier(name, model);
    }

    Ok(registry)
}

/// Скейлер, кодировщик, колонки, затем пять регрессоров и пять классификаторов
pub fn load_engine(base_dir: &Path) -> Result<PredictionEngine, ArtifactError> {
    tracing::info!("Attempting to load models from: {}", base_dir.display());

    let preprocessor = load_preprocessor(base_dir)?;
    let registry = load_registry(base_dir, preprocessor.label_encoder.len())?;

    tracing::info!(
        "All models and preprocessing objects loaded successfully ({} models)",
        registry.len()
    );
    Ok(PredictionEngine::new(preprocessor, registry))
}
