//! Небольшой, но полный набор артефактов для интеграционных тестов

#![allow(dead_code)]

use std::path::Path;

use serde_json::{json, Value};
use tempfile::TempDir;

use quake_predict::config::{CLASSIFICATION_DIR, PREPROCESSING_DIR, REGRESSION_DIR};

pub const CLASSES: [&str; 3] = ["Light", "Moderate", "Strong"];

pub fn write_artifact(base: &Path, dir: &str, file: &str, value: &Value) {
    let dir = base.join(dir);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(file), serde_json::to_vec_pretty(value).unwrap()).unwrap();
}

fn linear() -> Value {
    json!({"kind": "linear", "coef": [0.1, 0.05, 0.2, 0.3], "intercept": 3.5})
}

fn forest() -> Value {
    json!({
        "kind": "random_forest",
        "trees": [
            {
                "children_left": [1, -1, -1],
                "children_right": [2, -1, -1],
                "feature": [3, -2, -2],
                "threshold": [0.0, -2.0, -2.0],
                "value": [0.0, 3.1, 4.2]
            },
            {
                "children_left": [1, -1, -1],
                "children_right": [2, -1, -1],
                "feature": [2, -2, -2],
                "threshold": [-0.2, -2.0, -2.0],
                "value": [0.0, 3.9, 3.3]
            }
        ]
    })
}

fn stump(feature: i64, threshold: f64, low: f64, high: f64) -> Value {
    json!({
        "left_children": [1, -1, -1],
        "right_children": [2, -1, -1],
        "split_indices": [feature, 0, 0],
        "split_conditions": [threshold, low, high],
        "default_left": [true, false, false]
    })
}

fn naive_bayes() -> Value {
    json!({
        "kind": "gaussian_nb",
        "class_prior": [0.5, 0.3, 0.2],
        "theta": [[0.0, 0.0, -0.5, -0.5], [0.0, 0.0, 0.0, 0.5], [0.0, 0.0, 0.5, 1.5]],
        "var": [[1.0, 1.0, 1.0, 1.0], [1.0, 1.0, 1.0, 1.0], [1.0, 1.0, 1.0, 1.0]]
    })
}

fn logistic() -> Value {
    json!({
        "kind": "logistic_regression",
        "coef": [[0.0, 0.0, -1.0, -1.0], [0.0, 0.0, 0.2, 0.5], [0.0, 0.0, 1.0, 1.5]],
        "intercept": [0.5, 0.2, -0.7]
    })
}

/// Файлы в раскладке сервиса под `base`
pub fn write_bundle(base: &Path) {
    write_artifact(
        base,
        PREPROCESSING_DIR,
        "scaler.json",
        &json!({"kind": "standard", "mean": [35.0, -118.0, 15.0, 20.0], "scale": [5.0, 5.0, 10.0, 10.0]}),
    );
    write_artifact(base, PREPROCESSING_DIR, "label_encoder.json", &json!({"classes": CLASSES}));
    write_artifact(
        base,
        PREPROCESSING_DIR,
        "feature_columns.json",
        &json!(["Latitude", "Longitude", "Depth", "No_of_Stations"]),
    );

    write_artifact(base, REGRESSION_DIR, "regression_linear_regression.json", &linear());
    write_artifact(
        base,
        REGRESSION_DIR,
        "regression_support_vector_regression.json",
        &json!({
            "kind": "svr",
            "kernel": {"type": "rbf", "gamma": 0.25},
            "support_vectors": [[0.0, 0.0, 0.0, 0.0], [1.0, 1.0, 1.0, 1.0]],
            "dual_coef": [0.5, -0.5],
            "intercept": 3.8
        }),
    );
    write_artifact(base, REGRESSION_DIR, "regression_random_forest_regression.json", &forest());
    write_artifact(
        base,
        REGRESSION_DIR,
        "regression_xgboost_regression.json",
        &json!({
            "kind": "gradient_boosting",
            "base_score": 3.6,
            "trees": [stump(2, 0.0, -0.2, 0.3), stump(3, 1.0, 0.05, 0.4)]
        }),
    );
    write_artifact(
        base,
        REGRESSION_DIR,
        "regression_voting_regressor.json",
        &json!({"kind": "voting", "estimators": [linear(), forest()], "weights": [1.0, 2.0]}),
    );

    write_artifact(base, CLASSIFICATION_DIR, "classification_naive_bayes.json", &naive_bayes());
    write_artifact(base, CLASSIFICATION_DIR, "classification_logistic_regression.json", &logistic());
    write_artifact(
        base,
        CLASSIFICATION_DIR,
        "classification_svm_classification.json",
        &json!({
            "kind": "svc",
            "kernel": {"type": "linear"},
            "support_vectors": [[0.0, 0.0, -1.0, -1.0], [0.0, 0.0, 0.0, 0.0], [0.0, 0.0, 1.0, 1.0]],
            "n_support": [1, 1, 1],
            "dual_coef": [[1.0, 1.0, 0.5], [1.0, -1.0, -1.0]],
            "intercept": [0.1, 0.0, -0.1]
        }),
    );
    write_artifact(
        base,
        CLASSIFICATION_DIR,
        "classification_xgboost_classification.json",
        &json!({
            "kind": "gradient_boosting",
            "n_classes": 3,
            "base_score": 0.5,
            "trees": [stump(3, 0.0, 0.8, -0.4), stump(3, 0.0, 0.1, 0.3), stump(3, 0.0, -0.6, 0.5)]
        }),
    );
    write_artifact(
        base,
        CLASSIFICATION_DIR,
        "classification_voting_classifier.json",
        &json!({"kind": "voting", "voting": "soft", "estimators": [naive_bayes(), logistic()]}),
    );
}

pub fn fixture_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_bundle(dir.path());
    dir
}
