//! Ошибки загрузки артефактов, инференса и HTTP слоя

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Фатальные ошибки старта: без артефактов сервис не поднимается
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Artifact not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid artifact {}: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Feature count mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("Class index {index} is outside of {n_classes} known labels")]
    UnknownClass { index: usize, n_classes: usize },

    #[error("Unknown label: {0}")]
    UnknownLabel(String),

    #[error("Model produced a non-finite value: {0}")]
    NonFinite(f64),

    #[error("Model does not provide class probabilities: {0}")]
    NoProbabilities(&'static str),

    #[error("Malformed model parameters: {0}")]
    Malformed(String),
}

pub const PREDICTION_FAILED: &str = "An internal error occurred during model prediction.";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Prediction failed: {0}")]
    Prediction(#[from] ModelError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Prediction(e) => {
                tracing::error!(detail = %e, "An error occurred during prediction");
                (StatusCode::INTERNAL_SERVER_ERROR, PREDICTION_FAILED.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
