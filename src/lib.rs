//! Quake Predict - сервис предсказания магнитуды землетрясений

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod models;
pub mod preprocessing;
pub mod registry;
pub mod types;

pub use types::*;
pub use models::*;
pub use preprocessing::*;

// Re-export для удобства
pub use api::{create_router, AppState};
pub use engine::PredictionEngine;
pub use error::{ApiError, ArtifactError, ModelError};
