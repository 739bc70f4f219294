/// Модуль предобработки данных

pub mod feature_engineering;
pub mod label_encoder;
pub mod normalization;

pub use feature_engineering::FeatureEngineer;
pub use label_encoder::LabelEncoder;
pub use normalization::DataNormalizer;

use ndarray::Array1;

use crate::error::ModelError;
use crate::types::PredictionInput;

/// Скейлер, кодировщик меток и порядок колонок, загруженные при старте
#[derive(Debug, Clone)]
pub struct Preprocessor {
    pub features: FeatureEngineer,
    pub scaler: DataNormalizer,
    pub label_encoder: LabelEncoder,
}

impl Preprocessor {
    pub fn new(
        features: FeatureEngineer,
        scaler: DataNormalizer,
        label_encoder: LabelEncoder,
    ) -> Result<Self, String> {
        if scaler.n_features() != features.columns().len() {
            return Err(format!(
                "scaler expects {} features but {} feature columns were loaded",
                scaler.n_features(),
                features.columns().len()
            ));
        }
        Ok(Self {
            features,
            scaler,
            label_encoder,
        })
    }

    pub fn transform(&self, input: &PredictionInput) -> Result<Array1<f64>, ModelError> {
        let row = self.features.extract_features(input);
        self.scaler.transform(row.view())
    }
}
