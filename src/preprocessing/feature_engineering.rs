//! Сборка строки признаков в порядке колонок обучения

use ndarray::{array, Array1};

use crate::types::PredictionInput;

/// Признаки, которые сервис умеет заполнять из запроса
pub const N_FEATURES: usize = 4;

#[derive(Debug, Clone)]
pub struct FeatureEngineer {
    columns: Vec<String>,
}

impl FeatureEngineer {
    pub fn new(columns: Vec<String>) -> Result<Self, String> {
        if columns.len() != N_FEATURES {
            return Err(format!(
                "expected {} feature columns, got {}: {:?}",
                N_FEATURES,
                columns.len(),
                columns
            ));
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Одна строка: широта, долгота, глубина, число станций.
    /// Колонки при обучении шли в том же порядке, имена только подписи.
    pub fn extract_features(&self, input: &PredictionInput) -> Array1<f64> {
        array![
            input.latitude,
            input.longitude,
            input.depth,
            input.stations as f64
        ]
    }
}
