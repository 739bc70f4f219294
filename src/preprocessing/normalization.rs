//! Нормализация признаков обученным скейлером

use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Параметры скейлера, экспортированные после обучения
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataNormalizer {
    /// (x - mean) / scale
    Standard { mean: Vec<f64>, scale: Vec<f64> },
    /// (x - min) / (max - min), растянутое на feature_range
    MinMax {
        data_min: Vec<f64>,
        data_max: Vec<f64>,
        #[serde(default = "default_feature_range")]
        feature_range: (f64, f64),
    },
}

fn default_feature_range() -> (f64, f64) {
    (0.0, 1.0)
}

impl DataNormalizer {
    pub fn n_features(&self) -> usize {
        match self {
            DataNormalizer::Standard { mean, .. } => mean.len(),
            DataNormalizer::MinMax { data_min, .. } => data_min.len(),
        }
    }

    /// Проверка согласованности длин параметров
    pub fn validate(&self) -> Result<(), String> {
        let (a, b) = match self {
            DataNormalizer::Standard { mean, scale } => (mean.len(), scale.len()),
            DataNormalizer::MinMax {
                data_min, data_max, ..
            } => (data_min.len(), data_max.len()),
        };
        if a == 0 {
            return Err("scaler has no features".to_string());
        }
        if a != b {
            return Err(format!("scaler parameter lengths differ: {} vs {}", a, b));
        }
        Ok(())
    }

    pub fn transform(&self, x: ArrayView1<f64>) -> Result<Array1<f64>, ModelError> {
        let expected = self.n_features();
        if x.len() != expected {
            return Err(ModelError::ShapeMismatch {
                expected,
                got: x.len(),
            });
        }

        let normalized = match self {
            DataNormalizer::Standard { mean, scale } => x
                .iter()
                .enumerate()
                .map(|(i, val)| (val - mean[i]) / non_zero(scale[i]))
                .collect(),
            DataNormalizer::MinMax {
                data_min,
                data_max,
                feature_range: (low, high),
            } => x
                .iter()
                .enumerate()
                .map(|(i, val)| {
                    let scale = (high - low) / non_zero(data_max[i] - data_min[i]);
                    (val - data_min[i]) * scale + low
                })
                .collect(),
        };

        Ok(normalized)
    }
}

// Константные признаки при обучении дают нулевой разброс
fn non_zero(value: f64) -> f64 {
    if value.abs() < 1e-10 {
        1.0
    } else {
        value
    }
}
