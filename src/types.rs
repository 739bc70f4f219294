/// Типы данных API предсказаний

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Провалидированный запрос на предсказание
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionInput {
    pub latitude: f64,
    pub longitude: f64,
    pub depth: f64,
    pub stations: i64,
}

/// Ответ: имя модели -> предсказание, ключи отсортированы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionOutput {
    #[serde(rename = "Regression")]
    pub regression: BTreeMap<String, f64>,
    #[serde(rename = "Classification")]
    pub classification: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthOutput {
    pub status: String,
    pub models: usize,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}
