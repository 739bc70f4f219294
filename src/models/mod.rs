/// ML модели: параметры обученных оценщиков и их предсказание

pub mod ensemble;
pub mod linear;
pub mod naive_bayes;
pub mod svm;
pub mod tree;

pub use ensemble::{VotingClassifier, VotingRegressor};
pub use linear::{LinearRegression, LogisticRegression};
pub use naive_bayes::GaussianNb;
pub use svm::{Kernel, Svc, Svr};
pub use tree::{DecisionTree, GradientBoostingClassifier, GradientBoostingRegressor, RandomForest};

use ndarray::{Array1, Array2, ArrayView1};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ModelError;

/// Регрессор: нормализованный вектор -> магнитуда
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegressionModel {
    Linear(LinearRegression),
    Svr(Svr),
    RandomForest(RandomForest),
    GradientBoosting(GradientBoostingRegressor),
    Voting(VotingRegressor),
}

impl RegressionModel {
    pub fn predict(&self, x: ArrayView1<f64>) -> Result<f64, ModelError> {
        let value = match self {
            RegressionModel::Linear(m) => m.predict(x)?,
            RegressionModel::Svr(m) => m.predict(x)?,
            RegressionModel::RandomForest(m) => m.predict(x)?,
            RegressionModel::GradientBoosting(m) => m.predict(x)?,
            RegressionModel::Voting(m) => m.predict(x)?,
        };
        finite(value)
    }
}

/// Классификатор: нормализованный вектор -> индекс класса
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassificationModel {
    GaussianNb(GaussianNb),
    LogisticRegression(LogisticRegression),
    Svc(Svc),
    GradientBoosting(GradientBoostingClassifier),
    Voting(VotingClassifier),
}

impl ClassificationModel {
    pub fn predict(&self, x: ArrayView1<f64>) -> Result<usize, ModelError> {
        match self {
            ClassificationModel::Svc(m) => m.predict(x),
            ClassificationModel::Voting(m) => m.predict(x),
            _ => Ok(argmax(self.predict_proba(x)?.view())),
        }
    }

    /// Вероятности классов; у SVC их нет
    pub fn predict_proba(&self, x: ArrayView1<f64>) -> Result<Array1<f64>, ModelError> {
        match self {
            ClassificationModel::GaussianNb(m) => m.predict_proba(x),
            ClassificationModel::LogisticRegression(m) => m.predict_proba(x),
            ClassificationModel::Svc(_) => Err(ModelError::NoProbabilities("svc")),
            ClassificationModel::GradientBoosting(m) => m.predict_proba(x),
            ClassificationModel::Voting(m) => m.predict_proba(x),
        }
    }

    pub fn n_classes(&self) -> usize {
        match self {
            ClassificationModel::GaussianNb(m) => m.n_classes(),
            ClassificationModel::LogisticRegression(m) => m.n_classes(),
            ClassificationModel::Svc(m) => m.n_classes(),
            ClassificationModel::GradientBoosting(m) => m.n_classes(),
            ClassificationModel::Voting(m) => m.n_classes(),
        }
    }
}

pub(crate) fn check_features(expected: usize, x: ArrayView1<f64>) -> Result<(), ModelError> {
    if x.len() != expected {
        return Err(ModelError::ShapeMismatch {
            expected,
            got: x.len(),
        });
    }
    Ok(())
}

pub(crate) fn finite(value: f64) -> Result<f64, ModelError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ModelError::NonFinite(value))
    }
}

/// Первый максимум, как np.argmax
pub(crate) fn argmax(values: ArrayView1<f64>) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate() {
        if *v > values[best] {
            best = i;
        }
    }
    best
}

pub(crate) fn softmax(scores: &Array1<f64>) -> Array1<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exp = scores.mapv(|s| (s - max).exp());
    let sum = exp.sum();
    exp / sum
}

pub(crate) fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Матрица из JSON списка строк
pub(crate) fn matrix<'de, D>(deserializer: D) -> Result<Array2<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows: Vec<Vec<f64>> = Vec::deserialize(deserializer)?;
    let n_rows = rows.len();
    let n_cols = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|r| r.len() != n_cols) {
        return Err(serde::de::Error::custom("matrix rows have different lengths"));
    }
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((n_rows, n_cols), flat).map_err(serde::de::Error::custom)
}

pub(crate) fn serialize_matrix<S>(m: &Array2<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let rows: Vec<Vec<f64>> = m.rows().into_iter().map(|r| r.to_vec()).collect();
    rows.serialize(serializer)
}
