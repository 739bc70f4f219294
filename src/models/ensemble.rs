//! Голосующие ансамбли поверх остальных моделей

use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use super::{argmax, ClassificationModel, RegressionModel};
use crate::error::ModelError;

fn resolve_weights(weights: &Option<Vec<f64>>, n: usize) -> Result<Vec<f64>, ModelError> {
    if n == 0 {
        return Err(ModelError::Malformed("voting ensemble has no estimators".into()));
    }
    match weights {
        None => Ok(vec![1.0; n]),
        Some(w) if w.len() == n => Ok(w.clone()),
        Some(w) => Err(ModelError::Malformed(format!(
            "{} weights for {} estimators",
            w.len(),
            n
        ))),
    }
}

/// Взвешенное среднее предсказаний регрессоров
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VotingRegressor {
    pub estimators: Vec<RegressionModel>,
    #[serde(default)]
    pub weights: Option<Vec<f64>>,
}

impl VotingRegressor {
    pub fn predict(&self, x: ArrayView1<f64>) -> Result<f64, ModelError> {
        let weights = resolve_weights(&self.weights, self.estimators.len())?;
        let total: f64 = weights.iter().sum();
        if total == 0.0 {
            return Err(ModelError::Malformed("voting weights sum to zero".into()));
        }

        let mut sum = 0.0;
        for (model, w) in self.estimators.iter().zip(&weights) {
            sum += w * model.predict(x)?;
        }
        Ok(sum / total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Voting {
    #[default]
    Hard,
    Soft,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VotingClassifier {
    #[serde(default)]
    pub voting: Voting,
    pub estimators: Vec<ClassificationModel>,
    #[serde(default)]
    pub weights: Option<Vec<f64>>,
}

impl VotingClassifier {
    pub fn n_classes(&self) -> usize {
        self.estimators
            .iter()
            .map(ClassificationModel::n_classes)
            .max()
            .unwrap_or(0)
    }

    pub fn predict(&self, x: ArrayView1<f64>) -> Result<usize, ModelError> {
        match self.voting {
            Voting::Soft => Ok(argmax(self.predict_proba(x)?.view())),
            Voting::Hard => {
                let weights = resolve_weights(&self.weights, self.estimators.len())?;
                let mut votes = Array1::<f64>::zeros(self.n_classes());
                for (model, w) in self.estimators.iter().zip(&weights) {
                    let class = model.predict(x)?;
                    let n_classes = votes.len();
                    let slot = votes.get_mut(class).ok_or(ModelError::UnknownClass {
                        index: class,
                        n_classes,
                    })?;
                    *slot += w;
                }
                Ok(argmax(votes.view()))
            }
        }
    }

    pub fn predict_proba(&self, x: ArrayView1<f64>) -> Result<Array1<f64>, ModelError> {
        if self.voting == Voting::Hard {
            return Err(ModelError::NoProbabilities("hard voting"));
        }
        let weights = resolve_weights(&self.weights, self.estimators.len())?;
        let total: f64 = weights.iter().sum();
        if total == 0.0 {
            return Err(ModelError::Malformed("voting weights sum to zero".into()));
        }

        let mut avg = Array1::<f64>::zeros(self.n_classes());
        for (model, w) in self.estimators.iter().zip(&weights) {
            let proba = model.predict_proba(x)?;
            if proba.len() != avg.len() {
                return Err(ModelError::Malformed(format!(
                    "estimator returned {} probabilities, ensemble has {} classes",
                    proba.len(),
                    avg.len()
                )));
            }
            avg.scaled_add(*w, &proba);
        }
        Ok(avg / total)
    }
}
