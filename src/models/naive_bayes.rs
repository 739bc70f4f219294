//! Гауссовский наивный байес

use std::f64::consts::PI;

use ndarray::{Array1, Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use super::{check_features, matrix, serialize_matrix, softmax};
use crate::error::ModelError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaussianNb {
    pub class_prior: Vec<f64>,
    /// Средние по классам, [n_classes, n_features]
    #[serde(deserialize_with = "matrix", serialize_with = "serialize_matrix")]
    pub theta: Array2<f64>,
    /// Дисперсии по классам (уже со сглаживанием)
    #[serde(deserialize_with = "matrix", serialize_with = "serialize_matrix")]
    pub var: Array2<f64>,
}

impl GaussianNb {
    pub fn n_classes(&self) -> usize {
        self.class_prior.len()
    }

    fn joint_log_likelihood(&self, x: ArrayView1<f64>) -> Result<Array1<f64>, ModelError> {
        let n_classes = self.n_classes();
        if self.theta.shape() != self.var.shape() || self.theta.nrows() != n_classes {
            return Err(ModelError::Malformed(format!(
                "naive bayes shapes disagree: prior {}, theta {:?}, var {:?}",
                n_classes,
                self.theta.shape(),
                self.var.shape()
            )));
        }
        check_features(self.theta.ncols(), x)?;

        let mut jll = Array1::zeros(n_classes);
        for c in 0..n_classes {
            let mut log_likelihood = self.class_prior[c].ln();
            for (j, value) in x.iter().enumerate() {
                let var = self.var[[c, j]];
                if var <= 0.0 {
                    return Err(ModelError::Malformed(format!(
                        "non-positive variance for class {} feature {}",
                        c, j
                    )));
                }
                let diff = value - self.theta[[c, j]];
                log_likelihood -= 0.5 * (2.0 * PI * var).ln() + diff * diff / (2.0 * var);
            }
            jll[c] = log_likelihood;
        }
        Ok(jll)
    }

    pub fn predict_proba(&self, x: ArrayView1<f64>) -> Result<Array1<f64>, ModelError> {
        Ok(softmax(&self.joint_log_likelihood(x)?))
    }
}
