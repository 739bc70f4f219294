//! Опорные векторы: SVR и SVC (one-vs-one как в libsvm)

use ndarray::{Array1, Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use super::{argmax, check_features, matrix, serialize_matrix};
use crate::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Kernel {
    Linear,
    Rbf { gamma: f64 },
    Poly { gamma: f64, coef0: f64, degree: i32 },
    Sigmoid { gamma: f64, coef0: f64 },
}

impl Kernel {
    pub fn compute(&self, a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
        match *self {
            Kernel::Linear => a.dot(&b),
            Kernel::Rbf { gamma } => {
                let dist: f64 = a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum();
                (-gamma * dist).exp()
            }
            Kernel::Poly {
                gamma,
                coef0,
                degree,
            } => (gamma * a.dot(&b) + coef0).powi(degree),
            Kernel::Sigmoid { gamma, coef0 } => (gamma * a.dot(&b) + coef0).tanh(),
        }
    }
}

fn kernel_row(
    kernel: &Kernel,
    support_vectors: &Array2<f64>,
    x: ArrayView1<f64>,
) -> Result<Array1<f64>, ModelError> {
    check_features(support_vectors.ncols(), x)?;
    Ok(support_vectors
        .rows()
        .into_iter()
        .map(|sv| kernel.compute(sv, x))
        .collect())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Svr {
    pub kernel: Kernel,
    #[serde(deserialize_with = "matrix", serialize_with = "serialize_matrix")]
    pub support_vectors: Array2<f64>,
    pub dual_coef: Vec<f64>,
    pub intercept: f64,
}

impl Svr {
    pub fn predict(&self, x: ArrayView1<f64>) -> Result<f64, ModelError> {
        if self.dual_coef.len() != self.support_vectors.nrows() {
            return Err(ModelError::Malformed(format!(
                "svr has {} support vectors but {} dual coefficients",
                self.support_vectors.nrows(),
                self.dual_coef.len()
            )));
        }
        let k = kernel_row(&self.kernel, &self.support_vectors, x)?;
        Ok(k.dot(&Array1::from(self.dual_coef.clone())) + self.intercept)
    }
}

/// Мультиклассовый SVC.
///
/// Опорные векторы сгруппированы по классам (`n_support`), `dual_coef` имеет
/// `n_classes - 1` строк, `intercept` по одному на пару классов в порядке
/// (0,1), (0,2), ..., (1,2), ... Положительное решение голосует за меньший
/// индекс пары.
///
/// Знаки как в libsvm: из sklearn выгружаются `_dual_coef_` и `_intercept_`.
/// Публичные `dual_coef_` и `intercept_` для двух классов имеют обратный знак
/// и перевернут каждое предсказание.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Svc {
    pub kernel: Kernel,
    #[serde(deserialize_with = "matrix", serialize_with = "serialize_matrix")]
    pub support_vectors: Array2<f64>,
    pub n_support: Vec<usize>,
    #[serde(deserialize_with = "matrix", serialize_with = "serialize_matrix")]
    pub dual_coef: Array2<f64>,
    pub intercept: Vec<f64>,
}

impl Svc {
    pub fn n_classes(&self) -> usize {
        self.n_support.len()
    }

    fn validate(&self) -> Result<(), ModelError> {
        let n_classes = self.n_classes();
        let n_sv = self.support_vectors.nrows();
        if n_classes < 2 {
            return Err(ModelError::Malformed("svc needs at least two classes".into()));
        }
        if self.n_support.iter().sum::<usize>() != n_sv {
            return Err(ModelError::Malformed(format!(
                "svc n_support sums to {} but there are {} support vectors",
                self.n_support.iter().sum::<usize>(),
                n_sv
            )));
        }
        if self.dual_coef.nrows() != n_classes - 1 || self.dual_coef.ncols() != n_sv {
            return Err(ModelError::Malformed(format!(
                "svc dual_coef has shape {:?}, expected [{}, {}]",
                self.dual_coef.shape(),
                n_classes - 1,
                n_sv
            )));
        }
        if self.intercept.len() != n_classes * (n_classes - 1) / 2 {
            return Err(ModelError::Malformed(format!(
                "svc has {} intercepts for {} classes",
                self.intercept.len(),
                n_classes
            )));
        }
        Ok(())
    }

    pub fn predict(&self, x: ArrayView1<f64>) -> Result<usize, ModelError> {
        self.validate()?;
        let k = kernel_row(&self.kernel, &self.support_vectors, x)?;

        let n_classes = self.n_classes();
        let mut start = Vec::with_capacity(n_classes);
        let mut offset = 0;
        for &n in &self.n_support {
            start.push(offset);
            offset += n;
        }

        let mut votes = Array1::<f64>::zeros(n_classes);
        let mut pair = 0;
        for i in 0..n_classes {
            for j in (i + 1)..n_classes {
                let mut sum = self.intercept[pair];
                for s in start[i]..start[i] + self.n_support[i] {
                    sum += self.dual_coef[[j - 1, s]] * k[s];
                }
                for s in start[j]..start[j] + self.n_support[j] {
                    sum += self.dual_coef[[i, s]] * k[s];
                }

                if sum > 0.0 {
                    votes[i] += 1.0;
                } else {
                    votes[j] += 1.0;
                }
                pair += 1;
            }
        }

        Ok(argmax(votes.view()))
    }
}
