//! Линейные модели

use ndarray::{Array1, Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use super::{check_features, matrix, serialize_matrix, sigmoid, softmax};
use crate::error::ModelError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegression {
    pub coef: Vec<f64>,
    pub intercept: f64,
}

impl LinearRegression {
    pub fn predict(&self, x: ArrayView1<f64>) -> Result<f64, ModelError> {
        check_features(self.coef.len(), x)?;
        let pred = self
            .coef
            .iter()
            .zip(x.iter())
            .map(|(w, v)| w * v)
            .sum::<f64>()
            + self.intercept;
        Ok(pred)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiClass {
    #[default]
    Multinomial,
    Ovr,
}

/// Логистическая регрессия: одна строка коэффициентов для бинарного случая,
/// по строке на класс иначе
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    #[serde(deserialize_with = "matrix", serialize_with = "serialize_matrix")]
    pub coef: Array2<f64>,
    pub intercept: Vec<f64>,
    #[serde(default)]
    pub multi_class: MultiClass,
}

impl LogisticRegression {
    pub fn n_classes(&self) -> usize {
        match self.coef.nrows() {
            1 => 2,
            n => n,
        }
    }

    fn decision_function(&self, x: ArrayView1<f64>) -> Result<Array1<f64>, ModelError> {
        check_features(self.coef.ncols(), x)?;
        if self.intercept.len() != self.coef.nrows() {
            return Err(ModelError::Malformed(format!(
                "logistic regression has {} coefficient rows but {} intercepts",
                self.coef.nrows(),
                self.intercept.len()
            )));
        }
        Ok(self.coef.dot(&x) + Array1::from(self.intercept.clone()))
    }

    pub fn predict_proba(&self, x: ArrayView1<f64>) -> Result<Array1<f64>, ModelError> {
        let scores = self.decision_function(x)?;
        if scores.len() == 1 {
            let p = sigmoid(scores[0]);
            return Ok(Array1::from(vec![1.0 - p, p]));
        }

        let proba = match self.multi_class {
            MultiClass::Multinomial => softmax(&scores),
            MultiClass::Ovr => {
                let p = scores.mapv(sigmoid);
                let sum = p.sum();
                p / sum
            }
        };
        Ok(proba)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::argmax;
    use ndarray::array;

    #[test]
    fn test_linear_regression() {
        let model = LinearRegression {
            coef: vec![0.5, -1.0, 2.0, 0.0],
            intercept: 4.0,
        };
        let pred = model.predict(array![2.0, 1.0, 0.5, 9.0].view()).unwrap();
        assert!((pred - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_linear_regression_shape_mismatch() {
        let model = LinearRegression {
            coef: vec![1.0; 4],
            intercept: 0.0,
        };
        assert!(model.predict(array![1.0].view()).is_err());
    }

    #[test]
    fn test_binary_logistic() {
        let model = LogisticRegression {
            coef: array![[1.0, 0.0]],
            intercept: vec![0.0],
            multi_class: MultiClass::Multinomial,
        };
        let p = model.predict_proba(array![2.0, 5.0].view()).unwrap();
        assert_eq!(model.n_classes(), 2);
        assert_eq!(argmax(p.view()), 1);
        assert!((p[1] - sigmoid(2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_multinomial_logistic() {
        let model = LogisticRegression {
            coef: array![[1.0, 0.0], [0.0, 1.0], [-1.0, -1.0]],
            intercept: vec![0.0, 0.0, 0.0],
            multi_class: MultiClass::Multinomial,
        };
        let p = model.predict_proba(array![0.1, 0.9].view()).unwrap();
        assert_eq!(argmax(p.view()), 1);
        assert!((p.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_intercept_length_checked() {
        let model = LogisticRegression {
            coef: array![[1.0], [2.0]],
            intercept: vec![0.0],
            multi_class: MultiClass::Ovr,
        };
        assert!(matches!(
            model.predict_proba(array![1.0].view()),
            Err(ModelError::Malformed(_))
        ));
    }
}
