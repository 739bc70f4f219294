//! Реестр загруженных моделей: имя -> модель

use crate::models::{ClassificationModel, RegressionModel};

#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    regressors: Vec<(String, RegressionModel)>,
    classifiers: Vec<(String, ClassificationModel)>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_regressor(&mut self, name: impl Into<String>, model: RegressionModel) {
        self.regressors.push((name.into(), model));
    }

    pub fn register_classifier(&mut self, name: impl Into<String>, model: ClassificationModel) {
        self.classifiers.push((name.into(), model));
    }

    pub fn regressors(&self) -> impl Iterator<Item = (&str, &RegressionModel)> {
        self.regressors.iter().map(|(name, m)| (name.as_str(), m))
    }

    pub fn classifiers(&self) -> impl Iterator<Item = (&str, &ClassificationModel)> {
        self.classifiers.iter().map(|(name, m)| (name.as_str(), m))
    }

    pub fn len(&self) -> usize {
        self.regressors.len() + self.classifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
