//! Движок предсказаний: одна строка через скейлер и все десять моделей

use std::collections::BTreeMap;

use crate::error::ModelError;
use crate::preprocessing::Preprocessor;
use crate::registry::ModelRegistry;
use crate::types::{PredictionInput, PredictionOutput};

#[derive(Debug, Clone)]
pub struct PredictionEngine {
    preprocessor: Preprocessor,
    registry: ModelRegistry,
}

impl PredictionEngine {
    pub fn new(preprocessor: Preprocessor, registry: ModelRegistry) -> Self {
        Self {
            preprocessor,
            registry,
        }
    }

    pub fn preprocessor(&self) -> &Preprocessor {
        &self.preprocessor
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub fn predict(&self, input: &PredictionInput) -> Result<PredictionOutput, ModelError> {
        let x = self.preprocessor.transform(input)?;

        let mut regression = BTreeMap::new();
        for (name, model) in self.registry.regressors() {
            regression.insert(name.to_string(), model.predict(x.view())?);
        }

        let labels = &self.preprocessor.label_encoder;
        let mut classification = BTreeMap::new();
        for (name, model) in self.registry.classifiers() {
            let class = model.predict(x.view())?;
            classification.insert(name.to_string(), labels.decode(class)?.to_string());
        }

        Ok(PredictionOutput {
            regression,
            classification,
        })
    }
}
