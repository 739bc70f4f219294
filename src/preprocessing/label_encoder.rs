//! Кодирование категорий магнитуды в индексы классов и обратно

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> Result<Self, String> {
        let encoder = Self { classes };
        encoder.validate()?;
        Ok(encoder)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.classes.is_empty() {
            return Err("label encoder has no classes".to_string());
        }
        for (i, label) in self.classes.iter().enumerate() {
            if self.classes[..i].contains(label) {
                return Err(format!("duplicate class label: {}", label));
            }
        }
        Ok(())
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn encode(&self, label: &str) -> Result<usize, ModelError> {
        self.classes
            .iter()
            .position(|c| c == label)
            .ok_or_else(|| ModelError::UnknownLabel(label.to_string()))
    }

    pub fn decode(&self, index: usize) -> Result<&str, ModelError> {
        self.classes
            .get(index)
            .map(String::as_str)
            .ok_or(ModelError::UnknownClass {
                index,
                n_classes: self.classes.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder() -> LabelEncoder {
        LabelEncoder::new(vec!["Light".into(), "Moderate".into(), "Strong".into()]).unwrap()
    }

    #[test]
    fn test_encode_decode() {
        let encoder = encoder();
        assert_eq!(encoder.encode("Moderate").unwrap(), 1);
        assert_eq!(encoder.decode(2).unwrap(), "Strong");
    }

    #[test]
    fn test_decode_out_of_range() {
        let err = encoder().decode(3).unwrap_err();
        assert_eq!(err, ModelError::UnknownClass { index: 3, n_classes: 3 });
    }

    #[test]
    fn test_rejects_duplicates_and_empty() {
        assert!(LabelEncoder::new(vec![]).is_err());
        assert!(LabelEncoder::new(vec!["A".into(), "A".into()]).is_err());
    }
}
