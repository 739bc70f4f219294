//! Деревья решений, случайный лес и градиентный бустинг

use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use super::{sigmoid, softmax};
use crate::error::ModelError;

const LEAF: i64 = -1;

/// CART дерево в плоском виде: узел `i` лист, если `children_left[i] == -1`.
/// Переход влево при `x[feature] <= threshold`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<f64>,
}

impl DecisionTree {
    pub fn predict(&self, x: ArrayView1<f64>) -> Result<f64, ModelError> {
        let n_nodes = self.children_left.len();
        if n_nodes == 0
            || self.children_right.len() != n_nodes
            || self.feature.len() != n_nodes
            || self.threshold.len() != n_nodes
            || self.value.len() != n_nodes
        {
            return Err(ModelError::Malformed(
                "decision tree arrays have inconsistent lengths".into(),
            ));
        }

        let mut node = 0usize;
        // Не больше n_nodes переходов, иначе в дереве цикл
        for _ in 0..n_nodes {
            if self.children_left[node] == LEAF {
                return Ok(self.value[node]);
            }
            let value = feature_value(x, self.feature[node])?;
            let next = if value <= self.threshold[node] {
                self.children_left[node]
            } else {
                self.children_right[node]
            };
            node = child_index(next, n_nodes)?;
        }

        Err(ModelError::Malformed("decision tree does not terminate".into()))
    }
}

/// Дерево в формате XGBoost: значение листа лежит в `split_conditions`,
/// переход влево при `x[split] < condition`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoostedTree {
    pub left_children: Vec<i64>,
    pub right_children: Vec<i64>,
    pub split_indices: Vec<i64>,
    pub split_conditions: Vec<f64>,
    #[serde(default)]
    pub default_left: Vec<bool>,
}

impl BoostedTree {
    pub fn predict(&self, x: ArrayView1<f64>) -> Result<f64, ModelError> {
        let n_nodes = self.left_children.len();
        if n_nodes == 0
            || self.right_children.len() != n_nodes
            || self.split_indices.len() != n_nodes
            || self.split_conditions.len() != n_nodes
        {
            return Err(ModelError::Malformed(
                "boosted tree arrays have inconsistent lengths".into(),
            ));
        }

        let mut node = 0usize;
        for _ in 0..n_nodes {
            if self.left_children[node] == LEAF {
                return Ok(self.split_conditions[node]);
            }
            let value = feature_value(x, self.split_indices[node])?;
            let go_left = if value.is_nan() {
                self.default_left.get(node).copied().unwrap_or(true)
            } else {
                value < self.split_conditions[node]
            };
            let next = if go_left {
                self.left_children[node]
            } else {
                self.right_children[node]
            };
            node = child_index(next, n_nodes)?;
        }

        Err(ModelError::Malformed("boosted tree does not terminate".into()))
    }
}

fn feature_value(x: ArrayView1<f64>, feature: i64) -> Result<f64, ModelError> {
    usize::try_from(feature)
        .ok()
        .and_then(|f| x.get(f).copied())
        .ok_or(ModelError::ShapeMismatch {
            expected: feature.max(0) as usize + 1,
            got: x.len(),
        })
}

fn child_index(child: i64, n_nodes: usize) -> Result<usize, ModelError> {
    usize::try_from(child)
        .ok()
        .filter(|&c| c < n_nodes)
        .ok_or_else(|| ModelError::Malformed(format!("tree child index {} out of range", child)))
}

/// Случайный лес: среднее по деревьям
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    pub trees: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn predict(&self, x: ArrayView1<f64>) -> Result<f64, ModelError> {
        if self.trees.is_empty() {
            return Err(ModelError::Malformed("random forest has no trees".into()));
        }
        let mut sum = 0.0;
        for tree in &self.trees {
            sum += tree.predict(x)?;
        }
        Ok(sum / self.trees.len() as f64)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientBoostingRegressor {
    #[serde(default)]
    pub base_score: f64,
    pub trees: Vec<BoostedTree>,
}

impl GradientBoostingRegressor {
    pub fn predict(&self, x: ArrayView1<f64>) -> Result<f64, ModelError> {
        let mut pred = self.base_score;
        for tree in &self.trees {
            pred += tree.predict(x)?;
        }
        Ok(pred)
    }
}

/// Бустинг для классификации. `base_score` задан в пространстве margin.
/// Для двух классов одна цепочка деревьев и сигмоида, иначе дерево `t`
/// относится к классу `tree_info[t]` (по умолчанию `t % n_classes`) и
/// вероятности считаются softmax.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientBoostingClassifier {
    #[serde(default)]
    pub base_score: f64,
    pub n_classes: usize,
    pub trees: Vec<BoostedTree>,
    #[serde(default)]
    pub tree_info: Vec<usize>,
}

impl GradientBoostingClassifier {
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    pub fn predict_proba(&self, x: ArrayView1<f64>) -> Result<Array1<f64>, ModelError> {
        if self.n_classes < 2 {
            return Err(ModelError::Malformed(
                "gradient boosting classifier needs at least two classes".into(),
            ));
        }

        if self.n_classes == 2 {
            let mut margin = self.base_score;
            for tree in &self.trees {
                margin += tree.predict(x)?;
            }
            let p = sigmoid(margin);
            return Ok(Array1::from(vec![1.0 - p, p]));
        }

        if !self.tree_info.is_empty() && self.tree_info.len() != self.trees.len() {
            return Err(ModelError::Malformed(format!(
                "{} trees but {} tree_info entries",
                self.trees.len(),
                self.tree_info.len()
            )));
        }

        let mut margins = Array1::from_elem(self.n_classes, self.base_score);
        for (t, tree) in self.trees.iter().enumerate() {
            let class = self.tree_info.get(t).copied().unwrap_or(t % self.n_classes);
            if class >= self.n_classes {
                return Err(ModelError::Malformed(format!(
                    "tree {} assigned to class {} of {}",
                    t, class, self.n_classes
                )));
            }
            margins[class] += tree.predict(x)?;
        }
        Ok(softmax(&margins))
    }
}
