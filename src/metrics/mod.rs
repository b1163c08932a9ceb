//! Evaluation metrics for ordinal classification
//!
//! Provides the quadratic weighted kappa agreement statistic, plain observed
//! agreement (accuracy), confusion matrix computation, and a serializable
//! container bundling them per evaluation round.

mod kappa;

pub use kappa::{confusion_matrix, observed_agreement, quadratic_weighted_kappa};

use crate::error::Result;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Metrics for one evaluation round of an ordinal grader
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingMetrics {
    /// Quadratic weighted kappa
    pub kappa: f64,
    /// Fraction of exact label matches
    pub accuracy: f64,
    /// Number of evaluated samples
    pub n_samples: usize,
    /// Number of severity classes
    pub n_classes: usize,
    /// Observed confusion matrix, row = true label, column = predicted
    pub confusion: Vec<Vec<u64>>,
}

impl GradingMetrics {
    /// Compute all metrics for a pair of label sequences.
    pub fn compute(
        y_true: &Array1<usize>,
        y_pred: &Array1<usize>,
        n_classes: usize,
    ) -> Result<Self> {
        let kappa = quadratic_weighted_kappa(y_true, y_pred, n_classes)?;
        let accuracy = observed_agreement(y_true, y_pred)?;
        let observed = confusion_matrix(y_true, y_pred, n_classes)?;

        let confusion = observed
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|&c| c as u64).collect())
            .collect();

        Ok(Self {
            kappa,
            accuracy,
            n_samples: y_true.len(),
            n_classes,
            confusion,
        })
    }
}
