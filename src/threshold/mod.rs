//! Decision-threshold search for cumulative ordinal decoding
//!
//! Given a validation set of prediction vectors and true grades, finds the
//! scalar binarization threshold that maximizes quadratic weighted kappa. The
//! objective is a step function of the threshold (kappa only changes when the
//! threshold crosses a predicted probability), so the search is
//! derivative-free: a one-dimensional Nelder-Mead simplex with reflection,
//! expansion, and contraction.

use crate::encoding::decode_batch;
use crate::error::{OrdevalError, Result};
use crate::metrics::quadratic_weighted_kappa;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Outcome of a threshold search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdResult {
    /// Best threshold found
    pub threshold: f64,
    /// Quadratic weighted kappa achieved at that threshold
    pub kappa: f64,
    /// Iterations consumed
    pub iterations: usize,
    /// Whether the simplex collapsed below tolerance before the
    /// iteration budget ran out
    pub converged: bool,
}

/// Threshold search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdSearch {
    /// Starting threshold for the simplex
    initial_guess: f64,
    /// Iteration budget
    max_iter: usize,
    /// Simplex width below which the search stops
    tol: f64,
}

impl ThresholdSearch {
    /// Create a search with default settings (start at 0.5, 200 iterations,
    /// tolerance 1e-4).
    pub fn new() -> Self {
        Self {
            initial_guess: 0.5,
            max_iter: 200,
            tol: 1e-4,
        }
    }

    /// Set the starting threshold
    pub fn with_initial_guess(mut self, guess: f64) -> Self {
        self.initial_guess = guess;
        self
    }

    /// Set the iteration budget
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the convergence tolerance on simplex width
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Search for the threshold maximizing kappa on a validation set.
    ///
    /// `probs` holds one row per sample with `n_classes` cumulative
    /// indicator probabilities; `y_true` holds the matching true grades.
    /// The returned threshold is the best simplex vertex seen, so its kappa
    /// is never worse than the kappa at the initial guess. Exhausting the
    /// iteration budget is reported through [`ThresholdResult::converged`],
    /// not as an error; the objective is piecewise constant and the search
    /// can settle on any threshold within the best plateau it finds.
    pub fn search(&self, probs: &Array2<f64>, y_true: &Array1<usize>) -> Result<ThresholdResult> {
        let n_classes = probs.ncols();
        if n_classes == 0 {
            return Err(OrdevalError::InvalidParameter {
                name: "n_classes".to_string(),
                value: "0".to_string(),
                reason: "prediction matrix must have at least one column".to_string(),
            });
        }
        if probs.nrows() != y_true.len() {
            return Err(OrdevalError::ValidationError(format!(
                "Predictions and labels must have same length: {} vs {}",
                probs.nrows(),
                y_true.len()
            )));
        }
        if y_true.is_empty() {
            return Err(OrdevalError::ValidationError(
                "Empty input".to_string(),
            ));
        }
        for &label in y_true.iter() {
            if label >= n_classes {
                return Err(OrdevalError::ValidationError(format!(
                    "Label {label} out of range for {n_classes} classes"
                )));
            }
        }

        // Minimize 1 - kappa. Decoded labels are always in range, so the
        // kappa call cannot fail past the validation above.
        let objective = |t: f64| -> Result<f64> {
            let decoded = decode_batch(probs, t);
            Ok(1.0 - quadratic_weighted_kappa(y_true, &decoded, n_classes)?)
        };

        // Two-vertex simplex seeded next to the initial guess.
        let x0 = self.initial_guess;
        let x1 = if x0 != 0.0 { x0 * 1.05 } else { 2.5e-4 };
        let mut best = (x0, objective(x0)?);
        let mut worst = (x1, objective(x1)?);
        if worst.1 < best.1 {
            std::mem::swap(&mut best, &mut worst);
        }

        let mut iterations = 0;
        let mut converged = false;
        while iterations < self.max_iter {
            if (best.0 - worst.0).abs() <= self.tol {
                converged = true;
                break;
            }
            iterations += 1;

            // Reflect the worst vertex through the best.
            let x_r = best.0 + (best.0 - worst.0);
            let f_r = objective(x_r)?;
            if f_r < best.1 {
                // Promising direction: try doubling the step.
                let x_e = best.0 + 2.0 * (best.0 - worst.0);
                let f_e = objective(x_e)?;
                worst = if f_e < f_r { (x_e, f_e) } else { (x_r, f_r) };
            } else if f_r < worst.1 {
                worst = (x_r, f_r);
            } else {
                // Contract toward the best vertex. In one dimension the
                // shrink step lands on the same midpoint, so the two cases
                // coincide and the simplex width always halves.
                let x_c = best.0 + 0.5 * (worst.0 - best.0);
                worst = (x_c, objective(x_c)?);
            }

            if worst.1 < best.1 {
                std::mem::swap(&mut best, &mut worst);
            }
        }

        Ok(ThresholdResult {
            threshold: best.0,
            kappa: 1.0 - best.1,
            iterations,
            converged,
        })
    }
}

impl Default for ThresholdSearch {
    fn default() -> Self {
        Self::new()
    }
}
