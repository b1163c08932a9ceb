//! Cumulative multi-hot encoding for ordinal labels
//!
//! An ordinal label `l` in `[0, K-1]` is represented as a length-K vector of
//! binary indicators where entry `i` is 1 iff `i <= l`. The vector is
//! monotonically non-increasing, so a label can be recovered by counting the
//! entries above a decision threshold.

use crate::error::{OrdevalError, Result};
use ndarray::{Array1, Array2, ArrayView1};

/// Encode an ordinal label as a cumulative multi-hot vector.
///
/// Entry `i` of the result is 1.0 iff `i <= label`, so label 2 with 5 classes
/// encodes as `[1, 1, 1, 0, 0]`.
pub fn encode_cumulative(label: usize, n_classes: usize) -> Result<Array1<f64>> {
    if n_classes == 0 {
        return Err(OrdevalError::InvalidParameter {
            name: "n_classes".to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    if label >= n_classes {
        return Err(OrdevalError::InvalidParameter {
            name: "label".to_string(),
            value: label.to_string(),
            reason: format!("must be less than n_classes ({n_classes})"),
        });
    }

    Ok(Array1::from_shape_fn(n_classes, |i| {
        if i <= label {
            1.0
        } else {
            0.0
        }
    }))
}

/// Decode a probability vector into an ordinal label at a scalar threshold.
///
/// Each entry is binarized as `1 if v > threshold else 0`, the binarized
/// entries are summed, and 1 is subtracted (saturating at 0). The count is at
/// most the vector length, so the result is always a valid label for
/// `n_classes = probs.len()`. Non-monotonic inputs are accepted: raw model
/// probabilities need not respect the cumulative ordering, and decoding only
/// sums the indicators.
pub fn decode_cumulative(probs: ArrayView1<f64>, threshold: f64) -> usize {
    let above = probs.iter().filter(|&&v| v > threshold).count();
    above.saturating_sub(1)
}

/// Decode each row of a prediction matrix into an ordinal label.
///
/// Rows are samples, columns are the K cumulative indicators.
pub fn decode_batch(probs: &Array2<f64>, threshold: f64) -> Array1<usize> {
    let labels: Vec<usize> = probs
        .rows()
        .into_iter()
        .map(|row| decode_cumulative(row, threshold))
        .collect();
    Array1::from_vec(labels)
}
