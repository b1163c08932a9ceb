//! Quadratic weighted kappa and supporting agreement statistics

use crate::error::{OrdevalError, Result};
use ndarray::{Array1, Array2};

fn validate_label_pair(
    y_true: &Array1<usize>,
    y_pred: &Array1<usize>,
    n_classes: usize,
) -> Result<()> {
    if n_classes == 0 {
        return Err(OrdevalError::InvalidParameter {
            name: "n_classes".to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    if y_true.len() != y_pred.len() {
        return Err(OrdevalError::ValidationError(format!(
            "Label sequences must have same length: {} vs {}",
            y_true.len(),
            y_pred.len()
        )));
    }
    if y_true.is_empty() {
        return Err(OrdevalError::ValidationError(
            "Empty input".to_string(),
        ));
    }
    for &label in y_true.iter().chain(y_pred.iter()) {
        if label >= n_classes {
            return Err(OrdevalError::ValidationError(format!(
                "Label {label} out of range for {n_classes} classes"
            )));
        }
    }
    Ok(())
}

/// Compute the observed confusion matrix.
///
/// Entry `[i, j]` counts samples with true label `i` and predicted label `j`.
pub fn confusion_matrix(
    y_true: &Array1<usize>,
    y_pred: &Array1<usize>,
    n_classes: usize,
) -> Result<Array2<f64>> {
    validate_label_pair(y_true, y_pred, n_classes)?;

    let mut observed = Array2::zeros((n_classes, n_classes));
    for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
        observed[[t, p]] += 1.0;
    }
    Ok(observed)
}

/// Fraction of samples where prediction exactly matches the true label.
pub fn observed_agreement(y_true: &Array1<usize>, y_pred: &Array1<usize>) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(OrdevalError::ValidationError(format!(
            "Label sequences must have same length: {} vs {}",
            y_true.len(),
            y_pred.len()
        )));
    }
    if y_true.is_empty() {
        return Err(OrdevalError::ValidationError(
            "Empty input".to_string(),
        ));
    }

    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();
    Ok(correct as f64 / y_true.len() as f64)
}

/// Compute the quadratic weighted kappa between two ordinal label sequences.
///
/// Agreement statistic in `[-1, 1]`: 1 is perfect agreement, 0 is
/// chance-level, negative is worse than chance. Disagreements are weighted by
/// `(i - j)^2 / (K - 1)^2`, so confusing grade 0 with grade 4 costs far more
/// than confusing grade 3 with grade 4.
///
/// Two degenerate cases are defined rather than rejected: a single-class
/// problem (`n_classes == 1`) scores 1.0, and a zero expected-disagreement
/// denominator (all mass on one label in both sequences) also scores 1.0.
pub fn quadratic_weighted_kappa(
    y_true: &Array1<usize>,
    y_pred: &Array1<usize>,
    n_classes: usize,
) -> Result<f64> {
    validate_label_pair(y_true, y_pred, n_classes)?;

    // Only one grade exists: agreement is trivially perfect, and the weight
    // matrix denominator (K-1)^2 would be zero.
    if n_classes == 1 {
        return Ok(1.0);
    }

    let n = y_true.len() as f64;

    let mut observed = Array2::<f64>::zeros((n_classes, n_classes));
    let mut true_hist = Array1::<f64>::zeros(n_classes);
    let mut pred_hist = Array1::<f64>::zeros(n_classes);
    for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
        observed[[t, p]] += 1.0;
        true_hist[t] += 1.0;
        pred_hist[p] += 1.0;
    }

    let weight_scale = ((n_classes - 1) * (n_classes - 1)) as f64;
    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for i in 0..n_classes {
        for j in 0..n_classes {
            let weight = ((i as f64 - j as f64).powi(2)) / weight_scale;
            let expected = true_hist[i] * pred_hist[j] / n;
            numerator += weight * observed[[i, j]];
            denominator += weight * expected;
        }
    }

    if denominator == 0.0 {
        // Both marginals are concentrated on a single grade; no expected
        // disagreement to normalize by.
        return Ok(1.0);
    }

    Ok(1.0 - numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_perfect_agreement() {
        let labels = array![0, 1, 2, 3, 4, 2, 1];
        let kappa = quadratic_weighted_kappa(&labels, &labels, 5).unwrap();
        assert_eq!(kappa, 1.0);
    }

    #[test]
    fn test_binary_reference_scenario() {
        // Observed agreement 4/6, QWK 0.4.
        let y_true = array![1, 0, 1, 1, 0, 1];
        let y_pred = array![1, 0, 0, 0, 0, 1];

        let acc = observed_agreement(&y_true, &y_pred).unwrap();
        assert!((acc - 4.0 / 6.0).abs() < 1e-12);

        let kappa = quadratic_weighted_kappa(&y_true, &y_pred, 2).unwrap();
        assert!((kappa - 0.4).abs() < 1e-9, "expected 0.4, got {kappa}");
    }

    #[test]
    fn test_symmetry() {
        let a = array![0, 2, 4, 1, 3, 0, 2];
        let b = array![1, 2, 3, 1, 4, 0, 0];
        let k_ab = quadratic_weighted_kappa(&a, &b, 5).unwrap();
        let k_ba = quadratic_weighted_kappa(&b, &a, 5).unwrap();
        assert!((k_ab - k_ba).abs() < 1e-12);
    }

    #[test]
    fn test_label_reflection_invariance() {
        let n_classes = 5;
        let a = array![0, 2, 4, 1, 3, 0, 2];
        let b = array![1, 2, 3, 1, 4, 0, 0];
        let a_flipped = a.mapv(|l| n_classes - 1 - l);
        let b_flipped = b.mapv(|l| n_classes - 1 - l);

        let original = quadratic_weighted_kappa(&a, &b, n_classes).unwrap();
        let flipped = quadratic_weighted_kappa(&a_flipped, &b_flipped, n_classes).unwrap();
        assert!((original - flipped).abs() < 1e-12);
    }

    #[test]
    fn test_order_invariance() {
        let a = array![0, 1, 2, 3, 4];
        let b = array![1, 1, 2, 4, 3];
        let a_shuffled = array![4, 3, 0, 2, 1];
        let b_shuffled = array![3, 4, 1, 2, 1];

        let original = quadratic_weighted_kappa(&a, &b, 5).unwrap();
        let shuffled = quadratic_weighted_kappa(&a_shuffled, &b_shuffled, 5).unwrap();
        assert!((original - shuffled).abs() < 1e-12);
    }

    #[test]
    fn test_worse_than_chance_is_negative() {
        let y_true = array![0, 0, 0, 1, 1, 1];
        let y_pred = array![1, 1, 1, 0, 0, 0];
        let kappa = quadratic_weighted_kappa(&y_true, &y_pred, 2).unwrap();
        assert!(kappa < 0.0, "total disagreement should score below chance");
    }

    #[test]
    fn test_single_class() {
        let y_true = array![0, 0, 0];
        let y_pred = array![0, 0, 0];
        let kappa = quadratic_weighted_kappa(&y_true, &y_pred, 1).unwrap();
        assert_eq!(kappa, 1.0);
    }

    #[test]
    fn test_zero_denominator_degeneracy() {
        // Five classes exist but every sample lands on grade 2 in both
        // sequences, so expected disagreement is identically zero.
        let y_true = array![2, 2, 2, 2];
        let y_pred = array![2, 2, 2, 2];
        let kappa = quadratic_weighted_kappa(&y_true, &y_pred, 5).unwrap();
        assert_eq!(kappa, 1.0);
    }

    #[test]
    fn test_length_mismatch() {
        let y_true = array![0, 1, 2];
        let y_pred = array![0, 1];
        let result = quadratic_weighted_kappa(&y_true, &y_pred, 3);
        assert!(matches!(result, Err(OrdevalError::ValidationError(_))));
    }

    #[test]
    fn test_empty_input() {
        let empty = Array1::<usize>::zeros(0);
        assert!(quadratic_weighted_kappa(&empty, &empty, 3).is_err());
        assert!(observed_agreement(&empty, &empty).is_err());
    }

    #[test]
    fn test_out_of_range_label() {
        let y_true = array![0, 1, 5];
        let y_pred = array![0, 1, 2];
        let result = quadratic_weighted_kappa(&y_true, &y_pred, 5);
        assert!(matches!(result, Err(OrdevalError::ValidationError(_))));
    }

    #[test]
    fn test_confusion_matrix_counts() {
        let y_true = array![0, 0, 1, 1, 2];
        let y_pred = array![0, 1, 1, 1, 0];
        let observed = confusion_matrix(&y_true, &y_pred, 3).unwrap();
        assert_eq!(observed, array![[1.0, 1.0, 0.0], [0.0, 2.0, 0.0], [1.0, 0.0, 0.0]]);
    }
}
