//! Threshold search example
//!
//! Builds a small synthetic validation set of cumulative grade predictions,
//! searches for the decoding threshold maximizing quadratic weighted kappa,
//! and prints the resulting metrics.

use ndarray::{Array1, Array2};
use ordeval::prelude::*;

fn main() -> Result<()> {
    let n_classes = 5;
    let labels = vec![0usize, 1, 2, 3, 4, 2, 1, 3, 0, 4, 2, 1];
    let y_true = Array1::from_vec(labels.clone());

    // Simulated model output: confident on the cumulative indicators up to
    // the true grade, but with miss probabilities hovering above 0.5 the way
    // an uncalibrated sigmoid head often does.
    let mut probs = Array2::zeros((labels.len(), n_classes));
    for (row, &label) in labels.iter().enumerate() {
        for col in 0..n_classes {
            probs[[row, col]] = if col <= label { 0.93 } else { 0.52 };
        }
    }

    let default_pred = decode_batch(&probs, 0.5);
    let default_metrics = GradingMetrics::compute(&y_true, &default_pred, n_classes)?;
    println!(
        "default threshold 0.50: kappa = {:.4}, accuracy = {:.4}",
        default_metrics.kappa, default_metrics.accuracy
    );

    let result = ThresholdSearch::new()
        .with_max_iter(100)
        .search(&probs, &y_true)?;
    println!(
        "searched threshold {:.4}: kappa = {:.4} ({} iterations, converged: {})",
        result.threshold, result.kappa, result.iterations, result.converged
    );

    let tuned_pred = decode_batch(&probs, result.threshold);
    let tuned_metrics = GradingMetrics::compute(&y_true, &tuned_pred, n_classes)?;
    println!("confusion matrix at tuned threshold:");
    for row in &tuned_metrics.confusion {
        println!("  {row:?}");
    }

    Ok(())
}
