//! ordeval - Evaluation toolkit for ordinal classifiers
//!
//! Built for severity-grading problems (the reference domain is diabetic
//! retinopathy grading from fundus photographs) where classes carry a natural
//! order and a prediction two grades off is worse than one grade off.
//!
//! # Modules
//!
//! - [`encoding`] - Cumulative multi-hot encoding and threshold decoding of
//!   ordinal labels
//! - [`metrics`] - Quadratic weighted kappa, observed agreement, confusion
//!   matrices
//! - [`threshold`] - Derivative-free search for the decoding threshold that
//!   maximizes kappa on a validation set
//!
//! All operations are pure functions over in-memory data: no I/O, no shared
//! state, safe to call from parallel fold evaluations without coordination.
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use ordeval::prelude::*;
//!
//! let y_true = array![1, 0, 1, 1, 0, 1];
//! let y_pred = array![1, 0, 0, 0, 0, 1];
//! let kappa = quadratic_weighted_kappa(&y_true, &y_pred, 2).unwrap();
//! assert!((kappa - 0.4).abs() < 1e-9);
//! ```

// Core error handling
pub mod error;

// Core evaluation modules
pub mod encoding;
pub mod metrics;
pub mod threshold;

pub use error::{OrdevalError, Result};

/// Re-export commonly used types
pub mod prelude {
    // Error handling
    pub use crate::error::{OrdevalError, Result};

    // Encoding
    pub use crate::encoding::{decode_batch, decode_cumulative, encode_cumulative};

    // Metrics
    pub use crate::metrics::{
        confusion_matrix, observed_agreement, quadratic_weighted_kappa, GradingMetrics,
    };

    // Threshold search
    pub use crate::threshold::{ThresholdResult, ThresholdSearch};
}
