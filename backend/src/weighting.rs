//! Rank-based probability weighting
//!
//! Exponential decay over rank: `w(p) = exp(-α·p)` for 1-based rank `p`.
//! Weights are unnormalized so callers can stack further multiplicative
//! modifiers (e.g. country bias) before normalizing once.
//!
//! # Example
//!
//! ```
//! use choice_model_core_rs::weighting::{normalize, rank_weights};
//!
//! let weights = rank_weights(3, 0.1);
//! let probs = normalize(&weights).unwrap();
//!
//! assert!((probs[0] - 0.3672).abs() < 1e-3);
//! assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-12);
//! ```

/// Default decay rate α
pub const DEFAULT_ALPHA: f64 = 0.1;

/// Unnormalized weight of 1-based `rank` under decay rate `alpha`.
pub fn ranked_prob(rank: usize, alpha: f64) -> f64 {
    (-alpha * rank as f64).exp()
}

/// Weights for ranks `1..=n`
pub fn rank_weights(n: usize, alpha: f64) -> Vec<f64> {
    (1..=n).map(|rank| ranked_prob(rank, alpha)).collect()
}

/// Divide every weight by the total.
///
/// Returns `None` if the total is not a positive finite number.
pub fn normalize(weights: &[f64]) -> Option<Vec<f64>> {
    let total: f64 = weights.iter().sum();
    if !(total > 0.0 && total.is_finite()) {
        return None;
    }
    Some(weights.iter().map(|w| w / total).collect())
}
