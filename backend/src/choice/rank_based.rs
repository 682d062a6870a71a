//! Rank-weighted acceptance
//!
//! Candidate at rank `p` is accepted with probability
//! `exp(-α·p) / Σ exp(-α·q)`. Higher α concentrates mass on the top ranks;
//! α = 0 degenerates to uniform.

use crate::config::{check_alpha, ConfigError};
use crate::models::{Acceptance, CandidateList, RecommendationBatch};
use crate::rng::RngManager;
use crate::weighting::{normalize, rank_weights, DEFAULT_ALPHA};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankBased {
    alpha: f64,
}

impl Default for RankBased {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl RankBased {
    /// # Errors
    ///
    /// Returns `InvalidAlpha` unless α is finite and non-negative.
    pub fn new(alpha: f64) -> Result<Self, ConfigError> {
        check_alpha(alpha)?;
        Ok(Self { alpha })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Normalized acceptance probability per rank, in rank order.
    ///
    /// # Example
    /// ```
    /// use choice_model_core_rs::choice::RankBased;
    /// use choice_model_core_rs::CandidateList;
    ///
    /// let probs = RankBased::new(0.1).unwrap().probabilities(&CandidateList::new(7, vec![3, 9, 2]));
    ///
    /// assert!((probs[0] - 0.367).abs() < 1e-3);
    /// assert!((probs[1] - 0.332).abs() < 1e-3);
    /// assert!((probs[2] - 0.301).abs() < 1e-3);
    /// ```
    pub fn probabilities(&self, candidates: &CandidateList) -> Vec<f64> {
        let weights = rank_weights(candidates.len(), self.alpha);
        normalize(&weights).unwrap_or_default()
    }

    pub fn choose(&self, candidates: &CandidateList, rng: &mut RngManager) -> Option<Acceptance> {
        if candidates.is_empty() {
            return None;
        }
        // α is finite and non-negative, so every weight lies in (0, 1] unless
        // exp underflows at extreme α·p; the limit then puts all mass on rank 1.
        let idx = rng
            .choose_weighted(&self.probabilities(candidates))
            .unwrap_or(0);
        Some(Acceptance::new(candidates.user_id, candidates.items[idx]))
    }

    pub fn apply(&self, batch: &RecommendationBatch, rng: &mut RngManager) -> Vec<Acceptance> {
        batch
            .candidate_lists()
            .iter()
            .filter_map(|candidates| self.choose(candidates, rng))
            .collect()
    }
}
