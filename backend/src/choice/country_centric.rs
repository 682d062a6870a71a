//! Country-biased rank-weighted acceptance
//!
//! Simulates a user with a taste for (or against) music from one country.
//! Each candidate's rank weight `exp(-α·p)` is multiplied by a bias:
//!
//! | mode         | target-country track   | other track            |
//! |--------------|------------------------|------------------------|
//! | non-inverted | 1                      | `non_country_chance`   |
//! | inverted     | `non_country_chance`   | 1                      |
//!
//! With `non_country_chance = 0` only the favoured class can be accepted;
//! with 1 the model reduces to plain rank-based choice. When every biased
//! weight is zero the user has no acceptable option and is skipped.

use crate::config::{ChoiceModelParams, ConfigError, DEFAULT_COUNTRY};
use crate::models::{Acceptance, CandidateList, RecommendationBatch, TrackCatalog};
use crate::rng::RngManager;
use crate::weighting::{normalize, rank_weights, DEFAULT_ALPHA};
use tracing::debug;

/// Built through `TryFrom<&ChoiceModelParams>` so the bias always lies in
/// [0, 1] and α is finite and non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryCentric {
    alpha: f64,
    country: String,
    non_country_chance: f64,
    invert: bool,
}

impl Default for CountryCentric {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            country: DEFAULT_COUNTRY.to_string(),
            non_country_chance: 0.0,
            invert: false,
        }
    }
}

impl TryFrom<&ChoiceModelParams> for CountryCentric {
    type Error = ConfigError;

    fn try_from(params: &ChoiceModelParams) -> Result<Self, Self::Error> {
        params.validate()?;
        Ok(Self {
            alpha: params.alpha,
            country: params.country.clone(),
            non_country_chance: params.non_country_chance,
            invert: params.invert,
        })
    }
}

impl CountryCentric {
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn non_country_chance(&self) -> f64 {
        self.non_country_chance
    }

    pub fn invert(&self) -> bool {
        self.invert
    }

    /// Bias multiplier for one candidate
    fn bias(&self, from_country: bool) -> f64 {
        if from_country != self.invert {
            1.0
        } else {
            self.non_country_chance
        }
    }

    /// Biased, unnormalized weight per rank.
    pub fn weights(&self, candidates: &CandidateList, tracks: &TrackCatalog) -> Vec<f64> {
        rank_weights(candidates.len(), self.alpha)
            .into_iter()
            .zip(&candidates.items)
            .map(|(weight, item)| weight * self.bias(tracks.is_from(*item, &self.country)))
            .collect()
    }

    /// Normalized acceptance probability per rank.
    ///
    /// `None` when no candidate carries any weight.
    pub fn probabilities(&self, candidates: &CandidateList, tracks: &TrackCatalog) -> Option<Vec<f64>> {
        normalize(&self.weights(candidates, tracks))
    }

    pub fn choose(
        &self,
        candidates: &CandidateList,
        tracks: &TrackCatalog,
        rng: &mut RngManager,
    ) -> Option<Acceptance> {
        let Some(probs) = self.probabilities(candidates, tracks) else {
            debug!(user_id = candidates.user_id, "no acceptable candidate, skipping user");
            return None;
        };
        let idx = rng.choose_weighted(&probs)?;
        Some(Acceptance::new(candidates.user_id, candidates.items[idx]))
    }

    pub fn apply(
        &self,
        batch: &RecommendationBatch,
        tracks: &TrackCatalog,
        rng: &mut RngManager,
    ) -> Vec<Acceptance> {
        batch
            .candidate_lists()
            .iter()
            .filter_map(|candidates| self.choose(candidates, tracks, rng))
            .collect()
    }
}
