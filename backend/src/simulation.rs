//! End-to-end acceptance run
//!
//! Wires the pieces together the way an evaluation loop uses them:
//! resolve the model, drop frozen users, seed the generator, sample.

use crate::config::SimulationConfig;
use crate::dispatcher::{apply_choice_model, ChoiceModelError};
use crate::models::{Acceptance, Demographics, RecommendationBatch, TrackCatalog};
use crate::prefilter::prefilter;
use crate::rng::RngManager;

/// Simulate which recommendations users accept.
///
/// An unknown model name fails before any filtering or sampling happens.
///
/// # Example
/// ```
/// use choice_model_core_rs::config::SimulationConfig;
/// use choice_model_core_rs::{simulate, Demographics, RecommendationBatch, TrackCatalog};
///
/// let recs = RecommendationBatch::from_pairs(vec![(1, 10), (2, 20), (2, 21)]);
/// let demo = Demographics::from_records(vec![(1, "SE"), (2, "US")]);
/// let tracks = TrackCatalog::default();
///
/// let config = SimulationConfig::new("random").with_control_country("SE").with_seed(7);
/// let accepted = simulate(&config, &recs, &demo, &tracks).unwrap();
///
/// assert_eq!(accepted.len(), 1);
/// assert_eq!(accepted[0].user_id, 2);
/// ```
pub fn simulate(
    config: &SimulationConfig,
    recommendations: &RecommendationBatch,
    demographics: &Demographics,
    tracks: &TrackCatalog,
) -> Result<Vec<Acceptance>, ChoiceModelError> {
    config.validate()?;

    let eligible = prefilter(
        recommendations,
        demographics,
        config.control_country.as_deref(),
    );
    let mut rng = RngManager::new(config.rng_seed);

    apply_choice_model(&config.model, &eligible, demographics, tracks, &mut rng)
}
