//! Model dispatcher
//!
//! Maps a model name onto a [`ChoiceModel`] through a fixed registration
//! table and runs it over a whole batch. Names outside the table fail with
//! [`ChoiceModelError::UnsupportedModel`].
//!
//! # Registered models
//!
//! | name             | model           | parameters                                  |
//! |------------------|-----------------|---------------------------------------------|
//! | `random`         | Random          | -                                           |
//! | `rank_based`     | RankBased       | α = 0.1                                     |
//! | `us_centric`     | CountryCentric  | α = 0.1, "US", non_country_chance 0         |
//! | `non_us_centric` | CountryCentric  | α = 0.1, "US", non_country_chance 0, invert |
//!
//! Each name's parameters live in its table row, independent of the
//! [`ChoiceModelParams`] defaults.
//!
//! The dispatcher never filters; run [`prefilter`](crate::prefilter::prefilter)
//! first if frozen users must be excluded.

use crate::choice::{CountryCentric, RandomChoice, RankBased};
use crate::config::{ChoiceModelParams, ConfigError};
use crate::models::{Acceptance, Demographics, RecommendationBatch, TrackCatalog};
use crate::rng::RngManager;
use thiserror::Error;
use tracing::info;

/// Errors raised by the dispatcher
#[derive(Debug, Error, PartialEq)]
pub enum ChoiceModelError {
    #[error("Unsupported choice model: '{0}'")]
    UnsupportedModel(String),

    #[error("Invalid choice model parameters: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Family of a choice model, independent of its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Random,
    RankBased,
    CountryCentric,
}

/// One row of the registration table: a name, a model family and the
/// parameters that name always runs with.
struct Registration {
    name: &'static str,
    kind: ModelKind,
    alpha: f64,
    country: &'static str,
    non_country_chance: f64,
    invert: bool,
}

impl Registration {
    fn params(&self) -> ChoiceModelParams {
        ChoiceModelParams {
            alpha: self.alpha,
            country: self.country.to_string(),
            non_country_chance: self.non_country_chance,
            invert: self.invert,
        }
    }
}

const REGISTRY: &[Registration] = &[
    Registration {
        name: "random",
        kind: ModelKind::Random,
        alpha: 0.1,
        country: "US",
        non_country_chance: 0.0,
        invert: false,
    },
    Registration {
        name: "rank_based",
        kind: ModelKind::RankBased,
        alpha: 0.1,
        country: "US",
        non_country_chance: 0.0,
        invert: false,
    },
    Registration {
        name: "us_centric",
        kind: ModelKind::CountryCentric,
        alpha: 0.1,
        country: "US",
        non_country_chance: 0.0,
        invert: false,
    },
    Registration {
        name: "non_us_centric",
        kind: ModelKind::CountryCentric,
        alpha: 0.1,
        country: "US",
        non_country_chance: 0.0,
        invert: true,
    },
];

/// A fully parameterised choice model
#[derive(Debug, Clone, PartialEq)]
pub enum ChoiceModel {
    Random(RandomChoice),
    RankBased(RankBased),
    CountryCentric(CountryCentric),
}

impl ChoiceModel {
    /// Look up a registered model with its fixed parameters.
    pub fn from_name(name: &str) -> Result<Self, ChoiceModelError> {
        let registration = REGISTRY
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| ChoiceModelError::UnsupportedModel(name.to_string()))?;

        Self::from_params(registration.kind, &registration.params())
    }

    /// Build a model of the given family with caller-supplied parameters.
    ///
    /// Parameters the family does not use are ignored but still validated.
    pub fn from_params(
        kind: ModelKind,
        params: &ChoiceModelParams,
    ) -> Result<Self, ChoiceModelError> {
        params.validate()?;
        Ok(match kind {
            ModelKind::Random => ChoiceModel::Random(RandomChoice),
            ModelKind::RankBased => ChoiceModel::RankBased(RankBased::new(params.alpha)?),
            ModelKind::CountryCentric => {
                ChoiceModel::CountryCentric(CountryCentric::try_from(params)?)
            }
        })
    }

    /// Every registered model name, in table order
    pub fn names() -> impl Iterator<Item = &'static str> {
        REGISTRY.iter().map(|r| r.name)
    }

    pub fn kind(&self) -> ModelKind {
        match self {
            ChoiceModel::Random(_) => ModelKind::Random,
            ChoiceModel::RankBased(_) => ModelKind::RankBased,
            ChoiceModel::CountryCentric(_) => ModelKind::CountryCentric,
        }
    }

    /// Run the model over every user in the batch.
    pub fn apply(
        &self,
        recommendations: &RecommendationBatch,
        tracks: &TrackCatalog,
        rng: &mut RngManager,
    ) -> Vec<Acceptance> {
        match self {
            ChoiceModel::Random(model) => model.apply(recommendations, rng),
            ChoiceModel::RankBased(model) => model.apply(recommendations, rng),
            ChoiceModel::CountryCentric(model) => model.apply(recommendations, tracks, rng),
        }
    }
}

/// Apply the registered model `model_name` to a recommendation batch.
///
/// Demographics are accepted for interface symmetry with [`prefilter`]
/// but no registered model reads them.
///
/// [`prefilter`]: crate::prefilter::prefilter
///
/// # Example
/// ```
/// use choice_model_core_rs::{
///     apply_choice_model, ChoiceModelError, Demographics, RecommendationBatch, RngManager,
///     TrackCatalog,
/// };
///
/// let recs = RecommendationBatch::from_pairs(vec![(1, 10), (1, 11)]);
/// let demo = Demographics::default();
/// let tracks = TrackCatalog::from_records(vec![(10, "SE"), (11, "US")]);
/// let mut rng = RngManager::new(42);
///
/// let accepted = apply_choice_model("us_centric", &recs, &demo, &tracks, &mut rng).unwrap();
/// assert_eq!(accepted[0].item_id, 11);
///
/// let err = apply_choice_model("bogus", &recs, &demo, &tracks, &mut rng).unwrap_err();
/// assert_eq!(err, ChoiceModelError::UnsupportedModel("bogus".to_string()));
/// ```
pub fn apply_choice_model(
    model_name: &str,
    recommendations: &RecommendationBatch,
    _demographics: &Demographics,
    tracks: &TrackCatalog,
    rng: &mut RngManager,
) -> Result<Vec<Acceptance>, ChoiceModelError> {
    let model = ChoiceModel::from_name(model_name)?;

    info!(
        model = model_name,
        users = recommendations.user_ids().len(),
        rows = recommendations.len(),
        "applying choice model"
    );

    Ok(model.apply(recommendations, tracks, rng))
}
