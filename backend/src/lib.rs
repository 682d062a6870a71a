//! Choice Model Core - Rust Engine
//!
//! Simulates how users respond to ranked recommendation lists: each user
//! accepts at most one recommended item, sampled under a behavioural model.
//! Used for offline evaluation of recommender systems.
//!
//! # Architecture
//!
//! - **models**: Domain types (Recommendation, Demographics, Track, Acceptance)
//! - **weighting**: Exponential rank-decay weights
//! - **prefilter**: Excludes frozen (control-group) users
//! - **choice**: Random, rank-based and country-centric choice models
//! - **dispatcher**: Name → model registration table
//! - **simulation**: Prefilter + dispatch in one call
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. At most one acceptance per user
//! 2. All randomness is deterministic (seeded RNG, passed explicitly)
//! 3. A user with no positively weighted candidate is skipped, not an error

// Module declarations
pub mod choice;
pub mod config;
pub mod dispatcher;
pub mod models;
pub mod prefilter;
pub mod rng;
pub mod simulation;
pub mod weighting;

// Re-exports for convenience
pub use config::{ChoiceModelParams, ConfigError, SimulationConfig};
pub use dispatcher::{apply_choice_model, ChoiceModel, ChoiceModelError, ModelKind};
pub use models::{
    Acceptance, CandidateList, Demographics, ItemId, Recommendation, RecommendationBatch,
    TrackCatalog, UserId,
};
pub use prefilter::{frozen_users, prefilter};
pub use rng::RngManager;
pub use simulation::simulate;

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn choice_model_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::functions::prefilter, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::functions::apply_choice_model, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::functions::supported_models, m)?)?;
    Ok(())
}
