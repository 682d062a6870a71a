//! Python-callable entry points

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use super::types::{
    acceptances_to_py, parse_demographics, parse_recommendations, parse_tracks,
    recommendations_to_py,
};
use crate::dispatcher::{apply_choice_model as apply_model, ChoiceModel};
use crate::prefilter::prefilter as prefilter_batch;
use crate::rng::RngManager;

/// Drop recommendations of users from the control country.
///
/// # Example (from Python)
///
/// ```python
/// from choice_model_core_rs import prefilter
///
/// recs = [{"user_id": 1, "item_id": 10}, {"user_id": 2, "item_id": 20}]
/// kept = prefilter(recs, {1: "SE", 2: "US"}, control_country="SE")
/// ```
#[pyfunction]
#[pyo3(signature = (recommendations, demographics, control_country=None))]
pub fn prefilter<'py>(
    py: Python<'py>,
    recommendations: &Bound<'py, PyList>,
    demographics: &Bound<'py, PyDict>,
    control_country: Option<&str>,
) -> PyResult<Bound<'py, PyList>> {
    let batch = parse_recommendations(recommendations)?;
    let demographics = parse_demographics(demographics)?;

    let filtered = prefilter_batch(&batch, &demographics, control_country);
    recommendations_to_py(py, &filtered)
}

/// Sample at most one accepted item per user.
///
/// # Errors
///
/// Raises ValueError for an unknown model name or malformed input.
#[pyfunction]
#[pyo3(signature = (model, recommendations, demographics, tracks, seed=0))]
pub fn apply_choice_model<'py>(
    py: Python<'py>,
    model: &str,
    recommendations: &Bound<'py, PyList>,
    demographics: &Bound<'py, PyDict>,
    tracks: &Bound<'py, PyDict>,
    seed: u64,
) -> PyResult<Bound<'py, PyList>> {
    let batch = parse_recommendations(recommendations)?;
    let demographics = parse_demographics(demographics)?;
    let tracks = parse_tracks(tracks)?;
    let mut rng = RngManager::new(seed);

    let accepted = apply_model(model, &batch, &demographics, &tracks, &mut rng)
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;

    acceptances_to_py(py, &accepted)
}

/// Names accepted by `apply_choice_model`
#[pyfunction]
pub fn supported_models() -> Vec<&'static str> {
    ChoiceModel::names().collect()
}
