//! Type conversion utilities for FFI boundary

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::models::{Acceptance, Demographics, ItemId, RecommendationBatch, TrackCatalog, UserId};

/// Extract a required field from a Python dict with a clear error message.
fn extract_required<'py, T>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    dict.get_item(key)?
        .ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("Missing required field '{}'", key))
        })?
        .extract()
}

/// Convert a list of recommendation dicts into a ranked batch.
///
/// # Errors
///
/// Returns ValueError if an entry is not a dict or lacks `user_id`/`item_id`.
pub fn parse_recommendations(py_recs: &Bound<'_, PyList>) -> PyResult<RecommendationBatch> {
    let mut pairs = Vec::with_capacity(py_recs.len());

    for entry in py_recs.iter() {
        let row = entry.downcast::<PyDict>().map_err(|_| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>("recommendation entries must be dicts")
        })?;
        let user_id: UserId = extract_required(row, "user_id")?;
        let item_id: ItemId = extract_required(row, "item_id")?;
        pairs.push((user_id, item_id));
    }

    Ok(RecommendationBatch::from_pairs(pairs))
}

pub fn parse_demographics(py_demo: &Bound<'_, PyDict>) -> PyResult<Demographics> {
    let mut records = Vec::with_capacity(py_demo.len());
    for (user, country) in py_demo.iter() {
        records.push((user.extract::<UserId>()?, country.extract::<String>()?));
    }
    Ok(Demographics::from_records(records))
}

pub fn parse_tracks(py_tracks: &Bound<'_, PyDict>) -> PyResult<TrackCatalog> {
    let mut records = Vec::with_capacity(py_tracks.len());
    for (item, country) in py_tracks.iter() {
        records.push((item.extract::<ItemId>()?, country.extract::<String>()?));
    }
    Ok(TrackCatalog::from_records(records))
}

/// Convert a batch back into the list-of-dicts layout.
pub fn recommendations_to_py<'py>(
    py: Python<'py>,
    batch: &RecommendationBatch,
) -> PyResult<Bound<'py, PyList>> {
    let list = PyList::empty_bound(py);
    for rec in batch.rows() {
        let row = PyDict::new_bound(py);
        row.set_item("user_id", rec.user_id)?;
        row.set_item("item_id", rec.item_id)?;
        row.set_item("rank", rec.rank)?;
        list.append(row)?;
    }
    Ok(list)
}

pub fn acceptances_to_py<'py>(
    py: Python<'py>,
    acceptances: &[Acceptance],
) -> PyResult<Bound<'py, PyList>> {
    let list = PyList::empty_bound(py);
    for acceptance in acceptances {
        let row = PyDict::new_bound(py);
        row.set_item("user_id", acceptance.user_id)?;
        row.set_item("item_id", acceptance.item_id)?;
        list.append(row)?;
    }
    Ok(list)
}
