//! Eligibility prefilter
//!
//! Drops the recommendations of frozen users before any choice model runs.
//! A user is frozen when their demographic country equals the control
//! country; frozen users form the hold-out group that keeps its original
//! listening behaviour.

use crate::models::{Demographics, RecommendationBatch, UserId};
use std::collections::HashSet;
use tracing::info;

/// Users excluded from new recommendations.
///
/// Empty when no control country is given (or it is the empty string).
pub fn frozen_users(demographics: &Demographics, control_country: Option<&str>) -> HashSet<UserId> {
    match control_country {
        Some(country) if !country.is_empty() => demographics.users_in_country(country),
        _ => HashSet::new(),
    }
}

/// Remove every recommendation belonging to a frozen user.
///
/// Without a control country the batch is returned unchanged. An empty
/// demographics table freezes nobody.
///
/// # Example
/// ```
/// use choice_model_core_rs::{prefilter, Demographics, RecommendationBatch};
///
/// let recs = RecommendationBatch::from_pairs(vec![(1, 10), (2, 20), (1, 11)]);
/// let demo = Demographics::from_records(vec![(1, "SE"), (2, "US")]);
///
/// let filtered = prefilter(&recs, &demo, Some("SE"));
/// assert_eq!(filtered.user_ids(), vec![2]);
///
/// assert_eq!(prefilter(&recs, &demo, None), recs);
/// ```
pub fn prefilter(
    recommendations: &RecommendationBatch,
    demographics: &Demographics,
    control_country: Option<&str>,
) -> RecommendationBatch {
    let mut filtered = recommendations.clone();
    let Some(country) = control_country.filter(|c| !c.is_empty()) else {
        return filtered;
    };

    let frozen = frozen_users(demographics, Some(country));
    filtered.retain_users(|user| !frozen.contains(&user));

    info!(
        control_country = country,
        frozen_users = frozen.len(),
        removed_rows = recommendations.len() - filtered.len(),
        "prefiltered recommendations"
    );

    filtered
}
