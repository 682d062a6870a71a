//! Recommendation model
//!
//! A recommendation batch is the ranked output of a recommender: for each
//! user, an ordered list of candidate items. Rank is the 1-based position of
//! an item within its user's list, fixed once when the batch is built so no
//! later step depends on row order.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Integer user identifier
pub type UserId = i64;

/// Integer item (track) identifier
pub type ItemId = i64;

/// A single ranked recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub user_id: UserId,
    pub item_id: ItemId,
    /// 1-based position within the user's candidate list
    pub rank: usize,
}

/// The ordered candidates recommended to one user
///
/// Items are ordered by rank, so `items[0]` has rank 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateList {
    pub user_id: UserId,
    pub items: Vec<ItemId>,
}

impl CandidateList {
    pub fn new(user_id: UserId, items: Vec<ItemId>) -> Self {
        Self { user_id, items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A batch of per-user ranked recommendations
///
/// # Example
/// ```
/// use choice_model_core_rs::RecommendationBatch;
///
/// let batch = RecommendationBatch::from_pairs(vec![(7, 3), (8, 1), (7, 9), (7, 2)]);
///
/// let lists = batch.candidate_lists();
/// assert_eq!(lists[0].user_id, 7);
/// assert_eq!(lists[0].items, vec![3, 9, 2]);
/// assert_eq!(lists[1].items, vec![1]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationBatch {
    rows: Vec<Recommendation>,
}

impl RecommendationBatch {
    /// Build a batch from `(user_id, item_id)` rows in arrival order.
    ///
    /// Each user's rows are ranked 1..N in the order they appear, regardless
    /// of interleaving with other users.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (UserId, ItemId)>,
    {
        let mut next_rank: HashMap<UserId, usize> = HashMap::new();
        let rows = pairs
            .into_iter()
            .map(|(user_id, item_id)| {
                let rank = next_rank.entry(user_id).or_insert(0);
                *rank += 1;
                Recommendation {
                    user_id,
                    item_id,
                    rank: *rank,
                }
            })
            .collect();

        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in arrival order
    pub fn rows(&self) -> &[Recommendation] {
        &self.rows
    }

    /// Distinct user ids in order of first appearance
    pub fn user_ids(&self) -> Vec<UserId> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .filter(|rec| seen.insert(rec.user_id))
            .map(|rec| rec.user_id)
            .collect()
    }

    /// Group rows into one candidate list per user.
    ///
    /// Users appear in order of first appearance; each list is sorted by rank.
    pub fn candidate_lists(&self) -> Vec<CandidateList> {
        let mut position: HashMap<UserId, usize> = HashMap::new();
        let mut grouped: Vec<(UserId, Vec<(usize, ItemId)>)> = Vec::new();

        for rec in &self.rows {
            let idx = *position.entry(rec.user_id).or_insert_with(|| {
                grouped.push((rec.user_id, Vec::new()));
                grouped.len() - 1
            });
            grouped[idx].1.push((rec.rank, rec.item_id));
        }

        grouped
            .into_iter()
            .map(|(user_id, mut ranked)| {
                ranked.sort_by_key(|(rank, _)| *rank);
                CandidateList::new(user_id, ranked.into_iter().map(|(_, item)| item).collect())
            })
            .collect()
    }

    /// Keep only rows whose user satisfies `keep`.
    ///
    /// Whole users are kept or dropped, so ranks stay valid.
    pub fn retain_users<F>(&mut self, mut keep: F)
    where
        F: FnMut(UserId) -> bool,
    {
        self.rows.retain(|rec| keep(rec.user_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_assigned_per_user() {
        let batch = RecommendationBatch::from_pairs(vec![(1, 10), (2, 20), (1, 11), (2, 21), (1, 12)]);

        let ranks: Vec<(UserId, ItemId, usize)> = batch
            .rows()
            .iter()
            .map(|r| (r.user_id, r.item_id, r.rank))
            .collect();

        assert_eq!(
            ranks,
            vec![(1, 10, 1), (2, 20, 1), (1, 11, 2), (2, 21, 2), (1, 12, 3)]
        );
    }

    #[test]
    fn test_user_ids_first_appearance_order() {
        let batch = RecommendationBatch::from_pairs(vec![(5, 1), (3, 1), (5, 2), (9, 1)]);
        assert_eq!(batch.user_ids(), vec![5, 3, 9]);
    }

    #[test]
    fn test_empty_batch() {
        let batch = RecommendationBatch::default();
        assert!(batch.is_empty());
        assert!(batch.candidate_lists().is_empty());
    }

    #[test]
    fn test_retain_users_keeps_ranks() {
        let mut batch = RecommendationBatch::from_pairs(vec![(1, 10), (2, 20), (1, 11)]);
        batch.retain_users(|user| user != 2);

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.rows()[1].rank, 2);
    }
}
