//! Uniform random acceptance
//!
//! Every candidate is equally likely (1/N). Each user with at least one
//! candidate yields exactly one acceptance.

use crate::models::{Acceptance, CandidateList, RecommendationBatch};
use crate::rng::RngManager;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RandomChoice;

impl RandomChoice {
    /// Accept one candidate uniformly at random.
    pub fn choose(&self, candidates: &CandidateList, rng: &mut RngManager) -> Option<Acceptance> {
        let idx = rng.choose_index(candidates.len())?;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_acceptance_per_user() {
        let batch = RecommendationBatch::from_pairs(vec![(1, 10), (1, 11), (2, 20)]);
        let mut rng = RngManager::new(3);

        let accepted = RandomChoice.apply(&batch, &mut rng);

        assert_eq!(accepted.len(), 2);
        assert_eq!(accepted[0].user_id, 1);
        assert!(accepted[0].item_id == 10 || accepted[0].item_id == 11);
        assert_eq!(accepted[1], Acceptance::new(2, 20));
    }

    #[test]
    fn test_empty_list_yields_nothing() {
        let mut rng = RngManager::new(3);
        assert_eq!(RandomChoice.choose(&CandidateList::new(1, vec![]), &mut rng), None);
    }
}
