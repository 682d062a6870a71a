//! Tests for the choice models
//!
//! Statistical checks use fixed seeds, so they are deterministic; tolerances
//! are several standard errors wide.

use choice_model_core_rs::choice::{CountryCentric, RandomChoice, RankBased};
use choice_model_core_rs::{
    Acceptance, CandidateList, ChoiceModelParams, ConfigError, ItemId, RecommendationBatch,
    RngManager, TrackCatalog,
};
use std::collections::{HashMap, HashSet};

const TRIALS: usize = 30_000;

fn frequencies<F>(items: &[ItemId], mut draw: F) -> HashMap<ItemId, f64>
where
    F: FnMut() -> Option<Acceptance>,
{
    let mut counts: HashMap<ItemId, usize> = items.iter().map(|i| (*i, 0)).collect();
    for _ in 0..TRIALS {
        let accepted = draw().expect("expected an acceptance");
        *counts.get_mut(&accepted.item_id).expect("accepted a non-candidate") += 1;
    }
    counts
        .into_iter()
        .map(|(item, count)| (item, count as f64 / TRIALS as f64))
        .collect()
}

fn country_centric(params: ChoiceModelParams) -> CountryCentric {
    CountryCentric::try_from(&params).unwrap()
}

fn tracks() -> TrackCatalog {
    TrackCatalog::from_records(vec![
        (1, "US"),
        (2, "SE"),
        (3, "US"),
        (4, "DE"),
        (5, "US"),
    ])
}

// ============================================================================
// Random
// ============================================================================

#[test]
fn test_random_uniform_frequencies() {
    let list = CandidateList::new(1, vec![10, 20, 30, 40]);
    let mut rng = RngManager::new(11);

    let freq = frequencies(&list.items, || RandomChoice.choose(&list, &mut rng));

    for (item, f) in freq {
        assert!((f - 0.25).abs() < 0.02, "item {} frequency {}", item, f);
    }
}

#[test]
fn test_random_every_user_accepts_once() {
    let batch = RecommendationBatch::from_pairs((1..=100).flat_map(|u| (0..5).map(move |i| (u, u * 10 + i))));
    let mut rng = RngManager::new(1);

    let accepted = RandomChoice.apply(&batch, &mut rng);

    assert_eq!(accepted.len(), 100);
    let users: HashSet<i64> = accepted.iter().map(|a| a.user_id).collect();
    assert_eq!(users.len(), 100);
    for a in &accepted {
        assert!(a.item_id / 10 == a.user_id, "item {} not recommended to {}", a.item_id, a.user_id);
    }
}

// ============================================================================
// Rank-based
// ============================================================================

#[test]
fn test_rank_based_example_distribution() {
    let list = CandidateList::new(7, vec![3, 9, 2]);
    let model = RankBased::new(0.1).unwrap();
    let mut rng = RngManager::new(2024);

    let freq = frequencies(&list.items, || model.choose(&list, &mut rng));

    assert!((freq[&3] - 0.367).abs() < 0.02, "rank 1 freq {}", freq[&3]);
    assert!((freq[&9] - 0.332).abs() < 0.02, "rank 2 freq {}", freq[&9]);
    assert!((freq[&2] - 0.301).abs() < 0.02, "rank 3 freq {}", freq[&2]);
}

#[test]
fn test_rank_based_high_alpha_prefers_top() {
    let list = CandidateList::new(1, vec![1, 2, 3, 4, 5]);
    let model = RankBased::new(2.0).unwrap();
    let mut rng = RngManager::new(8);

    let freq = frequencies(&list.items, || model.choose(&list, &mut rng));

    assert!(freq[&1] > 0.8, "top rank freq {}", freq[&1]);
    assert!(freq[&1] > freq[&2] && freq[&2] > freq[&3]);
}

#[test]
fn test_rank_based_zero_alpha_uniform() {
    let list = CandidateList::new(1, vec![1, 2, 3, 4, 5]);
    let probs = RankBased::new(0.0).unwrap().probabilities(&list);
    for p in probs {
        assert!((p - 0.2).abs() < 1e-12);
    }
}

#[test]
fn test_rank_based_one_per_user_in_order() {
    let batch = RecommendationBatch::from_pairs(vec![(5, 1), (3, 2), (5, 3), (3, 4), (9, 5)]);
    let mut rng = RngManager::new(4);

    let accepted = RankBased::default().apply(&batch, &mut rng);
    let users: Vec<i64> = accepted.iter().map(|a| a.user_id).collect();

    assert_eq!(users, vec![5, 3, 9]);
    assert_eq!(accepted[2], Acceptance::new(9, 5));
}

// ============================================================================
// Country-centric
// ============================================================================

#[test]
fn test_us_centric_only_accepts_us_tracks() {
    let model = CountryCentric::default();
    let list = CandidateList::new(1, vec![2, 1, 4, 3, 5]);
    let tracks = tracks();
    let mut rng = RngManager::new(17);

    for _ in 0..2_000 {
        let accepted = model.choose(&list, &tracks, &mut rng).unwrap();
        assert!(tracks.is_from(accepted.item_id, "US"), "accepted {}", accepted.item_id);
    }
}

#[test]
fn test_inverted_only_accepts_non_us_tracks() {
    let model = country_centric(ChoiceModelParams {
        invert: true,
        ..Default::default()
    });
    let list = CandidateList::new(1, vec![2, 1, 4, 3, 5]);
    let tracks = tracks();
    let mut rng = RngManager::new(17);

    for _ in 0..2_000 {
        let accepted = model.choose(&list, &tracks, &mut rng).unwrap();
        assert!(!tracks.is_from(accepted.item_id, "US"), "accepted {}", accepted.item_id);
    }
}

#[test]
fn test_users_without_favoured_tracks_are_skipped() {
    let batch = RecommendationBatch::from_pairs(vec![(1, 2), (1, 4), (2, 1), (2, 2), (3, 4)]);
    let mut rng = RngManager::new(3);

    let accepted = CountryCentric::default().apply(&batch, &tracks(), &mut rng);

    assert_eq!(accepted, vec![Acceptance::new(2, 1)]);
}

#[test]
fn test_full_chance_matches_rank_based() {
    let list = CandidateList::new(1, vec![2, 1, 4, 3, 5]);
    let model = country_centric(ChoiceModelParams {
        non_country_chance: 1.0,
        ..Default::default()
    });

    let biased = model.probabilities(&list, &tracks()).unwrap();
    let plain = RankBased::default().probabilities(&list);

    for (b, p) in biased.iter().zip(&plain) {
        assert!((b - p).abs() < 1e-12);
    }
}

#[test]
fn test_full_chance_same_draws_as_rank_based() {
    let list = CandidateList::new(1, vec![2, 1, 4, 3, 5]);
    let model = country_centric(ChoiceModelParams {
        non_country_chance: 1.0,
        ..Default::default()
    });
    let tracks = tracks();
    let mut rng1 = RngManager::new(55);
    let mut rng2 = RngManager::new(55);

    for _ in 0..500 {
        assert_eq!(
            model.choose(&list, &tracks, &mut rng1),
            RankBased::default().choose(&list, &mut rng2)
        );
    }
}

#[test]
fn test_partial_chance_interpolates() {
    // α = 0 so the split depends only on the bias
    let list = CandidateList::new(1, vec![1, 2]);
    let model = country_centric(ChoiceModelParams {
        alpha: 0.0,
        non_country_chance: 0.5,
        ..Default::default()
    });
    let tracks = tracks();

    let probs = model.probabilities(&list, &tracks).unwrap();
    assert!((probs[0] - 2.0 / 3.0).abs() < 1e-12);
    assert!((probs[1] - 1.0 / 3.0).abs() < 1e-12);

    let mut rng = RngManager::new(90);
    let freq = frequencies(&list.items, || model.choose(&list, &tracks, &mut rng));
    assert!((freq[&1] - 2.0 / 3.0).abs() < 0.02, "US freq {}", freq[&1]);
}

#[test]
fn test_other_target_country() {
    let model = country_centric(ChoiceModelParams {
        country: "SE".to_string(),
        ..Default::default()
    });
    let mut rng = RngManager::new(6);

    let accepted = model.choose(&CandidateList::new(1, vec![1, 3, 2]), &tracks(), &mut rng);
    assert_eq!(accepted, Some(Acceptance::new(1, 2)));
}

#[test]
fn test_out_of_range_bias_rejected() {
    let params = ChoiceModelParams {
        non_country_chance: -0.5,
        ..Default::default()
    };
    assert_eq!(
        CountryCentric::try_from(&params),
        Err(ConfigError::InvalidNonCountryChance(-0.5))
    );

    let params = ChoiceModelParams {
        non_country_chance: 1.5,
        ..Default::default()
    };
    assert_eq!(
        CountryCentric::try_from(&params),
        Err(ConfigError::InvalidNonCountryChance(1.5))
    );
}

#[test]
fn test_negative_alpha_rejected() {
    assert_eq!(RankBased::new(-0.1), Err(ConfigError::InvalidAlpha(-0.1)));

    let params = ChoiceModelParams {
        alpha: -0.1,
        ..Default::default()
    };
    assert_eq!(
        CountryCentric::try_from(&params),
        Err(ConfigError::InvalidAlpha(-0.1))
    );
}

#[test]
fn test_partial_bias_probabilities_stay_in_unit_interval() {
    let list = CandidateList::new(1, vec![1, 2, 3, 4, 5]);
    let model = country_centric(ChoiceModelParams {
        non_country_chance: 0.25,
        ..Default::default()
    });

    let probs = model.probabilities(&list, &tracks()).unwrap();

    assert!(probs.iter().all(|p| (0.0..=1.0).contains(p)), "{:?}", probs);
    assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-12);
}
