//! Property-based invariant checks across randomized configs, pools,
//! and claim sequences.

use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};

use merit_core::traits::RewardCalculator;
use merit_core::types::{AllocationState, AnchorPolicy, CurveConfig};
use merit_tests::helpers::engine;

fn arb_config() -> impl Strategy<Value = CurveConfig> {
    (
        1u32..=300,
        any::<bool>(),
        0u128..=u128::from(u64::MAX),
        1u128..=10_000,
        1u32..=4,
    )
        .prop_map(|(total_levels, anchor_max, per, base_score, exponent)| {
            let anchor = if anchor_max {
                AnchorPolicy::AnchorMax
            } else {
                AnchorPolicy::AnchorMin
            };
            let mut config = CurveConfig::new(total_levels, anchor, per);
            config.base_score = base_score;
            config.exponent = exponent;
            config
        })
}

proptest! {
    #[test]
    fn anchor_entry_is_exact_for_any_valid_config(config in arb_config()) {
        let table = engine().reward_table(&config).unwrap();
        let idx = config.anchor_level() as usize - 1;
        prop_assert_eq!(table.rewards()[idx], config.per_user_reward);
    }

    #[test]
    fn schedule_is_always_non_decreasing(config in arb_config()) {
        let table = engine().reward_table(&config).unwrap();
        prop_assert!(table.rewards().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn tables_are_deterministic_across_engines(config in arb_config()) {
        let a = engine().reward_table(&config).unwrap();
        let b = engine().reward_table(&config).unwrap();
        prop_assert_eq!(a.rewards(), b.rewards());
    }

    #[test]
    fn single_payout_never_overdraws(
        config in arb_config(),
        cap in 0u128..=u128::from(u64::MAX),
        spent in 0u128..=u128::from(u64::MAX),
        level in 0u32..=400,
    ) {
        let eng = engine();
        let table = eng.reward_table(&config).unwrap();
        let state = AllocationState::new(cap, spent);
        let payout = eng.next_payout(&state, &table, level);
        prop_assert!(payout <= state.remaining());
    }

    #[test]
    fn batch_never_spends_past_the_cap(
        config in arb_config(),
        levels in prop::collection::vec(0u32..=400, 0..=50),
        cap in 0u128..=1_000_000_000,
        start in 0u128..=1_000_000_000,
    ) {
        let payouts = engine().distribute(&levels, cap, start, &config).unwrap();
        prop_assert_eq!(payouts.len(), levels.len());
        let sum: u128 = payouts.iter().sum();
        prop_assert!(sum <= cap.saturating_sub(start));
    }

    #[test]
    fn claim_order_cannot_inflate_total_payout(
        config in arb_config(),
        seed in any::<u64>(),
        cap in 0u128..=10_000_000,
    ) {
        let eng = engine();
        let levels: Vec<u32> = (1..=config.total_levels.min(30)).collect();
        let mut shuffled = levels.clone();
        shuffled.shuffle(&mut StdRng::seed_from_u64(seed));

        let in_order: u128 = eng
            .distribute(&levels, cap, 0, &config)
            .unwrap()
            .iter()
            .sum();
        let reordered: u128 = eng
            .distribute(&shuffled, cap, 0, &config)
            .unwrap()
            .iter()
            .sum();

        prop_assert!(in_order <= cap);
        prop_assert!(reordered <= cap);
    }

    #[test]
    fn dust_payment_exhausts_the_pool_exactly(
        config in arb_config(),
        levels in prop::collection::vec(1u32..=300, 1..=64),
        cap in 1u128..=1_000_000,
    ) {
        // A payout that is neither zero nor a schedule entry is the
        // terminal dust payment; from that point the pool is spent to
        // exactly zero and every later claim gets nothing.
        prop_assume!(config.per_user_reward > 0);
        let eng = engine();
        let table = eng.reward_table(&config).unwrap();
        let payouts = eng.distribute(&levels, cap, 0, &config).unwrap();

        if let Some(dust_at) = payouts
            .iter()
            .position(|p| *p != 0 && !table.rewards().contains(p))
        {
            let sum: u128 = payouts.iter().sum();
            prop_assert_eq!(sum, cap, "dust must spend the pool to zero");
            prop_assert!(payouts[dust_at + 1..].iter().all(|&p| p == 0));
        }
    }
}
