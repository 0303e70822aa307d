//! Core engine types: curve configuration, reward tables, pool state.
//!
//! All monetary values are u128 currency base units (no fractional
//! component, no implicit decimal scaling). Levels are 1-based u32.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASE_SCORE, DEFAULT_CURVE_EXPONENT};
use crate::error::ConfigError;

/// Which end of the ladder carries the configured reward.
///
/// The anchor level receives exactly
/// [`per_user_reward`](CurveConfig::per_user_reward); every other level
/// is scaled from it along the score curve.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AnchorPolicy {
    /// Level 1 is the reference; higher levels scale up.
    AnchorMin,
    /// The top level is the reference; lower levels scale down.
    #[default]
    AnchorMax,
}

/// Immutable description of a reward curve.
///
/// Two configs that compare equal always produce identical reward
/// tables, which is why this type is `Hash + Eq`: it is the cache key
/// for memoized tables.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CurveConfig {
    /// Number of discrete levels in the ladder. Must be at least 1.
    pub total_levels: u32,
    /// Which level anchors the schedule.
    pub anchor: AnchorPolicy,
    /// Target reward at the anchor level, in currency base units.
    pub per_user_reward: u128,
    /// Multiplier of the score curve. Must be positive.
    pub base_score: u128,
    /// Exponent of the score curve. Must be positive.
    pub exponent: u32,
}

impl CurveConfig {
    /// Config with the default cubic score curve.
    pub fn new(total_levels: u32, anchor: AnchorPolicy, per_user_reward: u128) -> Self {
        Self {
            total_levels,
            anchor,
            per_user_reward,
            base_score: DEFAULT_BASE_SCORE,
            exponent: DEFAULT_CURVE_EXPONENT,
        }
    }

    /// Check all field constraints.
    ///
    /// `per_user_reward` has no constraint: it is unsigned, so the
    /// "negative reward" misconfiguration cannot be represented.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_levels < 1 {
            return Err(ConfigError::InvalidTotalLevels(self.total_levels));
        }
        if self.base_score < 1 {
            return Err(ConfigError::ZeroBaseScore);
        }
        if self.exponent < 1 {
            return Err(ConfigError::ZeroExponent);
        }
        Ok(())
    }

    /// The 1-based level that receives exactly `per_user_reward`.
    pub fn anchor_level(&self) -> u32 {
        match self.anchor {
            AnchorPolicy::AnchorMin => 1,
            AnchorPolicy::AnchorMax => self.total_levels,
        }
    }
}

/// Per-level reward schedule derived from a [`CurveConfig`].
///
/// Entries are non-decreasing in level index and the anchor entry
/// equals the configured `per_user_reward` exactly. Never mutated
/// after creation; shared behind `Arc` by the table cache.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RewardTable {
    config: CurveConfig,
    rewards: Vec<u128>,
}

impl RewardTable {
    /// Assemble a table from its parts. The builder in `merit-curve`
    /// is the normal source; it upholds the ordering and anchor
    /// invariants documented on this type.
    pub fn new(config: CurveConfig, rewards: Vec<u128>) -> Self {
        Self { config, rewards }
    }

    /// The config this table was derived from.
    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    /// All per-level rewards, index 0 = level 1. Sorted ascending.
    pub fn rewards(&self) -> &[u128] {
        &self.rewards
    }

    /// Number of levels in the schedule.
    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    /// Whether the schedule has no entries.
    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }

    /// Reward for a 1-based level, clamped into the ladder range.
    ///
    /// Returns 0 only for an empty table, which the builder never
    /// produces (`total_levels >= 1`).
    pub fn reward_at(&self, level: u32) -> u128 {
        if self.rewards.is_empty() {
            return 0;
        }
        let idx = (level.max(1) as usize - 1).min(self.rewards.len() - 1);
        self.rewards[idx]
    }

    /// The reward at the anchor level.
    pub fn anchor_reward(&self) -> u128 {
        self.reward_at(self.config.anchor_level())
    }
}

/// Running state of one capped distribution run.
///
/// Single-owner and strictly sequential: `distributed` only increases,
/// and the allocator guarantees it never exceeds `max_cap`. Concurrent
/// runs against the same pool require external serialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocationState {
    max_cap: u128,
    distributed: u128,
}

impl AllocationState {
    /// Start a run. `distributed` may be non-zero when resuming a
    /// partially spent pool (the external ledger is the source of
    /// truth for that value).
    pub fn new(max_cap: u128, distributed: u128) -> Self {
        Self { max_cap, distributed }
    }

    /// Pool ceiling.
    pub fn max_cap(&self) -> u128 {
        self.max_cap
    }

    /// Total already paid out.
    pub fn distributed(&self) -> u128 {
        self.distributed
    }

    /// Budget left in the pool. Zero when over- or exactly spent.
    pub fn remaining(&self) -> u128 {
        self.max_cap.saturating_sub(self.distributed)
    }

    /// Whether the pool has nothing left to pay.
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Apply a payout to the running total.
    pub fn record(&mut self, payout: u128) {
        debug_assert!(payout <= self.remaining(), "payout overdraws pool");
        self.distributed = self.distributed.saturating_add(payout);
    }
}
