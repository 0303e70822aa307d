//! Reward table derivation.
//!
//! The schedule is the score curve rescaled so that the anchor level
//! pays exactly the configured reward:
//! `reward[i] = per_user_reward * score(i) / score(anchor)`, with exact
//! u128 multiplication and floor division. Floor truncation can only
//! reduce non-anchor levels — at the anchor the ratio reduces to 1 and
//! the division is exact.

use merit_core::constants::MIN_LEVEL_REWARD;
use merit_core::error::ConfigError;
use merit_core::types::{CurveConfig, RewardTable};

use crate::score::level_score;

/// Derive the full per-level reward schedule for a config.
///
/// Validates the config before computing any entry, so callers never
/// observe a partially built table. When `per_user_reward > 0`, every
/// entry is clamped to at least [`MIN_LEVEL_REWARD`]: no level earns
/// zero while the distribution as a whole pays something.
///
/// Memoization lives in [`TableCache`](crate::cache::TableCache); this
/// function always recomputes.
pub fn build_table(config: &CurveConfig) -> Result<RewardTable, ConfigError> {
    config.validate()?;

    let denom = level_score(config.anchor_level(), config.base_score, config.exponent)?;
    // Cannot be zero with base_score >= 1; guard so division stays total.
    let denom = denom.max(1);

    let mut rewards = Vec::with_capacity(config.total_levels as usize);
    for level in 1..=config.total_levels {
        let score = level_score(level, config.base_score, config.exponent)?;
        let scaled = config
            .per_user_reward
            .checked_mul(score)
            .ok_or(ConfigError::ArithmeticOverflow)?
            / denom;
        let reward = if config.per_user_reward > 0 {
            scaled.max(MIN_LEVEL_REWARD)
        } else {
            scaled
        };
        rewards.push(reward);
    }

    Ok(RewardTable::new(*config, rewards))
}
