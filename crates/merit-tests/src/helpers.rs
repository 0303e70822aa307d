//! Shared test helpers for the integration suite.

use merit_core::types::{AnchorPolicy, CurveConfig};
use merit_curve::CurveEngine;

/// Default cubic ladder anchored at the top level.
pub fn top_anchored(total_levels: u32, per_user_reward: u128) -> CurveConfig {
    CurveConfig::new(total_levels, AnchorPolicy::AnchorMax, per_user_reward)
}

/// Default cubic ladder anchored at level 1.
pub fn bottom_anchored(total_levels: u32, per_user_reward: u128) -> CurveConfig {
    CurveConfig::new(total_levels, AnchorPolicy::AnchorMin, per_user_reward)
}

/// Linear ladder (exponent 1) anchored at level 1, so the schedule is
/// `per, 2*per, 3*per, ...` — convenient for hand-checked scenarios.
pub fn linear(total_levels: u32, per_user_reward: u128) -> CurveConfig {
    let mut config = CurveConfig::new(total_levels, AnchorPolicy::AnchorMin, per_user_reward);
    config.exponent = 1;
    config
}

/// Fresh engine with an empty cache.
pub fn engine() -> CurveEngine {
    CurveEngine::new()
}
