//! Trait interfaces for the Merit engine.
//!
//! [`RewardCalculator`] is the contract between the engine crate
//! (merit-curve implements it) and its external consumers: the admin
//! UI renders preview tables through it, and the payout executor
//! drives distributions through it before persisting the running
//! total to the ledger.

use std::sync::Arc;

use crate::error::ConfigError;
use crate::types::{AllocationState, CurveConfig, RewardTable};

/// Pure computation of reward schedules and capped payouts.
///
/// All math is exact integer arithmetic; there is no I/O and no
/// suspension point anywhere behind this trait. Implementations must
/// be safe to share across threads (the table cache is read-mostly).
pub trait RewardCalculator: Send + Sync {
    /// The memoized reward schedule for a config.
    ///
    /// Fails with [`ConfigError`] before any entry is computed if the
    /// config is invalid. Repeated calls with an equal config return
    /// an identical table — cached implementations may return the
    /// same `Arc` instance.
    fn reward_table(&self, config: &CurveConfig) -> Result<Arc<RewardTable>, ConfigError>;

    /// Next payout for a level against a capped pool.
    ///
    /// Never exceeds `state.remaining()`. Returns 0 when the pool is
    /// exhausted, a smaller in-schedule reward when the ideal one
    /// would overdraw the pool, and the exact remainder when nothing
    /// in the schedule fits. Does not mutate `state`; the caller
    /// applies the payout.
    fn next_payout(&self, state: &AllocationState, table: &RewardTable, level: u32) -> u128;

    /// Sequentially allocate payouts for an ordered list of user levels.
    ///
    /// Order matters: earlier entries get first claim on the pool.
    /// The sum of payouts is bounded by `max_cap - start_distributed`.
    ///
    /// Default implementation: build the table, then left-fold
    /// [`next_payout`](Self::next_payout) carrying the running total.
    fn distribute(
        &self,
        levels: &[u32],
        max_cap: u128,
        start_distributed: u128,
        config: &CurveConfig,
    ) -> Result<Vec<u128>, ConfigError> {
        let table = self.reward_table(config)?;
        let mut state = AllocationState::new(max_cap, start_distributed);
        let mut payouts = Vec::with_capacity(levels.len());
        for &level in levels {
            let payout = self.next_payout(&state, &table, level);
            state.record(payout);
            payouts.push(payout);
        }
        Ok(payouts)
    }
}
