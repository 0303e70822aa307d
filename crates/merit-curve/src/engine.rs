//! Curve engine implementing the [`RewardCalculator`] trait.
//!
//! Ties the table builder, cache, allocator, and distributor together
//! behind the trait seam that external collaborators (UI preview,
//! payout executor) consume.

use std::sync::Arc;

use merit_core::error::ConfigError;
use merit_core::traits::RewardCalculator;
use merit_core::types::{AllocationState, CurveConfig, RewardTable};

use crate::allocator;
use crate::cache::TableCache;
use crate::distributor;

/// The production reward calculator.
///
/// Carries an injectable [`TableCache`]; clones share it, so one
/// engine value can serve preview rendering and payout execution with
/// a single set of memoized tables.
#[derive(Debug, Clone, Default)]
pub struct CurveEngine {
    cache: TableCache,
}

impl CurveEngine {
    /// Engine with a fresh empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine sharing an existing cache.
    pub fn with_cache(cache: TableCache) -> Self {
        Self { cache }
    }

    /// The engine's table cache.
    pub fn cache(&self) -> &TableCache {
        &self.cache
    }
}

impl RewardCalculator for CurveEngine {
    fn reward_table(&self, config: &CurveConfig) -> Result<Arc<RewardTable>, ConfigError> {
        self.cache.get_or_build(config)
    }

    fn next_payout(&self, state: &AllocationState, table: &RewardTable, level: u32) -> u128 {
        allocator::next_payout(state, table, level)
    }

    fn distribute(
        &self,
        levels: &[u32],
        max_cap: u128,
        start_distributed: u128,
        config: &CurveConfig,
    ) -> Result<Vec<u128>, ConfigError> {
        let table = self.reward_table(config)?;
        Ok(distributor::distribute(
            levels,
            max_cap,
            start_distributed,
            &table,
        ))
    }
}
