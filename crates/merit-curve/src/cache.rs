//! Memoization of reward tables.
//!
//! Tables are requested repeatedly with a small set of distinct
//! configs (once per UI preview render, once per batch run), so they
//! are built once per config and shared from then on. The cache is an
//! explicit object owned by the caller — there is no module-level
//! global state — which keeps test isolation and lifecycle control in
//! the caller's hands.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use merit_core::error::ConfigError;
use merit_core::types::{CurveConfig, RewardTable};

use crate::table::build_table;

/// Thread-safe table cache keyed by the full [`CurveConfig`].
///
/// Read-mostly: concurrent readers never coordinate, inserts are rare
/// (one per distinct config). Entries are immutable `Arc`s, so a cache
/// hit is the identical table instance. Cloning the cache is cheap and
/// shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct TableCache {
    tables: Arc<DashMap<CurveConfig, Arc<RewardTable>>>,
}

impl TableCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The memoized table for a config, building it on first request.
    ///
    /// Invalid configs fail every time and are never cached. If two
    /// threads race on the same missing config, both build but only
    /// one result is stored; both callers receive the stored instance.
    pub fn get_or_build(&self, config: &CurveConfig) -> Result<Arc<RewardTable>, ConfigError> {
        if let Some(table) = self.tables.get(config) {
            return Ok(Arc::clone(table.value()));
        }

        debug!(
            total_levels = config.total_levels,
            anchor = ?config.anchor,
            per_user_reward = %config.per_user_reward,
            "building reward table"
        );
        let built = Arc::new(build_table(config)?);
        let entry = self
            .tables
            .entry(*config)
            .or_insert_with(|| Arc::clone(&built));
        Ok(Arc::clone(entry.value()))
    }

    /// Number of cached tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the cache holds no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Drop all cached tables. Outstanding `Arc`s stay valid.
    pub fn clear(&self) {
        self.tables.clear();
    }
}
