//! Batch distribution: ordered fold of the allocator over user levels.
//!
//! Explicitly sequential and non-commutative — earlier entries in the
//! sequence get first claim on the pool, so the same multiset of
//! levels in a different order can yield different individual payouts.
//! The *sum* of payouts is bounded by `max_cap - start_distributed`
//! regardless of order. Do not parallelize this without re-deriving
//! the running total serially (prefix scan plus a single-threaded
//! commit phase).

use tracing::debug;

use merit_core::types::{AllocationState, RewardTable};

use crate::allocator::next_payout;

/// Allocate payouts for an ordered list of user levels against a
/// capped pool, one table already in hand.
///
/// Returns one payout per input level, order-preserving. The running
/// total starts at `start_distributed` (non-zero when resuming a
/// partially spent pool) and each payout is applied before the next
/// step.
pub fn distribute(
    levels: &[u32],
    max_cap: u128,
    start_distributed: u128,
    table: &RewardTable,
) -> Vec<u128> {
    let mut state = AllocationState::new(max_cap, start_distributed);
    let mut payouts = Vec::with_capacity(levels.len());
    for &level in levels {
        let payout = next_payout(&state, table, level);
        state.record(payout);
        payouts.push(payout);
    }
    debug!(
        users = levels.len(),
        distributed = %state.distributed(),
        remaining = %state.remaining(),
        "batch distribution complete"
    );
    payouts
}
