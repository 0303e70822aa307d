//! Capped pool allocation.
//!
//! The allocator computes one payout at a time and never mutates the
//! pool state — the distributor applies each payout to the running
//! total. That separation keeps this module pure and independently
//! testable.

use merit_core::types::{AllocationState, RewardTable};

/// Largest schedule entry that fits within `remaining`.
///
/// `rewards` must be sorted ascending (table invariant). Upper-bound
/// binary search, O(log n).
fn largest_fitting(rewards: &[u128], remaining: u128) -> Option<u128> {
    let idx = rewards.partition_point(|&r| r <= remaining);
    if idx == 0 { None } else { Some(rewards[idx - 1]) }
}

/// Next payout for a 1-based `level` against the pool in `state`.
///
/// - Pool exhausted: returns 0. Expected terminal condition, not an
///   error.
/// - Common case: the level's scheduled reward fits and is returned.
/// - Overdraw: binary-search the schedule prefix up to `level` for the
///   largest reward that still fits — graceful degradation to a
///   smaller-level reward instead of a hard failure.
/// - Nothing fits: returns the exact remainder, a terminal "dust"
///   payment that spends the pool to zero. The pool is never left with
///   an unspendable residue smaller than the smallest schedule entry.
///
/// `level` is clamped into `[1, table.len()]`. The returned payout is
/// always `<= state.remaining()`.
pub fn next_payout(state: &AllocationState, table: &RewardTable, level: u32) -> u128 {
    let remaining = state.remaining();
    if remaining == 0 || table.is_empty() {
        return 0;
    }

    let level = level.clamp(1, table.len() as u32) as usize;
    let ideal = table.rewards()[level - 1];
    if remaining >= ideal {
        return ideal;
    }

    match largest_fitting(&table.rewards()[..level], remaining) {
        Some(fit) => fit,
        None => remaining,
    }
}
