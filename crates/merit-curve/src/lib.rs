//! # merit-curve — Civic reward-curve engine.
//!
//! All calculations use integer arithmetic only for determinism.
//!
//! This crate derives per-level reward schedules and allocates payouts
//! against a shared, capped pool:
//! - **Power-law score curve**: `score(level) = base_score * level^exponent`,
//!   exact integer exponentiation, strictly increasing in level.
//! - **Anchored schedules**: one end of the ladder receives exactly the
//!   configured reward; every other level is scaled from it with exact
//!   floor division.
//! - **Capped allocation**: when the ideal reward would overdraw the
//!   pool, a binary search over the (sorted) schedule prefix degrades
//!   gracefully to a smaller reward, and a final "dust" payment spends
//!   the pool down to exactly zero.
//! - **Memoized tables**: schedules are cached per config in an
//!   injectable, thread-safe [`TableCache`].

pub mod allocator;
pub mod cache;
pub mod distributor;
pub mod engine;
pub mod score;
pub mod table;

pub use allocator::next_payout;
pub use cache::TableCache;
pub use distributor::distribute;
pub use engine::CurveEngine;
pub use score::level_score;
pub use table::build_table;
