//! Cross-crate invariant test suite for the Merit engine.
//!
//! This crate exercises the engine the way its real consumers do:
//! preview tables through the
//! [`RewardCalculator`](merit_core::traits::RewardCalculator) trait,
//! full batch
//! distributions against capped pools, and resumed runs with a
//! non-zero ledger total. The financial-correctness invariants
//! (anchor exactness, pool never over-spent, deterministic tables)
//! are verified end to end here.

pub mod helpers;
