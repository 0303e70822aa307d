//! # merit-core
//! Foundation types and traits for the Merit reward engine.

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;
