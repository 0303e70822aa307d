//! Power-law score curve.
//!
//! The score curve is the shape of the reward ladder before any
//! scaling: the table builder divides it by the anchor score to turn
//! scores into currency amounts.

use merit_core::error::ConfigError;

/// Score of a ladder level: `base_score * level^exponent`.
///
/// Exact integer exponentiation — never computed through floating
/// point. Levels below 1 clamp to `base_score` (the rest of the engine
/// never calls with level < 1). Monotone non-decreasing in `level` for
/// fixed `base_score`/`exponent`, which is what the allocator's binary
/// search relies on.
pub fn level_score(level: u32, base_score: u128, exponent: u32) -> Result<u128, ConfigError> {
    if level < 1 {
        return Ok(base_score);
    }
    let powed = u128::from(level)
        .checked_pow(exponent)
        .ok_or(ConfigError::ArithmeticOverflow)?;
    base_score
        .checked_mul(powed)
        .ok_or(ConfigError::ArithmeticOverflow)
}
