//! Engine constants. All monetary values are in opaque currency base
//! units — display formatting and unit conversion live outside the engine.

/// Multiplier of the power-law score curve: `score(level) = BASE * level^EXP`.
pub const DEFAULT_BASE_SCORE: u128 = 100;

/// Exponent of the power-law score curve.
pub const DEFAULT_CURVE_EXPONENT: u32 = 3;

/// Smallest reward any level may receive when the configured anchor
/// reward is positive. A level must never come out empty-handed while
/// the distribution as a whole pays something.
pub const MIN_LEVEL_REWARD: u128 = 1;
