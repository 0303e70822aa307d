//! Error types for the Merit engine.
use thiserror::Error;

/// Invalid [`CurveConfig`](crate::types::CurveConfig) parameters.
///
/// Surfaced synchronously at table-build time, before any entry is
/// computed — callers never receive a partially built table. A
/// misconfigured reward pool is a financial-correctness risk, so
/// nothing here is silently coerced.
///
/// Pool exhaustion is *not* an error: the allocator reports it as a
/// zero or partial "dust" payout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("total levels must be at least 1, got {0}")] InvalidTotalLevels(u32),
    #[error("base score must be positive")] ZeroBaseScore,
    #[error("curve exponent must be positive")] ZeroExponent,
    #[error("arithmetic overflow")] ArithmeticOverflow,
}

#[derive(Error, Debug)]
pub enum MeritError {
    #[error(transparent)] Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_converts_to_merit_error() {
        let err: MeritError = ConfigError::InvalidTotalLevels(0).into();
        assert!(matches!(err, MeritError::Config(_)));
        assert_eq!(err.to_string(), "total levels must be at least 1, got 0");
    }

    #[test]
    fn messages_name_the_offending_field() {
        assert_eq!(ConfigError::ZeroBaseScore.to_string(), "base score must be positive");
        assert_eq!(ConfigError::ZeroExponent.to_string(), "curve exponent must be positive");
        assert_eq!(ConfigError::ArithmeticOverflow.to_string(), "arithmetic overflow");
    }
}
