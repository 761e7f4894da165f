use std::fmt;

/// Errors raised when a [`SearchConfig`](crate::SearchConfig) is rejected.
///
/// All of them are fatal at construction time.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Grid side length is zero or negative.
    NonPositiveSide(i32),
    /// Grid side length is positive but leaves no room for distinct start
    /// and goal cells.
    SideTooSmall(i32),
    /// Grid side length exceeds [`MAX_SIDE`](crate::config::MAX_SIDE).
    SideTooLarge(i32),
    /// Depth limit for depth-bounded search is zero.
    NonPositiveDepthLimit,
    /// Obstacle probability is outside `[0, 1]` (or NaN).
    ProbabilityOutOfRange(f64),
    /// The static wall segment spans no rows.
    WallPatternEmpty,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveSide(n) => write!(f, "grid side length must be positive, got {n}"),
            Self::SideTooSmall(n) => {
                write!(f, "grid side length {n} cannot hold distinct start and goal cells")
            }
            Self::SideTooLarge(n) => write!(
                f,
                "grid side length {n} exceeds the maximum of {}",
                crate::config::MAX_SIDE
            ),
            Self::NonPositiveDepthLimit => f.write_str("depth limit must be positive"),
            Self::ProbabilityOutOfRange(p) => {
                write!(f, "obstacle probability must lie in [0, 1], got {p}")
            }
            Self::WallPatternEmpty => f.write_str("static wall segment spans no rows"),
        }
    }
}

impl std::error::Error for ConfigError {}
