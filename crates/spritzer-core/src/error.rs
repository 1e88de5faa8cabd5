use core::fmt;

/// Failures surfaced by the pacing engine and pivot calculator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpritzError {
    /// Character width was zero, negative or not finite.
    InvalidMetrics,
    /// Words-per-minute must be greater than zero.
    InvalidRate,
    /// The host timer refused to schedule the next tick.
    TimerUnavailable,
}

impl fmt::Display for SpritzError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMetrics => f.write_str("invalid text metrics"),
            Self::InvalidRate => f.write_str("words per minute must be positive"),
            Self::TimerUnavailable => f.write_str("timer service unavailable"),
        }
    }
}

impl core::error::Error for SpritzError {}
