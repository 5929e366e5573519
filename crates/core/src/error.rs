use std::fmt;

use thiserror::Error;

/// Why a piece of color text was rejected. Informational only; every rejection
/// is the same [`ColorError::InvalidColorFormat`] to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    Unrecognized,
    ChannelOutOfRange,
    AlphaOutOfRange,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            InvalidReason::Unrecognized => "expected fff, #ffffff, rgb(r, g, b) or rgba(r, g, b, a)",
            InvalidReason::ChannelOutOfRange => "channel values must be between 0 and 255",
            InvalidReason::AlphaOutOfRange => "alpha must be between 0 and 1",
        };
        f.write_str(msg)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color '{input}': {reason}")]
    InvalidColorFormat {
        input: String,
        reason: InvalidReason,
    },
}

impl ColorError {
    pub(crate) fn invalid(input: &str, reason: InvalidReason) -> Self {
        ColorError::InvalidColorFormat {
            input: input.to_string(),
            reason,
        }
    }

    pub fn reason(&self) -> InvalidReason {
        match self {
            ColorError::InvalidColorFormat { reason, .. } => *reason,
        }
    }
}
