//! Error taxonomy for the panorama core.

/// Errors raised by the geodesy, elevation and panorama operations.
///
/// Every variant is detected eagerly at the boundary of the offending
/// operation. None of them is recoverable by retrying the same call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkylineError {
    /// Malformed input to a pure function or constructor.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Grid access with coordinates outside the valid pixel domain.
    #[error("index ({x}, {y}) out of range")]
    IndexOutOfRange {
        /// Requested column.
        x: i64,
        /// Requested row.
        y: i64,
    },
}

impl SkylineError {
    /// Shorthand for [`SkylineError::InvalidArgument`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Fails with [`SkylineError::InvalidArgument`] unless `condition` holds.
    pub fn check(condition: bool, message: impl FnOnce() -> String) -> Result<(), Self> {
        if condition {
            Ok(())
        } else {
            Err(Self::InvalidArgument(message()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_passes_through_on_true() {
        assert!(SkylineError::check(true, || "unused".to_string()).is_ok());
    }

    #[test]
    fn test_check_reports_message_on_false() {
        let err = SkylineError::check(false, || "step must be positive".to_string()).unwrap_err();
        assert_eq!(
            err,
            SkylineError::InvalidArgument("step must be positive".to_string())
        );
        assert_eq!(err.to_string(), "invalid argument: step must be positive");
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = SkylineError::IndexOutOfRange { x: -1, y: 12 };
        assert_eq!(err.to_string(), "index (-1, 12) out of range");
    }
}
