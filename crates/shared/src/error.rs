use thiserror::Error;

/// Shown when the user or system declines foreground location access.
pub const PERMISSION_DENIED_MESSAGE: &str = "Permission to access location was denied";

/// Shown for every other acquisition failure. The real cause stays on the
/// diagnostic log channel.
pub const ACQUISITION_FAILED_MESSAGE: &str = "Failed to fetch location";

/// Terminal outcome of one acquisition run. Both kinds end the run; there is
/// no automatic retry.
#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("{}", PERMISSION_DENIED_MESSAGE)]
    PermissionDenied,
    #[error("{}", ACQUISITION_FAILED_MESSAGE)]
    Acquisition {
        #[source]
        source: anyhow::Error,
    },
}

impl AcquireError {
    pub fn acquisition(source: impl Into<anyhow::Error>) -> Self {
        Self::Acquisition {
            source: source.into(),
        }
    }

    /// The fixed text a user-facing surface may show for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::PermissionDenied => PERMISSION_DENIED_MESSAGE,
            Self::Acquisition { .. } => ACQUISITION_FAILED_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn user_messages_match_the_fixed_literals() {
        assert_eq!(
            AcquireError::PermissionDenied.user_message(),
            "Permission to access location was denied"
        );
        assert_eq!(
            AcquireError::acquisition(anyhow!("gps hardware offline")).user_message(),
            "Failed to fetch location"
        );
    }

    #[test]
    fn acquisition_keeps_the_cause_as_source() {
        let err = AcquireError::acquisition(anyhow!("provider timed out"));
        let source = std::error::Error::source(&err).expect("source");
        assert!(source.to_string().contains("provider timed out"));
    }
}
