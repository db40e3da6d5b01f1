//! Tests for error display, sources and recoverability

#[cfg(test)]
mod tests {
    use lozenge_cftp::io::error::invalid_parameter;
    use lozenge_cftp::SamplerError;
    use std::error::Error;
    use std::path::PathBuf;

    // Tests invalid parameter errors name the parameter, value and reason
    // Verified by omitting the value from the message
    #[test]
    fn test_invalid_parameter_display() {
        let error = invalid_parameter("a", &0, &"side lengths must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'a' = '0': side lengths must be positive"
        );
        assert!(error.source().is_none());
        assert!(!error.is_recoverable());
    }

    // Tests invalid state errors carry the violated invariant
    // Verified by printing a fixed message
    #[test]
    fn test_invalid_state_display() {
        let error = SamplerError::InvalidState {
            reason: "paths 1 and 2 touch at position 3".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid path system: paths 1 and 2 touch at position 3"
        );
    }

    // Tests only budget exhaustion is recoverable
    // Verified by marking every error recoverable
    #[test]
    fn test_budget_exceeded_recoverable() {
        let error = SamplerError::StepBudgetExceeded {
            budget: 100,
            rounds: 4,
        };
        assert!(error.is_recoverable());
        assert_eq!(
            error.to_string(),
            "No coalescence within 100 steps (gave up in round 4)"
        );
    }

    // Tests file system errors keep their source and path
    // Verified by returning None from source
    #[test]
    fn test_file_system_source() {
        let error = SamplerError::FileSystem {
            path: PathBuf::from("/tmp/out"),
            operation: "create directory",
            source: std::io::Error::other("denied"),
        };
        let message = error.to_string();
        assert!(message.contains("create directory"));
        assert!(message.contains("/tmp/out"));
        assert!(message.contains("denied"));
        assert!(error.source().is_some());
        assert!(!error.is_recoverable());
    }

    // Tests conversion from io errors
    // Verified by dropping the underlying error
    #[test]
    fn test_from_io_error() {
        let error: SamplerError = std::io::Error::other("disk full").into();
        match &error {
            SamplerError::FileSystem { source, .. } => assert_eq!(source.to_string(), "disk full"),
            other => unreachable!("expected FileSystem, got {other:?}"),
        }
    }
}
