//! Integration tests for error types

#[cfg(test)]
mod tests {
    use credsim_errors::*;

    #[test]
    fn test_error_conversion() {
        let cfg_err = ConfigError::Invalid {
            message: "success_rate out of range".into(),
        };
        let err: Error = cfg_err.into();
        assert!(matches!(err, Error::Config(_)));

        let verify_err = VerifyError::EvaluationFailed {
            message: "boom".into(),
        };
        let err: Error = verify_err.into();
        assert!(matches!(err, Error::Verify(_)));
    }

    #[test]
    fn test_error_display() {
        let err = IntakeError::Separator { line: 3 };
        assert_eq!(err.to_string(), "line 3: expected exactly one ':' separator");
        assert_eq!(err.line(), Some(3));
        assert_eq!(IntakeError::Empty.line(), None);
    }

    #[test]
    fn test_error_clone() {
        let err = VerifyError::RandomSource {
            message: "poisoned".into(),
        };
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert!(matches!(
            err,
            Error::Io {
                kind: std::io::ErrorKind::NotFound,
                path: None,
                ..
            }
        ));
        assert!(err.is_retryable());
        assert_eq!(err.user_code(), Some("error.io"));

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::io_with_path(&io_err, "creds.txt");
        assert_eq!(err.user_message(), "creds.txt: missing");
    }

    #[test]
    fn test_user_facing_hints() {
        let err: Error = ConfigError::InvalidValue {
            field: "CREDSIM_SUCCESS_RATE".into(),
            value: "2".into(),
        }
        .into();
        assert_eq!(err.user_code(), Some("config.invalid_value"));
        assert_eq!(
            err.user_hint(),
            Some("Use a probability between 0.0 and 1.0.")
        );
        assert!(!err.is_retryable());

        let intake: Error = IntakeError::Identifier { line: 1 }.into();
        assert!(intake.user_hint().is_some());
        assert_eq!(Error::Cancelled.user_code(), Some("error.cancelled"));
    }
}
