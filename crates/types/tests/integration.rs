//! Integration tests for types

#[cfg(test)]
mod tests {
    use credsim_types::*;

    #[test]
    fn test_report_serialization() {
        let record = CredentialRecord::from_line(" a@gmail.com : Password1 ");
        let outcome = VerificationOutcome::new(&record, OutcomeMessage::AccountActive);
        let report = BatchReport::new(vec![outcome], 1, BatchStatus::Complete, 12);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcomes"][0]["identifier"], "a@gmail.com");
        assert_eq!(json["outcomes"][0]["isWorking"], true);
        assert_eq!(json["outcomes"][0]["message"], "Account active");
        assert_eq!(json["summary"]["working"], 1);
        assert_eq!(json["status"]["status"], "complete");

        let back: BatchReport = serde_json::from_value(json).unwrap();
        assert_eq!(back.outcomes, report.outcomes);
    }

    #[test]
    fn test_debug_output_redacts_secret() {
        let record = CredentialRecord::new("a@gmail.com", "hunter2");
        let outcome = VerificationOutcome::new(&record, OutcomeMessage::InvalidCredentials);
        assert!(!format!("{record:?}").contains("hunter2"));
        assert!(!format!("{outcome:?}").contains("hunter2"));
        assert_eq!(outcome.to_line(), "a@gmail.com:hunter2");
    }

    #[test]
    fn test_cli_enums_use_lowercase() {
        assert_eq!(serde_json::to_string(&ColorChoice::Never).unwrap(), r#""never""#);
        assert_eq!(serde_json::to_string(&OutputFormat::Json).unwrap(), r#""json""#);
        assert_eq!(OutputFormat::default(), OutputFormat::Tty);
    }
}
