//! Text export of outcomes and the bundled demo input

use credsim_types::VerificationOutcome;

const SAMPLE_LINES: [&str; 10] = [
    "user1@example.com:password123",
    "user2@example.com:qwerty456",
    "user3@example.com:letmein789",
    "user4@example.com:securepass!",
    "user5@example.com:netflix2023",
    "user6@example.com:streaming#01",
    "user7@example.com:movietime22",
    "user8@example.com:watchseries99",
    "user9@example.com:netflixandchill",
    "user10@example.com:password1234",
];

/// `identifier:secret` lines for the given outcomes, joined by `\n`
#[must_use]
pub fn format_outcomes<'a, I>(outcomes: I) -> String
where
    I: IntoIterator<Item = &'a VerificationOutcome>,
{
    outcomes
        .into_iter()
        .map(VerificationOutcome::to_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Only the working outcomes, in input order
#[must_use]
pub fn format_working(outcomes: &[VerificationOutcome]) -> String {
    format_outcomes(outcomes.iter().filter(|o| o.is_working()))
}

/// Ten-line demo input
///
/// Every identifier is on `example.com`, which is not allow-listed by
/// default, so a default run over it never reports a working record.
#[must_use]
pub fn sample_input() -> String {
    SAMPLE_LINES.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use credsim_types::{CredentialRecord, OutcomeMessage};

    #[test]
    fn working_subset_keeps_order() {
        let outcomes = vec![
            VerificationOutcome::new(
                &CredentialRecord::new("a@gmail.com", "Password1"),
                OutcomeMessage::AccountActive,
            ),
            VerificationOutcome::new(
                &CredentialRecord::new("b@gmail.com", "Password2"),
                OutcomeMessage::InvalidCredentials,
            ),
            VerificationOutcome::new(
                &CredentialRecord::new("c@yahoo.com", "Pass:word3"),
                OutcomeMessage::AccountActive,
            ),
        ];
        assert_eq!(
            format_working(&outcomes),
            "a@gmail.com:Password1\nc@yahoo.com:Pass:word3"
        );
        assert_eq!(format_outcomes(&outcomes).lines().count(), 3);
    }

    #[test]
    fn nothing_working_is_empty() {
        assert_eq!(format_working(&[]), "");
    }

    #[test]
    fn sample_has_ten_lines() {
        let sample = sample_input();
        assert_eq!(sample.lines().count(), 10);
        assert!(sample.lines().all(|l| l.contains("@example.com:")));
    }
}
