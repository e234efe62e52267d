//! Simulated classification of a single record
//!
//! Nothing here contacts a remote service. The heuristic rejects on shape
//! and length deterministically and accepts eligible records at random, so
//! its verdicts carry no information about any real account.

use credsim_config::HeuristicConfig;
use credsim_errors::{Error, VerifyError};
use credsim_types::{CredentialRecord, OutcomeMessage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use std::sync::Mutex;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Turns a well-formed record into an outcome message.
///
/// Called only for records with a non-empty identifier and secret. An `Err`
/// is reported as "Error checking account" for that record alone.
pub trait Classifier: Send + Sync {
    /// Classify one record
    ///
    /// # Errors
    ///
    /// Returns a `VerifyError` when the record could not be evaluated.
    fn classify(&self, record: &CredentialRecord) -> Result<OutcomeMessage, VerifyError>;
}

/// Three-tier heuristic: email shape, then secret length, then a random
/// draw for records on an allow-listed domain with a strong-enough secret.
pub struct HeuristicClassifier {
    email: Regex,
    allowed_domains: Vec<String>,
    min_secret_length: usize,
    strong_secret_length: usize,
    success_rate: f64,
    rng: Mutex<StdRng>,
}

impl HeuristicClassifier {
    /// Build from config with an OS-seeded random source
    ///
    /// # Errors
    ///
    /// Returns an error if the success rate lies outside `0.0..=1.0`.
    pub fn new(config: &HeuristicConfig) -> Result<Self, Error> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Build from config with a fixed seed, making every draw reproducible
    ///
    /// # Errors
    ///
    /// Returns an error if the success rate lies outside `0.0..=1.0`.
    pub fn seeded(config: &HeuristicConfig, seed: u64) -> Result<Self, Error> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &HeuristicConfig, rng: StdRng) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&config.success_rate) {
            return Err(VerifyError::InvalidHeuristic {
                field: "success_rate".to_string(),
                message: format!("{} is not a probability", config.success_rate),
            }
            .into());
        }
        let email = Regex::new(EMAIL_PATTERN).map_err(|e| VerifyError::InvalidHeuristic {
            field: "email_pattern".to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            email,
            allowed_domains: config
                .allowed_domains
                .iter()
                .map(|d| d.trim().to_ascii_lowercase())
                .filter(|d| !d.is_empty())
                .collect(),
            min_secret_length: config.min_secret_length,
            strong_secret_length: config.strong_secret_length,
            success_rate: config.success_rate,
            rng: Mutex::new(rng),
        })
    }

    /// True when `identifier` has the basic `local@domain.tld` shape
    #[must_use]
    pub fn is_email(&self, identifier: &str) -> bool {
        self.email.is_match(identifier)
    }

    /// True when a record could ever be classified as working
    #[must_use]
    pub fn is_eligible(&self, record: &CredentialRecord) -> bool {
        self.domain_allowed(&record.identifier) && self.is_strong(&record.secret)
    }

    fn domain_allowed(&self, identifier: &str) -> bool {
        let Some((_, domain)) = identifier.rsplit_once('@') else {
            return false;
        };
        let domain = domain.to_ascii_lowercase();
        self.allowed_domains.iter().any(|allowed| *allowed == domain)
    }

    fn is_strong(&self, secret: &str) -> bool {
        secret.chars().count() >= self.strong_secret_length
            || (secret.chars().any(|c| c.is_ascii_uppercase())
                && secret.chars().any(|c| c.is_ascii_digit()))
    }

    fn draw(&self) -> Result<f64, VerifyError> {
        let mut rng = self.rng.lock().map_err(|e| VerifyError::RandomSource {
            message: e.to_string(),
        })?;
        Ok(rng.random::<f64>())
    }
}

impl Classifier for HeuristicClassifier {
    fn classify(&self, record: &CredentialRecord) -> Result<OutcomeMessage, VerifyError> {
        if !self.is_email(&record.identifier) {
            return Ok(OutcomeMessage::InvalidEmailFormat);
        }
        if record.secret.chars().count() < self.min_secret_length {
            return Ok(OutcomeMessage::PasswordTooShort);
        }
        if !self.is_eligible(record) {
            return Ok(OutcomeMessage::InvalidCredentials);
        }

        if self.draw()? < self.success_rate {
            Ok(OutcomeMessage::AccountActive)
        } else {
            Ok(OutcomeMessage::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier(success_rate: f64) -> HeuristicClassifier {
        let config = HeuristicConfig {
            success_rate,
            ..HeuristicConfig::default()
        };
        HeuristicClassifier::seeded(&config, 7).unwrap()
    }

    fn classify(classifier: &HeuristicClassifier, id: &str, secret: &str) -> OutcomeMessage {
        classifier
            .classify(&CredentialRecord::new(id, secret))
            .unwrap()
    }

    #[test]
    fn email_shape_is_checked_first() {
        let c = classifier(1.0);
        assert_eq!(classify(&c, "bob", "pw1234"), OutcomeMessage::InvalidEmailFormat);
        assert_eq!(classify(&c, "bob@gmail", "ab"), OutcomeMessage::InvalidEmailFormat);
        assert_eq!(
            classify(&c, "b ob@gmail.com", "Password1"),
            OutcomeMessage::InvalidEmailFormat
        );
    }

    #[test]
    fn short_secret_is_rejected_after_shape() {
        let c = classifier(1.0);
        assert_eq!(classify(&c, "a@b.com", "abc"), OutcomeMessage::PasswordTooShort);
        assert_eq!(classify(&c, "a@gmail.com", "A1"), OutcomeMessage::PasswordTooShort);
    }

    #[test]
    fn ineligible_records_never_work() {
        let c = classifier(1.0);
        // domain not allow-listed
        assert_eq!(
            classify(&c, "a@example.com", "Password1"),
            OutcomeMessage::InvalidCredentials
        );
        // allow-listed but weak secret
        assert_eq!(classify(&c, "b@yahoo.com", "short"), OutcomeMessage::InvalidCredentials);
        // look-alike domain is not the allow-listed one
        assert_eq!(
            classify(&c, "a@notgmail.com", "Password1"),
            OutcomeMessage::InvalidCredentials
        );
    }

    #[test]
    fn eligibility_accepts_long_or_mixed_secrets() {
        let c = classifier(1.0);
        assert!(c.is_eligible(&CredentialRecord::new("a@gmail.com", "longlonglong")));
        assert!(c.is_eligible(&CredentialRecord::new("a@Outlook.COM", "Ab12")));
        assert!(!c.is_eligible(&CredentialRecord::new("a@gmail.com", "ab12")));
        assert!(!c.is_eligible(&CredentialRecord::new("a@gmail.com", "ABCD")));
    }

    #[test]
    fn success_rate_bounds_are_deterministic() {
        let always = classifier(1.0);
        let never = classifier(0.0);
        for _ in 0..50 {
            assert_eq!(
                classify(&always, "x@gmail.com", "Password1"),
                OutcomeMessage::AccountActive
            );
            assert_eq!(
                classify(&never, "x@gmail.com", "Password1"),
                OutcomeMessage::InvalidCredentials
            );
        }
    }

    #[test]
    fn acceptance_rate_tracks_configuration() {
        let c = classifier(0.3);
        let trials: u32 = 10_000;
        let working = (0..trials)
            .map(|_| classify(&c, "x@gmail.com", "Password1"))
            .filter(|message| *message == OutcomeMessage::AccountActive)
            .count();
        let rate = f64::from(u32::try_from(working).unwrap()) / f64::from(trials);
        assert!((rate - 0.3).abs() < 0.03, "observed rate {rate}");
    }

    #[test]
    fn same_seed_same_verdicts() {
        let config = HeuristicConfig::default();
        let a = HeuristicClassifier::seeded(&config, 42).unwrap();
        let b = HeuristicClassifier::seeded(&config, 42).unwrap();
        let record = CredentialRecord::new("x@gmail.com", "Password1");
        for _ in 0..20 {
            assert_eq!(a.classify(&record).unwrap(), b.classify(&record).unwrap());
        }
    }

    #[test]
    fn rejects_out_of_range_success_rate() {
        let config = HeuristicConfig {
            success_rate: 1.5,
            ..HeuristicConfig::default()
        };
        assert!(HeuristicClassifier::new(&config).is_err());
    }
}
