//! Simulated latency around record evaluation

use credsim_config::{DelayRange, PacingConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Point in the per-record cycle a delay applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaceStage {
    /// Before reporting a malformed record
    Malformed,
    /// Stand-in for request latency before classification
    Network,
    /// After a well-formed record has been reported
    InterRecord,
}

impl PaceStage {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Malformed => "malformed",
            Self::Network => "network",
            Self::InterRecord => "inter_record",
        }
    }
}

/// Decides how long the batch loop waits at each stage.
///
/// Delays only shape the pace of progress output; returning zero everywhere
/// changes nothing about ordering or results.
pub trait Pacer: Send + Sync {
    fn delay(&self, stage: PaceStage) -> Duration;
}

/// Never waits
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantPacer;

impl Pacer for InstantPacer {
    fn delay(&self, _stage: PaceStage) -> Duration {
        Duration::ZERO
    }
}

/// Draws delays uniformly from the configured ranges
pub struct SimulatedPacer {
    malformed: Duration,
    network: DelayRange,
    inter_record: DelayRange,
    rng: Mutex<StdRng>,
}

impl SimulatedPacer {
    #[must_use]
    pub fn new(config: &PacingConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    #[must_use]
    pub fn seeded(config: &PacingConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &PacingConfig, rng: StdRng) -> Self {
        Self {
            malformed: Duration::from_millis(config.malformed_delay_ms),
            network: config.network_delay,
            inter_record: config.inter_record_delay,
            rng: Mutex::new(rng),
        }
    }

    fn sample(&self, range: DelayRange) -> Duration {
        if range.min_ms >= range.max_ms {
            return range.min();
        }
        // a poisoned lock only means another draw panicked; the rng state is still usable
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        Duration::from_millis(rng.random_range(range.min_ms..=range.max_ms))
    }
}

impl Pacer for SimulatedPacer {
    fn delay(&self, stage: PaceStage) -> Duration {
        match stage {
            PaceStage::Malformed => self.malformed,
            PaceStage::Network => self.sample(self.network),
            PaceStage::InterRecord => self.sample(self.inter_record),
        }
    }
}

/// Pick the pacer a config asks for
#[must_use]
pub fn pacer_from_config(config: &PacingConfig, seed: Option<u64>) -> Box<dyn Pacer> {
    if config.disabled {
        return Box::new(InstantPacer);
    }
    match seed {
        Some(seed) => Box::new(SimulatedPacer::seeded(config, seed)),
        None => Box::new(SimulatedPacer::new(config)),
    }
}
