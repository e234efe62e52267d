#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Batch credential-verification simulator
//!
//! Parses `identifier:secret` lines and evaluates them strictly one at a
//! time, reporting a progress percentage and an outcome per record. No
//! record ever leaves the process: classification is a local heuristic
//! with a random acceptance draw, and the delays only imitate latency.
//!
//! ```no_run
//! # async fn demo() -> credsim_errors::Result<()> {
//! use credsim_config::Config;
//! use credsim_verifier::{BatchUpdate, BatchVerifier};
//!
//! let verifier = BatchVerifier::from_config(&Config::default(), Some(7))?;
//! let mut updates: Vec<BatchUpdate> = Vec::new();
//! let report = verifier.run("a@gmail.com:Password1\nbad", &mut updates).await;
//! assert_eq!(report.outcomes.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod classify;
pub mod export;
pub mod intake;
pub mod pacing;
pub mod parse;
pub mod sink;

pub use batch::{BatchState, BatchVerifier};
pub use classify::{Classifier, HeuristicClassifier};
pub use export::{format_outcomes, format_working, sample_input};
pub use intake::validate_intake;
pub use pacing::{pacer_from_config, InstantPacer, PaceStage, Pacer, SimulatedPacer};
pub use parse::{credential_lines, parse_records};
pub use sink::{sink_fn, BatchSink, BatchUpdate, EventSink, FnSink};

pub use tokio_util::sync::CancellationToken;
