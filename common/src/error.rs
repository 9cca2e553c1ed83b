//! # Error Taxonomy
//!
//! | error | recovery |
//! |-------|----------|
//! | [`ConfigurationError`] | fatal, the run stops before touching anything |
//! | [`DiscoveryError`] | fatal for the current run |
//! | [`ValidationError`] | re-prompt (interactive) or reject (command line) |
//! | [`TransientStateChangeError`] | retried by the state changer |
//! | [`StateChangeFailure`] | reported as the outcome of the run, not a crash |
//!
//! Anything else ends up in [`PregameError::Unexpected`].

use std::fmt;

use thiserror::Error;

use crate::events::ChangeAttempt;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid hardware address `{0}` (expected format xx:xx:xx:xx:xx:xx)")]
    MalformedAddress(String),
    #[error("invalid vendor prefix `{0}` (expected format xx:xx:xx)")]
    MalformedPrefix(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("missing required tools: {}. Please install them.", .0.join(", "))]
    MissingTools(Vec<String>),
    #[error("no good vendor prefixes configured")]
    NoGoodPrefixes,
    #[error("retry limit must be at least 1")]
    InvalidRetryLimit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscoveryError {
    #[error("no wireless interfaces found")]
    NoInterfaces,
    #[error("could not read the hardware address of {interface}")]
    AddressUnavailable { interface: String },
    #[error("{interface} reported an unusable hardware address `{reported}`")]
    UnparseableAddress { interface: String, reported: String },
}

/// One step of the down/change/up sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeStep {
    Down,
    SetAddress,
    Up,
}

impl fmt::Display for ChangeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeStep::Down => write!(f, "bringing the interface down"),
            ChangeStep::SetAddress => write!(f, "applying the new address"),
            ChangeStep::Up => write!(f, "bringing the interface up"),
        }
    }
}

/// A single failed step inside one attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{step} failed: {detail}")]
pub struct TransientStateChangeError {
    pub step: ChangeStep,
    pub detail: String,
}

/// Every attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not change the address of {interface} after {} attempts", attempts.len())]
pub struct StateChangeFailure {
    pub interface: String,
    pub attempts: Vec<ChangeAttempt>,
}

#[derive(Debug, Error)]
pub enum PregameError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}
