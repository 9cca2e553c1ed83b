//! Observable run events.
//!
//! The core never writes logs directly; it reports what happened to an [`EventSink`].
//! Production code forwards events to `tracing`, tests collect them.

use std::time::Duration;

use crate::error::TransientStateChangeError;
use crate::network::mac::HardwareAddress;
use crate::network::oui::Classification;

/// The result of one pass through down/change/up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeAttempt {
    /// 1-based.
    pub number: u32,
    pub error: Option<TransientStateChangeError>,
}

impl ChangeAttempt {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    ToolsVerified,
    InterfacesFound {
        interfaces: Vec<String>,
    },
    Classified {
        interface: String,
        address: HardwareAddress,
        classification: Classification,
        /// The prefix is on the BAD list, not just missing from the GOOD one.
        flagged: bool,
        vendor: Option<String>,
    },
    ReplacementChosen {
        address: HardwareAddress,
        generated: bool,
    },
    ChangeStarted {
        interface: String,
        address: HardwareAddress,
    },
    AttemptSucceeded {
        interface: String,
        address: HardwareAddress,
        attempt: u32,
    },
    AttemptFailed {
        interface: String,
        attempt: u32,
        error: TransientStateChangeError,
        backoff: Duration,
    },
    GaveUp {
        interface: String,
        attempts: u32,
    },
    Fatal {
        message: String,
    },
}

pub trait EventSink {
    fn record(&self, event: &RunEvent);
}
