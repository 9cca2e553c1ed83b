//! # Interface State Changer
//!
//! Applies a new hardware address to a live interface:
//!
//! 1. bring the interface down
//! 2. apply the address
//! 3. bring the interface up
//!
//! Any failing step aborts the attempt, the changer sleeps a fixed backoff and starts
//! over from step 1. After `retry_limit` failed attempts it gives up. Nothing is rolled
//! back, so a failure between steps 1 and 3 leaves the interface down.

use std::time::Duration;

use pregame_common::error::{ChangeStep, StateChangeFailure, TransientStateChangeError};
use pregame_common::events::{ChangeAttempt, EventSink, RunEvent};
use pregame_common::network::mac::HardwareAddress;
use pregame_common::system::{CommandOutcome, CommandRunner, Sleeper};

/// Successful change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeReport {
    pub interface: String,
    pub address: HardwareAddress,
    /// Every attempt made, the last one being the successful one.
    pub attempts: Vec<ChangeAttempt>,
}

pub struct InterfaceStateChanger<'a> {
    runner: &'a dyn CommandRunner,
    sleeper: &'a dyn Sleeper,
    events: &'a dyn EventSink,
    retry_limit: u32,
    backoff: Duration,
}

impl<'a> InterfaceStateChanger<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        sleeper: &'a dyn Sleeper,
        events: &'a dyn EventSink,
        retry_limit: u32,
        backoff: Duration,
    ) -> Self {
        Self {
            runner,
            sleeper,
            events,
            retry_limit,
            backoff,
        }
    }

    pub fn change_address(
        &self,
        interface: &str,
        address: &HardwareAddress,
    ) -> Result<ChangeReport, StateChangeFailure> {
        self.events.record(&RunEvent::ChangeStarted {
            interface: interface.to_string(),
            address: *address,
        });

        let mut attempts: Vec<ChangeAttempt> = Vec::new();

        for number in 1..=self.retry_limit {
            match self.attempt(interface, address) {
                Ok(()) => {
                    self.events.record(&RunEvent::AttemptSucceeded {
                        interface: interface.to_string(),
                        address: *address,
                        attempt: number,
                    });
                    attempts.push(ChangeAttempt { number, error: None });

                    return Ok(ChangeReport {
                        interface: interface.to_string(),
                        address: *address,
                        attempts,
                    });
                }
                Err(error) => {
                    self.events.record(&RunEvent::AttemptFailed {
                        interface: interface.to_string(),
                        attempt: number,
                        error: error.clone(),
                        backoff: self.backoff,
                    });
                    attempts.push(ChangeAttempt {
                        number,
                        error: Some(error),
                    });
                    self.sleeper.sleep(self.backoff);
                }
            }
        }

        self.events.record(&RunEvent::GaveUp {
            interface: interface.to_string(),
            attempts: self.retry_limit,
        });

        Err(StateChangeFailure {
            interface: interface.to_string(),
            attempts,
        })
    }

    fn attempt(&self, interface: &str, address: &HardwareAddress) -> Result<(), TransientStateChangeError> {
        check(ChangeStep::Down, self.runner.set_down(interface))?;
        check(ChangeStep::SetAddress, self.runner.set_address(interface, address))?;
        check(ChangeStep::Up, self.runner.set_up(interface))
    }
}

fn check(step: ChangeStep, outcome: CommandOutcome) -> Result<(), TransientStateChangeError> {
    match outcome.into_result() {
        Ok(_) => Ok(()),
        Err(detail) => Err(TransientStateChangeError { step, detail }),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
