use tracing::{debug, error, info, warn};

use pregame_common::events::{EventSink, RunEvent};
use pregame_common::network::oui::Classification;
use pregame_common::{critical, success};

/// Forwards run events to `tracing`, which in turn feeds the terminal and the
/// diagnostic log.
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: &RunEvent) {
        match event {
            RunEvent::ToolsVerified => info!("All prerequisites installed."),
            RunEvent::InterfacesFound { interfaces } => {
                debug!("Found {} wireless interface(s): {}", interfaces.len(), interfaces.join(", "))
            }
            RunEvent::Classified {
                interface,
                address,
                classification,
                flagged,
                vendor,
            } => {
                let vendor = vendor.as_deref().unwrap_or("unknown vendor");
                match (classification, flagged) {
                    (Classification::Good, _) => {
                        info!("{interface} has {address} ({vendor}): {classification}")
                    }
                    (Classification::Bad, true) => {
                        warn!("{interface} has {address} ({vendor}): {classification}, prefix is flagged")
                    }
                    (Classification::Bad, false) => {
                        warn!("{interface} has {address} ({vendor}): {classification}, prefix is not trusted")
                    }
                }
            }
            RunEvent::ReplacementChosen { address, generated } => {
                let source = if *generated { "generated" } else { "entered manually" };
                info!("Replacement address {address} {source}")
            }
            RunEvent::ChangeStarted { interface, address } => {
                debug!("Changing address of {interface} to {address}")
            }
            RunEvent::AttemptSucceeded {
                interface,
                address,
                attempt,
            } => success!("Changed address on {interface} to {address} (attempt {attempt})"),
            RunEvent::AttemptFailed {
                attempt,
                error,
                backoff,
                ..
            } => error!(
                "Attempt {attempt}: could not change address ({error}), retrying in {}s",
                backoff.as_secs_f32()
            ),
            RunEvent::GaveUp { interface, attempts } => {
                critical!("Giving up changing address for {interface} after {attempts} attempts")
            }
            RunEvent::Fatal { message } => critical!("{message}"),
        }
    }
}
