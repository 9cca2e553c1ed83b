//! # Pregame Service
//!
//! Implements the end-to-end run:
//!
//! 1. verify the external tools are installed
//! 2. list wireless interfaces and let the operator pick one
//! 3. read and classify its current address
//! 4. if BAD, obtain a replacement and hand it to the [`InterfaceStateChanger`]
//!
//! Steps 1 to 3 fail the whole run. A failed change in step 4 does not: it is
//! reported as [`RunOutcome::ChangeFailed`].

use pregame_common::config::Config;
use pregame_common::error::{ConfigurationError, DiscoveryError, PregameError, StateChangeFailure};
use pregame_common::events::{EventSink, RunEvent};
use pregame_common::network::mac::HardwareAddress;
use pregame_common::network::oui::Classification;
use pregame_common::operator::{Operator, Replacement};
use pregame_common::system::{CommandRunner, Sleeper};
use pregame_common::vendors::VendorRepository;

use crate::changer::InterfaceStateChanger;
use crate::{classifier, generator, system};

/// An address together with the vendor it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressInfo {
    pub address: HardwareAddress,
    pub vendor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The current address is already on a GOOD prefix. Nothing was changed.
    NoChangeNeeded {
        interface: String,
        current: AddressInfo,
    },
    Changed {
        interface: String,
        previous: AddressInfo,
        new: AddressInfo,
        attempts: usize,
    },
    ChangeFailed {
        interface: String,
        previous: AddressInfo,
        attempted: HardwareAddress,
        failure: StateChangeFailure,
    },
}

pub struct PregameService {
    config: Config,
    runner: Box<dyn CommandRunner>,
    sleeper: Box<dyn Sleeper>,
    events: Box<dyn EventSink>,
    vendor_repo: Box<dyn VendorRepository>,
}

impl PregameService {
    pub fn new(
        config: Config,
        runner: Box<dyn CommandRunner>,
        sleeper: Box<dyn Sleeper>,
        events: Box<dyn EventSink>,
        vendor_repo: Box<dyn VendorRepository>,
    ) -> Self {
        Self {
            config,
            runner,
            sleeper,
            events,
            vendor_repo,
        }
    }

    /// Full run, starting with the prerequisite check.
    pub fn run(&self, operator: &mut dyn Operator) -> Result<RunOutcome, PregameError> {
        self.preflight()?;
        self.run_verified(operator)
    }

    /// Fails with [`ConfigurationError::MissingTools`] unless every required tool is on `PATH`.
    pub fn preflight(&self) -> Result<(), PregameError> {
        self.ensure_prerequisites()
    }

    /// Everything after [`PregameService::preflight`].
    pub fn run_verified(&self, operator: &mut dyn Operator) -> Result<RunOutcome, PregameError> {
        let interfaces = self.discover_interfaces()?;

        let interface = operator.select_interface(&interfaces)?;
        let current = self.read_address(&interface)?;

        let classification = classifier::classify(&current, &self.config.good_ouis);
        let current = self.describe(current);
        self.events.record(&RunEvent::Classified {
            interface: interface.clone(),
            address: current.address,
            classification,
            flagged: classifier::is_flagged(&current.address, &self.config.bad_ouis),
            vendor: current.vendor.clone(),
        });

        if classification == Classification::Good {
            return Ok(RunOutcome::NoChangeNeeded { interface, current });
        }

        let new_address = match operator.choose_replacement(&current.address)? {
            Replacement::Generate => {
                let address = generator::generate_good(&self.config.good_ouis, &mut rand::rng())
                    .map_err(|e| self.fatal(e))?;
                self.events.record(&RunEvent::ReplacementChosen {
                    address,
                    generated: true,
                });
                address
            }
            Replacement::Manual(address) => {
                self.events.record(&RunEvent::ReplacementChosen {
                    address,
                    generated: false,
                });
                address
            }
        };

        let changer = InterfaceStateChanger::new(
            self.runner.as_ref(),
            self.sleeper.as_ref(),
            self.events.as_ref(),
            self.config.retry_limit,
            self.config.backoff,
        );

        match changer.change_address(&interface, &new_address) {
            Ok(report) => Ok(RunOutcome::Changed {
                interface,
                previous: current,
                new: self.describe(new_address),
                attempts: report.attempts.len(),
            }),
            Err(failure) => Ok(RunOutcome::ChangeFailed {
                interface,
                previous: current,
                attempted: new_address,
                failure,
            }),
        }
    }

    fn ensure_prerequisites(&self) -> Result<(), PregameError> {
        let missing = self.runner.missing_tools(&self.config.required_tools);
        if !missing.is_empty() {
            return Err(self.fatal(ConfigurationError::MissingTools(missing)));
        }
        self.events.record(&RunEvent::ToolsVerified);
        Ok(())
    }

    fn discover_interfaces(&self) -> Result<Vec<String>, PregameError> {
        let interfaces = match self.runner.list_interfaces().into_result() {
            Ok(stdout) => system::parse_interfaces(&stdout),
            Err(detail) => {
                tracing::error!("Failed to list interfaces: {detail}");
                Vec::new()
            }
        };

        if interfaces.is_empty() {
            return Err(self.fatal(DiscoveryError::NoInterfaces));
        }

        self.events.record(&RunEvent::InterfacesFound {
            interfaces: interfaces.clone(),
        });
        Ok(interfaces)
    }

    fn read_address(&self, interface: &str) -> Result<HardwareAddress, PregameError> {
        let unavailable = || DiscoveryError::AddressUnavailable {
            interface: interface.to_string(),
        };

        let stdout = match self.runner.show_link(interface).into_result() {
            Ok(stdout) => stdout,
            Err(detail) => {
                tracing::error!("Failed to get address for {interface}: {detail}");
                return Err(self.fatal(unavailable()));
            }
        };

        let reported = system::parse_link_address(&stdout).ok_or_else(|| self.fatal(unavailable()))?;

        reported.parse().map_err(|_| {
            self.fatal(DiscoveryError::UnparseableAddress {
                interface: interface.to_string(),
                reported: reported.to_string(),
            })
        })
    }

    fn describe(&self, address: HardwareAddress) -> AddressInfo {
        AddressInfo {
            address,
            vendor: self.vendor_repo.get_vendor(&address),
        }
    }

    /// Records a fatal condition before it is propagated.
    fn fatal<E>(&self, error: E) -> PregameError
    where
        E: Into<PregameError> + std::fmt::Display,
    {
        self.events.record(&RunEvent::Fatal {
            message: error.to_string(),
        });
        error.into()
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
