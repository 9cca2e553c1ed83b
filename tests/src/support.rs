//! In-memory stand-ins for the system, the clock, and the operator.

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;
use std::time::Duration;

use pregame_common::events::{EventSink, RunEvent};
use pregame_common::network::mac::HardwareAddress;
use pregame_common::operator::{Operator, Replacement};
use pregame_common::system::{CommandOutcome, CommandRunner, Sleeper};
use pregame_common::vendors::VendorRepository;

pub fn mac(s: &str) -> HardwareAddress {
    s.parse().unwrap()
}

#[derive(Default)]
pub struct FakeNetwork {
    pub interfaces: BTreeMap<String, HardwareAddress>,
    pub missing_tools: Vec<String>,
    /// Number of upcoming `set_address` calls that fail.
    pub failing_changes: u32,
    pub up: BTreeMap<String, bool>,
    pub calls: Vec<String>,
}

/// Shared handle so the test can inspect the network after the service took ownership.
#[derive(Clone, Default)]
pub struct FakeRunner(pub Rc<RefCell<FakeNetwork>>);

impl FakeRunner {
    pub fn with_interface(name: &str, address: &str) -> Self {
        let runner = Self::default();
        {
            let mut net = runner.0.borrow_mut();
            net.interfaces.insert(name.to_string(), mac(address));
            net.up.insert(name.to_string(), true);
        }
        runner
    }

    pub fn failing_changes(self, count: u32) -> Self {
        self.0.borrow_mut().failing_changes = count;
        self
    }

    pub fn missing(self, tools: &[&str]) -> Self {
        self.0.borrow_mut().missing_tools = tools.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn address_of(&self, interface: &str) -> Option<HardwareAddress> {
        self.0.borrow().interfaces.get(interface).copied()
    }

    pub fn is_up(&self, interface: &str) -> bool {
        self.0.borrow().up.get(interface).copied().unwrap_or(false)
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.borrow().calls.clone()
    }

    /// Calls that would have modified an interface.
    pub fn mutations(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|call| call.starts_with("down") || call.starts_with("set") || call.starts_with("up"))
            .collect()
    }

    fn log(&self, call: String) {
        self.0.borrow_mut().calls.push(call);
    }
}

impl CommandRunner for FakeRunner {
    fn missing_tools(&self, tools: &[String]) -> Vec<String> {
        let net = self.0.borrow();
        tools.iter().filter(|tool| net.missing_tools.contains(tool)).cloned().collect()
    }

    fn list_interfaces(&self) -> CommandOutcome {
        self.log("list".into());
        let net = self.0.borrow();
        let stdout: String = net
            .interfaces
            .keys()
            .map(|name| format!("phy#0\n\tInterface {name}\n\t\tifindex 3\n\t\ttype managed\n"))
            .collect();
        CommandOutcome::ok(stdout)
    }

    fn show_link(&self, interface: &str) -> CommandOutcome {
        self.log(format!("show {interface}"));
        match self.address_of(interface) {
            Some(address) => CommandOutcome::ok(format!(
                "3: {interface}: <BROADCAST,MULTICAST,UP> mtu 1500 state UP mode DORMANT\n    link/ether {address} brd ff:ff:ff:ff:ff:ff\n"
            )),
            None => CommandOutcome::failed(format!("Device \"{interface}\" does not exist.")),
        }
    }

    fn set_down(&self, interface: &str) -> CommandOutcome {
        self.log(format!("down {interface}"));
        self.0.borrow_mut().up.insert(interface.to_string(), false);
        CommandOutcome::ok("")
    }

    fn set_address(&self, interface: &str, address: &HardwareAddress) -> CommandOutcome {
        self.log(format!("set {interface} {address}"));
        let mut net = self.0.borrow_mut();
        if net.failing_changes > 0 {
            net.failing_changes -= 1;
            return CommandOutcome::failed("[ERROR] Could not change MAC: interface up or insufficient permissions");
        }
        net.interfaces.insert(interface.to_string(), *address);
        CommandOutcome::ok("")
    }

    fn set_up(&self, interface: &str) -> CommandOutcome {
        self.log(format!("up {interface}"));
        self.0.borrow_mut().up.insert(interface.to_string(), true);
        CommandOutcome::ok("")
    }
}

#[derive(Clone, Default)]
pub struct RecordingSleeper(pub Rc<RefCell<Vec<Duration>>>);

impl RecordingSleeper {
    pub fn sleeps(&self) -> Vec<Duration> {
        self.0.borrow().clone()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.0.borrow_mut().push(duration);
    }
}

#[derive(Clone, Default)]
pub struct RecordingSink(pub Rc<RefCell<Vec<RunEvent>>>);

impl RecordingSink {
    pub fn events(&self) -> Vec<RunEvent> {
        self.0.borrow().clone()
    }

    pub fn count(&self, predicate: impl Fn(&RunEvent) -> bool) -> usize {
        self.0.borrow().iter().filter(|event| predicate(event)).count()
    }
}

impl EventSink for RecordingSink {
    fn record(&self, event: &RunEvent) {
        self.0.borrow_mut().push(event.clone());
    }
}

/// Answers prompts from a script. Running out of answers is an error.
pub struct ScriptedOperator {
    pub interface: String,
    pub replacements: VecDeque<Replacement>,
    pub asked_for_replacement: bool,
}

impl ScriptedOperator {
    pub fn new(interface: &str, replacements: Vec<Replacement>) -> Self {
        Self {
            interface: interface.to_string(),
            replacements: replacements.into(),
            asked_for_replacement: false,
        }
    }
}

impl Operator for ScriptedOperator {
    fn select_interface(&mut self, interfaces: &[String]) -> anyhow::Result<String> {
        anyhow::ensure!(
            interfaces.contains(&self.interface),
            "{} not offered",
            self.interface
        );
        Ok(self.interface.clone())
    }

    fn choose_replacement(&mut self, _current: &HardwareAddress) -> anyhow::Result<Replacement> {
        self.asked_for_replacement = true;
        self.replacements
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("no scripted replacement left"))
    }
}

pub struct NoVendors;

impl VendorRepository for NoVendors {
    fn get_vendor(&self, _address: &HardwareAddress) -> Option<String> {
        None
    }
}
