//! OS-facing implementations: external commands and real sleeping.
//!
//! | action | command |
//! |--------|---------|
//! | list interfaces | `iw dev` |
//! | read address | `ip link show <iface>` |
//! | down / up | `ip link set dev <iface> down\|up` |
//! | change | `macchanger -m <addr> <iface>` |
//!
//! Mutating commands are prefixed with `sudo` unless disabled.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::thread;
use std::time::Duration;

use tracing::debug;

use pregame_common::network::mac::HardwareAddress;
use pregame_common::system::{CommandOutcome, CommandRunner, Sleeper};

pub struct SystemRunner {
    use_sudo: bool,
}

impl SystemRunner {
    pub fn new(use_sudo: bool) -> Self {
        Self { use_sudo }
    }

    fn run(&self, program: &str, args: &[&str], privileged: bool) -> CommandOutcome {
        let mut command = if privileged && self.use_sudo {
            let mut sudo = Command::new("sudo");
            sudo.arg(program);
            sudo
        } else {
            Command::new(program)
        };
        command.args(args);

        debug!("Running {program} {}", args.join(" "));

        match command.output() {
            Ok(output) if output.status.success() => {
                CommandOutcome::ok(String::from_utf8_lossy(&output.stdout))
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
                if stderr.is_empty() {
                    CommandOutcome::failed(format!("{program} exited with {}", output.status))
                } else {
                    CommandOutcome::failed(format!("{program} exited with {}: {stderr}", output.status))
                }
            }
            Err(e) => CommandOutcome::failed(format!("failed to run {program}: {e}")),
        }
    }
}

impl CommandRunner for SystemRunner {
    fn missing_tools(&self, tools: &[String]) -> Vec<String> {
        let sudo = self.use_sudo.then(|| "sudo".to_string());
        tools
            .iter()
            .cloned()
            .chain(sudo)
            .filter(|tool| find_in_path(tool).is_none())
            .collect()
    }

    fn list_interfaces(&self) -> CommandOutcome {
        self.run("iw", &["dev"], false)
    }

    fn show_link(&self, interface: &str) -> CommandOutcome {
        self.run("ip", &["link", "show", interface], false)
    }

    fn set_down(&self, interface: &str) -> CommandOutcome {
        self.run("ip", &["link", "set", "dev", interface, "down"], true)
    }

    fn set_address(&self, interface: &str, address: &HardwareAddress) -> CommandOutcome {
        let address = address.to_string();
        self.run("macchanger", &["-m", &address, interface], true)
    }

    fn set_up(&self, interface: &str) -> CommandOutcome {
        self.run("ip", &["link", "set", "dev", interface, "up"], true)
    }
}

pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Interface names from `iw dev` output (`Interface <name>` lines).
pub fn parse_interfaces(iw_dev: &str) -> Vec<String> {
    iw_dev
        .lines()
        .map(str::trim_start)
        .filter(|line| line.starts_with("Interface"))
        .filter_map(|line| line.split_whitespace().nth(1))
        .map(str::to_string)
        .collect()
}

/// The address on the `link/ether` line of `ip link show` output.
pub fn parse_link_address(ip_link: &str) -> Option<&str> {
    ip_link
        .lines()
        .find_map(|line| line.split_once("link/ether "))
        .and_then(|(_, rest)| rest.split_whitespace().next())
}

/// Locates an executable named `tool` in one of the `PATH` directories.
pub fn find_in_path(tool: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(tool))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
