use std::time::Duration;

use crate::network::mac::HardwareAddress;

/// Structured result of one external command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutcome {
    pub success: bool,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error, or the reason the command could not be started.
    pub diagnostic: String,
}

impl CommandOutcome {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
            diagnostic: String::new(),
        }
    }

    pub fn failed(diagnostic: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            diagnostic: diagnostic.into(),
        }
    }

    /// Stdout on success, the diagnostic otherwise.
    pub fn into_result(self) -> Result<String, String> {
        if self.success {
            Ok(self.stdout)
        } else {
            Err(self.diagnostic)
        }
    }
}

/// Capability interface over the external utilities the tool drives.
///
/// One method per external action. None of them panic or return raw exit codes:
/// every failure is folded into a [`CommandOutcome`].
pub trait CommandRunner {
    /// Returns the subset of `tools` that cannot be found.
    fn missing_tools(&self, tools: &[String]) -> Vec<String>;

    /// Raw listing of wireless interfaces.
    fn list_interfaces(&self) -> CommandOutcome;

    /// Raw link information for `interface`.
    fn show_link(&self, interface: &str) -> CommandOutcome;

    fn set_down(&self, interface: &str) -> CommandOutcome;

    fn set_address(&self, interface: &str, address: &HardwareAddress) -> CommandOutcome;

    fn set_up(&self, interface: &str) -> CommandOutcome;
}

/// Blocks the caller between retry attempts.
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}
