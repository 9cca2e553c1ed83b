use crate::network::mac::HardwareAddress;

/// What to replace a BAD address with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement {
    /// Generate a fresh address on one of the GOOD prefixes.
    Generate,
    /// Use an address the operator supplied. Already validated.
    Manual(HardwareAddress),
}

/// The person (or script) driving a run.
///
/// Implementations own their own re-prompting; the core only ever receives
/// valid answers.
pub trait Operator {
    /// Picks one of `interfaces`, which is never empty.
    fn select_interface(&mut self, interfaces: &[String]) -> anyhow::Result<String>;

    fn choose_replacement(&mut self, current: &HardwareAddress) -> anyhow::Result<Replacement>;
}
