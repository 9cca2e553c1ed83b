//! Interactive prompts.
//!
//! Every prompt re-asks until it gets a usable answer. Parsing is split into pure
//! functions so the loops stay trivial.

use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use pregame_common::error::ValidationError;
use pregame_common::network::mac::HardwareAddress;
use pregame_common::operator::{Operator, Replacement};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    NotANumber,
    OutOfRange,
}

/// Parses a 1-based menu index into a 0-based position in a list of `len` items.
pub fn parse_index(input: &str, len: usize) -> Result<usize, IndexError> {
    let idx: usize = input.trim().parse().map_err(|_| IndexError::NotANumber)?;
    if (1..=len).contains(&idx) {
        Ok(idx - 1)
    } else {
        Err(IndexError::OutOfRange)
    }
}

/// `1` or `2`, anything else is `None`.
pub fn parse_binary_choice(input: &str) -> Option<bool> {
    match input.trim() {
        "1" => Some(true),
        "2" => Some(false),
        _ => None,
    }
}

/// Lower-cases and trims a manual entry before validating it.
pub fn parse_manual_address(input: &str) -> Result<HardwareAddress, ValidationError> {
    input.trim().to_lowercase().parse()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupChoice {
    CreateDirectory,
    Skip,
}

/// Operator backed by a terminal, with optional answers preset from the command line.
pub struct TerminalOperator<R, W> {
    input: R,
    output: W,
    preset_interface: Option<String>,
    preset_replacement: Option<Replacement>,
}

impl<R: BufRead, W: Write> TerminalOperator<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            preset_interface: None,
            preset_replacement: None,
        }
    }

    pub fn with_interface(mut self, interface: Option<String>) -> Self {
        self.preset_interface = interface;
        self
    }

    pub fn with_replacement(mut self, replacement: Option<Replacement>) -> Self {
        self.preset_replacement = replacement;
        self
    }

    pub fn prompt_setup(&mut self) -> anyhow::Result<SetupChoice> {
        loop {
            writeln!(self.output, "\n1. Create new operation directory\n2. Skip to changing MACs")?;
            let answer = self.ask("Select option (1/2): ")?;
            match parse_binary_choice(&answer) {
                Some(true) => return Ok(SetupChoice::CreateDirectory),
                Some(false) => return Ok(SetupChoice::Skip),
                None => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }

    fn ask(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from standard input")?;
        if read == 0 {
            bail!("standard input closed while waiting for an answer");
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Operator for TerminalOperator<R, W> {
    fn select_interface(&mut self, interfaces: &[String]) -> anyhow::Result<String> {
        if let Some(preset) = &self.preset_interface {
            if interfaces.contains(preset) {
                return Ok(preset.clone());
            }
            bail!(
                "interface {preset} is not a wireless interface (found: {})",
                interfaces.join(", ")
            );
        }

        writeln!(self.output, "\nAvailable network interfaces:")?;
        for (i, interface) in interfaces.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, interface)?;
        }

        loop {
            let answer = self.ask("Select interface number: ")?;
            match parse_index(&answer, interfaces.len()) {
                Ok(idx) => return Ok(interfaces[idx].clone()),
                Err(IndexError::OutOfRange) => writeln!(self.output, "Invalid number. Try again.")?,
                Err(IndexError::NotANumber) => writeln!(self.output, "Input must be a number.")?,
            }
        }
    }

    fn choose_replacement(&mut self, _current: &HardwareAddress) -> anyhow::Result<Replacement> {
        if let Some(preset) = self.preset_replacement {
            return Ok(preset);
        }

        loop {
            writeln!(self.output, "1. Generate new good MAC\n2. Enter custom MAC")?;
            let answer = self.ask("Select option (1/2): ")?;
            match parse_binary_choice(&answer) {
                Some(true) => return Ok(Replacement::Generate),
                Some(false) => {
                    let entry = self.ask("Enter MAC (format: xx:xx:xx:xx:xx:xx): ")?;
                    match parse_manual_address(&entry) {
                        Ok(address) => return Ok(Replacement::Manual(address)),
                        Err(_) => writeln!(self.output, "Invalid MAC format.")?,
                    }
                }
                None => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }
}
