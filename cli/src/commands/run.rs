use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use colored::*;
use pregame_common::config::Config;
use pregame_common::error::PregameError;
use pregame_common::network::oui::Classification;
use pregame_common::operator::Replacement;
use pregame_common::success;
use pregame_core::orchestrator::{AddressInfo, PregameService, RunOutcome};
use pregame_core::system::{SystemRunner, ThreadSleeper};
use pregame_core::vendors::MacOuiRepo;
use tracing::{info, warn};

use crate::commands::RunArgs;
use crate::commands::check::verdict;
use crate::commands::setup;
use crate::mprint;
use crate::terminal::prompt::{SetupChoice, TerminalOperator};
use crate::terminal::spinner::ProgressSink;
use crate::terminal::{colors, print};

/// Exit code when every attempt to change the address failed.
pub const CHANGE_FAILED: u8 = 2;

pub fn run(args: RunArgs, cfg: Config) -> anyhow::Result<ExitCode> {
    let replacement = match (args.generate, args.mac) {
        (_, Some(address)) => Some(Replacement::Manual(address)),
        (true, None) => Some(Replacement::Generate),
        (false, None) => None,
    };

    let mut operator = TerminalOperator::new(io::stdin().lock(), io::stdout().lock())
        .with_interface(args.interface)
        .with_replacement(replacement);

    let quiet = cfg.quiet;
    let use_sudo = cfg.use_sudo;
    let service = PregameService::new(
        cfg,
        Box::new(SystemRunner::new(use_sudo)),
        Box::new(ThreadSleeper),
        Box::new(ProgressSink::new()),
        Box::new(MacOuiRepo),
    );

    let workdir = std::env::current_dir()?;
    let setup_base = (!args.skip_setup).then_some(workdir.as_path());
    execute(&service, &mut operator, setup_base, quiet)
}

/// Prerequisites first, then the optional setup step under `setup_base`, then the run itself.
fn execute<R: BufRead, W: Write>(
    service: &PregameService,
    operator: &mut TerminalOperator<R, W>,
    setup_base: Option<&Path>,
    quiet: u8,
) -> anyhow::Result<ExitCode> {
    if let Err(err) = service.preflight() {
        return exit_code_for(err);
    }

    if let Some(base) = setup_base {
        if operator.prompt_setup()? == SetupChoice::CreateDirectory {
            let dir = setup::create_operation_directory(base)?;
            success!("Created operation directory {}", dir.display());
        }
    }

    print::header("interface check", quiet);
    match service.run_verified(operator) {
        Ok(outcome) => Ok(report(&outcome, quiet)),
        Err(err) => exit_code_for(err),
    }
}

/// Configuration and discovery errors were already reported through the event sink.
fn exit_code_for(err: PregameError) -> anyhow::Result<ExitCode> {
    match err {
        PregameError::Configuration(_) | PregameError::Discovery(_) => Ok(ExitCode::FAILURE),
        PregameError::Unexpected(err) => Err(err),
    }
}

fn report(outcome: &RunOutcome, quiet: u8) -> ExitCode {
    mprint!();
    print::header("summary", quiet);

    match outcome {
        RunOutcome::NoChangeNeeded { interface, current } => {
            print::aligned_line("Interface", interface.as_str());
            address_lines("Current", current);
            print::aligned_line("Verdict", verdict(Classification::Good));
            conclude(&format!("{} already has a good address", interface.bold()), quiet);
            ExitCode::SUCCESS
        }
        RunOutcome::Changed {
            interface,
            previous,
            new,
            attempts,
        } => {
            print::aligned_line("Interface", interface.as_str());
            address_lines("Previous", previous);
            address_lines("New", new);
            print::aligned_line("Attempts", attempts.to_string().color(colors::ACCENT));
            conclude(
                &format!("Address of {} changed to {}", interface.bold(), new.address.to_string().green()),
                quiet,
            );
            ExitCode::SUCCESS
        }
        RunOutcome::ChangeFailed {
            interface,
            previous,
            attempted,
            failure,
        } => {
            print::aligned_line("Interface", interface.as_str());
            address_lines("Current", previous);
            print::aligned_line("Attempted", attempted.to_string().color(colors::MAC_ADDR));
            for attempt in &failure.attempts {
                if let Some(error) = &attempt.error {
                    print::aligned_line(&format!("Attempt {}", attempt.number), error.to_string().color(colors::BAD));
                }
            }
            print::fat_separator();
            warn!("{failure}");
            info!("The interface may have been left down. Check it with `ip link show {interface}`.");
            ExitCode::from(CHANGE_FAILED)
        }
    }
}

fn conclude(msg: &str, quiet: u8) {
    match quiet {
        0 => {
            print::fat_separator();
            print::centerln(msg);
        }
        _ => success!("{msg}"),
    }
}

fn address_lines(key: &str, info: &AddressInfo) {
    print::aligned_line(key, info.address.to_string().color(colors::MAC_ADDR));
    if let Some(vendor) = &info.vendor {
        print::aligned_line("Vendor", vendor.as_str().color(colors::VENDOR));
    }
}
