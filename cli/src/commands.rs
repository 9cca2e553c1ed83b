pub mod check;
pub mod generate;
pub mod run;
pub mod setup;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use pregame_common::config::{Config, DEFAULT_BACKOFF, DEFAULT_LOG_FILE, DEFAULT_RETRY_LIMIT};
use pregame_common::error::ConfigurationError;
use pregame_common::network::mac::HardwareAddress;
use pregame_common::network::oui::Oui;

#[derive(Parser)]
#[command(name = "pregame")]
#[command(version, about = "Keeps a wireless interface on a trusted hardware address.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Trusted vendor prefix (xx:xx:xx). Repeat to build the list. Replaces the defaults.
    #[arg(long = "good-oui", value_name = "OUI", global = true)]
    pub good_ouis: Vec<Oui>,

    /// Flagged vendor prefix (xx:xx:xx). Repeat to build the list. Replaces the defaults.
    #[arg(long = "bad-oui", value_name = "OUI", global = true)]
    pub bad_ouis: Vec<Oui>,

    /// Attempts made before giving up on an address change
    #[arg(long, default_value_t = DEFAULT_RETRY_LIMIT, global = true)]
    pub retries: u32,

    /// Seconds to wait after a failed attempt
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_BACKOFF.as_secs(), global = true)]
    pub backoff_secs: u64,

    /// Append diagnostics to this file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOG_FILE, global = true)]
    pub log_file: PathBuf,

    /// Never prefix interface changes with sudo
    #[arg(long, global = true)]
    pub no_sudo: bool,

    /// Hide the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Print less. Repeat for even less.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect an interface and replace a bad address (default)
    #[command(alias = "r")]
    Run(RunArgs),
    /// Classify an address without touching any interface
    #[command(alias = "c")]
    Check { address: HardwareAddress },
    /// Print freshly generated addresses on trusted prefixes
    #[command(alias = "g")]
    Generate {
        /// Use this prefix instead of a random trusted one
        #[arg(long)]
        prefix: Option<Oui>,
        /// How many addresses to print
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
}

#[derive(Args, Default)]
pub struct RunArgs {
    /// Interface to inspect instead of choosing from a list
    #[arg(short, long)]
    pub interface: Option<String>,

    /// Replace a bad address with a generated one without asking
    #[arg(long, conflicts_with = "mac")]
    pub generate: bool,

    /// Replace a bad address with this one without asking
    #[arg(long)]
    pub mac: Option<HardwareAddress>,

    /// Do not offer to create an operation directory
    #[arg(long)]
    pub skip_setup: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Result<Config, ConfigurationError> {
        Config::builder()
            .good_ouis(self.good_ouis.clone())
            .bad_ouis(self.bad_ouis.clone())
            .retry_limit(self.retries)
            .backoff(Duration::from_secs(self.backoff_secs))
            .log_file(self.log_file.clone())
            .use_sudo(!self.no_sudo && !is_root::is_root())
            .no_banner(self.no_banner)
            .quiet(self.quiet)
            .build()
    }
}
