use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigurationError;
use crate::network::oui::Oui;

pub const DEFAULT_GOOD_OUIS: [Oui; 3] = [
    Oui::new([0x64, 0x1b, 0x2f]),
    Oui::new([0x9c, 0x73, 0xb1]),
    Oui::new([0x38, 0x8a, 0x06]),
];
pub const DEFAULT_BAD_OUIS: [Oui; 2] = [Oui::new([0x9c, 0xef, 0xd5]), Oui::new([0x00, 0xc0, 0xca])];
pub const DEFAULT_RETRY_LIMIT: u32 = 3;
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(2);
pub const REQUIRED_TOOLS: [&str; 3] = ["macchanger", "iw", "ip"];
pub const DEFAULT_LOG_FILE: &str = "pregame.log";

/// Run configuration. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prefixes that make an address acceptable.
    pub good_ouis: Vec<Oui>,
    /// Prefixes known to be flagged. Only used for reporting.
    pub bad_ouis: Vec<Oui>,
    /// Attempts made by the state changer before giving up.
    pub retry_limit: u32,
    /// Fixed delay after each failed attempt.
    pub backoff: Duration,
    /// Executables that must be on `PATH`.
    pub required_tools: Vec<String>,
    /// Append-only diagnostic log.
    pub log_file: PathBuf,
    /// Prefix privileged commands with `sudo`.
    pub use_sudo: bool,
    pub no_banner: bool,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            good_ouis: DEFAULT_GOOD_OUIS.to_vec(),
            bad_ouis: DEFAULT_BAD_OUIS.to_vec(),
            retry_limit: DEFAULT_RETRY_LIMIT,
            backoff: DEFAULT_BACKOFF,
            required_tools: REQUIRED_TOOLS.iter().map(|tool| tool.to_string()).collect(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            use_sudo: true,
            no_banner: false,
            quiet: 0,
        }
    }
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Starts from [`Config::default`] and overrides whatever is set.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    good_ouis: Option<Vec<Oui>>,
    bad_ouis: Option<Vec<Oui>>,
    retry_limit: Option<u32>,
    backoff: Option<Duration>,
    log_file: Option<PathBuf>,
    use_sudo: Option<bool>,
    no_banner: bool,
    quiet: u8,
}

impl ConfigBuilder {
    /// An empty list keeps the defaults.
    pub fn good_ouis(mut self, ouis: Vec<Oui>) -> Self {
        if !ouis.is_empty() {
            self.good_ouis = Some(ouis);
        }
        self
    }

    /// An empty list keeps the defaults.
    pub fn bad_ouis(mut self, ouis: Vec<Oui>) -> Self {
        if !ouis.is_empty() {
            self.bad_ouis = Some(ouis);
        }
        self
    }

    pub fn retry_limit(mut self, retry_limit: u32) -> Self {
        self.retry_limit = Some(retry_limit);
        self
    }

    pub fn backoff(mut self, backoff: Duration) -> Self {
        self.backoff = Some(backoff);
        self
    }

    pub fn log_file(mut self, log_file: impl Into<PathBuf>) -> Self {
        self.log_file = Some(log_file.into());
        self
    }

    pub fn use_sudo(mut self, use_sudo: bool) -> Self {
        self.use_sudo = Some(use_sudo);
        self
    }

    pub fn no_banner(mut self, no_banner: bool) -> Self {
        self.no_banner = no_banner;
        self
    }

    pub fn quiet(mut self, quiet: u8) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn build(self) -> Result<Config, ConfigurationError> {
        let defaults = Config::default();

        let retry_limit = self.retry_limit.unwrap_or(defaults.retry_limit);
        if retry_limit == 0 {
            return Err(ConfigurationError::InvalidRetryLimit);
        }

        let good_ouis = dedup(self.good_ouis.unwrap_or(defaults.good_ouis));
        if good_ouis.is_empty() {
            return Err(ConfigurationError::NoGoodPrefixes);
        }

        Ok(Config {
            good_ouis,
            bad_ouis: dedup(self.bad_ouis.unwrap_or(defaults.bad_ouis)),
            retry_limit,
            backoff: self.backoff.unwrap_or(defaults.backoff),
            required_tools: defaults.required_tools,
            log_file: self.log_file.unwrap_or(defaults.log_file),
            use_sudo: self.use_sudo.unwrap_or(defaults.use_sudo),
            no_banner: self.no_banner,
            quiet: self.quiet,
        })
    }
}

/// Drops repeated prefixes, keeping the first occurrence of each.
fn dedup(mut ouis: Vec<Oui>) -> Vec<Oui> {
    let mut seen = HashSet::new();
    ouis.retain(|oui| seen.insert(*oui));
    ouis
}
