use std::process::ExitCode;

use colored::*;
use pregame_common::config::Config;
use pregame_common::network::mac::HardwareAddress;
use pregame_common::network::oui::Classification;
use pregame_common::vendors::VendorRepository;
use pregame_core::classifier;

use crate::terminal::{colors, print};

/// Exit code of `check` for a BAD address. Kept apart from fatal errors (1) and
/// change failures (2).
pub const BAD_ADDRESS: u8 = 3;

/// Classifies `address` against the configured prefixes. Never touches an interface.
pub fn check(address: HardwareAddress, cfg: &Config, vendors: &dyn VendorRepository) -> Classification {
    let classification = classifier::classify(&address, &cfg.good_ouis);
    let flagged = classifier::is_flagged(&address, &cfg.bad_ouis);

    print::header("address check", cfg.quiet);
    print::aligned_line("Address", address.to_string().color(colors::MAC_ADDR));
    print::aligned_line("Prefix", address.oui().to_string());
    print::aligned_line(
        "Vendor",
        match vendors.get_vendor(&address) {
            Some(vendor) => vendor.color(colors::VENDOR),
            None => "unknown".dimmed(),
        },
    );
    print::aligned_line("Verdict", verdict(classification));
    if flagged {
        print::aligned_line("Flagged", "yes, known bad prefix".color(colors::BAD).bold());
    }

    classification
}

pub fn verdict(classification: Classification) -> ColoredString {
    match classification {
        Classification::Good => classification.to_string().color(colors::GOOD).bold(),
        Classification::Bad => classification.to_string().color(colors::BAD).bold(),
    }
}

pub fn exit_code(classification: Classification) -> ExitCode {
    match classification {
        Classification::Good => ExitCode::SUCCESS,
        Classification::Bad => ExitCode::from(BAD_ADDRESS),
    }
}
