//! Replacement addresses.
//!
//! The suffix is three uniformly random bytes, i.e. six independent lowercase hex
//! digits. Callers pass the RNG so tests can seed it; production uses `rand::rng()`.

use rand::Rng;
use rand::seq::IndexedRandom;

use pregame_common::error::ConfigurationError;
use pregame_common::network::mac::HardwareAddress;
use pregame_common::network::oui::Oui;

/// `prefix` followed by a fresh random suffix.
pub fn generate<R: Rng + ?Sized>(prefix: Oui, rng: &mut R) -> HardwareAddress {
    let mut suffix = [0u8; 3];
    rng.fill(&mut suffix);
    HardwareAddress::from_parts(prefix, suffix)
}

/// Picks one of `good_prefixes` uniformly at random and generates on it.
pub fn generate_good<R: Rng + ?Sized>(
    good_prefixes: &[Oui],
    rng: &mut R,
) -> Result<HardwareAddress, ConfigurationError> {
    let prefix = *good_prefixes
        .choose(rng)
        .ok_or(ConfigurationError::NoGoodPrefixes)?;
    Ok(generate(prefix, rng))
}
