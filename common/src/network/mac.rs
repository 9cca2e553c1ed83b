//! # Hardware Addresses
//!
//! Syntax checking and the canonical representation of link-layer (MAC) addresses.
//!
//! The accepted textual form is six two-digit hexadecimal groups joined by a single,
//! uniform separator: either `:` or `-`. Case does not matter. Once parsed, an
//! address always displays in its canonical lowercase, colon-separated form.

use std::fmt;
use std::str::FromStr;

use pnet::util::MacAddr;

use crate::error::ValidationError;
use crate::network::oui::Oui;

const GROUPS: usize = 6;

/// Returns `true` iff `candidate` is six two-digit hex groups joined uniformly by `:` or `-`.
///
/// Mixed separators (`aa:bb-cc:dd:ee:ff`) are rejected. Surrounding whitespace is
/// not trimmed.
pub fn validate(candidate: &str) -> bool {
    let Some(separator) = separator_of(candidate) else {
        return false;
    };

    let groups: Vec<&str> = candidate.split(separator).collect();
    groups.len() == GROUPS && groups.iter().all(|group| is_hex_pair(group))
}

fn separator_of(candidate: &str) -> Option<char> {
    match candidate.as_bytes().get(2) {
        Some(b':') => Some(':'),
        Some(b'-') => Some('-'),
        _ => None,
    }
}

pub(crate) fn is_hex_pair(group: &str) -> bool {
    group.len() == 2 && group.bytes().all(|b| b.is_ascii_hexdigit())
}

/// A validated hardware address.
///
/// The only way to obtain one from text is [`FromStr`], which runs [`validate`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HardwareAddress(MacAddr);

impl HardwareAddress {
    pub fn new(octets: [u8; 6]) -> Self {
        let [a, b, c, d, e, f] = octets;
        Self(MacAddr::new(a, b, c, d, e, f))
    }

    /// Builds an address from a vendor prefix and a device-specific suffix.
    pub fn from_parts(oui: Oui, suffix: [u8; 3]) -> Self {
        let [a, b, c] = oui.octets();
        let [d, e, f] = suffix;
        Self::new([a, b, c, d, e, f])
    }

    pub fn octets(&self) -> [u8; 6] {
        let MacAddr(a, b, c, d, e, f) = self.0;
        [a, b, c, d, e, f]
    }

    /// The **Organizationally Unique Identifier**, i.e. the first three byte-pairs.
    pub fn oui(&self) -> Oui {
        let [a, b, c, ..] = self.octets();
        Oui::new([a, b, c])
    }
}

impl fmt::Display for HardwareAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pnet renders lowercase, colon separated
        write!(f, "{}", self.0)
    }
}

impl FromStr for HardwareAddress {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ValidationError::MalformedAddress(s.to_string());

        let separator = separator_of(s).ok_or_else(malformed)?;
        if !validate(s) {
            return Err(malformed());
        }

        let mut octets = [0u8; GROUPS];
        for (octet, group) in octets.iter_mut().zip(s.split(separator)) {
            *octet = u8::from_str_radix(group, 16).map_err(|_| malformed())?;
        }

        Ok(Self::new(octets))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
