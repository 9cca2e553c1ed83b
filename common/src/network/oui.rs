use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::network::mac::is_hex_pair;

/// A vendor prefix (`xx:xx:xx`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Oui([u8; 3]);

impl Oui {
    pub const fn new(octets: [u8; 3]) -> Self {
        Self(octets)
    }

    pub fn octets(&self) -> [u8; 3] {
        self.0
    }
}

impl fmt::Display for Oui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}")
    }
}

impl FromStr for Oui {
    type Err = ValidationError;

    /// Accepts three hex pairs joined uniformly by `:` or `-`, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ValidationError::MalformedPrefix(s.to_string());

        let separator = match s.as_bytes().get(2) {
            Some(b':') => ':',
            Some(b'-') => '-',
            _ => return Err(malformed()),
        };

        let groups: Vec<&str> = s.split(separator).collect();
        if groups.len() != 3 || !groups.iter().all(|group| is_hex_pair(group)) {
            return Err(malformed());
        }

        let mut octets = [0u8; 3];
        for (octet, group) in octets.iter_mut().zip(groups) {
            *octet = u8::from_str_radix(group, 16).map_err(|_| malformed())?;
        }
        Ok(Self(octets))
    }
}

/// Result of checking an address against the GOOD prefix list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Good,
    Bad,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Good => write!(f, "GOOD"),
            Classification::Bad => write!(f, "BAD"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays_lowercase() {
        let oui: Oui = "9C:73:B1".parse().unwrap();
        assert_eq!(oui.to_string(), "9c:73:b1");
        assert_eq!(oui.octets(), [0x9c, 0x73, 0xb1]);
    }

    #[test]
    fn accepts_dash_separator() {
        let oui: Oui = "00-c0-ca".parse().unwrap();
        assert_eq!(oui, Oui::new([0x00, 0xc0, 0xca]));
    }

    #[test]
    fn rejects_malformed_prefixes() {
        for input in ["", "9c:73", "9c:73:b1:00", "9c:73-b1", "9c:7:b1", "gg:73:b1"] {
            assert!(input.parse::<Oui>().is_err(), "accepted {input:?}");
        }
    }
}
