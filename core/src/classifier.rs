use pregame_common::network::mac::HardwareAddress;
use pregame_common::network::oui::{Classification, Oui};

/// GOOD iff the address's vendor prefix appears in `good_prefixes`.
///
/// Parsing already lower-cased and canonicalised the address, so comparing
/// prefixes is an exact match on `xx:xx:xx`.
pub fn classify(address: &HardwareAddress, good_prefixes: &[Oui]) -> Classification {
    if good_prefixes.contains(&address.oui()) {
        Classification::Good
    } else {
        Classification::Bad
    }
}

/// Whether the prefix is explicitly on the BAD list.
pub fn is_flagged(address: &HardwareAddress, bad_prefixes: &[Oui]) -> bool {
    bad_prefixes.contains(&address.oui())
}
