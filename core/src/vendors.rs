use std::sync::OnceLock;

use mac_oui::Oui;
use tracing::warn;

use pregame_common::network::mac::HardwareAddress;
use pregame_common::vendors::VendorRepository;

static OUI_DB: OnceLock<Option<Oui>> = OnceLock::new();

/// Loads the bundled **Organizationally Unique Identifier** database on first use.
fn get_oui_db() -> Option<&'static Oui> {
    OUI_DB
        .get_or_init(|| match Oui::default() {
            Ok(db) => Some(db),
            Err(e) => {
                warn!("Vendor lookups disabled, failed to load OUI database: {e}");
                None
            }
        })
        .as_ref()
}

pub struct MacOuiRepo;

impl VendorRepository for MacOuiRepo {
    fn get_vendor(&self, address: &HardwareAddress) -> Option<String> {
        let db = get_oui_db()?;
        match db.lookup_by_mac(&address.to_string()) {
            Ok(Some(entry)) => Some(entry.company_name.clone()),
            _ => None,
        }
    }
}
