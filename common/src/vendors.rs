use crate::network::mac::HardwareAddress;

/// Defines the contract for resolving device manufacturers from hardware addresses.
pub trait VendorRepository {
    /// Retrieves the vendor name for a given address.
    ///
    /// # Returns
    /// * `Some(String)` - The name of the vendor if found.
    /// * `None` - If the OUI is unknown.
    fn get_vendor(&self, address: &HardwareAddress) -> Option<String>;
}
