pub mod mac;
pub mod oui;
